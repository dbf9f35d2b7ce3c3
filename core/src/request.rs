// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Pure construction of the requests a form sends.

use std::fmt;

use chrono::TimeZone;
use teamup_client::{EventBody, EventId};

use crate::form::FormState;
use crate::timestamp::to_interchange;

/// The write actions an event form offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormAction {
    /// Create a new event from the form.
    Create,
    /// Replace an existing event with the form.
    Update,
    /// Delete an existing event.
    Delete,
}

impl FormAction {
    /// Message shown to the user when the action fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            FormAction::Create | FormAction::Update => "Please check your form again.",
            FormAction::Delete => "Form Delete unsuccessful.",
        }
    }
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormAction::Create => write!(f, "create"),
            FormAction::Update => write!(f, "update"),
            FormAction::Delete => write!(f, "delete"),
        }
    }
}

/// One outbound write request, fully determined by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventRequest {
    /// `POST /users/events/create`
    Create(EventBody),
    /// `PATCH /users/events/{id}/update`
    Update(EventId, EventBody),
    /// `DELETE /users/events/{id}/delete`
    Delete(EventId),
}

impl EventRequest {
    /// The action this request performs.
    #[must_use]
    pub const fn action(&self) -> FormAction {
        match self {
            EventRequest::Create(_) => FormAction::Create,
            EventRequest::Update(..) => FormAction::Update,
            EventRequest::Delete(_) => FormAction::Delete,
        }
    }

    /// The request body, if the request has one.
    #[must_use]
    pub const fn body(&self) -> Option<&EventBody> {
        match self {
            EventRequest::Create(body) | EventRequest::Update(_, body) => Some(body),
            EventRequest::Delete(_) => None,
        }
    }
}

/// Builds the create/update body from the form.
///
/// `from`/`to` are converted to interchange timestamps; blank or malformed
/// values are sent as `null`.
pub fn event_body<Tz: TimeZone>(form: &FormState, tz: &Tz) -> EventBody {
    EventBody {
        event_name: form.event_name().to_string(),
        from: interchange_or_warn(tz, "from", form.from_date()),
        to: interchange_or_warn(tz, "to", form.to_date()),
        location: form.location().to_string(),
        description: form.description().to_string(),
    }
}

/// Request for the create action.
pub fn create_request<Tz: TimeZone>(form: &FormState, tz: &Tz) -> EventRequest {
    EventRequest::Create(event_body(form, tz))
}

/// Request for the update action.
pub fn update_request<Tz: TimeZone>(form: &FormState, id: &EventId, tz: &Tz) -> EventRequest {
    EventRequest::Update(id.clone(), event_body(form, tz))
}

/// Request for the delete action.
pub fn delete_request(id: &EventId) -> EventRequest {
    EventRequest::Delete(id.clone())
}

fn interchange_or_warn<Tz: TimeZone>(tz: &Tz, field: &str, value: &str) -> Option<String> {
    let converted = to_interchange(tz, value);
    if converted.is_none() && !value.trim().is_empty() {
        tracing::warn!(field, value, "unrecognized local time, sending null");
    }
    converted
}
