// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::TimeZone;
use teamup_client::EventId;

use crate::api::EventsApi;
use crate::error::LoadError;
use crate::form::FormState;

/// What happened when the form was mounted.
#[derive(Debug)]
pub enum LoadOutcome {
    /// No event id was given; the form starts empty for creation.
    NotRequested,
    /// The event was loaded into the form.
    Loaded,
    /// The load failed and the form is empty.
    Failed(LoadError),
}

impl LoadOutcome {
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, LoadOutcome::Failed(_))
    }
}

/// Fetches an existing event and renders it as form values in `tz`.
///
/// # Errors
///
/// Returns an error if the event cannot be fetched.
pub async fn load_event<A, Tz>(api: &A, id: &EventId, tz: &Tz) -> Result<FormState, LoadError>
where
    A: EventsApi + ?Sized,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let event = api.get_event(id).await.map_err(|source| LoadError {
        id: id.clone(),
        source,
    })?;
    Ok(FormState::from_event(&event, tz))
}
