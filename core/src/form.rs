// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::TimeZone;
use teamup_client::Event;

use crate::timestamp::to_local_input;

/// The five editable fields of the event form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Event name.
    EventName,
    /// Free-text description.
    Description,
    /// Start, as minute-precision local time.
    From,
    /// End, as minute-precision local time.
    To,
    /// Location name.
    Location,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 5] = [
        Field::EventName,
        Field::Description,
        Field::From,
        Field::To,
        Field::Location,
    ];

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Field::EventName => "Event Name",
            Field::Description => "Event Description",
            Field::From => "Event Start",
            Field::To => "Event End",
            Field::Location => "Event Location",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Local, transient state of one mounted event form.
///
/// `api_status` records whether a write of this session has succeeded. It is
/// `false` until the first successful create, update or delete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    event_name: String,
    description: String,
    from: String,
    to: String,
    location: String,
    api_status: bool,
}

impl FormState {
    /// An empty form, as on mount.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the field values shown for a loaded event.
    ///
    /// Timestamps are rendered as minute-precision local time in `tz`;
    /// missing values become empty fields.
    #[must_use]
    pub fn from_event<Tz: TimeZone>(event: &Event, tz: &Tz) -> Self
    where
        Tz::Offset: fmt::Display,
    {
        Self {
            event_name: event.event_name.clone(),
            description: event.description.clone().unwrap_or_default(),
            from: event
                .from
                .as_ref()
                .map(|a| to_local_input(tz, a))
                .unwrap_or_default(),
            to: event
                .to
                .as_ref()
                .map(|a| to_local_input(tz, a))
                .unwrap_or_default(),
            location: event
                .location
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_default(),
            api_status: false,
        }
    }

    /// Overwrites every field value with `other`'s, keeping `api_status`.
    pub fn overwrite_fields(&mut self, other: FormState) {
        let api_status = self.api_status;
        *self = other;
        self.api_status = api_status;
    }

    /// Returns the value of a field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::EventName => &self.event_name,
            Field::Description => &self.description,
            Field::From => &self.from,
            Field::To => &self.to,
            Field::Location => &self.location,
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::EventName => self.event_name = value,
            Field::Description => self.description = value,
            Field::From => self.from = value,
            Field::To => self.to = value,
            Field::Location => self.location = value,
        }
    }

    pub fn event_name(&self) -> &str {
        &self.event_name
    }

    pub fn set_event_name(&mut self, value: impl Into<String>) {
        self.event_name = value.into();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn from_date(&self) -> &str {
        &self.from
    }

    pub fn set_from_date(&mut self, value: impl Into<String>) {
        self.from = value.into();
    }

    pub fn to_date(&self) -> &str {
        &self.to
    }

    pub fn set_to_date(&mut self, value: impl Into<String>) {
        self.to = value.into();
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.location = value.into();
    }

    /// Whether a write of this session has completed successfully.
    #[must_use]
    pub const fn api_status(&self) -> bool {
        self.api_status
    }

    pub fn set_api_status(&mut self, value: bool) {
        self.api_status = value;
    }
}
