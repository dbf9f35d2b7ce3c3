// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use teamup_core::{Event, EventId, FormState, Location};

/// The event used throughout the scenarios, as the backend stores it.
#[must_use]
pub fn standup_event() -> Event {
    Event {
        id: Some(EventId::from("65a1")),
        event_name: "Standup".to_string(),
        description: Some("daily".to_string()),
        from: Some(Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()),
        to: Some(Utc.with_ymd_and_hms(2024, 1, 1, 9, 15, 0).unwrap()),
        location: Some(Location {
            name: "Room A".to_string(),
        }),
    }
}

/// The `GET /users/events/{id}` response body for [`standup_event`].
#[must_use]
pub fn standup_json() -> Value {
    json!([{
        "_id": "65a1",
        "event_name": "Standup",
        "from": "2024-01-01T09:00:00Z",
        "to": "2024-01-01T09:15:00Z",
        "location": { "name": "Room A" },
        "description": "daily"
    }])
}

/// A form filled in by hand, with local times in UTC.
#[must_use]
pub fn filled_form(event_name: &str, description: &str) -> FormState {
    let mut form = FormState::new();
    form.set_event_name(event_name);
    form.set_description(description);
    form.set_from_date("2024-03-10T14:30");
    form.set_to_date("2024-03-10T15:00");
    form.set_location("Cafe");
    form
}
