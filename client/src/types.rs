// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, Utc};

/// Opaque identifier of an existing event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Creates a new `EventId` from a string.
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for EventId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for EventId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EventId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// An event as returned by `GET /users/events/{id}`.
///
/// Fields the backend may omit are defaulted rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Identifier, `_id` on the wire.
    #[serde(rename = "_id", alias = "id", default)]
    pub id: Option<EventId>,

    /// Event name.
    #[serde(default)]
    pub event_name: String,

    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,

    /// Start instant.
    #[serde(default)]
    pub from: Option<DateTime<Utc>>,

    /// End instant.
    #[serde(default)]
    pub to: Option<DateTime<Utc>>,

    /// Where the event takes place.
    #[serde(default)]
    pub location: Option<Location>,
}

/// Event location as stored by the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Location {
    /// Display name of the location.
    #[serde(default)]
    pub name: String,
}

/// Body of a create or update request.
///
/// `from`/`to` serialize as `null` when absent. `description` is always sent,
/// even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct EventBody {
    /// Event name.
    pub event_name: String,
    /// Start instant, ISO-8601 UTC with millisecond precision.
    pub from: Option<String>,
    /// End instant, ISO-8601 UTC with millisecond precision.
    pub to: Option<String>,
    /// Location name.
    pub location: String,
    /// Description, `""` when empty.
    pub description: String,
}
