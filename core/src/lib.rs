// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Event form logic: field state, request building, loading and the
//! create/update/delete workflow.

mod api;
mod dispatcher;
mod error;
mod form;
mod loader;
mod navigation;
mod request;
mod session;
mod timestamp;

pub use crate::api::EventsApi;
pub use crate::dispatcher::{MutationDispatcher, SubmitOutcome};
pub use crate::error::{LoadError, MutationError};
pub use crate::form::{Field, FormState};
pub use crate::loader::{LoadOutcome, load_event};
pub use crate::navigation::{EVENTS_ROUTE, Navigator, Notifier};
pub use crate::request::{
    EventRequest, FormAction, create_request, delete_request, event_body, update_request,
};
pub use crate::session::{EventFormSession, Phase};
pub use crate::timestamp::{
    LOCAL_INPUT_FORMAT, from_local_datetime, parse_local_input, to_interchange, to_local_input,
};

/// The name of the application.
pub const APP_NAME: &str = "teamup";

pub use teamup_client::{
    ApiConfig, ClientError, CredentialProvider, Credentials, Event, EventBody, EventId,
    EventsClient, Location, StaticCredentials,
};
