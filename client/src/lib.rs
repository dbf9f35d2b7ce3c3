// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client for the TeamUp events API.
//!
//! The API exposes a single event resource under `/users/events`. Every request
//! carries the caller's credential headers, which come from a
//! [`CredentialProvider`] so the client never reads ambient storage itself.

#![warn(
    trivial_casts,
    trivial_numeric_casts,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    clippy::dbg_macro,
    clippy::indexing_slicing,
    clippy::pedantic
)]
#![allow(clippy::missing_errors_doc)]

mod client;
mod config;
mod credential;
mod error;
mod http;
mod types;

pub use crate::client::EventsClient;
pub use crate::config::{ApiConfig, DEFAULT_BASE_URL};
pub use crate::credential::{CredentialProvider, Credentials, StaticCredentials};
pub use crate::error::ClientError;
pub use crate::types::{Event, EventBody, EventId, Location};
