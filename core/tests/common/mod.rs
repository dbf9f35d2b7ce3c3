// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - An in-memory events API
//! - Navigator and notifier recorders

mod fake_api;
mod fixtures;
mod recorders;

#[allow(unused_imports)]
pub use fake_api::FakeApi;
#[allow(unused_imports)]
pub use fixtures::{filled_form, standup_event, standup_json};
#[allow(unused_imports)]
pub use recorders::{RecordingNavigator, RecordingNotifier};
