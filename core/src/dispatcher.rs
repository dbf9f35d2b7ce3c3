// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Sends write requests and reacts to their outcome.

use chrono::TimeZone;
use teamup_client::EventId;

use crate::api::EventsApi;
use crate::error::MutationError;
use crate::form::FormState;
use crate::navigation::{EVENTS_ROUTE, Navigator, Notifier};
use crate::request::{EventRequest, create_request, delete_request, update_request};

/// Result of a native form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No write has succeeded yet; navigation is blocked.
    Blocked,
    /// Navigated to the events listing.
    Navigated,
}

/// Turns one user action into one request, then navigates away on success or
/// notifies on failure.
///
/// A failed request leaves the form untouched so the user can correct it.
/// Nothing is retried.
#[derive(Debug)]
pub struct MutationDispatcher<A, N, T> {
    api: A,
    navigator: N,
    notifier: T,
}

impl<A, N, T> MutationDispatcher<A, N, T>
where
    A: EventsApi,
    N: Navigator,
    T: Notifier,
{
    pub const fn new(api: A, navigator: N, notifier: T) -> Self {
        Self {
            api,
            navigator,
            notifier,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn notifier(&self) -> &T {
        &self.notifier
    }

    /// Creates a new event from the form.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the user has been notified.
    pub async fn create_event<Tz: TimeZone>(
        &self,
        form: &mut FormState,
        tz: &Tz,
    ) -> Result<(), MutationError> {
        let request = create_request(form, tz);
        self.dispatch(form, request).await
    }

    /// Replaces the event `id` with the form.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the user has been notified.
    pub async fn update_event<Tz: TimeZone>(
        &self,
        form: &mut FormState,
        id: &EventId,
        tz: &Tz,
    ) -> Result<(), MutationError> {
        let request = update_request(form, id, tz);
        self.dispatch(form, request).await
    }

    /// Deletes the event `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails; the user has been notified.
    pub async fn delete_event(
        &self,
        form: &mut FormState,
        id: &EventId,
    ) -> Result<(), MutationError> {
        self.dispatch(form, delete_request(id)).await
    }

    /// Handles a submission that did not come from an action trigger.
    ///
    /// Navigation only happens once a write of this session has succeeded.
    pub fn submit(&self, form: &FormState) -> SubmitOutcome {
        if !form.api_status() {
            tracing::debug!("form submitted before any successful write, ignoring");
            return SubmitOutcome::Blocked;
        }

        self.navigate();
        SubmitOutcome::Navigated
    }

    async fn dispatch(
        &self,
        form: &mut FormState,
        request: EventRequest,
    ) -> Result<(), MutationError> {
        let action = request.action();
        match self.api.send(&request).await {
            Ok(()) => {
                form.set_api_status(true);
                tracing::info!(%action, "event write succeeded");
                self.navigate();
                Ok(())
            }
            Err(source) => {
                tracing::debug!(%action, error = %source, "event write failed");
                self.notifier.notify(action.failure_message());
                Err(MutationError::Rejected { action, source })
            }
        }
    }

    fn navigate(&self) {
        tracing::info!(route = EVENTS_ROUTE, "navigating");
        self.navigator.navigate(EVENTS_ROUTE);
    }
}
