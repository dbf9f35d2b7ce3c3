// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The lifecycle of one mounted event form.

use std::fmt;

use chrono::TimeZone;
use teamup_client::EventId;

use crate::api::EventsApi;
use crate::dispatcher::{MutationDispatcher, SubmitOutcome};
use crate::error::MutationError;
use crate::form::{Field, FormState};
use crate::loader::{LoadOutcome, load_event};
use crate::navigation::{Navigator, Notifier};
use crate::request::FormAction;

const CREATE_ACTIONS: &[FormAction] = &[FormAction::Create];
const EDIT_ACTIONS: &[FormAction] = &[FormAction::Update, FormAction::Delete];

/// Where a form is in its lifecycle.
///
/// ```text
/// Empty -> Loading (editing only) -> Populated -> Creating | Updating | Deleting -> Done
/// ```
///
/// Edits keep the form `Populated`; a failed write returns to `Populated`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    Loading,
    Populated,
    Creating,
    Updating,
    Deleting,
    /// Navigated away; the form accepts nothing more.
    Done,
}

/// One mounted event form: its state, the event it edits and the collaborators
/// it reports to.
///
/// Writes take `&mut self`, so a form never has two requests in flight.
#[derive(Debug)]
pub struct EventFormSession<A, N, T, Tz: TimeZone> {
    dispatcher: MutationDispatcher<A, N, T>,
    tz: Tz,
    event_id: Option<EventId>,
    form: FormState,
    phase: Phase,
}

impl<A, N, T, Tz> EventFormSession<A, N, T, Tz>
where
    A: EventsApi,
    N: Navigator,
    T: Notifier,
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    /// Mounts a form, loading `event_id` into it when given.
    ///
    /// A failed load leaves the form empty and is reported through the
    /// returned [`LoadOutcome`]. `api_status` is reset to `false` either way.
    pub async fn mount(
        api: A,
        navigator: N,
        notifier: T,
        tz: Tz,
        event_id: Option<EventId>,
    ) -> (Self, LoadOutcome) {
        let mut session = Self {
            dispatcher: MutationDispatcher::new(api, navigator, notifier),
            tz,
            event_id,
            form: FormState::new(),
            phase: Phase::Empty,
        };

        let outcome = match session.event_id.clone() {
            Some(id) => {
                session.phase = Phase::Loading;
                match load_event(session.dispatcher.api(), &id, &session.tz).await {
                    Ok(form) => {
                        session.form.overwrite_fields(form);
                        LoadOutcome::Loaded
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "event could not be loaded, form left empty");
                        LoadOutcome::Failed(e)
                    }
                }
            }
            None => LoadOutcome::NotRequested,
        };

        session.form.set_api_status(false);
        session.phase = Phase::Populated;
        (session, outcome)
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// The event being edited, `None` when creating.
    pub const fn event_id(&self) -> Option<&EventId> {
        self.event_id.as_ref()
    }

    pub const fn form(&self) -> &FormState {
        &self.form
    }

    pub const fn timezone(&self) -> &Tz {
        &self.tz
    }

    pub fn notifier(&self) -> &T {
        self.dispatcher.notifier()
    }

    /// Consumes the session, returning the last form state.
    pub fn into_form(self) -> FormState {
        self.form
    }

    /// Sets one field. Returns false once the form is done.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> bool {
        if self.is_done() {
            return false;
        }
        self.form.set(field, value);
        true
    }

    /// Replaces all field values at once, e.g. from an editor.
    pub fn replace_fields(&mut self, form: FormState) -> bool {
        if self.is_done() {
            return false;
        }
        self.form.overwrite_fields(form);
        true
    }

    /// Actions offered by the form: create for a new event, update and delete
    /// for an existing one, nothing once done.
    pub fn actions(&self) -> &'static [FormAction] {
        match (self.phase, &self.event_id) {
            (Phase::Done, _) => &[],
            (_, None) => CREATE_ACTIONS,
            (_, Some(_)) => EDIT_ACTIONS,
        }
    }

    /// Runs one of the offered actions.
    ///
    /// # Errors
    ///
    /// Returns [`MutationError::Unavailable`] if the action is not offered, or
    /// [`MutationError::Rejected`] if the request failed.
    pub async fn perform(&mut self, action: FormAction) -> Result<(), MutationError> {
        if !self.actions().contains(&action) {
            return Err(MutationError::Unavailable(action));
        }

        let before = self.phase;
        self.phase = match action {
            FormAction::Create => Phase::Creating,
            FormAction::Update => Phase::Updating,
            FormAction::Delete => Phase::Deleting,
        };

        let result = match (action, &self.event_id) {
            (FormAction::Create, _) => {
                self.dispatcher
                    .create_event(&mut self.form, &self.tz)
                    .await
            }
            (FormAction::Update, Some(id)) => {
                self.dispatcher
                    .update_event(&mut self.form, id, &self.tz)
                    .await
            }
            (FormAction::Delete, Some(id)) => {
                self.dispatcher.delete_event(&mut self.form, id).await
            }
            (_, None) => Err(MutationError::Unavailable(action)),
        };

        self.phase = match result {
            Ok(()) => Phase::Done,
            Err(_) => before,
        };
        result
    }

    /// Creates a new event from the form.
    ///
    /// # Errors
    ///
    /// See [`Self::perform`].
    pub async fn create(&mut self) -> Result<(), MutationError> {
        self.perform(FormAction::Create).await
    }

    /// Updates the edited event from the form.
    ///
    /// # Errors
    ///
    /// See [`Self::perform`].
    pub async fn update(&mut self) -> Result<(), MutationError> {
        self.perform(FormAction::Update).await
    }

    /// Deletes the edited event.
    ///
    /// # Errors
    ///
    /// See [`Self::perform`].
    pub async fn delete(&mut self) -> Result<(), MutationError> {
        self.perform(FormAction::Delete).await
    }

    /// Native form submission, distinct from the action triggers.
    ///
    /// The gate itself is [`MutationDispatcher::submit`]. A successful write
    /// of this session already navigates and ends it, so here the gate stays
    /// closed: before a write nothing has succeeded, after one the form is done.
    pub fn submit(&self) -> SubmitOutcome {
        if self.is_done() {
            return SubmitOutcome::Blocked;
        }
        self.dispatcher.submit(&self.form)
    }
}
