// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use teamup_client::{ClientError, EventId};

use crate::request::FormAction;

/// Why a create, update or delete did not complete.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// The request was sent and failed.
    #[error("failed to {action} event: {source}")]
    Rejected {
        /// The attempted action.
        action: FormAction,
        /// The transport or server error.
        #[source]
        source: ClientError,
    },

    /// The action is not offered by the form in its current state.
    #[error("cannot {0} event from this form")]
    Unavailable(FormAction),
}

impl MutationError {
    /// The attempted action.
    #[must_use]
    pub const fn action(&self) -> FormAction {
        match self {
            MutationError::Rejected { action, .. } | MutationError::Unavailable(action) => *action,
        }
    }

    /// The fixed message shown to the user for this failure.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        self.action().failure_message()
    }
}

/// Loading an existing event failed; the form stays empty.
#[derive(Debug, thiserror::Error)]
#[error("failed to load event {id}: {source}")]
pub struct LoadError {
    /// The event that was requested.
    pub id: EventId,
    /// The transport or server error.
    #[source]
    pub source: ClientError,
}

impl LoadError {
    /// The fixed message shown to the user when an editor could not load.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        "Could not load the event."
    }
}
