// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal implementations of the form's navigator and notifier.

use std::cell::RefCell;
use std::time::{Duration, Instant};

use colored::Colorize;
use teamup_core::{Navigator, Notifier};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Prints notifications to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str) {
        eprintln!("{} {}", "Notice:".yellow(), message);
    }
}

/// Records where the form navigated to.
///
/// A command line has no listing view to switch to; leaving the form simply
/// ends the command.
#[derive(Debug, Default)]
pub struct TerminalNavigator {
    route: RefCell<Option<String>>,
}

impl TerminalNavigator {
    pub fn route(&self) -> Option<String> {
        self.route.borrow().clone()
    }
}

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: &str) {
        tracing::debug!(route, "leaving the form");
        *self.route.borrow_mut() = Some(route.to_owned());
    }
}

/// A transient message and when it was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub raised_at: Instant,
}

impl Toast {
    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.raised_at) < TOAST_DURATION
    }
}

/// Keeps the latest notification for the editor to show as a toast.
#[derive(Debug, Default)]
pub struct ToastNotifier {
    latest: RefCell<Option<Toast>>,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest toast, if it is still visible.
    pub fn visible(&self) -> Option<Toast> {
        let now = Instant::now();
        self.latest
            .borrow()
            .as_ref()
            .filter(|a| a.is_visible_at(now))
            .cloned()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, message: &str) {
        tracing::debug!(message, "raising toast");
        *self.latest.borrow_mut() = Some(Toast {
            message: message.to_owned(),
            raised_at: Instant::now(),
        });
    }
}
