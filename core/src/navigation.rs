// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Route of the events listing, the only place a form navigates to.
pub const EVENTS_ROUTE: &str = "/events";

/// Leaves the form for another view.
pub trait Navigator {
    fn navigate(&self, route: &str);
}

/// Shows a transient, non-blocking message to the user.
pub trait Notifier {
    fn notify(&self, message: &str);
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn navigate(&self, route: &str) {
        (**self).navigate(route);
    }
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, message: &str) {
        (**self).notify(message);
    }
}
