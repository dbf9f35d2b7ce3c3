// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Mutex;

use teamup_core::{Navigator, Notifier};

#[derive(Debug, Default)]
pub struct RecordingNavigator(Mutex<Vec<String>>);

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.0.lock().unwrap().push(route.to_string());
    }
}

#[derive(Debug, Default)]
pub struct RecordingNotifier(Mutex<Vec<String>>);

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.0.lock().unwrap().push(message.to_string());
    }
}
