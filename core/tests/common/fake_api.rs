// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::sync::Mutex;

use async_trait::async_trait;
use teamup_core::{ClientError, Event, EventId, EventRequest, EventsApi};

/// In-memory events API that records every call.
#[derive(Debug, Default)]
pub struct FakeApi {
    event: Option<Event>,
    fail_load: bool,
    fail_send: Mutex<bool>,
    loads: Mutex<Vec<EventId>>,
    sent: Mutex<Vec<EventRequest>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event(event: Event) -> Self {
        Self {
            event: Some(event),
            ..Self::default()
        }
    }

    pub fn failing_load(mut self) -> Self {
        self.fail_load = true;
        self
    }

    pub fn failing_send(self) -> Self {
        self.set_fail_send(true);
        self
    }

    pub fn set_fail_send(&self, fail: bool) {
        *self.fail_send.lock().unwrap() = fail;
    }

    pub fn loads(&self) -> Vec<EventId> {
        self.loads.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<EventRequest> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventsApi for FakeApi {
    async fn get_event(&self, id: &EventId) -> Result<Event, ClientError> {
        self.loads.lock().unwrap().push(id.clone());
        if self.fail_load {
            return Err(ClientError::Http("503 Service Unavailable".to_string()));
        }
        self.event
            .clone()
            .ok_or_else(|| ClientError::NotFound(format!("/users/events/{id}")))
    }

    async fn send(&self, request: &EventRequest) -> Result<(), ClientError> {
        self.sent.lock().unwrap().push(request.clone());
        if *self.fail_send.lock().unwrap() {
            return Err(ClientError::Http("connection reset".to_string()));
        }
        Ok(())
    }
}
