// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use teamup_client::{ClientError, Event, EventId, EventsClient};

use crate::request::EventRequest;

/// The remote calls a form needs.
///
/// Implemented by [`EventsClient`]; tests substitute an in-memory fake.
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// Loads one existing event.
    async fn get_event(&self, id: &EventId) -> Result<Event, ClientError>;

    /// Sends one write request.
    async fn send(&self, request: &EventRequest) -> Result<(), ClientError>;
}

#[async_trait]
impl EventsApi for EventsClient {
    async fn get_event(&self, id: &EventId) -> Result<Event, ClientError> {
        EventsClient::get_event(self, id).await
    }

    async fn send(&self, request: &EventRequest) -> Result<(), ClientError> {
        match request {
            EventRequest::Create(body) => self.create_event(body).await,
            EventRequest::Update(id, body) => self.update_event(id, body).await,
            EventRequest::Delete(id) => self.delete_event(id).await,
        }
    }
}

#[async_trait]
impl<T: EventsApi + ?Sized> EventsApi for &T {
    async fn get_event(&self, id: &EventId) -> Result<Event, ClientError> {
        (**self).get_event(id).await
    }

    async fn send(&self, request: &EventRequest) -> Result<(), ClientError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: EventsApi + ?Sized> EventsApi for std::sync::Arc<T> {
    async fn get_event(&self, id: &EventId) -> Result<Event, ClientError> {
        (**self).get_event(id).await
    }

    async fn send(&self, request: &EventRequest) -> Result<(), ClientError> {
        (**self).send(request).await
    }
}
