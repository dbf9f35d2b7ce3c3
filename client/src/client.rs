// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Events API client.

use std::sync::Arc;

use reqwest::Method;

use crate::config::ApiConfig;
use crate::credential::CredentialProvider;
use crate::error::ClientError;
use crate::http::HttpClient;
use crate::types::{Event, EventBody, EventId};

/// Client for the `/users/events` resource.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use teamup_client::{ApiConfig, Credentials, EventsClient, StaticCredentials};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let creds: Credentials = [("auth_token", "secret")].into_iter().collect();
/// let client = EventsClient::new(
///     ApiConfig::default(),
///     Arc::new(StaticCredentials::new(creds)),
/// )?;
/// let event = client.get_event(&"65a1".into()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct EventsClient {
    http: Arc<HttpClient>,
}

impl EventsClient {
    /// Creates a new events client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client initialization fails.
    pub fn new(
        config: ApiConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, ClientError> {
        if config.base_url.trim().is_empty() {
            return Err(ClientError::Config("base_url must not be empty".to_string()));
        }

        let http = HttpClient::new(config, credentials)?;
        Ok(Self {
            http: Arc::new(http),
        })
    }

    /// Fetches one event.
    ///
    /// The backend answers with an array; the first element is the event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the body is malformed or the
    /// array is empty.
    pub async fn get_event(&self, id: &EventId) -> Result<Event, ClientError> {
        let path = format!("/users/events/{id}");
        tracing::debug!(path = %path, "loading event");
        let req = self.http.build_request(Method::GET, &path)?;
        let resp = self.http.execute(req).await?;

        let text = resp.text().await?;
        // only the first element is read, the rest may be anything
        let events: Vec<serde_json::Value> = serde_json::from_str(&text)?;
        let first = events
            .into_iter()
            .next()
            .ok_or(ClientError::NotFound(path))?;
        Ok(serde_json::from_value(first)?)
    }

    /// Creates a new event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn create_event(&self, body: &EventBody) -> Result<(), ClientError> {
        let path = "/users/events/create";
        tracing::debug!(path = %path, ?body, "creating event");
        let req = self.http.build_request(Method::POST, path)?.json(body);
        let _ = self.http.execute(req).await?;
        Ok(())
    }

    /// Replaces the fields of an existing event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn update_event(&self, id: &EventId, body: &EventBody) -> Result<(), ClientError> {
        let path = format!("/users/events/{id}/update");
        tracing::debug!(path = %path, ?body, "updating event");
        let req = self.http.build_request(Method::PATCH, &path)?.json(body);
        let _ = self.http.execute(req).await?;
        Ok(())
    }

    /// Deletes an existing event.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or is rejected.
    pub async fn delete_event(&self, id: &EventId) -> Result<(), ClientError> {
        let path = format!("/users/events/{id}/delete");
        tracing::debug!(path = %path, "deleting event");
        let req = self.http.build_request(Method::DELETE, &path)?;
        let _ = self.http.execute(req).await?;
        Ok(())
    }
}
