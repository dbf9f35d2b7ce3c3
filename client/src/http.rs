// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP client wrapper with credential headers and status handling.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};

use crate::config::ApiConfig;
use crate::credential::CredentialProvider;
use crate::error::ClientError;

/// HTTP client for events API calls.
#[derive(Debug)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if HTTP client creation fails.
    pub fn new(
        config: ApiConfig,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, ClientError> {
        let mut builder = Client::builder().user_agent(&config.user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            config,
            credentials,
        })
    }

    /// Full URL for a path below the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Builds a request with the current credential headers.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential provider fails.
    pub fn build_request(&self, method: Method, path: &str) -> Result<RequestBuilder, ClientError> {
        let headers = self.credentials.credentials()?.to_headers()?;
        Ok(self.client.request(method, self.url(path)).headers(headers))
    }

    /// Executes a request and maps error statuses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or returns a non-2xx status.
    pub async fn execute(&self, req: RequestBuilder) -> Result<Response, ClientError> {
        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let path = resp.url().path().to_string();
        let text = resp
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response".to_string());
        tracing::debug!(%status, path = %path, body = %text, "request rejected");

        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ClientError::Auth(format!("{status}: {text}"))
            }
            StatusCode::NOT_FOUND => ClientError::NotFound(path),
            _ => ClientError::Http(format!("{status}: {text}")),
        })
    }
}
