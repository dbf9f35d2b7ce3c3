// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Events API client errors.
#[non_exhaustive]
#[derive(Debug)]
pub enum ClientError {
    /// Transport failure or unexpected HTTP status.
    Http(String),

    /// The server refused the credentials (401/403).
    Auth(String),

    /// Resource not found.
    NotFound(String),

    /// Response body could not be understood.
    InvalidResponse(String),

    /// Configuration error.
    Config(String),

    /// Credential headers could not be produced.
    Credential(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "HTTP error: {e}"),
            Self::Auth(e) => write!(f, "Authentication failed: {e}"),
            Self::NotFound(path) => write!(f, "Resource not found: {path}"),
            Self::InvalidResponse(e) => write!(f, "Invalid server response: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Credential(e) => write!(f, "Credential error: {e}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidResponse(e.to_string())
    }
}
