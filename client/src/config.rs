// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

/// Base URL of the hosted TeamUp backend.
pub const DEFAULT_BASE_URL: &str = "https://teamup-be.herokuapp.com/api/v1";

/// Events API configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API, without the `/users/events` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds. The transport default applies when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!("teamup-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl ApiConfig {
    /// Creates a configuration pointing at the given base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}
