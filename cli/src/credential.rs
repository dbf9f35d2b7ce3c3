// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fs, path::PathBuf};

use teamup_core::{ClientError, CredentialProvider, Credentials};

/// Credentials read from a cookie file on every request.
///
/// The file holds `name=value` pairs separated by newlines or `;`. Lines
/// starting with `#` are ignored. Configured headers fill in names the file
/// does not set.
#[derive(Debug, Clone)]
pub struct CookieFileCredentials {
    path: PathBuf,
    fallback: Credentials,
}

impl CookieFileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fallback: Credentials::new(),
        }
    }

    pub fn with_fallback(mut self, fallback: Credentials) -> Self {
        self.fallback = fallback;
        self
    }
}

impl CredentialProvider for CookieFileCredentials {
    fn credentials(&self) -> Result<Credentials, ClientError> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            ClientError::Credential(format!(
                "failed to read cookie file {}: {e}",
                self.path.display()
            ))
        })?;

        let mut credentials = parse_cookies(&content);
        credentials.merge_missing(&self.fallback);
        tracing::debug!(path = %self.path.display(), count = credentials.len(), "read cookies");
        Ok(credentials)
    }
}

fn parse_cookies(content: &str) -> Credentials {
    let mut credentials = Credentials::new();
    for line in content.lines().map(str::trim) {
        if line.starts_with('#') {
            continue;
        }

        for pair in line.split(';').map(str::trim).filter(|a| !a.is_empty()) {
            match pair.split_once('=') {
                Some((name, value)) if !name.trim().is_empty() => {
                    credentials.insert(name.trim(), value.trim());
                }
                _ => tracing::warn!(pair, "ignoring malformed cookie"),
            }
        }
    }
    credentials
}
