// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Credential headers attached to every request.

use std::collections::BTreeMap;
use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::ClientError;

/// Opaque set of header name/value pairs that authenticate a request.
///
/// The backend reads its session token from a header named after the cookie,
/// so the whole cookie jar is forwarded as headers unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials(BTreeMap<String, String>);

impl Credentials {
    /// Creates an empty credential set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a header.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Adds every entry of `other` that is not present yet.
    pub fn merge_missing(&mut self, other: &Credentials) {
        for (k, v) in &other.0 {
            self.0.entry(k.clone()).or_insert_with(|| v.clone());
        }
    }

    /// Returns the value of a header, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns true if there are no headers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Converts the credentials into request headers.
    ///
    /// # Errors
    ///
    /// Returns an error if a name or value is not a valid HTTP header.
    pub fn to_headers(&self) -> Result<HeaderMap, ClientError> {
        let mut headers = HeaderMap::with_capacity(self.0.len());
        for (name, value) in &self.0 {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| {
                    ClientError::Credential(format!("invalid header name {name:?}: {e}"))
                })?;
            let mut value = HeaderValue::from_str(value)
                .map_err(|e| ClientError::Credential(format!("invalid value for {name}: {e}")))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }
        Ok(headers)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Credentials {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Source of credential headers, consulted on every request.
pub trait CredentialProvider: fmt::Debug + Send + Sync {
    /// Returns the headers to attach to the next request.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn credentials(&self) -> Result<Credentials, ClientError>;
}

/// Fixed credentials, e.g. from a config file or a test.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials(Credentials);

impl StaticCredentials {
    /// Wraps a fixed credential set.
    #[must_use]
    pub const fn new(credentials: Credentials) -> Self {
        Self(credentials)
    }

    /// No credentials at all.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl CredentialProvider for StaticCredentials {
    fn credentials(&self) -> Result<Credentials, ClientError> {
        Ok(self.0.clone())
    }
}
