// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::{error::Error, str::FromStr, sync::Arc};

use teamup_core::{
    APP_NAME, ApiConfig, ClientError, CredentialProvider, Credentials, EventsClient,
    StaticCredentials,
};
use tokio::fs;

use crate::credential::CookieFileCredentials;

const TEAMUP_CONFIG_ENV: &str = "TEAMUP_CONFIG";
const TEAMUP_DEV_ENV: &str = "TEAMUP_DEV";

const TEAMUP_DEV_VALID_TRUE: &[&str] = &["1", "true", "yes"];
const TEAMUP_DEV_VALID_FALSE: &[&str] = &["0", "false", "no"];

/// Resolves and reads the configuration file.
///
/// The `--config` flag wins over `TEAMUP_CONFIG`, which wins over the default
/// location. A missing file at the default location means built-in defaults.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(TEAMUP_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        if let Some(true) = is_dev_mode() {
            return Err(format!(
                "Development environment detected ({TEAMUP_DEV_ENV} is set): config must be \
                 explicitly specified via --config or {TEAMUP_CONFIG_ENV} environment variable",
            )
            .into());
        }

        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        config
    };

    let mut config = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<Config>()?;
    config.normalize()?;
    Ok(config)
}

/// Configuration of the TeamUp command line.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Events API settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Where request credentials come from.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Credential settings.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct AuthConfig {
    /// Cookie file read on every request.
    #[serde(default)]
    pub cookie_file: Option<PathBuf>,

    /// Fixed headers, overridden by cookies of the same name.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(path) = &self.auth.cookie_file {
            self.auth.cookie_file = Some(
                expand_path(path).map_err(|e| format!("Failed to expand cookie file path: {e}"))?,
            );
        }
        Ok(())
    }

    /// The credential provider described by the `[auth]` table.
    pub fn credentials(&self) -> Arc<dyn CredentialProvider> {
        let headers: Credentials = self.auth.headers.clone().into_iter().collect();
        match &self.auth.cookie_file {
            Some(path) => Arc::new(CookieFileCredentials::new(path).with_fallback(headers)),
            None => Arc::new(StaticCredentials::new(headers)),
        }
    }

    /// Builds the events API client.
    pub fn client(&self) -> Result<EventsClient, ClientError> {
        EventsClient::new(self.api.clone(), self.credentials())
    }
}

impl FromStr for Config {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    let config_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_CONFIG_HOME/", "${XDG_CONFIG_HOME}/"]
    } else {
        &[r"%LOCALAPPDATA%\", "%LOCALAPPDATA%/"]
    };
    for prefix in config_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_config_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

fn is_dev_mode() -> Option<bool> {
    if let Ok(val) = std::env::var(TEAMUP_DEV_ENV) {
        let lower = val.to_lowercase();
        if TEAMUP_DEV_VALID_TRUE.contains(&lower.as_str()) {
            Some(true)
        } else if TEAMUP_DEV_VALID_FALSE.contains(&lower.as_str()) {
            Some(false)
        } else {
            tracing::warn!(
                "Unrecognized value for {}: '{}'. Expected one of: true: {}, false: {}. \
                 Treating as unset.",
                TEAMUP_DEV_ENV,
                val,
                TEAMUP_DEV_VALID_TRUE.join(", "),
                TEAMUP_DEV_VALID_FALSE.join(", ")
            );
            None
        }
    } else {
        None
    }
}
