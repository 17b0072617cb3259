//! Configuration management for the Care2Connect client

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

/// Backend used when neither the config file nor `C2C_API_URL` names one
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL (the `/api/...` paths are appended to it)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Per-request timeout, applied to login and refresh as well as CRUD calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// How far ahead the upcoming-services notice looks
    #[serde(default = "default_upcoming_window_days")]
    pub upcoming_window_days: i64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_upcoming_window_days() -> i64 {
    30
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            upcoming_window_days: default_upcoming_window_days(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: default_request_timeout_secs(),
            preferences: Preferences::default(),
        }
    }
}

impl Config {
    /// Get the default config file path (~/.c2c/config.yaml)
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".c2c").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, falling back to defaults when the file does not exist
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply a runtime API URL override (flag or `C2C_API_URL`)
    pub fn with_api_url(mut self, api_url: Option<&str>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url.to_string();
        }
        self
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    fn validate(&self) -> Result<()> {
        if !(self.api_url.starts_with("http://") || self.api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_url must start with http:// or https://, got '{}'",
                self.api_url
            ))
            .into());
        }
        if self.request_timeout_secs == 0 {
            return Err(
                ConfigError::Invalid("request_timeout_secs must be positive".to_string()).into(),
            );
        }
        if self.preferences.upcoming_window_days < 0 {
            return Err(ConfigError::Invalid(
                "preferences.upcoming_window_days must not be negative".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
