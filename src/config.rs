//! Client configuration
//!
//! Where the backend lives and how hard to try reaching it. Stored at
//! `~/.tomctl/config.toml`; every field is optional and `TOM_API_URL` /
//! `TOM_AUTH_SCHEME` override the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::client::{
    DEFAULT_AUTH_SCHEME, DEFAULT_BASE_DELAY, DEFAULT_MAX_RETRIES, DEFAULT_RETRYABLE_STATUSES,
    RetryPolicy,
};
use crate::paths;

/// Environment variable overriding [`ApiConfig::base_url`]
pub const API_URL_ENV: &str = "TOM_API_URL";

/// Environment variable overriding [`ApiConfig::auth_scheme`]
pub const AUTH_SCHEME_ENV: &str = "TOM_AUTH_SCHEME";

/// Errors reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// Offending file
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// File is not valid TOML for this schema
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Offending file
        path: PathBuf,
        /// Underlying error
        source: toml::de::Error,
    },

    /// No such setting
    #[error("unknown setting '{0}'; known settings: {keys}", keys = Config::KEYS.join(", "))]
    UnknownKey(String),

    /// Value does not fit the setting
    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        /// Setting being changed
        key: String,
        /// Rejected value
        value: String,
        /// What was expected
        reason: &'static str,
    },
}

/// tomctl configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Backend connection
    #[serde(default)]
    pub api: ApiConfig,
    /// Retry behaviour for transient failures
    #[serde(default)]
    pub retry: RetryConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL requests are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// `Authorization` scheme (`JWT`, `Bearer`, ...)
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_auth_scheme() -> String {
    DEFAULT_AUTH_SCHEME.to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            auth_scheme: default_auth_scheme(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Per-request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Retry settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Retries after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Delay before the first retry, in milliseconds
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,
    /// Statuses treated as transient
    #[serde(default = "default_retryable_statuses")]
    pub retryable_statuses: Vec<u16>,
}

const fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

#[allow(clippy::cast_possible_truncation)]
const fn default_base_delay_ms() -> u64 {
    DEFAULT_BASE_DELAY.as_millis() as u64
}

fn default_retryable_statuses() -> Vec<u16> {
    DEFAULT_RETRYABLE_STATUSES.to_vec()
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: default_max_retries(),
            base_delay_ms: default_base_delay_ms(),
            retryable_statuses: default_retryable_statuses(),
        }
    }
}

impl RetryConfig {
    /// The policy these settings describe
    #[must_use]
    pub fn policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_retries: self.max_retries,
            base_delay: Duration::from_millis(self.base_delay_ms),
            retryable_statuses: self.retryable_statuses.clone(),
        }
    }
}

impl Config {
    /// Dotted names accepted by [`Config::set`]
    pub const KEYS: [&'static str; 6] = [
        "api.base_url",
        "api.auth_scheme",
        "api.timeout_secs",
        "retry.max_retries",
        "retry.base_delay_ms",
        "retry.retryable_statuses",
    ];

    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Parse a config file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load config from disk with environment overrides applied.
    ///
    /// A missing file yields defaults; an unreadable one is reported and
    /// ignored.
    #[must_use]
    pub fn load() -> Self {
        let config = Self::load_file().unwrap_or_else(|err| {
            warn!("{err}; using defaults");
            Self::default()
        });
        config.with_env_overrides(|key| std::env::var(key).ok())
    }

    /// The config file as written, without environment overrides. A missing
    /// file yields defaults.
    pub fn load_file() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Change one setting by its dotted name (see [`Config::KEYS`])
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |reason| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            reason,
        };
        let value = value.trim();

        match key {
            "api.base_url" => {
                let url = reqwest::Url::parse(value)
                    .map_err(|_| invalid("expected an absolute URL"))?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(invalid("expected an http or https URL"));
                }
                self.api.base_url = value.trim_end_matches('/').to_string();
            },
            "api.auth_scheme" => {
                if value.is_empty() || value.contains(char::is_whitespace) {
                    return Err(invalid("expected a single word such as JWT or Bearer"));
                }
                self.api.auth_scheme = value.to_string();
            },
            "api.timeout_secs" => {
                self.api.timeout_secs = value
                    .parse()
                    .ok()
                    .filter(|&secs| secs > 0)
                    .ok_or_else(|| invalid("expected a positive number of seconds"))?;
            },
            "retry.max_retries" => {
                self.retry.max_retries =
                    value.parse().map_err(|_| invalid("expected a whole number"))?;
            },
            "retry.base_delay_ms" => {
                self.retry.base_delay_ms =
                    value.parse().map_err(|_| invalid("expected milliseconds"))?;
            },
            "retry.retryable_statuses" => {
                self.retry.retryable_statuses = value
                    .split(',')
                    .map(|status| status.trim().parse::<u16>())
                    .collect::<Result<Vec<_>, _>>()
                    .ok()
                    .filter(|statuses| statuses.iter().all(|s| (100..600).contains(s)))
                    .ok_or_else(|| invalid("expected comma-separated HTTP statuses"))?;
            },
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply overrides from `lookup` (normally the process environment)
    #[must_use]
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(API_URL_ENV).filter(|v| !v.is_empty()) {
            self.api.base_url = url;
        }
        if let Some(scheme) = lookup(AUTH_SCHEME_ENV).filter(|v| !v.is_empty()) {
            self.api.auth_scheme = scheme;
        }
        self
    }
}
