//! Engine configuration: YAML file plus environment overrides.
//!
//! ```yaml
//! timezone:
//!   endpoint: "http://api.timezonedb.com/v2.1/get-time-zone"
//!   api_key: null
//!   timeout_ms: 3000
//!   enabled: true
//! ```
//!
//! Every field has a default, so an empty file (or no file) is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Default TimeZoneDB lookup endpoint.
pub const DEFAULT_TIMEZONE_ENDPOINT: &str = "http://api.timezonedb.com/v2.1/get-time-zone";

/// Default whole-request timeout for the offset lookup.
pub const DEFAULT_TIMEOUT_MS: u64 = 3_000;

/// Upper bound accepted for `timezone.timeout_ms`.
pub const MAX_TIMEOUT_MS: u64 = 30_000;

/// Environment variable holding the TimeZoneDB API key.
pub const ENV_API_KEY: &str = "TIMEZONEDB_API_KEY";
/// Environment variable overriding the lookup endpoint.
pub const ENV_ENDPOINT: &str = "JANMA_TZ_ENDPOINT";
/// Environment variable overriding the lookup timeout (milliseconds).
pub const ENV_TIMEOUT_MS: &str = "JANMA_TZ_TIMEOUT_MS";
/// Environment variable enabling or disabling the lookup.
pub const ENV_ENABLED: &str = "JANMA_TZ_ENABLED";

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Config text is not valid YAML for [`EngineConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
    /// A value is outside its allowed range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Top-level engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub timezone: TimezoneConfig,
}

/// Time-zone offset lookup settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimezoneConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_endpoint() -> String {
    DEFAULT_TIMEZONE_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_true() -> bool {
    true
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            enabled: true,
        }
    }
}

// Keeps the API key out of logs.
impl std::fmt::Debug for TimezoneConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimezoneConfig")
            .field("endpoint", &self.endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_ms", &self.timeout_ms)
            .field("enabled", &self.enabled)
            .finish()
    }
}

impl TimezoneConfig {
    /// Whole-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// API key, if enabled and non-blank.
    pub fn usable_api_key(&self) -> Option<&str> {
        if !self.enabled {
            return None;
        }
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}

impl EngineConfig {
    /// Parse configuration from a YAML string and validate it.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as an empty map.
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load from an explicit path if given, otherwise defaults, then apply
    /// process environment overrides and validate.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                info!(path = %p.display(), "loading configuration");
                Self::load(p)?
            }
            None => Self::default(),
        };
        config.apply_env_overrides(|name| std::env::var(name).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides read through `var`.
    ///
    /// Unparseable, empty or out-of-range values are logged and ignored.
    pub fn apply_env_overrides<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = var(ENV_API_KEY) {
            info!("environment override: {ENV_API_KEY}");
            self.timezone.api_key = Some(key);
        }
        if let Some(endpoint) = var(ENV_ENDPOINT) {
            if endpoint.trim().is_empty() {
                warn!("empty {ENV_ENDPOINT}; ignoring");
            } else {
                info!(endpoint = %endpoint, "environment override: {ENV_ENDPOINT}");
                self.timezone.endpoint = endpoint;
            }
        }
        if let Some(val) = var(ENV_TIMEOUT_MS) {
            match val.trim().parse::<u64>() {
                Ok(ms) if (1..=MAX_TIMEOUT_MS).contains(&ms) => {
                    info!(timeout_ms = ms, "environment override: {ENV_TIMEOUT_MS}");
                    self.timezone.timeout_ms = ms;
                }
                Ok(ms) => warn!(
                    timeout_ms = ms,
                    max = MAX_TIMEOUT_MS,
                    "{ENV_TIMEOUT_MS} out of range; ignoring"
                ),
                Err(_) => warn!(
                    value = %val,
                    "invalid {ENV_TIMEOUT_MS}; expected milliseconds, ignoring"
                ),
            }
        }
        if let Some(val) = var(ENV_ENABLED) {
            match val.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => self.timezone.enabled = true,
                "false" | "0" | "no" | "off" => self.timezone.enabled = false,
                _ => warn!(value = %val, "invalid {ENV_ENABLED}; expected true/false, ignoring"),
            }
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timezone.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("timezone.endpoint must not be empty"));
        }
        if self.timezone.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "timezone.timeout_ms must be greater than zero",
            ));
        }
        if self.timezone.timeout_ms > MAX_TIMEOUT_MS {
            return Err(ConfigError::Invalid(
                "timezone.timeout_ms must be at most 30000",
            ));
        }
        Ok(())
    }
}
