//! Top-level tether configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, SchedulerConfig};
use crate::constants::MAX_CONTEXT_COUNT;
use crate::errors::ConfigError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`TETHER_*`)
/// 2. Config file passed to [`TetherConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TetherConfig {
    pub scheduler: SchedulerConfig,
    pub observability: ObservabilityConfig,
}

impl TetherConfig {
    /// Load configuration with layered resolution, reading the process
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, |key| std::env::var(key).ok())
    }

    /// Same as [`TetherConfig::load`] with an explicit variable lookup.
    pub fn load_with_env<F>(path: Option<&Path>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.apply_env_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    /// Unknown keys are ignored.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `TETHER_*` overrides. Values that fail to parse are rejected
    /// rather than skipped.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("TETHER_CONTEXT_COUNT") {
            self.scheduler.context_count = parse_env("TETHER_CONTEXT_COUNT", &val)?;
        }
        if let Some(val) = lookup("TETHER_INITIAL_CONTEXT") {
            self.scheduler.initial_context = parse_env("TETHER_INITIAL_CONTEXT", &val)?;
        }
        if let Some(val) = lookup("TETHER_LOG_LEVEL") {
            self.observability.log_level = val.trim().to_ascii_lowercase();
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.scheduler.context_count;
        if count == 0 || count >= MAX_CONTEXT_COUNT {
            return Err(ConfigError::ValidationFailed {
                field: "scheduler.context_count".to_string(),
                message: format!("must be between 1 and {}", MAX_CONTEXT_COUNT - 1),
            });
        }
        if self.scheduler.initial_context as usize >= count {
            return Err(ConfigError::ValidationFailed {
                field: "scheduler.initial_context".to_string(),
                message: format!("must be less than context_count ({count})"),
            });
        }
        if !LOG_LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LOG_LEVELS.join(", ")),
            });
        }
        if self.observability.log_env_var.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_env_var".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_env<T>(field: &str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("{raw:?}: {e}"),
    })
}
