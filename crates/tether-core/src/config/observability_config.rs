use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_LOG_ENV_VAR;

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Environment variable holding a full `EnvFilter` directive.
    pub log_env_var: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            log_env_var: DEFAULT_LOG_ENV_VAR.to_string(),
        }
    }
}
