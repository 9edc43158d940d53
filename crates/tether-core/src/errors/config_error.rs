//! Configuration errors.

use super::error_code::{self, TetherErrorCode};

/// Why a [`TetherConfig`](crate::TetherConfig) could not be produced.
///
/// Each variant carries its own code, so a log filter can tell a missing
/// file from a bad pool size without parsing the message.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file named by the caller could not be read.
    #[error("cannot read tether config {path}")]
    FileNotFound { path: String },

    /// The file or string is not valid TOML for the config schema.
    #[error("malformed tether config {path}: {message}")]
    ParseError { path: String, message: String },

    /// The merged config is well-formed but describes an unusable pool.
    #[error("{field} rejected: {message}")]
    ValidationFailed { field: String, message: String },

    /// An environment override did not parse as the expected type.
    #[error("override {field} is not usable: {message}")]
    InvalidValue { field: String, message: String },
}

impl TetherErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::FileNotFound { .. } => error_code::CONFIG_NOT_FOUND,
            Self::ParseError { .. } => error_code::CONFIG_MALFORMED,
            Self::ValidationFailed { .. } => error_code::CONFIG_REJECTED,
            Self::InvalidValue { .. } => error_code::CONFIG_BAD_OVERRIDE,
        }
    }
}
