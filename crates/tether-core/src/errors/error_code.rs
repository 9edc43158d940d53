//! Structured error codes shared by every tether error enum.

/// Gives each error a stable code string for logs and embedders.
pub trait TetherErrorCode {
    /// Returns the error code string (e.g., "SWITCH_FAILED").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const UNKNOWN_CONTEXT: &str = "UNKNOWN_CONTEXT";
pub const INVALID_TARGET: &str = "INVALID_TARGET";
pub const INTERRUPTED: &str = "INTERRUPTED";
pub const CLOCK_TRUNCATED: &str = "CLOCK_TRUNCATED";
pub const CONFIG_NOT_FOUND: &str = "CONFIG_NOT_FOUND";
pub const CONFIG_MALFORMED: &str = "CONFIG_MALFORMED";
pub const CONFIG_REJECTED: &str = "CONFIG_REJECTED";
pub const CONFIG_BAD_OVERRIDE: &str = "CONFIG_BAD_OVERRIDE";
