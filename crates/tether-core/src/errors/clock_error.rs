//! Logical clock codec errors.

use super::error_code::{self, TetherErrorCode};

/// Errors decoding a logical clock from a byte stream.
///
/// Clock arithmetic, merge, and comparison never fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClockError {
    #[error("truncated logical clock: needed {needed} bytes, {available} available")]
    Truncated { needed: usize, available: usize },
}

impl TetherErrorCode for ClockError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Truncated { .. } => error_code::CLOCK_TRUNCATED,
        }
    }
}
