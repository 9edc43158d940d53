//! The general "this process was interrupted" condition.

use super::error_code::{self, TetherErrorCode};

/// Raised when a blocking operation is interrupted before it completes.
///
/// Carries no payload. Code that holds a scoped context switch can propagate
/// it with `?` and the switch is still undone on the way out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, thiserror::Error)]
#[error("interrupted")]
pub struct Interrupted;

impl TetherErrorCode for Interrupted {
    fn error_code(&self) -> &'static str {
        error_code::INTERRUPTED
    }
}
