//! Scheduler-level context switch failures.

use super::error_code::{self, TetherErrorCode};
use crate::ContextId;

/// Errors a scheduler reports when it cannot service a switch request.
///
/// The scoped switch guard treats every one of these as fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SwitchError {
    #[error("context {target} is outside the pool of {context_count} contexts")]
    UnknownContext {
        target: ContextId,
        context_count: usize,
    },

    #[error("cannot switch to the invalid context sentinel")]
    InvalidTarget,

    #[error("switch to {target} interrupted")]
    Interrupted { target: ContextId },
}

impl TetherErrorCode for SwitchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownContext { .. } => error_code::UNKNOWN_CONTEXT,
            Self::InvalidTarget => error_code::INVALID_TARGET,
            Self::Interrupted { .. } => error_code::INTERRUPTED,
        }
    }
}
