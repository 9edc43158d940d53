//! Execution context identifiers.
//!
//! # Examples
//!
//! ```
//! use tether_core::ContextId;
//!
//! let ctx = ContextId::new(2);
//! assert!(ctx.is_valid());
//! assert_eq!(ctx.index(), 2);
//! assert!(!ContextId::INVALID.is_valid());
//! assert_eq!(ctx.to_string(), "ctx#2");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::INVALID_CONTEXT_RAW;

/// Identifies one execution context in a fixed-size pool.
///
/// Ids are handed out by the scheduler. This crate only stores and compares
/// them; [`ContextId::INVALID`] stands for "no context".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextId(u32);

impl ContextId {
    /// Sentinel for "no/invalid context".
    pub const INVALID: ContextId = ContextId(INVALID_CONTEXT_RAW);

    /// Wrap a raw context index.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw value, including the sentinel.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Position in the context pool.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns true unless this is the sentinel.
    pub const fn is_valid(self) -> bool {
        self.0 != INVALID_CONTEXT_RAW
    }
}

impl Default for ContextId {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<u32> for ContextId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ContextId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ctx#{}", self.0)
        } else {
            f.write_str("ctx#invalid")
        }
    }
}
