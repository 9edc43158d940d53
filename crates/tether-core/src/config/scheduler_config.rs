//! Configuration for the logical context pool.
//!
//! # Examples
//!
//! ```
//! use tether_core::config::SchedulerConfig;
//!
//! let config = SchedulerConfig::default();
//! assert_eq!(config.context_count, 1);
//! assert_eq!(config.initial_context, 0);
//! ```

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::ContextId;

/// Shape of the context pool handed to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Number of execution contexts in the pool. Default: 1.
    pub context_count: usize,
    /// Context a freshly entered worker starts on. Default: 0.
    pub initial_context: u32,
}

impl SchedulerConfig {
    /// The configured initial context as an id.
    pub fn initial_context_id(&self) -> ContextId {
        ContextId::new(self.initial_context)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            context_count: defaults::DEFAULT_CONTEXT_COUNT,
            initial_context: defaults::DEFAULT_INITIAL_CONTEXT,
        }
    }
}
