//! The scheduler collaborator seam.
//!
//! Running work on contexts is the scheduler's business. The affinity
//! primitives only need to ask where the calling flow is and to request a
//! move, which is what [`ContextScheduler`] captures.

use std::sync::atomic::{AtomicU64, Ordering};

use tether_core::config::SchedulerConfig;
use tether_core::errors::ConfigError;
use tether_core::{ContextId, SwitchError};

use crate::current::{self, CurrentContextGuard};

/// Operations the affinity primitives consume from a scheduler.
pub trait ContextScheduler {
    /// Number of contexts in the pool.
    fn context_count(&self) -> usize;

    /// The calling flow's current context.
    fn current_context(&self) -> ContextId {
        current::current_context()
    }

    /// Move the calling flow to `target`. Returns once the active context
    /// equals `target`.
    fn request_switch(&self, target: ContextId) -> Result<(), SwitchError>;
}

/// A fixed pool of contexts where switching is purely logical: the calling
/// flow's context-local value is updated in place.
///
/// # Examples
///
/// ```
/// use tether_affinity::{ContextId, ContextScheduler, LogicalScheduler};
///
/// let scheduler = LogicalScheduler::new(4);
/// let _worker = scheduler.enter(ContextId::new(0)).unwrap();
///
/// scheduler.request_switch(ContextId::new(2)).unwrap();
/// assert_eq!(scheduler.current_context(), ContextId::new(2));
/// assert!(scheduler.request_switch(ContextId::new(7)).is_err());
/// ```
#[derive(Debug)]
pub struct LogicalScheduler {
    context_count: usize,
    initial: ContextId,
    switches: AtomicU64,
}

impl LogicalScheduler {
    /// Create a pool of `context_count` contexts starting on context 0.
    ///
    /// # Panics
    ///
    /// Panics if `context_count` is zero or does not fit below the invalid
    /// sentinel.
    pub fn new(context_count: usize) -> Self {
        assert!(
            context_count > 0 && context_count < tether_core::constants::MAX_CONTEXT_COUNT,
            "context pool size {context_count} out of range"
        );
        Self {
            context_count,
            initial: ContextId::new(0),
            switches: AtomicU64::new(0),
        }
    }

    /// Build a pool from validated configuration.
    pub fn from_config(config: &SchedulerConfig) -> Result<Self, ConfigError> {
        if config.context_count == 0
            || config.context_count >= tether_core::constants::MAX_CONTEXT_COUNT
        {
            return Err(ConfigError::ValidationFailed {
                field: "scheduler.context_count".to_string(),
                message: format!("{} is not a usable pool size", config.context_count),
            });
        }
        let initial = config.initial_context_id();
        if initial.index() >= config.context_count {
            return Err(ConfigError::ValidationFailed {
                field: "scheduler.initial_context".to_string(),
                message: format!("{initial} is outside the pool"),
            });
        }

        tracing::debug!(
            context_count = config.context_count,
            initial = %initial,
            "logical scheduler configured"
        );
        Ok(Self {
            context_count: config.context_count,
            initial,
            switches: AtomicU64::new(0),
        })
    }

    /// Returns true if `ctx` names a context in this pool.
    pub fn contains(&self, ctx: ContextId) -> bool {
        ctx.is_valid() && ctx.index() < self.context_count
    }

    /// The context new workers start on.
    pub fn initial_context(&self) -> ContextId {
        self.initial
    }

    /// Install `ctx` as the calling thread's context until the guard drops.
    pub fn enter(&self, ctx: ContextId) -> Result<CurrentContextGuard, SwitchError> {
        self.check(ctx)?;
        Ok(current::enter(ctx))
    }

    /// Install the configured initial context on the calling thread.
    pub fn enter_initial(&self) -> CurrentContextGuard {
        current::enter(self.initial)
    }

    /// Number of switch requests serviced so far.
    pub fn switches_serviced(&self) -> u64 {
        self.switches.load(Ordering::Relaxed)
    }

    fn check(&self, target: ContextId) -> Result<(), SwitchError> {
        if !target.is_valid() {
            return Err(SwitchError::InvalidTarget);
        }
        if target.index() >= self.context_count {
            return Err(SwitchError::UnknownContext {
                target,
                context_count: self.context_count,
            });
        }
        Ok(())
    }
}

impl ContextScheduler for LogicalScheduler {
    fn context_count(&self) -> usize {
        self.context_count
    }

    fn request_switch(&self, target: ContextId) -> Result<(), SwitchError> {
        self.check(target)?;
        let prev = current::replace(target);
        self.switches.fetch_add(1, Ordering::Relaxed);
        tracing::trace!(from = %prev, to = %target, "logical switch");
        Ok(())
    }
}
