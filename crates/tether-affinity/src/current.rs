//! The calling flow's current context.
//!
//! Each OS thread carries one logical flow. A scheduler worker installs its
//! context with [`enter`] before running work; code that needs to know where
//! it is running calls [`current_context`].
//!
//! # Examples
//!
//! ```
//! use tether_affinity::{current_context, enter, ContextId};
//!
//! assert_eq!(current_context(), ContextId::INVALID);
//! {
//!     let _worker = enter(ContextId::new(3));
//!     assert_eq!(current_context(), ContextId::new(3));
//! }
//! assert_eq!(current_context(), ContextId::INVALID);
//! ```

use std::cell::Cell;
use std::marker::PhantomData;

use tether_core::ContextId;

thread_local! {
    static CURRENT_CONTEXT: Cell<ContextId> = const { Cell::new(ContextId::INVALID) };
}

/// Returns the context the calling flow is on, or [`ContextId::INVALID`] if
/// no scheduler has installed one.
pub fn current_context() -> ContextId {
    CURRENT_CONTEXT.with(Cell::get)
}

/// Install `ctx` as the calling flow's context until the guard drops.
#[must_use = "the previous context is restored as soon as the guard drops"]
pub fn enter(ctx: ContextId) -> CurrentContextGuard {
    CurrentContextGuard {
        prev: replace(ctx),
        _not_send: PhantomData,
    }
}

/// Swap the calling flow's context, returning the previous one.
pub(crate) fn replace(ctx: ContextId) -> ContextId {
    CURRENT_CONTEXT.with(|slot| slot.replace(ctx))
}

/// Guard that restores the previously installed context on drop.
#[derive(Debug)]
pub struct CurrentContextGuard {
    prev: ContextId,
    _not_send: PhantomData<*const ()>,
}

impl CurrentContextGuard {
    /// The context that will be reinstalled on drop.
    pub fn previous(&self) -> ContextId {
        self.prev
    }
}

impl Drop for CurrentContextGuard {
    fn drop(&mut self) {
        replace(self.prev);
    }
}
