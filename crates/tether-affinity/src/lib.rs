//! # tether-affinity
//!
//! Execution-context affinity for objects that may only be touched from one
//! context, and a scoped guard for hopping between contexts.
//!
//! - [`AffinityOwner`] — records a home context and checks it in debug builds
//! - [`HomeContext`] — the mixin seam for affine types
//! - [`ScopedContextSwitch`] — switch to a context, switch back on drop
//! - [`on_context`] — closure form of the scoped switch
//! - [`ContextScheduler`] — what a scheduler must provide
//! - [`LogicalScheduler`] — a fixed pool of purely logical contexts
//!
//! The calling flow's current context lives in a thread-local installed by
//! the scheduler (see [`current`]); nothing here is a process-wide singleton.

pub mod current;
pub mod home;
pub mod scheduler;
pub mod switch;

// Re-export public API
pub use current::{current_context, enter, CurrentContextGuard};
pub use home::{AffinityOwner, HomeContext};
pub use scheduler::{ContextScheduler, LogicalScheduler};
pub use switch::{on_context, ScopedContextSwitch};
pub use tether_core::{ContextId, SwitchError};
