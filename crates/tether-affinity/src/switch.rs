//! Scoped context switching.
//!
//! [`ScopedContextSwitch`] moves the calling flow to a target context for the
//! lifetime of the guard and moves it back on drop, whichever way the scope
//! is left: normal return, early return, `?` on an [`Interrupted`] error, or
//! a panic unwinding through it.
//!
//! ```
//! use tether_affinity::{ContextId, ContextScheduler, LogicalScheduler, ScopedContextSwitch};
//!
//! let scheduler = LogicalScheduler::new(3);
//! let _worker = scheduler.enter(ContextId::new(1)).unwrap();
//! {
//!     let _switch = ScopedContextSwitch::new(&scheduler, ContextId::new(2));
//!     assert_eq!(scheduler.current_context(), ContextId::new(2));
//! }
//! assert_eq!(scheduler.current_context(), ContextId::new(1));
//! ```
//!
//! [`Interrupted`]: tether_core::Interrupted

use std::marker::PhantomData;

use tether_core::context_switch_span;
use tether_core::errors::TetherErrorCode;
use tether_core::ContextId;
use tracing::span::EnteredSpan;

use crate::home::{AffinityOwner, HomeContext};
use crate::scheduler::ContextScheduler;

/// Holds the obligation to switch the calling flow back to the context it
/// was on when the guard was created.
///
/// Guards nest strictly: the most recent one must drop first. The guard is
/// neither `Clone` nor `Send`, so the obligation cannot be duplicated or
/// carried to another flow. Its home context is the context it returns to,
/// so [`HomeContext::assert_on_home_context`] fails while the switch is in
/// effect and holds again once an inner scope has switched back there.
///
/// Switch failures are fatal. Construction panics if the scheduler refuses
/// the switch; a refused restore panics, which aborts if the flow is already
/// unwinding.
#[must_use = "dropping the guard immediately switches back"]
pub struct ScopedContextSwitch<'a, S: ContextScheduler + ?Sized> {
    scheduler: &'a S,
    target: ContextId,
    affinity: AffinityOwner,
    _span: EnteredSpan,
    _not_send: PhantomData<*const ()>,
}

impl<'a, S: ContextScheduler + ?Sized> ScopedContextSwitch<'a, S> {
    /// Switch the calling flow to `target`.
    ///
    /// # Panics
    ///
    /// Panics if the calling flow is not on any context, or if the scheduler
    /// fails the switch.
    #[track_caller]
    pub fn new(scheduler: &'a S, target: ContextId) -> Self {
        let prior = scheduler.current_context();
        if !prior.is_valid() {
            tracing::error!(to = %target, "scoped switch requested off-context");
            panic!("cannot switch to {target}: calling flow is not on any context");
        }

        let span = context_switch_span!(prior, target).entered();
        if let Err(err) = scheduler.request_switch(target) {
            tracing::error!(
                code = err.error_code(),
                error = %err,
                "context switch failed"
            );
            panic!("failed to switch from {prior} to {target}: {err}");
        }
        tracing::trace!("entered context");

        Self {
            scheduler,
            target,
            affinity: AffinityOwner::new(prior),
            _span: span,
            _not_send: PhantomData,
        }
    }

    /// The context that will be restored on drop.
    pub fn prior_context(&self) -> ContextId {
        self.affinity.home_context()
    }

    /// The context this guard switched to.
    pub fn target_context(&self) -> ContextId {
        self.target
    }
}

impl<S: ContextScheduler + ?Sized> HomeContext for ScopedContextSwitch<'_, S> {
    fn affinity(&self) -> &AffinityOwner {
        &self.affinity
    }
}

impl<S: ContextScheduler + ?Sized> Drop for ScopedContextSwitch<'_, S> {
    fn drop(&mut self) {
        // A mismatch means a later guard is still live or leaked.
        #[cfg(debug_assertions)]
        {
            if !std::thread::panicking() {
                assert_eq!(
                    self.scheduler.current_context(),
                    self.target,
                    "scoped switches restored out of order"
                );
            }
        }

        let prior = self.affinity.home_context();
        if let Err(err) = self.scheduler.request_switch(prior) {
            tracing::error!(
                code = err.error_code(),
                error = %err,
                to = %prior,
                "failed to restore context"
            );
            if std::thread::panicking() {
                std::process::abort();
            }
            panic!("failed to restore {prior}: {err}");
        }
        tracing::trace!("restored context");
    }
}

impl<S: ContextScheduler + ?Sized> std::fmt::Debug for ScopedContextSwitch<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedContextSwitch")
            .field("prior", &self.affinity.home_context())
            .field("target", &self.target)
            .finish()
    }
}

/// Run `f` on `target` and switch back afterwards, however `f` exits.
///
/// ```
/// use tether_affinity::{current_context, on_context, ContextId, LogicalScheduler};
///
/// let scheduler = LogicalScheduler::new(2);
/// let _worker = scheduler.enter_initial();
/// let seen = on_context(&scheduler, ContextId::new(1), current_context);
/// assert_eq!(seen, ContextId::new(1));
/// assert_eq!(current_context(), ContextId::new(0));
/// ```
#[track_caller]
pub fn on_context<S, F, R>(scheduler: &S, target: ContextId, f: F) -> R
where
    S: ContextScheduler + ?Sized,
    F: FnOnce() -> R,
{
    let _switch = ScopedContextSwitch::new(scheduler, target);
    f()
}
