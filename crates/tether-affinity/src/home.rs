//! Home-context affinity.
//!
//! An affine object is created on one execution context and must only be
//! used from there. [`AffinityOwner`] stores that home and checks it; types
//! embed one and implement [`HomeContext`] to expose the check.
//!
//! # Examples
//!
//! ```
//! use tether_affinity::{enter, AffinityOwner, ContextId, HomeContext};
//!
//! struct Connection {
//!     affinity: AffinityOwner,
//!     sent: u64,
//! }
//!
//! impl HomeContext for Connection {
//!     fn affinity(&self) -> &AffinityOwner {
//!         &self.affinity
//!     }
//! }
//!
//! impl Connection {
//!     fn send(&mut self) {
//!         self.assert_on_home_context();
//!         self.sent += 1;
//!     }
//! }
//!
//! let _worker = enter(ContextId::new(1));
//! let mut conn = Connection { affinity: AffinityOwner::here(), sent: 0 };
//! conn.send();
//! assert_eq!(conn.home_context(), ContextId::new(1));
//! ```

use tether_core::ContextId;

use crate::current::current_context;

/// Records the single execution context an object belongs to.
///
/// Deliberately not `Clone`: a copy would claim an affinity it has not
/// established. Dropping may happen on any context.
#[derive(Debug, PartialEq, Eq)]
pub struct AffinityOwner {
    home: ContextId,
}

impl AffinityOwner {
    /// Affinity to an explicit context.
    pub fn new(home: ContextId) -> Self {
        Self { home }
    }

    /// Affinity to whatever context the calling flow is on right now.
    pub fn here() -> Self {
        Self::new(current_context())
    }

    /// The home context.
    pub fn home_context(&self) -> ContextId {
        self.home
    }

    /// Returns true if the calling flow is on the home context.
    pub fn is_on_home_context(&self) -> bool {
        current_context() == self.home
    }

    /// Panics if the calling flow is not on the home context. Compiled out in
    /// release builds.
    #[track_caller]
    #[inline]
    pub fn assert_on_home_context(&self) {
        #[cfg(debug_assertions)]
        {
            let current = current_context();
            if current != self.home {
                panic!(
                    "affinity violation: object homed on {} accessed from {}",
                    self.home, current
                );
            }
        }
    }

    /// Move the home to `new_home`.
    ///
    /// This is the only way the home changes. Callers are responsible for
    /// having actually moved the object's state to the new context.
    pub fn rehome(&mut self, new_home: ContextId) {
        tracing::debug!(from = %self.home, to = %new_home, "rehoming affine object");
        self.home = new_home;
    }
}

/// Mixin for types pinned to a home context.
///
/// Implementors only provide [`HomeContext::affinity`].
pub trait HomeContext {
    /// The embedded affinity record.
    fn affinity(&self) -> &AffinityOwner;

    /// The home context.
    fn home_context(&self) -> ContextId {
        self.affinity().home_context()
    }

    /// Debug-build check that the caller is on the home context.
    #[track_caller]
    fn assert_on_home_context(&self) {
        self.affinity().assert_on_home_context();
    }
}

impl HomeContext for AffinityOwner {
    fn affinity(&self) -> &AffinityOwner {
        self
    }
}
