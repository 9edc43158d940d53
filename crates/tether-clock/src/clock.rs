//! The logical clock value type.
//!
//! # Examples
//!
//! ```
//! use tether_clock::LogicalClock;
//!
//! let a = LogicalClock::DISTANT_PAST.successor();
//! let b = LogicalClock::DISTANT_PAST.successor();
//!
//! // Two independent advances tie; merging does not advance.
//! assert_eq!(a.merge(b), a);
//! assert_eq!(a.merge(b).successor().raw(), 2);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A counter establishing a total order over events.
///
/// Comparison is numeric. [`LogicalClock::INVALID`] is an initialization
/// placeholder only: it sorts above every real value and must be replaced
/// before the clock is advanced, merged, or compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogicalClock {
    time: u32,
}

impl LogicalClock {
    /// The earliest legitimate value: nothing has happened yet.
    pub const DISTANT_PAST: LogicalClock = LogicalClock { time: 0 };

    /// Reserved placeholder. Never produced by advancing a valid clock.
    pub const INVALID: LogicalClock = LogicalClock { time: u32::MAX };

    /// Wrap a raw counter value verbatim.
    pub const fn from_raw(time: u32) -> Self {
        Self { time }
    }

    /// The raw counter value.
    pub const fn raw(self) -> u32 {
        self.time
    }

    /// Returns true unless this is the placeholder.
    pub const fn is_valid(self) -> bool {
        self.time != u32::MAX
    }

    /// The next point in time, one tick later.
    ///
    /// Exhausting the counter range is outside the supported domain; debug
    /// builds assert that neither `self` nor the result is the placeholder.
    #[must_use]
    pub fn successor(self) -> Self {
        debug_assert!(self.is_valid(), "successor of the invalid logical clock");
        let next = Self {
            time: self.time.wrapping_add(1),
        };
        debug_assert!(next.is_valid(), "logical clock range exhausted");
        next
    }

    /// The later of two clocks. Ties return `self`, which is bit-identical.
    ///
    /// Debug builds assert that neither input is the placeholder.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        debug_assert!(
            self.is_valid() && other.is_valid(),
            "merge of the invalid logical clock"
        );
        if other.time > self.time {
            other
        } else {
            self
        }
    }

    /// Reduce clocks with [`LogicalClock::merge`], left to right in iteration
    /// order, starting from [`LogicalClock::DISTANT_PAST`].
    ///
    /// This is the supported way to compute "latest seen so far". Feed inputs
    /// in one agreed order rather than splitting them into a tree.
    pub fn fold_latest<I>(clocks: I) -> Self
    where
        I: IntoIterator<Item = LogicalClock>,
    {
        clocks
            .into_iter()
            .fold(Self::DISTANT_PAST, |latest, clock| latest.merge(clock))
    }

    /// Record a local event after observing `observed`: the clock becomes
    /// `successor(merge(self, observed))` and the new value is returned.
    ///
    /// A clock still holding the placeholder advances from
    /// [`LogicalClock::DISTANT_PAST`].
    pub fn advance_past(&mut self, observed: Self) -> Self {
        let base = if self.is_valid() {
            *self
        } else {
            Self::DISTANT_PAST
        };
        *self = base.merge(observed).successor();
        *self
    }
}

impl Default for LogicalClock {
    fn default() -> Self {
        Self::DISTANT_PAST
    }
}

impl fmt::Display for LogicalClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "t{}", self.time)
        } else {
            f.write_str("t(invalid)")
        }
    }
}

/// The later of two clocks. See [`LogicalClock::merge`].
#[must_use]
pub fn merge(a: LogicalClock, b: LogicalClock) -> LogicalClock {
    a.merge(b)
}
