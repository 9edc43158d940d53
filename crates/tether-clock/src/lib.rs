//! # tether-clock
//!
//! A logical clock: an opaque counter that orders replicated events without
//! consulting wall-clock time.
//!
//! - [`LogicalClock`] — the counter value, with [`LogicalClock::successor`]
//!   and [`LogicalClock::merge`]
//! - [`merge`] — free-function form of the merge
//! - [`codec`] — fixed-width byte encoding
//!
//! ## Merge is not associative
//!
//! Merging keeps the numerically larger value. Nothing else is attached to a
//! clock today, so regrouping a reduction happens to give the same number,
//! but callers must not rely on that: reduce with
//! [`LogicalClock::fold_latest`], a left fold in one agreed order.

pub mod clock;
pub mod codec;

pub use clock::{merge, LogicalClock};
