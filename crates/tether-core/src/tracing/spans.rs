//! Span definitions for affinity operations.

/// Create a span covering the lifetime of a scoped context switch.
#[macro_export]
macro_rules! context_switch_span {
    ($from:expr, $to:expr) => {
        ::tracing::trace_span!("tether.switch", from = %$from, to = %$to)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SWITCH: &str = "tether.switch";
}
