/// tether version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raw value reserved for "no context".
pub const INVALID_CONTEXT_RAW: u32 = u32::MAX;

/// Upper bound (exclusive) for a configured context pool.
pub const MAX_CONTEXT_COUNT: usize = INVALID_CONTEXT_RAW as usize;

/// Width in bytes of an encoded logical clock.
pub const LOGICAL_CLOCK_ENCODED_LEN: usize = 4;

/// Default environment variable read for log filters.
pub const DEFAULT_LOG_ENV_VAR: &str = "TETHER_LOG";
