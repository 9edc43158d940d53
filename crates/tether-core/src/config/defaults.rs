// Single source of truth for all default values.

// --- Scheduler ---
pub const DEFAULT_CONTEXT_COUNT: usize = 1;
pub const DEFAULT_INITIAL_CONTEXT: u32 = 0;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
