//! # tether-core
//!
//! Foundation crate for the tether affinity primitives.
//! Defines context ids, errors, config, tracing setup, and constants.
//! `tether-affinity` and `tether-clock` both depend on this.

pub mod config;
pub mod constants;
pub mod context_id;
pub mod errors;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::TetherConfig;
pub use context_id::ContextId;
pub use errors::{ClockError, ConfigError, Interrupted, SwitchError, TetherErrorCode};
