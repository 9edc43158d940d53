//! Error handling for tether.
//! One error enum per subsystem, `thiserror` only.
//!
//! Wrong-context access is a programmer error and never shows up here; it is
//! a debug-build panic raised by the affinity check.

pub mod clock_error;
pub mod config_error;
pub mod error_code;
pub mod interrupted;
pub mod switch_error;

pub use clock_error::ClockError;
pub use config_error::ConfigError;
pub use error_code::TetherErrorCode;
pub use interrupted::Interrupted;
pub use switch_error::SwitchError;
