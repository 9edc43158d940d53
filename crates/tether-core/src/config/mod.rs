//! Configuration system for tether.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod defaults;
pub mod observability_config;
pub mod scheduler_config;
pub mod tether_config;

pub use observability_config::ObservabilityConfig;
pub use scheduler_config::SchedulerConfig;
pub use tether_config::TetherConfig;
