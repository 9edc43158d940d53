//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize the tether tracing/logging system.
///
/// Reads the variable named by `config.log_env_var` (`TETHER_LOG` by default)
/// for a full filter directive, e.g. `TETHER_LOG=tether_affinity=trace`.
/// Falls back to `tether=<log_level>` if the variable is unset or invalid.
///
/// Idempotent. Does nothing if another global subscriber is already set.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(&config.log_env_var)
            .unwrap_or_else(|_| EnvFilter::new(fallback_directive(&config.log_level)));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_thread_names(true),
            )
            .with(filter)
            .try_init();
    });
}

fn fallback_directive(level: &str) -> String {
    ["tether_core", "tether_affinity", "tether_clock"]
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
