//! Observability for tether.
//! `tracing` crate with `EnvFilter`, plus span helpers for context switches.

pub mod setup;
pub mod spans;

pub use setup::init_tracing;
