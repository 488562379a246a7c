//! Logging for the flight records lookup tool.
//! `tracing` crate with `EnvFilter`; diagnostics go to stderr.

pub mod setup;

pub use setup::init_tracing;
