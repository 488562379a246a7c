//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Default filter when `FLIGHTS_LOG` is unset or invalid. Only warnings and
/// errors reach stderr so lookup output on stdout stays readable.
pub const DEFAULT_FILTER: &str = "flights=warn";

/// Initialize the tracing/logging system.
///
/// Reads the `FLIGHTS_LOG` environment variable for per-crate log levels.
/// Format: `FLIGHTS_LOG=flights_storage=debug,flights_cli=info`
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("FLIGHTS_LOG")
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // A subscriber may already be installed by an embedding binary or test harness.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
