//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Consorte tracing/logging system.
///
/// Reads the `CONSORTE_LOG` environment variable for per-subsystem log
/// levels. Format: `CONSORTE_LOG=consorte_engine=debug,consorte_core=warn`
///
/// Falls back to `consorte=info` if `CONSORTE_LOG` is not set or is
/// invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CONSORTE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("consorte=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
