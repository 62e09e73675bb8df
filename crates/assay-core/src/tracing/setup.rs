//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the assay logging system.
///
/// Reads the `ASSAY_LOG` environment variable for per-module log levels,
/// e.g. `ASSAY_LOG=assay_analysis::pipeline=debug,assay_analysis=info`.
/// Falls back to `assay=info` when unset or invalid. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env("ASSAY_LOG").unwrap_or_else(|_| EnvFilter::new("assay=info"));

        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_thread_ids(true))
            .with(filter)
            .try_init();
    });
}
