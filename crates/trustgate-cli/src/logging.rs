//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Install the stderr subscriber.
///
/// Reads `TRUSTGATE_LOG` for directives, e.g. `TRUSTGATE_LOG=trustgate_domain=debug`.
/// Falls back to `trustgate=info` if unset or invalid. Idempotent.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("TRUSTGATE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("trustgate=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
