//! Logging setup for the CLI.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default filter when `RUST_LOG` is unset; stdout carries only diagnostics.
const DEFAULT_FILTER: &str = "off";

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
