//! Structured logging setup
//!
//! The library itself only emits `tracing` events and spans; binaries and
//! tests that want to see them can call [`init_tracing`] to install a
//! compact stderr subscriber. The `QUIVER_LOG` environment variable (or the
//! standard `RUST_LOG`) overrides the programmatic level.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging with the given default level
///
/// `level` is a tracing directive such as `"debug"` or `"quiver=trace"`.
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(level: &str) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("QUIVER_LOG"))
        .unwrap_or_else(|_| {
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("quiver={}", level)
            })
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
