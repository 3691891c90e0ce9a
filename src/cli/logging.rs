//! Structured logging setup.
//!
//! Log lines go to stderr so that stdout only carries the command report.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("transtat={}", level)));

    // A subscriber may already be installed when running inside tests.
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .without_time()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr)
                .compact(),
        )
        .try_init()
        .ok();
}
