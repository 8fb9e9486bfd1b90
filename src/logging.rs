//! logging
//!
//! Diagnostic logging through `tracing`.
//!
//! Diagnostics are separate from user-facing messages ([`crate::ui::output`]):
//! they go to stderr, stay at `warn` by default and are raised to `debug`
//! with `--debug`. `RUST_LOG` takes precedence over both.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log level of the `gitwit` target for the given flags.
pub fn default_level(debug: bool) -> Level {
    if debug {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Filter directive used when `RUST_LOG` is not set.
pub fn default_filter(debug: bool) -> String {
    format!("gitwit={}", default_level(debug))
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logging(debug: bool) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(debug)
            .with_file(false)
            .with_line_number(false),
    );

    let _ = subscriber.try_init();
}
