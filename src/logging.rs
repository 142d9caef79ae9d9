//! Logging initialization for the CLI
//!
//! Diagnostics go to stderr through tracing so stdout stays free for the
//! summary output.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Map `-v`/`-q` flags to a level: warn by default, errors only when quiet
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Initialize the tracing subscriber
///
/// `RUST_LOG` takes precedence over the flags when set. Calling this more
/// than once is a no-op.
pub fn init(verbosity: u8, quiet: bool) {
    let level = level_for(verbosity, quiet);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}
