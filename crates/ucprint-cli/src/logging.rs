//! Diagnostic logging.
//!
//! Events go to standard error so they never interleave with the encoded
//! bytes on standard output. The filter comes from `UCPRINT_LOG` when set,
//! otherwise from the number of `-v` flags.

use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "UCPRINT_LOG";

/// Default level for a given `-v` count.
#[must_use]
pub fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if the filter cannot be built or a subscriber is already installed.
pub fn init(verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level_for(verbosity)))
        .context("Failed to create log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to install log subscriber")
}
