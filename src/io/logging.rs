//! Tracing subscriber setup for the command-line runner

use tracing_subscriber::EnvFilter;

use crate::io::error::{KolamError, Result};

/// Default filter directive for a verbosity count
///
/// `RUST_LOG` overrides this when set.
pub const fn filter_directive(verbosity: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a global fmt subscriber writing to stderr
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed
pub fn init_tracing(verbosity: u8, quiet: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbosity, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| KolamError::Logging {
            reason: e.to_string(),
        })
}
