//! Logging setup.
//!
//! Logs go to standard error only; standard output carries nothing but
//! token records and the lexical error line.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::Settings;
use crate::error::{DriverError, Result};

/// Environment variable holding a filter directive that overrides
/// everything else.
pub const LOG_ENV: &str = "CMMC_LOG";

/// Picks the filter directive for a run.
///
/// `CMMC_LOG` wins over the configuration file's `log.filter`, which wins
/// over the level implied by `--verbose`.
pub fn filter_directive(settings: &Settings, env: Option<&str>) -> String {
    env.filter(|directive| !directive.trim().is_empty())
        .or(settings.log_filter.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| if settings.verbose { "debug" } else { "warn" }.to_string())
}

/// Initialize the logging system.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let env = std::env::var(LOG_ENV).ok();
    let directive = filter_directive(settings, env.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| DriverError::Logging(format!("invalid filter '{}': {}", directive, e)))?;

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(settings.ansi)
        .with_target(settings.verbose)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| DriverError::Logging(e.to_string()))?;

    Ok(())
}
