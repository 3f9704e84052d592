//! cmmc-drv - Lexer Driver
//!
//! The process boundary around `cmmc-lex`: argument parsing, configuration,
//! logging, reading the source, writing token records and mapping the
//! outcome to an exit status.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

use std::io;

pub use cli::Cli;
pub use config::{Config, LayoutSetting, LogConfig, Settings};
pub use error::{DriverError, Result, EXIT_FAILURE, EXIT_LEXICAL};
pub use session::{Outcome, Session, STDIN_NAME};

/// Runs one invocation end to end.
///
/// Returns the number of records written. A lexical error comes back as
/// [`DriverError::Lexical`] after its line has been written to standard
/// output.
pub fn run(cli: Cli) -> Result<usize> {
    let config = Config::load(cli.config.as_deref())?;
    let settings = Settings::resolve(&cli, &config);
    logging::init_logging(&settings)?;

    let session = Session::from_settings(settings)?;
    let stdout = io::stdout();
    let stderr = io::stderr();
    session.run(stdout.lock(), stderr.lock())?.into_result()
}
