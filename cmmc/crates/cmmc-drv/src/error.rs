//! Error handling module for the cmmc driver.
//!
//! Every failure of a run ends up as a [`DriverError`]; `main` turns it into
//! an exit status with [`DriverError::exit_code`].

use std::io;
use std::path::PathBuf;

use cmmc_lex::LexError;
use cmmc_util::DiagnosticError;
use thiserror::Error;

/// Exit status of a run that found a lexical error.
pub const EXIT_LEXICAL: u8 = 1;

/// Exit status of a usage, configuration or I/O failure.
pub const EXIT_FAILURE: u8 = 2;

/// Main error type for the cmmc driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// The configuration file is missing or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The input file could not be read.
    #[error("cannot read {}: {}", .path.display(), .source)]
    Input {
        /// The file that was requested
        path: PathBuf,
        /// The underlying failure
        #[source]
        source: io::Error,
    },

    /// Reading standard input or writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The tracing subscriber could not be set up.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// A diagnostic could not be rendered against its source.
    #[error("Diagnostic error: {0}")]
    Diagnostic(#[from] DiagnosticError),

    /// The source contains an illegal character.
    ///
    /// The diagnostic line has already been written to standard output when
    /// this is returned.
    #[error("{0}")]
    Lexical(#[from] LexError),
}

impl DriverError {
    /// The process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Lexical(_) => EXIT_LEXICAL,
            _ => EXIT_FAILURE,
        }
    }

    /// Returns true if the error was already reported on standard output.
    pub fn is_reported(&self) -> bool {
        matches!(self, DriverError::Lexical(_))
    }
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
