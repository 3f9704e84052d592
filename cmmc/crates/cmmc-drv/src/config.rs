//! Configuration module for the cmmc driver.
//!
//! Configuration comes from a TOML file that is only read when named
//! explicitly, with `--config` or `CMMC_CONFIG`. Command-line flags take
//! precedence over the file, and the file over the defaults.
//!
//! ```toml
//! layout = "inline"
//! verbose = false
//!
//! [log]
//! filter = "cmmc_lex=trace"
//! ansi = false
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use cmmc_lex::Layout;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::error::{DriverError, Result};

/// Record layout as named on the command line and in configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutSetting {
    /// One record per line
    #[default]
    Lines,
    /// Records in place of their lexemes, keeping the source's line structure
    Inline,
}

impl From<LayoutSetting> for Layout {
    fn from(setting: LayoutSetting) -> Self {
        match setting {
            LayoutSetting::Lines => Layout::Lines,
            LayoutSetting::Inline => Layout::Inline,
        }
    }
}

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Record layout.
    #[serde(default)]
    pub layout: LayoutSetting,

    /// Debug logging and full diagnostics on standard error.
    #[serde(default)]
    pub verbose: bool,

    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
}

/// Logging options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    /// A tracing `EnvFilter` directive, e.g. `cmmc_lex=trace`.
    #[serde(default)]
    pub filter: Option<String>,

    /// Colored log output.
    #[serde(default = "default_true")]
    pub ansi: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: None,
            ansi: true,
        }
    }
}

impl Config {
    /// Loads the configuration file at `path`, or the defaults when no path
    /// is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DriverError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DriverError::Config(format!("Failed to parse configuration: {}", e)))
    }
}

/// The effective settings of one run, after merging flags, file and
/// defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Source file, or `None` for standard input.
    pub input: Option<PathBuf>,
    /// Record layout.
    pub layout: Layout,
    /// Debug logging and full diagnostics on standard error.
    pub verbose: bool,
    /// Filter directive from the configuration file.
    pub log_filter: Option<String>,
    /// Colored log output.
    pub ansi: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::resolve(&Cli::default(), &Config::default())
    }
}

impl Settings {
    /// Merges command-line flags over a loaded configuration.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            input: cli.input.clone(),
            layout: cli.layout.unwrap_or(config.layout).into(),
            verbose: cli.verbose || config.verbose,
            log_filter: config.log.filter.clone(),
            ansi: !cli.no_color && config.log.ansi,
        }
    }
}
