//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use super::ConfigError;
use super::defaults;

/// ndl-json: print an `.ndl` configuration file as JSON
///
/// Finds the first `*.ndl` file in CONFIG_DIR, parses its `[key] value;`
/// settings and writes the resulting record to standard output.
#[derive(Debug, Parser)]
#[command(name = "ndl-json")]
#[command(version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory containing the `.ndl` file (required for run mode)
    ///
    /// A directory named like a subcommand (`init`, `help`) must be given
    /// with a path prefix, e.g. `./init`.
    #[arg(value_name = "CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
}

/// Subcommands for ndl-json
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a commented `.ndl` file with every setting at its default
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::TEMPLATE_FILE_NAME)]
        output: PathBuf,

        /// Overwrite the output file if it exists
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    ///
    /// # Errors
    ///
    /// Returns clap's error for invalid arguments, `--help` and `--version`;
    /// the caller decides how to print it and which exit code to use.
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }

    /// Returns the directory to search in run mode.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingDirectory`] when no directory was given.
    pub fn require_config_dir(&self) -> Result<&Path, ConfigError> {
        self.config_dir
            .as_deref()
            .ok_or(ConfigError::MissingDirectory)
    }
}
