//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use ndl_json::config::ConfigError;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::run::RunError;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0).
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Any fatal error (exit code 1) - bad arguments, no config file,
    /// JSON encoding or output failure.
    pub const FAILURE: ExitCode = ExitCode::FAILURE;
}

/// Prints helpful hints for common errors.
pub fn print_run_hint(error: &RunError) {
    match error {
        RunError::Config(e) if e.is_usage() => print_usage_hint(),
        RunError::Locate(_) => {
            eprintln!("\nRun 'ndl-json init' to generate a configuration template.");
        }
        _ => {}
    }
}

/// Prints a hint for `init` failures.
pub fn print_init_hint(error: &ConfigError) {
    if matches!(error, ConfigError::FileExists { .. }) {
        eprintln!("\nPass --output to choose another path.");
    }
}

/// Prints the short usage line.
pub fn print_usage_hint() {
    eprintln!("\nUsage: ndl-json [OPTIONS] <CONFIG_DIR>");
    eprintln!("For more information, try '--help'.");
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to stderr so standard output carries only the JSON document.
pub fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
