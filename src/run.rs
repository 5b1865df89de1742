//! Application execution logic.
//!
//! Runs the locate → parse → emit pipeline for one invocation.

use std::io::Write;

use thiserror::Error;

use ndl_json::config::{Cli, ConfigError, ConfigRecord};
use ndl_json::emit::{self, EmitError, Format};
use ndl_json::locator::{self, LocateError};
use ndl_json::ndl::{self, ParseReport};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for failures that end the run.
#[derive(Debug, Error)]
pub enum RunError {
    /// The command line was incomplete.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No config file could be found.
    #[error(transparent)]
    Locate(#[from] LocateError),

    /// The record could not be written as JSON.
    #[error(transparent)]
    Emit(#[from] EmitError),
}

/// Executes one run and writes the JSON document to `out`.
///
/// This function:
/// 1. Locates the `.ndl` file in the configured directory
/// 2. Parses it, reporting recovered problems to `diagnostics`
/// 3. Writes the record to `out`
///
/// # Errors
///
/// Returns an error if the directory is missing from the command line, no
/// config file exists, or the record cannot be encoded or written.
pub fn execute<W: Write, D: Write>(
    cli: &Cli,
    out: &mut W,
    diagnostics: &mut D,
) -> Result<(), RunError> {
    let record = load_record(cli, diagnostics)?;
    tracing::debug!("{record}");

    emit::write_record(out, &record, Format::from_pretty(cli.pretty))?;
    Ok(())
}

fn load_record<D: Write>(cli: &Cli, diagnostics: &mut D) -> Result<ConfigRecord, RunError> {
    let dir = cli.require_config_dir()?;
    let path = locator::locate(dir)?;
    tracing::info!(path = %path.display(), "Using config file");

    let report = ndl::parse_file(&path);
    Ok(report_issues(report, diagnostics))
}

/// Writes every recovered problem to `diagnostics`, whatever the log filter.
fn report_issues<D: Write>(report: ParseReport, diagnostics: &mut D) -> ConfigRecord {
    for issue in &report.issues {
        tracing::debug!(?issue, "Recovered from parse issue");
        // Diagnostics are best effort; they never fail the run.
        let _ = writeln!(diagnostics, "warning: {issue}");
    }
    report.record
}
