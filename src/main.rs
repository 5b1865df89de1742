//! ndl-json: `.ndl` to JSON converter
//!
//! Entry point for the ndl-json application.

use std::io;
use std::path::Path;
use std::process::ExitCode;

use ndl_json::config::{Cli, Command, write_default_config};

mod app;
mod run;

use app::{exit_code, print_init_hint, print_run_hint, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = match Cli::try_parse_args() {
        Ok(cli) => cli,
        Err(e) => return handle_arg_error(&e),
    };

    // Handle init subcommand
    if let Some(Command::Init { output, force }) = &cli.command {
        return handle_init(output, *force);
    }

    setup_tracing(cli.verbose);

    let mut out = io::stdout().lock();
    let mut diagnostics = io::stderr().lock();
    match run::execute(&cli, &mut out, &mut diagnostics) {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            print_run_hint(&e);
            exit_code::FAILURE
        }
    }
}

/// Prints clap's message; help and version are not failures.
fn handle_arg_error(error: &clap::Error) -> ExitCode {
    // Printing only fails if the terminal is gone; the exit code still applies.
    let _ = error.print();
    if error.use_stderr() {
        exit_code::FAILURE
    } else {
        exit_code::SUCCESS
    }
}

/// Handles the `init` subcommand.
fn handle_init(output: &Path, force: bool) -> ExitCode {
    match write_default_config(output, force) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            print_init_hint(&e);
            exit_code::FAILURE
        }
    }
}
