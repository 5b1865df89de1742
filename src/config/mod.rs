//! Configuration layer for ndl-json.
//!
//! This module provides:
//! - The parsed settings record ([`ConfigRecord`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - Template generation for `init` ([`write_default_config`])
//! - Default values ([`defaults`])
//!
//! # Missing input policy
//!
//! Run mode requires a directory argument and a `.ndl` file inside it;
//! either one missing ends the run with exit code 1. Problems *inside*
//! the file never do: the record falls back to defaults field by field.

mod cli;
pub mod defaults;
mod error;
mod record;
mod template;


pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use record::ConfigRecord;
pub use template::{default_config_template, write_default_config};
