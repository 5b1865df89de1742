//! Default values for configuration options.
//!
//! Centralized constants so the record, the `init` template and the tests
//! agree on what an untouched setting looks like.

/// Default initial vector capacity.
pub const VEC_STARTING_SIZE: i64 = 0;

/// Default vector growth factor.
pub const VEC_GROWTH_FACTOR: f64 = 1.5;

/// Development mode is off unless enabled.
pub const DEV_MODE: bool = false;

/// Debug output is off unless enabled.
pub const DEBUG: bool = false;

/// Default output file name.
pub const OUTPUT_FILE: &str = "main";

/// File name used by `init` when no `--output` is given.
pub const TEMPLATE_FILE_NAME: &str = "config.ndl";

/// Glob pattern for config files inside the searched directory.
pub const CONFIG_FILE_PATTERN: &str = "*.ndl";
