//! `.ndl` template generation for the `init` command.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use super::ConfigError;
use super::defaults;

/// Generates an `.ndl` file documenting every setting with its default.
///
/// Settings are written as live lines holding the default value, so
/// parsing the template yields the default record.
#[must_use]
pub fn default_config_template() -> String {
    format!(
        "# ndl-json configuration file
#
# Syntax: [key] value;
# The trailing semicolon is optional. Lines starting with '#' are comments.
# Unknown keys are ignored. If a key appears twice, the last one wins.

# Initial vector capacity (integer, default: {size})
[vec_starting_size] {size};

# Vector growth factor (number, default: {factor:?})
[vec_growth_factor] {factor:?};

# Development mode (true/false, default: {dev_mode})
[dev_mode] {dev_mode};

# Debug output (true/false, default: {debug})
[debug] {debug};

# Output file name (default: {output})
[output] {output};
",
        size = defaults::VEC_STARTING_SIZE,
        factor = defaults::VEC_GROWTH_FACTOR,
        dev_mode = defaults::DEV_MODE,
        debug = defaults::DEBUG,
        output = defaults::OUTPUT_FILE,
    )
}

/// Writes the default template to `path`.
///
/// Without `force`, an existing file is left untouched.
///
/// # Errors
///
/// Returns [`ConfigError::FileExists`] if the file exists and `force` is
/// false, or [`ConfigError::FileWrite`] if writing fails.
pub fn write_default_config(path: &Path, force: bool) -> Result<(), ConfigError> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(path).map_err(|e| {
        if e.kind() == ErrorKind::AlreadyExists {
            ConfigError::FileExists {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::FileWrite {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    file.write_all(default_config_template().as_bytes())
        .map_err(|e| ConfigError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })
}
