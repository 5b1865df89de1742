//! Error types for command-line configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers usage errors in run mode and failures of the `init` command.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory was given in run mode.
    #[error("Missing required argument: <CONFIG_DIR>")]
    MissingDirectory,

    /// `init` would overwrite an existing file.
    #[error("Refusing to overwrite existing file '{}' (use --force)", path.display())]
    FileExists {
        /// Path that already exists
        path: PathBuf,
    },

    /// Failed to write the template file.
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Returns true if the error comes from how the program was invoked.
    #[must_use]
    pub const fn is_usage(&self) -> bool {
        matches!(self, Self::MissingDirectory)
    }
}
