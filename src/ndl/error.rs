//! Recoverable problems met while parsing an `.ndl` file.

use std::path::PathBuf;

use thiserror::Error;

/// A problem the parser recovered from.
///
/// None of these abort parsing: the record falls back to defaults (for
/// [`ParseIssue::Open`]) or keeps what was read so far (for
/// [`ParseIssue::Read`]).
#[derive(Debug, Error)]
pub enum ParseIssue {
    /// The file could not be opened.
    #[error("Failed to open config file '{}': {source}", path.display())]
    Open {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading stopped partway through the input.
    #[error("Failed to read '{origin}' at line {line}: {source}")]
    Read {
        /// Where the input came from (file path or a label)
        origin: String,
        /// 1-based number of the line that could not be read
        line: usize,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
