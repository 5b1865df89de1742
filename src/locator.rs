//! Finding the `.ndl` file to parse.

use std::path::{Path, PathBuf};

use glob::Pattern;
use thiserror::Error;

use crate::config::defaults::CONFIG_FILE_PATTERN;

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;

/// Error type for config file discovery.
#[derive(Debug, Error)]
pub enum LocateError {
    /// The directory holds no file matching `*.ndl`.
    #[error("No config file found in '{}'", dir.display())]
    NoConfigFile {
        /// Directory that was searched
        dir: PathBuf,
    },

    /// The directory path is not valid UTF-8 and cannot be globbed.
    #[error("Config directory path is not valid UTF-8: '{}'", dir.display())]
    NonUtf8Path {
        /// Directory that was given
        dir: PathBuf,
    },

    /// The glob pattern built from the directory was rejected.
    #[error("Invalid search pattern '{pattern}': {source}")]
    Pattern {
        /// Pattern that failed to compile
        pattern: String,
        /// Underlying glob error
        #[source]
        source: glob::PatternError,
    },
}

/// Returns the first `*.ndl` file directly inside `dir`.
///
/// Matches come from the `glob` crate, which yields them sorted by path;
/// callers should still treat the choice among several files as
/// unspecified. Directories named `*.ndl` are skipped. A directory that
/// does not exist is searched like an empty one.
///
/// # Errors
///
/// Returns [`LocateError::NoConfigFile`] when nothing matches, or a
/// pattern error when `dir` cannot be turned into a glob.
pub fn locate(dir: &Path) -> Result<PathBuf, LocateError> {
    let pattern = search_pattern(dir)?;
    tracing::debug!(%pattern, "Searching for config file");

    let entries = glob::glob(&pattern).map_err(|source| LocateError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "Found config file");
                return Ok(path);
            }
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Skipping non-file match");
            }
            Err(e) => {
                tracing::debug!("Skipping unreadable entry: {e}");
            }
        }
    }

    Err(LocateError::NoConfigFile {
        dir: dir.to_path_buf(),
    })
}

/// Builds `<dir>/*.ndl` with `dir` escaped so its own characters match literally.
fn search_pattern(dir: &Path) -> Result<String, LocateError> {
    let dir_str = dir.to_str().ok_or_else(|| LocateError::NonUtf8Path {
        dir: dir.to_path_buf(),
    })?;

    let escaped = Pattern::escape(dir_str);
    let joined = Path::new(&escaped).join(CONFIG_FILE_PATTERN);

    // `escaped` came from a UTF-8 string, so the join is UTF-8 too.
    Ok(joined.to_string_lossy().into_owned())
}
