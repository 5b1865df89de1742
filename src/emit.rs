//! JSON output of a [`ConfigRecord`].

use std::io::Write;

use thiserror::Error;

use crate::config::ConfigRecord;

#[cfg(test)]
#[path = "emit_tests.rs"]
mod tests;

/// Error type for writing the JSON document.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The record could not be encoded as JSON.
    #[error("Failed to encode JSON: {0}")]
    Encode(#[source] serde_json::Error),

    /// The encoded document could not be written out.
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),
}

/// Layout of the JSON document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Everything on one line.
    #[default]
    Compact,
    /// Indented, one field per line.
    Pretty,
}

impl Format {
    /// Picks the format from the `--pretty` flag.
    #[must_use]
    pub const fn from_pretty(pretty: bool) -> Self {
        if pretty { Self::Pretty } else { Self::Compact }
    }
}

/// Encodes `record` as a JSON string without a trailing newline.
///
/// # Errors
///
/// Returns [`EmitError::Encode`] if the record holds a value JSON cannot
/// represent (a non-finite growth factor).
pub fn to_json(record: &ConfigRecord, format: Format) -> Result<String, EmitError> {
    let encoded = match format {
        Format::Compact => serde_json::to_string(record),
        Format::Pretty => serde_json::to_string_pretty(record),
    };
    encoded.map_err(EmitError::Encode)
}

/// Writes `record` as JSON followed by a newline, then flushes.
///
/// Nothing is written if encoding fails.
///
/// # Errors
///
/// Returns [`EmitError::Encode`] or [`EmitError::Write`].
pub fn write_record<W: Write>(
    out: &mut W,
    record: &ConfigRecord,
    format: Format,
) -> Result<(), EmitError> {
    let json = to_json(record, format)?;
    writeln!(out, "{json}").map_err(EmitError::Write)?;
    out.flush().map_err(EmitError::Write)
}
