//! The configuration record produced by parsing an `.ndl` file.

use std::fmt;

use serde::{Serialize, Serializer};

use super::defaults;

/// Settings extracted from an `.ndl` file.
///
/// Every field starts at its default (see [`defaults`]) and is only
/// overwritten by a recognized setting line. Serialization keeps the
/// declaration order, which is the order of keys in the JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigRecord {
    /// Initial vector capacity (`vec_starting_size`).
    pub vec_starting_size: i64,

    /// Vector growth factor (`vec_growth_factor`).
    ///
    /// Non-finite values are accepted while parsing but rejected when
    /// serializing, since JSON has no representation for them.
    #[serde(serialize_with = "finite_f64")]
    pub vec_growth_factor: f64,

    /// Development mode (`dev_mode`).
    pub dev_mode: bool,

    /// Debug output (`debug`).
    pub debug: bool,

    /// Output file name (`output`).
    pub output_file: String,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            vec_starting_size: defaults::VEC_STARTING_SIZE,
            vec_growth_factor: defaults::VEC_GROWTH_FACTOR,
            dev_mode: defaults::DEV_MODE,
            debug: defaults::DEBUG,
            output_file: defaults::OUTPUT_FILE.to_string(),
        }
    }
}

impl fmt::Display for ConfigRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ConfigRecord {{ vec_starting_size: {}, vec_growth_factor: {}, dev_mode: {}, \
             debug: {}, output_file: {:?} }}",
            self.vec_starting_size,
            self.vec_growth_factor,
            self.dev_mode,
            self.debug,
            self.output_file,
        )
    }
}

/// Serializes an `f64`, failing for NaN and infinities.
///
/// `serde_json` would otherwise silently write `null`.
#[allow(clippy::trivially_copy_pass_by_ref)] // signature required by serde
fn finite_f64<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        Err(serde::ser::Error::custom(format!(
            "vec_growth_factor must be a finite number, got {value}"
        )))
    }
}
