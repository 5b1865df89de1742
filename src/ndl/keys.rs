//! Recognized setting keys and their coercion rules.
//!
//! Each key maps to a function that coerces the raw value and assigns it
//! to one field of a [`ConfigRecord`]. Adding a setting means adding a
//! field to the record and one entry to [`HANDLERS`].

use crate::config::ConfigRecord;

/// Result of coercing a raw value into a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerced<T> {
    /// The value converted; the field takes it.
    Set(T),
    /// The value did not convert; the field keeps what it had.
    Keep,
}

impl<T> Coerced<T> {
    /// Writes the value into `field` if coercion succeeded.
    pub fn assign_to(self, field: &mut T) -> Applied {
        match self {
            Self::Set(value) => {
                *field = value;
                Applied::Updated
            }
            Self::Keep => Applied::Kept,
        }
    }
}

/// Outcome of applying one setting to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The field now holds the new value.
    Updated,
    /// The value was rejected and the field is unchanged.
    Kept,
}

/// Associates a setting key with the field it writes.
#[derive(Debug, Clone, Copy)]
pub struct KeyHandler {
    /// Key as written between the brackets.
    pub key: &'static str,
    /// Coerces the value and stores it in the record.
    pub apply: fn(&mut ConfigRecord, &str) -> Applied,
}

/// Every recognized key.
pub static HANDLERS: &[KeyHandler] = &[
    KeyHandler {
        key: "vec_starting_size",
        apply: |record, value| parse_integer(value).assign_to(&mut record.vec_starting_size),
    },
    KeyHandler {
        key: "vec_growth_factor",
        apply: |record, value| parse_float(value).assign_to(&mut record.vec_growth_factor),
    },
    KeyHandler {
        key: "output",
        apply: |record, value| Coerced::Set(value.to_string()).assign_to(&mut record.output_file),
    },
    KeyHandler {
        key: "dev_mode",
        apply: |record, value| parse_flag(value).assign_to(&mut record.dev_mode),
    },
    KeyHandler {
        key: "debug",
        apply: |record, value| parse_flag(value).assign_to(&mut record.debug),
    },
];

/// Looks up the handler for `key` (exact, case-sensitive).
#[must_use]
pub fn handler_for(key: &str) -> Option<&'static KeyHandler> {
    HANDLERS.iter().find(|handler| handler.key == key)
}

/// Parses a signed integer, keeping the previous value on failure.
#[must_use]
pub fn parse_integer(value: &str) -> Coerced<i64> {
    value.parse().map_or(Coerced::Keep, Coerced::Set)
}

/// Parses a float, keeping the previous value on failure.
///
/// A finite literal too large for `f64` (such as `1e400`) counts as a
/// failure. Only an explicit `inf`/`infinity` spelling yields infinity.
#[must_use]
pub fn parse_float(value: &str) -> Coerced<f64> {
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_infinite() && !is_infinity_literal(value) => Coerced::Keep,
        Ok(parsed) => Coerced::Set(parsed),
        Err(_) => Coerced::Keep,
    }
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Any value other than `true` (in any case) is `false`.
#[must_use]
pub fn parse_flag(value: &str) -> Coerced<bool> {
    Coerced::Set(value.eq_ignore_ascii_case("true"))
}
