//! Parser for the `.ndl` configuration format.
//!
//! An `.ndl` file is line oriented:
//!
//! ```text
//! # comment
//! [vec_starting_size] 16;
//! [debug] true
//! ```
//!
//! Parsing is permissive. Lines that are not settings, unknown keys and
//! values that fail to convert are skipped without error; only I/O
//! failures are reported, as [`ParseIssue`]s next to the record.

mod error;
mod keys;
mod line;
mod parser;


pub use error::ParseIssue;
pub use keys::{
    Applied, Coerced, HANDLERS, KeyHandler, handler_for, parse_flag, parse_float, parse_integer,
};
pub use line::{Line, Setting, classify_line, parse_line};
pub use parser::{ParseReport, parse_file, parse_reader, parse_str};
