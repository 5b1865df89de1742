//! ndl-json: `.ndl` to JSON converter
//!
//! A library for locating an `.ndl` configuration file in a directory,
//! parsing its `[key] value;` settings into a fixed record, and encoding
//! that record as JSON.

pub mod config;
pub mod emit;
pub mod locator;
pub mod ndl;
