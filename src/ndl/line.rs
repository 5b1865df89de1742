//! Tokenizing a single `.ndl` line.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `[key]value`: the key runs from the first `[` to the first `]`
/// after it, the value is the rest of the line.
static SETTING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\](.*)").expect("setting pattern is valid"));

/// A key/value pair taken from a setting line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting<'a> {
    /// Text between the brackets, exactly as written.
    pub key: &'a str,
    /// Text after the closing bracket, trimmed, with one trailing `;` removed.
    pub value: &'a str,
}

/// What a raw line turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or whitespace only.
    Blank,
    /// Starts with `#` after trimming.
    Comment,
    /// A `[key] value;` line.
    Setting(Setting<'a>),
    /// Anything else; ignored by the parser.
    Malformed,
}

/// Classifies one raw line of an `.ndl` file.
#[must_use]
pub fn classify_line(raw: &str) -> Line<'_> {
    let line = raw.trim();
    if line.is_empty() {
        return Line::Blank;
    }
    if line.starts_with('#') {
        return Line::Comment;
    }
    parse_line(line).map_or(Line::Malformed, Line::Setting)
}

/// Extracts the key and value from a setting line.
///
/// Returns `None` when the line has no `[` followed by a `]`. The match is
/// not anchored, so anything before the first `[` is ignored.
#[must_use]
pub fn parse_line(line: &str) -> Option<Setting<'_>> {
    let captures = SETTING_PATTERN.captures(line)?;
    let key = captures.get(1)?.as_str();
    let rest = captures.get(2)?.as_str().trim_end();
    let value = rest.strip_suffix(';').unwrap_or(rest).trim();
    Some(Setting { key, value })
}
