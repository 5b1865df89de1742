//! Building a [`ConfigRecord`] from `.ndl` input.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;

use crate::config::ConfigRecord;

use super::error::ParseIssue;
use super::keys::{Applied, handler_for};
use super::line::{Line, Setting, classify_line};

/// A parsed record together with the problems recovered from on the way.
#[derive(Debug, Default)]
pub struct ParseReport {
    /// The settings, with defaults for anything not read.
    pub record: ConfigRecord,
    /// Open and read failures, in the order they happened.
    pub issues: Vec<ParseIssue>,
}

impl ParseReport {
    /// Returns true if the input was read completely.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Parses the `.ndl` file at `path`.
///
/// An empty path yields the default record. A file that cannot be opened
/// yields the default record plus a [`ParseIssue::Open`].
pub fn parse_file(path: &Path) -> ParseReport {
    if path.as_os_str().is_empty() {
        return ParseReport::default();
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(source) => {
            return ParseReport {
                record: ConfigRecord::default(),
                issues: vec![ParseIssue::Open {
                    path: path.to_path_buf(),
                    source,
                }],
            };
        }
    };

    tracing::debug!(path = %path.display(), "Parsing config file");
    parse_reader(BufReader::new(file), &path.display().to_string())
}

/// Parses `.ndl` content from any buffered reader.
///
/// `origin` names the input in diagnostics. Bytes that are not valid
/// UTF-8 are replaced rather than rejected. A read error ends the scan;
/// settings from the lines before it are kept.
pub fn parse_reader<R: BufRead>(reader: R, origin: &str) -> ParseReport {
    let mut report = ParseReport::default();

    for (index, line) in reader.split(b'\n').enumerate() {
        match line {
            Ok(bytes) => {
                let line = String::from_utf8_lossy(&bytes);
                apply_line(&mut report.record, &line, index + 1);
            }
            Err(source) => {
                report.issues.push(ParseIssue::Read {
                    origin: origin.to_string(),
                    line: index + 1,
                    source,
                });
                break;
            }
        }
    }

    report
}

/// Parses `.ndl` content held in memory.
#[must_use]
pub fn parse_str(content: &str) -> ConfigRecord {
    parse_reader(Cursor::new(content), "<string>").record
}

fn apply_line(record: &mut ConfigRecord, raw: &str, number: usize) {
    match classify_line(raw) {
        Line::Blank | Line::Comment => {}
        Line::Malformed => {
            tracing::debug!(line = number, "Skipping line without [key]");
        }
        Line::Setting(setting) => apply_setting(record, setting, number),
    }
}

fn apply_setting(record: &mut ConfigRecord, setting: Setting<'_>, number: usize) {
    let Some(handler) = handler_for(setting.key) else {
        tracing::debug!(line = number, key = setting.key, "Ignoring unknown key");
        return;
    };

    if (handler.apply)(record, setting.value) == Applied::Kept {
        tracing::debug!(
            line = number,
            key = setting.key,
            value = setting.value,
            "Value not understood, keeping previous"
        );
    }
}
