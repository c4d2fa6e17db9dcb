//! INI text reader and writer for [`SectionStore`].
//!
//! The accepted dialect is the classic one:
//!
//! ```ini
//! # full-line comments start with '#' or ';'
//! [section]
//! key = value
//! other: value ; trailing comment
//! multi = first
//!     second
//! ```
//!
//! Option names run up to the first `=` or `:`, so directive lines such as
//! `<<= <base` and `<= base` read as the keys `<<` and `<`. Indented lines
//! continue the previous value, joined with `\n`. Section names and keys
//! are case-sensitive. A section header that appears twice adds to the
//! first occurrence.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::store::{SectionStore, Store};

/// Parse INI text into a store.
///
/// # Errors
///
/// Returns `Error::Parse` for an option before any section header, an
/// unterminated header, an empty section name, or a line that is neither
/// a header, an option nor a continuation.
///
/// # Examples
///
/// ```
/// use enhance::store::{ini, Store};
///
/// let store = ini::parse("[base]\nalpha = 1.0\n").unwrap();
/// assert_eq!(store.get_option("base", "alpha").unwrap(), "1.0");
/// ```
pub fn parse(text: &str) -> Result<SectionStore> {
    let mut store = SectionStore::new();
    let mut section: Option<String> = None;
    let mut last_key: Option<String> = None;

    for (index, raw) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim_end_matches('\r');

        if line.trim().is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let indented = line.starts_with(char::is_whitespace);
        if indented {
            if let (Some(name), Some(key)) = (&section, &last_key) {
                let mut value = store.get_option(name, key)?;
                value.push('\n');
                value.push_str(line.trim());
                store.set_option(name, key, &value)?;
                continue;
            }
        }

        let line = line.trim();
        if let Some(rest) = line.strip_prefix('[') {
            let name = rest
                .strip_suffix(']')
                .ok_or_else(|| parse_error(line_no, "unterminated section header"))?
                .trim();
            if name.is_empty() {
                return Err(parse_error(line_no, "empty section name"));
            }
            store.add_section(name);
            section = Some(name.to_string());
            last_key = None;
            continue;
        }

        let Some(name) = &section else {
            return Err(parse_error(line_no, "option outside of a section"));
        };
        let (key, value) = split_option(line)
            .ok_or_else(|| parse_error(line_no, &format!("expected 'key = value', got '{line}'")))?;
        store.set_option(name, key, value)?;
        last_key = Some(key.to_string());
    }

    Ok(store)
}

/// Read and parse an INI file.
///
/// # Errors
///
/// Returns `InvalidPath` if the file cannot be read and `Parse` if its
/// contents are not valid INI.
pub fn load(path: &Path) -> Result<SectionStore> {
    let text = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read INI file: {e}"),
    })?;
    parse(&text)
}

/// Render a store back to INI text.
///
/// Multi-line values are written as indented continuation lines. The
/// output parses back to the same store unless a value contains ` ;` or
/// `\t;`, which [`parse`] reads as the start of an inline comment.
///
/// # Examples
///
/// ```
/// use enhance::store::{ini, SectionStore, Store};
///
/// let mut store = SectionStore::new();
/// store.add_section("base");
/// store.set_option("base", "alpha", "1.0").unwrap();
/// assert_eq!(ini::render(&store), "[base]\nalpha = 1.0\n");
/// ```
#[must_use]
pub fn render(store: &SectionStore) -> String {
    let mut out = String::new();
    for (position, (name, options)) in store.iter().enumerate() {
        if position > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "[{name}]");
        for (key, value) in options {
            if value.is_empty() {
                let _ = writeln!(out, "{key} =");
            } else {
                let _ = writeln!(out, "{key} = {}", value.replace('\n', "\n\t"));
            }
        }
    }
    out
}

fn split_option(line: &str) -> Option<(&str, &str)> {
    let split = line.find(['=', ':'])?;
    let key = line[..split].trim();
    if key.is_empty() {
        return None;
    }
    let mut value = line[split + 1..].trim();
    // A ';' preceded by whitespace starts an inline comment.
    if let Some(pos) = value.find(" ;").or_else(|| value.find("\t;")) {
        value = value[..pos].trim_end();
    }
    Some((key, value))
}

fn parse_error(line: usize, message: &str) -> Error {
    Error::Parse {
        line,
        message: message.to_string(),
    }
}
