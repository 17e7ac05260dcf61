//! Outline parser: indented text to `(depth, name)` pairs.
//!
//! One leading space is one level of indentation. Names are trimmed on both
//! sides, so trailing whitespace and `\r` never end up in a directory name.
//! No validation happens here; that is the job of [`crate::domain::Tree`].

use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

const INDENT: char = ' ';
const BOM: char = '\u{feff}';

/// What to do with blank or whitespace-only lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankLines {
    /// Drop them silently
    #[default]
    Skip,
    /// Emit them with an empty name, which tree construction refuses
    Reject,
}

/// A single outline entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Count of leading indentation units
    pub depth: usize,
    /// Line content without indentation
    pub name: String,
}

impl ParsedLine {
    pub fn new(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
        }
    }
}

impl From<(usize, &str)> for ParsedLine {
    fn from((depth, name): (usize, &str)) -> Self {
        Self::new(depth, name)
    }
}

impl From<(usize, String)> for ParsedLine {
    fn from((depth, name): (usize, String)) -> Self {
        Self::new(depth, name)
    }
}

/// Parse outline text, skipping blank lines.
pub fn parse(text: &str) -> Vec<ParsedLine> {
    parse_with(text, BlankLines::Skip)
}

/// Parse outline text with an explicit blank-line policy.
///
/// Output order is source order; sibling order and nesting are derived
/// from it downstream.
#[instrument(level = "debug", skip(text), fields(bytes = text.len()))]
pub fn parse_with(text: &str, blank_lines: BlankLines) -> Vec<ParsedLine> {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    let mut lines = Vec::new();

    for raw in text.lines() {
        let depth = raw.chars().take_while(|&c| c == INDENT).count();
        let name = raw.trim();

        if name.is_empty() && blank_lines == BlankLines::Skip {
            continue;
        }
        trace!("parsed: depth={} name={:?}", depth, name);
        lines.push(ParsedLine::new(depth, name));
    }

    lines
}
