//! Source cursor
//!
//! The cursor is built once per tokenizer run and is owned by it. It moves strictly forward one
//! line at a time, can peek at upcoming lines without moving, and can step back a bounded number
//! of lines.

use crate::usl::diagnostics::{Diagnostic, DiagnosticKind, Report, TokenizeResult};
use crate::usl::grammar::is_source_char;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// A `//` that is not preceded by a backslash.
static COMMENT_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?:^|[^\\])//").unwrap());

/// One normalized source line with its 1-based number in the filtered buffer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub text: String,
    pub number: usize,
}

impl Line {
    pub fn new(text: impl Into<String>, number: usize) -> Self {
        Self {
            text: text.into(),
            number,
        }
    }

    /// Start a diagnostic pointing into this line.
    pub fn report(&self, kind: DiagnosticKind, message: impl Into<String>) -> Report<'_> {
        Diagnostic::at(kind, message, &self.text, self.number)
    }
}

/// Drop the comment (if any) and trailing whitespace.
fn strip_comment(raw: &str) -> &str {
    let code = match COMMENT_MARKER.find(raw) {
        // the match may include the character before the marker
        Some(found) => &raw[..found.end() - 2],
        None => raw,
    };
    code.trim_end()
}

#[derive(Debug)]
pub struct SourceCursor {
    lines: Vec<Line>,
    index: usize,
}

impl SourceCursor {
    /// Normalize `raw_lines` and validate every remaining character.
    pub fn new<S: AsRef<str>>(raw_lines: &[S]) -> TokenizeResult<Self> {
        let mut lines: Vec<Line> = Vec::new();

        for raw in raw_lines {
            let code = strip_comment(raw.as_ref());
            if code.is_empty() {
                continue;
            }

            let line = Line::new(code, lines.len() + 1);
            if let Some(bad) = line.text.chars().find(|c| !is_source_char(*c)) {
                return Err(line
                    .report(
                        DiagnosticKind::Tokenizer,
                        format!("Unexpected char: {:?}", bad),
                    )
                    .underline(&bad.to_string(), 0));
            }
            lines.push(line);
        }

        Ok(Self { lines, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The line under the cursor; `None` only for an empty buffer.
    pub fn current(&self) -> Option<&Line> {
        self.lines.get(self.index)
    }

    /// Move to the next line and return it, or `None` once the last line has been consumed.
    /// The cursor stays on the last line in that case.
    pub fn advance(&mut self) -> Option<&Line> {
        if self.index + 1 >= self.lines.len() {
            return None;
        }
        self.index += 1;
        self.lines.get(self.index)
    }

    /// The line `offset` lines ahead of the cursor, without moving.
    pub fn peek(&self, offset: usize) -> Option<&Line> {
        self.lines.get(self.index.checked_add(offset)?)
    }

    /// Up to `count` lines following the cursor, clipped to the end of the buffer.
    pub fn lookahead(&self, count: usize) -> Vec<&Line> {
        let start = (self.index + 1).min(self.lines.len());
        let end = start.saturating_add(count).min(self.lines.len());
        self.lines[start..end].iter().collect()
    }

    /// Step back up to `count` lines, stopping at the first one.
    pub fn rewind(&mut self, count: usize) {
        self.index = self.index.saturating_sub(count);
    }
}
