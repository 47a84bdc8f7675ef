//! Diagnostics
//!
//!     Every grammar violation is reported as a [Diagnostic]: a kind, a message and a two line
//!     rendering of the offending source, the line itself prefixed with its number and a caret
//!     line underneath pointing at the culprit:
//!
//!         3| _indent: 3
//!                     ^
//!
//!     Diagnostics are fatal. The tokenizer stops at the first one and hands it to the caller,
//!     which owns presentation (see [Diagnostic::payload]).
//!
//! Kinds
//!
//!     Syntax       malformed construct shape
//!     Tokenizer    internal contract violations (nothing to highlight, forbidden subtokens)
//!     Duplication  a name declared twice where it must be unique
//!     Ownership    empty owner, or a reserved space other than `_main` used as owner
//!     RulesBreak   a word outside the grammar tables (unknown type, unknown keyword)

pub mod highlight;

use std::fmt;

pub use highlight::{format_code_line, highlight, occurrence_at, underline_whole};

/// Result type for everything that can raise a diagnostic (boxed to keep `Result` small)
pub type TokenizeResult<T> = Result<T, Box<Diagnostic>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Syntax,
    Tokenizer,
    Duplication,
    Ownership,
    RulesBreak,
}

impl DiagnosticKind {
    /// Label printed in front of the message.
    pub fn label(&self) -> &'static str {
        match self {
            DiagnosticKind::Syntax => "Invalid syntax",
            DiagnosticKind::Tokenizer => "Tokenizer issue",
            DiagnosticKind::Duplication => "Duplication flaw",
            DiagnosticKind::Ownership => "Ownership error",
            DiagnosticKind::RulesBreak => "Infringement",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A fatal tokenizer error with its rendered source context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    /// `"{line_number}| {line}"`
    pub source_line: String,
    /// Caret line aligned under `source_line`
    pub highlight: String,
}

impl Diagnostic {
    pub fn new(
        kind: DiagnosticKind,
        message: impl Into<String>,
        source_line: impl Into<String>,
        highlight: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source_line: source_line.into(),
            highlight: highlight.into(),
        }
    }

    /// Start a diagnostic about `line`; finish it with [Report::underline] or
    /// [Report::underline_line].
    pub fn at<'a>(
        kind: DiagnosticKind,
        message: impl Into<String>,
        line: &'a str,
        line_number: usize,
    ) -> Report<'a> {
        Report {
            kind,
            message: message.into(),
            line,
            line_number,
        }
    }

    /// The four ordered fields handed to the presentation layer:
    /// `(kind label, message, formatted source line, caret line)`.
    pub fn payload(&self) -> (&str, &str, &str, &str) {
        (
            self.kind.label(),
            &self.message,
            &self.source_line,
            &self.highlight,
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.kind, self.message)?;
        writeln!(f)?;
        writeln!(f, "{}", self.source_line)?;
        write!(f, "{}", self.highlight)
    }
}

impl std::error::Error for Diagnostic {}

/// A diagnostic that still needs its caret line.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    kind: DiagnosticKind,
    message: String,
    line: &'a str,
    line_number: usize,
}

impl Report<'_> {
    /// Underline the `occurrence`-th match of `target` (negative counts from the last match).
    ///
    /// If the target cannot be found the highlighter's own Tokenizer diagnostic is returned in
    /// place of this one.
    pub fn underline(self, target: &str, occurrence: isize) -> Box<Diagnostic> {
        match highlight(self.line, self.line_number, target, occurrence) {
            Ok(carets) => Box::new(Diagnostic::new(
                self.kind,
                self.message,
                format_code_line(self.line, self.line_number),
                carets,
            )),
            Err(err) => err,
        }
    }

    /// Underline the match of `target` that starts at byte `offset` of the line.
    pub fn underline_at(self, target: &str, offset: usize) -> Box<Diagnostic> {
        let occurrence = occurrence_at(self.line, target, offset);
        self.underline(target, occurrence)
    }

    /// Underline the whole rendered line, number prefix included.
    pub fn underline_line(self) -> Box<Diagnostic> {
        Box::new(Diagnostic::new(
            self.kind,
            self.message,
            format_code_line(self.line, self.line_number),
            underline_whole(self.line, self.line_number),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_order() {
        let diag = Diagnostic::at(DiagnosticKind::Syntax, "Bad", "_indent: 3", 1).underline("3", 0);
        let (kind, message, source, carets) = diag.payload();
        assert_eq!(kind, "Invalid syntax");
        assert_eq!(message, "Bad");
        assert_eq!(source, "1| _indent: 3");
        assert_eq!(carets, "            ^");
    }

    #[test]
    fn test_missing_target_replaces_diagnostic() {
        let diag =
            Diagnostic::at(DiagnosticKind::Duplication, "Twice", "_links:", 4).underline("zzz", 0);
        assert_eq!(diag.kind, DiagnosticKind::Tokenizer);
    }

    #[test]
    fn test_whole_line_underline() {
        let diag = Diagnostic::at(DiagnosticKind::Syntax, "Unknown", "abc", 12).underline_line();
        assert_eq!(diag.source_line, "12| abc");
        assert_eq!(diag.highlight, "^^^^^^^");
    }

    #[test]
    fn test_display() {
        let diag = Diagnostic::at(DiagnosticKind::RulesBreak, "Unknown type: x", "a x", 2)
            .underline("x", 0);
        insta::assert_snapshot!(diag.to_string(), @r"
Infringement: Unknown type: x

2| a x
     ^
");
    }
}
