//! Link name checks
//!
//! A link is exactly three characters of `a-z0-9`, does not start with a digit, is not one of the
//! three-letter instruction verbs and appears only once per `_links` block.

use crate::usl::diagnostics::{DiagnosticKind, TokenizeResult};
use crate::usl::grammar::{is_link_char, LINK_CHAR_LEN, THREE_LETTER_KEYWORDS};
use crate::usl::lexing::Line;

/// Validate one comma-separated item of a `_links` line.
///
/// `declared` holds the links already accepted in this block. `offset` is the byte offset of the
/// item in the line, so the caret lands on the item itself.
pub fn link_name(
    name: &str,
    declared: &[String],
    offset: usize,
    line: &Line,
) -> TokenizeResult<()> {
    if let Some(first) = name.chars().next().filter(char::is_ascii_digit) {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("First char cannot be a digit: {}", first),
            )
            .underline_at(name, offset));
    }
    if THREE_LETTER_KEYWORDS.iter().any(|keyword| *keyword == name) {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Cannot override a keyword: {}", name),
            )
            .underline_at(name, offset));
    }
    if name.chars().count() != LINK_CHAR_LEN {
        let report = line.report(
            DiagnosticKind::Syntax,
            format!("The length of {:?} must be strongly {} chars", name, LINK_CHAR_LEN),
        );
        return Err(if name.is_empty() {
            report.underline_line()
        } else {
            report.underline_at(name, offset)
        });
    }
    if let Some(bad) = name.chars().find(|c| !is_link_char(*c)) {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("The link can not include {:?} char", bad),
            )
            .underline_at(name, offset));
    }
    if declared.iter().any(|link| link == name) {
        return Err(line
            .report(
                DiagnosticKind::Duplication,
                format!("Can not have two identical links: {}", name),
            )
            .underline_at(name, offset));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn line(text: &str) -> Line {
        Line::new(text, 3)
    }

    #[rstest]
    #[case("abc")]
    #[case("a1b")]
    #[case("zz9")]
    fn test_valid_links(#[case] name: &str) {
        assert!(link_name(name, &[], 2, &line(&format!("  {}", name))).is_ok());
    }

    #[rstest]
    #[case("1ab", "First char cannot be a digit: 1")]
    #[case("inc", "Cannot override a keyword: inc")]
    #[case("dec", "Cannot override a keyword: dec")]
    #[case("abcd", "The length of \"abcd\" must be strongly 3 chars")]
    #[case("ab", "The length of \"ab\" must be strongly 3 chars")]
    #[case("aBc", "The link can not include 'B' char")]
    fn test_invalid_links(#[case] name: &str, #[case] message: &str) {
        let err = link_name(name, &[], 2, &line(&format!("  {}", name))).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Syntax);
        assert_eq!(err.message, message);
    }

    #[test]
    fn test_duplicate_on_same_line_underlines_second_copy() {
        let text = line("  abc, abc");
        let declared = vec!["abc".to_string()];
        let err = link_name("abc", &declared, 7, &text).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Duplication);
        assert_eq!(err.highlight, "          ^^^");
    }

    #[test]
    fn test_caret_skips_link_containing_the_item() {
        let err = link_name("ab", &[], 9, &line("    xab, ab")).unwrap_err();
        assert_eq!(err.source_line, "3|     xab, ab");
        assert_eq!(err.highlight, format!("{}^^", " ".repeat(12)));
    }

    #[test]
    fn test_empty_item() {
        let err = link_name("", &[], 6, &line("  abc,")).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Syntax);
        assert_eq!(err.highlight, "^".repeat(9));
    }
}
