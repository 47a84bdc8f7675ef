//! Literal value checks
//!
//! One check per declared type plus the `~<id>` reference form. Shapes come from
//! [LiteralShape](crate::usl::grammar::literals::LiteralShape); these functions only decide which
//! diagnostic to raise and what to underline.

use crate::usl::diagnostics::{DiagnosticKind, TokenizeResult};
use crate::usl::grammar::literals::{is_digits, LiteralShape};
use crate::usl::grammar::BOOL_LITERALS;
use crate::usl::lexing::Line;

/// Parse the digits after `~`. The digit string must round-trip exactly, so `~007` is rejected.
pub fn reference(digits: &str, line: &Line) -> TokenizeResult<u64> {
    if !is_digits(digits) {
        let report = line.report(
            DiagnosticKind::Syntax,
            format!("Referenced value is not an integer: {}", digits),
        );
        return Err(if digits.is_empty() {
            report.underline("~", -1)
        } else {
            report.underline(digits, -1)
        });
    }

    let Ok(id) = digits.parse::<u64>() else {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Referenced value is too large: {}", digits),
            )
            .underline(digits, -1));
    };

    if id.to_string().len() != digits.len() {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                "Forbidden characters during referencing",
            )
            .underline(digits, -1));
    }
    Ok(id)
}

pub fn int_value(value: &str, line: &Line) -> TokenizeResult<()> {
    if !is_digits(value) {
        return Err(line
            .report(DiagnosticKind::Syntax, "Incorrect value set for int")
            .underline(value, -1));
    }
    Ok(())
}

/// `True`, `False`, `Null` or `Vague`.
pub fn bool_value(value: &str, line: &Line) -> TokenizeResult<()> {
    if !BOOL_LITERALS.iter().any(|literal| *literal == value) {
        return Err(line
            .report(DiagnosticKind::Syntax, "Unknown bool value")
            .underline(value, -1));
    }
    Ok(())
}

pub fn char_value(value: &str, line: &Line) -> TokenizeResult<()> {
    match LiteralShape::classify(value) {
        Some(shape) if shape.is_char() => Ok(()),
        _ => Err(line
            .report(DiagnosticKind::Syntax, "Invalid char declaration")
            .underline(value, -1)),
    }
}

/// Validate an `int[]` value written from `raw` to the end of the line and return it with the
/// spaces removed (`{1, 2}` becomes `{1,2}`).
pub fn int_array(raw: &str, line: &Line) -> TokenizeResult<String> {
    let joined: String = raw.chars().filter(|c| *c != ' ').collect();
    if LiteralShape::classify(&joined) == Some(LiteralShape::IntArray) {
        return Ok(joined);
    }

    let Some(inner) = joined
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    else {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Invalid array declaration at {}", line.number),
            )
            .underline(raw, -1));
    };

    let bad = inner.split(',').find(|item| !is_digits(item)).unwrap_or(inner);
    let report = line.report(
        DiagnosticKind::Syntax,
        format!("Invalid declaration for int array: {:?}", bad),
    );
    Err(if bad.is_empty() {
        report.underline(raw, -1)
    } else {
        report.underline(bad, -1)
    })
}

/// Validate a `char[]` value (the verbatim rest of the line) and return it without its quotes.
pub fn string_value(raw: &str, line: &Line) -> TokenizeResult<String> {
    match raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
    {
        Some(inner) => Ok(inner.to_string()),
        None => Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Invalid string declaration at {}", line.number),
            )
            .underline(raw, -1)),
    }
}
