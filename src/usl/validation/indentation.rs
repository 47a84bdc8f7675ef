//! Indentation checks
//!
//! Body lines are indented by exactly the active width (`_indent`, default 4). A header fragment
//! (`$` or `_` alone) is never allowed to be indented.

use crate::usl::diagnostics::{Diagnostic, DiagnosticKind, TokenizeResult};
use crate::usl::grammar::literals::is_digits;
use crate::usl::grammar::{ReservedSpace, ALLOWED_INDENTATIONS};
use crate::usl::lexing::Line;

pub fn not_a_bare_marker(line: &Line) -> TokenizeResult<()> {
    if line.text.starts_with(' ') && matches!(line.text.trim_start(), "$" | "_") {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Invalid indentation at {}", line.number),
            )
            .underline(" ", 0));
    }
    Ok(())
}

/// The width declared by an `_indent: <n>` header.
pub fn indent_value(line: &Line) -> TokenizeResult<usize> {
    let name = ReservedSpace::Indent.as_str();
    let after_name = line.text.strip_prefix(name).unwrap_or(&line.text);

    let Some(value) = after_name.trim_start().strip_prefix(':') else {
        return Err(line
            .report(DiagnosticKind::Syntax, "Expected a colon after _indent")
            .underline(name, 0));
    };

    let value = value.trim();
    if value.is_empty() {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                "No value given to _indent. Either remove the line or specify the value",
            )
            .underline(":", -1));
    }
    if !is_digits(value) {
        return Err(line
            .report(DiagnosticKind::Syntax, "The value of _indent must be an integer")
            .underline(value, -1));
    }

    match value.parse::<usize>() {
        Ok(width) if ALLOWED_INDENTATIONS.contains(&width) => Ok(width),
        _ => {
            let allowed: Vec<String> = ALLOWED_INDENTATIONS.iter().map(|w| w.to_string()).collect();
            Err(line
                .report(
                    DiagnosticKind::Syntax,
                    format!("Indentation must be one of {}", allowed.join(", ")),
                )
                .underline(value, -1))
        }
    }
}

/// A body line must not carry a space right after the indentation prefix.
pub fn not_over_indented(indentation: usize, line: &Line) -> TokenizeResult<()> {
    let over = line
        .text
        .get(indentation..)
        .map_or(false, |rest| rest.starts_with(' '));
    if over {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Invalid indentation, expected {}", indentation),
            )
            .underline(" ", indentation as isize));
    }
    Ok(())
}

/// The error for a line that is neither a header nor a correctly indented body line.
pub fn misplaced_line(indentation: usize, line: &Line) -> Box<Diagnostic> {
    if line.text.starts_with(' ') {
        return line
            .report(
                DiagnosticKind::Syntax,
                format!("Invalid indentation. Expected {} indent", indentation),
            )
            .underline(" ", 0);
    }
    line.report(
        DiagnosticKind::Syntax,
        format!("Unknown token at {}", line.number),
    )
    .underline_line()
}
