//! Declaration record checks
//!
//! Body lines of `_consts` and `_pre` are `<id> [<owner>] <type> <value>`; body lines of
//! `_stdin` are `<id> [<owner>] <type>`. Values are checked in [literals](super::literals).

use crate::usl::diagnostics::{DiagnosticKind, TokenizeResult};
use crate::usl::grammar::literals::is_digits;
use crate::usl::grammar::ReservedSpace;
use crate::usl::lexing::{Field, Line};
use crate::usl::token::Owner;

use super::spaces;

/// Fields of a `_consts` / `_pre` record (the value may span more).
pub const VALUE_RECORD_FIELDS: usize = 4;

/// Fields of a `_stdin` record.
pub const SLOT_RECORD_FIELDS: usize = 3;

fn subject(space: ReservedSpace) -> &'static str {
    match space {
        ReservedSpace::Consts => "constant",
        ReservedSpace::Stdin => "std input variable",
        _ => "variable",
    }
}

pub fn field_count(space: ReservedSpace, count: usize, line: &Line) -> TokenizeResult<()> {
    let (expected, ok) = match space {
        ReservedSpace::Stdin => (SLOT_RECORD_FIELDS, count == SLOT_RECORD_FIELDS),
        _ => (VALUE_RECORD_FIELDS, count >= VALUE_RECORD_FIELDS),
    };
    if !ok {
        return Err(line
            .report(
                DiagnosticKind::Syntax,
                format!(
                    "Expected {} arguments to define a {}, {} were given",
                    expected,
                    subject(space),
                    count
                ),
            )
            .underline_line());
    }
    Ok(())
}

/// The numeric id a record is declared under.
pub fn reference_id(text: &str, line: &Line) -> TokenizeResult<u64> {
    if !is_digits(text) {
        return Err(line
            .report(DiagnosticKind::Syntax, "Expected integer at reference")
            .underline(text, 0));
    }
    text.parse::<u64>().map_err(|_| {
        line.report(
            DiagnosticKind::Syntax,
            format!("Reference id is too large: {}", text),
        )
        .underline(text, 0)
    })
}

/// `[owner]`, resolved with the same rules as custom space owners.
pub fn owner_field(text: &str, space: ReservedSpace, line: &Line) -> TokenizeResult<Owner> {
    let inner = text
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'));
    match inner {
        Some(name) => spaces::owner(name, line),
        None => Err(line
            .report(
                DiagnosticKind::Syntax,
                format!("Expected owner of {}", subject(space)),
            )
            .underline_line()),
    }
}

/// Single-field values (`int`, `char`, `bool`, references) leave nothing after the fourth field.
pub fn no_trailing_fields(fields: &[Field<'_>], line: &Line) -> TokenizeResult<()> {
    match fields.get(VALUE_RECORD_FIELDS) {
        Some(extra) => Err(line
            .report(
                DiagnosticKind::Tokenizer,
                format!("Unexpected token at {}", line.number),
            )
            .underline(extra.text, -1)),
        None => Ok(()),
    }
}
