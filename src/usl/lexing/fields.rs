//! Field splitting
//!
//! Body lines are whitespace-separated records (`0 [_main] int 5`). The split is done with a
//! tiny logos lexer so each field keeps its byte span in the line.

use logos::Logos;
use std::ops::Range;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ ]+")]
enum FieldToken {
    #[regex(r"[^ ]+")]
    Word,
}

/// One whitespace-delimited field of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Split `line` on runs of spaces.
pub fn split_fields(line: &str) -> Vec<Field<'_>> {
    let mut lexer = FieldToken::lexer(line);
    let mut fields = Vec::new();
    while let Some(token) = lexer.next() {
        if token.is_ok() {
            fields.push(Field {
                text: lexer.slice(),
                span: lexer.span(),
            });
        }
    }
    fields
}

/// The raw text of `line` from the start of `fields[index]` to the end of the line.
pub fn rest_of_line<'a>(line: &'a str, fields: &[Field<'a>], index: usize) -> Option<&'a str> {
    fields.get(index).map(|field| &line[field.span.start..])
}
