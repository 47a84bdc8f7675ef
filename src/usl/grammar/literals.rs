//! Literal shapes
//!
//! The per-type literal grammar, compiled into a logos DFA. A field is a literal of some shape
//! only when a single lexeme spans it completely; anything else is `None`.
//!
//!     int        5            all digits
//!     bool       True         one of True / False / Null / Vague
//!     char       'a'  '\n'    one quoted character, or a backslash pair
//!     int[]      {1,2,3}      braces around a comma list of digit runs
//!
//! Strings (`char[]`) are only delimited by their quotes and are checked directly by the
//! validators.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralShape {
    #[regex("[0-9]+")]
    Digits,

    #[token("True")]
    #[token("False")]
    #[token("Null")]
    #[token("Vague")]
    FourValued,

    #[regex(r"'[^\\\n]'")]
    Char,

    #[regex(r"'\\[^\n]'")]
    EscapedChar,

    #[regex(r"\{[0-9]+(,[0-9]+)*\}")]
    IntArray,
}

impl LiteralShape {
    /// Classify `text` as a whole. Partial matches do not count.
    pub fn classify(text: &str) -> Option<LiteralShape> {
        let mut lexer = LiteralShape::lexer(text);
        let shape = lexer.next()?.ok()?;
        let span = lexer.span();
        if span.start != 0 || span.end != text.len() {
            return None;
        }
        Some(shape)
    }

    pub fn is_char(&self) -> bool {
        matches!(self, LiteralShape::Char | LiteralShape::EscapedChar)
    }
}

/// True when `text` is a non-empty run of ASCII digits.
pub fn is_digits(text: &str) -> bool {
    LiteralShape::classify(text) == Some(LiteralShape::Digits)
}
