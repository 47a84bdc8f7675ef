//! Lexing
//!
//!     Everything that deals with raw text before the tokenizer sees it.
//!
//!     [cursor] owns the normalized line buffer. Comments are stripped, trailing whitespace is
//!     trimmed and blank lines are dropped before numbering starts, so every line number a
//!     diagnostic reports refers to that filtered buffer. Every surviving character is checked
//!     against the global alphabet while the buffer is built.
//!
//!     [fields] splits a single line into whitespace-separated fields, keeping byte spans so a
//!     value made of several fields (strings, spaced arrays) can be recovered verbatim.

pub mod cursor;
pub mod fields;

pub use cursor::{Line, SourceCursor};
pub use fields::{split_fields, Field};
