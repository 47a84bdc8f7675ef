//! # usl
//!
//! Front-end tokenizer for usl, a small indentation-sensitive language that declares typed
//! values inside named spaces.
//!
//! The crate turns raw source lines into a tree of validated [`Token`](usl::token::Token)s:
//! one top-level spacing token per declared space, with declarations and links attached as
//! subtokens. The first grammar violation aborts the run with a
//! [`Diagnostic`](usl::diagnostics::Diagnostic) that carries a caret-underlined copy of the
//! offending line.
//!
//! ```text
//! _indent: 2
//! _links:
//!   abc, xyz
//! _consts:
//!   0 [_main] int 5
//!   1 [_main] int ~0
//! ```

pub mod usl;

pub use usl::diagnostics::{Diagnostic, DiagnosticKind, TokenizeResult};
pub use usl::token::Token;
pub use usl::tokenizer::{tokenize, tokenize_source};
