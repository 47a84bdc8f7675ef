//! Tokens
//!
//!     The tokenizer's output is a tree of [Token]s. Every declared space produces one top-level
//!     `Spacing` token; what is declared inside the space (links, constants, pre-variables, stdin
//!     slots) hangs below it as `Defining` subtokens.
//!
//!     A token remembers the line it came from so later stages can still point at the source.
//!
//! Contract
//!
//!     - only `Instruction` tokens carry a link
//!     - only `Spacing` and `Instruction` tokens carry subtokens, and among instructions only the
//!       ones listed in
//!       [ALLOWED_SUBTOKEN_INSTRUCTIONS](crate::usl::grammar::ALLOWED_SUBTOKEN_INSTRUCTIONS)
//!
//!     Breaking either rule is a bug in the caller, reported as a Tokenizer diagnostic.

use crate::usl::diagnostics::{DiagnosticKind, TokenizeResult};
use crate::usl::grammar::{Action, Keyword, ReservedSpace, ValueType, GLOBAL_OWNER};
use crate::usl::lexing::Line;
use serde::Serialize;
use std::fmt;

/// Key of the space registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum SpaceId {
    Reserved(ReservedSpace),
    Custom(String),
}

impl fmt::Display for SpaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpaceId::Reserved(space) => write!(f, "{}", space),
            SpaceId::Custom(name) => write!(f, "${}", name),
        }
    }
}

/// Who owns a space or a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Owner {
    Reserved(ReservedSpace),
    Named(String),
}

impl Owner {
    pub fn main() -> Self {
        Owner::Reserved(ReservedSpace::Main)
    }

    /// Owner of every reserved space.
    pub fn global() -> Self {
        Owner::Named(GLOBAL_OWNER.to_string())
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Owner::Reserved(space) => write!(f, "{}", space),
            Owner::Named(name) => write!(f, "{}", name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Argument {
    /// A literal value, kept as written (quotes stripped from strings only)
    Literal { ty: ValueType, value: String },
    Keyword(Keyword),
    Space(ReservedSpace),
    Plain(String),
    /// `~<digits>`: the value of an earlier declaration, by id. Not resolved here.
    Reference(u64),
    /// A value that will be read from standard input
    Slot { id: u64, ty: ValueType },
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Literal { ty, value } => write!(f, "({}, {:?})", ty, value),
            Argument::Keyword(keyword) => write!(f, "{}", keyword),
            Argument::Space(space) => write!(f, "{}", space),
            Argument::Plain(text) => write!(f, "{:?}", text),
            Argument::Reference(id) => write!(f, "(~, {})", id),
            Argument::Slot { id, ty } => write!(f, "(%{}, {})", id, ty),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub action: Action,
    pub owner: Owner,
    pub keyword: Keyword,
    pub link: Option<String>,
    pub arguments: Vec<Argument>,
    pub subtokens: Vec<Token>,
    pub origin: Line,
}

impl Token {
    pub fn new(
        action: Action,
        owner: Owner,
        keyword: Keyword,
        arguments: Vec<Argument>,
        origin: &Line,
    ) -> Self {
        Self {
            action,
            owner,
            keyword,
            link: None,
            arguments,
            subtokens: Vec::new(),
            origin: origin.clone(),
        }
    }

    /// A `Defining` token, the shape of everything declared inside a space.
    pub fn defining(owner: Owner, keyword: Keyword, argument: Argument, origin: &Line) -> Self {
        Self::new(Action::Defining, owner, keyword, vec![argument], origin)
    }

    pub fn set_link(&mut self, link: impl Into<String>) -> TokenizeResult<()> {
        if self.action != Action::Instruction {
            return Err(self
                .origin
                .report(
                    DiagnosticKind::Tokenizer,
                    "Cannot set link to non-instruction",
                )
                .underline_line());
        }
        self.link = Some(link.into());
        Ok(())
    }

    fn check_subtokens_allowed(&self) -> TokenizeResult<()> {
        match self.action {
            Action::Spacing => Ok(()),
            Action::Instruction if self.keyword.allows_subtokens() => Ok(()),
            Action::Instruction => {
                let report = self.origin.report(
                    DiagnosticKind::Tokenizer,
                    format!("Cannot include subtokens under {}", self.keyword),
                );
                Err(match self.keyword.spelling() {
                    Some(spelling) => report.underline(spelling, 0),
                    None => report.underline_line(),
                })
            }
            Action::Defining => Err(self
                .origin
                .report(
                    DiagnosticKind::Tokenizer,
                    "Cannot add subtokens for non-instruction or non-spacing",
                )
                .underline_line()),
        }
    }

    /// Replace the subtokens, consuming and returning the token.
    pub fn with_subtokens(mut self, subtokens: Vec<Token>) -> TokenizeResult<Self> {
        self.check_subtokens_allowed()?;
        self.subtokens = subtokens;
        Ok(self)
    }

    pub fn add_subtokens(&mut self, subtokens: Vec<Token>) -> TokenizeResult<()> {
        self.check_subtokens_allowed()?;
        self.subtokens.extend(subtokens);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(text: &str) -> Line {
        Line::new(text, 1)
    }

    fn instruction(keyword: Keyword, text: &str) -> Token {
        Token::new(Action::Instruction, Owner::main(), keyword, vec![], &line(text))
    }

    #[test]
    fn test_link_only_on_instructions() {
        let mut goto = instruction(Keyword::Goto, "    goto abc");
        goto.set_link("abc").unwrap();
        assert_eq!(goto.link.as_deref(), Some("abc"));

        let mut space = Token::new(
            Action::Spacing,
            Owner::global(),
            Keyword::SpaceDefine,
            vec![Argument::Space(ReservedSpace::Main)],
            &line("_main:"),
        );
        let err = space.set_link("abc").unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Tokenizer);
        assert_eq!(space.link, None);
    }

    #[test]
    fn test_subtokens_under_if() {
        let child = instruction(Keyword::Increase, "        inc 0");
        let parent = instruction(Keyword::If, "    if 0")
            .with_subtokens(vec![child.clone()])
            .unwrap();
        assert_eq!(parent.subtokens, vec![child]);
    }

    #[test]
    fn test_subtokens_rejected_under_other_instructions() {
        let mut call = instruction(Keyword::Call, "    call xyz");
        let err = call.add_subtokens(vec![]).unwrap_err();
        assert_eq!(err.message, "Cannot include subtokens under call");
        assert_eq!(err.highlight, "       ^^^^");
    }

    #[test]
    fn test_subtokens_rejected_under_defining() {
        let mut def = Token::defining(
            Owner::main(),
            Keyword::VarSet,
            Argument::Reference(0),
            &line("  1 [_main] int ~0"),
        );
        let err = def.add_subtokens(vec![]).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Tokenizer);
        assert_eq!(err.highlight, "^".repeat(21));
    }
}
