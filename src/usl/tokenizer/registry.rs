//! Space registry
//!
//! Insertion-ordered map from [SpaceId] to the space's `Spacing` token. Entries are only ever
//! added; declarations inside a space are appended to its token as subtokens.

use crate::usl::diagnostics::{DiagnosticKind, TokenizeResult};
use crate::usl::lexing::Line;
use crate::usl::token::{SpaceId, Token};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct SpaceRegistry {
    tokens: Vec<Token>,
    index: HashMap<SpaceId, usize>,
}

impl SpaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, id: &SpaceId) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &SpaceId) -> Option<&Token> {
        self.index.get(id).map(|&i| &self.tokens[i])
    }

    /// Register `token` under `id` unless the id is taken. Returns whether it was inserted.
    pub fn insert_if_absent(&mut self, id: SpaceId, token: Token) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.tokens.len());
        self.tokens.push(token);
        true
    }

    /// Append a declaration to the space registered under `id`.
    pub fn append_subtoken(
        &mut self,
        id: &SpaceId,
        token: Token,
        line: &Line,
    ) -> TokenizeResult<()> {
        match self.index.get(id) {
            Some(&i) => self.tokens[i].add_subtokens(vec![token]),
            None => Err(line
                .report(
                    DiagnosticKind::Tokenizer,
                    format!("Space {} is not declared", id),
                )
                .underline_line()),
        }
    }

    /// The registered tokens in first-insertion order.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}
