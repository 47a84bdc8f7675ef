//! Tokenizer engine
//!
//!     A single forward pass over the normalized lines. Which grammar a body line follows depends
//!     on the space whose header came last (the active space), so the engine is a small state
//!     machine over three pieces of state: the indentation width, the active space and the space
//!     registry.
//!
//! Dispatch
//!
//!     Every line is classified in a fixed priority order:
//!
//!         1. an indented `$` or `_` alone is rejected
//!         2. `_...`      reserved space header      (see [reserved])
//!         3. `$_...`     custom space header        (see [custom])
//!         4. `<indent>`  body line of the active space (see [declarations])
//!         5. anything else is an indentation error or an unknown line
//!
//!     The first diagnostic aborts the run; there is no recovery and no partial result.
//!
//! Ownership
//!
//!     [tokenize] builds one [SourceCursor] and moves it into one [Tokenizer], which [Tokenizer::run]
//!     consumes. Neither can be shared between runs.

pub mod custom;
pub mod declarations;
pub mod registry;
pub mod reserved;

use crate::usl::diagnostics::{Diagnostic, DiagnosticKind, TokenizeResult};
use crate::usl::grammar::{ReservedSpace, RulesBreak, DEFAULT_INDENTATION};
use crate::usl::lexing::{Line, SourceCursor};
use crate::usl::token::Token;
use crate::usl::validation::indentation;
use registry::SpaceRegistry;
use tracing::{debug, trace, warn};

/// The space whose grammar governs the current body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveSpace {
    /// No header seen yet
    None,
    Indent,
    Links,
    Consts,
    Pre,
    Stdin,
    Main,
    Custom(String),
}

impl From<ReservedSpace> for ActiveSpace {
    fn from(space: ReservedSpace) -> Self {
        match space {
            ReservedSpace::Indent => ActiveSpace::Indent,
            ReservedSpace::Links => ActiveSpace::Links,
            ReservedSpace::Consts => ActiveSpace::Consts,
            ReservedSpace::Pre => ActiveSpace::Pre,
            ReservedSpace::Stdin => ActiveSpace::Stdin,
            ReservedSpace::Main => ActiveSpace::Main,
        }
    }
}

pub struct Tokenizer {
    cursor: SourceCursor,
    indentation: usize,
    active: ActiveSpace,
    registry: SpaceRegistry,
}

impl Tokenizer {
    pub fn new(cursor: SourceCursor) -> Self {
        Self {
            cursor,
            indentation: DEFAULT_INDENTATION,
            active: ActiveSpace::None,
            registry: SpaceRegistry::new(),
        }
    }

    pub fn indentation(&self) -> usize {
        self.indentation
    }

    pub fn active_space(&self) -> &ActiveSpace {
        &self.active
    }

    /// Consume every line and return the declared spaces in declaration order.
    pub fn run(mut self) -> TokenizeResult<Vec<Token>> {
        let mut line = match self.cursor.current() {
            Some(first) => first.clone(),
            None => return Ok(Vec::new()),
        };

        loop {
            self.dispatch(&line)?;
            match self.cursor.advance() {
                Some(next) => line = next.clone(),
                None => break,
            }
        }

        debug!(spaces = self.registry.len(), "tokenized");
        Ok(self.registry.into_tokens())
    }

    fn dispatch(&mut self, line: &Line) -> TokenizeResult<()> {
        trace!(line = line.number, text = %line.text, "dispatch");

        indentation::not_a_bare_marker(line)?;

        if line.text.starts_with('_') {
            return self.reserved_header(line);
        }
        if line.text.starts_with("$_") {
            return self.custom_header(line);
        }
        if line.text.starts_with(&" ".repeat(self.indentation)) {
            indentation::not_over_indented(self.indentation, line)?;
            return self.body_line(line);
        }
        Err(indentation::misplaced_line(self.indentation, line))
    }

    fn body_line(&mut self, line: &Line) -> TokenizeResult<()> {
        match &self.active {
            ActiveSpace::Consts => self.value_declaration(ReservedSpace::Consts, line),
            ActiveSpace::Pre => self.value_declaration(ReservedSpace::Pre, line),
            ActiveSpace::Stdin => self.slot_declaration(line),
            // consumed together with their header
            ActiveSpace::Indent | ActiveSpace::Links => Ok(()),
            ActiveSpace::Main => {
                warn!(line = line.number, "_main instructions are not tokenized yet");
                Ok(())
            }
            ActiveSpace::Custom(name) => {
                warn!(
                    line = line.number,
                    space = %name,
                    "custom space bodies are not tokenized yet"
                );
                Ok(())
            }
            ActiveSpace::None => Err(line
                .report(DiagnosticKind::Syntax, "Instruction outside of any space")
                .underline_line()),
        }
    }
}

/// Attach line context to a failed grammar-table lookup of the word at byte `offset`.
pub(crate) fn rules_break(err: RulesBreak, line: &Line, offset: usize) -> Box<Diagnostic> {
    line.report(DiagnosticKind::RulesBreak, err.message)
        .underline_at(&err.word, offset)
}

/// Tokenize already split source lines.
pub fn tokenize<S: AsRef<str>>(lines: &[S]) -> TokenizeResult<Vec<Token>> {
    let cursor = SourceCursor::new(lines)?;
    Tokenizer::new(cursor).run()
}

/// Tokenize a whole source text.
pub fn tokenize_source(source: &str) -> TokenizeResult<Vec<Token>> {
    let lines: Vec<&str> = source.split('\n').collect();
    tokenize(&lines)
}
