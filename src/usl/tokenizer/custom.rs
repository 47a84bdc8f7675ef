//! Custom space headers: `$_name[owner]:`

use super::{ActiveSpace, Tokenizer};
use crate::usl::diagnostics::TokenizeResult;
use crate::usl::grammar::{Action, Keyword};
use crate::usl::lexing::Line;
use crate::usl::token::{Argument, SpaceId, Token};
use crate::usl::validation::spaces;
use tracing::debug;

impl Tokenizer {
    pub(super) fn custom_header(&mut self, line: &Line) -> TokenizeResult<()> {
        let (name, rest) = spaces::custom_space_name(line)?;
        let id = SpaceId::Custom(name.to_string());
        spaces::not_a_duplicate(&self.registry, &id, name, line)?;

        let owner = spaces::custom_space_owner(rest, name, line)?;
        debug!(space = %id, owner = %owner, line = line.number, "space registered");

        let token = Token::new(
            Action::Spacing,
            owner,
            Keyword::SpaceDefine,
            vec![Argument::Plain(name.to_string())],
            line,
        );
        self.active = ActiveSpace::Custom(name.to_string());
        self.registry.insert_if_absent(id, token);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::usl::diagnostics::DiagnosticKind;
    use crate::usl::token::{Argument, Owner};
    use crate::usl::tokenizer::tokenize;

    #[test]
    fn test_custom_space_owned_by_main() {
        let tokens = tokenize(&["$_loop[_main]:"]).unwrap();
        assert_eq!(tokens[0].owner, Owner::main());
        assert_eq!(
            tokens[0].arguments,
            vec![Argument::Plain("_loop".to_string())]
        );
    }

    #[test]
    fn test_nested_custom_spaces() {
        let tokens = tokenize(&["$_outer[_main]:", "$_inner [outer]:"]).unwrap();
        assert_eq!(tokens[1].owner, Owner::Named("outer".to_string()));
    }

    #[test]
    fn test_duplicate_custom_space() {
        let err = tokenize(&["$_loop[_main]:", "_main:", "$_loop[other]:"]).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Duplication);
        assert_eq!(err.message, "Can not have two similar spaces: _loop");
        assert_eq!(err.source_line, "3| $_loop[other]:");
    }

    #[test]
    fn test_unbracketed_owner() {
        let err = tokenize(&["$_foo bar:"]).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Syntax);
    }

    #[test]
    fn test_reserved_owner() {
        let err = tokenize(&["$_foo[_consts]:"]).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Ownership);
    }
}
