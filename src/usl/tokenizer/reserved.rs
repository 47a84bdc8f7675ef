//! Reserved space headers
//!
//! `_indent` changes the indentation width, `_links` consumes its whole indented block right
//! away, every other reserved header only opens its space.

use super::{ActiveSpace, Tokenizer};
use crate::usl::diagnostics::TokenizeResult;
use crate::usl::grammar::{Action, Keyword, ReservedSpace};
use crate::usl::lexing::Line;
use crate::usl::token::{Argument, Owner, SpaceId, Token};
use crate::usl::validation::{indentation, links, spaces};
use tracing::debug;

fn spacing_token(space: ReservedSpace, line: &Line) -> Token {
    Token::new(
        Action::Spacing,
        Owner::global(),
        Keyword::SpaceDefine,
        vec![Argument::Space(space)],
        line,
    )
}

impl Tokenizer {
    pub(super) fn reserved_header(&mut self, line: &Line) -> TokenizeResult<()> {
        let name = spaces::reserved_name(line)?;
        let space = spaces::known_reserved_space(&name, line)?;
        spaces::ends_with_colon(space, line)?;

        let id = SpaceId::Reserved(space);
        spaces::not_a_duplicate(&self.registry, &id, space.as_str(), line)?;

        let token = match space {
            ReservedSpace::Indent => {
                self.indentation = indentation::indent_value(line)?;
                spacing_token(space, line)
            }
            ReservedSpace::Links => {
                let links = self.link_block()?;
                spacing_token(space, line).with_subtokens(links)?
            }
            _ => spacing_token(space, line),
        };

        self.registry.insert_if_absent(id, token);
        self.active = ActiveSpace::from(space);
        debug!(
            space = %space,
            line = line.number,
            indentation = self.indentation,
            "space registered"
        );
        Ok(())
    }

    /// Read the indented lines following a `_links` header without moving the cursor.
    ///
    /// Items are separated by commas and/or newlines. The lines are left for the main loop, which
    /// skips them as `_links` body lines.
    fn link_block(&self) -> TokenizeResult<Vec<Token>> {
        let prefix = " ".repeat(self.indentation);
        let mut declared: Vec<String> = Vec::new();
        let mut subtokens = Vec::new();

        let mut ahead = 1;
        while let Some(next) = self.cursor.peek(ahead) {
            if !next.text.starts_with(&prefix) {
                break;
            }

            let mut start = 0;
            for segment in next.text.split(',') {
                let item = segment.trim();
                let offset = start + segment.len() - segment.trim_start().len();
                start += segment.len() + 1;
                links::link_name(item, &declared, offset, next)?;

                declared.push(item.to_string());
                subtokens.push(Token::defining(
                    Owner::Reserved(ReservedSpace::Links),
                    Keyword::LinkDef,
                    Argument::Plain(item.to_string()),
                    next,
                ));
            }
            ahead += 1;
        }

        Ok(subtokens)
    }
}

#[cfg(test)]
mod tests {
    use crate::usl::diagnostics::DiagnosticKind;
    use crate::usl::grammar::{Keyword, ReservedSpace};
    use crate::usl::token::{Argument, Owner};
    use crate::usl::tokenizer::tokenize;

    fn link_names(lines: &[&str]) -> Vec<String> {
        let tokens = tokenize(lines).unwrap();
        let links = tokens
            .iter()
            .find(|t| t.arguments == vec![Argument::Space(ReservedSpace::Links)])
            .expect("no _links token");
        links
            .subtokens
            .iter()
            .map(|t| match &t.arguments[..] {
                [Argument::Plain(name)] => name.clone(),
                other => panic!("unexpected link arguments {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_links_across_commas_and_lines() {
        let names = link_names(&["_links:", "    abc, xyz", "    q12", "_main:"]);
        assert_eq!(names, vec!["abc", "xyz", "q12"]);
    }

    #[test]
    fn test_link_subtokens_shape() {
        let tokens = tokenize(&["_indent: 2", "_links:", "  abc", "  xyz"]).unwrap();
        let link = &tokens[1].subtokens[1];
        assert_eq!(link.owner, Owner::Reserved(ReservedSpace::Links));
        assert_eq!(link.keyword, Keyword::LinkDef);
        assert_eq!(link.origin.number, 4);
    }

    #[test]
    fn test_empty_links_block() {
        assert!(link_names(&["_links:", "_main:"]).is_empty());
    }

    #[test]
    fn test_duplicate_link_across_lines() {
        let err = tokenize(&["_links:", "    abc", "    xyz, abc"]).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Duplication);
        assert_eq!(err.source_line, "3|     xyz, abc");
    }

    #[test]
    fn test_bad_link_caret_on_its_own_item() {
        let err = tokenize(&["_links:", "    xab, ab"]).unwrap_err();
        assert_eq!(err.message, "The length of \"ab\" must be strongly 3 chars");
        assert_eq!(err.highlight, format!("{}^^", " ".repeat(12)));
    }

    #[test]
    fn test_indent_changes_body_width() {
        let err = tokenize(&["_indent: 2", "_consts:", "    0 [_main] int 5"]).unwrap_err();
        assert_eq!(err.message, "Invalid indentation, expected 2");
    }

    #[test]
    fn test_duplicate_reserved_space() {
        let err = tokenize(&["_indent: 2", "_indent: 4"]).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Duplication);
        assert_eq!(err.message, "Can not have two similar spaces: _indent");
    }

    #[test]
    fn test_unknown_reserved_space() {
        let err = tokenize(&["_global:"]).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Syntax);
        assert_eq!(err.message, "Not a reserved space: _global");
    }

    #[test]
    fn test_missing_colon() {
        let err = tokenize(&["_consts"]).unwrap_err();
        assert_eq!(err.message, "Space _consts must end with a colon");
    }
}
