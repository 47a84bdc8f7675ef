//! Declaration body lines
//!
//! `_consts` and `_pre` records become `Defining` tokens with a single literal or reference
//! argument; `_stdin` records become `Defining` tokens with a slot argument. Either way the token
//! is appended under the space's own `Spacing` token.

use super::{rules_break, Tokenizer};
use crate::usl::diagnostics::TokenizeResult;
use crate::usl::grammar::{Keyword, ReservedSpace, ValueType};
use crate::usl::lexing::fields::rest_of_line;
use crate::usl::lexing::{split_fields, Field, Line};
use crate::usl::token::{Argument, SpaceId, Token};
use crate::usl::validation::{declarations, literals};

impl Tokenizer {
    /// `<id> [<owner>] <type> <value>` inside `_consts` or `_pre`.
    pub(super) fn value_declaration(
        &mut self,
        space: ReservedSpace,
        line: &Line,
    ) -> TokenizeResult<()> {
        let fields = split_fields(&line.text);
        declarations::field_count(space, fields.len(), line)?;

        // the id only has to be well formed, references are resolved later
        declarations::reference_id(fields[0].text, line)?;
        let owner = declarations::owner_field(fields[1].text, space, line)?;
        let ty = ValueType::from_name(fields[2].text)
            .map_err(|err| rules_break(err, line, fields[2].span.start))?;
        let argument = value_argument(ty, &fields, line)?;

        let token = Token::defining(owner, Keyword::VarSet, argument, line);
        self.registry
            .append_subtoken(&SpaceId::Reserved(space), token, line)
    }

    /// `<id> [<owner>] <type>` inside `_stdin`.
    pub(super) fn slot_declaration(&mut self, line: &Line) -> TokenizeResult<()> {
        let space = ReservedSpace::Stdin;
        let fields = split_fields(&line.text);
        declarations::field_count(space, fields.len(), line)?;

        let id = declarations::reference_id(fields[0].text, line)?;
        let owner = declarations::owner_field(fields[1].text, space, line)?;
        let ty = ValueType::from_name(fields[2].text)
            .map_err(|err| rules_break(err, line, fields[2].span.start))?;

        let token = Token::defining(
            owner,
            Keyword::StdinArgumentInit,
            Argument::Slot { id, ty },
            line,
        );
        self.registry
            .append_subtoken(&SpaceId::Reserved(space), token, line)
    }
}

/// The argument carried by the value field(s), starting at the fourth field.
fn value_argument(
    ty: ValueType,
    fields: &[Field<'_>],
    line: &Line,
) -> TokenizeResult<Argument> {
    let value = fields[3].text;

    if let Some(digits) = value.strip_prefix('~') {
        declarations::no_trailing_fields(fields, line)?;
        return Ok(Argument::Reference(literals::reference(digits, line)?));
    }

    let value = match ty {
        ValueType::Int => {
            declarations::no_trailing_fields(fields, line)?;
            literals::int_value(value, line)?;
            value.to_string()
        }
        ValueType::Bool => {
            declarations::no_trailing_fields(fields, line)?;
            literals::bool_value(value, line)?;
            value.to_string()
        }
        ValueType::Char => {
            declarations::no_trailing_fields(fields, line)?;
            literals::char_value(value, line)?;
            value.to_string()
        }
        ValueType::IntArray => {
            let raw = rest_of_line(&line.text, fields, 3).unwrap_or(value);
            literals::int_array(raw, line)?
        }
        ValueType::String => {
            let raw = rest_of_line(&line.text, fields, 3).unwrap_or(value);
            literals::string_value(raw, line)?
        }
    };

    Ok(Argument::Literal { ty, value })
}

#[cfg(test)]
mod tests {
    use crate::usl::diagnostics::DiagnosticKind;
    use crate::usl::grammar::{Action, Keyword, ValueType};
    use crate::usl::token::{Argument, Owner, Token};
    use crate::usl::tokenizer::tokenize;
    use rstest::rstest;

    /// The single declaration of a one-record `_consts` block.
    fn declared(record: &str) -> Token {
        let body = format!("    {}", record);
        let tokens = tokenize(&["_consts:", body.as_str()]).unwrap();
        tokens[0].subtokens[0].clone()
    }

    fn literal(ty: ValueType, value: &str) -> Argument {
        Argument::Literal {
            ty,
            value: value.to_string(),
        }
    }

    #[rstest]
    #[case("0 [_main] int 5", literal(ValueType::Int, "5"))]
    #[case("0 [_main] bool Null", literal(ValueType::Bool, "Null"))]
    #[case("0 [_main] char 'x'", literal(ValueType::Char, "'x'"))]
    #[case(r"0 [_main] char '\t'", literal(ValueType::Char, r"'\t'"))]
    #[case("0 [_main] int[] {1, 2,3}", literal(ValueType::IntArray, "{1,2,3}"))]
    #[case(r#"0 [_main] char[] "a  b""#, literal(ValueType::String, "a  b"))]
    #[case("3 [_main] char[] ~0", Argument::Reference(0))]
    fn test_declared_values(#[case] record: &str, #[case] expected: Argument) {
        assert_eq!(declared(record).arguments, vec![expected]);
    }

    #[test]
    fn test_declaration_token_shape() {
        let token = declared("7 [counter] int 1");
        assert_eq!(token.action, Action::Defining);
        assert_eq!(token.keyword, Keyword::VarSet);
        assert_eq!(token.owner, Owner::Named("counter".to_string()));
        assert_eq!(token.origin.number, 2);
    }

    #[rstest]
    #[case("0 [_main] int x", DiagnosticKind::Syntax)]
    #[case("0 [_main] int 5 6", DiagnosticKind::Tokenizer)]
    #[case("0 [_main] int ~1 2", DiagnosticKind::Tokenizer)]
    #[case("0 [_main] int ~007", DiagnosticKind::Syntax)]
    #[case("0 [_main] float 5", DiagnosticKind::RulesBreak)]
    #[case("0 [] int 5", DiagnosticKind::Ownership)]
    #[case("0 [_consts] int 5", DiagnosticKind::Ownership)]
    #[case("x [_main] int 5", DiagnosticKind::Syntax)]
    #[case("0 _main int 5", DiagnosticKind::Syntax)]
    #[case("0 [_main] int", DiagnosticKind::Syntax)]
    fn test_rejected_declarations(#[case] record: &str, #[case] kind: DiagnosticKind) {
        let body = format!("    {}", record);
        let err = tokenize(&["_consts:", body.as_str()]).unwrap_err();
        assert_eq!(err.kind, kind, "{}", err);
    }

    #[test]
    fn test_unknown_type_is_enriched() {
        let err = tokenize(&["_pre:", "    0 [_main] float 5"]).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::RulesBreak);
        assert_eq!(err.message, "Unknown type: float");
        assert_eq!(err.source_line, "2|     0 [_main] float 5");
        assert_eq!(err.highlight, format!("{}^^^^^", " ".repeat(17)));
    }

    #[test]
    fn test_unknown_type_caret_skips_owner() {
        let err = tokenize(&["_consts:", "    0 [in] in 5"]).unwrap_err();
        assert_eq!(err.message, "Unknown type: in");
        assert_eq!(err.highlight, format!("{}^^", " ".repeat(14)));

        let err = tokenize(&["_stdin:", "    0 [in] in"]).unwrap_err();
        assert_eq!(err.highlight, format!("{}^^", " ".repeat(14)));
    }

    #[test]
    fn test_pre_and_consts_are_separate() {
        let tokens = tokenize(&[
            "_consts:",
            "    0 [_main] int 1",
            "_pre:",
            "    1 [_main] int ~0",
            "    2 [_main] bool Vague",
        ])
        .unwrap();
        assert_eq!(tokens[0].subtokens.len(), 1);
        assert_eq!(tokens[1].subtokens.len(), 2);
    }

    #[test]
    fn test_stdin_slots() {
        let tokens = tokenize(&["_stdin:", "    4 [_main] int[]"]).unwrap();
        let slot = &tokens[0].subtokens[0];
        assert_eq!(slot.keyword, Keyword::StdinArgumentInit);
        assert_eq!(
            slot.arguments,
            vec![Argument::Slot {
                id: 4,
                ty: ValueType::IntArray
            }]
        );

        let err = tokenize(&["_stdin:", "    4 [_main] int 5"]).unwrap_err();
        assert_eq!(err.kind, DiagnosticKind::Syntax);
    }
}
