//! Integration tests for the tokenizer using the sample programs in `tests/samples`

use std::fs;
use usl::usl::grammar::{Keyword, ReservedSpace, ValueType};
use usl::usl::token::{Argument, Owner};
use usl::{tokenize_source, DiagnosticKind, Token};

fn read_sample(name: &str) -> String {
    fs::read_to_string(format!("tests/samples/{}", name)).expect("Failed to read sample program")
}

fn tokenize_sample(name: &str) -> Vec<Token> {
    tokenize_source(&read_sample(name)).unwrap_or_else(|d| panic!("{} failed:\n{}", name, d))
}

fn space_names(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(|t| t.arguments[0].to_string()).collect()
}

fn plain_arguments(token: &Token) -> Vec<String> {
    token
        .subtokens
        .iter()
        .map(|t| match &t.arguments[..] {
            [Argument::Plain(name)] => name.clone(),
            other => panic!("unexpected arguments {:?}", other),
        })
        .collect()
}

#[test]
fn test_000_every_space() {
    let tokens = tokenize_sample("000-spaces.usl");
    assert_eq!(
        space_names(&tokens),
        vec!["_indent", "_links", "_consts", "_pre", "_stdin", "_main", "\"_loop\""]
    );
    assert!(tokens.iter().all(|t| t.subtokens.is_empty()));
    assert_eq!(tokens[6].owner, Owner::main());
}

#[test]
fn test_010_links() {
    let tokens = tokenize_sample("010-links.usl");
    let links = &tokens[1];
    assert_eq!(links.arguments, vec![Argument::Space(ReservedSpace::Links)]);
    assert_eq!(
        plain_arguments(links),
        vec!["abc", "xyz", "l00", "a1b", "q2q"]
    );

    let lines: Vec<usize> = links.subtokens.iter().map(|t| t.origin.number).collect();
    assert_eq!(lines, vec![3, 3, 4, 5, 5]);
}

#[test]
fn test_020_declarations() {
    let tokens = tokenize_sample("020-declarations.usl");
    assert_eq!(tokens.len(), 5);

    let consts: Vec<&Argument> = tokens[1]
        .subtokens
        .iter()
        .map(|t| &t.arguments[0])
        .collect();
    let literal = |ty, value: &str| Argument::Literal {
        ty,
        value: value.to_string(),
    };
    assert_eq!(
        consts,
        vec![
            &literal(ValueType::Int, "42"),
            &literal(ValueType::Bool, "Vague"),
            &literal(ValueType::Char, r"'\n'"),
            &literal(ValueType::IntArray, "{1,2,3}"),
            &literal(ValueType::String, "hello,  world"),
            &Argument::Reference(0),
        ]
    );

    let pre = &tokens[2];
    assert!(pre
        .subtokens
        .iter()
        .all(|t| t.owner == Owner::Named("counter".to_string()) && t.keyword == Keyword::VarSet));

    let stdin = &tokens[3];
    assert_eq!(
        stdin.subtokens[0].arguments,
        vec![Argument::Slot {
            id: 8,
            ty: ValueType::Int
        }]
    );

    assert_eq!(tokens[4].arguments, vec![Argument::Plain("_counter".to_string())]);
}

#[test]
fn test_030_default_indentation_and_escaped_comment() {
    let tokens = tokenize_sample("030-default-indentation.usl");
    assert_eq!(
        tokens[0].subtokens[1].arguments,
        vec![Argument::Literal {
            ty: ValueType::String,
            value: r"url: http:\//example".to_string(),
        }]
    );
}

#[test]
fn test_900_bad_indent_value() {
    let err = tokenize_source(&read_sample("900-bad-indent-value.usl")).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Syntax);
    assert_eq!(err.source_line, "1| _indent: 3");
}

#[test]
fn test_910_duplicate_link() {
    let err = tokenize_source(&read_sample("910-duplicate-link.usl")).unwrap_err();
    assert_eq!(err.kind, DiagnosticKind::Duplication);
    assert_eq!(err.source_line, "4|   abc");
    assert_eq!(err.highlight, "     ^^^");
}
