//! Treeviz formatter for token trees
//!
//! One line per token, nesting drawn with tree connectors, optionally preceded by the number of
//! the source line the token came from:
//!
//!      1 ├─ spacing SpaceDefine std _indent
//!      2 └─ spacing SpaceDefine std _links
//!      3   ├─ defining LinkDef _links "abc"
//!      3   └─ defining LinkDef _links "xyz"
//!
//! The label is `<action> <keyword> <owner> <arguments>`, truncated to 40 characters.

use super::registry::{FormatError, Formatter};
use crate::usl::token::Token;

const MAX_LABEL_CHARS: usize = 40;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn label(token: &Token) -> String {
    let arguments: Vec<String> = token.arguments.iter().map(|a| a.to_string()).collect();
    let mut label = format!("{} {:?} {}", token.action, token.keyword, token.owner);
    if !arguments.is_empty() {
        label.push(' ');
        label.push_str(&arguments.join(", "));
    }
    if let Some(link) = &token.link {
        label.push_str(&format!(" <{}>", link));
    }
    label
}

pub fn to_treeviz_str(tokens: &[Token], show_line_numbers: bool) -> String {
    let mut result = String::new();
    append_children(&mut result, tokens, "", show_line_numbers);
    result
}

fn append_token(
    result: &mut String,
    token: &Token,
    prefix: &str,
    is_last: bool,
    show_line_numbers: bool,
) {
    let connector = if is_last { "└─" } else { "├─" };
    if show_line_numbers {
        result.push_str(&format!("{:>2} ", token.origin.number));
    }
    result.push_str(&format!(
        "{}{} {}\n",
        prefix,
        connector,
        truncate(&label(token), MAX_LABEL_CHARS)
    ));

    let new_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    append_children(result, &token.subtokens, &new_prefix, show_line_numbers);
}

fn append_children(
    result: &mut String,
    children: &[Token],
    prefix: &str,
    show_line_numbers: bool,
) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i == children.len() - 1;
        append_token(result, child, prefix, is_last, show_line_numbers);
    }
}

pub struct TreevizFormatter {
    show_line_numbers: bool,
}

impl TreevizFormatter {
    pub fn new(show_line_numbers: bool) -> Self {
        Self { show_line_numbers }
    }
}

impl Formatter for TreevizFormatter {
    fn name(&self) -> &'static str {
        "treeviz"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        Ok(to_treeviz_str(tokens, self.show_line_numbers))
    }

    fn description(&self) -> &'static str {
        "One line per token with tree connectors"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usl::tokenizer::tokenize;
    use insta::assert_snapshot;

    #[test]
    fn test_links_tree() {
        let tokens = tokenize(&["_indent: 2", "_links:", "  abc, xyz"]).unwrap();
        let expected = [
            " 1 ├─ spacing SpaceDefine std _indent",
            " 2 └─ spacing SpaceDefine std _links",
            " 3   ├─ defining LinkDef _links \"abc\"",
            " 3   └─ defining LinkDef _links \"xyz\"",
            "",
        ]
        .join("\n");
        assert_eq!(to_treeviz_str(&tokens, true), expected);
    }

    #[test]
    fn test_nested_prefix_and_truncation() {
        let tokens = tokenize(&[
            "_consts:",
            "    0 [_main] char[] \"a rather long string value\"",
            "_main:",
        ])
        .unwrap();
        assert_snapshot!(to_treeviz_str(&tokens, false), @r#"
        ├─ spacing SpaceDefine std _consts
        │ └─ defining VarSet _main (char[], "a rather...
        └─ spacing SpaceDefine std _main
        "#);
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(to_treeviz_str(&[], true), "");
    }
}
