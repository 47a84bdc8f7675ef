//! Output formats by name
//!
//! The CLI picks a [Formatter] by the name given with `--format` or `output.format`.

use super::{JsonFormatter, TreevizFormatter, YamlFormatter};
use crate::usl::token::Token;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// No formatter under this name
    FormatNotFound(String),
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => {
                write!(f, "Unknown output format '{name}' (see --list-formats)")
            }
            FormatError::SerializationError(msg) => write!(f, "Could not serialize tokens: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

pub trait Formatter {
    fn name(&self) -> &'static str;

    /// One line shown by `--list-formats`
    fn description(&self) -> &'static str;

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError>;
}

/// Formatters keyed by name; iteration is in name order.
#[derive(Default)]
pub struct FormatRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// The built-in formats, with the treeviz gutter set from `output.show_line_numbers`.
    pub fn builtin(show_line_numbers: bool) -> Self {
        let mut registry = Self::default();
        registry.register(TreevizFormatter::new(show_line_numbers));
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry
    }

    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters.insert(formatter.name(), Box::new(formatter));
    }

    pub fn serialize(&self, tokens: &[Token], format: &str) -> Result<String, FormatError> {
        match self.formatters.get(format) {
            Some(formatter) => formatter.serialize(tokens),
            None => Err(FormatError::FormatNotFound(format.to_string())),
        }
    }

    /// `(name, description)` of every format.
    pub fn formats(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.formatters
            .values()
            .map(|formatter| (formatter.name(), formatter.description()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usl::tokenizer::tokenize;

    struct SpaceCount;

    impl Formatter for SpaceCount {
        fn name(&self) -> &'static str {
            "count"
        }
        fn description(&self) -> &'static str {
            "Number of declared spaces"
        }
        fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
            Ok(tokens.len().to_string())
        }
    }

    #[test]
    fn test_custom_format() {
        let mut registry = FormatRegistry::default();
        registry.register(SpaceCount);
        let tokens = tokenize(&["_pre:", "_main:"]).unwrap();
        assert_eq!(registry.serialize(&tokens, "count").unwrap(), "2");
    }

    #[test]
    fn test_unknown_format() {
        let registry = FormatRegistry::builtin(true);
        let err = registry.serialize(&[], "xml").unwrap_err();
        assert_eq!(err, FormatError::FormatNotFound("xml".to_string()));
        assert_eq!(
            err.to_string(),
            "Unknown output format 'xml' (see --list-formats)"
        );
    }

    #[test]
    fn test_builtin_formats_in_name_order() {
        let registry = FormatRegistry::builtin(true);
        let names: Vec<&str> = registry.formats().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["json", "treeviz", "yaml"]);
        assert!(registry.formats().all(|(_, description)| !description.is_empty()));
    }

    #[test]
    fn test_builtin_treeviz_follows_gutter_setting() {
        let tokens = tokenize(&["_main:"]).unwrap();
        let plain = FormatRegistry::builtin(false)
            .serialize(&tokens, "treeviz")
            .unwrap();
        let numbered = FormatRegistry::builtin(true)
            .serialize(&tokens, "treeviz")
            .unwrap();
        assert!(numbered.starts_with(" 1 "));
        assert!(numbered.ends_with(plain.as_str()));
    }
}
