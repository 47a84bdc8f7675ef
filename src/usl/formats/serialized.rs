//! Data formats: the token list as serialized by serde.

use super::registry::{FormatError, Formatter};
use crate::usl::token::Token;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(tokens)
            .map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &'static str {
        "Token tree as pretty-printed JSON"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &'static str {
        "yaml"
    }

    fn serialize(&self, tokens: &[Token]) -> Result<String, FormatError> {
        serde_yaml::to_string(tokens).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &'static str {
        "Token tree as YAML"
    }
}
