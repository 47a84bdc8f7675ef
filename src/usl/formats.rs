//! Output formats for token trees
//!
//! The CLI prints the tokenizer's result in one of several formats, looked up by name in a
//! [FormatRegistry]:
//! - treeviz: one line per token, tree connectors, optional line-number gutter
//! - json / yaml: the serde serialization of the token list

pub mod registry;
pub mod serialized;
pub mod treeviz;

pub use registry::{FormatError, FormatRegistry, Formatter};
pub use serialized::{JsonFormatter, YamlFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
