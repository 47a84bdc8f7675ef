//! Grammar tables
//!
//!     The static vocabulary of usl: which characters may appear at all, the reserved space
//!     names, the keyword and type spellings, indentation limits and the link-name rules.
//!     Nothing here keeps state; the tokenizer and the validators only read these tables.
//!
//! Spaces
//!
//!     A program is a sequence of spaces. Six of them are reserved and spelled with a leading
//!     underscore (`_indent`, `_links`, `_consts`, `_pre`, `_stdin`, `_main`); any other space is
//!     a custom space declared as `$_name[owner]:`.
//!
//! Lookups
//!
//!     Table lookups that fail return a [RulesBreak]: the word is not part of the language's
//!     vocabulary at all. The tokenizer enriches it with the line it came from.

pub mod literals;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Indentation widths `_indent` may select.
pub const ALLOWED_INDENTATIONS: [usize; 2] = [2, 4];

/// Indentation width in effect until an `_indent` header changes it.
pub const DEFAULT_INDENTATION: usize = 4;

/// Exact length of every link name.
pub const LINK_CHAR_LEN: usize = 3;

/// Owner recorded on reserved-space tokens.
pub const GLOBAL_OWNER: &str = "std";

/// The literal spelling of the `_main` space when used as an owner.
pub const MAIN_OWNER: &str = "_main";

/// Four-valued boolean literals.
pub const BOOL_LITERALS: [&str; 4] = ["True", "False", "Null", "Vague"];

/// Characters allowed anywhere in a source line: printable ASCII.
pub fn is_source_char(c: char) -> bool {
    matches!(c, ' '..='~')
}

/// Characters allowed in a reserved space name.
pub fn is_reserved_name_char(c: char) -> bool {
    c.is_ascii_lowercase() || c == '_'
}

/// Characters allowed in custom space names and owner names.
pub fn is_custom_space_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters allowed in a link name.
pub fn is_link_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// A table lookup that found nothing: the word is outside the language's vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesBreak {
    pub word: String,
    pub message: String,
}

impl RulesBreak {
    fn new(word: &str, message: String) -> Self {
        Self {
            word: word.to_string(),
            message,
        }
    }
}

impl fmt::Display for RulesBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for RulesBreak {}

/// The built-in top-level sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReservedSpace {
    Indent,
    Links,
    Consts,
    Pre,
    Stdin,
    Main,
}

impl ReservedSpace {
    pub const ALL: [ReservedSpace; 6] = [
        ReservedSpace::Indent,
        ReservedSpace::Links,
        ReservedSpace::Consts,
        ReservedSpace::Pre,
        ReservedSpace::Stdin,
        ReservedSpace::Main,
    ];

    /// Canonical spelling, used both for recognition and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservedSpace::Indent => "_indent",
            ReservedSpace::Links => "_links",
            ReservedSpace::Consts => "_consts",
            ReservedSpace::Pre => "_pre",
            ReservedSpace::Stdin => "_stdin",
            ReservedSpace::Main => "_main",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, RulesBreak> {
        ReservedSpace::ALL
            .into_iter()
            .find(|space| space.as_str() == name)
            .ok_or_else(|| RulesBreak::new(name, format!("Unknown reserved space: {}", name)))
    }
}

impl fmt::Display for ReservedSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Types a declaration may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueType {
    Int,
    Char,
    Bool,
    IntArray,
    /// Spelled `char[]`
    String,
}

static TYPE_TABLE: Lazy<HashMap<&'static str, ValueType>> = Lazy::new(|| {
    HashMap::from([
        ("int", ValueType::Int),
        ("char", ValueType::Char),
        ("bool", ValueType::Bool),
        ("int[]", ValueType::IntArray),
        ("char[]", ValueType::String),
    ])
});

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Int => "int",
            ValueType::Char => "char",
            ValueType::Bool => "bool",
            ValueType::IntArray => "int[]",
            ValueType::String => "char[]",
        }
    }

    pub fn from_name(name: &str) -> Result<Self, RulesBreak> {
        TYPE_TABLE
            .get(name)
            .copied()
            .ok_or_else(|| RulesBreak::new(name, format!("Unknown type: {}", name)))
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a token does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    /// Opens a space
    Spacing,
    /// Declares something inside a space
    Defining,
    Instruction,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Spacing => "spacing",
            Action::Defining => "defining",
            Action::Instruction => "instruction",
        };
        write!(f, "{}", name)
    }
}

/// Structural symbols and instruction verbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    SpaceDefine,
    List,
    SpaceNameEnd,
    OwnershipOpen,
    OwnershipClose,
    ArrayOpen,
    ArrayClose,
    StringOpen,
    StringClose,
    /// The numeric id leading a declaration
    ReferenceDef,
    CustomSpaceDef,
    StdinArgumentInit,
    StdinArgumentOpen,
    StdinArgumentClose,
    LinkOpen,
    LinkClose,
    /// A name declared inside `_links`
    LinkDef,
    ComprehensionOpen,
    ComprehensionClose,
    Refer,
    ReferStdinVar,
    VarSet,

    PrintOut,
    Increase,
    Decrease,
    Call,
    Goto,
    If,
    Desc,
}

/// Instructions that may nest subtokens.
pub const ALLOWED_SUBTOKEN_INSTRUCTIONS: [Keyword; 1] = [Keyword::If];

/// Instruction verbs, in the order the language documents them.
pub const INSTRUCTIONS: [Keyword; 7] = [
    Keyword::PrintOut,
    Keyword::Increase,
    Keyword::Decrease,
    Keyword::Call,
    Keyword::Goto,
    Keyword::If,
    Keyword::Desc,
];

static INSTRUCTION_TABLE: Lazy<HashMap<&'static str, Keyword>> = Lazy::new(|| {
    INSTRUCTIONS
        .iter()
        .filter_map(|keyword| keyword.spelling().map(|s| (s, *keyword)))
        .collect()
});

/// Instruction verbs a link name could be mistaken for.
pub static THREE_LETTER_KEYWORDS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    INSTRUCTIONS
        .iter()
        .filter_map(Keyword::spelling)
        .filter(|s| s.len() == LINK_CHAR_LEN)
        .collect()
});

impl Keyword {
    /// Source spelling. `ReferenceDef` and `LinkDef` are positional and have none.
    pub fn spelling(&self) -> Option<&'static str> {
        let s = match self {
            Keyword::SpaceDefine => "_",
            Keyword::List => ",",
            Keyword::SpaceNameEnd => ":",
            Keyword::OwnershipOpen => "[",
            Keyword::OwnershipClose => "]",
            Keyword::ArrayOpen => "{",
            Keyword::ArrayClose => "}",
            Keyword::StringOpen | Keyword::StringClose => "\"",
            Keyword::ReferenceDef | Keyword::LinkDef => return None,
            Keyword::CustomSpaceDef => "$",
            Keyword::StdinArgumentInit => "%",
            Keyword::StdinArgumentOpen | Keyword::ComprehensionOpen => "(",
            Keyword::StdinArgumentClose | Keyword::ComprehensionClose => ")",
            Keyword::LinkOpen => "<",
            Keyword::LinkClose => ">",
            Keyword::Refer => "~",
            Keyword::ReferStdinVar => "&",
            Keyword::VarSet => "->",
            Keyword::PrintOut => "stdout",
            Keyword::Increase => "inc",
            Keyword::Decrease => "dec",
            Keyword::Call => "call",
            Keyword::Goto => "goto",
            Keyword::If => "if",
            Keyword::Desc => "desc",
        };
        Some(s)
    }

    /// Resolve an instruction verb.
    pub fn from_instruction(word: &str) -> Result<Self, RulesBreak> {
        INSTRUCTION_TABLE
            .get(word)
            .copied()
            .ok_or_else(|| RulesBreak::new(word, format!("Unknown keyword: {}", word)))
    }

    pub fn allows_subtokens(&self) -> bool {
        ALLOWED_SUBTOKEN_INSTRUCTIONS.contains(self)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.spelling() {
            Some(s) => write!(f, "{}", s),
            None => write!(f, "{:?}", self),
        }
    }
}
