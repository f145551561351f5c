//! Random identifiers for generated types, variables and methods.
//!
//! Names are drawn from the Latin alphabet only. Nothing here tracks previously
//! handed out names, so two draws can collide with probability `52^(len - 1)`.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

const UPPER_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const ALL_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Literal tag appended to every method name.
pub const METHOD_SUFFIX: &str = "_method";

/// Words the target grammar reserves, compared case-insensitively.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "and", "as", "block", "break", "case", "catch", "class", "construct", "continue",
    "default", "delegate", "do", "else", "enhancement", "enum", "eval", "exists", "extends",
    "false", "final", "finally", "find", "for", "foreach", "function", "get", "if", "implements",
    "in", "index", "infinity", "interface", "internal", "iterator", "length", "nan", "new",
    "not", "null", "or", "outer", "override", "package", "private", "property", "protected",
    "public", "readonly", "represents", "return", "set", "static", "statictypeof", "structure",
    "super", "switch", "this", "throw", "transient", "true", "try", "typeas", "typeis", "typeof",
    "unless", "uses", "using", "var", "void", "where", "while",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NameKind {
    Type,
    Variable,
    /// Loop variables.
    ShortVariable,
    Method,
}

impl NameKind {
    pub fn default_length(self) -> usize {
        match self {
            NameKind::Type | NameKind::Variable | NameKind::Method => 8,
            NameKind::ShortVariable => 4,
        }
    }

    fn starts_uppercase(self) -> bool {
        matches!(self, NameKind::Type | NameKind::Method)
    }
}

/// Draws an identifier of `length` letters (at least one), redrawing reserved words.
/// Method names additionally carry [`METHOD_SUFFIX`].
pub fn generate_identifier<R: Rng + ?Sized>(rng: &mut R, kind: NameKind, length: usize) -> String {
    let length = length.max(1);
    let leading = if kind.starts_uppercase() {
        UPPER_CHARS
    } else {
        LOWER_CHARS
    };
    let mut name = draw_letters(rng, leading, length);
    while is_reserved(&name) {
        name = draw_letters(rng, leading, length);
    }
    if kind == NameKind::Method {
        name.push_str(METHOD_SUFFIX);
    }
    name
}

fn draw_letters<R: Rng + ?Sized>(rng: &mut R, leading: &[u8], length: usize) -> String {
    let mut name = String::with_capacity(length + METHOD_SUFFIX.len());
    // Both alphabets are non-empty constants.
    name.push(*leading.choose(rng).unwrap_or(&b'a') as char);
    for _ in 1..length {
        name.push(*ALL_CHARS.choose(rng).unwrap_or(&b'a') as char);
    }
    name
}

pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(name))
}
