//! Parser errors

use std::{error, fmt};

use crate::lexer::TokenKind as Kind;

/// Syntax errors found while parsing. Like lexical errors these are reported
/// and parsing carries on, so the [`Display`][fmt::Display] text is what ends
/// up in the diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Something else was wanted where the parser is. If the parser knows
    /// what's actually there, it's the `found` kind.
    Expected { wanted: String, found: Option<Kind> },

    /// Nesting went past the parser's depth limit.
    TooDeep,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Expected {
                wanted,
                found: Some(found),
            } => write!(f, "expected {}, got {}", wanted, found.name()),
            Error::Expected {
                wanted,
                found: None,
            } => write!(f, "expected {}", wanted),
            Error::TooDeep => write!(f, "nesting is too deep"),
        }
    }
}

impl error::Error for Error {}
