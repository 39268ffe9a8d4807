//! Lexer errors

use std::{error, fmt};

/// Lexical errors. The lexer reports these and carries on, so they don't need
/// to carry their own location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A character which can't start any token.
    IllegalCharacter(char),
    /// A `/*` with no `*/` after it.
    UnterminatedComment,
    /// A lone `&` or `|`, which must be doubled.
    Undoubled(char),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::IllegalCharacter(c) => {
                write!(f, "illegal character {:?}", c)
            }
            Error::UnterminatedComment => {
                write!(f, "block comment not terminated")
            }
            Error::Undoubled(c) => write!(f, "expected {:?} after {:?}", c, c),
        }
    }
}

impl error::Error for Error {}
