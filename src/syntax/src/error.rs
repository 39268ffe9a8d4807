//! Errors from outside the grammar.
//!
//! Syntax errors never stop parsing, they end up in the
//! [`ErrorList`][diagnostic::ErrorList] returned with the tree. This is only
//! for input we can't start on at all.

use std::{error, fmt, str::Utf8Error};

use diagnostic::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The input isn't valid UTF-8. The first invalid byte is at this
    /// offset.
    NotUtf8(usize),

    /// The input is this many bytes long, which is too long for positions
    /// in it to be tracked.
    TooLarge(usize),
}

impl From<Utf8Error> for Error {
    fn from(e: Utf8Error) -> Self {
        Error::NotUtf8(e.valid_up_to())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotUtf8(offset) => {
                write!(f, "input is not valid UTF-8 at byte {}", offset)
            }
            Error::TooLarge(len) => write!(
                f,
                "input is {} bytes, the most that can be read is {}",
                len,
                Pos::MAX_OFFSET
            ),
        }
    }
}

impl error::Error for Error {}
