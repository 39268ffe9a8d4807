//! Resolved positions
//!
//! A [`Position`] is a line and column number in plain text, i.e. where a
//! caret would be in an editor. Unlike a [`Pos`][crate::Pos] it knows the
//! name of the file it's in, so it's what we show to people.

use std::fmt;

/// A fully resolved location in a named source file.
///
/// Lines and columns are one-indexed, columns count bytes. A `line` of zero
/// means the position is unknown.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Position {
    filename: String,
    offset: usize,
    line: usize,
    column: usize,
}

impl Position {
    /// Create a new [`Position`]. The `line` and `column` are 1-indexed.
    pub fn new(
        filename: impl Into<String>,
        offset: usize,
        line: usize,
        column: usize,
    ) -> Self {
        Position {
            filename: filename.into(),
            offset,
            line,
            column,
        }
    }

    /// The name of the file, which may be empty.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The byte offset into the file.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The line number, starting at 1.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The column number, starting at 1.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Does this refer to a real place in a file?
    pub fn is_valid(&self) -> bool {
        self.line > 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (self.filename.is_empty(), self.is_valid()) {
            (true, true) => write!(f, "{}:{}", self.line, self.column),
            (false, true) => {
                write!(f, "{}:{}:{}", self.filename, self.line, self.column)
            }
            (false, false) => write!(f, "{}", self.filename),
            (true, false) => write!(f, "-"),
        }
    }
}
