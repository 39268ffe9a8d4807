//! The position index for one source file.
//!
//! The lexer tells the [`FileInfo`] about each newline as it goes past, which
//! is all that's needed to turn a [`Pos`] back into a line and column later.

use crate::{pos::Pos, position::Position};

/// A source file's name and the offsets of its newlines.
#[derive(Clone, Debug, Default)]
pub struct FileInfo {
    name: String,
    newlines: Vec<usize>,
}

impl FileInfo {
    /// A new index for the file called `name`. No lines are known yet.
    pub fn new(name: impl Into<String>) -> Self {
        FileInfo {
            name: name.into(),
            newlines: Vec::new(),
        }
    }

    /// The name of the file, used only for diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record that there's a `'\n'` at `offset`.
    ///
    /// Offsets must be added in increasing order. Re-adding the last offset
    /// is ignored.
    pub fn add_line(&mut self, offset: usize) {
        match self.newlines.last() {
            Some(&last) if last >= offset => {
                debug_assert_eq!(last, offset, "newlines added out of order");
            }
            _ => self.newlines.push(offset),
        }
    }

    /// Resolve a [`Pos`] into a full [`Position`].
    ///
    /// [`Pos::NONE`] resolves to a position with only the filename.
    pub fn position(&self, pos: Pos) -> Position {
        let offset = match pos.offset() {
            Some(offset) => offset,
            None => return Position::new(self.name.as_str(), 0, 0, 0),
        };

        // The number of newlines strictly before the offset is the 0-indexed
        // line number.
        let line = self.newlines.partition_point(|&nl| nl < offset);
        let line_start = match line {
            0 => 0,
            n => self.newlines[n - 1] + 1,
        };

        Position::new(
            self.name.as_str(),
            offset,
            line + 1,
            offset - line_start + 1,
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn index(input: &str) -> FileInfo {
        let mut info = FileInfo::new("test.spl");
        for (offset, _) in input.match_indices('\n') {
            info.add_line(offset);
        }
        info
    }

    #[test]
    fn first_line() {
        let info = index("abc");
        let p = info.position(Pos::from_offset(0));
        assert_eq!((p.line(), p.column()), (1, 1));
        let p = info.position(Pos::from_offset(2));
        assert_eq!((p.line(), p.column()), (1, 3));
    }

    #[test]
    fn later_lines() {
        let info = index("ab\ncd\n\nef");
        let p = info.position(Pos::from_offset(3));
        assert_eq!((p.line(), p.column()), (2, 1));
        let p = info.position(Pos::from_offset(7));
        assert_eq!((p.line(), p.column()), (4, 1));
        let p = info.position(Pos::from_offset(8));
        assert_eq!((p.line(), p.column()), (4, 2));
    }

    #[test]
    fn newline_is_end_of_its_line() {
        let info = index("ab\ncd");
        let p = info.position(Pos::from_offset(2));
        assert_eq!((p.line(), p.column()), (1, 3));
    }

    #[test]
    fn no_position() {
        let info = index("ab\ncd");
        let p = info.position(Pos::NONE);
        assert!(!p.is_valid());
        assert_eq!(p.to_string(), "test.spl");
    }

    #[test]
    fn repeated_line_ignored() {
        let mut info = FileInfo::new("");
        info.add_line(3);
        info.add_line(3);
        let p = info.position(Pos::from_offset(4));
        assert_eq!((p.line(), p.column()), (2, 1));
    }
}
