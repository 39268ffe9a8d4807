//! Positions - compact offsets into source code
//!
//! A [`Pos`] is what the lexer stamps on every token, and what the syntax tree
//! stores in its spans. It's only an offset, to turn it into something a
//! person can use it needs to be resolved through a
//! [`FileInfo`][crate::FileInfo].

use std::fmt;

/// A compact position in some source file.
///
/// The offset is stored shifted up by one so that [`Pos::NONE`] can be told
/// apart from the position of the very first character.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Pos(u32);

impl Pos {
    /// The "no position" sentinel. The parser never puts this on a node.
    pub const NONE: Pos = Pos(0);

    /// The largest offset a [`Pos`] can refer to. Inputs have to be shorter
    /// than this, see `syntax::verify_utf8`.
    pub const MAX_OFFSET: usize = u32::MAX as usize - 1;

    /// The position of the character `offset` bytes into the input.
    ///
    /// Offsets past [`Pos::MAX_OFFSET`] are clamped to it.
    pub fn from_offset(offset: usize) -> Self {
        match u32::try_from(offset) {
            Ok(n) if n < u32::MAX => Pos(n + 1),
            _ => Pos(u32::MAX),
        }
    }

    /// The byte offset into the input, or `None` for [`Pos::NONE`].
    pub fn offset(self) -> Option<usize> {
        if self.is_valid() {
            Some(self.0 as usize - 1)
        } else {
            None
        }
    }

    /// Is this a real position, and not [`Pos::NONE`]?
    pub fn is_valid(self) -> bool {
        self != Pos::NONE
    }

    /// The position `n` bytes further on, clamped like
    /// [`Pos::from_offset`].
    pub fn advance(self, n: usize) -> Self {
        let n = u32::try_from(n).unwrap_or(u32::MAX);
        Pos(self.0.saturating_add(n))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.offset() {
            Some(offset) => write!(f, "@{}", offset),
            None => write!(f, "@-"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn none_is_not_first() {
        assert_ne!(Pos::from_offset(0), Pos::NONE);
        assert!(!Pos::NONE.is_valid());
        assert_eq!(Pos::NONE.offset(), None);
    }

    #[test]
    fn offsets_round_trip() {
        assert_eq!(Pos::from_offset(0).offset(), Some(0));
        assert_eq!(Pos::from_offset(42).offset(), Some(42));
        assert_eq!(Pos::from_offset(3).advance(4), Pos::from_offset(7));
    }

    #[test]
    fn huge_offsets_clamp() {
        let last = Pos::from_offset(Pos::MAX_OFFSET);
        assert_eq!(last.offset(), Some(Pos::MAX_OFFSET));
        assert_eq!(Pos::from_offset(Pos::MAX_OFFSET + 1), last);
        assert_eq!(Pos::from_offset(usize::MAX), last);
        assert_eq!(last.advance(10), last);
    }

    #[test]
    fn ordering() {
        assert!(Pos::NONE < Pos::from_offset(0));
        assert!(Pos::from_offset(1) < Pos::from_offset(2));
    }
}
