//! Spans - selections in source code
//!
//! Each piece of input takes up some space, it's not just a point like a
//! [`Pos`], but a selection with a beginning and end. Spans are half-open, the
//! span of "the" in "the end" starts at the `t` and ends at the space.

use std::cmp::{max, min};
use std::fmt;

use crate::pos::Pos;

/// A contiguous, half-open selection `[start, end)` of a source document.
#[derive(Clone, Debug, Default, Copy, Eq, Hash, PartialEq)]
pub struct Span {
    start: Pos,
    end: Pos,
}

impl Span {
    /// The span used for things which have no place in the source, like an
    /// empty file.
    pub const NONE: Span = Span {
        start: Pos::NONE,
        end: Pos::NONE,
    };

    /// Return a new span over the two positions.
    ///
    /// The positions do not need to be sorted.
    pub fn new(p1: Pos, p2: Pos) -> Self {
        let start = min(p1, p2);
        let end = max(p1, p2);
        Self { start, end }
    }

    /// A span starting at `start` covering `len` bytes.
    pub fn with_len(start: Pos, len: usize) -> Self {
        Span::new(start, start.advance(len))
    }

    /// Where the span starts.
    pub fn start(&self) -> Pos {
        self.start
    }

    /// Where the span ends. This is one past the last byte in the span.
    pub fn end(&self) -> Pos {
        self.end
    }

    /// How many bytes the span covers.
    pub fn len(&self) -> usize {
        match (self.start.offset(), self.end.offset()) {
            (Some(start), Some(end)) => end - start,
            _ => 0,
        }
    }

    /// Is this span zero-width?
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Is this span entirely within `other`?
    pub fn is_within(&self, other: Span) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Does this span cover the byte at `pos`?
    pub fn contains(&self, pos: Pos) -> bool {
        self.start <= pos && pos < self.end
    }
}

impl ::std::ops::Add for Span {
    type Output = Self;

    /// Adding spans returns a new span which covers all of each of the spans
    /// given (and any characters in between.)
    ///
    /// This operation commutes, and [`Span::NONE`] is its identity.
    fn add(self, other: Self) -> Self {
        if self == Span::NONE {
            return other;
        } else if other == Span::NONE {
            return self;
        }

        let start = min(self.start, other.start);
        let end = max(self.end, other.end);
        Self::new(start, end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
