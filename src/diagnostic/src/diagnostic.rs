use std::fmt;

use crate::{position::Position, span::Span};

/// A diagnostic message, with its location and an optional highlight.
///
/// The ultimate purpose of these is to be shown to the programmer at some
/// point. To that end, the `Display` implementation here dumps the plain
/// `file:line:column: message` form, which is what editors understand.
///
/// Builder-style methods consume `self` and return it, since the highlight is
/// typically only known by the code that creates the [`Diagnostic`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where in the source file the problem begins.
    position: Position,

    /// The highlighted region relevant to this diagnostic.
    highlight: Option<Span>,

    /// The primary message of the diagnostic.
    message: String,
}

impl Diagnostic {
    /// Create a new diagnostic message at some position.
    pub fn new(position: Position, message: impl Into<String>) -> Self {
        Diagnostic {
            position,
            highlight: None,
            message: message.into(),
        }
    }

    /// Add a highlighted region to this diagnostic message.
    pub fn highlight(mut self, span: Span) -> Self {
        self.highlight = Some(span);
        self
    }

    /// The location where the issue started.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The highlighted region, if any.
    pub fn get_highlight(&self) -> Option<Span> {
        self.highlight
    }

    /// The main diagnostic message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.position, self.message)
    }
}

impl std::error::Error for Diagnostic {}
