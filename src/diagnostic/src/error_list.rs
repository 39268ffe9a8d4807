//! The error list collects any diagnostics produced while working on an
//! input, in the order they're found.

use std::fmt;

use crate::{diagnostic::Diagnostic, position::Position};

/// An ordered, append-only collection of [`Diagnostic`]s.
///
/// Both the lexer and the parser report into the same list, so diagnostics
/// come out in the order they were encountered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorList {
    diagnostics: Vec<Diagnostic>,
}

impl ErrorList {
    /// Record a new message at `position`.
    pub fn add(&mut self, position: Position, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::new(position, message));
    }

    /// Record a fully built [`Diagnostic`].
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// How many diagnostics have been recorded.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Were no diagnostics recorded?
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Iterate over the diagnostics in the order they were recorded.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// The first diagnostic, if there is one.
    pub fn first(&self) -> Option<&Diagnostic> {
        self.diagnostics.first()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for ErrorList {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diagnostics.into_iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for d in &self.diagnostics {
            writeln!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}
