//! Comments

use diagnostic::Span;

use parser::lexer::Token;

use crate::Syntax;

/// A `//` line comment or `/* */` block comment, as written.
///
/// Comments aren't part of the grammar, they're collected separately by the
/// parser and kept on the [`File`][crate::File].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comment<'a> {
    text: &'a str,
    span: Span,
}

impl<'a> Comment<'a> {
    /// The full text of the comment, including the `//` or `/*` and `*/`.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Is this a `/* */` comment?
    pub fn is_block(&self) -> bool {
        self.text.starts_with("/*")
    }
}

impl<'a> From<Token<'a>> for Comment<'a> {
    fn from(token: Token<'a>) -> Self {
        Comment {
            text: token.body(),
            span: token.span(),
        }
    }
}

impl Syntax for Comment<'_> {
    const NAME: &'static str = "Comment";

    fn span(&self) -> Span {
        self.span
    }
}
