//! Using parenthesis to group up expressions, or to make pairs.
//!
//! These are parsed by [`Expression`] since both start the same way.

use diagnostic::Span;

use parser::lexer::Token;

use crate::{Expression, Syntax};

/// Parentheses used for groupings.
///
/// # Grammar
///
/// [`Parenthesized`] := `(` [`Expression`] `)`
#[derive(Debug)]
pub struct Parenthesized<'a> {
    open: Span,
    inner: Box<Expression<'a>>,
    close: Span,
}

impl<'a> Parenthesized<'a> {
    pub(crate) fn new(
        open: Token<'a>,
        inner: Expression<'a>,
        close: Token<'a>,
    ) -> Self {
        Parenthesized {
            open: open.span(),
            inner: Box::new(inner),
            close: close.span(),
        }
    }

    /// Get the inner expression.
    pub fn inner(&self) -> &Expression<'a> {
        &self.inner
    }
}

impl Syntax for Parenthesized<'_> {
    const NAME: &'static str = "ParenthesizedExpression";

    fn span(&self) -> Span {
        self.open + self.close
    }
}

/// A pair of expressions, like `(1, x)`.
///
/// # Grammar
///
/// [`Tuple`] := `(` [`Expression`] `,` [`Expression`] `)`
#[derive(Debug)]
pub struct Tuple<'a> {
    open: Span,
    left: Box<Expression<'a>>,
    comma: Span,
    right: Box<Expression<'a>>,
    close: Span,
}

impl<'a> Tuple<'a> {
    pub(crate) fn new(
        open: Token<'a>,
        left: Expression<'a>,
        comma: Token<'a>,
        right: Expression<'a>,
        close: Token<'a>,
    ) -> Self {
        Tuple {
            open: open.span(),
            left: Box::new(left),
            comma: comma.span(),
            right: Box::new(right),
            close: close.span(),
        }
    }

    pub fn left(&self) -> &Expression<'a> {
        &self.left
    }

    pub fn right(&self) -> &Expression<'a> {
        &self.right
    }

    /// The span of the comma between the elements.
    pub fn comma(&self) -> Span {
        self.comma
    }
}

impl Syntax for Tuple<'_> {
    const NAME: &'static str = "TupleExpression";

    fn span(&self) -> Span {
        self.open + self.close
    }
}
