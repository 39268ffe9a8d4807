//! Syntax for literal values.
//!
//! [`Literal`] doesn't implement [`Parse`][parser::Parse] since there's no
//! placeholder literal to make when there isn't one. They're parsed as part
//! of an [`Expression`][crate::Expression].

use diagnostic::Span;

use parser::lexer::{Reserved, Token, TokenKind};

use crate::Syntax;

/// The different kinds of literal values that can appear in source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Integer,
    EmptyList,
    True,
    False,
}

impl LiteralKind {
    /// The kind of literal a token is, if it is one.
    pub fn of(kind: TokenKind) -> Option<LiteralKind> {
        match kind {
            TokenKind::Integer => Some(LiteralKind::Integer),
            TokenKind::EmptyList => Some(LiteralKind::EmptyList),
            TokenKind::Reserved(Reserved::True) => Some(LiteralKind::True),
            TokenKind::Reserved(Reserved::False) => Some(LiteralKind::False),
            _ => None,
        }
    }
}

/// A literal value is something like `123` or `True` which produces a
/// specific value at runtime.
///
/// Integers are kept as they were written, `007` stays `007`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    kind: LiteralKind,
    body: &'a str,
    span: Span,
}

impl<'a> Literal<'a> {
    /// The literal a token is, if it's one at all.
    pub fn from_token(token: Token<'a>) -> Option<Literal<'a>> {
        LiteralKind::of(token.kind()).map(|kind| Literal {
            kind,
            body: token.body(),
            span: token.span(),
        })
    }

    /// The [`LiteralKind`] of literal value this is.
    pub fn kind(&self) -> LiteralKind {
        self.kind
    }

    /// The text from the source for this literal value.
    pub fn body(&self) -> &'a str {
        self.body
    }
}

impl Syntax for Literal<'_> {
    const NAME: &'static str = "LiteralExpression";

    fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use diagnostic::FileInfo;
    use parser::Parser;

    use super::*;

    fn first_literal(input: &str) -> Option<Literal> {
        let parser = Parser::new(FileInfo::default(), input);
        Literal::from_token(parser.peek_token())
    }

    #[test]
    fn kinds() {
        let kind = |input| first_literal(input).map(|l| l.kind());
        assert_eq!(kind("0"), Some(LiteralKind::Integer));
        assert_eq!(kind("[]"), Some(LiteralKind::EmptyList));
        assert_eq!(kind("True"), Some(LiteralKind::True));
        assert_eq!(kind("False"), Some(LiteralKind::False));
        assert_eq!(kind("true"), None);
        assert_eq!(kind("[ ]"), None);
    }

    #[test]
    fn verbatim() {
        let literal = first_literal("007");
        assert_eq!(literal.map(|l| l.body()), Some("007"));
    }
}
