//! Conditional statements.

use diagnostic::Span;

use parser::{
    lexer::{Delimiter, Reserved, TokenKind as Kind},
    Parse, Parser,
};

use crate::{Expression, Statement, Syntax};

/// Conditional statements, with an optional `else` clause.
///
/// An `else` always belongs to the closest `if` without one, so
/// `if (a) if (b) x(); else y();` only has one `else`, on the inner `if`.
///
/// # Grammar
///
/// [`If`] := `if` `(` [`Expression`] `)` [`Statement`] [`Else`]?
#[derive(Debug)]
pub struct If<'a> {
    keyword: Span,
    open: Span,
    condition: Expression<'a>,
    close: Span,
    body: Box<Statement<'a>>,
    else_clause: Option<Else<'a>>,
}

impl<'a> If<'a> {
    /// The span of the `if` reserved word.
    pub fn if_span(&self) -> Span {
        self.keyword
    }

    /// The condition which is evaluated to branch.
    pub fn condition(&self) -> &Expression<'a> {
        &self.condition
    }

    /// The spans of the parentheses around the condition.
    pub fn parentheses(&self) -> (Span, Span) {
        (self.open, self.close)
    }

    /// The statement run when the condition is true.
    pub fn body(&self) -> &Statement<'a> {
        &self.body
    }

    pub fn else_clause(&self) -> Option<&Else<'a>> {
        self.else_clause.as_ref()
    }
}

impl Syntax for If<'_> {
    const NAME: &'static str = "IfStatement";

    fn span(&self) -> Span {
        match &self.else_clause {
            Some(e) => self.keyword + e.span(),
            None => self.keyword + self.body.span(),
        }
    }
}

impl<'a> Parse<'a> for If<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> If<'a> {
        let keyword = parser.expect(Kind::Reserved(Reserved::If)).span();
        let open = parser.expect(Kind::Open(Delimiter::Parenthesis)).span();
        let condition = parser.parse();
        let close = parser.expect(Kind::Close(Delimiter::Parenthesis)).span();
        let body = Box::new(parser.parse());

        let else_clause = if parser.peek() == Kind::Reserved(Reserved::Else) {
            Some(parser.parse())
        } else {
            None
        };

        If {
            keyword,
            open,
            condition,
            close,
            body,
            else_clause,
        }
    }
}

/// The `else` part of an [`If`].
///
/// # Grammar
///
/// [`Else`] := `else` [`Statement`]
#[derive(Debug)]
pub struct Else<'a> {
    keyword: Span,
    body: Box<Statement<'a>>,
}

impl<'a> Else<'a> {
    /// The span of the `else` reserved word.
    pub fn else_span(&self) -> Span {
        self.keyword
    }

    /// The statement run when the condition is not true.
    pub fn body(&self) -> &Statement<'a> {
        &self.body
    }
}

impl Syntax for Else<'_> {
    const NAME: &'static str = "Else";

    fn span(&self) -> Span {
        self.keyword + self.body.span()
    }
}

impl<'a> Parse<'a> for Else<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Else<'a> {
        Else {
            keyword: parser.expect(Kind::Reserved(Reserved::Else)).span(),
            body: Box::new(parser.parse()),
        }
    }
}
