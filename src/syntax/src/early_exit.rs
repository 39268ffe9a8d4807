//! Early exit from a function, with `return`.

use diagnostic::Span;

use parser::{
    lexer::{Reserved, TokenKind},
    Parse, Parser,
};

use crate::{Expression, Syntax};

/// # Grammar
///
/// [`Return`] := `return` [`Expression`]? `;`
#[derive(Debug)]
pub struct Return<'a> {
    keyword: Span,
    value: Option<Expression<'a>>,
    semicolon: Span,
}

impl<'a> Return<'a> {
    /// The span of the `return` reserved word.
    pub fn return_span(&self) -> Span {
        self.keyword
    }

    /// The value returned, if there is one.
    pub fn value(&self) -> Option<&Expression<'a>> {
        self.value.as_ref()
    }
}

impl<'a> Syntax for Return<'a> {
    const NAME: &'static str = "ReturnStatement";

    fn span(&self) -> Span {
        self.keyword + self.semicolon
    }
}

impl<'a> Parse<'a> for Return<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Self {
        let keyword = parser.expect(TokenKind::Reserved(Reserved::Return));

        let value = if parser.peek() == TokenKind::Semicolon {
            None
        } else {
            Some(parser.parse())
        };

        let semicolon = parser.expect(TokenKind::Semicolon);

        Return {
            keyword: keyword.span(),
            value,
            semicolon: semicolon.span(),
        }
    }
}
