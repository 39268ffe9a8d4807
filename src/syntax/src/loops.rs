//! Looping constructs.

use diagnostic::Span;

use parser::{
    lexer::{Delimiter, Reserved, TokenKind},
    Parse, Parser,
};

use crate::{Expression, Statement, Syntax};

/// A loop which runs its body as long as the condition holds.
///
/// # Grammar
///
/// [`While`] := `while` `(` [`Expression`] `)` [`Statement`]
#[derive(Debug)]
pub struct While<'a> {
    keyword: Span,
    open: Span,
    condition: Expression<'a>,
    close: Span,
    body: Box<Statement<'a>>,
}

impl<'a> While<'a> {
    /// The span of the `while` reserved word.
    pub fn while_span(&self) -> Span {
        self.keyword
    }

    pub fn condition(&self) -> &Expression<'a> {
        &self.condition
    }

    /// The spans of the parentheses around the condition.
    pub fn parentheses(&self) -> (Span, Span) {
        (self.open, self.close)
    }

    pub fn body(&self) -> &Statement<'a> {
        &self.body
    }
}

impl<'a> Syntax for While<'a> {
    const NAME: &'static str = "WhileStatement";

    fn span(&self) -> Span {
        self.keyword + self.body.span()
    }
}

impl<'a> Parse<'a> for While<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Self {
        let keyword = parser.expect(TokenKind::Reserved(Reserved::While));
        let open = parser.expect(TokenKind::Open(Delimiter::Parenthesis));
        let condition = parser.parse();
        let close = parser.expect(TokenKind::Close(Delimiter::Parenthesis));
        let body = parser.parse();

        While {
            keyword: keyword.span(),
            open: open.span(),
            condition,
            close: close.span(),
            body: Box::new(body),
        }
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_while() {
        let (syntax, errors) = While::parse("while (i < n) { i = i + 1; }");
        assert!(errors.is_empty(), "got {}", errors);
        assert!(matches!(syntax.body(), Statement::Block(_)));
        assert_eq!(syntax.span().len(), 28);
    }

    #[test]
    fn test_while_missing_body() {
        let (syntax, errors) = While::parse("while (x)");
        assert!(matches!(syntax.body(), Statement::Bad(_)));
        assert_eq!(
            errors.first().map(|d| d.message()),
            Some("expected statement, got end of file")
        );
    }
}
