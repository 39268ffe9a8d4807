//! Function calls

use diagnostic::Span;

use parser::{
    lexer::{Delimiter, TokenKind},
    Parse, Parser,
};

use crate::{Expression, Identifier, Syntax};

/// Function calls, which are always to a function by name.
///
/// # Grammar
///
/// Call := Identifier '(' sep_by(Expression, ',') ')'
#[derive(Debug)]
pub struct Call<'a> {
    name: Identifier<'a>,
    open: Span,
    arguments: Vec<Expression<'a>>,
    commas: Vec<Span>,
    close: Span,
}

impl<'a> Call<'a> {
    /// The name of the function being called.
    pub fn name(&self) -> &Identifier<'a> {
        &self.name
    }

    /// The span of the call's open parenthesis.
    pub fn open(&self) -> Span {
        self.open
    }

    /// Get a reference to the call's arguments.
    pub fn arguments(&self) -> &[Expression<'a>] {
        &self.arguments
    }

    /// Get a reference to the call's commas.
    pub fn commas(&self) -> &[Span] {
        &self.commas
    }

    /// The span of the call's close parenthesis.
    pub fn close(&self) -> Span {
        self.close
    }

    /// Parse the rest of a call, once the name has been parsed.
    pub(crate) fn parse_from(
        name: Identifier<'a>,
        parser: &mut Parser<'a>,
    ) -> Self {
        let close_kind = TokenKind::Close(Delimiter::Parenthesis);

        let open = parser.expect(TokenKind::Open(Delimiter::Parenthesis));
        let (arguments, commas) = parser.sep_by(TokenKind::Comma, close_kind);
        let close = parser.expect(close_kind);

        Call {
            name,
            open: open.span(),
            arguments,
            commas,
            close: close.span(),
        }
    }
}

impl<'a> Syntax for Call<'a> {
    const NAME: &'static str = "FunctionCallExpression";

    fn span(&self) -> Span {
        self.name.span() + self.close
    }
}

impl<'a> Parse<'a> for Call<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Self {
        let name = parser.parse();
        Call::parse_from(name, parser)
    }
}

/// A call used as a statement, like `print(x);`.
///
/// # Grammar
///
/// CallStatement := Call ';'
#[derive(Debug)]
pub struct CallStatement<'a> {
    call: Call<'a>,
    semicolon: Span,
}

impl<'a> CallStatement<'a> {
    pub(crate) fn parse_from(
        name: Identifier<'a>,
        parser: &mut Parser<'a>,
    ) -> Self {
        CallStatement {
            call: Call::parse_from(name, parser),
            semicolon: parser.expect(TokenKind::Semicolon).span(),
        }
    }

    pub fn call(&self) -> &Call<'a> {
        &self.call
    }
}

impl Syntax for CallStatement<'_> {
    const NAME: &'static str = "FunctionCallStatement";

    fn span(&self) -> Span {
        self.call.span() + self.semicolon
    }
}

impl<'a> Parse<'a> for CallStatement<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Self {
        let name = parser.parse();
        CallStatement::parse_from(name, parser)
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_call_empty() {
        let (call, errors) = Call::parse("f()");
        assert!(errors.is_empty());
        assert_eq!(call.name().as_str(), "f");
        assert!(call.arguments().is_empty());
        assert_eq!(call.span().len(), 3);
    }

    #[test]
    fn test_call_arguments() {
        let (call, errors) = Call::parse("f(a, 1 + 2, (x, y))");
        assert!(errors.is_empty(), "got {}", errors);
        assert_eq!(call.arguments().len(), 3);
        assert_eq!(call.commas().len(), 2);
    }

    #[test]
    fn test_call_trailing_comma() {
        let (_, errors) = Call::parse("f(a,)");
        assert_eq!(
            errors.first().map(|d| d.message()),
            Some("expected expression, got close parenthesis")
        );
    }

    #[test]
    fn test_call_missing_comma() {
        let (call, errors) = Call::parse("f(a b)");
        assert_eq!(call.arguments().len(), 1);
        assert_eq!(
            errors.first().map(|d| d.message()),
            Some("expected comma (,) or close parenthesis, got identifier")
        );
    }

    #[test]
    fn test_call_statement() {
        let (statement, errors) = CallStatement::parse("print(x);");
        assert!(errors.is_empty());
        assert_eq!(statement.call().arguments().len(), 1);
        assert_eq!(statement.span().len(), 9);
    }

    #[test]
    fn test_call_statement_no_semicolon() {
        let (_, errors) = CallStatement::parse("print(x)");
        assert_eq!(
            errors.first().map(|d| d.message()),
            Some("expected semicolon (;), got end of file")
        );
    }
}
