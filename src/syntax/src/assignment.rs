//! Assignment to an existing variable, like `x = x + 1;`

use diagnostic::Span;

use parser::{lexer::TokenKind, Parse, Parser};

use crate::{Expression, Identifier, Syntax};

/// # Grammar
///
/// [`Assignment`] := [`Identifier`] `=` [`Expression`] `;`
#[derive(Debug)]
pub struct Assignment<'a> {
    target: Identifier<'a>,
    equals: Span,
    value: Expression<'a>,
    semicolon: Span,
}

impl<'a> Assignment<'a> {
    /// Parse the rest of an assignment once the target has been parsed.
    pub(crate) fn parse_from(
        target: Identifier<'a>,
        parser: &mut Parser<'a>,
    ) -> Self {
        let equals = parser.expect(TokenKind::Equals).span();
        let value = parser.parse();
        let semicolon = parser.expect(TokenKind::Semicolon).span();

        Assignment {
            target,
            equals,
            value,
            semicolon,
        }
    }

    /// The variable being assigned to.
    pub fn target(&self) -> &Identifier<'a> {
        &self.target
    }

    /// The span of the `=` token.
    pub fn equals(&self) -> Span {
        self.equals
    }

    pub fn value(&self) -> &Expression<'a> {
        &self.value
    }
}

impl<'a> Syntax for Assignment<'a> {
    const NAME: &'static str = "AssignmentStatement";

    fn span(&self) -> Span {
        self.target.span() + self.semicolon
    }
}

impl<'a> Parse<'a> for Assignment<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Self {
        let target = parser.parse();
        Assignment::parse_from(target, parser)
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_assignment() {
        let (syntax, errors) = Assignment::parse("x = x + 1;");
        assert!(errors.is_empty());
        assert_eq!(syntax.target().as_str(), "x");
        assert!(matches!(syntax.value(), Expression::Binary(_)));
        assert_eq!(syntax.span().len(), 10);
    }

    #[test]
    fn test_assignment_double_equals() {
        let (_, errors) = Assignment::parse("x == 1;");
        assert_eq!(
            errors.first().map(|d| d.message()),
            Some("expected equals sign (=), got double equals (==)")
        );
    }
}
