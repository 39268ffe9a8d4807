//! Identifiers

use diagnostic::Span;

use parser::{lexer::TokenKind, Parse, Parser};

use crate::Syntax;

/// A name, like `x` or `café`.
///
/// When an identifier was wanted but something else was there, the
/// identifier is empty and its span is whatever token was there instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identifier<'a> {
    name: &'a str,
    span: Span,
}

impl<'a> Identifier<'a> {
    /// View the identifier as a `&str`.
    pub fn as_str(&self) -> &'a str {
        self.name
    }

    /// Is this standing in for an identifier that wasn't there?
    pub fn is_missing(&self) -> bool {
        self.name.is_empty()
    }
}

impl<'a> Syntax for Identifier<'a> {
    const NAME: &'static str = "Identifier";

    fn span(&self) -> Span {
        self.span
    }
}

impl<'a> Parse<'a> for Identifier<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Identifier<'a> {
        let token = parser.expect(TokenKind::Identifier);
        let name = if token.kind() == TokenKind::Identifier {
            token.body()
        } else {
            ""
        };

        Identifier {
            name,
            span: token.span(),
        }
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_identifier() {
        let (id, errors) = Identifier::parse("hello");
        assert!(errors.is_empty());
        assert_eq!(id.as_str(), "hello");
        assert_eq!(id.span().len(), 5);
    }

    #[test]
    fn test_identifier_missing() {
        let (id, errors) = Identifier::parse("5");
        assert!(id.is_missing());
        assert_eq!(id.span().len(), 1);
        assert_eq!(
            errors.first().map(|d| d.message()),
            Some("expected identifier, got integer")
        );
    }
}
