//! Variable declarations, like `int x = 0;`

use diagnostic::Span;

use parser::{lexer::TokenKind, Parse, Parser};

use crate::{Expression, Identifier, Syntax, Type};

/// Variables are always declared with an initial value.
///
/// # Grammar
///
/// [`VariableDeclaration`] := [`Type`] [`Identifier`] `=` [`Expression`] `;`
#[derive(Debug)]
pub struct VariableDeclaration<'a> {
    ty: Type<'a>,
    name: Identifier<'a>,
    equals: Span,
    initializer: Expression<'a>,
    semicolon: Span,
}

impl<'a> VariableDeclaration<'a> {
    /// Parse the rest of the declaration once the type and name have been
    /// parsed.
    pub(crate) fn parse_from(
        ty: Type<'a>,
        name: Identifier<'a>,
        parser: &mut Parser<'a>,
    ) -> Self {
        let equals = parser.expect(TokenKind::Equals).span();
        let initializer = parser.parse();
        let semicolon = parser.expect(TokenKind::Semicolon).span();

        VariableDeclaration {
            ty,
            name,
            equals,
            initializer,
            semicolon,
        }
    }

    /// The declared type.
    pub fn ty(&self) -> &Type<'a> {
        &self.ty
    }

    pub fn name(&self) -> &Identifier<'a> {
        &self.name
    }

    /// The span of the `=` token.
    pub fn equals(&self) -> Span {
        self.equals
    }

    /// The expression giving the variable its initial value.
    pub fn initializer(&self) -> &Expression<'a> {
        &self.initializer
    }
}

impl Syntax for VariableDeclaration<'_> {
    const NAME: &'static str = "VariableDeclaration";

    fn span(&self) -> Span {
        self.ty.span() + self.semicolon
    }
}

impl<'a> Parse<'a> for VariableDeclaration<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Self {
        let ty = parser.parse();
        let name = parser.parse();
        VariableDeclaration::parse_from(ty, name, parser)
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_variable() {
        let (syntax, errors) = VariableDeclaration::parse("int x = 1;");
        assert!(errors.is_empty());
        assert_eq!(syntax.name().as_str(), "x");
        assert!(matches!(syntax.ty(), Type::Named(_)));
        assert_eq!(syntax.span().len(), 10);
    }

    #[test]
    fn test_variable_complex_type() {
        let (syntax, errors) =
            VariableDeclaration::parse("[(int, bool)] xs = (1, True) : [];");
        assert!(errors.is_empty(), "got {}", errors);
        assert!(matches!(syntax.ty(), Type::List(_)));
        assert!(matches!(syntax.initializer(), Expression::Binary(_)));
    }

    #[test]
    fn test_variable_no_initializer() {
        let (_, errors) = VariableDeclaration::parse("int x;");
        assert_eq!(
            errors.first().map(|d| d.message()),
            Some("expected equals sign (=), got semicolon (;)")
        );
    }
}
