//! Top level declarations.

use diagnostic::Span;

use parser::{
    lexer::{Delimiter, TokenKind},
    Parse, Parser,
};

use crate::{FunctionDeclaration, Identifier, Syntax, Type, VariableDeclaration};

/// Everything at the top level of a file is a declaration.
///
/// Variables and functions both start with a type and a name, it's the next
/// token that decides which one it is.
///
/// # Grammar
///
/// [`Declaration`] := [`VariableDeclaration`] | [`FunctionDeclaration`]
#[derive(Debug)]
pub enum Declaration<'a> {
    /// Something that couldn't be parsed as a declaration.
    Bad(Span),
    Variable(VariableDeclaration<'a>),
    Function(FunctionDeclaration<'a>),
}

impl Syntax for Declaration<'_> {
    const NAME: &'static str = "Declaration";

    fn span(&self) -> Span {
        match self {
            Declaration::Bad(span) => *span,
            Declaration::Variable(v) => v.span(),
            Declaration::Function(f) => f.span(),
        }
    }
}

impl<'a> Parse<'a> for Declaration<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Self {
        if !Type::starts_with(parser.peek()) {
            return Declaration::bad(parser, Span::NONE);
        }

        let ty = parser.parse::<Type>();

        if parser.peek() != TokenKind::Identifier {
            return Declaration::bad(parser, ty.span());
        }

        let name = parser.parse::<Identifier>();

        match parser.peek() {
            TokenKind::Equals => Declaration::Variable(
                VariableDeclaration::parse_from(ty, name, parser),
            ),
            TokenKind::Open(Delimiter::Parenthesis) => Declaration::Function(
                FunctionDeclaration::parse_from(ty, name, parser),
            ),
            _ => Declaration::bad(parser, ty.span()),
        }
    }
}

impl<'a> Declaration<'a> {
    /// Report the next token, and consume it as part of a bad declaration
    /// which started at `start`.
    fn bad(parser: &mut Parser<'a>, start: Span) -> Self {
        parser.error_expected(parser.pos(), "declaration");
        Declaration::Bad(start + parser.recover())
    }
}
