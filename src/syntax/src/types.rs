//! Type annotations, like `int`, `(int, bool)` or `[int]`.

use diagnostic::Span;

use parser::{
    lexer::{Delimiter, TokenKind as Kind},
    Parse, Parser,
};

use crate::{Identifier, Syntax};

/// # Grammar
///
/// Type := Identifier | TupleType | ListType
#[derive(Debug)]
pub enum Type<'a> {
    Bad(Span),
    Named(Identifier<'a>),
    Tuple(TupleType<'a>),
    List(ListType<'a>),
}

impl Type<'_> {
    /// Can a type start with this kind of token?
    pub fn starts_with(kind: Kind) -> bool {
        matches!(
            kind,
            Kind::Identifier
                | Kind::Open(Delimiter::Parenthesis)
                | Kind::Open(Delimiter::Bracket)
        )
    }
}

impl Syntax for Type<'_> {
    const NAME: &'static str = "Type";

    fn span(&self) -> Span {
        match self {
            Type::Bad(span) => *span,
            Type::Named(t) => t.span(),
            Type::Tuple(t) => t.span(),
            Type::List(t) => t.span(),
        }
    }
}

impl<'a> Parse<'a> for Type<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Type<'a> {
        parser.depth_track(
            |parser| match parser.peek() {
                Kind::Identifier => Type::Named(parser.parse()),
                Kind::Open(Delimiter::Parenthesis) => {
                    Type::Tuple(parser.parse())
                }
                Kind::Open(Delimiter::Bracket) => Type::List(parser.parse()),
                _ => {
                    parser.error_expected(parser.pos(), "type");
                    Type::Bad(parser.recover())
                }
            },
            Type::Bad,
        )
    }
}

/// A pair type, like `(int, bool)`.
///
/// # Grammar
///
/// TupleType := '(' Type ',' Type ')'
#[derive(Debug)]
pub struct TupleType<'a> {
    open: Span,
    left: Box<Type<'a>>,
    comma: Span,
    right: Box<Type<'a>>,
    close: Span,
}

impl<'a> TupleType<'a> {
    pub fn left(&self) -> &Type<'a> {
        &self.left
    }

    pub fn right(&self) -> &Type<'a> {
        &self.right
    }

    /// The span of the comma between the two types.
    pub fn comma(&self) -> Span {
        self.comma
    }
}

impl Syntax for TupleType<'_> {
    const NAME: &'static str = "TupleType";

    fn span(&self) -> Span {
        self.open + self.close
    }
}

impl<'a> Parse<'a> for TupleType<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> TupleType<'a> {
        TupleType {
            open: parser.expect(Kind::Open(Delimiter::Parenthesis)).span(),
            left: Box::new(parser.parse()),
            comma: parser.expect(Kind::Comma).span(),
            right: Box::new(parser.parse()),
            close: parser.expect(Kind::Close(Delimiter::Parenthesis)).span(),
        }
    }
}

/// A list type, like `[int]`.
///
/// # Grammar
///
/// ListType := '[' Type ']'
#[derive(Debug)]
pub struct ListType<'a> {
    open: Span,
    element: Box<Type<'a>>,
    close: Span,
}

impl<'a> ListType<'a> {
    /// The type of the list's elements.
    pub fn element(&self) -> &Type<'a> {
        &self.element
    }
}

impl Syntax for ListType<'_> {
    const NAME: &'static str = "ListType";

    fn span(&self) -> Span {
        self.open + self.close
    }
}

impl<'a> Parse<'a> for ListType<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> ListType<'a> {
        ListType {
            open: parser.expect(Kind::Open(Delimiter::Bracket)).span(),
            element: Box::new(parser.parse()),
            close: parser.expect(Kind::Close(Delimiter::Bracket)).span(),
        }
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_named() {
        let (t, errors) = Type::parse("int");
        assert!(errors.is_empty());
        assert!(matches!(t, Type::Named(id) if id.as_str() == "int"));
    }

    #[test]
    fn test_nested() {
        let (t, errors) = Type::parse("[(int, [bool])]");
        assert!(errors.is_empty(), "got {}", errors);

        let list = match t {
            Type::List(list) => list,
            other => panic!("expected a list type, got {:?}", other),
        };
        assert!(matches!(list.element(), Type::Tuple(_)));
        assert_eq!(list.span().len(), 15);
    }

    #[test]
    fn test_bad() {
        let (t, errors) = Type::parse(";");
        assert!(matches!(t, Type::Bad(_)));
        assert_eq!(
            errors.first().map(|d| d.message()),
            Some("expected type, got semicolon (;)")
        );
    }

    #[test]
    fn test_tuple_missing_comma() {
        let (t, errors) = Type::parse("(int bool)");
        assert!(matches!(t, Type::Tuple(_)));
        assert_eq!(
            errors.first().map(|d| d.message()),
            Some("expected comma (,), got identifier")
        );
    }
}
