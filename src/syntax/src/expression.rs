//! Expressions

use diagnostic::Span;

use parser::{
    lexer::{Delimiter, TokenKind},
    operator::{self, Associativity, Precedence},
    Parse, Parser,
};

use crate::{
    Binary, BinaryOperator, Call, Identifier, Literal, Parenthesized, Syntax,
    Tuple, Unary, UnaryOperator,
};

/// This type is a syntax tree enum, like those found in the [`syn`][syn-crate]
/// crate. This means it's an `enum` to dispatch on different types of
/// expressions, each of which is their own actual struct.
///
/// [syn-crate]: https://docs.rs/syn/1.0.84/syn/enum.Expr.html#syntax-tree-enums
#[derive(Debug)]
pub enum Expression<'a> {
    /// Something that couldn't be parsed as an expression.
    Bad(Span),
    Binary(Binary<'a>),
    Call(Call<'a>),
    Identifier(Identifier<'a>),
    Literal(Literal<'a>),
    Parenthesized(Parenthesized<'a>),
    Tuple(Tuple<'a>),
    Unary(Unary<'a>),
}

impl<'a> Syntax for Expression<'a> {
    const NAME: &'static str = "Expression";

    fn span(&self) -> Span {
        match self {
            Expression::Bad(span) => *span,
            Expression::Binary(b) => b.span(),
            Expression::Call(c) => c.span(),
            Expression::Identifier(i) => i.span(),
            Expression::Literal(l) => l.span(),
            Expression::Parenthesized(p) => p.span(),
            Expression::Tuple(t) => t.span(),
            Expression::Unary(u) => u.span(),
        }
    }
}

impl<'a> Parse<'a> for Expression<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Expression<'a> {
        Expression::infix(parser, Precedence::MIN)
    }
}

impl<'a> Expression<'a> {
    /// Parse an expression where all the infix operators have at least the
    /// given precedence.
    ///
    /// # Grammar
    ///
    /// infix(n) := prefix (op infix(m))*
    ///
    /// where each `op` has precedence at least `n`, and `m` is one higher
    /// than the precedence of `op` since every infix operator is left
    /// associative.
    fn infix(parser: &mut Parser<'a>, min: Precedence) -> Expression<'a> {
        let mut lhs = Expression::prefix(parser);

        loop {
            let kind = parser.peek();
            let (op, precedence, associativity) =
                match (BinaryOperator::of(kind), operator::binary(kind)) {
                    (Some(op), Some((p, a))) if p >= min => (op, p, a),
                    _ => break,
                };

            let token = parser.advance();
            let next = match associativity {
                Associativity::Left => precedence.next(),
                Associativity::Right => precedence,
            };

            let rhs = Expression::infix(parser, next);
            lhs = Expression::Binary(Binary::new(op, token, lhs, rhs));
        }

        lhs
    }

    /// Parse a prefix operator expression, or a primary expression.
    ///
    /// The operand of a prefix operator is everything that binds at least as
    /// tightly as the operator itself. This is why `!a : b` is `!(a : b)` but
    /// `!a == b` is `(!a) == b`.
    ///
    /// # Grammar
    ///
    /// prefix := prefix_operator infix(prefix_operator) | primary
    fn prefix(parser: &mut Parser<'a>) -> Expression<'a> {
        parser.depth_track(
            |parser| {
                let kind = parser.peek();
                match (UnaryOperator::of(kind), operator::unary(kind)) {
                    (Some(op), Some((precedence, _))) => {
                        let token = parser.advance();
                        let operand = Expression::infix(parser, precedence);
                        Expression::Unary(Unary::new(op, token, operand))
                    }
                    _ => Expression::primary(parser),
                }
            },
            Expression::Bad,
        )
    }

    /// Primary expressions are expressions which don't themselves have any
    /// operators.
    ///
    /// # Grammar
    ///
    /// primary := Literal | Identifier | Call | Parenthesized | Tuple
    fn primary(parser: &mut Parser<'a>) -> Expression<'a> {
        match parser.peek() {
            TokenKind::Identifier => {
                let name = parser.parse::<Identifier>();
                if parser.peek() == TokenKind::Open(Delimiter::Parenthesis) {
                    Expression::Call(Call::parse_from(name, parser))
                } else {
                    Expression::Identifier(name)
                }
            }

            TokenKind::Open(Delimiter::Parenthesis) => {
                Expression::open_parenthesis(parser)
            }

            _ => match Literal::from_token(parser.peek_token()) {
                Some(literal) => {
                    parser.advance();
                    Expression::Literal(literal)
                }
                None => {
                    parser.error_expected(parser.pos(), "expression");
                    Expression::Bad(parser.recover())
                }
            },
        }
    }

    /// Parse an expression which starts with an open paren. It's either just
    /// grouping, like `(a)`, or a pair like `(a, b)`.
    ///
    /// # Grammar
    ///
    /// open_parenthesis := '(' Expression (',' Expression)? ')'
    fn open_parenthesis(parser: &mut Parser<'a>) -> Expression<'a> {
        let close_kind = TokenKind::Close(Delimiter::Parenthesis);

        let open = parser.expect(TokenKind::Open(Delimiter::Parenthesis));
        let first = parser.parse::<Expression>();

        if let Some(comma) = parser.consume(TokenKind::Comma) {
            let second = parser.parse::<Expression>();
            let close = parser.expect(close_kind);
            Expression::Tuple(Tuple::new(open, first, comma, second, close))
        } else {
            let close = parser.expect(close_kind);
            Expression::Parenthesized(Parenthesized::new(open, first, close))
        }
    }
}
