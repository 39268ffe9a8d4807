//! Operator syntax nodes.
//!
//! Notably, these do not implement [`Parse`][crate::Parse].
//!
//! [`Unary`] would need to understand primary expressions, and [`Binary`]
//! would need to know at what precedence. Both are so intertwined with
//! [`Expression`], it doesn't really make sense to parse them outside of that
//! context.

use diagnostic::Span;

use parser::lexer::{Token, TokenKind};

use crate::{Expression, Syntax};

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Not,
    Negate,
}

impl UnaryOperator {
    /// The operator a token stands for, if it's a prefix operator.
    pub fn of(kind: TokenKind) -> Option<UnaryOperator> {
        match kind {
            TokenKind::Bang => Some(UnaryOperator::Not),
            TokenKind::Minus => Some(UnaryOperator::Negate),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOperator::Not => "!",
            UnaryOperator::Negate => "-",
        }
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    And,
    Or,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Pair,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperator {
    /// The operator a token stands for, if it's an infix operator.
    pub fn of(kind: TokenKind) -> Option<BinaryOperator> {
        use BinaryOperator::*;

        Some(match kind {
            TokenKind::And => And,
            TokenKind::Or => Or,
            TokenKind::DoubleEquals => Equal,
            TokenKind::NotEquals => NotEqual,
            TokenKind::Less => Less,
            TokenKind::LessEquals => LessEqual,
            TokenKind::Greater => Greater,
            TokenKind::GreaterEquals => GreaterEqual,
            TokenKind::Colon => Pair,
            TokenKind::Plus => Add,
            TokenKind::Minus => Subtract,
            TokenKind::Star => Multiply,
            TokenKind::Slash => Divide,
            TokenKind::Percent => Modulo,
            _ => return None,
        })
    }

    pub fn as_str(self) -> &'static str {
        use BinaryOperator::*;

        match self {
            And => "&&",
            Or => "||",
            Equal => "==",
            NotEqual => "!=",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Pair => ":",
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            Modulo => "%",
        }
    }
}

/// Prefix operator expressions, like `-a` or `!b`.
///
/// # Grammar
///
/// [`Unary`] := [`UnaryOperator`] [`Expression`]
#[derive(Debug)]
pub struct Unary<'a> {
    operator: UnaryOperator,
    operator_span: Span,
    operand: Box<Expression<'a>>,
}

impl<'a> Unary<'a> {
    pub fn new(
        operator: UnaryOperator,
        token: Token<'a>,
        operand: Expression<'a>,
    ) -> Unary<'a> {
        Unary {
            operator,
            operator_span: token.span(),
            operand: Box::new(operand),
        }
    }

    pub fn operator(&self) -> UnaryOperator {
        self.operator
    }

    /// The span of the operator token.
    pub fn operator_span(&self) -> Span {
        self.operator_span
    }

    /// Get the operand, the expression it's applied to.
    pub fn operand(&self) -> &Expression<'a> {
        &self.operand
    }
}

impl Syntax for Unary<'_> {
    const NAME: &'static str = "UnaryExpression";

    fn span(&self) -> Span {
        self.operator_span + self.operand.span()
    }
}

/// Binary expressions
///
/// # Grammar
///
/// [`Binary`] := [`Expression`] [`BinaryOperator`] [`Expression`]
#[derive(Debug)]
pub struct Binary<'a> {
    operator: BinaryOperator,
    operator_span: Span,
    operands: Box<(Expression<'a>, Expression<'a>)>,
}

impl<'a> Binary<'a> {
    pub fn new(
        operator: BinaryOperator,
        token: Token<'a>,
        lhs: Expression<'a>,
        rhs: Expression<'a>,
    ) -> Binary<'a> {
        Binary {
            operator,
            operator_span: token.span(),
            operands: Box::new((lhs, rhs)),
        }
    }

    pub fn operator(&self) -> BinaryOperator {
        self.operator
    }

    /// The span of the operator token.
    pub fn operator_span(&self) -> Span {
        self.operator_span
    }

    /// Get a left hand side of the binary expression.
    pub fn left(&self) -> &Expression<'a> {
        &self.operands.0
    }

    /// Get a right hand side of the binary expression.
    pub fn right(&self) -> &Expression<'a> {
        &self.operands.1
    }
}

impl Syntax for Binary<'_> {
    const NAME: &'static str = "BinaryExpression";

    fn span(&self) -> Span {
        self.left().span() + self.right().span()
    }
}
