//! Operator precedence and associativity.
//!
//! ## Precedence
//!
//! From loosest to tightest binding:
//!
//! 1. Boolean `&&` and `||`
//! 2. Comparison `==`, `!=`, `<`, `>`, `<=` and `>=`
//! 3. Prefix `!`
//! 4. Pairing with `:`
//! 5. Additive `+` and `-`
//! 6. Multiplicative `*`, `/` and `%`
//! 7. Prefix `-`
//!
//! Note that `!` sits _between_ infix operators, so `!a == b` is `(!a) == b`
//! but `!a : b` is `!(a : b)`.

use crate::lexer::TokenKind;

/// The associativity of an operator.
///
/// Operators 'lean' to a side when multiple operators with the same precedence
/// occur in a sequence. For example, subtraction is left-associative, which
/// means that `a - b - c` is the same as `(a - b) - c`. Since the left one
/// binds first, it's 'left' associative.
///
/// Every infix operator in the language is [`Left`][Associativity::Left]
/// associative. Prefix operators are [`Right`][Associativity::Right]
/// associative, since `- - a` can only mean `-(-a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// The precedence of an operator.
///
/// When multiple operators are used, precedence is how we decide which one
/// 'happens first'. For example, `a + b * c` is read as the same as `a + (b *
/// c)` because the `*` has higher precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Precedence(u8);

impl Precedence {
    /// The lowest possible precedence, where parsing a full expression starts.
    pub const MIN: Precedence = Precedence::BOOLEAN;

    /// `&&` and `||`
    pub const BOOLEAN: Precedence = Precedence(0);
    /// `==`, `!=`, `<`, `>`, `<=` and `>=`
    pub const COMPARISON: Precedence = Precedence(1);
    /// Prefix `!`
    pub const NOT: Precedence = Precedence(2);
    /// `:`
    pub const PAIR: Precedence = Precedence(3);
    /// `+` and `-`
    pub const ADDITIVE: Precedence = Precedence(4);
    /// `*`, `/` and `%`
    pub const MULTIPLICATIVE: Precedence = Precedence(5);
    /// Prefix `-`
    pub const NEGATION: Precedence = Precedence(6);

    /// The highest possible precedence, that of primary expressions.
    pub const MAX: Precedence = Precedence(7);

    /// The next higher precedence. This stops at [`Precedence::MAX`].
    pub fn next(self) -> Self {
        if self == Precedence::MAX {
            self
        } else {
            Precedence(self.0 + 1)
        }
    }
}

/// The precedence and associativity of a token used as an infix operator, or
/// `None` if it isn't one.
pub fn binary(kind: TokenKind) -> Option<(Precedence, Associativity)> {
    use TokenKind::*;

    let precedence = match kind {
        And | Or => Precedence::BOOLEAN,
        DoubleEquals | NotEquals | Less | Greater | LessEquals
        | GreaterEquals => Precedence::COMPARISON,
        Colon => Precedence::PAIR,
        Plus | Minus => Precedence::ADDITIVE,
        Star | Slash | Percent => Precedence::MULTIPLICATIVE,
        _ => return None,
    };

    Some((precedence, Associativity::Left))
}

/// The precedence and associativity of a token used as a prefix operator, or
/// `None` if it isn't one.
pub fn unary(kind: TokenKind) -> Option<(Precedence, Associativity)> {
    match kind {
        TokenKind::Bang => Some((Precedence::NOT, Associativity::Right)),
        TokenKind::Minus => Some((Precedence::NEGATION, Associativity::Right)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Precedence::BOOLEAN < Precedence::COMPARISON);
        assert!(Precedence::COMPARISON < Precedence::NOT);
        assert!(Precedence::NOT < Precedence::PAIR);
        assert!(Precedence::PAIR < Precedence::ADDITIVE);
        assert!(Precedence::ADDITIVE < Precedence::MULTIPLICATIVE);
        assert!(Precedence::MULTIPLICATIVE < Precedence::NEGATION);
        assert!(Precedence::NEGATION < Precedence::MAX);
    }

    #[test]
    fn next_stops_at_max() {
        assert_eq!(Precedence::MIN.next(), Precedence::COMPARISON);
        assert_eq!(Precedence::MAX.next(), Precedence::MAX);
    }

    #[test]
    fn binary_operators() {
        assert_eq!(
            binary(TokenKind::Star),
            Some((Precedence::MULTIPLICATIVE, Associativity::Left))
        );
        assert_eq!(
            binary(TokenKind::Colon),
            Some((Precedence::PAIR, Associativity::Left))
        );
        assert_eq!(binary(TokenKind::Bang), None);
        assert_eq!(binary(TokenKind::Equals), None);
    }

    #[test]
    fn unary_operators() {
        assert_eq!(
            unary(TokenKind::Minus),
            Some((Precedence::NEGATION, Associativity::Right))
        );
        assert_eq!(
            unary(TokenKind::Bang),
            Some((Precedence::NOT, Associativity::Right))
        );
        assert_eq!(unary(TokenKind::Plus), None);
    }
}
