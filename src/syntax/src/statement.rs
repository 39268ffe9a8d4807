//! Statements

use diagnostic::Span;

use parser::{
    lexer::{Delimiter, Reserved, TokenKind},
    Parse, Parser,
};

use crate::{
    Assignment, Block, CallStatement, Identifier, If, Return, Syntax, While,
};

/// This type is a syntax tree enum, like those found in the [`syn`][syn-crate]
/// crate. This means it's a pretty simple `enum` to dispatch on different
/// types of statements.
///
/// [syn-crate]: https://docs.rs/syn/1.0.84/syn/enum.Expr.html#syntax-tree-enums
///
/// # Grammar
///
/// [`Statement`] := [`Block`] | [`Return`] | [`If`] | [`While`]
///                | [`Assignment`] | [`CallStatement`]
#[derive(Debug)]
pub enum Statement<'a> {
    /// Something that couldn't be parsed as a statement.
    Bad(Span),
    Assignment(Assignment<'a>),
    Block(Block<'a>),
    Call(CallStatement<'a>),
    If(If<'a>),
    Return(Return<'a>),
    While(While<'a>),
}

impl<'a> Syntax for Statement<'a> {
    const NAME: &'static str = "Statement";

    fn span(&self) -> Span {
        match self {
            Statement::Bad(span) => *span,
            Statement::Assignment(a) => a.span(),
            Statement::Block(b) => b.span(),
            Statement::Call(c) => c.span(),
            Statement::If(i) => i.span(),
            Statement::Return(r) => r.span(),
            Statement::While(w) => w.span(),
        }
    }
}

impl<'a> Parse<'a> for Statement<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Statement<'a> {
        parser.depth_track(
            |parser| match parser.peek() {
                TokenKind::Open(Delimiter::Brace) => {
                    Statement::Block(parser.parse())
                }
                TokenKind::Reserved(Reserved::Return) => {
                    Statement::Return(parser.parse())
                }
                TokenKind::Reserved(Reserved::If) => {
                    Statement::If(parser.parse())
                }
                TokenKind::Reserved(Reserved::While) => {
                    Statement::While(parser.parse())
                }
                TokenKind::Identifier => {
                    let name = parser.parse();
                    Statement::after_identifier(name, parser)
                }
                _ => {
                    parser.error_expected(parser.pos(), "statement");
                    Statement::Bad(parser.recover())
                }
            },
            Statement::Bad,
        )
    }
}

impl<'a> Statement<'a> {
    /// Finish a statement that started with an identifier.
    ///
    /// If it's neither an assignment nor a call, only the identifier ends up
    /// in the bad statement and nothing more is consumed.
    pub(crate) fn after_identifier(
        name: Identifier<'a>,
        parser: &mut Parser<'a>,
    ) -> Statement<'a> {
        match parser.peek() {
            TokenKind::Equals => {
                Statement::Assignment(Assignment::parse_from(name, parser))
            }
            TokenKind::Open(Delimiter::Parenthesis) => {
                Statement::Call(CallStatement::parse_from(name, parser))
            }
            _ => {
                parser.error_expected(name.span().start(), "statement");
                Statement::Bad(name.span())
            }
        }
    }
}
