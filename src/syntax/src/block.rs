//! Blocks, like `{ x = 1; }`

use diagnostic::Span;

use parser::{
    lexer::{Delimiter, TokenKind as Kind},
    Parse, Parser,
};

use crate::{Statement, Syntax};

/// A block is a brace-delimited sequence of statements, like
/// `{ first = 1; second(); }`.
///
/// Nested blocks can't declare variables, only function bodies can.
///
/// # Grammar
///
/// Block := '{' Statement* '}'
#[derive(Debug)]
pub struct Block<'a> {
    open: Span,
    statements: Vec<Statement<'a>>,
    close: Span,
}

impl<'a> Block<'a> {
    /// Get a reference to the statements.
    pub fn statements(&self) -> &[Statement<'a>] {
        &self.statements
    }

    /// The span of the block's opening brace.
    pub fn open(&self) -> Span {
        self.open
    }

    /// The span of the block's closing brace.
    pub fn close(&self) -> Span {
        self.close
    }
}

impl<'a> Syntax for Block<'a> {
    const NAME: &'static str = "BlockStatement";

    fn span(&self) -> Span {
        self.open + self.close
    }
}

impl<'a> Parse<'a> for Block<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Block<'a> {
        let open = parser.expect(Kind::Open(Delimiter::Brace)).span();

        let mut statements = Vec::new();
        while !matches!(
            parser.peek(),
            Kind::Close(Delimiter::Brace) | Kind::Eof
        ) {
            statements.push(parser.parse());
        }

        let close = parser.expect(Kind::Close(Delimiter::Brace)).span();

        Block {
            open,
            statements,
            close,
        }
    }
}

#[cfg(test)]
mod parser_tests {
    use super::*;

    #[test]
    fn test_empty_block() {
        let (block, errors) = Block::parse("{}");
        assert!(errors.is_empty());
        assert!(block.statements().is_empty());
        assert_eq!(block.span().len(), 2);
    }

    #[test]
    fn test_block_statements() {
        let (block, errors) = Block::parse("{ x = 1; f(x); { } }");
        assert!(errors.is_empty(), "got {}", errors);
        assert_eq!(block.statements().len(), 3);
    }

    #[test]
    fn test_block_unclosed() {
        let (block, errors) = Block::parse("{ x = 1;");
        assert_eq!(block.statements().len(), 1);
        assert_eq!(
            errors.first().map(|d| d.message()),
            Some("expected close brace, got end of file")
        );
    }

    #[test]
    fn test_block_keeps_going_after_bad_statement() {
        let (block, errors) = Block::parse("{ ; x = 1; }");
        assert_eq!(block.statements().len(), 2);
        assert!(matches!(block.statements()[0], Statement::Bad(_)));
        assert_eq!(errors.len(), 1);
    }
}
