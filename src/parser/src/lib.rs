//! A parser-writing tool and a lexer.
//!
//! [`Parser`] doesn't parse a specific grammar, but instead provides tools for
//! writing parsers centered around the [`Parse`] trait where each type of
//! syntax node knows how to parse itself. This is geared towards building
//! recursive decent (i.e. top down) parsers with one token of lookahead.
//!
//! Parsing never fails outright. When a rule finds something it can't use it
//! reports a diagnostic, consumes a token so that parsing keeps moving, and
//! produces some placeholder syntax. All the diagnostics end up in one
//! [`ErrorList`] along with those from the [`Lexer`][crate::lexer::Lexer].
//!
//! Anywhere your grammar is recursive you should call [`Parser::depth_track`]
//! to help prevent the parser from blowing the stack.
//!
//! Operator precedence for the expression grammar lives in the
//! [`operator`][op] module.
//!
//! [op]: crate::operator

pub mod error;
pub mod lexer;
pub mod operator;
pub mod parser;

use diagnostic::{ErrorList, FileInfo};

pub use crate::{
    error::Error,
    parser::{Config, Parser},
};

/// Implementing this trait tells a [`Parser`] how to parse your piece of
/// syntax. The idea is to implement this for as many AST nodes as possible to
/// allow the parser to start parsing at different places in the grammar.
pub trait Parse<'a>: Sized {
    /// Parse all of `input` as this piece of syntax.
    ///
    /// Anything left over afterwards is reported. The syntax comes back along
    /// with every diagnostic found, whether or not there were any.
    fn parse(input: &'a str) -> (Self, ErrorList) {
        let mut parser = Parser::new(FileInfo::default(), input);
        let syntax = parser.parse::<Self>();

        if !parser.is_empty() {
            parser.error_expected(parser.pos(), "end of file");
        }

        let (_, errors) = parser.into_parts();
        (syntax, errors)
    }

    /// This is the method used to compose pieces of syntax which implement
    /// [`Parse`] into a larger syntax tree.
    ///
    /// Typically, unless we're done parsing, parser will not be empty
    /// afterwards. Implementations must always produce something, and must
    /// consume at least one token when they report an error.
    fn parse_with(parser: &mut Parser<'a>) -> Self;
}
