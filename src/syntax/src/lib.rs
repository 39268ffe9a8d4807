//! SPL syntax tools.
//!
//! Every piece of syntax knows how to parse itself through [`Parse`], and
//! knows where it came from through [`Syntax`]. Parsing always produces a
//! tree; anything that went wrong shows up as a `Bad` node in the tree and a
//! diagnostic in the [`ErrorList`] that comes back with it.
//!
//! Trees can be traversed with the [`walk`] module, and turned back into
//! text with the [`print`] module.

mod assignment;
mod block;
mod call;
mod comment;
mod conditional;
mod declaration;
mod early_exit;
mod error;
mod expression;
mod file;
mod function;
mod grouping;
mod ident;
mod literal;
mod loops;
mod operator;
mod statement;
mod types;
mod variable;

pub mod print;
pub mod walk;

use diagnostic::{ErrorList, FileInfo};

pub use diagnostic::Span;
pub use parser::{Config, Parse, Parser};

pub use crate::{
    assignment::Assignment,
    block::Block,
    call::{Call, CallStatement},
    comment::Comment,
    conditional::{Else, If},
    declaration::Declaration,
    early_exit::Return,
    error::Error,
    expression::Expression,
    file::File,
    function::{FunctionDeclaration, FunctionParameter, FunctionParameters},
    grouping::{Parenthesized, Tuple},
    ident::Identifier,
    literal::{Literal, LiteralKind},
    loops::While,
    operator::{Binary, BinaryOperator, Unary, UnaryOperator},
    statement::Statement,
    types::{ListType, TupleType, Type},
    variable::VariableDeclaration,
};

/// The common interface for all syntax nodes.
pub trait Syntax {
    /// A human-friendly name for this kind of syntax.
    const NAME: &'static str;

    /// The span of source the syntax came from.
    fn span(&self) -> Span;
}

/// Convert a byte array into a string, but return an [`Error`] if it's not
/// UTF-8, or if it's too long for a [`Pos`][diagnostic::Pos] to point into.
pub fn verify_utf8(input: &[u8]) -> Result<&str, Error> {
    if input.len() > diagnostic::Pos::MAX_OFFSET {
        return Err(Error::TooLarge(input.len()));
    }

    std::str::from_utf8(input).map_err(Error::from)
}

/// Parse a whole source file.
///
/// The `name` is only used for diagnostics. The tree always comes back, and
/// the diagnostics are in the order they were found.
pub fn parse_file<'a>(name: &str, source: &'a str) -> (File<'a>, ErrorList) {
    parse_file_with(name, source, Config::default())
}

/// Parse a whole source file with some parser [`Config`].
pub fn parse_file_with<'a>(
    name: &str,
    source: &'a str,
    config: Config,
) -> (File<'a>, ErrorList) {
    let mut parser = Parser::with_config(FileInfo::new(name), source, config);
    let file = parser.parse::<File>();
    let (_, errors) = parser.into_parts();

    log::info!(
        "parsed {:?}: {} declarations, {} errors",
        name,
        file.declarations().len(),
        errors.len()
    );

    (file, errors)
}
