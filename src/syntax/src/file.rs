//! Source files

use diagnostic::Span;

use parser::{Parse, Parser};

use crate::{Comment, Declaration, Syntax};

/// A whole source file. This is the root of the syntax tree.
///
/// # Grammar
///
/// [`File`] := [`Declaration`]*
#[derive(Debug)]
pub struct File<'a> {
    declarations: Vec<Declaration<'a>>,
    comments: Vec<Comment<'a>>,
}

impl<'a> File<'a> {
    pub fn declarations(&self) -> &[Declaration<'a>] {
        &self.declarations
    }

    /// All the comments in the file, in order.
    pub fn comments(&self) -> &[Comment<'a>] {
        &self.comments
    }
}

impl Syntax for File<'_> {
    const NAME: &'static str = "File";

    /// From the start of the first declaration to the end of the last. A file
    /// with no declarations has no span.
    fn span(&self) -> Span {
        match (self.declarations.first(), self.declarations.last()) {
            (Some(first), Some(last)) => first.span() + last.span(),
            _ => Span::NONE,
        }
    }
}

impl<'a> Parse<'a> for File<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Self {
        let mut declarations = Vec::new();

        while !parser.is_empty() {
            declarations.push(parser.parse());
        }

        let comments = parser
            .take_comments()
            .into_iter()
            .map(Comment::from)
            .collect();

        File {
            declarations,
            comments,
        }
    }
}
