//! Lexing - converting input into [`Token`]s.
//!
//! Generally speaking you shouldn't need these directly, and can go straight to
//! using a [`Parser`][crate::parser::Parser] instead.
//!
//! Before we can start the task of parsing, we need to sweep over the input and
//! break it apart into meaningful atoms called [`Token`]s. The lexer does this
//! one token at a time, when it's asked for the next one.
//!
//! # Notes
//!
//! The lexer never fails. Anything it can't make sense of becomes a
//! [`TokenKind::Invalid`] token and a diagnostic in its [`ErrorList`], and the
//! end of input is a [`TokenKind::Eof`] token which it will keep returning.

mod error;
mod rules;
mod token;

use diagnostic::{Diagnostic, ErrorList, FileInfo, Pos, Span};

pub use crate::lexer::{
    error::Error,
    token::{Delimiter, Kind as TokenKind, Reserved, Token},
};

/// A [`Lexer`] scans over a `&str` character by character and breaks things
/// into component meaningful parts ([`Token`]s).
///
/// The lexer owns the [`FileInfo`] for the input, since it's the one that sees
/// each newline go by, and the [`ErrorList`] that diagnostics for the input
/// are collected in.
///
/// # Example
///
/// ```
/// # use diagnostic::FileInfo;
/// # use parser::lexer::{Lexer, TokenKind};
/// let mut lexer = Lexer::new(FileInfo::new("example"), "abc def");
/// loop {
///     let token = lexer.scan();
///     if token.kind() == TokenKind::Eof {
///         break;
///     }
///     // do something with token
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'i> {
    /// The input being consumed, as utf8
    pub(crate) input: &'i str,

    /// The location of the lexer, as a byte offset
    pub(crate) offset: usize,

    /// Where newlines have been seen.
    file: FileInfo,

    /// Diagnostics for this input, from the lexer or anyone else.
    errors: ErrorList,

    /// The number of problems the lexer itself found.
    error_count: usize,
}

impl<'i> Lexer<'i> {
    /// Create a new lexer over some input.
    pub fn new(file: FileInfo, input: &'i str) -> Self {
        Lexer {
            input,
            offset: 0,
            file,
            errors: ErrorList::default(),
            error_count: 0,
        }
    }

    /// Has the lexer consumed all of the input?
    ///
    /// # Examples
    ///
    /// ```
    /// # use diagnostic::FileInfo;
    /// # use parser::lexer::Lexer;
    /// let lexer = Lexer::new(FileInfo::default(), "");
    /// assert!(lexer.is_empty());
    /// let lexer = Lexer::new(FileInfo::default(), "non-empty");
    /// assert!(!lexer.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Produce the next token, advancing the lexer past it.
    ///
    /// Whitespace before the token is skipped. At the end of the input this
    /// returns an empty [`TokenKind::Eof`] token, as many times as it's
    /// called.
    pub fn scan(&mut self) -> Token<'i> {
        self.whitespace();

        let start = self.offset;
        let kind = self.token_kind();

        let span =
            Span::new(Pos::from_offset(start), Pos::from_offset(self.offset));
        let body = &self.input[start..self.offset];

        log::trace!("scanned {:?} {:?} at {}", kind, body, start);

        Token { kind, span, body }
    }

    /// The input fed into the lexer that hasn't been broken into tokens yet.
    ///
    /// # Example
    ///
    /// ```
    /// # use diagnostic::FileInfo;
    /// # use parser::lexer::Lexer;
    /// let mut lexer = Lexer::new(FileInfo::default(), "abc def");
    /// let abc = lexer.scan();
    /// assert_eq!(lexer.remaining_input(), " def");
    /// ```
    pub fn remaining_input(&self) -> &'i str {
        &self.input[self.offset..]
    }

    /// The number of lexical errors found so far.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// The position index for the input, as far as it's been scanned.
    pub fn file(&self) -> &FileInfo {
        &self.file
    }

    /// The diagnostics reported so far.
    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    /// Record a diagnostic about the input, starting at the beginning of
    /// `span` and highlighting all of it.
    pub fn report(&mut self, span: Span, message: impl ToString) {
        let position = self.file.position(span.start());
        let diagnostic = Diagnostic::new(position, message.to_string());
        self.errors.push(diagnostic.highlight(span));
    }

    /// Give up the position index and diagnostics once done.
    pub fn into_parts(self) -> (FileInfo, ErrorList) {
        (self.file, self.errors)
    }

    /// Record a lexical error.
    pub(crate) fn error(&mut self, span: Span, error: Error) {
        self.error_count += 1;
        self.report(span, error);
    }

    /// The span of the next [`char`]. If at the end of the input, the span
    /// is zero-width at the end.
    pub(crate) fn peek_span(&self) -> Span {
        let len = self.peek().map_or(0, char::len_utf8);
        Span::with_len(Pos::from_offset(self.offset), len)
    }

    /// The next character, without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.remaining_input().chars().next()
    }

    /// The character `n` after the next one, without consuming anything.
    pub(crate) fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining_input().chars().nth(n)
    }

    /// Consume the next character. Newlines are recorded in the position
    /// index as they go past.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;

        if c == '\n' {
            self.file.add_line(self.offset);
        }

        self.offset += c.len_utf8();
        Some(c)
    }

    /// Consume the next character if it's `wanted`.
    pub(crate) fn char(&mut self, wanted: char) -> Option<char> {
        if self.peek() == Some(wanted) {
            self.advance()
        } else {
            None
        }
    }

    /// Consume characters while they match the predicate, returning what was
    /// consumed.
    pub(crate) fn consume_while(
        &mut self,
        predicate: impl Fn(char) -> bool,
    ) -> &'i str {
        let start = self.offset;

        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }

        &self.input[start..self.offset]
    }
}
