//! Parsers.
//!
//! See the [module documentation][crate] for more information on how this all
//! fits together, and how to use it.

use diagnostic::{ErrorList, FileInfo, Pos, Span};

use crate::{
    error::Error,
    lexer::{Lexer, Token, TokenKind},
    Parse,
};

/// Settings for a [`Parser`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// How deeply types, statements and expressions can nest before the
    /// parser gives up on them. See [`Parser::depth_track`].
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: Parser::MAX_DEPTH,
        }
    }
}

/// A Parser pulls tokens from a [`Lexer`] one at a time and provides ways to
/// work with that sequence of tokens to define a grammar using [`Parse`].
///
/// It keeps one token of lookahead. Comments never show up as lookahead,
/// they're set aside as they're scanned, see [`Parser::take_comments`].
///
/// See the [module documentation][crate] for more information on how this all
/// fits together, and how to use it.
#[derive(Debug)]
pub struct Parser<'a> {
    /// Where the tokens come from. It also holds the diagnostics.
    lexer: Lexer<'a>,

    /// The next token, which hasn't been consumed yet.
    token: Token<'a>,

    /// Comments seen so far, in order.
    comments: Vec<Token<'a>>,

    /// The span of the last token consumed that wasn't the end of input.
    last: Span,

    /// The grammar can be recursive in a few places, we track our 'depth' into
    /// these recursive forms here to prevent stack overflows.
    depth: usize,

    config: Config,
}

impl<'a> Parser<'a> {
    /// Create a parser over some input with the default configuration.
    pub fn new(file: FileInfo, input: &'a str) -> Parser<'a> {
        Parser::with_config(file, input, Config::default())
    }

    /// Create a parser over some input.
    pub fn with_config(
        file: FileInfo,
        input: &'a str,
        config: Config,
    ) -> Parser<'a> {
        log::debug!("parsing {:?} ({} bytes)", file.name(), input.len());

        let mut lexer = Lexer::new(file, input);
        let token = lexer.scan();

        let mut parser = Parser {
            lexer,
            token,
            comments: Vec::new(),
            last: Span::NONE,
            depth: 0,
            config,
        };

        parser.skip_comments();
        parser
    }

    /// Consume input to produce the specified piece of [`Parse`]able syntax.
    ///
    /// # Note
    ///
    /// Generally you'll want to use [`Parse::parse`] instead, as it checks
    /// that all input is consumed. This method is instead used for _making_
    /// parsers.
    pub fn parse<T: Parse<'a>>(&mut self) -> T {
        T::parse_with(self)
    }

    /// Has the parser consumed all of the input?
    pub fn is_empty(&self) -> bool {
        self.token.kind() == TokenKind::Eof
    }

    /// Returns the `TokenKind` of the next token, without consuming it.
    pub fn peek(&self) -> TokenKind {
        self.token.kind()
    }

    /// The next token, without consuming it.
    pub fn peek_token(&self) -> Token<'a> {
        self.token
    }

    /// The span of the next token. At the end of the input this is an empty
    /// span at the very end.
    pub fn peek_span(&self) -> Span {
        self.token.span()
    }

    /// The position of the next token.
    pub fn pos(&self) -> Pos {
        self.token.pos()
    }

    /// Consume the next token, whatever it is, and return it.
    ///
    /// Ultimately, this is the only method that moves the parser forward over
    /// input. At the end of the input it keeps returning the end of file
    /// token.
    pub fn advance(&mut self) -> Token<'a> {
        let consumed = self.token;
        if !consumed.span().is_empty() {
            self.last = consumed.span();
        }

        self.token = self.lexer.scan();
        self.skip_comments();
        consumed
    }

    /// Consume a token after reporting an error, returning the span for the
    /// placeholder syntax that stands in for it.
    ///
    /// The end of input has nothing in it to consume, so there the span of
    /// the last real token is used instead. Placeholders are only empty if
    /// the whole input is.
    pub fn recover(&mut self) -> Span {
        let token = self.advance();
        if token.span().is_empty() && self.last != Span::NONE {
            self.last
        } else {
            token.span()
        }
    }

    /// Consume the next token if it has the [`TokenKind`] we wanted. If the
    /// next token has the wrong kind `None` is returned and nothing is
    /// consumed.
    pub fn consume(&mut self, wanted: TokenKind) -> Option<Token<'a>> {
        if self.peek() == wanted {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consume the next token, which should have the [`TokenKind`] we wanted.
    ///
    /// If it doesn't an error is reported, but the token is consumed anyway so
    /// that parsing always makes progress.
    pub fn expect(&mut self, wanted: TokenKind) -> Token<'a> {
        if self.peek() != wanted {
            self.error_expected(self.pos(), wanted.name());
        }

        self.advance()
    }

    /// Report that `wanted` was expected at `pos`.
    ///
    /// If `pos` is where the next token is, the message also says what was
    /// found there.
    pub fn error_expected(&mut self, pos: Pos, wanted: &str) {
        let (span, found) = if pos == self.pos() {
            (self.peek_span(), Some(self.peek()))
        } else {
            (Span::new(pos, pos), None)
        };

        let error = Error::Expected {
            wanted: wanted.to_string(),
            found,
        };

        self.error(span, error);
    }

    /// Report a syntax error over `span`.
    pub fn error(&mut self, span: Span, error: Error) {
        log::debug!("syntax error at {}: {}", span, error);
        self.lexer.report(span, error);
    }

    /// A `sep` separated list of some piece of syntax, which ends right
    /// before a `close` token. The `close` token isn't consumed.
    ///
    /// If something other than `sep` or `close` follows an element it's
    /// reported, consumed, and the list ends there.
    pub fn sep_by<S>(
        &mut self,
        sep: TokenKind,
        close: TokenKind,
    ) -> (Vec<S>, Vec<Span>)
    where
        S: Parse<'a>,
    {
        let mut elements = Vec::new();
        let mut separators = Vec::new();

        if self.peek() == close {
            return (elements, separators);
        }

        loop {
            elements.push(self.parse::<S>());

            match self.peek() {
                // If we see a separator, save it and continue
                t if t == sep => separators.push(self.advance().span()),

                t if t == close => break,

                _ => {
                    let wanted = format!("{} or {}", sep.name(), close.name());
                    self.error_expected(self.pos(), &wanted);
                    self.advance();
                    break;
                }
            }
        }

        (elements, separators)
    }

    /// Take all the comments seen so far.
    pub fn take_comments(&mut self) -> Vec<Token<'a>> {
        std::mem::take(&mut self.comments)
    }

    /// The diagnostics reported so far, by the lexer and the parser.
    pub fn errors(&self) -> &ErrorList {
        self.lexer.errors()
    }

    /// The position index of the input, as far as it's been scanned.
    pub fn file(&self) -> &FileInfo {
        self.lexer.file()
    }

    /// Finish parsing, keeping the position index and diagnostics.
    pub fn into_parts(self) -> (FileInfo, ErrorList) {
        self.lexer.into_parts()
    }

    /// Comments are set aside as soon as they're seen, so they're never the
    /// next token.
    fn skip_comments(&mut self) {
        while self.token.kind() == TokenKind::Comment {
            self.comments.push(self.token);
            self.token = self.lexer.scan();
        }
    }
}

// Depth tracking
impl<'a> Parser<'a> {
    /// The default maximum 'depth' of the parser.
    ///
    /// This only counts parser activity within
    /// [`depth_track`][Parser::depth_track] blocks towards this limit, not just
    /// general grammar depth.
    pub const MAX_DEPTH: usize = 128;

    /// Run `inner` one level deeper, to prevent parsing from blowing the stack
    /// where the grammar is recursive.
    ///
    /// If the depth limit has been hit an error is reported instead, one
    /// token is consumed, and `bad` makes a placeholder from its span.
    pub fn depth_track<S>(
        &mut self,
        inner: impl FnOnce(&mut Self) -> S,
        bad: impl FnOnce(Span) -> S,
    ) -> S {
        if self.depth >= self.config.max_depth {
            let span = self.peek_span();
            self.error(span, Error::TooDeep);
            return bad(self.recover());
        }

        self.depth += 1;
        let syntax = inner(self);
        self.depth -= 1;
        syntax
    }
}

#[cfg(test)]
mod parser_tests {
    use diagnostic::Pos;

    use super::*;

    fn parser(input: &str) -> Parser {
        Parser::new(FileInfo::new("test"), input)
    }

    #[test]
    fn consume() {
        let mut p = parser("hi");

        assert!(!p.is_empty());
        assert!(p.consume(TokenKind::Semicolon).is_none());
        assert!(p.consume(TokenKind::Identifier).is_some());
        assert!(p.is_empty());
        assert!(p.consume(TokenKind::Identifier).is_none());
    }

    #[test]
    fn peek() {
        assert_eq!(parser("").peek(), TokenKind::Eof);
        assert_eq!(parser("a").peek(), TokenKind::Identifier);
    }

    #[test]
    fn peek_span() {
        let empty = Span::with_len(Pos::from_offset(0), 0);
        assert_eq!(parser("").peek_span(), empty);
        assert_eq!(
            parser(" hi").peek_span(),
            Span::with_len(Pos::from_offset(1), 2)
        );
    }

    #[test]
    fn is_empty() {
        assert!(parser("").is_empty());
        assert!(parser(" ").is_empty());
        assert!(parser("// only a comment").is_empty());
        assert!(!parser("nope").is_empty());

        let mut parser = parser("hi");
        assert!(!parser.is_empty());
        parser.advance();
        assert!(parser.is_empty());
    }

    #[test]
    fn advance_past_end() {
        let mut parser = parser("a");
        assert_eq!(parser.advance().kind(), TokenKind::Identifier);
        assert_eq!(parser.advance().kind(), TokenKind::Eof);
        assert_eq!(parser.advance().kind(), TokenKind::Eof);
    }

    #[test]
    fn expect_reports_and_advances() {
        let mut parser = parser("a b");
        let token = parser.expect(TokenKind::Semicolon);

        assert_eq!(token.kind(), TokenKind::Identifier);
        assert_eq!(parser.peek_token().body(), "b");
        assert_eq!(parser.errors().len(), 1);

        let d = parser.errors().first().unwrap();
        assert_eq!(d.message(), "expected semicolon (;), got identifier");
        assert_eq!(
            d.to_string(),
            "test:1:1: expected semicolon (;), got identifier"
        );
    }

    #[test]
    fn error_expected_elsewhere() {
        let mut parser = parser("a\n  b");
        let a = parser.advance();
        parser.error_expected(a.pos(), "statement");

        let d = parser.errors().first().unwrap();
        assert_eq!(d.to_string(), "test:1:1: expected statement");

        parser.error_expected(parser.pos(), "statement");
        let d = parser.errors().iter().nth(1).unwrap();
        assert_eq!(
            d.to_string(),
            "test:2:3: expected statement, got identifier"
        );
    }

    #[test]
    fn comments_set_aside() {
        let mut parser = parser("/* one */ a // two\n b");
        assert_eq!(parser.advance().body(), "a");
        assert_eq!(parser.advance().body(), "b");

        let comments = parser.take_comments();
        let bodies: Vec<_> = comments.iter().map(Token::body).collect();
        assert_eq!(bodies, ["/* one */", "// two"]);
        assert!(parser.take_comments().is_empty());
    }

    #[test]
    fn recover_at_end() {
        let mut parser = parser("a ;");
        let semicolon = Span::with_len(Pos::from_offset(2), 1);

        assert_eq!(parser.recover(), Span::with_len(Pos::from_offset(0), 1));
        assert_eq!(parser.recover(), semicolon);
        assert!(parser.is_empty());
        assert_eq!(parser.recover(), semicolon);
    }

    #[test]
    fn recover_in_empty_input() {
        let mut parser = parser("");
        assert!(parser.recover().is_empty());
    }

    // A few things are tested elsewhere since testing makes more sense with a
    // grammar specified. See tests in `/tests/parser_tests.rs` for more.
    //
    // - `depth_track`
    // - `sep_by`
}
