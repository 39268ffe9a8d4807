//! The rules of the lexical grammar

use unicode_xid::UnicodeXID;

use crate::lexer::{Delimiter, Error, Lexer, Reserved, TokenKind};

impl Lexer<'_> {
    /// This is the main entry point into the lexer internals. It dispatches to
    /// smaller handlers for more complicated token types.
    pub(crate) fn token_kind(&mut self) -> TokenKind {
        let next = match self.peek() {
            Some(c) => c,
            None => return TokenKind::Eof,
        };

        match next {
            // Numbers and words
            c if c.is_ascii_digit() => self.number(),
            c if is_identifier_start(c) => self.word(),

            // Comments
            '/' if self.peek_nth(1) == Some('/') => self.line_comment(),
            '/' if self.peek_nth(1) == Some('*') => self.block_comment(),

            // Operators which are one or two characters.
            '=' => {
                self.one_or_two('=', TokenKind::Equals, TokenKind::DoubleEquals)
            }
            '!' => self.one_or_two('=', TokenKind::Bang, TokenKind::NotEquals),
            '<' => self.one_or_two('=', TokenKind::Less, TokenKind::LessEquals),
            '>' => self.one_or_two(
                '=',
                TokenKind::Greater,
                TokenKind::GreaterEquals,
            ),
            '[' => self.one_or_two(
                ']',
                TokenKind::Open(Delimiter::Bracket),
                TokenKind::EmptyList,
            ),

            // Operators which must be two characters.
            '&' => self.doubled('&', TokenKind::And),
            '|' => self.doubled('|', TokenKind::Or),

            c => {
                let span = self.peek_span();
                self.advance();

                match c {
                    '+' => TokenKind::Plus,
                    '-' => TokenKind::Minus,
                    '*' => TokenKind::Star,
                    '/' => TokenKind::Slash,
                    '%' => TokenKind::Percent,
                    ',' => TokenKind::Comma,
                    ';' => TokenKind::Semicolon,
                    ':' => TokenKind::Colon,
                    '(' => TokenKind::Open(Delimiter::Parenthesis),
                    ')' => TokenKind::Close(Delimiter::Parenthesis),
                    '{' => TokenKind::Open(Delimiter::Brace),
                    '}' => TokenKind::Close(Delimiter::Brace),
                    ']' => TokenKind::Close(Delimiter::Bracket),
                    _ => {
                        self.error(span, Error::IllegalCharacter(c));
                        TokenKind::Invalid
                    }
                }
            }
        }
    }

    /// Whitespace is any string of input which is made up of spaces, tabs and
    /// line endings. It's discarded, which is why this doesn't returns
    /// anything.
    ///
    /// ```text
    /// Whitespace := (` ` | `\t` | `\r` | `\n`)*
    /// ```
    pub(crate) fn whitespace(&mut self) {
        self.consume_while(|c| matches!(c, ' ' | '\t' | '\r' | '\n'));
    }

    /// Numbers are runs of decimal digits. The text is kept as it is.
    ///
    /// ```text
    /// Integer := [0-9]+
    /// ```
    fn number(&mut self) -> TokenKind {
        self.consume_while(|c| c.is_ascii_digit());
        TokenKind::Integer
    }

    /// A word is any reserved word or identifier.
    ///
    /// ```text
    /// Word := XID_Start XID_Continue*
    /// ```
    fn word(&mut self) -> TokenKind {
        let word = self.consume_while(is_identifier_continue);

        match Reserved::try_from_bytes(word) {
            Some(r) => TokenKind::Reserved(r),
            None => TokenKind::Identifier,
        }
    }

    /// A line comment starts with `//` and continues until the end of the
    /// line. The newline isn't part of the comment.
    fn line_comment(&mut self) -> TokenKind {
        self.consume_while(|c| c != '\n');
        TokenKind::Comment
    }

    /// A block comment starts with `/*` and runs until the next `*/`. They
    /// don't nest.
    ///
    /// If there's no `*/` the rest of the input is the comment, and an error
    /// is reported at the start of it.
    fn block_comment(&mut self) -> TokenKind {
        let start = self.peek_span();
        self.advance();
        self.advance();

        loop {
            match self.advance() {
                Some('*') if self.char('/').is_some() => break,
                Some(_) => continue,
                None => {
                    self.error(start, Error::UnterminatedComment);
                    break;
                }
            }
        }

        TokenKind::Comment
    }

    /// A token which is `one` on its own, or `two` when followed by `second`.
    fn one_or_two(
        &mut self,
        second: char,
        one: TokenKind,
        two: TokenKind,
    ) -> TokenKind {
        self.advance();

        if self.char(second).is_some() {
            two
        } else {
            one
        }
    }

    /// A token which is only valid when its character is doubled, like `&&`.
    ///
    /// On its own it's an error, reported where the second character should
    /// have been. Only the one character is consumed.
    fn doubled(&mut self, c: char, kind: TokenKind) -> TokenKind {
        self.advance();

        if self.char(c).is_some() {
            kind
        } else {
            let span = self.peek_span();
            self.error(span, Error::Undoubled(c));
            TokenKind::Invalid
        }
    }
}

/// Is a character a valid beginning to an identifier, i.e. a letter by
/// [`is_xid_start`][UnicodeXID::is_xid_start]?
fn is_identifier_start(c: char) -> bool {
    UnicodeXID::is_xid_start(c)
}

/// Is a character valid inside an identifier, i.e.
/// [`is_xid_continue`][UnicodeXID::is_xid_continue]? This covers letters,
/// digits and underscores.
fn is_identifier_continue(c: char) -> bool {
    UnicodeXID::is_xid_continue(c)
}
