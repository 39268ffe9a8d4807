//! # Tokens
//!
//! Each token is an individual lexeme in our language -- the smallest unit of
//! meaning.
//!
//! Tokens provide both the semantic information in the form of their `Kind`,
//! and the general context they were found in.

use diagnostic::{Pos, Span};

/// An individual lexeme in our language.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'a> {
    /// The semantic kind thing the token is. See `Kind` for more.
    pub(crate) kind: Kind,

    /// This is the `Span` of this token's body, not including any surrounding
    /// whitespace.
    pub(crate) span: Span,

    /// The body of the token as it was represented in the original input.
    pub(crate) body: &'a str,
}

impl<'a> Token<'a> {
    /// The kind of token this is.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The span of the body of this token, not including surrounding
    /// whitespace.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Where the token starts.
    pub fn pos(&self) -> Pos {
        self.span.start()
    }

    /// The way the token was represented in the source. This is empty for the
    /// end of file.
    pub fn body(&self) -> &'a str {
        self.body
    }
}

impl<'a> ::std::fmt::Display for Token<'a> {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
        write!(f, "{}", self.body)
    }
}

/// A [`Token`]'s kind is the semantically-relevant part of the token, removed
/// from the source context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Something the lexer couldn't make sense of. A diagnostic has already
    /// been reported for it.
    Invalid,
    /// The end of the input. Once the lexer returns this it keeps doing so.
    Eof,
    /// Either a `//` line comment or a `/* */` block comment.
    Comment,

    /// Things like `foo` are identifiers, names for things.
    Identifier,
    /// An integer like `5`.
    Integer,
    /// The empty list literal `[]`, which is a single token.
    EmptyList,

    /// Words which are used by the language and can't be identifiers.
    Reserved(Reserved),

    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `==`
    DoubleEquals,
    /// `!=`
    NotEquals,
    /// `<`
    Less,
    /// `<=`
    LessEquals,
    /// `>`
    Greater,
    /// `>=`
    GreaterEquals,
    /// `=`
    Equals,
    /// `!`
    Bang,

    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,

    /// Open a paired delimiter.
    Open(Delimiter),

    /// Close a paired delimiter
    Close(Delimiter),
}

impl Kind {
    /// The user-facing name of this kind of token.
    pub fn name(&self) -> &'static str {
        use Delimiter::*;
        use Kind::*;
        match self {
            Invalid => "invalid token",
            Eof => "end of file",
            Comment => "comment",
            Identifier => "identifier",
            Integer => "integer",
            EmptyList => "empty list ([])",
            Reserved(r) => r.as_str(),
            Plus => "plus (+)",
            Minus => "minus (-)",
            Star => "asterisk (*)",
            Slash => "slash (/)",
            Percent => "percent sign (%)",
            And => "and (&&)",
            Or => "or (||)",
            DoubleEquals => "double equals (==)",
            NotEquals => "not equals (!=)",
            Less => "less than (<)",
            LessEquals => "less than or equal (<=)",
            Greater => "greater than (>)",
            GreaterEquals => "greater than or equal (>=)",
            Equals => "equals sign (=)",
            Bang => "exclamation mark (!)",
            Comma => "comma (,)",
            Semicolon => "semicolon (;)",
            Colon => "colon (:)",
            Open(Parenthesis) => "open parenthesis",
            Close(Parenthesis) => "close parenthesis",
            Open(Bracket) => "open bracket",
            Close(Bracket) => "close bracket",
            Open(Brace) => "open brace",
            Close(Brace) => "close brace",
        }
    }
}

/// Delimiters are the different sorts of characters with a distinct opening and
/// closing characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    /// `{}`
    Brace,

    /// `[]`
    Bracket,

    /// `()`
    Parenthesis,
}

/// Reserved words are words which can't be used by programmers, but instead
/// are reserved for use by the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reserved {
    Else,
    False,
    If,
    Return,
    True,
    While,
}

impl Reserved {
    /// The in-code representation of a reserved word.
    pub fn as_str(self) -> &'static str {
        use self::Reserved::*;
        match self {
            Else => "else",
            False => "False",
            If => "if",
            Return => "return",
            True => "True",
            While => "while",
        }
    }

    pub(crate) fn try_from_bytes(b: &str) -> Option<Reserved> {
        use self::Reserved::*;
        Some(match b {
            "else" => Else,
            "False" => False,
            "if" => If,
            "return" => Return,
            "True" => True,
            "while" => While,
            _ => return None,
        })
    }
}
