use diagnostic::FileInfo;
use parser::lexer::*;

fn lexer(input: &str) -> Lexer {
    Lexer::new(FileInfo::new("test.spl"), input)
}

/// All the token kinds up to and including the end of file.
fn kinds(input: &str) -> Vec<TokenKind> {
    let mut lexer = lexer(input);
    let mut buf = Vec::new();
    loop {
        let token = lexer.scan();
        buf.push(token.kind());
        if token.kind() == TokenKind::Eof {
            return buf;
        }
    }
}

/// The first diagnostic's message.
fn first_error(input: &str) -> Option<String> {
    let mut lexer = lexer(input);
    while lexer.scan().kind() != TokenKind::Eof {}
    lexer.errors().first().map(|d| d.to_string())
}

#[test]
fn lexer_empty() {
    let mut lexer = lexer("");
    assert!(lexer.is_empty());
    assert_eq!(lexer.scan().kind(), TokenKind::Eof);
    assert_eq!(lexer.scan().kind(), TokenKind::Eof);
    assert_eq!(lexer.error_count(), 0);
}

#[test]
fn lexer_empty_whitespace_only() {
    assert_eq!(kinds(" \t\r\n "), [TokenKind::Eof]);
}

#[test]
fn lexer_whitespace() {
    let mut lexer = lexer("  \t\r\n  a    \t\r\n ");

    assert!(!lexer.is_empty());
    let a = lexer.scan();
    assert_eq!(a.body(), "a");
    assert_eq!(lexer.scan().kind(), TokenKind::Eof);
    assert!(lexer.is_empty());
}

#[test]
fn lexer_eof_is_at_end() {
    let mut lexer = lexer("ab ");
    lexer.scan();
    let eof = lexer.scan();
    assert_eq!(eof.body(), "");
    assert_eq!(eof.span().len(), 0);
    assert_eq!(eof.pos().offset(), Some(3));
}

#[test]
fn lexer_identifier_simple() {
    let mut lexer = lexer("input");
    let token = lexer.scan();
    assert_eq!(token.kind(), TokenKind::Identifier);
    assert_eq!(token.body(), "input");
}

#[test]
fn lexer_identifier_continue() {
    let mut lexer = lexer("x_1 café");
    assert_eq!(lexer.scan().body(), "x_1");
    assert_eq!(lexer.scan().body(), "café");
}

#[test]
fn lexer_identifier_start_underscore() {
    assert_eq!(
        kinds("_input"),
        [TokenKind::Invalid, TokenKind::Identifier, TokenKind::Eof]
    );
}

#[test]
fn lexer_reserved() {
    assert_eq!(
        kinds("if else while return True False true"),
        [
            TokenKind::Reserved(Reserved::If),
            TokenKind::Reserved(Reserved::Else),
            TokenKind::Reserved(Reserved::While),
            TokenKind::Reserved(Reserved::Return),
            TokenKind::Reserved(Reserved::True),
            TokenKind::Reserved(Reserved::False),
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexer_reserved_prefix_is_identifier() {
    let mut lexer = lexer("iffy returned");
    assert_eq!(lexer.scan().kind(), TokenKind::Identifier);
    assert_eq!(lexer.scan().kind(), TokenKind::Identifier);
}

#[test]
fn lexer_integer_verbatim() {
    let mut lexer = lexer("007 42x");
    let token = lexer.scan();
    assert_eq!(token.kind(), TokenKind::Integer);
    assert_eq!(token.body(), "007");
    assert_eq!(lexer.scan().body(), "42");
    assert_eq!(lexer.scan().body(), "x");
}

#[test]
fn lexer_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] [] , ; :"),
        [
            TokenKind::Open(Delimiter::Parenthesis),
            TokenKind::Close(Delimiter::Parenthesis),
            TokenKind::Open(Delimiter::Brace),
            TokenKind::Close(Delimiter::Brace),
            TokenKind::Open(Delimiter::Bracket),
            TokenKind::Close(Delimiter::Bracket),
            TokenKind::EmptyList,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexer_operators() {
    assert_eq!(
        kinds("+ - * / % && || == != < <= > >= = !"),
        [
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Percent,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::DoubleEquals,
            TokenKind::NotEquals,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::Equals,
            TokenKind::Bang,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexer_operators_without_spaces() {
    assert_eq!(
        kinds("a<=-b"),
        [
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Minus,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("=== !!"),
        [
            TokenKind::DoubleEquals,
            TokenKind::Equals,
            TokenKind::Bang,
            TokenKind::Bang,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexer_line_comment() {
    let mut lexer = lexer("a // the rest\nb");
    assert_eq!(lexer.scan().body(), "a");

    let comment = lexer.scan();
    assert_eq!(comment.kind(), TokenKind::Comment);
    assert_eq!(comment.body(), "// the rest");

    assert_eq!(lexer.scan().body(), "b");
}

#[test]
fn lexer_line_comment_at_end() {
    let mut lexer = lexer("//");
    assert_eq!(lexer.scan().body(), "//");
    assert_eq!(lexer.scan().kind(), TokenKind::Eof);
}

#[test]
fn lexer_block_comment() {
    let mut lexer = lexer("/* one\ntwo */ a");
    let comment = lexer.scan();
    assert_eq!(comment.kind(), TokenKind::Comment);
    assert_eq!(comment.body(), "/* one\ntwo */");
    assert_eq!(lexer.scan().body(), "a");
    assert_eq!(lexer.error_count(), 0);
}

#[test]
fn lexer_block_comment_unterminated() {
    let mut lexer = lexer("a /* never closed");
    lexer.scan();

    let comment = lexer.scan();
    assert_eq!(comment.kind(), TokenKind::Comment);
    assert_eq!(comment.body(), "/* never closed");
    assert_eq!(lexer.scan().kind(), TokenKind::Eof);

    assert_eq!(lexer.error_count(), 1);
    assert_eq!(
        first_error("a /* never closed").as_deref(),
        Some("test.spl:1:3: block comment not terminated")
    );
}

#[test]
fn lexer_block_comment_slash_star_slash() {
    assert_eq!(kinds("/*/"), [TokenKind::Comment, TokenKind::Eof]);
    assert_eq!(
        first_error("/*/").as_deref(),
        Some("test.spl:1:1: block comment not terminated")
    );
    assert_eq!(kinds("/**/"), [TokenKind::Comment, TokenKind::Eof]);
    assert_eq!(first_error("/**/"), None);
}

#[test]
fn lexer_slash_alone() {
    assert_eq!(
        kinds("a / b"),
        [
            TokenKind::Identifier,
            TokenKind::Slash,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexer_illegal_character() {
    let mut lexer = lexer("a # b");
    lexer.scan();

    let token = lexer.scan();
    assert_eq!(token.kind(), TokenKind::Invalid);
    assert_eq!(token.body(), "#");
    assert_eq!(lexer.scan().body(), "b");

    assert_eq!(lexer.error_count(), 1);
    assert_eq!(
        first_error("a # b").as_deref(),
        Some("test.spl:1:3: illegal character '#'")
    );
}

#[test]
fn lexer_illegal_multibyte_character() {
    let mut lexer = lexer("→x");
    let token = lexer.scan();
    assert_eq!(token.kind(), TokenKind::Invalid);
    assert_eq!(token.body(), "→");
    assert_eq!(lexer.scan().body(), "x");
}

#[test]
fn lexer_only_illegal_characters() {
    assert_eq!(
        kinds("$$$"),
        [
            TokenKind::Invalid,
            TokenKind::Invalid,
            TokenKind::Invalid,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn lexer_single_ampersand() {
    assert_eq!(
        kinds("a & b"),
        [
            TokenKind::Identifier,
            TokenKind::Invalid,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        first_error("a & b").as_deref(),
        Some("test.spl:1:4: expected '&' after '&'")
    );
}

#[test]
fn lexer_single_bar_at_end() {
    assert_eq!(kinds("|"), [TokenKind::Invalid, TokenKind::Eof]);
    assert_eq!(
        first_error("|").as_deref(),
        Some("test.spl:1:2: expected '|' after '|'")
    );
}

#[test]
fn lexer_positions() {
    let mut lexer = lexer("a\n  b\n\nc");
    let a = lexer.scan();
    let b = lexer.scan();
    let c = lexer.scan();

    let position = lexer.file().position(a.pos());
    assert_eq!((position.line(), position.column()), (1, 1));
    let position = lexer.file().position(b.pos());
    assert_eq!((position.line(), position.column()), (2, 3));
    let position = lexer.file().position(c.pos());
    assert_eq!((position.line(), position.column()), (4, 1));
}

#[test]
fn lexer_tokens_cover_input() {
    let input = "int f(int x) { // hi\n return x+1; } /* bye */";
    let mut lexer = lexer(input);
    let mut rebuilt = String::new();

    loop {
        let token = lexer.scan();
        if token.kind() == TokenKind::Eof {
            break;
        }
        let start = token.pos().offset().unwrap();
        while rebuilt.len() < start {
            rebuilt.push(' ');
        }
        rebuilt.push_str(token.body());
    }

    let expected: String = input
        .chars()
        .map(|c| if c.is_whitespace() { ' ' } else { c })
        .collect();
    assert_eq!(rebuilt, expected);
}
