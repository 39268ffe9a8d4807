use syntax::{
    parse_file, print::debug_tree, Declaration, Expression, File, Parse,
    Statement, Syntax,
};

const VALID: &str = "int f(int x) { return x + 1; }";

fn messages(input: &str) -> Vec<String> {
    let (_, errors) = parse_file("test.spl", input);
    errors.iter().map(|d| d.to_string()).collect()
}

/// The tree dump for the initializer of `int x = <input>;`
fn expression_tree(input: &str) -> String {
    let source = format!("int x = {};", input);
    let (file, errors) = File::parse(&source);
    assert!(errors.is_empty(), "{:?} failed with {}", input, errors);

    match &file.declarations()[0] {
        Declaration::Variable(v) => debug_tree(v.initializer()),
        other => panic!("expected a variable, got {:?}", other),
    }
}

#[test]
fn valid_function() {
    let (file, errors) = parse_file("test.spl", VALID);
    assert!(errors.is_empty(), "got {}", errors);
    assert_eq!(file.declarations().len(), 1);

    let f = match &file.declarations()[0] {
        Declaration::Function(f) => f,
        other => panic!("expected a function, got {:?}", other),
    };

    assert_eq!(f.name().as_str(), "f");
    assert_eq!(f.parameters().as_slice().len(), 1);
    assert_eq!(f.parameters().as_slice()[0].name().as_str(), "x");
    assert!(f.variables().is_empty());
    assert_eq!(f.statements().len(), 1);

    match &f.statements()[0] {
        Statement::Return(r) => {
            assert!(matches!(r.value(), Some(Expression::Binary(_))))
        }
        other => panic!("expected a return, got {:?}", other),
    }
}

#[test]
fn valid_function_tree() {
    let (file, _) = parse_file("test.spl", VALID);
    assert_eq!(
        debug_tree(&file),
        "\
File
\tFunctionDeclaration
\t\tNamedType: int
\t\tIdentifier: f
\t\tFunctionParameters
\t\t\tFunctionParameter
\t\t\t\tNamedType: int
\t\t\t\tIdentifier: x
\t\tReturnStatement
\t\t\tBinaryExpression: +
\t\t\t\tIdentifier: x
\t\t\t\tLiteralExpression: 1
"
    );
}

#[test]
fn malformed_declaration() {
    let (file, errors) = parse_file("test.spl", "int ;");
    assert!(matches!(file.declarations(), [Declaration::Bad(_)]));
    assert_eq!(errors.len(), 1);
    assert_eq!(
        messages("int ;"),
        ["test.spl:1:5: expected declaration, got semicolon (;)"]
    );
}

#[test]
fn variable_after_statement() {
    let input = "int f() {\n\tx = 1;\n\tint y = 2;\n}";
    assert_eq!(messages(input), ["test.spl:3:2: expected statement"]);

    let (file, _) = parse_file("test.spl", input);
    let f = match &file.declarations()[0] {
        Declaration::Function(f) => f,
        other => panic!("expected a function, got {:?}", other),
    };
    assert!(f.variables().is_empty());
    assert!(matches!(f.statements()[1], Statement::Bad(s) if s.len() == 3));
}

#[test]
fn left_associative() {
    assert_eq!(
        expression_tree("a - b - c"),
        "\
BinaryExpression: -
\tBinaryExpression: -
\t\tIdentifier: a
\t\tIdentifier: b
\tIdentifier: c
"
    );
}

#[test]
fn mixed_precedence() {
    assert_eq!(
        expression_tree("a + b * c"),
        "\
BinaryExpression: +
\tIdentifier: a
\tBinaryExpression: *
\t\tIdentifier: b
\t\tIdentifier: c
"
    );

    assert_eq!(
        expression_tree("!a == b"),
        "\
BinaryExpression: ==
\tUnaryExpression: !
\t\tIdentifier: a
\tIdentifier: b
"
    );

    assert_eq!(
        expression_tree("a : !b"),
        "\
BinaryExpression: :
\tIdentifier: a
\tUnaryExpression: !
\t\tIdentifier: b
"
    );
}

#[test]
fn errors_in_the_order_found() {
    // The lexer sees `@` as lookahead before the parser reports `y`.
    assert_eq!(
        messages("int f() { x = 1; y @ }"),
        [
            "test.spl:1:20: illegal character '@'",
            "test.spl:1:18: expected statement",
            "test.spl:1:20: expected statement, got invalid token",
        ]
    );

    assert_eq!(
        messages("int x = 1; #\nint ;"),
        [
            "test.spl:1:12: illegal character '#'",
            "test.spl:1:12: expected declaration, got invalid token",
            "test.spl:2:5: expected declaration, got semicolon (;)",
        ]
    );
}

#[test]
fn recovery_at_end_of_file_keeps_a_span() {
    let (file, _) = parse_file("test.spl", "int x =");
    match &file.declarations()[0] {
        Declaration::Variable(v) => assert!(
            matches!(v.initializer(), Expression::Bad(s) if s.len() == 1),
            "got {:?}",
            v.initializer()
        ),
        other => panic!("expected a variable, got {:?}", other),
    }

    let (file, _) = parse_file("test.spl", "int f() { if (x)");
    let f = match &file.declarations()[0] {
        Declaration::Function(f) => f,
        other => panic!("expected a function, got {:?}", other),
    };
    match &f.statements()[0] {
        Statement::If(i) => {
            // The body falls back to the closing parenthesis.
            let (_, close) = i.parentheses();
            assert!(matches!(i.body(), Statement::Bad(s) if *s == close));
        }
        other => panic!("expected an if, got {:?}", other),
    }
}

#[test]
fn unterminated_comment_at_end() {
    let (file, errors) = parse_file("test.spl", "int x = 1; /* nope");
    assert_eq!(file.declarations().len(), 1);
    assert_eq!(file.comments().len(), 1);
    assert_eq!(
        errors.first().map(|d| d.to_string()),
        Some("test.spl:1:12: block comment not terminated".to_string())
    );
}

#[test]
fn spans_end_at_last_token() {
    let input = "int x = 1;   \n\n";
    let (file, _) = parse_file("test.spl", input);
    assert_eq!(file.span().end().offset(), Some(10));
}
