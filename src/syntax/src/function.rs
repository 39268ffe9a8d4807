//! Function declarations
//!
//! The body of a function is special. It starts with any number of variable
//! declarations, and then has statements. Once a statement is seen, no more
//! variables can be declared.

use diagnostic::Span;

use parser::{
    lexer::{Delimiter, TokenKind as Kind},
    Parse, Parser,
};

use crate::{Identifier, Statement, Syntax, Type, VariableDeclaration};

/// Function declarations.
///
/// # Grammar
///
/// FunctionDeclaration := Type Identifier FunctionParameters
///                        '{' VariableDeclaration* Statement* '}'
#[derive(Debug)]
pub struct FunctionDeclaration<'a> {
    return_type: Type<'a>,
    name: Identifier<'a>,
    parameters: FunctionParameters<'a>,
    variables: Vec<VariableDeclaration<'a>>,
    statements: Vec<Statement<'a>>,
    close: Span,
}

impl<'a> FunctionDeclaration<'a> {
    pub fn return_type(&self) -> &Type<'a> {
        &self.return_type
    }

    pub fn name(&self) -> &Identifier<'a> {
        &self.name
    }

    pub fn parameters(&self) -> &FunctionParameters<'a> {
        &self.parameters
    }

    /// The variables declared at the top of the body.
    pub fn variables(&self) -> &[VariableDeclaration<'a>] {
        &self.variables
    }

    /// The statements in the body, after the variables.
    pub fn statements(&self) -> &[Statement<'a>] {
        &self.statements
    }

    /// Parse the rest of a function once the return type and name are known.
    pub(crate) fn parse_from(
        return_type: Type<'a>,
        name: Identifier<'a>,
        parser: &mut Parser<'a>,
    ) -> Self {
        let parameters = parser.parse();
        parser.expect(Kind::Open(Delimiter::Brace));

        let mut variables = Vec::new();
        let mut statements = Vec::new();
        let mut allow_variables = true;

        while !matches!(
            parser.peek(),
            Kind::Close(Delimiter::Brace) | Kind::Eof
        ) {
            match parser.peek() {
                Kind::Open(Delimiter::Parenthesis | Delimiter::Bracket)
                    if allow_variables =>
                {
                    variables.push(parser.parse());
                }

                // Both `int x = 0;` and `x = 0;` start with an identifier.
                Kind::Identifier => {
                    let first = parser.parse::<Identifier>();

                    match parser.peek() {
                        Kind::Equals | Kind::Open(Delimiter::Parenthesis) => {
                            allow_variables = false;
                            statements.push(Statement::after_identifier(
                                first, parser,
                            ));
                        }
                        _ if allow_variables => {
                            let ty = Type::Named(first);
                            let name = parser.parse();
                            variables.push(VariableDeclaration::parse_from(
                                ty, name, parser,
                            ));
                        }
                        _ => statements.push(Statement::after_identifier(
                            first, parser,
                        )),
                    }
                }

                _ => {
                    allow_variables = false;
                    statements.push(parser.parse());
                }
            }
        }

        let close = parser.expect(Kind::Close(Delimiter::Brace)).span();

        FunctionDeclaration {
            return_type,
            name,
            parameters,
            variables,
            statements,
            close,
        }
    }
}

impl Syntax for FunctionDeclaration<'_> {
    const NAME: &'static str = "FunctionDeclaration";

    fn span(&self) -> Span {
        self.return_type.span() + self.close
    }
}

impl<'a> Parse<'a> for FunctionDeclaration<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Self {
        let return_type = parser.parse();
        let name = parser.parse();
        FunctionDeclaration::parse_from(return_type, name, parser)
    }
}

/// The parameter list of a function, like `(int x, [int] xs)`.
///
/// # Grammar
///
/// FunctionParameters := '(' sep_by(FunctionParameter, ',') ')'
#[derive(Debug)]
pub struct FunctionParameters<'a> {
    open: Span,
    parameters: Vec<FunctionParameter<'a>>,
    commas: Vec<Span>,
    close: Span,
}

impl<'a> FunctionParameters<'a> {
    pub fn as_slice(&self) -> &[FunctionParameter<'a>] {
        &self.parameters
    }

    /// The spans of the commas between parameters, in order.
    pub fn commas(&self) -> &[Span] {
        &self.commas
    }
}

impl Syntax for FunctionParameters<'_> {
    const NAME: &'static str = "FunctionParameters";

    fn span(&self) -> Span {
        self.open + self.close
    }
}

impl<'a> Parse<'a> for FunctionParameters<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Self {
        let close_kind = Kind::Close(Delimiter::Parenthesis);

        let open = parser.expect(Kind::Open(Delimiter::Parenthesis)).span();
        let (parameters, commas) = parser.sep_by(Kind::Comma, close_kind);
        let close = parser.expect(close_kind).span();

        FunctionParameters {
            open,
            parameters,
            commas,
            close,
        }
    }
}

/// # Grammar
///
/// FunctionParameter := Type Identifier
#[derive(Debug)]
pub struct FunctionParameter<'a> {
    ty: Type<'a>,
    name: Identifier<'a>,
}

impl<'a> FunctionParameter<'a> {
    pub fn ty(&self) -> &Type<'a> {
        &self.ty
    }

    pub fn name(&self) -> &Identifier<'a> {
        &self.name
    }
}

impl Syntax for FunctionParameter<'_> {
    const NAME: &'static str = "FunctionParameter";

    fn span(&self) -> Span {
        self.ty.span() + self.name.span()
    }
}

impl<'a> Parse<'a> for FunctionParameter<'a> {
    fn parse_with(parser: &mut Parser<'a>) -> Self {
        FunctionParameter {
            ty: parser.parse(),
            name: parser.parse(),
        }
    }
}
