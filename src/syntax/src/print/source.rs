//! Writing syntax back out as source code.

use crate::*;

/// Write a file back out as SPL source.
///
/// Declarations are separated by a blank line, and nesting is indented with
/// tabs. Parsing the output again gives the same tree, as long as the
/// original had no errors.
pub fn source(file: &File) -> String {
    let mut printer = SourcePrinter::default();

    for (i, declaration) in file.declarations().iter().enumerate() {
        if i > 0 {
            printer.buf.push('\n');
        }
        printer.declaration(declaration);
    }

    printer.buf
}

#[derive(Default)]
struct SourcePrinter {
    buf: String,
}

impl SourcePrinter {
    fn indent(&mut self, level: usize) {
        for _ in 0..level {
            self.buf.push('\t');
        }
    }

    fn declaration(&mut self, declaration: &Declaration) {
        match declaration {
            Declaration::Bad(_) => self.buf.push_str("[bad declaration]"),
            Declaration::Variable(v) => self.variable(v),
            Declaration::Function(f) => self.function(f),
        }
        self.buf.push('\n');
    }

    fn variable(&mut self, v: &VariableDeclaration) {
        self.ty(v.ty());
        self.buf.push(' ');
        self.buf.push_str(v.name().as_str());
        self.buf.push_str(" = ");
        self.expression(v.initializer());
        self.buf.push(';');
    }

    fn function(&mut self, f: &FunctionDeclaration) {
        self.ty(f.return_type());
        self.buf.push(' ');
        self.buf.push_str(f.name().as_str());
        self.buf.push('(');
        for (i, parameter) in f.parameters().as_slice().iter().enumerate() {
            if i > 0 {
                self.buf.push_str(", ");
            }
            self.ty(parameter.ty());
            self.buf.push(' ');
            self.buf.push_str(parameter.name().as_str());
        }
        self.buf.push_str(") {\n");

        for v in f.variables() {
            self.indent(1);
            self.variable(v);
            self.buf.push('\n');
        }

        for s in f.statements() {
            self.statement(s, 1);
        }

        self.buf.push('}');
    }

    fn ty(&mut self, ty: &Type) {
        match ty {
            Type::Bad(_) => self.buf.push_str("[bad type]"),
            Type::Named(name) => self.buf.push_str(name.as_str()),
            Type::Tuple(t) => {
                self.buf.push('(');
                self.ty(t.left());
                self.buf.push_str(", ");
                self.ty(t.right());
                self.buf.push(')');
            }
            Type::List(l) => {
                self.buf.push('[');
                self.ty(l.element());
                self.buf.push(']');
            }
        }
    }

    /// A statement on its own line at `level`.
    fn statement(&mut self, statement: &Statement, level: usize) {
        self.indent(level);
        self.statement_inline(statement, level);
        self.buf.push('\n');
    }

    /// A statement starting wherever the output currently is, without the
    /// newline at the end. Anything inside it is indented relative to
    /// `level`.
    fn statement_inline(&mut self, statement: &Statement, level: usize) {
        match statement {
            Statement::Bad(_) => self.buf.push_str("[bad statement]"),
            Statement::Assignment(a) => {
                self.buf.push_str(a.target().as_str());
                self.buf.push_str(" = ");
                self.expression(a.value());
                self.buf.push(';');
            }
            Statement::Block(b) => self.block(b, level),
            Statement::Call(c) => {
                self.call(c.call());
                self.buf.push(';');
            }
            Statement::If(i) => self.if_statement(i, level),
            Statement::Return(r) => {
                self.buf.push_str("return");
                if let Some(value) = r.value() {
                    self.buf.push(' ');
                    self.expression(value);
                }
                self.buf.push(';');
            }
            Statement::While(w) => {
                self.buf.push_str("while (");
                self.expression(w.condition());
                self.buf.push(')');
                self.body(w.body(), level);
            }
        }
    }

    fn if_statement(&mut self, i: &If, level: usize) {
        self.buf.push_str("if (");
        self.expression(i.condition());
        self.buf.push(')');
        self.body(i.body(), level);

        if let Some(else_clause) = i.else_clause() {
            if let Statement::Block(_) = i.body() {
                self.buf.push(' ');
            } else {
                self.buf.push('\n');
                self.indent(level);
            }
            self.buf.push_str("else");

            match else_clause.body() {
                Statement::If(chained) => {
                    self.buf.push(' ');
                    self.if_statement(chained, level);
                }
                other => self.body(other, level),
            }
        }
    }

    /// The body of an `if`, `else` or `while`. Blocks stay on the same line,
    /// anything else goes on the next line one level deeper.
    fn body(&mut self, body: &Statement, level: usize) {
        if let Statement::Block(b) = body {
            self.buf.push(' ');
            self.block(b, level);
        } else {
            self.buf.push('\n');
            self.indent(level + 1);
            self.statement_inline(body, level + 1);
        }
    }

    fn block(&mut self, block: &Block, level: usize) {
        self.buf.push_str("{\n");
        for s in block.statements() {
            self.statement(s, level + 1);
        }
        self.indent(level);
        self.buf.push('}');
    }

    fn call(&mut self, call: &Call) {
        self.buf.push_str(call.name().as_str());
        self.buf.push('(');
        for (i, argument) in call.arguments().iter().enumerate() {
            if i > 0 {
                self.buf.push_str(", ");
            }
            self.expression(argument);
        }
        self.buf.push(')');
    }

    fn expression(&mut self, expression: &Expression) {
        match expression {
            Expression::Bad(_) => self.buf.push_str("[bad expression]"),
            Expression::Identifier(id) => self.buf.push_str(id.as_str()),
            Expression::Literal(l) => self.buf.push_str(l.body()),
            Expression::Unary(u) => {
                self.buf.push_str(u.operator().as_str());
                self.expression(u.operand());
            }
            Expression::Binary(b) => {
                self.expression(b.left());
                self.buf.push(' ');
                self.buf.push_str(b.operator().as_str());
                self.buf.push(' ');
                self.expression(b.right());
            }
            Expression::Call(c) => self.call(c),
            Expression::Parenthesized(p) => {
                self.buf.push('(');
                self.expression(p.inner());
                self.buf.push(')');
            }
            Expression::Tuple(t) => {
                self.buf.push('(');
                self.expression(t.left());
                self.buf.push_str(", ");
                self.expression(t.right());
                self.buf.push(')');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(input: &str) -> String {
        let (file, errors) = File::parse(input);
        assert!(errors.is_empty(), "{:?} failed with {}", input, errors);
        source(&file)
    }

    #[test]
    fn empty() {
        assert_eq!(format(""), "");
    }

    #[test]
    fn declarations() {
        assert_eq!(
            format("int x=1;[int]xs=[];"),
            "int x = 1;\n\n[int] xs = [];\n"
        );
    }

    #[test]
    fn function() {
        let input = "int f ( int a,(int,int) p ) { int x = a ; \
                     if(x<1) return -x; else {x=x-1;} g(x,p); return; }";
        let expected = "\
int f(int a, (int, int) p) {
\tint x = a;
\tif (x < 1)
\t\treturn -x;
\telse {
\t\tx = x - 1;
\t}
\tg(x, p);
\treturn;
}
";
        assert_eq!(format(input), expected);
    }

    #[test]
    fn else_if_chain() {
        let input = "int f() { if (a) { } else if (b) c = 1; else { } }";
        let expected = "\
int f() {
\tif (a) {
\t} else if (b)
\t\tc = 1;
\telse {
\t}
}
";
        assert_eq!(format(input), expected);
    }

    #[test]
    fn nested_while() {
        let input = "int f() { while (a) while (b) { c(); } }";
        let expected = "\
int f() {
\twhile (a)
\t\twhile (b) {
\t\t\tc();
\t\t}
}
";
        assert_eq!(format(input), expected);
    }

    #[test]
    fn expressions_verbatim() {
        assert_eq!(
            format("bool b = !(007:[]== x)&&f((1,2),True);"),
            "bool b = !(007 : [] == x) && f((1, 2), True);\n"
        );
    }

    #[test]
    fn bad_nodes() {
        let (file, _) = File::parse("int ; int y = ); (int, ;) z = 1;");
        assert_eq!(
            source(&file),
            "[bad declaration]\n\n\
             int y = [bad expression];\n\n\
             (int, [bad type]) z = 1;\n"
        );
    }
}
