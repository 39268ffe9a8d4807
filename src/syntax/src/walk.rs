//! Walking syntax trees.
//!
//! A [`Node`] is a borrowed view of any one piece of syntax, so that code
//! which wants to look at every node in a tree doesn't need to match on each
//! kind of node itself. Use [`walk`] with a [`Visitor`] to see every node in
//! depth-first order.

use diagnostic::Span;

use crate::*;

/// Any single syntax node.
#[derive(Debug, Clone, Copy)]
pub enum Node<'n, 'a> {
    File(&'n File<'a>),
    Comment(&'n Comment<'a>),

    BadDeclaration(Span),
    VariableDeclaration(&'n VariableDeclaration<'a>),
    FunctionDeclaration(&'n FunctionDeclaration<'a>),
    FunctionParameters(&'n FunctionParameters<'a>),
    FunctionParameter(&'n FunctionParameter<'a>),

    BadType(Span),
    NamedType(&'n Identifier<'a>),
    TupleType(&'n TupleType<'a>),
    ListType(&'n ListType<'a>),

    BadStatement(Span),
    Assignment(&'n Assignment<'a>),
    Block(&'n Block<'a>),
    CallStatement(&'n CallStatement<'a>),
    If(&'n If<'a>),
    Return(&'n Return<'a>),
    While(&'n While<'a>),

    BadExpression(Span),
    Binary(&'n Binary<'a>),
    Call(&'n Call<'a>),
    Identifier(&'n Identifier<'a>),
    Literal(&'n Literal<'a>),
    Parenthesized(&'n Parenthesized<'a>),
    Tuple(&'n Tuple<'a>),
    Unary(&'n Unary<'a>),
}

impl<'n, 'a> Node<'n, 'a> {
    /// The name of the kind of node.
    pub fn name(&self) -> &'static str {
        match self {
            Node::File(_) => File::NAME,
            Node::Comment(_) => Comment::NAME,
            Node::BadDeclaration(_) => "BadDeclaration",
            Node::VariableDeclaration(_) => VariableDeclaration::NAME,
            Node::FunctionDeclaration(_) => FunctionDeclaration::NAME,
            Node::FunctionParameters(_) => FunctionParameters::NAME,
            Node::FunctionParameter(_) => FunctionParameter::NAME,
            Node::BadType(_) => "BadType",
            Node::NamedType(_) => "NamedType",
            Node::TupleType(_) => TupleType::NAME,
            Node::ListType(_) => ListType::NAME,
            Node::BadStatement(_) => "BadStatement",
            Node::Assignment(_) => Assignment::NAME,
            Node::Block(_) => Block::NAME,
            Node::CallStatement(_) => CallStatement::NAME,
            Node::If(_) => If::NAME,
            Node::Return(_) => Return::NAME,
            Node::While(_) => While::NAME,
            Node::BadExpression(_) => "BadExpression",
            Node::Binary(_) => Binary::NAME,
            Node::Call(_) => Call::NAME,
            Node::Identifier(_) => Identifier::NAME,
            Node::Literal(_) => Literal::NAME,
            Node::Parenthesized(_) => Parenthesized::NAME,
            Node::Tuple(_) => Tuple::NAME,
            Node::Unary(_) => Unary::NAME,
        }
    }

    /// Some nodes have a little extra to say about themselves, like which
    /// operator they are or which name.
    pub fn detail(&self) -> Option<&'a str> {
        match self {
            Node::Identifier(id) | Node::NamedType(id) => Some(id.as_str()),
            Node::Literal(l) => Some(l.body()),
            Node::Unary(u) => Some(u.operator().as_str()),
            Node::Binary(b) => Some(b.operator().as_str()),
            _ => None,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Node::File(n) => n.span(),
            Node::Comment(n) => n.span(),
            Node::VariableDeclaration(n) => n.span(),
            Node::FunctionDeclaration(n) => n.span(),
            Node::FunctionParameters(n) => n.span(),
            Node::FunctionParameter(n) => n.span(),
            Node::NamedType(n) => n.span(),
            Node::TupleType(n) => n.span(),
            Node::ListType(n) => n.span(),
            Node::Assignment(n) => n.span(),
            Node::Block(n) => n.span(),
            Node::CallStatement(n) => n.span(),
            Node::If(n) => n.span(),
            Node::Return(n) => n.span(),
            Node::While(n) => n.span(),
            Node::Binary(n) => n.span(),
            Node::Call(n) => n.span(),
            Node::Identifier(n) => n.span(),
            Node::Literal(n) => n.span(),
            Node::Parenthesized(n) => n.span(),
            Node::Tuple(n) => n.span(),
            Node::Unary(n) => n.span(),
            Node::BadDeclaration(span)
            | Node::BadType(span)
            | Node::BadStatement(span)
            | Node::BadExpression(span) => *span,
        }
    }

    /// The direct children of this node, in source order.
    ///
    /// The comments of a [`File`] come after all its declarations.
    pub fn children(&self) -> Vec<Node<'n, 'a>> {
        let mut children = Vec::new();

        match *self {
            Node::File(f) => {
                children.extend(f.declarations().iter().map(Node::from));
                children.extend(f.comments().iter().map(Node::Comment));
            }
            Node::VariableDeclaration(v) => {
                children.push(v.ty().into());
                children.push(Node::Identifier(v.name()));
                children.push(v.initializer().into());
            }
            Node::FunctionDeclaration(f) => {
                children.push(f.return_type().into());
                children.push(Node::Identifier(f.name()));
                children.push(Node::FunctionParameters(f.parameters()));
                children.extend(
                    f.variables().iter().map(Node::VariableDeclaration),
                );
                children.extend(f.statements().iter().map(Node::from));
            }
            Node::FunctionParameters(p) => {
                children.extend(
                    p.as_slice().iter().map(Node::FunctionParameter),
                );
            }
            Node::FunctionParameter(p) => {
                children.push(p.ty().into());
                children.push(Node::Identifier(p.name()));
            }
            Node::TupleType(t) => {
                children.push(t.left().into());
                children.push(t.right().into());
            }
            Node::ListType(l) => children.push(l.element().into()),
            Node::Assignment(a) => {
                children.push(Node::Identifier(a.target()));
                children.push(a.value().into());
            }
            Node::Block(b) => {
                children.extend(b.statements().iter().map(Node::from));
            }
            Node::CallStatement(c) => children.push(Node::Call(c.call())),
            Node::If(i) => {
                children.push(i.condition().into());
                children.push(i.body().into());
                if let Some(e) = i.else_clause() {
                    children.push(e.body().into());
                }
            }
            Node::Return(r) => children.extend(r.value().map(Node::from)),
            Node::While(w) => {
                children.push(w.condition().into());
                children.push(w.body().into());
            }
            Node::Binary(b) => {
                children.push(b.left().into());
                children.push(b.right().into());
            }
            Node::Call(c) => {
                children.push(Node::Identifier(c.name()));
                children.extend(c.arguments().iter().map(Node::from));
            }
            Node::Parenthesized(p) => children.push(p.inner().into()),
            Node::Tuple(t) => {
                children.push(t.left().into());
                children.push(t.right().into());
            }
            Node::Unary(u) => children.push(u.operand().into()),

            Node::Comment(_)
            | Node::NamedType(_)
            | Node::Identifier(_)
            | Node::Literal(_)
            | Node::BadDeclaration(_)
            | Node::BadType(_)
            | Node::BadStatement(_)
            | Node::BadExpression(_) => {}
        }

        children
    }
}

impl<'n, 'a> From<&'n File<'a>> for Node<'n, 'a> {
    fn from(f: &'n File<'a>) -> Self {
        Node::File(f)
    }
}

impl<'n, 'a> From<&'n Declaration<'a>> for Node<'n, 'a> {
    fn from(d: &'n Declaration<'a>) -> Self {
        match d {
            Declaration::Bad(span) => Node::BadDeclaration(*span),
            Declaration::Variable(v) => Node::VariableDeclaration(v),
            Declaration::Function(f) => Node::FunctionDeclaration(f),
        }
    }
}

impl<'n, 'a> From<&'n Type<'a>> for Node<'n, 'a> {
    fn from(t: &'n Type<'a>) -> Self {
        match t {
            Type::Bad(span) => Node::BadType(*span),
            Type::Named(id) => Node::NamedType(id),
            Type::Tuple(t) => Node::TupleType(t),
            Type::List(l) => Node::ListType(l),
        }
    }
}

impl<'n, 'a> From<&'n Statement<'a>> for Node<'n, 'a> {
    fn from(s: &'n Statement<'a>) -> Self {
        match s {
            Statement::Bad(span) => Node::BadStatement(*span),
            Statement::Assignment(a) => Node::Assignment(a),
            Statement::Block(b) => Node::Block(b),
            Statement::Call(c) => Node::CallStatement(c),
            Statement::If(i) => Node::If(i),
            Statement::Return(r) => Node::Return(r),
            Statement::While(w) => Node::While(w),
        }
    }
}

impl<'n, 'a> From<&'n Expression<'a>> for Node<'n, 'a> {
    fn from(e: &'n Expression<'a>) -> Self {
        match e {
            Expression::Bad(span) => Node::BadExpression(*span),
            Expression::Binary(b) => Node::Binary(b),
            Expression::Call(c) => Node::Call(c),
            Expression::Identifier(id) => Node::Identifier(id),
            Expression::Literal(l) => Node::Literal(l),
            Expression::Parenthesized(p) => Node::Parenthesized(p),
            Expression::Tuple(t) => Node::Tuple(t),
            Expression::Unary(u) => Node::Unary(u),
        }
    }
}

/// Something that looks at nodes as they're walked.
pub trait Visitor<'n, 'a> {
    /// Called on each node before its children. If this returns `false` the
    /// children are skipped and [`Visitor::end`] isn't called for the node.
    fn visit(&mut self, node: Node<'n, 'a>) -> bool;

    /// Called on each node after all its children have been walked.
    fn end(&mut self, _node: Node<'n, 'a>) {}
}

/// Walk a tree depth-first, starting at `node`.
pub fn walk<'n, 'a, V>(node: Node<'n, 'a>, visitor: &mut V)
where
    V: Visitor<'n, 'a> + ?Sized,
{
    if !visitor.visit(node) {
        return;
    }

    for child in node.children() {
        walk(child, visitor);
    }

    visitor.end(node);
}
