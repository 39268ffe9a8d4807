//! The tree dump, one node per line indented by depth.

use crate::walk::{walk, Node, Visitor};

/// Show the structure of a tree.
///
/// Each node gets a line with its name, and for some nodes a detail like the
/// operator or the identifier, like `BinaryExpression: +`. Children are
/// indented one tab more than their parent. Comments aren't shown.
pub fn debug_tree<'n, 'a: 'n>(
    node: impl Into<Node<'n, 'a>>,
) -> String {
    let mut printer = DebugPrinter::default();
    walk(node.into(), &mut printer);
    printer.buf
}

#[derive(Default)]
struct DebugPrinter {
    buf: String,
    depth: usize,
}

impl<'n, 'a> Visitor<'n, 'a> for DebugPrinter {
    fn visit(&mut self, node: Node<'n, 'a>) -> bool {
        if let Node::Comment(_) = node {
            return false;
        }

        for _ in 0..self.depth {
            self.buf.push('\t');
        }

        self.buf.push_str(node.name());
        if let Some(detail) = node.detail() {
            self.buf.push_str(": ");
            self.buf.push_str(detail);
        }
        self.buf.push('\n');

        self.depth += 1;
        true
    }

    fn end(&mut self, _node: Node<'n, 'a>) {
        self.depth -= 1;
    }
}
