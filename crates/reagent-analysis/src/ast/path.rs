//! `NodePath` — a copyable handle to a node plus the file it lives in.
//!
//! tree-sitter nodes only carry tree positions; resolution needs the source
//! text (for identifier names) and, once an importer is involved, which file
//! a node came from. `NodePath` bundles all three and is the currency every
//! resolver and predicate in this crate trades in. Paths never mutate the
//! tree; two paths are equal iff they designate the same node of the same
//! file.

use tree_sitter::Node;

use crate::parse::ParsedFile;

#[derive(Clone, Copy)]
pub struct NodePath<'a> {
    node: Node<'a>,
    file: &'a ParsedFile,
}

impl<'a> NodePath<'a> {
    pub fn new(file: &'a ParsedFile, node: Node<'a>) -> Self {
        Self { node, file }
    }

    /// Path to the root (`program`) node of a file.
    pub fn root(file: &'a ParsedFile) -> Self {
        Self {
            node: file.tree.root_node(),
            file,
        }
    }

    pub fn node(&self) -> Node<'a> {
        self.node
    }

    pub fn file(&self) -> &'a ParsedFile {
        self.file
    }

    pub fn kind(&self) -> &'static str {
        self.node.kind()
    }

    /// Source text of this node.
    pub fn text(&self) -> &'a str {
        &self.file.source[self.node.byte_range()]
    }

    /// Descend to a child by grammar field name.
    pub fn get(&self, field: &str) -> Option<NodePath<'a>> {
        self.node
            .child_by_field_name(field)
            .map(|node| NodePath { node, file: self.file })
    }

    pub fn named_child(&self, i: usize) -> Option<NodePath<'a>> {
        self.node
            .named_child(i)
            .map(|node| NodePath { node, file: self.file })
    }

    pub fn named_children(self) -> impl Iterator<Item = NodePath<'a>> {
        (0..self.node.named_child_count()).filter_map(move |i| self.named_child(i))
    }

    pub fn parent(&self) -> Option<NodePath<'a>> {
        self.node
            .parent()
            .map(|node| NodePath { node, file: self.file })
    }

    /// For a `string` node, the unquoted literal value.
    pub fn string_value(&self) -> Option<&'a str> {
        if self.kind() != "string" {
            return None;
        }
        match self.named_children().find(|c| c.kind() == "string_fragment") {
            Some(fragment) => Some(fragment.text()),
            // Empty literal has no fragment child.
            None => Some(""),
        }
    }

    /// Statement-to-expression transparency: an `expression_statement`
    /// stands for the expression it wraps.
    pub fn skip_expression_statement(self) -> NodePath<'a> {
        if self.kind() == "expression_statement" {
            if let Some(expr) = self.named_child(0) {
                return expr;
            }
        }
        self
    }
}

impl PartialEq for NodePath<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.node.id() == other.node.id() && std::ptr::eq(self.file, other.file)
    }
}

impl Eq for NodePath<'_> {}

impl std::fmt::Debug for NodePath<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodePath")
            .field("kind", &self.kind())
            .field("file", &self.file.path)
            .field("text", &self.text())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_source;

    fn parse(src: &str) -> ParsedFile {
        parse_source("test.js", src.to_string()).unwrap()
    }

    #[test]
    fn field_descent_reaches_callee_property() {
        let file = parse("React.createElement(Foo);");
        let call = NodePath::root(&file)
            .named_child(0)
            .unwrap()
            .skip_expression_statement();
        assert_eq!(call.kind(), "call_expression");

        let property = call.get("function").unwrap().get("property").unwrap();
        assert_eq!(property.kind(), "property_identifier");
        assert_eq!(property.text(), "createElement");
    }

    #[test]
    fn string_value_strips_quotes() {
        let file = parse("import React from 'react';");
        let source = NodePath::root(&file)
            .named_child(0)
            .unwrap()
            .get("source")
            .unwrap();
        assert_eq!(source.string_value(), Some("react"));
    }

    #[test]
    fn string_value_of_empty_literal() {
        let file = parse("const s = '';");
        let decl = NodePath::root(&file).named_child(0).unwrap();
        let value = decl.named_child(0).unwrap().get("value").unwrap();
        assert_eq!(value.string_value(), Some(""));
    }

    #[test]
    fn identity_distinguishes_nodes() {
        let file = parse("a; a;");
        let root = NodePath::root(&file);
        let first = root.named_child(0).unwrap();
        let second = root.named_child(1).unwrap();
        assert_eq!(first, first);
        assert_ne!(first, second);
    }

    #[test]
    fn skip_expression_statement_is_identity_elsewhere() {
        let file = parse("function f() {}");
        let decl = NodePath::root(&file).named_child(0).unwrap();
        assert_eq!(decl.skip_expression_statement(), decl);
    }
}
