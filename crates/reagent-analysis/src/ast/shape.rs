//! Deep-partial structural matching against AST nodes.
//!
//! A `Shape` describes the fields a node must have; anything the shape does
//! not mention is ignored. `Shape::any().field("function", Shape::any()
//! .field("property", Shape::text("createElement")))` matches every call of
//! the form `<anything>.createElement(...)` without constraining what the
//! receiver looks like. Duck typing on purpose: a node that happens to carry
//! the right fields matches, whatever its kind, unless the shape pins the
//! kind down explicitly.

use super::NodePath;

/// A structural pattern: optional kind, optional exact text, named-field
/// sub-patterns.
#[derive(Debug, Clone, Default)]
pub struct Shape<'p> {
    kind: Option<&'p str>,
    text: Option<&'p str>,
    fields: Vec<(&'p str, Shape<'p>)>,
}

impl<'p> Shape<'p> {
    /// Matches every node.
    pub fn any() -> Self {
        Shape::default()
    }

    /// Matches nodes of the given grammar kind.
    pub fn kind(kind: &'p str) -> Self {
        Shape {
            kind: Some(kind),
            ..Shape::default()
        }
    }

    /// Matches nodes whose source text is exactly `text`.
    pub fn text(text: &'p str) -> Self {
        Shape {
            text: Some(text),
            ..Shape::default()
        }
    }

    /// Require a grammar field to exist and match `sub`.
    pub fn field(mut self, name: &'p str, sub: Shape<'p>) -> Self {
        self.fields.push((name, sub));
        self
    }

    /// Deep partial match: every constraint of the shape must hold; extra
    /// node fields are tolerated.
    pub fn matches(&self, path: NodePath<'_>) -> bool {
        if let Some(kind) = self.kind {
            if path.kind() != kind {
                return false;
            }
        }
        if let Some(text) = self.text {
            if path.text() != text {
                return false;
            }
        }
        self.fields
            .iter()
            .all(|(field, sub)| path.get(field).is_some_and(|child| sub.matches(child)))
    }
}
