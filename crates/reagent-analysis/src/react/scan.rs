//! File-level scanner: classify every call expression in a parsed file.

use serde::{Deserialize, Serialize};

use crate::ast::NodePath;
use crate::parse::{ParsedFile, Range};
use crate::resolution::Importer;

use super::builtin_call::{
    is_react_children_element_call, is_react_clone_element_call, is_react_create_class_call,
    is_react_create_element_call, is_react_forward_ref_call,
};

/// `React.Children` helpers the scanner recognizes.
const CHILDREN_HELPERS: &[&str] = &["map", "forEach", "count", "only", "toArray"];

/// What kind of React builtin a call site is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReactCallKind {
    CreateElement,
    CloneElement,
    ForwardRef,
    CreateClass,
    Children,
}

/// One classified React call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactCallMatch {
    pub file: String,
    pub kind: ReactCallKind,
    /// Source text of the callee expression.
    pub callee: String,
    pub range: Range,
}

/// Walks a parsed file and reports every call expression that the builtin
/// predicates classify as a React call.
pub struct ReactCallScanner<'a> {
    importer: &'a dyn Importer,
}

impl<'a> ReactCallScanner<'a> {
    pub fn new(importer: &'a dyn Importer) -> Self {
        Self { importer }
    }

    pub fn scan(&self, file: &'a ParsedFile) -> Vec<ReactCallMatch> {
        let mut matches = Vec::new();
        self.visit(NodePath::root(file), &mut matches);
        tracing::debug!(file = file.path.as_str(), count = matches.len(), "react scan done");
        matches
    }

    fn visit(&self, path: NodePath<'a>, matches: &mut Vec<ReactCallMatch>) {
        if path.kind() == "call_expression" {
            if let Some(kind) = self.classify(path) {
                let callee = path
                    .get("function")
                    .map(|c| c.text().to_string())
                    .unwrap_or_default();
                matches.push(ReactCallMatch {
                    file: path.file().path.clone(),
                    kind,
                    callee,
                    range: Range::from_ts_node(&path.node()),
                });
            }
        }
        for child in path.named_children() {
            self.visit(child, matches);
        }
    }

    fn classify(&self, call: NodePath<'a>) -> Option<ReactCallKind> {
        // Children helpers first: `React.Children.map` would otherwise never
        // be reached (it is not a createElement-family builtin).
        if CHILDREN_HELPERS
            .iter()
            .any(|helper| is_react_children_element_call(call, helper, self.importer))
        {
            return Some(ReactCallKind::Children);
        }
        if is_react_create_element_call(call, self.importer) {
            return Some(ReactCallKind::CreateElement);
        }
        if is_react_clone_element_call(call, self.importer) {
            return Some(ReactCallKind::CloneElement);
        }
        if is_react_forward_ref_call(call, self.importer) {
            return Some(ReactCallKind::ForwardRef);
        }
        if is_react_create_class_call(call, self.importer) {
            return Some(ReactCallKind::CreateClass);
        }
        None
    }
}
