//! The builtin-call predicate: is this expression a call to a named React
//! builtin, however the module or the function was imported or aliased?
//!
//! Two independent detection branches, tried in order; either can succeed:
//!
//! 1. member-call syntax — `<object>.<name>(...)` where the object resolves
//!    to the react module (`React.createElement(...)`, however `React` was
//!    bound);
//! 2. direct-call syntax — `<callee>(...)` where the callee's value resolves
//!    to a `<module>.<name>` member reference or to an import of `<name>`
//!    from the react module (`createElement(...)` after
//!    `import { createElement } from 'react'`).
//!
//! Matching for imports is against the original exported name, so
//! `import { createElement as ce }` still counts for "createElement". Every
//! resolution failure degrades to `false`; the predicate is total and never
//! panics on a syntactically valid tree.

use crate::ast::{NodePath, Shape};
use crate::resolution::{resolve_to_module, resolve_to_value, Importer};

use super::module_name::is_react_module_name;

/// Returns true if the expression is a call of the React builtin `name`.
pub fn is_react_builtin_call<'a>(
    path: NodePath<'a>,
    name: &str,
    importer: &'a dyn Importer,
) -> bool {
    let path = path.skip_expression_statement();

    // `<anything>.name(...)` — purely structural; the receiver is resolved
    // to a module afterwards.
    let member_call = Shape::any().field(
        "function",
        Shape::any().field("property", Shape::text(name)),
    );
    if member_call.matches(path) {
        let object = path.get("function").and_then(|callee| callee.get("object"));
        if let Some(object) = object {
            if let Some(module) = resolve_to_module(object, importer) {
                if is_react_module_name(&module) {
                    return true;
                }
            }
        }
        // No early false: the direct-call branch gets its own chance.
    }

    if path.kind() == "call_expression" {
        let Some(callee) = path.get("function") else {
            return false;
        };
        let Some(value) = resolve_to_value(callee, importer) else {
            // No resolution progress — an undeclared identifier, a literal
            // callee, or similar. Never a match.
            return false;
        };

        // `require('react').createElement`
        let member_ref = value.kind() == "member_expression"
            && value
                .get("property")
                .is_some_and(|p| p.kind() == "property_identifier" && p.text() == name);

        // `import { createElement } from 'react'` (or a re-export of it)
        let import_ref = is_import_like(value)
            && imported_names(value).iter().any(|n| *n == name);

        if member_ref || import_ref {
            if let Some(module) = resolve_to_module(value, importer) {
                return is_react_module_name(&module);
            }
        }
        return false;
    }

    false
}

/// `React.createElement(...)` in any spelling.
pub fn is_react_create_element_call<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    is_react_builtin_call(path, "createElement", importer)
}

/// `React.cloneElement(...)` in any spelling.
pub fn is_react_clone_element_call<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    is_react_builtin_call(path, "cloneElement", importer)
}

/// `React.forwardRef(...)` in any spelling.
pub fn is_react_forward_ref_call<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    is_react_builtin_call(path, "forwardRef", importer)
}

/// `React.Children.<name>(...)` — a builtin call whose receiver is the
/// `Children` member.
pub fn is_react_children_element_call<'a>(
    path: NodePath<'a>,
    name: &str,
    importer: &'a dyn Importer,
) -> bool {
    if !is_react_builtin_call(path, name, importer) {
        return false;
    }
    let children_receiver = Shape::any().field(
        "function",
        Shape::any().field(
            "object",
            Shape::any().field("property", Shape::text("Children")),
        ),
    );
    children_receiver.matches(path.skip_expression_statement())
}

/// `React.createClass(...)` or a call into the standalone
/// `create-react-class` package.
pub fn is_react_create_class_call<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> bool {
    if is_react_builtin_call(path, "createClass", importer) {
        return true;
    }
    let path = path.skip_expression_statement();
    if path.kind() != "call_expression" {
        return false;
    }
    let Some(callee) = path.get("function") else {
        return false;
    };
    match resolve_to_module(callee, importer) {
        Some(module) => module.to_lowercase() == "create-react-class",
        None => false,
    }
}

fn is_import_like(path: NodePath<'_>) -> bool {
    match path.kind() {
        "import_statement" => true,
        // `export { x } from 'm'` binds like an import.
        "export_statement" => path.get("source").is_some(),
        _ => false,
    }
}

/// The original (pre-alias) names an import-like statement brings in.
fn imported_names(path: NodePath<'_>) -> Vec<&str> {
    let mut names = Vec::new();
    match path.kind() {
        "import_statement" => {
            let specifiers = path
                .named_children()
                .find(|c| c.kind() == "import_clause")
                .into_iter()
                .flat_map(|clause| clause.named_children())
                .filter(|c| c.kind() == "named_imports")
                .flat_map(|named| named.named_children())
                .filter(|c| c.kind() == "import_specifier");
            for spec in specifiers {
                if let Some(original) = spec.get("name") {
                    names.push(original.text());
                }
            }
        }
        "export_statement" => {
            let specifiers = path
                .named_children()
                .filter(|c| c.kind() == "export_clause")
                .flat_map(|clause| clause.named_children())
                .filter(|c| c.kind() == "export_specifier");
            for spec in specifiers {
                if let Some(original) = spec.get("name") {
                    names.push(original.text());
                }
            }
        }
        _ => {}
    }
    names
}
