//! Module resolution: which imported module does an expression originate
//! from?
//!
//! The answer is the raw module specifier string (`"react"`,
//! `"./components/Button"`); classifying it is the caller's business. Every
//! unresolvable shape is `None`, never an error.

use crate::ast::NodePath;

use super::importer::Importer;
use super::value::resolve_to_value;

/// Member chains deeper than this are treated as unresolvable.
const MAX_MODULE_DEPTH: usize = 32;

/// Resolve an expression to the module specifier it originates from.
pub fn resolve_to_module<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> Option<String> {
    let module = resolve(path, importer, 0);
    if let Some(ref m) = module {
        tracing::trace!(kind = path.kind(), module = m.as_str(), "module resolved");
    }
    module
}

fn resolve<'a>(path: NodePath<'a>, importer: &'a dyn Importer, depth: usize) -> Option<String> {
    if depth > MAX_MODULE_DEPTH {
        return None;
    }
    match path.kind() {
        // Re-export statements carry a source too (`export { x } from 'm'`).
        "import_statement" | "export_statement" => {
            path.get("source")?.string_value().map(str::to_string)
        }
        "call_expression" => {
            let callee = path.get("function")?;
            if callee.kind() != "identifier" || callee.text() != "require" {
                return None;
            }
            path.get("arguments")?
                .named_children()
                .next()
                .and_then(|arg| arg.string_value())
                .map(str::to_string)
        }
        "member_expression" => resolve(path.get("object")?, importer, depth + 1),
        "variable_declarator" => resolve(path.get("value")?, importer, depth + 1),
        "parenthesized_expression" => resolve(path.named_child(0)?, importer, depth + 1),
        "identifier" => {
            let value = resolve_to_value(path, importer)?;
            resolve(value, importer, depth + 1)
        }
        _ => None,
    }
}
