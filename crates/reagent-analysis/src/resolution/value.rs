//! Value resolution: trace an expression back to the value it statically
//! originates from.
//!
//! `resolve_to_value` follows identifier bindings (declarators, imports,
//! function/class declarations, assignments) and transparent wrappers
//! (parens, sequences) until no further step is possible. It returns
//! `Some(path)` only when at least one step of progress was made; `None`
//! means the expression already is its own best answer. Callers must treat
//! `None` as a resolution failure, never as a match.

use crate::ast::NodePath;

use super::importer::Importer;

/// Binding chains longer than this are abandoned (guards against cyclic
/// `let a = b; let b = a;` declarations).
const MAX_RESOLVE_DEPTH: usize = 32;

/// Resolve `path` to its statically determinable originating value.
pub fn resolve_to_value<'a>(
    path: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Option<NodePath<'a>> {
    let mut current = resolve_step(path, importer)?;
    for _ in 0..MAX_RESOLVE_DEPTH {
        match resolve_step(current, importer) {
            Some(next) if next != current => current = next,
            _ => break,
        }
    }
    tracing::trace!(from = path.kind(), to = current.kind(), "value resolved");
    Some(current)
}

/// One resolution step; `None` when `path` resolves no further.
fn resolve_step<'a>(path: NodePath<'a>, importer: &'a dyn Importer) -> Option<NodePath<'a>> {
    match path.kind() {
        "parenthesized_expression" => path.named_child(0),
        "assignment_expression" => path.get("right"),
        "sequence_expression" => {
            let count = path.node().named_child_count();
            path.named_child(count.checked_sub(1)?)
        }
        "variable_declarator" => path.get("value"),
        "identifier" => resolve_identifier(path, importer),
        _ => None,
    }
}

/// Look up the binding of an identifier by walking the enclosing scopes
/// outward. Scans every statement of each scope, which matches hoisting for
/// functions and imports and is a deliberate approximation for `let`/`const`.
fn resolve_identifier<'a>(
    path: NodePath<'a>,
    importer: &'a dyn Importer,
) -> Option<NodePath<'a>> {
    let name = path.text();
    let mut scope = path.parent();
    while let Some(node) = scope {
        if matches!(node.kind(), "program" | "statement_block") {
            // A valueless declarator (`let f;`) only binds if nothing better
            // turns up in the same scope, e.g. a later `f = ...` assignment.
            let mut valueless = None;
            for stmt in node.named_children() {
                match binding_in_statement(stmt, name, importer) {
                    Some(bound)
                        if bound.kind() == "variable_declarator"
                            && bound.get("value").is_none() =>
                    {
                        valueless.get_or_insert(bound);
                    }
                    Some(bound) => return Some(bound),
                    None => {}
                }
            }
            // The scope declared the name, so it shadows outer scopes.
            if valueless.is_some() {
                return valueless;
            }
        }
        scope = node.parent();
    }
    None
}

/// If `stmt` binds `name`, the path resolution should continue from.
fn binding_in_statement<'a>(
    stmt: NodePath<'a>,
    name: &str,
    importer: &'a dyn Importer,
) -> Option<NodePath<'a>> {
    match stmt.kind() {
        "lexical_declaration" | "variable_declaration" => stmt
            .named_children()
            .filter(|c| c.kind() == "variable_declarator")
            .find(|d| {
                d.get("name")
                    .is_some_and(|n| n.kind() == "identifier" && n.text() == name)
            }),
        "import_statement" => {
            let (source, imported) = import_binding(stmt, name)?;
            // Prefer the defining declaration in the target module; fall
            // back to the import statement itself when the importer can't
            // cross the boundary.
            importer.import(source, imported).or(Some(stmt))
        }
        "function_declaration" | "generator_function_declaration" | "class_declaration" => {
            let declared = stmt.get("name")?;
            (declared.text() == name).then_some(stmt)
        }
        "expression_statement" => {
            let expr = stmt.named_child(0)?;
            if expr.kind() != "assignment_expression" {
                return None;
            }
            let left = expr.get("left")?;
            (left.kind() == "identifier" && left.text() == name)
                .then(|| expr.get("right"))
                .flatten()
        }
        _ => None,
    }
}

/// If the import statement binds `name` locally, the (source specifier,
/// original imported name) pair. Default imports map to "default" and
/// namespace imports to "*".
fn import_binding<'a>(stmt: NodePath<'a>, name: &str) -> Option<(&'a str, &'a str)> {
    let source = stmt.get("source")?.string_value()?;
    let clause = stmt.named_children().find(|c| c.kind() == "import_clause")?;

    for child in clause.named_children() {
        match child.kind() {
            "identifier" if child.text() == name => return Some((source, "default")),
            "namespace_import" => {
                let local = child.named_children().find(|c| c.kind() == "identifier")?;
                if local.text() == name {
                    return Some((source, "*"));
                }
            }
            "named_imports" => {
                for spec in child.named_children().filter(|c| c.kind() == "import_specifier") {
                    let Some(original) = spec.get("name") else { continue };
                    let local = spec.get("alias").unwrap_or(original);
                    if local.text() == name {
                        return Some((source, original.text()));
                    }
                }
            }
            _ => {}
        }
    }
    None
}
