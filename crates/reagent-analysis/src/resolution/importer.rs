//! Cross-file import resolution contexts.

use reagent_core::types::collections::FxHashMap;

use crate::ast::NodePath;
use crate::parse::ParsedFile;

/// Re-export chains longer than this are treated as unresolvable.
const MAX_REEXPORT_DEPTH: usize = 16;

/// Cross-file resolution context. Given a module specifier and the original
/// (exported) name of a symbol, an importer may produce a path to the
/// defining declaration in another file. Returning `None` is always legal:
/// resolution then stops at the import site.
pub trait Importer {
    fn import(&self, specifier: &str, imported: &str) -> Option<NodePath<'_>>;
}

/// Importer that never crosses file boundaries.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreImporter;

impl Importer for IgnoreImporter {
    fn import(&self, _specifier: &str, _imported: &str) -> Option<NodePath<'_>> {
        None
    }
}

/// In-memory importer: module specifier → parsed file.
///
/// Resolves named exports (`export function x`, `export const x = ...`,
/// `export { x }`) and follows `export { x } from "..."` re-export chains.
/// When a chain ends at a module the map does not contain (typically the
/// react package itself), the terminal re-export statement is surfaced so
/// that module resolution can still read its source specifier.
#[derive(Debug, Default)]
pub struct ModuleMap {
    modules: FxHashMap<String, ParsedFile>,
}

impl ModuleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, specifier: impl Into<String>, file: ParsedFile) {
        self.modules.insert(specifier.into(), file);
    }

    pub fn get(&self, specifier: &str) -> Option<&ParsedFile> {
        self.modules.get(specifier)
    }

    fn find_export<'s>(
        &'s self,
        specifier: &str,
        name: &str,
        depth: usize,
    ) -> Option<NodePath<'s>> {
        if depth > MAX_REEXPORT_DEPTH {
            return None;
        }
        let file = self.modules.get(specifier)?;
        let root = NodePath::root(file);

        for stmt in root.named_children().filter(|s| s.kind() == "export_statement") {
            // `export function x` / `export const x = ...`
            if let Some(decl) = stmt.get("declaration") {
                if let Some(found) = declared_value(decl, name) {
                    return Some(found);
                }
            }

            // `export { a as b }` / `export { a as b } from 'mod'`
            let Some(clause) = stmt.named_children().find(|c| c.kind() == "export_clause")
            else {
                continue;
            };
            for spec in clause.named_children().filter(|c| c.kind() == "export_specifier") {
                let Some(original) = spec.get("name") else { continue };
                let exported = spec.get("alias").unwrap_or(original);
                if exported.text() != name {
                    continue;
                }
                if let Some(source) = stmt.get("source").and_then(|s| s.string_value()) {
                    // Re-export: chase the chain; an unknown tail module
                    // leaves the re-export statement as the answer.
                    return self
                        .find_export(source, original.text(), depth + 1)
                        .or(Some(stmt));
                }
                return local_declaration(root, original.text());
            }
        }
        None
    }
}

impl Importer for ModuleMap {
    fn import(&self, specifier: &str, imported: &str) -> Option<NodePath<'_>> {
        let resolved = self.find_export(specifier, imported, 0);
        if let Some(path) = resolved {
            tracing::trace!(specifier, imported, kind = path.kind(), "import resolved");
        }
        resolved
    }
}

/// If `decl` declares `name`, the path to its value (or the declaration).
fn declared_value<'a>(decl: NodePath<'a>, name: &str) -> Option<NodePath<'a>> {
    match decl.kind() {
        "function_declaration" | "generator_function_declaration" | "class_declaration" => {
            let declared = decl.get("name")?;
            (declared.text() == name).then_some(decl)
        }
        "lexical_declaration" | "variable_declaration" => decl
            .named_children()
            .filter(|c| c.kind() == "variable_declarator")
            .find(|d| d.get("name").is_some_and(|n| n.text() == name))
            .map(|d| d.get("value").unwrap_or(d)),
        _ => None,
    }
}

/// Top-level declaration of `name` in a module, for `export { name }`.
fn local_declaration<'a>(root: NodePath<'a>, name: &str) -> Option<NodePath<'a>> {
    root.named_children()
        .find_map(|stmt| declared_value(stmt, name))
}
