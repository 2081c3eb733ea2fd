//! Reagent analysis — React call detection over tree-sitter ASTs.
//!
//! The central question this crate answers: is a given call expression
//! semantically a call to a named React builtin (`createElement`,
//! `cloneElement`, ...), no matter how the module or the function was
//! imported, aliased, or re-exported? The answer is computed purely
//! syntactically, by resolving bindings backward through the tree:
//!
//! ```text
//! source → tree-sitter parse → NodePath navigation
//!        → value/module resolution (Importer for cross-file hops)
//!        → builtin-call predicate → scanner matches
//! ```
//!
//! Everything is read-only over an immutable tree snapshot; resolution
//! failures degrade to a negative answer, never to an error.

pub mod ast;
pub mod parse;
pub mod react;
pub mod resolution;

pub use ast::{NodePath, Shape};
pub use parse::{parse_source, Language, ParsedFile, Position, Range};
pub use react::{
    is_react_builtin_call, is_react_children_element_call, is_react_clone_element_call,
    is_react_create_class_call, is_react_create_element_call, is_react_forward_ref_call,
    is_react_module_name, ReactCallKind, ReactCallMatch, ReactCallScanner,
};
pub use resolution::{resolve_to_module, resolve_to_value, IgnoreImporter, Importer, ModuleMap};
