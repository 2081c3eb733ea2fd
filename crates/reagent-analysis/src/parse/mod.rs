//! Tree-sitter parsing for the two frontend languages Reagent analyzes.

pub mod language;
pub mod source;

pub use language::Language;
pub use source::{parse_source, ParsedFile, Position, Range};
