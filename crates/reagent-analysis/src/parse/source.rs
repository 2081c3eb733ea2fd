//! Parsed source files: source text + tree-sitter tree + language tag.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tree_sitter::{Node, Parser, Tree};

use reagent_core::errors::ParseError;

use super::language::Language;

/// A position in (line, column) space; 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

/// Text range in (line, column) space; 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Convert a tree-sitter node range into a Range.
    pub fn from_ts_node(node: &Node) -> Self {
        let range = node.range();
        Range {
            start: Position {
                line: range.start_point.row as u32,
                column: range.start_point.column as u32,
            },
            end: Position {
                line: range.end_point.row as u32,
                column: range.end_point.column as u32,
            },
        }
    }
}

/// A fully parsed source file. Owns the source text and the tree; all
/// `NodePath` handles borrow from it.
#[derive(Debug)]
pub struct ParsedFile {
    pub path: String,
    pub language: Language,
    pub source: String,
    pub tree: Tree,
}

impl ParsedFile {
    /// Get the exact source text for a node.
    pub fn text_for_node(&self, node: &Node) -> &str {
        &self.source[node.byte_range()]
    }
}

/// Parse a source file, picking the grammar from the file extension.
pub fn parse_source(path: &str, source: String) -> Result<ParsedFile, ParseError> {
    let ext = Path::new(path).extension().and_then(|e| e.to_str());
    let language = Language::from_extension(ext)
        .ok_or_else(|| ParseError::UnsupportedExtension(ext.map(str::to_string)))?;

    let mut parser = Parser::new();
    parser
        .set_language(&language.ts_language_for_ext(ext))
        .map_err(|e| ParseError::GrammarLoad {
            language: language.name().to_string(),
            message: e.to_string(),
        })?;

    let tree = parser.parse(&source, None).ok_or_else(|| ParseError::NoTree {
        path: path.to_string(),
    })?;

    Ok(ParsedFile {
        path: path.to_string(),
        language,
        source,
        tree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_javascript() {
        let file = parse_source("test.js", "const x = 1;".to_string()).unwrap();
        assert_eq!(file.language, Language::JavaScript);
        assert_eq!(file.tree.root_node().kind(), "program");
    }

    #[test]
    fn parses_tsx() {
        let src = "const App = () => <div />;";
        let file = parse_source("app.tsx", src.to_string()).unwrap();
        assert_eq!(file.language, Language::TypeScript);
        assert!(!file.tree.root_node().has_error());
    }

    #[test]
    fn rejects_unknown_extension() {
        let err = parse_source("main.py", "x = 1".to_string()).unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedExtension(_)));
    }

    #[test]
    fn text_for_node_returns_exact_slice() {
        let file = parse_source("test.js", "foo(bar);".to_string()).unwrap();
        let root = file.tree.root_node();
        assert_eq!(file.text_for_node(&root), "foo(bar);");
    }

    #[test]
    fn range_from_node_is_zero_based() {
        let file = parse_source("test.js", "a;\nb;".to_string()).unwrap();
        let second = file.tree.root_node().named_child(1).unwrap();
        let range = Range::from_ts_node(&second);
        assert_eq!(range.start, Position { line: 1, column: 0 });
    }
}
