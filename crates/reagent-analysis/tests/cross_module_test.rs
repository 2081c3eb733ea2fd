//! Cross-file resolution through a `ModuleMap` importer: local helper
//! modules re-exporting React builtins.

use reagent_analysis::{
    is_react_builtin_call, parse_source, ModuleMap, NodePath, ParsedFile,
};

fn parse(path: &str, src: &str) -> ParsedFile {
    parse_source(path, src.to_string()).unwrap()
}

fn last_statement(file: &ParsedFile) -> NodePath<'_> {
    let root = NodePath::root(file);
    root.named_child(root.node().named_child_count() - 1).unwrap()
}

#[test]
fn detects_through_local_reexport_of_react() {
    let mut map = ModuleMap::new();
    map.insert(
        "./lib",
        parse("lib.js", "export { createElement } from 'react';"),
    );

    let app = parse(
        "app.js",
        "import { createElement } from './lib';\ncreateElement(Foo, null);",
    );
    assert!(is_react_builtin_call(
        last_statement(&app),
        "createElement",
        &map
    ));
}

#[test]
fn detects_through_reexport_chain() {
    let mut map = ModuleMap::new();
    map.insert("./a", parse("a.js", "export { createElement } from './b';"));
    map.insert("./b", parse("b.js", "export { createElement } from 'react';"));

    let app = parse(
        "app.js",
        "import { createElement } from './a';\ncreateElement(Foo);",
    );
    assert!(is_react_builtin_call(
        last_statement(&app),
        "createElement",
        &map
    ));
}

#[test]
fn rejects_reexport_of_other_library() {
    let mut map = ModuleMap::new();
    map.insert(
        "./lib",
        parse("lib.js", "export { createElement } from 'some-other-lib';"),
    );

    let app = parse(
        "app.js",
        "import { createElement } from './lib';\ncreateElement(Foo);",
    );
    assert!(!is_react_builtin_call(
        last_statement(&app),
        "createElement",
        &map
    ));
}

#[test]
fn rejects_local_function_shadowing_builtin_name() {
    let mut map = ModuleMap::new();
    map.insert(
        "./lib",
        parse("lib.js", "export function createElement(tag) { return tag; }"),
    );

    let app = parse(
        "app.js",
        "import { createElement } from './lib';\ncreateElement('div');",
    );
    assert!(!is_react_builtin_call(
        last_statement(&app),
        "createElement",
        &map
    ));
}

#[test]
fn without_map_entry_the_import_site_decides() {
    // The importer knows nothing about './lib', so resolution stops at the
    // import statement and its specifier ('./lib') fails the classifier.
    let map = ModuleMap::new();
    let app = parse(
        "app.js",
        "import { createElement } from './lib';\ncreateElement(Foo);",
    );
    assert!(!is_react_builtin_call(
        last_statement(&app),
        "createElement",
        &map
    ));
}
