use super::Prettier;
use crate::ast::{NamespaceItem, TopLevelItem};

fn format(source: &str) -> String {
    let document = crate::parse(0, source).unwrap();
    let prettier = Prettier::new();
    prettier.pretty_document(&document).unwrap()
}

const MESSY: &str = r#"version 1
namespace Tasks {
"""Standalone."""

// note
"""Max."""
deprecated
const Max: int = 5
type T { id?: string[]   sub: { a: int }[] }
enum E: int { A = 1 B }
deprecated("gone") pattern P = "{ns}.x"
}"#;

#[test]
fn canonical_layout() {
    let expected = r#"version 1

namespace Tasks {
    """Standalone."""

    // note

    """Max."""
    deprecated
    const Max: int = 5

    type T {
        id?: string[]
        sub: {
            a: int
        }[]
    }

    enum E: int {
        A = 1
        B
    }

    deprecated("gone")
    pattern P = "{ns}.x"
}
"#;

    assert_eq!(format(MESSY), expected);
}

#[test]
fn formatting_is_idempotent() {
    let once = format(MESSY);
    let twice = format(&once);
    assert_eq!(once, twice);
}

#[test]
fn reparsing_keeps_the_structure() {
    let original = crate::parse(0, MESSY).unwrap();
    let reparsed = crate::parse(0, &format(MESSY)).unwrap();

    let TopLevelItem::Namespace(before) = &original.items[0] else {
        panic!("expected a namespace");
    };

    let TopLevelItem::Namespace(after) = &reparsed.items[0] else {
        panic!("expected a namespace");
    };

    assert_eq!(before.items.len(), after.items.len());

    let NamespaceItem::Const(before) = &before.items[2] else {
        panic!("expected a constant");
    };

    let NamespaceItem::Const(after) = &after.items[2] else {
        panic!("expected a constant");
    };

    assert_eq!(before.docstring.as_ref().unwrap().text, after.docstring.as_ref().unwrap().text);
    assert!(after.deprecation.is_some());
}

#[test]
fn empty_bodies() {
    assert_eq!(
        format("version 2\nnamespace A { type T {} enum E {} }"),
        "version 2\n\nnamespace A {\n    type T {}\n\n    enum E {}\n}\n"
    );

    assert_eq!(format("version 2 namespace A {}"), "version 2\n\nnamespace A {}\n");
}

#[test]
fn namespace_comments_and_docstring_stay_attached() {
    let source = "version 1\n// a\n/* b */ \"\"\"doc\"\"\" namespace A {}\n\n// loose";
    assert_eq!(
        format(source),
        "version 1\n\n// a\n/* b */\n\"\"\"doc\"\"\"\nnamespace A {}\n\n// loose\n"
    );
}

#[test]
fn trailing_standalone_docstrings_keep_their_blank_line() {
    let source = "version 1\nnamespace A {\n\"\"\"inner\"\"\"\n\n}\n\"\"\"outer\"\"\"\n\n";
    let formatted = format(source);

    assert_eq!(
        formatted,
        "version 1\n\nnamespace A {\n    \"\"\"inner\"\"\"\n\n}\n\n\"\"\"outer\"\"\"\n\n"
    );
    assert_eq!(format(&formatted), formatted);
}

#[test]
fn multiline_text_is_verbatim() {
    let source = "version 1\nnamespace A {\n  /*\n   keep\n     this\n  */\n\n  \"\"\"\n  Doc.\n  \"\"\"\n  type T { f: int }\n}";
    let formatted = format(source);

    assert!(formatted.contains("    /*\n   keep\n     this\n  */\n"));
    assert!(formatted.contains("    \"\"\"\n  Doc.\n  \"\"\"\n    type T {\n        f: int\n    }\n"));
    assert_eq!(format(&formatted), formatted);
}
