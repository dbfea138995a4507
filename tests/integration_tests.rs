//! Integration tests for the public parse entry points.
//!
//! These tests go through the crate root the way a caller would: text and
//! file parsing, lenient and strict, and reading values out of the tree.

use std::io::Write;

use stringtree::{
    parse_file, parse_file_with, parse_text, parse_text_with, ErrorImpl, ParseOptions, Tree,
};
use tempfile::NamedTempFile;

const SETTINGS: &str = r#"
// Application settings
{
    window : {
        width 1280
        height 720
        fullscreen : { false }
    }

    /* plugins load in order */
    plugin : { name "spell check" }
    plugin : { name "word count" }

    scale 1.25
    debug true
}
"#;

fn write_fixture(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_parse_settings_document() {
    let root = parse_text(SETTINGS);
    let labels: Vec<&str> = root.iter().map(Tree::label).collect();

    assert_eq!(labels, vec!["window", "plugin", "plugin", "scale", "1.25", "debug", "true"]);

    let window = root.get("window").unwrap();
    assert_eq!(window.child(1).unwrap().as_integer(), 1280);
    assert_eq!(window.child(3).unwrap().as_integer(), 720);
    assert!(!window.get("fullscreen").unwrap().child(0).unwrap().as_boolean());

    let plugins: Vec<&str> = root
        .get_all("plugin")
        .map(|plugin| plugin.child(1).unwrap().label())
        .collect();
    assert_eq!(plugins, vec!["spell check", "word count"]);

    assert!((root.child(4).unwrap().as_float() - 1.25).abs() < 1e-9);
    assert!(root.child(6).unwrap().as_boolean());
}

#[test]
fn test_settings_document_is_strictly_valid() {
    let strict = ParseOptions::default().strict(true);

    assert_eq!(parse_text_with(SETTINGS, &strict).unwrap(), parse_text(SETTINGS));
}

#[test]
fn test_parse_file() {
    let file = write_fixture(SETTINGS.as_bytes());
    let root = parse_file(file.path()).unwrap();

    assert_eq!(root, parse_text(SETTINGS));
}

#[test]
fn test_parse_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.st");

    assert!(parse_file(&missing).is_none());
}

#[test]
fn test_parse_file_with_missing_reports_io() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.st");

    let error = parse_file_with(&missing, &ParseOptions::default()).unwrap_err();
    assert_eq!(error.get_error_name(), "Io");
    assert!(matches!(error.get_kind(), ErrorImpl::Io { .. }));
    assert_eq!(error.get_position().1.as_str(), missing.display().to_string());
}

#[test]
fn test_parse_file_with_names_path_in_errors() {
    let file = write_fixture(b"{ a : b }");
    let strict = ParseOptions::default().strict(true);

    let error = parse_file_with(file.path(), &strict).unwrap_err();
    assert_eq!(error.get_error_name(), "ExpectedGroup");
    assert_eq!(error.get_position().0, 6);
    assert_eq!(
        error.get_position().1.as_str(),
        file.path().display().to_string()
    );
}

#[test]
fn test_parse_file_raw_bytes() {
    let file = write_fixture(b"{\r\n  \"\xff\" value\r\n}");
    let root = parse_file(file.path()).unwrap();

    assert_eq!(root.len(), 2);
    assert_eq!(root.child(0).unwrap().label(), "\u{FFFD}");
    assert_eq!(root.child(1).unwrap().label(), "value");
}

#[test]
fn test_parse_empty_file() {
    let file = write_fixture(b"");
    let root = parse_file(file.path()).unwrap();

    assert!(root.is_empty());
}

#[test]
fn test_programmatic_tree_matches_parsed() {
    let mut expected = Tree::new();
    let group = expected.push(Tree::with_label("group"));
    group.push(Tree::with_label("x"));
    group.push(Tree::with_label("y"));

    assert_eq!(parse_text("{ group : { x y } }"), expected);
}

#[test]
fn test_parse_on_separate_threads() {
    let handles: Vec<_> = (0..4)
        .map(|index| {
            std::thread::spawn(move || {
                let source = format!("{{ item : {{ {} }} }}", index);
                parse_text(&source)
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let tree = handle.join().unwrap();
        let value = tree.get("item").unwrap().child(0).unwrap().as_integer();
        assert_eq!(value, index as i32);
    }
}
