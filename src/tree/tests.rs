//! Unit tests for the tree module.
//!
//! This module contains tests for:
//! - Building trees programmatically
//! - Child lookups by index and label
//! - Integer, float and boolean views of labels

use super::tree::Tree;

fn settings() -> Tree {
    let mut root = Tree::new();
    let window = root.push(Tree::with_label("window"));
    window.push(Tree::with_label("width"));
    window.push(Tree::with_label("800"));
    root.push(Tree::with_label("plugin"));
    root.push(Tree::with_label("theme"));
    root.push(Tree::with_label("plugin"));
    root
}

#[test]
fn test_new_tree_is_anonymous_and_empty() {
    let tree = Tree::new();

    assert_eq!(tree.label(), "");
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.child(0).is_none());
}

#[test]
fn test_push_preserves_order() {
    let root = settings();
    let labels: Vec<&str> = root.iter().map(Tree::label).collect();

    assert_eq!(labels, vec!["window", "plugin", "theme", "plugin"]);
    assert_eq!(root.children()[0].len(), 2);
}

#[test]
fn test_set_label() {
    let mut tree = Tree::with_label("old");
    tree.set_label("new");

    assert_eq!(tree.label(), "new");
    assert_eq!(tree.as_str(), "new");
}

#[test]
fn test_child_by_index() {
    let root = settings();

    assert_eq!(root.child(2).map(Tree::label), Some("theme"));
    assert!(root.child(4).is_none());
}

#[test]
fn test_get_returns_first_match() {
    let root = settings();
    let window = root.get("window").unwrap();

    assert_eq!(window.child(1).unwrap().as_integer(), 800);
    assert!(root.get("missing").is_none());
}

#[test]
fn test_get_all() {
    let root = settings();

    assert_eq!(root.get_all("plugin").count(), 2);
    assert_eq!(root.get_all("missing").count(), 0);
}

#[test]
fn test_into_iterator() {
    let root = settings();
    let mut count = 0;
    for child in &root {
        assert!(!child.label().is_empty());
        count += 1;
    }

    assert_eq!(count, 4);
}

#[test]
fn test_as_integer() {
    assert_eq!(Tree::with_label("42").as_integer(), 42);
    assert_eq!(Tree::with_label("-17").as_integer(), -17);
    assert_eq!(Tree::with_label("+8").as_integer(), 8);
    assert_eq!(Tree::with_label("  12").as_integer(), 12);
    assert_eq!(Tree::with_label("\t\n7").as_integer(), 7);
    assert_eq!(Tree::with_label("12abc").as_integer(), 12);
    assert_eq!(Tree::with_label("3.99").as_integer(), 3);
}

#[test]
fn test_as_integer_defaults_to_zero() {
    assert_eq!(Tree::new().as_integer(), 0);
    assert_eq!(Tree::with_label("abc").as_integer(), 0);
    assert_eq!(Tree::with_label("-").as_integer(), 0);
    assert_eq!(Tree::with_label("- 5").as_integer(), 0);
}

#[test]
fn test_as_integer_saturates() {
    assert_eq!(Tree::with_label("99999999999").as_integer(), i32::MAX);
    assert_eq!(Tree::with_label("-99999999999").as_integer(), i32::MIN);
}

#[test]
#[allow(clippy::approx_constant)]
fn test_as_float() {
    assert!((Tree::with_label("3.14").as_float() - 3.14).abs() < 1e-9);
    assert!((Tree::with_label("-0.5").as_float() + 0.5).abs() < 1e-9);
    assert!((Tree::with_label(".25").as_float() - 0.25).abs() < 1e-9);
    assert!((Tree::with_label("2.").as_float() - 2.0).abs() < 1e-9);
    assert!((Tree::with_label("1e3").as_float() - 1000.0).abs() < 1e-9);
    assert!((Tree::with_label("  6.5E-1").as_float() - 0.65).abs() < 1e-9);
    assert!((Tree::with_label("7.5kg").as_float() - 7.5).abs() < 1e-9);
    assert!((Tree::with_label("4e").as_float() - 4.0).abs() < 1e-9);
}

#[test]
fn test_as_float_defaults_to_zero() {
    assert_eq!(Tree::new().as_float(), 0.0);
    assert_eq!(Tree::with_label("abc").as_float(), 0.0);
    assert_eq!(Tree::with_label(".").as_float(), 0.0);
}

#[test]
fn test_as_boolean() {
    assert!(Tree::with_label("true").as_boolean());
    assert!(!Tree::with_label("yes").as_boolean());
    assert!(!Tree::with_label("True").as_boolean());
    assert!(!Tree::with_label("1").as_boolean());
    assert!(!Tree::with_label(" true").as_boolean());
    assert!(!Tree::with_label("true ").as_boolean());
    assert!(!Tree::new().as_boolean());
}
