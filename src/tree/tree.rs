use std::slice;

use super::values;

/// A node of a parsed document.
///
/// A node owns its children outright, in document order. It can be a named
/// group (label and children), a leaf value (label only) or an anonymous
/// group (children only).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    label: String,
    children: Vec<Tree>,
}

impl Tree {
    /// Creates an anonymous node without children.
    pub fn new() -> Self {
        Tree::default()
    }

    pub fn with_label(label: impl Into<String>) -> Self {
        Tree {
            label: label.into(),
            children: vec![],
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    /// Appends `child` and returns it for further building.
    pub fn push(&mut self, child: Tree) -> &mut Tree {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Tree> {
        self.children.iter()
    }

    pub fn child(&self, index: usize) -> Option<&Tree> {
        self.children.get(index)
    }

    /// First child labeled `label`.
    pub fn get(&self, label: &str) -> Option<&Tree> {
        self.children.iter().find(|child| child.label == label)
    }

    /// Every child labeled `label`, in document order.
    pub fn get_all<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a Tree> + 'a {
        self.children.iter().filter(move |child| child.label == label)
    }

    pub fn as_str(&self) -> &str {
        &self.label
    }

    /// Leading integer of the label, 0 when there is none.
    pub fn as_integer(&self) -> i32 {
        values::integer_prefix(&self.label)
    }

    /// Leading decimal number of the label, 0.0 when there is none.
    pub fn as_float(&self) -> f64 {
        values::float_prefix(&self.label)
    }

    /// True only for the exact label `true`.
    pub fn as_boolean(&self) -> bool {
        values::boolean(&self.label)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a Tree;
    type IntoIter = slice::Iter<'a, Tree>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
