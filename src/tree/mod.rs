//! The labeled tree produced by parsing.
//!
//! Submodules:
//! - tree: The node type, its lookups and editing operations
//! - values: Numeric and boolean views of a label

pub mod tree;
pub mod values;

#[cfg(test)]
mod tests;
