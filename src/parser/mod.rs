//! Tree builder and parser entry points.
//!
//! This module contains the recursive-descent builder that drives the
//! tokenizer and assembles a [`Tree`](crate::tree::tree::Tree). It handles:
//!
//! - Nested and named groups (`{ ... }`, `name : { ... }`)
//! - Leaf values
//! - Lenient recovery by default, explicit errors in strict mode
//! - Parsing from strings, byte buffers and files

pub mod options;
pub mod parser;
