#![allow(clippy::module_inception)]

//! Parser for a small brace-delimited tree notation.
//!
//! ```text
//! {
//!     // comments are skipped
//!     window : { width 800 height 600 }
//!     "quoted name" /* inline */ true
//! }
//! ```
//!
//! Every document parses into a [`Tree`]: a label plus an ordered list of children.

use std::rc::Rc;

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod tree;

pub use errors::errors::{Error, ErrorImpl, ErrorTip};
pub use parser::options::{EscapeMode, ParseOptions};
pub use parser::parser::{
    parse_bytes, parse_bytes_with, parse_file, parse_file_with, parse_text, parse_text_with,
};
pub use tree::tree::Tree;

/// Byte offset into a source buffer, paired with the name of that source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Rc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Rc::new(String::from("<null>")))
    }

    /// Offsets past `u32::MAX` saturate.
    pub fn at(offset: usize, file: Rc<String>) -> Self {
        Position(u32::try_from(offset).unwrap_or(u32::MAX), file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}
