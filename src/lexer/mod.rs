//! Lexical analysis module.
//!
//! This module contains the tokenizer that turns a byte buffer into a
//! stream of tokens for the tree builder. It handles:
//!
//! - Braces and colons
//! - Bare and quoted identifiers, including escape decoding
//! - `//` line comments and `/* */` block comments
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;
