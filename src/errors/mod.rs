//! Error types for the tokenizer and tree builder.
//!
//! Lenient parsing never produces these; they surface from the strict
//! mode and from the option-taking file entry point. It includes:
//!
//! - Error structures with the byte offset of the anomaly
//! - Specific error variants for tokenizing, building and file access
//! - Error names and suggestions for display

pub mod errors;
