//! Utility macros for the tokenizer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_POSITION!` - Creates a Position at a byte offset of the tokenizer's source

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's decoded value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Identifier, "width".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a Position for a byte offset of the given tokenizer.
///
/// Offsets past `u32::MAX` saturate.
///
/// ```ignore
/// let start = MK_POSITION!(tokenizer, tokenizer.token_start());
/// ```
#[macro_export]
macro_rules! MK_POSITION {
    ($tokenizer:expr, $offset:expr) => {
        $crate::Position::at($offset, ::std::rc::Rc::clone($tokenizer.source_name()))
    };
}
