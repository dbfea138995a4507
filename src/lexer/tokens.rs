use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref PUNCTUATION_LOOKUP: HashMap<u8, TokenKind> = {
        let mut map = HashMap::new();
        map.insert(b'{', TokenKind::LeftBrace);
        map.insert(b'}', TokenKind::RightBrace);
        map.insert(b':', TokenKind::Colon);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    /// Nothing has been read yet
    Undefined,
    Identifier, // str | "str"
    LeftBrace,  // {
    RightBrace, // }
    Colon,      // :
    Eof,
}

impl TokenKind {
    /// Text used when a token of this kind shows up in an error message.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::Undefined => "<undefined>",
            TokenKind::Identifier => "identifier",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Colon => ":",
            TokenKind::Eof => "end of input",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Owned token, as collected by [`tokenize`](super::lexer::tokenize).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind == TokenKind::Identifier {
            write!(f, "{} ({:?})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}
