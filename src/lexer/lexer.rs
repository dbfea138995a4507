use std::{borrow::Cow, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    parser::options::{EscapeMode, ParseOptions},
    Span, MK_POSITION, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, PUNCTUATION_LOOKUP};

/// Pull-based tokenizer over a byte buffer.
///
/// Each call to [`Tokenizer::next`] scans exactly one token. The decoded text
/// of the last identifier stays available through [`Tokenizer::identifier`]
/// until the following call. Once the end of input is reached every further
/// call yields [`TokenKind::Eof`].
pub struct Tokenizer<'a> {
    source: &'a [u8],
    cursor: usize,
    token_start: usize,
    last_token: TokenKind,
    identifier: Vec<u8>,
    escapes: EscapeMode,
    strict: bool,
    file: Rc<String>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a [u8], options: &ParseOptions) -> Tokenizer<'a> {
        Tokenizer {
            source,
            cursor: 0,
            token_start: 0,
            last_token: TokenKind::Undefined,
            identifier: Vec::new(),
            escapes: options.escapes,
            strict: options.strict,
            file: Rc::new(options.source_name.clone()),
        }
    }

    /// Scans the next token and makes it the last one.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<TokenKind, Error> {
        let kind = self.scan()?;
        self.last_token = kind;
        tracing::trace!(%kind, offset = self.token_start, "token");
        Ok(kind)
    }

    pub fn last(&self) -> TokenKind {
        self.last_token
    }

    /// Decoded text of the last identifier.
    pub fn identifier(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.identifier)
    }

    /// Byte offset at which the last token starts.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    pub fn source_name(&self) -> &Rc<String> {
        &self.file
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.cursor).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.source.get(self.cursor + offset).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.cursor += 1;
        Some(byte)
    }

    fn at_eof(&self) -> bool {
        self.cursor >= self.source.len()
    }

    /// Lenient mode logs the anomaly and carries on, strict mode fails with it.
    fn tolerate(&self, error_impl: ErrorImpl, offset: usize) -> Result<(), Error> {
        if self.strict {
            return Err(Error::new(error_impl, MK_POSITION!(self, offset)));
        }

        tracing::debug!(error = %error_impl, offset, "tolerated");
        Ok(())
    }

    fn scan(&mut self) -> Result<TokenKind, Error> {
        loop {
            while self.peek().is_some_and(is_whitespace) {
                self.cursor += 1;
            }

            self.token_start = self.cursor;

            let byte = match self.peek() {
                Some(byte) => byte,
                None => return Ok(TokenKind::Eof),
            };

            if byte == b'/' {
                match self.peek_at(1) {
                    Some(b'/') => {
                        self.skip_line_comment();
                        if self.at_eof() {
                            return Ok(TokenKind::Eof);
                        }
                        continue;
                    }
                    Some(b'*') => {
                        if !self.skip_block_comment()? {
                            return Ok(TokenKind::Eof);
                        }
                        continue;
                    }
                    _ => return self.unrecognised(),
                }
            }

            if let Some(kind) = PUNCTUATION_LOOKUP.get(&byte) {
                self.cursor += 1;
                return Ok(*kind);
            }

            if byte == b'"' {
                return self.quoted_identifier();
            }

            if is_identifier_start(byte) {
                return Ok(self.bare_identifier());
            }

            return self.unrecognised();
        }
    }

    fn skip_line_comment(&mut self) {
        while self.peek().is_some_and(|byte| byte != b'\n') {
            self.cursor += 1;
        }
    }

    /// Returns false when the input ends before the closing `*/`.
    fn skip_block_comment(&mut self) -> Result<bool, Error> {
        let start = self.cursor;
        self.cursor += 2;

        while !self.at_eof() {
            if self.peek() == Some(b'*') && self.peek_at(1) == Some(b'/') {
                self.cursor += 2;
                return Ok(true);
            }
            self.cursor += 1;
        }

        self.tolerate(ErrorImpl::UnterminatedComment, start)?;
        Ok(false)
    }

    /// Nothing matches here. The cursor stays put so every later call ends up
    /// here again and yields Eof.
    fn unrecognised(&mut self) -> Result<TokenKind, Error> {
        let character = String::from_utf8_lossy(&self.source[self.cursor..])
            .chars()
            .next()
            .map(String::from)
            .unwrap_or_default();

        self.tolerate(ErrorImpl::UnrecognisedCharacter { character }, self.cursor)?;
        Ok(TokenKind::Eof)
    }

    fn quoted_identifier(&mut self) -> Result<TokenKind, Error> {
        self.identifier.clear();
        self.cursor += 1;

        loop {
            match self.bump() {
                Some(b'"') => break,
                Some(b'\\') => match self.bump() {
                    Some(escaped) => self.push_escape(escaped),
                    None => {
                        self.identifier.push(b'\\');
                        self.tolerate(ErrorImpl::UnterminatedString, self.token_start)?;
                        break;
                    }
                },
                Some(byte) => self.identifier.push(byte),
                None => {
                    self.tolerate(ErrorImpl::UnterminatedString, self.token_start)?;
                    break;
                }
            }
        }

        Ok(TokenKind::Identifier)
    }

    fn push_escape(&mut self, escaped: u8) {
        match escaped {
            b'"' => self.identifier.push(b'"'),
            b'n' => self.identifier.push(b'\n'),
            other => self.identifier.extend_from_slice(&[b'\\', other]),
        }

        // The compatible decoding repeats the escaped byte after every escape.
        if self.escapes == EscapeMode::Compatible {
            self.identifier.push(escaped);
        }
    }

    fn bare_identifier(&mut self) -> TokenKind {
        self.identifier.clear();

        if let Some(first) = self.bump() {
            self.identifier.push(first);
        }

        while let Some(byte) = self.peek().filter(|byte| is_identifier_continue(*byte)) {
            self.identifier.push(byte);
            self.cursor += 1;
        }

        TokenKind::Identifier
    }
}

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

fn is_identifier_start(byte: u8) -> bool {
    is_identifier_continue(byte) || byte == b'-' || byte == b'+'
}

fn is_identifier_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'.'
}

/// Collects the whole token stream of `source`, including the final Eof.
///
/// Spans are offsets into the raw bytes of `source`.
pub fn tokenize(source: impl AsRef<[u8]>, options: &ParseOptions) -> Result<Vec<Token>, Error> {
    let mut tokenizer = Tokenizer::new(source.as_ref(), options);
    let mut tokens = vec![];

    loop {
        let kind = tokenizer.next()?;
        let value = match kind {
            TokenKind::Identifier => tokenizer.identifier().into_owned(),
            TokenKind::Eof => String::from("EOF"),
            other => String::from(other.describe()),
        };
        let span = Span {
            start: MK_POSITION!(tokenizer, tokenizer.token_start()),
            end: MK_POSITION!(tokenizer, tokenizer.cursor),
        };

        tokens.push(MK_TOKEN!(kind, value, span));

        if kind == TokenKind::Eof {
            return Ok(tokens);
        }
    }
}
