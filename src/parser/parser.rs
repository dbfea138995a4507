//! Recursive-descent tree builder and the parse entry points.
//!
//! The grammar is
//!
//! ```text
//! Group  := '{' Entry* '}'
//! Entry  := Group
//!         | Identifier ( ':' Group )?
//! ```
//!
//! The builder keeps one token of lookahead: the tokenizer's last token is
//! the current token, and each production advances past what it consumes.

use std::{fs, path::Path, rc::Rc};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::Tokenizer, tokens::TokenKind},
    tree::tree::Tree,
    Position, MK_POSITION,
};

use super::options::ParseOptions;

/// The builder state for one parse.
pub struct Parser<'a> {
    /// Token source, its last token is the current one
    tokenizer: Tokenizer<'a>,
    /// Settings for this parse
    options: &'a ParseOptions,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a [u8], options: &'a ParseOptions) -> Self {
        Parser {
            tokenizer: Tokenizer::new(source, options),
            options,
        }
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokenizer.last()
    }

    /// Advances to the next token and returns its kind.
    pub fn advance(&mut self) -> Result<TokenKind, Error> {
        self.tokenizer.next()
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        MK_POSITION!(self.tokenizer, self.tokenizer.token_start())
    }

    fn describe_current(&self) -> String {
        match self.current_token_kind() {
            TokenKind::Identifier => self.tokenizer.identifier().into_owned(),
            other => String::from(other.describe()),
        }
    }

    fn tolerate(&self, error_impl: ErrorImpl) -> Result<(), Error> {
        if self.options.strict {
            return Err(Error::new(error_impl, self.get_position()));
        }

        tracing::debug!(error = %error_impl, offset = self.tokenizer.token_start(), "tolerated");
        Ok(())
    }

    /// Parses a whole document into `root`.
    ///
    /// Only a document that starts with `{` gives the root children. Anything
    /// after the root group is ignored, unless the parse is strict.
    pub fn parse_document(&mut self, root: &mut Tree) -> Result<(), Error> {
        self.advance()?;

        if self.options.strict && self.current_token_kind() != TokenKind::LeftBrace {
            return Err(Error::new(
                ErrorImpl::ExpectedGroup {
                    token: self.describe_current(),
                },
                self.get_position(),
            ));
        }

        self.parse_group(root, 1)?;

        if self.options.strict && self.advance()? != TokenKind::Eof {
            return Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: self.describe_current(),
                },
                self.get_position(),
            ));
        }

        Ok(())
    }

    /// Parses the group starting at the current token into `target`.
    ///
    /// Does nothing unless the current token is `{`. On a normal return the
    /// current token is the closing `}`, which the caller advances past.
    fn parse_group(&mut self, target: &mut Tree, depth: usize) -> Result<(), Error> {
        if self.current_token_kind() != TokenKind::LeftBrace {
            return Ok(());
        }

        if let Some(limit) = self.options.max_depth {
            if depth > limit {
                return Err(Error::new(
                    ErrorImpl::DepthLimitExceeded { limit },
                    self.get_position(),
                ));
            }
        }

        self.advance()?;

        loop {
            match self.current_token_kind() {
                TokenKind::RightBrace => return Ok(()),
                TokenKind::LeftBrace => {
                    let child = target.push(Tree::new());
                    self.parse_group(child, depth + 1)?;
                    self.advance()?;
                }
                TokenKind::Identifier => {
                    let child = target.push(Tree::with_label(self.tokenizer.identifier()));
                    tracing::trace!(label = child.label(), depth, "entry");

                    if self.advance()? == TokenKind::Colon {
                        if self.advance()? != TokenKind::LeftBrace {
                            // Lenient parses drop this token with the advance below.
                            self.tolerate(ErrorImpl::ExpectedGroup {
                                token: self.describe_current(),
                            })?;
                        }
                        self.parse_group(child, depth + 1)?;
                        self.advance()?;
                    }
                }
                TokenKind::Colon => {
                    self.tolerate(ErrorImpl::UnexpectedToken {
                        token: String::from(":"),
                    })?;
                    self.advance()?;
                }
                TokenKind::Eof | TokenKind::Undefined => {
                    self.tolerate(ErrorImpl::UnterminatedGroup)?;
                    return Ok(());
                }
            }
        }
    }
}

/// Parses `text` leniently. Always returns a root, possibly without children.
pub fn parse_text(text: &str) -> Tree {
    parse_bytes(text.as_bytes())
}

/// Parses a raw byte buffer leniently.
pub fn parse_bytes(bytes: &[u8]) -> Tree {
    let options = ParseOptions::default();
    let mut root = Tree::new();

    // Lenient parses keep whatever was built before an error.
    if let Err(error) = Parser::new(bytes, &options).parse_document(&mut root) {
        tracing::debug!(%error, "parse stopped early");
    }

    tracing::debug!(children = root.len(), "parsed document");
    root
}

/// Reads the file at `path` and parses it leniently.
///
/// Returns `None` if the file cannot be read.
pub fn parse_file(path: impl AsRef<Path>) -> Option<Tree> {
    let path = path.as_ref();

    match fs::read(path) {
        Ok(bytes) => Some(parse_bytes(&bytes)),
        Err(error) => {
            tracing::debug!(path = %path.display(), %error, "could not open");
            None
        }
    }
}

pub fn parse_text_with(text: &str, options: &ParseOptions) -> Result<Tree, Error> {
    parse_bytes_with(text.as_bytes(), options)
}

pub fn parse_bytes_with(bytes: &[u8], options: &ParseOptions) -> Result<Tree, Error> {
    let mut root = Tree::new();
    Parser::new(bytes, options).parse_document(&mut root)?;

    tracing::debug!(children = root.len(), source = %options.source_name, "parsed document");
    Ok(root)
}

/// Reads the file at `path` and parses it with `options`.
///
/// Error positions name the path instead of `options.source_name`.
pub fn parse_file_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Tree, Error> {
    let path = path.as_ref();
    let options = options.clone().source_name(path.display().to_string());

    let bytes = fs::read(path).map_err(|error| {
        Error::new(
            ErrorImpl::Io {
                message: error.to_string(),
            },
            Position(0, Rc::new(options.source_name.clone())),
        )
    })?;

    parse_bytes_with(&bytes, &options)
}
