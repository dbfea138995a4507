use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnterminatedGroup => "UnterminatedGroup",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedGroup { .. } => "ExpectedGroup",
            ErrorImpl::DepthLimitExceeded { .. } => "DepthLimitExceeded",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` cannot start a token, did you mean to quote it?",
                character
            )),
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Missing closing `\"`"))
            }
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Missing closing `*/`"))
            }
            ErrorImpl::UnterminatedGroup => {
                ErrorTip::Suggestion(String::from("Missing closing `}`"))
            }
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::ExpectedGroup { token } => ErrorTip::Suggestion(format!(
                "Expected `{{`, found `{}`; only groups may follow a `:`",
                token
            )),
            ErrorImpl::DepthLimitExceeded { limit } => {
                ErrorTip::Suggestion(format!("Groups are nested deeper than {}", limit))
            }
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at byte {} of {}",
            self.internal_error, self.position.0, self.position.1
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unterminated group")]
    UnterminatedGroup,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("expected group, found {token:?}")]
    ExpectedGroup { token: String },
    #[error("groups nested deeper than {limit}")]
    DepthLimitExceeded { limit: usize },
    #[error("could not read file: {message}")]
    Io { message: String },
}
