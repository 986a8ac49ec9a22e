use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
    near: String,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position, near: String) -> Self {
        Error {
            internal_error: error_impl,
            position,
            near,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    /// Source text scanned for the failing token before the error was raised.
    pub fn get_near(&self) -> &str {
        &self.near
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedChar => "UnterminatedChar",
            ErrorImpl::MalformedNumericLiteral { .. } => "MalformedNumericLiteral",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { character: '!' } => ErrorTip::Suggestion(
                String::from("`!` is only valid in `!=`, use `not` for negation"),
            ),
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("Missing closing `\"`"))
            }
            ErrorImpl::UnterminatedChar => ErrorTip::Suggestion(String::from(
                "Char literals hold exactly one character followed by a closing `'`",
            )),
            ErrorImpl::MalformedNumericLiteral { text } => ErrorTip::Suggestion(format!(
                "Number `{}` is followed by a letter, identifiers cannot start with a digit",
                text
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LEXER > {} at {}:{} near '{}'",
            self.internal_error, self.position.line, self.position.column, self.near
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

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("Unexpected character {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated char literal")]
    UnterminatedChar,
    #[error("Character in number literal {text:?}")]
    MalformedNumericLiteral { text: String },
    #[error("Number literal out of range {token:?}")]
    NumberParseError { token: String },
}
