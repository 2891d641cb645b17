use std::fmt;

use thiserror::Error;
use ufoc_common::message::{one_of, Messages};
use ufoc_common::source::Span;

use crate::lex::TokenKind;

/// The broad category of an [`Error`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// No token rule matches the source at some point.
    Lex,

    /// A token does not fit any alternative of the production being parsed.
    Syntax,

    /// The source ended while some construct was still open.
    UnexpectedEndOfInput,
}

/// A lexical construct which was opened but never closed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Unterminated {
    String,
    Docstring,
    BlockComment,
}

impl fmt::Display for Unterminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Docstring => write!(f, "docstring"),
            Self::BlockComment => write!(f, "block comment"),
        }
    }
}

/// The single error a parse can fail with. Parsing stops at the first error,
/// so there is never more than one.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("invalid character {character:?}")]
    InvalidCharacter { span: Span, character: char },

    #[error("invalid escape sequence in string")]
    InvalidEscape { span: Span },

    #[error("unterminated {what}")]
    Unterminated { span: Span, what: Unterminated },

    #[error("expected {}, found {actual}", one_of(.expected))]
    Expected {
        span: Span,
        expected: Vec<TokenKind>,
        actual: TokenKind,
    },

    #[error("unexpected end of input, expected {}", one_of(.expected))]
    UnexpectedEnd { span: Span, expected: Vec<TokenKind> },

    #[error("invalid version number {text:?}")]
    InvalidVersion { span: Span, text: String },

    #[error("inline types nested more than {limit} levels deep")]
    TooDeep { span: Span, limit: usize },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCharacter { .. } | Self::InvalidEscape { .. } => ErrorKind::Lex,
            Self::Unterminated { .. } | Self::UnexpectedEnd { .. } => {
                ErrorKind::UnexpectedEndOfInput
            }
            Self::Expected { .. } | Self::InvalidVersion { .. } | Self::TooDeep { .. } => {
                ErrorKind::Syntax
            }
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::InvalidCharacter { span, .. }
            | Self::InvalidEscape { span }
            | Self::Unterminated { span, .. }
            | Self::Expected { span, .. }
            | Self::UnexpectedEnd { span, .. }
            | Self::InvalidVersion { span, .. }
            | Self::TooDeep { span, .. } => *span,
        }
    }

    /// Add a diagnostic describing this error.
    pub fn report(&self, messages: &mut Messages) {
        let mut at = messages.at(self.span());

        match self {
            Self::InvalidCharacter { character, .. } => at.lex_invalid_character(*character),
            Self::InvalidEscape { .. } => at.lex_invalid_escape(),
            Self::Unterminated { what, .. } => at.lex_unterminated(what.to_string()),
            Self::Expected {
                expected, actual, ..
            } => at.parse_unexpected_token(expected, actual),
            Self::UnexpectedEnd { expected, .. } => at.parse_unexpected_end(expected),
            Self::InvalidVersion { text, .. } => at.parse_invalid_version(text),
            Self::TooDeep { limit, .. } => at.parse_too_deep(*limit),
        }
    }
}
