//! Tokenization turns the source text into a sequence of classified tokens.
//! Nothing is skipped at this stage: whitespace, line breaks and blank lines
//! are tokens of their own, so concatenating the text of every token gives
//! back the source exactly.
//!
//! Line breaks come in two flavours. A run of horizontal whitespace containing
//! a single line break is a [`TokenKind::Newline`], whereas a run containing
//! two or more is a single [`TokenKind::BlankLine`]. The parser relies on this
//! distinction to decide whether a docstring documents the declaration below
//! it or stands on its own.
//!
//! The token stream always ends with a [`TokenKind::Eof`] token with an empty
//! text. Lexing stops at the first character no rule accepts.

mod raw;

#[cfg(test)]
mod tests;

use std::fmt;

use log::trace;
use logos::{Lexer, Logos};
use ufoc_common::source::{File, Position, Span};

use self::raw::{Fault, RawToken};
use crate::error::{Error, Unterminated};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,

    /// The exact text of this token.
    pub text: &'src str,

    pub span: Span,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TokenKind {
    LineComment,
    BlockComment,
    Docstring,
    Keyword(Keyword),
    Number,
    String,
    Ident,
    Punct(Punct),
    Whitespace,
    BlankLine,
    Newline,
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineComment => write!(f, "line comment"),
            Self::BlockComment => write!(f, "block comment"),
            Self::Docstring => write!(f, "docstring"),
            Self::Keyword(keyword) => write!(f, "`{}`", keyword.as_str()),
            Self::Number => write!(f, "number"),
            Self::String => write!(f, "string"),
            Self::Ident => write!(f, "identifier"),
            Self::Punct(punct) => write!(f, "`{}`", punct.as_char()),
            Self::Whitespace => write!(f, "whitespace"),
            Self::BlankLine => write!(f, "blank line"),
            Self::Newline => write!(f, "line break"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    Version,
    Namespace,
    Type,
    Enum,
    Const,
    Pattern,
    Deprecated,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Namespace => "namespace",
            Self::Type => "type",
            Self::Enum => "enum",
            Self::Const => "const",
            Self::Pattern => "pattern",
            Self::Deprecated => "deprecated",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Punct {
    LeftBrace,
    RightBrace,
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Colon,
    Equal,
    Comma,
    Question,
}

impl Punct {
    pub fn as_char(&self) -> char {
        match self {
            Self::LeftBrace => '{',
            Self::RightBrace => '}',
            Self::LeftParen => '(',
            Self::RightParen => ')',
            Self::LeftBracket => '[',
            Self::RightBracket => ']',
            Self::Colon => ':',
            Self::Equal => '=',
            Self::Comma => ',',
            Self::Question => '?',
        }
    }
}

/// Eagerly tokenize a whole source, including the final `Eof` token.
pub fn tokenize(file: File, source: &str) -> Result<Vec<Token<'_>>, Error> {
    let tokens = Tokens::new(file, source).collect::<Result<Vec<_>, _>>()?;
    trace!("lexed {} tokens from file {file}", tokens.len());
    Ok(tokens)
}

/// An iterator producing the tokens of a source one at a time. This produces
/// `Ok(token)` for every token up to and including the `Eof` token, or a single
/// `Err(error)` at the first thing that cannot be lexed, after which it is
/// exhausted.
pub struct Tokens<'src> {
    lexer: Lexer<'src, RawToken>,
    file: File,
    position: Position,
    done: bool,
}

impl<'src> Tokens<'src> {
    pub fn new(file: File, source: &'src str) -> Self {
        Self {
            lexer: RawToken::lexer(source),
            file,
            position: Position::START,
            done: false,
        }
    }

    /// Produce the error for a raw token which did not lex.
    fn error(&mut self, start: Position, text: &'src str) -> Error {
        let file = self.file;
        let span = |from: usize, to: usize| {
            let first = start.advance(&text[..from]);
            let last = first.advance(&text[from..to]);
            Span::new(file, first, last)
        };

        match self.lexer.extras.take() {
            Some(Fault::UnterminatedBlockComment) => Error::Unterminated {
                span: span(0, 2),
                what: Unterminated::BlockComment,
            },

            Some(Fault::UnterminatedDocstring) => Error::Unterminated {
                span: span(0, 3),
                what: Unterminated::Docstring,
            },

            Some(Fault::UnterminatedString) => Error::Unterminated {
                span: span(0, 1),
                what: Unterminated::String,
            },

            Some(Fault::InvalidEscape(range)) => Error::InvalidEscape {
                span: span(range.start, range.end),
            },

            None => {
                // The raw error may cover a partial match of some other token,
                // but the culprit is its first character.
                let character = text.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                Error::InvalidCharacter {
                    span: span(0, character.len_utf8().min(text.len())),
                    character,
                }
            }
        }
    }
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Result<Token<'src>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let start = self.position;

        let Some(raw) = self.lexer.next() else {
            self.done = true;
            return Some(Ok(Token {
                kind: TokenKind::Eof,
                text: "",
                span: Span::point(self.file, start),
            }));
        };

        let text = self.lexer.slice();

        let kind = match raw {
            RawToken::LineComment => TokenKind::LineComment,
            RawToken::BlockComment => TokenKind::BlockComment,
            RawToken::Docstring => TokenKind::Docstring,

            RawToken::Version => TokenKind::Keyword(Keyword::Version),
            RawToken::Namespace => TokenKind::Keyword(Keyword::Namespace),
            RawToken::Type => TokenKind::Keyword(Keyword::Type),
            RawToken::Enum => TokenKind::Keyword(Keyword::Enum),
            RawToken::Const => TokenKind::Keyword(Keyword::Const),
            RawToken::Pattern => TokenKind::Keyword(Keyword::Pattern),
            RawToken::Deprecated => TokenKind::Keyword(Keyword::Deprecated),

            RawToken::Number => TokenKind::Number,
            RawToken::String => TokenKind::String,
            RawToken::Ident => TokenKind::Ident,

            RawToken::LeftBrace => TokenKind::Punct(Punct::LeftBrace),
            RawToken::RightBrace => TokenKind::Punct(Punct::RightBrace),
            RawToken::LeftParen => TokenKind::Punct(Punct::LeftParen),
            RawToken::RightParen => TokenKind::Punct(Punct::RightParen),
            RawToken::LeftBracket => TokenKind::Punct(Punct::LeftBracket),
            RawToken::RightBracket => TokenKind::Punct(Punct::RightBracket),
            RawToken::Colon => TokenKind::Punct(Punct::Colon),
            RawToken::Equal => TokenKind::Punct(Punct::Equal),
            RawToken::Comma => TokenKind::Punct(Punct::Comma),
            RawToken::Question => TokenKind::Punct(Punct::Question),

            RawToken::Whitespace => TokenKind::Whitespace,
            RawToken::BlankLine => TokenKind::BlankLine,
            RawToken::Newline => TokenKind::Newline,

            RawToken::Error => {
                self.done = true;
                return Some(Err(self.error(start, text)));
            }
        };

        self.position = start.advance(text);

        Some(Ok(Token {
            kind,
            text,
            span: Span::new(self.file, start, self.position),
        }))
    }
}
