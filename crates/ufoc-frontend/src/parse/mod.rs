//! A hand-written recursive descent parser over the significant tokens of a
//! source. Each production fails with the first error it encounters and there
//! is no recovery.
//!
//! Most choices are made by looking at the next significant token. The
//! exception is docstrings: wherever a standalone docstring may appear, the
//! parser first tries to read a docstring followed by a blank line. If the
//! blank line is missing, it backs up to before the docstring and parses it as
//! the documentation of whatever comes next instead.

mod decl;
mod item;
mod stream;
mod types;


use log::debug;
use ufoc_common::source::Span;

pub use self::stream::{Checkpoint, TokenStream};

use crate::ast::{Comment, Docstring, Ident, StandaloneDocstring};
use crate::error::Error;
use crate::lex::{Keyword, Punct, Token, TokenKind};
use crate::ParseOptions;

const COMMENTS: &[TokenKind] = &[TokenKind::LineComment, TokenKind::BlockComment];

pub struct Parser<'src> {
    tokens: TokenStream<'src>,
    options: ParseOptions,

    /// How many inline types deep the parser currently is.
    depth: usize,
}

impl<'src> Parser<'src> {
    pub fn new(tokens: Vec<Token<'src>>, options: ParseOptions) -> Self {
        Self {
            tokens: TokenStream::new(tokens),
            options,
            depth: 0,
        }
    }

    /// Return the span of the next significant token if it matches.
    fn peek(&self, matcher: impl Matcher) -> Option<Span> {
        let token = self.tokens.peek();
        matcher.matches(token.kind).then_some(token.span)
    }

    /// Advance the parser and return the next significant token if it matches.
    fn consume(&mut self, matcher: impl Matcher) -> Option<Token<'src>> {
        self.peek(matcher)?;
        Some(self.tokens.advance())
    }

    /// Like [`Parser::consume`], but fail if the token does not match.
    fn expect(&mut self, matcher: impl Matcher) -> Result<Token<'src>, Error> {
        match self.consume(&matcher) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(matcher.expected())),
        }
    }

    /// Produce an error for the next significant token, which is none of the
    /// expected ones.
    fn unexpected(&self, expected: Vec<TokenKind>) -> Error {
        let token = self.tokens.peek();

        if token.kind == TokenKind::Eof {
            Error::UnexpectedEnd {
                span: token.span,
                expected,
            }
        } else {
            Error::Expected {
                span: token.span,
                expected,
                actual: token.kind,
            }
        }
    }

    /// The span of the next significant token.
    fn next_span(&self) -> Span {
        self.tokens.peek().span
    }

    /// The span from `start` up to and including the last consumed token.
    fn since(&self, start: Span) -> Span {
        match self.tokens.previous() {
            Some(end) => start + end,
            None => start,
        }
    }

    fn ident(&mut self) -> Result<Ident, Error> {
        self.expect(TokenKind::Ident).map(Ident::from)
    }

    fn comment(&mut self) -> Option<Comment> {
        let token = self.consume(COMMENTS)?;
        let text = token.text.to_string();
        let span = token.span;

        Some(match token.kind {
            TokenKind::LineComment => Comment::Line { text, span },
            _ => Comment::Block { text, span },
        })
    }

    /// Parse any number of comments.
    fn leading_comments(&mut self) -> Vec<Comment> {
        let mut comments = Vec::new();
        while let Some(comment) = self.comment() {
            comments.push(comment);
        }

        comments
    }

    /// Parse a docstring followed by a blank line. If there is no docstring,
    /// or no blank line right after it, nothing is consumed.
    fn standalone_docstring(&mut self) -> Option<StandaloneDocstring> {
        let checkpoint = self.tokens.checkpoint();
        let docstring = self.consume(TokenKind::Docstring)?;

        match self.tokens.consume_blank_line() {
            Some(blank_line) => Some(StandaloneDocstring {
                text: docstring.text.into(),
                span: docstring.span,
                blank_line,
            }),

            None => {
                debug!("docstring at {} attaches to what follows", docstring.span.start);
                self.tokens.restore(checkpoint);
                None
            }
        }
    }

    /// Parse a docstring, if any. Line breaks around it are insignificant.
    fn attached_docstring(&mut self) -> Option<Docstring> {
        self.consume(TokenKind::Docstring).map(Docstring::from)
    }

    /// Enter an inline type opened at the given span.
    fn enter(&mut self, at: Span) -> Result<(), Error> {
        if self.depth >= self.options.max_depth {
            return Err(Error::TooDeep {
                span: at,
                limit: self.options.max_depth,
            });
        }

        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Anything a token kind can be checked against.
trait Matcher {
    fn matches(&self, kind: TokenKind) -> bool;

    /// Every kind this matcher accepts, for error reporting.
    fn expected(&self) -> Vec<TokenKind>;
}

impl Matcher for TokenKind {
    fn matches(&self, kind: TokenKind) -> bool {
        *self == kind
    }

    fn expected(&self) -> Vec<TokenKind> {
        vec![*self]
    }
}

impl Matcher for Keyword {
    fn matches(&self, kind: TokenKind) -> bool {
        TokenKind::Keyword(*self) == kind
    }

    fn expected(&self) -> Vec<TokenKind> {
        vec![TokenKind::Keyword(*self)]
    }
}

impl Matcher for Punct {
    fn matches(&self, kind: TokenKind) -> bool {
        TokenKind::Punct(*self) == kind
    }

    fn expected(&self) -> Vec<TokenKind> {
        vec![TokenKind::Punct(*self)]
    }
}

impl Matcher for [TokenKind] {
    fn matches(&self, kind: TokenKind) -> bool {
        self.contains(&kind)
    }

    fn expected(&self) -> Vec<TokenKind> {
        self.to_vec()
    }
}

impl<const N: usize> Matcher for [TokenKind; N] {
    fn matches(&self, kind: TokenKind) -> bool {
        self.contains(&kind)
    }

    fn expected(&self) -> Vec<TokenKind> {
        self.to_vec()
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn matches(&self, kind: TokenKind) -> bool {
        M::matches(self, kind)
    }

    fn expected(&self) -> Vec<TokenKind> {
        M::expected(self)
    }
}
