//! The significance layer sits between the token list and the grammar. Line
//! breaks and blank lines are skipped like whitespace by default, but a
//! production may still ask whether the token right after the last one it
//! consumed (skipping only whitespace) is a blank line.

use ufoc_common::source::{Position, Span};

use crate::lex::{Token, TokenKind};

pub struct TokenStream<'src> {
    /// Always ends with an `Eof` token.
    tokens: Vec<Token<'src>>,
    cursor: usize,
    previous: Option<Span>,
}

/// A saved position in a [`TokenStream`] which can be returned to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Checkpoint {
    cursor: usize,
    previous: Option<Span>,
}

impl<'src> TokenStream<'src> {
    pub fn new(mut tokens: Vec<Token<'src>>) -> Self {
        let ends_with_eof = tokens
            .last()
            .map(|token| token.kind == TokenKind::Eof)
            .unwrap_or(false);

        if !ends_with_eof {
            let (file, end) = tokens
                .last()
                .map(|token| (token.span.file, token.span.end))
                .unwrap_or((0, Position::START));

            tokens.push(Token {
                kind: TokenKind::Eof,
                text: "",
                span: Span::point(file, end),
            });
        }

        Self {
            tokens,
            cursor: 0,
            previous: None,
        }
    }

    /// Returns `true` for the kinds of tokens skipped between productions.
    pub fn is_trivia(kind: TokenKind) -> bool {
        matches!(
            kind,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::BlankLine
        )
    }

    /// The next significant token.
    pub fn peek(&self) -> &Token<'src> {
        &self.tokens[self.skip(Self::is_trivia)]
    }

    /// Consume and return the next significant token. The `Eof` token is never
    /// consumed, so this keeps returning it at the end.
    pub fn advance(&mut self) -> Token<'src> {
        let index = self.skip(Self::is_trivia);
        self.take(index)
    }

    /// Consume the next token if it is a blank line, skipping only whitespace
    /// before it. Returns its span.
    pub fn consume_blank_line(&mut self) -> Option<Span> {
        let index = self.skip(|kind| kind == TokenKind::Whitespace);

        if self.tokens[index].kind == TokenKind::BlankLine {
            self.cursor = index + 1;
            Some(self.tokens[index].span)
        } else {
            None
        }
    }

    /// Returns `true` if only trivia is left.
    pub fn is_done(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// The span of the last significant token consumed, if any.
    pub fn previous(&self) -> Option<Span> {
        self.previous
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            cursor: self.cursor,
            previous: self.previous,
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor = checkpoint.cursor;
        self.previous = checkpoint.previous;
    }

    fn skip(&self, skippable: impl Fn(TokenKind) -> bool) -> usize {
        let last = self.tokens.len() - 1;
        let mut index = self.cursor;

        while index < last && skippable(self.tokens[index].kind) {
            index += 1;
        }

        index
    }

    fn take(&mut self, index: usize) -> Token<'src> {
        let token = self.tokens[index];

        if token.kind != TokenKind::Eof {
            self.cursor = index + 1;
            self.previous = Some(token.span);
        }

        token
    }
}
