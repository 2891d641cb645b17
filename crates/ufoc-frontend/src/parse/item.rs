use log::trace;

use super::{Parser, COMMENTS};
use crate::ast::{Document, NamespaceDecl, NamespaceItem, TopLevelItem};
use crate::error::Error;
use crate::lex::{Keyword, Punct, TokenKind};

const TOP_LEVEL_STARTS: &[TokenKind] = &[
    TokenKind::Docstring,
    TokenKind::LineComment,
    TokenKind::BlockComment,
    TokenKind::Keyword(Keyword::Namespace),
];

const NAMESPACE_ITEM_STARTS: &[TokenKind] = &[
    TokenKind::Docstring,
    TokenKind::LineComment,
    TokenKind::BlockComment,
    TokenKind::Keyword(Keyword::Deprecated),
    TokenKind::Keyword(Keyword::Type),
    TokenKind::Keyword(Keyword::Enum),
    TokenKind::Keyword(Keyword::Const),
    TokenKind::Keyword(Keyword::Pattern),
    TokenKind::Punct(Punct::RightBrace),
];

impl Parser<'_> {
    /// Parse a whole document, from the `version` header to the end of input.
    pub fn parse_document(&mut self) -> Result<Document, Error> {
        let opener = self.expect(Keyword::Version)?;
        let number = self.expect(TokenKind::Number)?;
        let version = number
            .text
            .parse()
            .map_err(|_| Error::InvalidVersion {
                span: number.span,
                text: number.text.into(),
            })?;

        let mut items = Vec::new();
        while !self.tokens.is_done() {
            items.push(self.top_level_item()?);
        }

        trace!("parsed {} top level items", items.len());

        Ok(Document {
            version,
            items,
            span: self.since(opener.span),
        })
    }

    fn top_level_item(&mut self) -> Result<TopLevelItem, Error> {
        if let Some(docstring) = self.standalone_docstring() {
            return Ok(TopLevelItem::Docstring(docstring));
        }

        if !self.comments_precede_namespace() {
            if let Some(comment) = self.comment() {
                return Ok(TopLevelItem::Comment(comment));
            }
        }

        if self.peek(TOP_LEVEL_STARTS).is_none() {
            return Err(self.unexpected(TOP_LEVEL_STARTS.to_vec()));
        }

        self.namespace_decl().map(TopLevelItem::Namespace)
    }

    /// Returns `true` if the next tokens are a run of comments which, with at
    /// most a docstring after them, lead up to a `namespace` keyword without
    /// any blank line in between. Nothing is consumed.
    fn comments_precede_namespace(&mut self) -> bool {
        if self.peek(COMMENTS).is_none() {
            return false;
        }

        let checkpoint = self.tokens.checkpoint();
        let mut adjacent = true;

        while adjacent && self.consume(COMMENTS).is_some() {
            adjacent = self.tokens.consume_blank_line().is_none();
        }

        if adjacent && self.consume(TokenKind::Docstring).is_some() {
            adjacent = self.tokens.consume_blank_line().is_none();
        }

        let leads = adjacent && self.peek(Keyword::Namespace).is_some();
        self.tokens.restore(checkpoint);
        leads
    }

    fn namespace_decl(&mut self) -> Result<NamespaceDecl, Error> {
        let start = self.next_span();
        let comments = self.leading_comments();
        let docstring = self.attached_docstring();

        self.expect(Keyword::Namespace)?;
        let name = self.ident()?;
        self.expect(Punct::LeftBrace)?;

        let mut items = Vec::new();
        while self.peek(Punct::RightBrace).is_none() {
            items.push(self.namespace_item()?);
        }

        self.expect(Punct::RightBrace)?;

        Ok(NamespaceDecl {
            comments,
            docstring,
            name,
            items,
            span: self.since(start),
        })
    }

    fn namespace_item(&mut self) -> Result<NamespaceItem, Error> {
        if let Some(docstring) = self.standalone_docstring() {
            return Ok(NamespaceItem::Docstring(docstring));
        }

        if let Some(comment) = self.comment() {
            return Ok(NamespaceItem::Comment(comment));
        }

        if self.peek(NAMESPACE_ITEM_STARTS).is_none() {
            return Err(self.unexpected(NAMESPACE_ITEM_STARTS.to_vec()));
        }

        self.declaration()
    }
}
