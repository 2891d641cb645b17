use ufoc_common::source::Span;

use super::Parser;
use crate::ast::{
    ConstDecl, Deprecation, Docstring, EnumDecl, NamespaceItem, PatternDecl, TypeDecl,
};
use crate::error::Error;
use crate::lex::{Keyword, Punct, TokenKind};

const DECLARATION_KEYWORDS: &[TokenKind] = &[
    TokenKind::Keyword(Keyword::Type),
    TokenKind::Keyword(Keyword::Enum),
    TokenKind::Keyword(Keyword::Const),
    TokenKind::Keyword(Keyword::Pattern),
];

/// Everything which may come before the keyword of a declaration.
struct Preamble {
    start: Span,
    docstring: Option<Docstring>,
    deprecation: Option<Deprecation>,
}

impl Parser<'_> {
    pub(super) fn declaration(&mut self) -> Result<NamespaceItem, Error> {
        let start = self.next_span();
        let docstring = self.attached_docstring();
        let deprecation = self.deprecation()?;

        let preamble = Preamble {
            start,
            docstring,
            deprecation,
        };

        if self.consume(Keyword::Type).is_some() {
            self.type_decl(preamble).map(NamespaceItem::Type)
        } else if self.consume(Keyword::Enum).is_some() {
            self.enum_decl(preamble).map(NamespaceItem::Enum)
        } else if self.consume(Keyword::Const).is_some() {
            self.const_decl(preamble).map(NamespaceItem::Const)
        } else if self.consume(Keyword::Pattern).is_some() {
            self.pattern_decl(preamble).map(NamespaceItem::Pattern)
        } else {
            let mut expected = Vec::new();
            if preamble.deprecation.is_none() {
                expected.push(TokenKind::Keyword(Keyword::Deprecated));
            }

            expected.extend_from_slice(DECLARATION_KEYWORDS);
            Err(self.unexpected(expected))
        }
    }

    /// Parse `deprecated` or `deprecated("message")`, if present.
    fn deprecation(&mut self) -> Result<Option<Deprecation>, Error> {
        let Some(keyword) = self.consume(Keyword::Deprecated) else {
            return Ok(None);
        };

        let message = if self.consume(Punct::LeftParen).is_some() {
            let message = self.expect(TokenKind::String)?;
            self.expect(Punct::RightParen)?;
            Some(message.into())
        } else {
            None
        };

        Ok(Some(Deprecation {
            message,
            span: self.since(keyword.span),
        }))
    }

    fn type_decl(&mut self, preamble: Preamble) -> Result<TypeDecl, Error> {
        let name = self.ident()?;
        self.expect(Punct::LeftBrace)?;
        let fields = self.fields()?;

        Ok(TypeDecl {
            docstring: preamble.docstring,
            deprecation: preamble.deprecation,
            name,
            fields,
            span: self.since(preamble.start),
        })
    }

    fn enum_decl(&mut self, preamble: Preamble) -> Result<EnumDecl, Error> {
        let name = self.ident()?;

        let base = if self.consume(Punct::Colon).is_some() {
            Some(self.ident()?)
        } else {
            None
        };

        if self.consume(Punct::LeftBrace).is_none() {
            let expected = match base {
                Some(_) => vec![TokenKind::Punct(Punct::LeftBrace)],
                None => vec![
                    TokenKind::Punct(Punct::Colon),
                    TokenKind::Punct(Punct::LeftBrace),
                ],
            };

            return Err(self.unexpected(expected));
        }

        let members = self.members()?;

        Ok(EnumDecl {
            docstring: preamble.docstring,
            deprecation: preamble.deprecation,
            name,
            base,
            members,
            span: self.since(preamble.start),
        })
    }

    fn const_decl(&mut self, preamble: Preamble) -> Result<ConstDecl, Error> {
        let name = self.ident()?;
        self.expect(Punct::Colon)?;
        let ty = self.type_ref()?;
        self.expect(Punct::Equal)?;
        let value = self.value()?;

        Ok(ConstDecl {
            docstring: preamble.docstring,
            deprecation: preamble.deprecation,
            name,
            ty,
            value,
            span: self.since(preamble.start),
        })
    }

    fn pattern_decl(&mut self, preamble: Preamble) -> Result<PatternDecl, Error> {
        let name = self.ident()?;
        self.expect(Punct::Equal)?;
        let pattern = self.expect(TokenKind::String)?.into();

        Ok(PatternDecl {
            docstring: preamble.docstring,
            deprecation: preamble.deprecation,
            name,
            pattern,
            span: self.since(preamble.start),
        })
    }
}
