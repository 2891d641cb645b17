use super::Parser;
use crate::ast::{EnumMember, Field, TypeRef, TypeRefNode, Value, ValueNode};
use crate::error::Error;
use crate::lex::{Punct, TokenKind};

const FIELD_STARTS: &[TokenKind] = &[
    TokenKind::LineComment,
    TokenKind::BlockComment,
    TokenKind::Docstring,
    TokenKind::Ident,
    TokenKind::Punct(Punct::RightBrace),
];

const MEMBER_STARTS: &[TokenKind] = FIELD_STARTS;

const TYPE_STARTS: &[TokenKind] = &[TokenKind::Punct(Punct::LeftBrace), TokenKind::Ident];

const VALUE_STARTS: &[TokenKind] = &[TokenKind::String, TokenKind::Number, TokenKind::Ident];

impl Parser<'_> {
    /// Parse the fields of a record type, up to and including the closing
    /// brace.
    pub(super) fn fields(&mut self) -> Result<Vec<Field>, Error> {
        let mut fields = Vec::new();

        while self.peek(Punct::RightBrace).is_none() {
            if self.peek(FIELD_STARTS).is_none() {
                return Err(self.unexpected(FIELD_STARTS.to_vec()));
            }

            fields.push(self.field()?);
        }

        self.expect(Punct::RightBrace)?;
        Ok(fields)
    }

    fn field(&mut self) -> Result<Field, Error> {
        let start = self.next_span();
        let comments = self.leading_comments();
        let docstring = self.attached_docstring();
        let name = self.ident()?;

        let optional = self.consume(Punct::Question).is_some();

        if self.consume(Punct::Colon).is_none() {
            let expected = if optional {
                vec![TokenKind::Punct(Punct::Colon)]
            } else {
                vec![
                    TokenKind::Punct(Punct::Question),
                    TokenKind::Punct(Punct::Colon),
                ]
            };

            return Err(self.unexpected(expected));
        }

        let ty = self.type_ref()?;

        Ok(Field {
            comments,
            docstring,
            name,
            optional,
            ty,
            span: self.since(start),
        })
    }

    pub(super) fn type_ref(&mut self) -> Result<TypeRef, Error> {
        let start = self.next_span();

        let node = if let Some(opener) = self.consume(Punct::LeftBrace) {
            self.enter(opener.span)?;
            let fields = self.fields();
            self.leave();
            TypeRefNode::Inline(fields?)
        } else if let Some(name) = self.consume(TokenKind::Ident) {
            TypeRefNode::Named(name.into())
        } else {
            return Err(self.unexpected(TYPE_STARTS.to_vec()));
        };

        let array = match self.consume(Punct::LeftBracket) {
            Some(_) => {
                self.expect(Punct::RightBracket)?;
                true
            }

            None => false,
        };

        Ok(TypeRef {
            node,
            array,
            span: self.since(start),
        })
    }

    /// Parse the members of an enum, up to and including the closing brace.
    pub(super) fn members(&mut self) -> Result<Vec<EnumMember>, Error> {
        let mut members = Vec::new();

        while self.peek(Punct::RightBrace).is_none() {
            if self.peek(MEMBER_STARTS).is_none() {
                return Err(self.unexpected(MEMBER_STARTS.to_vec()));
            }

            members.push(self.member()?);
        }

        self.expect(Punct::RightBrace)?;
        Ok(members)
    }

    fn member(&mut self) -> Result<EnumMember, Error> {
        let start = self.next_span();
        let comments = self.leading_comments();
        let docstring = self.attached_docstring();
        let name = self.ident()?;

        let value = match self.consume(Punct::Equal) {
            Some(_) => Some(self.value()?),
            None => None,
        };

        Ok(EnumMember {
            comments,
            docstring,
            name,
            value,
            span: self.since(start),
        })
    }

    pub(super) fn value(&mut self) -> Result<Value, Error> {
        let Some(token) = self.consume(VALUE_STARTS) else {
            return Err(self.unexpected(VALUE_STARTS.to_vec()));
        };

        let text = token.text.to_string();
        let node = match token.kind {
            TokenKind::String => ValueNode::String(text),
            TokenKind::Number => ValueNode::Number(text),
            _ => ValueNode::Ident(text),
        };

        Ok(Value {
            node,
            span: token.span,
        })
    }
}
