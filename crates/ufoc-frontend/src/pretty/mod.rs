//! Renders a [`Document`] back into source text in a canonical layout.
//!
//! Comments, docstrings and literals are printed exactly as they were written.
//! Everything else is laid out from the tree alone, so formatting the output
//! again gives the same text, and parsing it gives back the same tree apart
//! from spans.
//!
//! Every function producing a document takes the indentation it will be
//! rendered at, so that line breaks inside verbatim text can undo it.

#[cfg(test)]
mod tests;

use std::io;

use pretty::{Arena, DocAllocator, DocBuilder};

use crate::ast::{
    Comment, ConstDecl, Deprecation, Docstring, Document, EnumDecl, EnumMember, Field,
    NamespaceDecl, NamespaceItem, PatternDecl, TopLevelItem, TypeDecl, TypeRef, TypeRefNode,
    Value, ValueNode,
};

const INDENT: isize = 4;

pub struct Prettier<'a> {
    allocator: Arena<'a>,
    width: usize,
}

impl<'a> Prettier<'a> {
    pub fn new() -> Self {
        Self {
            allocator: Arena::new(),
            width: 80,
        }
    }

    pub fn pretty_document(&'a self, document: &Document) -> io::Result<String> {
        let doc = self.doc_document(document);
        let mut res = Vec::new();
        doc.render(self.width, &mut res)?;
        String::from_utf8(res).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    fn doc_document(&'a self, document: &Document) -> DocBuilder<Arena<'a>> {
        let header = self.allocator.text(format!("version {}", document.version));

        let items = document.items.iter().map(|item| {
            self.blank_line(0).append(match item {
                TopLevelItem::Docstring(docstring) => self.verbatim(&docstring.text, 0),
                TopLevelItem::Comment(comment) => self.verbatim(comment.text(), 0),
                TopLevelItem::Namespace(namespace) => self.doc_namespace(namespace),
            })
        });

        // A standalone docstring needs a blank line after it even at the end.
        let trailing = match document.items.last() {
            Some(TopLevelItem::Docstring(_)) => self.allocator.hardline(),
            _ => self.allocator.nil(),
        };

        header
            .append(self.allocator.concat(items))
            .append(self.allocator.hardline())
            .append(trailing)
    }

    fn doc_namespace(&'a self, namespace: &NamespaceDecl) -> DocBuilder<Arena<'a>> {
        let items = self.allocator.intersperse(
            namespace.items.iter().map(|item| match item {
                NamespaceItem::Docstring(docstring) => self.verbatim(&docstring.text, INDENT),
                NamespaceItem::Comment(comment) => self.verbatim(comment.text(), INDENT),
                NamespaceItem::Type(decl) => self.doc_type_decl(decl, INDENT),
                NamespaceItem::Enum(decl) => self.doc_enum_decl(decl, INDENT),
                NamespaceItem::Const(decl) => self.doc_const_decl(decl, INDENT),
                NamespaceItem::Pattern(decl) => self.doc_pattern_decl(decl, INDENT),
            }),
            self.blank_line(INDENT),
        );

        let items = match namespace.items.last() {
            Some(NamespaceItem::Docstring(_)) => {
                items.append(self.allocator.hardline().nest(-INDENT))
            }
            _ => items,
        };

        self.doc_comments(&namespace.comments, 0)
            .append(self.doc_docstring(&namespace.docstring, 0))
            .append(self.allocator.text(format!("namespace {} ", namespace.name.name)))
            .append(self.doc_body(namespace.items.is_empty(), items))
    }

    fn doc_type_decl(&'a self, decl: &TypeDecl, indent: isize) -> DocBuilder<Arena<'a>> {
        self.doc_docstring(&decl.docstring, indent)
            .append(self.doc_deprecation(&decl.deprecation, indent))
            .append(self.allocator.text(format!("type {} ", decl.name.name)))
            .append(self.doc_fields(&decl.fields, indent))
    }

    fn doc_enum_decl(&'a self, decl: &EnumDecl, indent: isize) -> DocBuilder<Arena<'a>> {
        let head = match &decl.base {
            Some(base) => format!("enum {}: {} ", decl.name.name, base.name),
            None => format!("enum {} ", decl.name.name),
        };

        let members = self.allocator.intersperse(
            decl.members
                .iter()
                .map(|member| self.doc_member(member, indent + INDENT)),
            self.allocator.hardline(),
        );

        self.doc_docstring(&decl.docstring, indent)
            .append(self.doc_deprecation(&decl.deprecation, indent))
            .append(self.allocator.text(head))
            .append(self.doc_body(decl.members.is_empty(), members))
    }

    fn doc_member(&'a self, member: &EnumMember, indent: isize) -> DocBuilder<Arena<'a>> {
        let value = match &member.value {
            Some(value) => self
                .allocator
                .text(" = ")
                .append(self.doc_value(value, indent)),
            None => self.allocator.nil(),
        };

        self.doc_comments(&member.comments, indent)
            .append(self.doc_docstring(&member.docstring, indent))
            .append(self.allocator.text(member.name.name.clone()))
            .append(value)
    }

    fn doc_const_decl(&'a self, decl: &ConstDecl, indent: isize) -> DocBuilder<Arena<'a>> {
        self.doc_docstring(&decl.docstring, indent)
            .append(self.doc_deprecation(&decl.deprecation, indent))
            .append(self.allocator.text(format!("const {}: ", decl.name.name)))
            .append(self.doc_type_ref(&decl.ty, indent))
            .append(self.allocator.text(" = "))
            .append(self.doc_value(&decl.value, indent))
    }

    fn doc_pattern_decl(&'a self, decl: &PatternDecl, indent: isize) -> DocBuilder<Arena<'a>> {
        self.doc_docstring(&decl.docstring, indent)
            .append(self.doc_deprecation(&decl.deprecation, indent))
            .append(self.allocator.text(format!("pattern {} = ", decl.name.name)))
            .append(self.verbatim(&decl.pattern.text, indent))
    }

    /// The braced field list of a record type whose opening line is at
    /// `indent`.
    fn doc_fields(&'a self, fields: &[Field], indent: isize) -> DocBuilder<Arena<'a>> {
        let body = self.allocator.intersperse(
            fields
                .iter()
                .map(|field| self.doc_field(field, indent + INDENT)),
            self.allocator.hardline(),
        );

        self.doc_body(fields.is_empty(), body)
    }

    fn doc_field(&'a self, field: &Field, indent: isize) -> DocBuilder<Arena<'a>> {
        let marker = if field.optional { "?" } else { "" };

        self.doc_comments(&field.comments, indent)
            .append(self.doc_docstring(&field.docstring, indent))
            .append(self.allocator.text(format!("{}{marker}: ", field.name.name)))
            .append(self.doc_type_ref(&field.ty, indent))
    }

    fn doc_type_ref(&'a self, ty: &TypeRef, indent: isize) -> DocBuilder<Arena<'a>> {
        let node = match &ty.node {
            TypeRefNode::Inline(fields) => self.doc_fields(fields, indent),
            TypeRefNode::Named(name) => self.allocator.text(name.name.clone()),
        };

        if ty.array {
            node.append(self.allocator.text("[]"))
        } else {
            node
        }
    }

    fn doc_value(&'a self, value: &Value, indent: isize) -> DocBuilder<Arena<'a>> {
        match &value.node {
            ValueNode::String(text) | ValueNode::Number(text) | ValueNode::Ident(text) => {
                self.verbatim(text, indent)
            }
        }
    }

    /// `{` and `}` around an indented body, or just `{}` if it is empty.
    fn doc_body(
        &'a self,
        empty: bool,
        body: DocBuilder<'a, Arena<'a>>,
    ) -> DocBuilder<'a, Arena<'a>> {
        if empty {
            return self.allocator.text("{}");
        }

        self.allocator
            .text("{")
            .append(self.allocator.hardline().append(body).nest(INDENT))
            .append(self.allocator.hardline())
            .append(self.allocator.text("}"))
    }

    /// Leading comments, each on its own line.
    fn doc_comments(&'a self, comments: &[Comment], indent: isize) -> DocBuilder<Arena<'a>> {
        self.allocator.concat(comments.iter().map(|comment| {
            self.verbatim(comment.text(), indent)
                .append(self.allocator.hardline())
        }))
    }

    /// An attached docstring on the line above its owner.
    fn doc_docstring(
        &'a self,
        docstring: &Option<Docstring>,
        indent: isize,
    ) -> DocBuilder<'a, Arena<'a>> {
        match docstring {
            Some(docstring) => self
                .verbatim(&docstring.text, indent)
                .append(self.allocator.hardline()),
            None => self.allocator.nil(),
        }
    }

    fn doc_deprecation(
        &'a self,
        deprecation: &Option<Deprecation>,
        indent: isize,
    ) -> DocBuilder<'a, Arena<'a>> {
        let Some(deprecation) = deprecation else {
            return self.allocator.nil();
        };

        let keyword = match &deprecation.message {
            Some(message) => self
                .allocator
                .text("deprecated(")
                .append(self.verbatim(&message.text, indent))
                .append(self.allocator.text(")")),
            None => self.allocator.text("deprecated"),
        };

        keyword.append(self.allocator.hardline())
    }

    /// Source text as written. Lines after the first are not indented, since
    /// their original indentation is part of the text.
    fn verbatim(&'a self, text: &str, indent: isize) -> DocBuilder<Arena<'a>> {
        self.allocator.intersperse(
            text.split('\n')
                .map(|line| self.allocator.text(line.to_owned())),
            self.allocator.hardline().nest(-indent),
        )
    }

    /// Two line breaks, the first of which does not indent the empty line in
    /// between when `indent` is the current indentation.
    fn blank_line(&'a self, indent: isize) -> DocBuilder<Arena<'a>> {
        self.allocator
            .hardline()
            .nest(-indent)
            .append(self.allocator.hardline())
    }
}

impl Default for Prettier<'_> {
    fn default() -> Self {
        Self::new()
    }
}
