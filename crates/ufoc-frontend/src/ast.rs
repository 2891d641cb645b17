//! The syntax tree produced by the parser. It is a plain, immutable tree: every
//! node owns its children, and every node carries the span of the source it
//! was parsed from, from its first token (leading comments and docstring
//! included) to its last.
//!
//! Literal text (strings, numbers, docstrings, comments) is kept exactly as
//! written, delimiters and all. Interpreting it is left to later stages.

use ufoc_common::source::Span;

use crate::lex::Token;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Document {
    /// The number given in the `version` header.
    pub version: u64,
    pub items: Vec<TopLevelItem>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TopLevelItem {
    Docstring(StandaloneDocstring),
    Comment(Comment),
    Namespace(NamespaceDecl),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NamespaceDecl {
    /// Comments directly above the namespace, with no blank line in between.
    pub comments: Vec<Comment>,
    pub docstring: Option<Docstring>,
    pub name: Ident,
    pub items: Vec<NamespaceItem>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NamespaceItem {
    Docstring(StandaloneDocstring),
    Comment(Comment),
    Type(TypeDecl),
    Enum(EnumDecl),
    Const(ConstDecl),
    Pattern(PatternDecl),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeDecl {
    pub docstring: Option<Docstring>,
    pub deprecation: Option<Deprecation>,
    pub name: Ident,
    pub fields: Vec<Field>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    pub comments: Vec<Comment>,
    pub docstring: Option<Docstring>,
    pub name: Ident,

    /// Whether the field was written `name?: type`.
    pub optional: bool,
    pub ty: TypeRef,
    pub span: Span,
}

/// A reference to a type, possibly an array of it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeRef {
    pub node: TypeRefNode,

    /// Whether the type was followed by `[]`.
    pub array: bool,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeRefNode {
    /// An anonymous record type, `{ field... }`.
    Inline(Vec<Field>),

    /// A type referred to by name. Names are not resolved here.
    Named(Ident),
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumDecl {
    pub docstring: Option<Docstring>,
    pub deprecation: Option<Deprecation>,
    pub name: Ident,
    pub base: Option<Ident>,
    pub members: Vec<EnumMember>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnumMember {
    pub comments: Vec<Comment>,
    pub docstring: Option<Docstring>,
    pub name: Ident,
    pub value: Option<Value>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstDecl {
    pub docstring: Option<Docstring>,
    pub deprecation: Option<Deprecation>,
    pub name: Ident,
    pub ty: TypeRef,
    pub value: Value,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatternDecl {
    pub docstring: Option<Docstring>,
    pub deprecation: Option<Deprecation>,
    pub name: Ident,

    /// The string literal, placeholders uninterpreted.
    pub pattern: Literal,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Value {
    pub node: ValueNode,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValueNode {
    String(String),
    Number(String),
    Ident(String),
}

/// A `deprecated` or `deprecated("message")` annotation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deprecation {
    pub message: Option<Literal>,
    pub span: Span,
}

/// A docstring attached to the declaration, field or member that follows it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Docstring {
    pub text: String,
    pub span: Span,
}

/// A docstring followed by a blank line, and thus not attached to anything.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StandaloneDocstring {
    pub text: String,
    pub span: Span,

    /// The blank line following the docstring.
    pub blank_line: Span,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Comment {
    /// A `// ...` comment, without its line break.
    Line { text: String, span: Span },

    /// A `/* ... */` comment.
    Block { text: String, span: Span },
}

impl Comment {
    pub fn text(&self) -> &str {
        match self {
            Self::Line { text, .. } | Self::Block { text, .. } => text,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Line { span, .. } | Self::Block { span, .. } => *span,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

/// Some literal token, kept verbatim.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Literal {
    pub text: String,
    pub span: Span,
}

impl From<Token<'_>> for Ident {
    fn from(token: Token<'_>) -> Self {
        Self {
            name: token.text.into(),
            span: token.span,
        }
    }
}

impl From<Token<'_>> for Literal {
    fn from(token: Token<'_>) -> Self {
        Self {
            text: token.text.into(),
            span: token.span,
        }
    }
}

impl From<Token<'_>> for Docstring {
    fn from(token: Token<'_>) -> Self {
        Self {
            text: token.text.into(),
            span: token.span,
        }
    }
}
