//! Diagnostics are plain [`codespan_reporting`] diagnostics keyed by
//! [`File`]. They are created with the syntax `messages.at(span).some_message()`
//! where every kind of message is a method on [`MessageAdder`], grouped by the
//! pass which produces it.

mod lex;
mod parse;

#[cfg(test)]
mod tests;

pub use self::parse::one_of;

use codespan_reporting::diagnostic::{Diagnostic, Severity};

use crate::source::{File, Span};

#[derive(Debug, Default)]
pub struct Messages {
    pub msgs: Vec<Diagnostic<File>>,
}

impl Messages {
    pub fn new() -> Self {
        Self { msgs: Vec::new() }
    }

    #[must_use]
    pub fn at(&mut self, span: Span) -> MessageAdder {
        MessageAdder {
            msgs: self,
            at: span,
        }
    }

    pub fn merge(&mut self, other: Messages) {
        self.msgs.extend(other.msgs);
    }

    pub fn is_empty(&self) -> bool {
        self.msgs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.msgs.len()
    }

    /// Returns `true` if any message is an error (or worse).
    pub fn has_errors(&self) -> bool {
        self.msgs
            .iter()
            .any(|diag| diag.severity >= Severity::Error)
    }
}

impl IntoIterator for Messages {
    type Item = Diagnostic<File>;
    type IntoIter = std::vec::IntoIter<Diagnostic<File>>;

    fn into_iter(self) -> Self::IntoIter {
        self.msgs.into_iter()
    }
}

#[derive(Debug)]
pub struct MessageAdder<'a> {
    msgs: &'a mut Messages,
    at: Span,
}

impl<'a> MessageAdder<'a> {
    fn add(&mut self, diag: Diagnostic<File>) {
        self.msgs.msgs.push(diag);
    }
}
