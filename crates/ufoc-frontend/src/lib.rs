//! The front end of the contract definition language: a tokenizer and a
//! parser producing a position annotated [`ast::Document`].
//!
//! Parsing is a pure function of its input. It either produces a complete
//! document or fails with exactly one [`Error`], and never returns a partial
//! tree.

pub mod ast;
pub mod lex;
pub mod parse;
pub mod pretty;

mod error;

pub use error::{Error, ErrorKind, Unterminated};

use log::{info, trace};
use ufoc_common::message::Messages;
use ufoc_common::source::File;
use ufoc_common::Driver;

use crate::ast::Document;
use crate::parse::Parser;

/// How many inline types may be nested inside each other by default.
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ParseOptions {
    /// The deepest nesting of inline types accepted before failing.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Parse a document with the default options.
pub fn parse(file: File, source: &str) -> Result<Document, Error> {
    parse_with(file, source, ParseOptions::default())
}

pub fn parse_with(file: File, source: &str, options: ParseOptions) -> Result<Document, Error> {
    info!("parsing file with id {file}");

    let tokens = lex::tokenize(file, source)?;
    let mut parser = Parser::new(tokens, options);
    let document = parser.parse_document()?;

    trace!("done parsing file {file}");

    Ok(document)
}

/// Parse a document, reporting any error to the driver instead of returning
/// it.
pub fn check(
    driver: &mut impl Driver,
    file: File,
    source: &str,
    options: ParseOptions,
) -> Option<Document> {
    match parse_with(file, source, options) {
        Ok(document) => Some(document),
        Err(error) => {
            let mut messages = Messages::new();
            error.report(&mut messages);
            driver.report(messages);
            None
        }
    }
}
