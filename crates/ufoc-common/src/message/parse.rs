use std::fmt::Display;

use codespan_reporting::diagnostic::{Diagnostic, Label};

use super::MessageAdder;

const UNEXPECTED_TOKEN: &str = "EP00";
const UNEXPECTED_END: &str = "EP01";
const INVALID_VERSION: &str = "EP02";
const TOO_DEEP: &str = "EP03";

impl<'a> MessageAdder<'a> {
    pub fn parse_unexpected_token<E: Display>(
        &mut self,
        expected: impl IntoIterator<Item = E>,
        actual: impl Display,
    ) {
        let labels = vec![Label::primary(self.at.file, self.at)
            .with_message(format!("expected {}", one_of(expected)))];

        self.add(
            Diagnostic::error()
                .with_code(UNEXPECTED_TOKEN)
                .with_message(format!("unexpected {actual}"))
                .with_labels(labels),
        );
    }

    pub fn parse_unexpected_end<E: Display>(&mut self, expected: impl IntoIterator<Item = E>) {
        let labels = vec![Label::primary(self.at.file, self.at)
            .with_message(format!("expected {}", one_of(expected)))];
        let notes = vec![String::from("note: some construct was left open")];

        self.add(
            Diagnostic::error()
                .with_code(UNEXPECTED_END)
                .with_message("unexpected end of input")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn parse_invalid_version(&mut self, text: impl AsRef<str>) {
        let labels = vec![Label::primary(self.at.file, self.at)];
        let notes = vec![String::from(
            "note: the version is a non-negative integer, like 'version 1'",
        )];

        self.add(
            Diagnostic::error()
                .with_code(INVALID_VERSION)
                .with_message(format!("invalid version number '{}'", text.as_ref()))
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn parse_too_deep(&mut self, limit: usize) {
        let labels = vec![Label::primary(self.at.file, self.at)];
        let notes = vec![format!(
            "help: inline types may be nested at most {limit} levels deep"
        )];

        self.add(
            Diagnostic::error()
                .with_code(TOO_DEEP)
                .with_message("inline types are nested too deeply")
                .with_labels(labels)
                .with_notes(notes),
        );
    }
}

/// Render a list of alternatives as `a`, `a or b` or `a, b, or c`.
pub fn one_of<E: Display>(expected: impl IntoIterator<Item = E>) -> String {
    let expected: Vec<_> = expected.into_iter().map(|e| e.to_string()).collect();

    match expected.as_slice() {
        [] => String::from("nothing"),
        [one] => one.clone(),
        [a, b] => format!("{a} or {b}"),
        [init @ .., last] => format!("{}, or {last}", init.join(", ")),
    }
}
