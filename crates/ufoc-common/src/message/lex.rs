use codespan_reporting::diagnostic::{Diagnostic, Label};

use super::MessageAdder;

const INVALID_CHARACTER: &str = "EL00";
const INVALID_ESCAPE: &str = "EL01";
const UNTERMINATED: &str = "EL02";

impl<'a> MessageAdder<'a> {
    pub fn lex_invalid_character(&mut self, character: char) {
        let labels = vec![Label::primary(self.at.file, self.at)];

        self.add(
            Diagnostic::error()
                .with_code(INVALID_CHARACTER)
                .with_message(format!("invalid character {character:?}"))
                .with_labels(labels),
        );
    }

    pub fn lex_invalid_escape(&mut self) {
        let labels = vec![Label::primary(self.at.file, self.at)];
        let notes = vec![String::from(
            r#"valid escapes are \", \\, \/, \b, \f, \n, \r, \t and \uXXXX"#,
        )];

        self.add(
            Diagnostic::error()
                .with_code(INVALID_ESCAPE)
                .with_message("invalid escape sequence in string")
                .with_labels(labels)
                .with_notes(notes),
        );
    }

    pub fn lex_unterminated(&mut self, what: impl AsRef<str>) {
        let labels = vec![Label::primary(self.at.file, self.at).with_message("starts here")];

        self.add(
            Diagnostic::error()
                .with_code(UNTERMINATED)
                .with_message(format!("unterminated {}", what.as_ref()))
                .with_labels(labels),
        );
    }
}
