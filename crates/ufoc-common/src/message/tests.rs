use codespan_reporting::diagnostic::{LabelStyle, Severity};

use super::parse::one_of;
use super::Messages;
use crate::source::{Position, Span};

fn span() -> Span {
    let start = Position::START.advance("version ");
    Span::new(3, start, start.advance("x"))
}

#[test]
fn one_of_lists_alternatives() {
    assert_eq!("nothing", one_of(Vec::<String>::new()));
    assert_eq!("`{`", one_of(["`{`"]));
    assert_eq!("`{` or identifier", one_of(["`{`", "identifier"]));
    assert_eq!(
        "string, number, or identifier",
        one_of(["string", "number", "identifier"])
    );
}

#[test]
fn messages_carry_code_and_primary_label() {
    let mut messages = Messages::new();
    messages.at(span()).lex_invalid_character('@');

    assert!(messages.has_errors());
    assert_eq!(1, messages.len());

    let diag = &messages.msgs[0];
    assert_eq!(Severity::Error, diag.severity);
    assert_eq!(Some("EL00"), diag.code.as_deref());
    assert_eq!("invalid character '@'", diag.message);

    let label = &diag.labels[0];
    assert_eq!(LabelStyle::Primary, label.style);
    assert_eq!(3, label.file_id);
    assert_eq!(8..9, label.range);
}

#[test]
fn unexpected_token_names_expectations() {
    let mut messages = Messages::new();
    messages
        .at(span())
        .parse_unexpected_token(["`:`", "`?`"], "`=`");

    let diag = &messages.msgs[0];
    assert_eq!(Some("EP00"), diag.code.as_deref());
    assert_eq!("unexpected `=`", diag.message);
    assert_eq!("expected `:` or `?`", diag.labels[0].message);
}

#[test]
fn merged_messages_keep_order() {
    let mut first = Messages::new();
    first.at(span()).lex_invalid_escape();

    let mut second = Messages::new();
    second.at(span()).parse_too_deep(4);

    first.merge(second);

    let codes: Vec<_> = first
        .into_iter()
        .map(|diag| diag.code.unwrap_or_default())
        .collect();
    assert_eq!(vec!["EL01", "EP03"], codes);
}
