use proptest::prelude::*;
use ufoc_common::source::Position;

use super::{tokenize, Keyword, Punct, TokenKind, Tokens};
use crate::error::{Error, Unterminated};

/// The kinds and texts of every token but whitespace and `Eof`.
fn lex(source: &str) -> Vec<(TokenKind, &str)> {
    tokenize(0, source)
        .unwrap()
        .into_iter()
        .filter(|token| !matches!(token.kind, TokenKind::Whitespace | TokenKind::Eof))
        .map(|token| (token.kind, token.text))
        .collect()
}

fn lex_error(source: &str) -> Error {
    tokenize(0, source).unwrap_err()
}

#[test]
fn keywords_and_identifiers() {
    assert_eq!(
        lex("version namespace type enum const pattern deprecated Task"),
        vec![
            (TokenKind::Keyword(Keyword::Version), "version"),
            (TokenKind::Keyword(Keyword::Namespace), "namespace"),
            (TokenKind::Keyword(Keyword::Type), "type"),
            (TokenKind::Keyword(Keyword::Enum), "enum"),
            (TokenKind::Keyword(Keyword::Const), "const"),
            (TokenKind::Keyword(Keyword::Pattern), "pattern"),
            (TokenKind::Keyword(Keyword::Deprecated), "deprecated"),
            (TokenKind::Ident, "Task"),
        ]
    );
}

#[test]
fn keywords_are_word_bounded() {
    assert_eq!(
        lex("types enum2 versioned"),
        vec![
            (TokenKind::Ident, "types"),
            (TokenKind::Ident, "enum2"),
            (TokenKind::Ident, "versioned"),
        ]
    );
}

#[test]
fn numbers() {
    assert_eq!(
        lex("5 -10 +5 3.14 .5"),
        vec![
            (TokenKind::Number, "5"),
            (TokenKind::Number, "-10"),
            (TokenKind::Number, "+5"),
            (TokenKind::Number, "3.14"),
            (TokenKind::Number, ".5"),
        ]
    );
}

#[test]
fn signed_numbers_after_punctuation() {
    assert_eq!(
        lex("x = -1,+0.25:-.5"),
        vec![
            (TokenKind::Ident, "x"),
            (TokenKind::Punct(Punct::Equal), "="),
            (TokenKind::Number, "-1"),
            (TokenKind::Punct(Punct::Comma), ","),
            (TokenKind::Number, "+0.25"),
            (TokenKind::Punct(Punct::Colon), ":"),
            (TokenKind::Number, "-.5"),
        ]
    );
}

#[test]
fn identifiers_do_not_start_with_digits() {
    assert_eq!(
        lex("2abc"),
        vec![(TokenKind::Number, "2"), (TokenKind::Ident, "abc")]
    );
}

#[test]
fn identifiers_do_not_contain_underscores() {
    assert!(matches!(
        lex_error("max_retries"),
        Error::InvalidCharacter { character: '_', .. }
    ));
}

#[test]
fn strings_keep_their_quotes_and_escapes() {
    assert_eq!(
        lex(r#""hello" "a \"quoted\" word" "\\ \/ \b \f \n \r \t" "é""#),
        vec![
            (TokenKind::String, r#""hello""#),
            (TokenKind::String, r#""a \"quoted\" word""#),
            (TokenKind::String, r#""\\ \/ \b \f \n \r \t""#),
            (TokenKind::String, r#""é""#),
        ]
    );
}

#[test]
fn docstrings_span_lines_and_contain_quotes() {
    let source = "\"\"\"A \"quoted\" word,\nand 'another'.\"\"\"";
    assert_eq!(lex(source), vec![(TokenKind::Docstring, source)]);
}

#[test]
fn empty_docstring() {
    assert_eq!(
        lex(r#""""""""#),
        vec![(TokenKind::Docstring, r#""""""""#)]
    );
}

#[test]
fn comments() {
    assert_eq!(
        lex("// line comment\n/* block * comment\n spanning lines */"),
        vec![
            (TokenKind::LineComment, "// line comment"),
            (TokenKind::Newline, "\n"),
            (TokenKind::BlockComment, "/* block * comment\n spanning lines */"),
        ]
    );
}

#[test]
fn block_comments_end_at_the_first_terminator() {
    assert_eq!(
        lex("/* a /* b */ c /**/"),
        vec![
            (TokenKind::BlockComment, "/* a /* b */"),
            (TokenKind::Ident, "c"),
            (TokenKind::BlockComment, "/**/"),
        ]
    );
}

#[test]
fn punctuation() {
    let kinds: Vec<_> = lex("{ } ( ) [ ] : = , ?")
        .into_iter()
        .map(|(kind, _)| kind)
        .collect();

    assert_eq!(
        kinds,
        vec![
            TokenKind::Punct(Punct::LeftBrace),
            TokenKind::Punct(Punct::RightBrace),
            TokenKind::Punct(Punct::LeftParen),
            TokenKind::Punct(Punct::RightParen),
            TokenKind::Punct(Punct::LeftBracket),
            TokenKind::Punct(Punct::RightBracket),
            TokenKind::Punct(Punct::Colon),
            TokenKind::Punct(Punct::Equal),
            TokenKind::Punct(Punct::Comma),
            TokenKind::Punct(Punct::Question),
        ]
    );
}

#[test]
fn single_line_break_is_a_newline() {
    assert_eq!(
        lex("a \n\tb"),
        vec![
            (TokenKind::Ident, "a"),
            (TokenKind::Newline, " \n\t"),
            (TokenKind::Ident, "b"),
        ]
    );
}

#[test]
fn two_line_breaks_are_one_blank_line() {
    assert_eq!(
        lex("a\n  \n b"),
        vec![
            (TokenKind::Ident, "a"),
            (TokenKind::BlankLine, "\n  \n "),
            (TokenKind::Ident, "b"),
        ]
    );
}

#[test]
fn many_line_breaks_are_one_blank_line() {
    assert_eq!(
        lex("a\r\n\n\r\n\nb"),
        vec![
            (TokenKind::Ident, "a"),
            (TokenKind::BlankLine, "\r\n\n\r\n\n"),
            (TokenKind::Ident, "b"),
        ]
    );
}

#[test]
fn line_comments_stop_before_the_line_break() {
    assert_eq!(
        lex("// a\n\nb"),
        vec![
            (TokenKind::LineComment, "// a"),
            (TokenKind::BlankLine, "\n\n"),
            (TokenKind::Ident, "b"),
        ]
    );
}

#[test]
fn ends_with_eof() {
    let tokens = tokenize(0, "version 1\n").unwrap();
    let last = tokens.last().unwrap();

    assert_eq!(last.kind, TokenKind::Eof);
    assert_eq!(last.text, "");
    assert_eq!(last.span.start, last.span.end);
    assert_eq!(last.span.start.offset, 10);
    assert_eq!(last.span.start.line, 2);
    assert_eq!(last.span.start.column, 1);
}

#[test]
fn empty_source_is_just_eof() {
    let tokens = tokenize(0, "").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

#[test]
fn token_positions() {
    let tokens = tokenize(2, "namespace A {\n  type").unwrap();
    let ty = tokens
        .iter()
        .find(|token| token.kind == TokenKind::Keyword(Keyword::Type))
        .unwrap();

    assert_eq!(ty.span.file, 2);
    assert_eq!(
        ty.span.start,
        Position {
            offset: 16,
            line: 2,
            column: 3
        }
    );
    assert_eq!(ty.span.end.offset, 20);
}

#[test]
fn invalid_character() {
    let error = lex_error("type Task { id: string; }");
    match error {
        Error::InvalidCharacter { span, character } => {
            assert_eq!(character, ';');
            assert_eq!(span.start.offset, 22);
            assert_eq!(span.end.offset, 23);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn invalid_multibyte_character() {
    let error = lex_error("a é");
    match error {
        Error::InvalidCharacter { span, character } => {
            assert_eq!(character, 'é');
            assert_eq!(span.start.column, 3);
            assert_eq!(span.end.offset, 4);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn unterminated_string() {
    let error = lex_error("const A: string = \"abc\nnext");
    match error {
        Error::Unterminated { span, what } => {
            assert_eq!(what, Unterminated::String);
            assert_eq!(span.start.offset, 18);
            assert_eq!(span.end.offset, 19);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn unterminated_docstring() {
    assert!(matches!(
        lex_error("\"\"\"never closed\n\nnamespace A {}"),
        Error::Unterminated {
            what: Unterminated::Docstring,
            ..
        }
    ));
}

#[test]
fn unterminated_block_comment() {
    let error = lex_error("a /* b * /");
    match error {
        Error::Unterminated { span, what } => {
            assert_eq!(what, Unterminated::BlockComment);
            assert_eq!(span.start.offset, 2);
            assert_eq!(span.end.offset, 4);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn invalid_escapes() {
    let error = lex_error(r#"x "ab\qc""#);
    match error {
        Error::InvalidEscape { span } => {
            assert_eq!(span.start.offset, 5);
            assert_eq!(span.end.offset, 7);
        }
        other => panic!("unexpected error {other:?}"),
    }

    let error = lex_error(r#""\u12g4""#);
    match error {
        Error::InvalidEscape { span } => {
            assert_eq!(span.start.offset, 1);
            assert_eq!(span.end.offset, 5);
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn iterator_stops_after_an_error() {
    let mut tokens = Tokens::new(0, "a $ b");
    assert!(matches!(tokens.next(), Some(Ok(_))));
    assert!(matches!(tokens.next(), Some(Ok(_))));
    assert!(matches!(tokens.next(), Some(Err(_))));
    assert!(tokens.next().is_none());
}

#[test]
fn iterator_ends_after_eof() {
    let mut tokens = Tokens::new(0, "a");
    assert!(matches!(tokens.next(), Some(Ok(token)) if token.kind == TokenKind::Ident));
    assert!(matches!(tokens.next(), Some(Ok(token)) if token.kind == TokenKind::Eof));
    assert!(tokens.next().is_none());
}

proptest! {
    #[test]
    fn tokenization_is_lossless(source in r#"(version|namespace|type|[a-zA-Z]{1,6}|[-+]?[0-9]{0,3}\.?[0-9]{1,3}|"[a-z ]+"|"""[a-z \n]*"""|//[a-z ]*\n|/\*[a-z \n]*\*/|[{}()\[\]:=,?]|[ \t]{1,3}|\r?\n|\n\n){0,40}"#) {
        let tokens = tokenize(0, &source).unwrap();
        let text: String = tokens.iter().map(|token| token.text).collect();
        prop_assert_eq!(text, source);
    }

    #[test]
    fn spans_are_contiguous(source in r#"([a-z]{1,4}|[0-9]{1,3}|[{}:?]|[ \t]{1,2}|\n|\n\n){0,30}"#) {
        let tokens = tokenize(0, &source).unwrap();
        let mut end = Position::START;

        for token in &tokens {
            prop_assert_eq!(token.span.start, end);
            prop_assert_eq!(&source[token.span.start.offset..token.span.end.offset], token.text);
            end = token.span.end;
        }

        prop_assert_eq!(end.offset, source.len());
    }
}
