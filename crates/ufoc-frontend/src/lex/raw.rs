use std::ops::Range;

use logos::{Lexer, Logos};

/// Raw tokens are the direct output of the lexer. Every byte of the source
/// belongs to exactly one raw token, including whitespace and line breaks, so
/// the source can always be reconstructed from them.
///
/// Tokens whose extent cannot be described by a regex (block comments,
/// docstrings and strings) are lexed by hand. When they fail, they leave a
/// [`Fault`] in the lexer extras explaining why.
#[derive(Logos, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[logos(extras = Option<Fault>)]
pub enum RawToken {
    #[regex(r"//[^\r\n]*")]
    LineComment,

    #[token("/*", lex_block_comment)]
    BlockComment,

    #[token(r#"""""#, lex_docstring)]
    Docstring,

    #[token("version")]
    Version,
    #[token("namespace")]
    Namespace,
    #[token("type")]
    Type,
    #[token("enum")]
    Enum,
    #[token("const")]
    Const,
    #[token("pattern")]
    Pattern,
    #[token("deprecated")]
    Deprecated,

    #[regex(r"[-+]?[0-9]+")]
    #[regex(r"[-+]?[0-9]*\.[0-9]+")]
    Number,

    #[token("\"", lex_string)]
    String,

    #[regex(r"[a-zA-Z][a-zA-Z0-9]*")]
    Ident,

    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token(":")]
    Colon,
    #[token("=")]
    Equal,
    #[token(",")]
    Comma,
    #[token("?")]
    Question,

    #[regex(r"[ \t]+")]
    Whitespace,

    // Two or more line breaks, with any horizontal whitespace around them.
    #[regex(r"[ \t]*\r?\n[ \t]*(\r?\n[ \t]*)+")]
    BlankLine,

    #[regex(r"[ \t]*\r?\n[ \t]*")]
    Newline,

    #[error]
    Error,
}

/// Why a hand-lexed token failed. Ranges are relative to the start of the
/// failed token.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Fault {
    UnterminatedBlockComment,
    UnterminatedDocstring,
    UnterminatedString,
    InvalidEscape(Range<usize>),
}

/// Lex a block comment delimited by `/* ... */`. The comment ends at the first
/// `*/`, so block comments do not nest.
fn lex_block_comment(lexer: &mut Lexer<RawToken>) -> bool {
    match lexer.remainder().find("*/") {
        Some(end) => {
            lexer.bump(end + 2);
            true
        }

        None => fail_to_end(lexer, Fault::UnterminatedBlockComment),
    }
}

/// Lex a docstring delimited by `"""`. Anything but a triple quote may appear
/// inside, including line breaks and single or double quotes.
fn lex_docstring(lexer: &mut Lexer<RawToken>) -> bool {
    match lexer.remainder().find(r#"""""#) {
        Some(end) => {
            lexer.bump(end + 3);
            true
        }

        None => fail_to_end(lexer, Fault::UnterminatedDocstring),
    }
}

/// Lex a string literal, checking that every escape is one of `\"`, `\\`,
/// `\/`, `\b`, `\f`, `\n`, `\r`, `\t` or `\u` followed by four hex digits.
fn lex_string(lexer: &mut Lexer<RawToken>) -> bool {
    // Offsets in `remainder` are one byte behind offsets in the token, since
    // the opening quote has already been consumed.
    let mut chars = lexer.remainder().char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                lexer.bump(i + 1);
                return true;
            }

            '\\' => match chars.next() {
                Some((_, '"' | '\\' | '/' | 'b' | 'f' | 'n' | 'r' | 't')) => {}

                Some((_, 'u')) => {
                    let mut end = i + 2;
                    for _ in 0..4 {
                        match chars.next() {
                            Some((j, digit)) if digit.is_ascii_hexdigit() => end = j + 1,
                            Some(_) | None => {
                                lexer.bump(end);
                                return fail(lexer, Fault::InvalidEscape(i + 1..end + 1));
                            }
                        }
                    }
                }

                Some((j, other)) => {
                    let end = j + other.len_utf8();
                    lexer.bump(end);
                    return fail(lexer, Fault::InvalidEscape(i + 1..end + 1));
                }

                None => break,
            },

            _ => {}
        }
    }

    fail_to_end(lexer, Fault::UnterminatedString)
}

/// Consume the rest of the source into the failed token.
fn fail_to_end(lexer: &mut Lexer<RawToken>, fault: Fault) -> bool {
    let rest = lexer.remainder().len();
    lexer.bump(rest);
    fail(lexer, fault)
}

fn fail(lexer: &mut Lexer<RawToken>, fault: Fault) -> bool {
    lexer.extras = Some(fault);
    false
}
