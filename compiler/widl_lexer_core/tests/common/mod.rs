//! A small arithmetic grammar used by the integration tests.
//!
//! Numbers, identifiers, `+`/`-`/`*`/`(`/`)` punctuation, whitespace
//! (newlines included) and `#` line comments, which are skipped.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use widl_lexer_core::{
    build_run_state, is_alphanumeric, is_newline, is_space, Lexer, Next, ScanError, Scanner,
    State, Token, TokenKind,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Error,
    Number,
    Ident,
    Punct,
    Whitespace,
}

impl TokenKind for Kind {
    const ERROR: Self = Kind::Error;
}

pub fn is_whitespace(kind: Kind) -> bool {
    kind == Kind::Whitespace
}

pub fn lex_arith<'src>(s: &mut Scanner<'src, Kind>) -> Next<'src, Kind> {
    let Some(ch) = s.peek() else {
        return None;
    };
    match ch {
        _ if is_space(ch) || is_newline(ch) => {
            s.accept_run(" \t\r\n");
            s.emit(Kind::Whitespace);
            Some(State::top_level())
        }
        '#' => {
            while s.advance().is_some_and(|c| c != '\n') {}
            s.backup();
            s.ignore();
            Some(State::top_level())
        }
        '+' | '-' | '*' | '(' | ')' => {
            s.advance();
            s.emit(Kind::Punct);
            Some(State::top_level())
        }
        _ if ch.is_ascii_digit() || ch == '.' => s.lex_number(Kind::Number),
        _ if ch.is_alphabetic() || ch == '_' => Some(ident_state()),
        _ => {
            s.advance();
            s.error(ScanError::UnexpectedChar { ch })
        }
    }
}

fn ident_state<'src>() -> State<'src, Kind> {
    build_run_state(Kind::Ident, |ch: Option<char>| {
        Ok::<_, ScanError>(ch.is_some_and(is_alphanumeric))
    })
}

/// A grammar whose only state is the number scanner, signs included.
pub fn lex_number_only<'src>(s: &mut Scanner<'src, Kind>) -> Next<'src, Kind> {
    if s.peek().is_none() {
        return None;
    }
    s.lex_number(Kind::Number)
}

pub fn lex(input: &str) -> Vec<Token<'_, Kind>> {
    Lexer::new(input, lex_arith, is_whitespace).collect()
}
