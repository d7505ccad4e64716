use pretty_assertions::assert_eq;

use super::Lexer;
use crate::{is_space, LexerConfig, Next, Position, Scanner, State, TokenKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Error,
    Space,
    Word,
    Open,
    Close,
}

impl TokenKind for Kind {
    const ERROR: Self = Kind::Error;
}

fn is_whitespace(kind: Kind) -> bool {
    kind == Kind::Space
}

fn lex_top<'src>(s: &mut Scanner<'src, Kind>) -> Next<'src, Kind> {
    match s.peek() {
        None => None,
        Some(ch) if is_space(ch) => {
            s.accept_run(" \t");
            s.emit(Kind::Space);
            Some(State::top_level())
        }
        Some(ch) if ch.is_alphabetic() => Some(State::new(lex_word)),
        Some('[') => Some(State::new(lex_brackets)),
        Some(ch) => {
            s.advance();
            s.error(format_args!("unexpected character {ch:?}"))
        }
    }
}

fn lex_word<'src>(s: &mut Scanner<'src, Kind>) -> Next<'src, Kind> {
    s.accept_while(char::is_alphabetic);
    s.emit(Kind::Word);
    Some(State::top_level())
}

/// Emits two tokens from one state.
fn lex_brackets<'src>(s: &mut Scanner<'src, Kind>) -> Next<'src, Kind> {
    if !s.accept_literal("[]") {
        return s.error("expected []");
    }
    s.backup();
    s.emit(Kind::Open);
    s.advance();
    s.emit(Kind::Close);
    Some(State::top_level())
}

fn kinds(input: &str) -> Vec<Kind> {
    Lexer::new(input, lex_top, is_whitespace)
        .map(|t| t.kind)
        .collect()
}

// === Driving ===

#[test]
fn empty_input_yields_no_tokens() {
    let mut lexer = Lexer::new("", lex_top, is_whitespace);
    assert!(lexer.next_token().is_none());
    assert!(lexer.is_closed());
}

#[test]
fn tokens_arrive_in_scan_order() {
    assert_eq!(
        kinds("ab []\tcd"),
        vec![
            Kind::Word,
            Kind::Space,
            Kind::Open,
            Kind::Close,
            Kind::Space,
            Kind::Word
        ]
    );
}

#[test]
fn one_state_may_emit_several_tokens() {
    let texts: Vec<String> = Lexer::new("[]", lex_top, is_whitespace)
        .map(|t| t.text.into_owned())
        .collect();
    assert_eq!(texts, vec!["[", "]"]);
}

#[test]
fn exhausted_stream_stays_closed() {
    let mut lexer = Lexer::new("a", lex_top, is_whitespace);
    assert!(lexer.next_token().is_some());
    for _ in 0..3 {
        assert!(lexer.next_token().is_none());
    }
}

#[test]
fn last_position_tracks_returned_token() {
    let mut lexer = Lexer::new("ab cd", lex_top, is_whitespace);
    assert_eq!(lexer.last_position(), None);
    lexer.next_token();
    lexer.next_token();
    assert_eq!(lexer.last_position(), Some(Position::new(2, 1)));
}

#[test]
fn last_significant_is_visible_to_consumer() {
    let mut lexer = Lexer::new("ab ", lex_top, is_whitespace);
    lexer.next_token();
    lexer.next_token();
    assert_eq!(lexer.last_significant().map(|t| &*t.text), Some("ab"));
}

// === Errors ===

#[test]
fn error_token_is_last() {
    let mut lexer = Lexer::new("ab ?cd", lex_top, is_whitespace);
    let tokens: Vec<_> = lexer.by_ref().collect();
    let last = tokens.last().map(|t| (t.kind, t.text.to_string(), t.position));
    assert_eq!(
        last,
        Some((
            Kind::Error,
            "unexpected character '?'".to_owned(),
            Position::new(3, 1)
        ))
    );
    assert_eq!(tokens.len(), 3);
    assert!(lexer.next_token().is_none());
    assert!(lexer.is_closed());
}

#[test]
fn error_from_nested_state_halts() {
    assert_eq!(kinds("a [x"), vec![Kind::Word, Kind::Space, Kind::Error]);
}

/// A misbehaving state that keeps going after reporting an error.
fn lex_stubborn<'src>(s: &mut Scanner<'src, Kind>) -> Next<'src, Kind> {
    s.error("first");
    s.accept_while(|_| true);
    s.emit(Kind::Word);
    Some(State::top_level())
}

#[test]
fn scanner_halt_wins_over_returned_state() {
    let tokens: Vec<_> = Lexer::new("abc", lex_stubborn, is_whitespace).collect();
    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_error());
}

// === Configuration ===

#[test]
fn config_sets_first_line() {
    let lines: Vec<u32> = Lexer::with_config(
        "a b",
        lex_top,
        is_whitespace,
        &LexerConfig::starting_at_line(7),
    )
    .map(|t| t.line())
    .collect();
    assert_eq!(lines, vec![7, 7, 7]);
}

#[test]
fn closure_states_run_like_fn_states() {
    fn start<'src>(s: &mut Scanner<'src, Kind>) -> Next<'src, Kind> {
        if s.peek().is_none() {
            return None;
        }
        Some(State::from_fn(|s: &mut Scanner<'src, Kind>| {
            s.accept_while(|c| c != ' ');
            s.emit(Kind::Word);
            s.accept_run(" ");
            s.ignore();
            Some(State::top_level())
        }))
    }
    let texts: Vec<String> = Lexer::new("x yy zzz", start, is_whitespace)
        .map(|t| t.text.into_owned())
        .collect();
    assert_eq!(texts, vec!["x", "yy", "zzz"]);
}
