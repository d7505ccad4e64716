//! Scan primitives shared by every grammar.
//!
//! Set-membership helpers take the accepted characters as a `&str`, so
//! `s.accept("+-")` reads the way the grammar is written down. End of input
//! is never a member of any set.
//!
//! The numeric scanner is a lexical pre-filter, not a validator: it accepts
//! `.`, `0x` and `089`, and leaves their rejection to whatever parses the
//! numeric value. It does refuse a number that runs straight into a letter,
//! digit or underscore (`123abc`), so such input never becomes a truncated
//! number token.

use std::fmt;

use crate::{Next, Scanner, ScanError, State, TokenKind};

const DECIMAL_DIGITS: &str = "0123456789";
const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

impl<'src, K: TokenKind> Scanner<'src, K> {
    /// Consume the next code point if it is in `valid`.
    pub fn accept(&mut self, valid: &str) -> bool {
        match self.advance() {
            Some(ch) if valid.contains(ch) => true,
            _ => {
                self.backup();
                false
            }
        }
    }

    /// Consume code points while they are in `valid`.
    ///
    /// Stops in front of the first non-member, so a second call with the
    /// same set consumes nothing.
    pub fn accept_run(&mut self, valid: &str) {
        while matches!(self.advance(), Some(ch) if valid.contains(ch)) {}
        self.backup();
    }

    /// Consume code points while `pred` holds; returns how many.
    pub fn accept_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while matches!(self.advance(), Some(ch) if pred(ch)) {
            count += 1;
        }
        self.backup();
        count
    }

    /// Consume `literal` if it comes next; otherwise leave the input as is.
    pub fn accept_literal(&mut self, literal: &str) -> bool {
        self.cursor_mut().accept_literal(literal)
    }

    /// Returns `true` if `literal` comes next, without consuming it.
    pub fn peek_literal(&self, literal: &str) -> bool {
        self.cursor().peek_literal(literal)
    }

    /// Scan a numeric literal into the pending span.
    ///
    /// Grammar: optional sign, optional `0x`/`0X` prefix (hex digits from
    /// then on), digits, optional `.` and digits, optional `e`/`E` with
    /// optional sign and decimal digits.
    ///
    /// Returns `false` if the literal is followed by an alphanumeric code
    /// point. That whole alphanumeric run is consumed, so the pending span
    /// shows the offending text.
    pub fn scan_number(&mut self) -> bool {
        self.accept("+-");
        let mut digits = DECIMAL_DIGITS;
        if self.accept("0") && self.accept("xX") {
            digits = HEX_DIGITS;
        }
        self.accept_run(digits);
        if self.accept(".") {
            self.accept_run(digits);
        }
        if self.accept("eE") {
            self.accept("+-");
            self.accept_run(DECIMAL_DIGITS);
        }
        if self.peek().is_some_and(is_alphanumeric) {
            self.accept_while(is_alphanumeric);
            return false;
        }
        true
    }

    /// Number state body: scan a number and emit it as `kind`, or fail the
    /// scan with [`ScanError::BadNumber`].
    pub fn lex_number(&mut self, kind: K) -> Next<'src, K> {
        if !self.scan_number() {
            let text = self.current_text().to_owned();
            return self.error(ScanError::BadNumber { text });
        }
        self.emit(kind);
        Some(State::top_level())
    }
}

/// Build a state that scans a number and emits it as `kind`.
pub fn number_state<'src, K>(kind: K) -> State<'src, K>
where
    K: TokenKind + Send + Sync + 'src,
{
    State::from_fn(move |s| s.lex_number(kind))
}

/// Build a state that consumes code points while `predicate` accepts them,
/// emits the run as `kind`, and resumes at the top-level state.
///
/// The predicate sees `None` at end of input. It may fail with any
/// displayable diagnostic (say, an unterminated string), which becomes the
/// scan error. End of input always ends the run, even if accepted.
pub fn build_run_state<'src, K, P, E>(kind: K, predicate: P) -> State<'src, K>
where
    K: TokenKind + Send + Sync + 'src,
    P: Fn(Option<char>) -> Result<bool, E> + Send + Sync + 'src,
    E: fmt::Display,
{
    build_run_state_then(kind, predicate, State::top_level())
}

/// Like [`build_run_state`], but continues with `resume` after emitting.
pub fn build_run_state_then<'src, K, P, E>(
    kind: K,
    predicate: P,
    resume: State<'src, K>,
) -> State<'src, K>
where
    K: TokenKind + Send + Sync + 'src,
    P: Fn(Option<char>) -> Result<bool, E> + Send + Sync + 'src,
    E: fmt::Display,
{
    State::from_fn(move |s| {
        loop {
            let ch = s.advance();
            match predicate(ch) {
                Ok(true) if ch.is_some() => {}
                Ok(_) => {
                    s.backup();
                    break;
                }
                Err(err) => return s.error(err),
            }
        }
        s.emit(kind);
        Some(resume.clone())
    })
}

/// Space or tab.
pub fn is_space(ch: char) -> bool {
    ch == ' ' || ch == '\t'
}

/// Carriage return or line feed.
pub fn is_newline(ch: char) -> bool {
    ch == '\r' || ch == '\n'
}

/// Characters that can begin a numeric literal: a sign or a decimal digit.
pub fn is_number_start(ch: char) -> bool {
    ch == '+' || ch == '-' || ch.is_ascii_digit()
}

/// Underscore, letter or decimal digit.
///
/// Other numeric characters (`½`, `²`) are not included, so they end a
/// number or identifier instead of joining it.
pub fn is_alphanumeric(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic() || ch.is_ascii_digit()
}
