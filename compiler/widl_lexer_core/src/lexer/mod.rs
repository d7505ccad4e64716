//! Pull-based driver for the state machine.
//!
//! Each [`next_token()`](Lexer::next_token) call runs states until a token
//! is available, so scanning never gets more than one state ahead of the
//! consumer and there is no worker to shut down.
//!
//! The stream closes exactly once: when a state returns `None` (end of
//! input, or after [`Scanner::error`]) and every emitted token has been
//! delivered. All later pulls return `None`.

use std::iter::FusedIterator;

use tracing::debug;

use crate::{LexerConfig, Next, Position, Scanner, State, StateFn, Token, TokenKind};

/// A lexer over one input.
#[derive(Debug)]
pub struct Lexer<'src, K> {
    scanner: Scanner<'src, K>,
    state: Next<'src, K>,
    last_position: Option<Position>,
    closed: bool,
}

impl<'src, K: TokenKind> Lexer<'src, K> {
    /// Create a lexer that starts at the grammar's `start` state.
    ///
    /// `is_whitespace` tells the scanner which kinds do not count as the
    /// last significant token; it does not filter the output.
    pub fn new(input: &'src str, start: StateFn<'src, K>, is_whitespace: fn(K) -> bool) -> Self {
        Self::with_config(input, start, is_whitespace, &LexerConfig::default())
    }

    pub fn with_config(
        input: &'src str,
        start: StateFn<'src, K>,
        is_whitespace: fn(K) -> bool,
        config: &LexerConfig,
    ) -> Self {
        Lexer {
            scanner: Scanner::new(input, start, is_whitespace, config),
            state: Some(State::top_level()),
            last_position: None,
            closed: false,
        }
    }

    /// Return the next token, or `None` once the stream is closed.
    ///
    /// An error token is always the last token returned.
    pub fn next_token(&mut self) -> Option<Token<'src, K>> {
        loop {
            if let Some(token) = self.scanner.take_pending() {
                self.last_position = Some(token.position);
                return Some(token);
            }
            let Some(state) = self.state.take() else {
                self.close();
                return None;
            };
            let next = state.run(&mut self.scanner);
            if !self.scanner.is_halted() {
                self.state = next;
            }
        }
    }

    fn close(&mut self) {
        if !self.closed {
            self.closed = true;
            debug!(
                offset = self.scanner.position().offset,
                halted = self.scanner.is_halted(),
                "token stream closed"
            );
        }
    }

    /// Position of the token most recently returned by
    /// [`next_token()`](Self::next_token).
    pub fn last_position(&self) -> Option<Position> {
        self.last_position
    }

    /// Most recent non-whitespace token emitted so far.
    pub fn last_significant(&self) -> Option<&Token<'src, K>> {
        self.scanner.last_significant()
    }

    /// Returns `true` once the stream has been exhausted.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn input(&self) -> &'src str {
        self.scanner.input()
    }
}

impl<'src, K: TokenKind> Iterator for Lexer<'src, K> {
    type Item = Token<'src, K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<K: TokenKind> FusedIterator for Lexer<'_, K> {}

#[cfg(test)]
mod tests;
