//! The scanner handed to every state function.
//!
//! Owns the [`Cursor`] and publishes tokens. Emitted tokens queue up until
//! the driver ([`Lexer`](crate::Lexer)) hands them to the consumer, in the
//! order they were emitted.
//!
//! # Errors
//!
//! [`error()`](Scanner::error) is the only error channel. It publishes one
//! error token and halts the scanner: anything emitted afterwards is
//! dropped, so an error token is always the last token of its stream.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::{Cursor, LexerConfig, Next, Position, StateFn, Token, TokenKind};

/// Scanning state shared by all state functions of one lexer.
pub struct Scanner<'src, K> {
    cursor: Cursor<'src>,
    /// Emitted but not yet delivered.
    pending: VecDeque<Token<'src, K>>,
    start_state: StateFn<'src, K>,
    is_whitespace: fn(K) -> bool,
    /// Most recent token the classifier did not call whitespace.
    last_significant: Option<Token<'src, K>>,
    last_kind: Option<K>,
    halted: bool,
}

impl<'src, K: TokenKind> Scanner<'src, K> {
    pub fn new(
        input: &'src str,
        start_state: StateFn<'src, K>,
        is_whitespace: fn(K) -> bool,
        config: &LexerConfig,
    ) -> Self {
        Scanner {
            cursor: Cursor::new(input, config.first_line),
            pending: VecDeque::new(),
            start_state,
            is_whitespace,
            last_significant: None,
            last_kind: None,
            halted: false,
        }
    }

    // ─── Cursor ───────────────────────────────────────────────────────

    /// Consume the next code point; `None` at end of input.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        self.cursor.advance()
    }

    /// Undo the most recent [`advance()`](Self::advance).
    #[inline]
    pub fn backup(&mut self) {
        self.cursor.backup();
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.cursor.peek()
    }

    /// Skip the pending span without emitting it.
    #[inline]
    pub fn ignore(&mut self) {
        self.cursor.ignore();
    }

    #[inline]
    pub fn mark_start(&mut self) {
        self.cursor.mark_start();
    }

    /// Text of the token being scanned.
    #[inline]
    pub fn current_text(&self) -> &'src str {
        self.cursor.current_text()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    #[inline]
    pub fn start_position(&self) -> Position {
        self.cursor.start_position()
    }

    pub fn input(&self) -> &'src str {
        self.cursor.input()
    }

    pub fn cursor(&self) -> &Cursor<'src> {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut Cursor<'src> {
        &mut self.cursor
    }

    // ─── Emission ─────────────────────────────────────────────────────

    /// Publish the pending span as a token of `kind`.
    pub fn emit(&mut self, kind: K) {
        let text = self.cursor.current_text();
        self.emit_with(kind, text);
    }

    /// Publish a token of `kind` with `text` in place of the raw span.
    ///
    /// The token still starts where the pending span started, and the
    /// pending span is consumed.
    pub fn emit_with(&mut self, kind: K, text: impl Into<Cow<'src, str>>) {
        let position = self.cursor.start_position();
        self.cursor.mark_start();
        if self.halted {
            trace!(?kind, offset = position.offset, "dropped emit after error");
            return;
        }
        let token = Token::new(kind, position, text);
        trace!(
            ?kind,
            offset = position.offset,
            line = position.line,
            text = %token.text,
            "emit"
        );
        if !(self.is_whitespace)(kind) {
            self.last_significant = Some(token.clone());
        }
        self.last_kind = Some(kind);
        self.pending.push_back(token);
    }

    /// Publish the terminal error token and stop the machine.
    ///
    /// Returns `None` so a state can end with `return s.error(...)`.
    pub fn error(&mut self, message: impl fmt::Display) -> Next<'src, K> {
        let position = self.cursor.start_position();
        if self.halted {
            trace!(%message, "dropped error after error");
            return None;
        }
        let message = message.to_string();
        debug!(offset = position.offset, line = position.line, %message, "scan error");
        self.halted = true;
        self.last_kind = Some(K::ERROR);
        self.pending.push_back(Token::new(K::ERROR, position, message));
        None
    }

    /// Most recent token that is not whitespace according to the grammar.
    pub fn last_significant(&self) -> Option<&Token<'src, K>> {
        self.last_significant.as_ref()
    }

    /// Kind of the most recently emitted token, error tokens included.
    pub fn last_kind(&self) -> Option<K> {
        self.last_kind
    }

    /// Returns `true` once an error token has been emitted.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub(crate) fn start_state(&self) -> StateFn<'src, K> {
        self.start_state
    }

    pub(crate) fn take_pending(&mut self) -> Option<Token<'src, K>> {
        self.pending.pop_front()
    }
}

impl<K: fmt::Debug> fmt::Debug for Scanner<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scanner")
            .field("cursor", &self.cursor)
            .field("pending", &self.pending.len())
            .field("last_kind", &self.last_kind)
            .field("halted", &self.halted)
            .finish_non_exhaustive()
    }
}
