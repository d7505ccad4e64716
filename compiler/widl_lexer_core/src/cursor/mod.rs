//! Rune cursor with one-step backtrack.
//!
//! The cursor decodes the input one code point at a time, tracking the byte
//! offset and line number. It remembers the width of the last code point it
//! read so that exactly one [`advance()`](Cursor::advance) can be undone with
//! [`backup()`](Cursor::backup).
//!
//! # Lookahead
//!
//! Anything beyond one rune (literal matching) works on a copy of the cursor
//! and commits the copy only on success. The cursor is [`Copy`], so this
//! costs a few words and keeps the one-step backup record untouched.
//!
//! # Token Spans
//!
//! Besides the read position, the cursor tracks where the pending token
//! started. [`current_text()`](Cursor::current_text) is the slice between
//! the two.

use crate::Position;

/// Rune reader over an in-memory input.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'src> {
    input: &'src str,
    /// Current read position (byte index into `input`).
    pos: usize,
    /// Line containing `pos`.
    line: u32,
    /// Start of the pending token.
    start: usize,
    start_line: u32,
    /// Byte width of the last rune read; zero when there is nothing to undo.
    width: usize,
    /// Whether the last rune read moved `line` forward. Lines saturate at
    /// `u32::MAX`, so a `'\n'` read there does not set this.
    bumped_line: bool,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at offset 0, on line `first_line`.
    pub fn new(input: &'src str, first_line: u32) -> Self {
        Cursor {
            input,
            pos: 0,
            line: first_line,
            start: 0,
            start_line: first_line,
            width: 0,
            bumped_line: false,
        }
    }

    /// Consume and return the next code point.
    ///
    /// Returns `None` at end of input. `None` is never a member of any
    /// accepted set, and a `backup()` after it is a no-op.
    #[inline]
    pub fn advance(&mut self) -> Option<char> {
        let Some(ch) = self.input[self.pos..].chars().next() else {
            self.width = 0;
            self.bumped_line = false;
            return None;
        };
        self.width = ch.len_utf8();
        self.pos += self.width;
        self.bumped_line = false;
        if ch == '\n' {
            if let Some(next) = self.line.checked_add(1) {
                self.line = next;
                self.bumped_line = true;
            }
        }
        Some(ch)
    }

    /// Undo the most recent [`advance()`](Self::advance).
    ///
    /// Only one step is recorded. A second `backup()` without an
    /// intervening `advance()` does nothing.
    #[inline]
    pub fn backup(&mut self) {
        debug_assert!(self.pos >= self.width, "backup past start of input");
        self.pos -= self.width;
        if self.bumped_line {
            self.line -= 1;
        }
        self.width = 0;
        self.bumped_line = false;
    }

    /// Return the next code point without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns `true` if `literal` comes next. Never moves the cursor.
    pub fn peek_literal(&self, literal: &str) -> bool {
        let mut probe = *self;
        probe.eat_literal(literal)
    }

    /// Consume `literal` if it comes next.
    ///
    /// On failure the cursor is left exactly as it was. On success the
    /// backup record refers to the literal's last code point.
    pub fn accept_literal(&mut self, literal: &str) -> bool {
        let mut probe = *self;
        if probe.eat_literal(literal) {
            *self = probe;
            true
        } else {
            false
        }
    }

    fn eat_literal(&mut self, literal: &str) -> bool {
        literal.chars().all(|expected| self.advance() == Some(expected))
    }

    /// Start the pending token at the current position.
    #[inline]
    pub fn mark_start(&mut self) {
        self.start = self.pos;
        self.start_line = self.line;
    }

    /// Discard the pending span (skipped whitespace, comments).
    #[inline]
    pub fn ignore(&mut self) {
        self.mark_start();
    }

    /// Text of the pending token: from its start to the current position.
    #[inline]
    pub fn current_text(&self) -> &'src str {
        &self.input[self.start..self.pos]
    }

    /// Unread remainder of the input.
    pub fn rest(&self) -> &'src str {
        &self.input[self.pos..]
    }

    /// The full input.
    pub fn input(&self) -> &'src str {
        self.input
    }

    /// Current read position.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.pos, self.line)
    }

    /// Where the pending token started.
    #[inline]
    pub fn start_position(&self) -> Position {
        Position::new(self.start, self.start_line)
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Current line number.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}
