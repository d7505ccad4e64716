//! Token kinds and lexemes.
//!
//! The engine is generic over the grammar's token-kind type. The only kind
//! it needs to know about is the error kind, which terminates every stream
//! that ends in a scan error.

use std::borrow::Cow;
use std::fmt;

use crate::Position;

/// A grammar's token classification.
///
/// Implemented by a plain fieldless enum in practice. The engine treats
/// kinds as opaque tags and only ever constructs [`TokenKind::ERROR`].
pub trait TokenKind: Copy + Eq + fmt::Debug {
    /// Kind of the diagnostic token that ends a failed scan.
    const ERROR: Self;
}

/// A classified, positioned substring of the input.
///
/// `text` borrows the input for ordinary tokens. It is owned when a state
/// function supplied its own value via
/// [`Scanner::emit_with`](crate::Scanner::emit_with), and for error tokens,
/// where it holds the diagnostic message instead of matched text.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src, K> {
    pub kind: K,
    /// Start of the token.
    pub position: Position,
    pub text: Cow<'src, str>,
}

impl<'src, K: TokenKind> Token<'src, K> {
    pub fn new(kind: K, position: Position, text: impl Into<Cow<'src, str>>) -> Self {
        Token {
            kind,
            position,
            text: text.into(),
        }
    }

    /// Returns `true` for the terminal diagnostic token.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == K::ERROR
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.position.line
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    /// Detach the token from the input's lifetime.
    pub fn into_owned(self) -> Token<'static, K> {
        Token {
            kind: self.kind,
            position: self.position,
            text: Cow::Owned(self.text.into_owned()),
        }
    }
}

impl<K: fmt::Debug> fmt::Display for Token<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inp:{}:{} - {:?}({})",
            self.position.line, self.position.offset, self.kind, self.text
        )
    }
}
