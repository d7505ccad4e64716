//! Ready-made scan diagnostics.
//!
//! Scan errors never travel as `Result::Err` past the scanner: they are
//! formatted into the terminal error token by
//! [`Scanner::error`](crate::Scanner::error). `ScanError` only gives the
//! common causes a consistent wording; any `Display` value works.

use thiserror::Error;

/// A lexical scan error.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum ScanError {
    /// A numeric literal ran straight into an identifier character.
    #[error("bad number syntax: {text:?}")]
    BadNumber { text: String },

    /// No state knows what to do with this character.
    #[error("unexpected character {ch:?}")]
    UnexpectedChar { ch: char },

    /// Input ended in the middle of a construct.
    #[error("unexpected end of input in {context}")]
    UnexpectedEof { context: &'static str },
}
