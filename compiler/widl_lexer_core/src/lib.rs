//! Generic state-machine lexer engine.
//!
//! This crate knows nothing about any particular grammar. A grammar crate
//! supplies a token-kind type implementing [`TokenKind`], a start state
//! function, and a whitespace classifier; the engine supplies everything
//! else:
//!
//! - [`Cursor`]: rune reader with byte/line tracking and one-step backtrack
//! - [`Scanner`]: owns the cursor and publishes tokens
//! - scan primitives (`accept`, `accept_run`, [`build_run_state`],
//!   `scan_number`, ...) shared by every grammar
//! - [`Lexer`]: pull-based driver for the chain of [`State`]s
//! - [`lex_concurrently`]: the same driver on a background producer thread
//!
//! # Example
//!
//! ```
//! use widl_lexer_core::{Lexer, Next, Scanner, State, TokenKind};
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Kind {
//!     Error,
//!     Word,
//! }
//!
//! impl TokenKind for Kind {
//!     const ERROR: Self = Kind::Error;
//! }
//!
//! fn lex_words<'src>(s: &mut Scanner<'src, Kind>) -> Next<'src, Kind> {
//!     s.accept_run(" ");
//!     s.ignore();
//!     if s.accept_while(char::is_alphabetic) == 0 {
//!         return None;
//!     }
//!     s.emit(Kind::Word);
//!     Some(State::top_level())
//! }
//!
//! let words: Vec<_> = Lexer::new("hello world", lex_words, |_| false)
//!     .map(|token| token.text.into_owned())
//!     .collect();
//! assert_eq!(words, ["hello", "world"]);
//! ```

mod concurrent;
mod config;
mod cursor;
mod error;
mod lexer;
mod position;
mod scan;
mod scanner;
mod state;
mod token;

pub use concurrent::{lex_concurrently, TokenStream};
pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::ScanError;
pub use lexer::Lexer;
pub use position::Position;
pub use scan::{
    build_run_state, build_run_state_then, is_alphanumeric, is_newline, is_number_start,
    is_space, number_state,
};
pub use scanner::Scanner;
pub use state::{Next, State, StateFn};
pub use token::{Token, TokenKind};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=widl_lexer_core=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
