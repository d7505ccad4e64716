//! Background-producer driver.
//!
//! Runs the state machine on a scoped thread that hands tokens to the
//! consumer over a bounded crossbeam channel. The consumer blocks until the
//! producer has emitted, failed, or finished. By default the channel has no
//! buffer: each handoff waits for the consumer, so the producer holds at
//! most one token the consumer has not taken.
//! [`LexerConfig::buffered`] lets it run further ahead.
//!
//! # Shutdown
//!
//! The consumer only sees the stream inside the closure passed to
//! [`lex_concurrently`]. When the closure returns, the receiving end is
//! dropped, the producer's next handoff fails, and the producer exits before
//! the scope joins it. A consumer that stops early never strands the
//! producer.

use std::iter::FusedIterator;
use std::thread;

use crossbeam::channel::{self, Receiver, Sender};
use tracing::debug;

use crate::{Lexer, LexerConfig, Position, StateFn, Token, TokenKind};

/// Consumer end of a concurrent lexer.
#[derive(Debug)]
pub struct TokenStream<'src, K> {
    tokens: Receiver<Token<'src, K>>,
    last_position: Option<Position>,
}

impl<'src, K: TokenKind> TokenStream<'src, K> {
    /// Wait for the next token; `None` once the producer has finished.
    pub fn next_token(&mut self) -> Option<Token<'src, K>> {
        let token = self.tokens.recv().ok()?;
        self.last_position = Some(token.position);
        Some(token)
    }

    /// Position of the token most recently returned.
    pub fn last_position(&self) -> Option<Position> {
        self.last_position
    }
}

impl<'src, K: TokenKind> Iterator for TokenStream<'src, K> {
    type Item = Token<'src, K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

impl<K: TokenKind> FusedIterator for TokenStream<'_, K> {}

/// Lex `input` on a background thread while `consume` pulls tokens.
///
/// Returns whatever `consume` returns. If the producer panics, the panic is
/// resumed on the calling thread once `consume` is done.
pub fn lex_concurrently<'src, K, R>(
    input: &'src str,
    start: StateFn<'src, K>,
    is_whitespace: fn(K) -> bool,
    config: &LexerConfig,
    consume: impl FnOnce(&mut TokenStream<'src, K>) -> R,
) -> R
where
    K: TokenKind + Send + 'src,
{
    let (sender, receiver) = channel::bounded(config.handoff_capacity);
    let lexer = Lexer::with_config(input, start, is_whitespace, config);

    thread::scope(|scope| {
        let producer = scope.spawn(move || produce(lexer, &sender));

        let mut stream = TokenStream {
            tokens: receiver,
            last_position: None,
        };
        let result = consume(&mut stream);
        drop(stream);

        if let Err(payload) = producer.join() {
            std::panic::resume_unwind(payload);
        }
        result
    })
}

fn produce<'src, K: TokenKind>(lexer: Lexer<'src, K>, sender: &Sender<Token<'src, K>>) {
    for token in lexer {
        if sender.send(token).is_err() {
            debug!("consumer dropped the token stream; producer exiting");
            return;
        }
    }
}
