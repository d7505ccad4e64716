//! State functions: the units of the scanning state machine.
//!
//! A state consumes input through the [`Scanner`], emits zero or more
//! tokens, and returns the state to run next. Returning `None` ends the
//! scan.

use std::fmt;
use std::sync::Arc;

use crate::{Scanner, TokenKind};

/// What a state returns: the next state, or `None` to stop.
pub type Next<'src, K> = Option<State<'src, K>>;

/// A state written as a plain function.
pub type StateFn<'src, K> = fn(&mut Scanner<'src, K>) -> Next<'src, K>;

type SharedStateFn<'src, K> = dyn Fn(&mut Scanner<'src, K>) -> Next<'src, K> + Send + Sync + 'src;

/// A runnable state.
///
/// Grammar states are usually plain functions ([`State::new`]). States that
/// capture data, such as those built by
/// [`build_run_state`](crate::build_run_state), are shared closures
/// ([`State::from_fn`]). Cloning is cheap in both cases.
pub struct State<'src, K>(Repr<'src, K>);

enum Repr<'src, K> {
    Plain(StateFn<'src, K>),
    Shared(Arc<SharedStateFn<'src, K>>),
}

impl<'src, K: TokenKind> State<'src, K> {
    pub const fn new(f: StateFn<'src, K>) -> Self {
        State(Repr::Plain(f))
    }

    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&mut Scanner<'src, K>) -> Next<'src, K> + Send + Sync + 'src,
    {
        State(Repr::Shared(Arc::new(f)))
    }

    /// The fixed entry state. It delegates to the grammar's start function,
    /// so "go back to scanning" is the same for every grammar.
    pub fn top_level() -> Self {
        State::new(scan_top_level)
    }

    /// Run this state once.
    #[inline]
    pub fn run(&self, scanner: &mut Scanner<'src, K>) -> Next<'src, K> {
        match &self.0 {
            Repr::Plain(f) => f(scanner),
            Repr::Shared(f) => f(scanner),
        }
    }
}

fn scan_top_level<'src, K: TokenKind>(scanner: &mut Scanner<'src, K>) -> Next<'src, K> {
    let start = scanner.start_state();
    start(scanner)
}

impl<'src, K: TokenKind> From<StateFn<'src, K>> for State<'src, K> {
    fn from(f: StateFn<'src, K>) -> Self {
        State::new(f)
    }
}

impl<K> Clone for State<'_, K> {
    fn clone(&self) -> Self {
        State(match &self.0 {
            Repr::Plain(f) => Repr::Plain(*f),
            Repr::Shared(f) => Repr::Shared(Arc::clone(f)),
        })
    }
}

impl<K> fmt::Debug for State<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Plain(_) => f.write_str("State(fn)"),
            Repr::Shared(_) => f.write_str("State(closure)"),
        }
    }
}
