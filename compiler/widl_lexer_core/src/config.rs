/// Configuration for a lexer run.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct LexerConfig {
    /// Line number reported for the first line of input.
    pub first_line: u32,
    /// Tokens the background producer may buffer before it blocks. With the
    /// default of 0 every handoff waits for the consumer, so the producer is
    /// never more than one token ahead. Only used by
    /// [`lex_concurrently`](crate::lex_concurrently).
    pub handoff_capacity: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            first_line: 1,
            handoff_capacity: 0,
        }
    }
}

impl LexerConfig {
    /// Create a config for input that starts partway through a larger file.
    pub fn starting_at_line(first_line: u32) -> Self {
        LexerConfig {
            first_line,
            ..Default::default()
        }
    }

    /// Create a config that lets the producer buffer up to `capacity`
    /// tokens ahead of the consumer.
    pub fn buffered(capacity: usize) -> Self {
        LexerConfig {
            handoff_capacity: capacity,
            ..Default::default()
        }
    }
}
