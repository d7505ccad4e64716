use std::fmt;

/// A location in the input: byte offset plus 1-based line number.
///
/// Ordering compares the byte offset first, which is the scan order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Byte offset from the start of the input.
    pub offset: usize,
    /// Line number; the first line is 1 unless configured otherwise.
    pub line: u32,
}

impl Position {
    pub const fn new(offset: usize, line: u32) -> Self {
        Position { offset, line }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.offset)
    }
}
