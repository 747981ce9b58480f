//! Source positions and byte spans.

use std::fmt;

/// A location in the source.
///
/// `offset` and `column` count bytes, not characters: a multi-byte UTF-8
/// character advances both by its encoded width. `line` is 1-based and
/// `column` restarts at 0 after every consumed `\n`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: u32,
    /// 1-based line number.
    pub line: u32,
    /// Byte offset within the current line.
    pub column: u32,
}

impl Position {
    /// Start of input: offset 0, line 1, column 0.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 0,
    };

    /// Create a position from its parts.
    pub const fn new(offset: u32, line: u32, column: u32) -> Self {
        Self {
            offset,
            line,
            column,
        }
    }

    /// Step over one decoded character of `width` bytes.
    ///
    /// Offset and column advance first; a newline then bumps the line and
    /// resets the column, so the column observed after `\n` is always 0.
    pub(crate) fn advance(&mut self, ch: char, width: u32) {
        self.offset += width;
        self.column += width;
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Half-open byte range `[start, end)` of a lexeme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub const fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Length in bytes.
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests;
