//! Source position tracking for error messages.

use std::fmt;

use serde::Serialize;

/// A position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// Line number (1-indexed)
    pub line: u32,
    /// Column number (1-indexed, in characters not bytes)
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The first character of a text.
    pub fn start() -> Self {
        Self::new(1, 1)
    }

    /// Translate `rel`, a position inside a text that itself starts at
    /// `self`, into a position in the enclosing text.
    pub fn add(self, rel: Position) -> Position {
        if rel.line <= 1 {
            Position::new(self.line, self.column + rel.column - 1)
        } else {
            Position::new(self.line + rel.line - 1, rel.column)
        }
    }

    /// Advance past one character.
    pub(crate) fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Convert a byte offset to a Position (line/column).
pub fn position_at(source: &str, offset: usize) -> Position {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];

    let line = before.bytes().filter(|&b| b == b'\n').count() as u32 + 1;
    let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = before[last_newline..].chars().count() as u32 + 1;

    Position { line, column }
}
