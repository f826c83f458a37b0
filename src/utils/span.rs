//! Source location tracking for filtered token streams
//!
//! Tokens keep their original begin/end line and column through filtering so
//! the duplicate-matching consumer can report accurate locations even after
//! directives and suppressed regions are stripped.
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position in source text with line and column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Position {
    /// Create a new position
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// Create the starting position (line 1, column 1)
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A span of source text from begin to end position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    /// Begin position (inclusive)
    pub start: Position,
    /// End position (inclusive, as reported by the lexer)
    pub end: Position,
}

impl Span {
    /// Create a new span
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create a span covering part of a single line
    pub fn on_line(line: u32, start_column: u32, end_column: u32) -> Self {
        Self {
            start: Position::new(line, start_column),
            end: Position::new(line, end_column),
        }
    }

    /// Get the begin position of this span
    pub fn start(&self) -> Position {
        self.start
    }

    /// Get the end position of this span
    pub fn end(&self) -> Position {
        self.end
    }

    /// Merge two spans into one covering both
    pub fn merge(self, other: Self) -> Self {
        let start = if self.start <= other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end >= other.end {
            self.end
        } else {
            other.end
        };
        Self { start, end }
    }

    /// Create an unknown/dummy span (useful for synthesized tokens)
    pub fn dummy() -> Self {
        Self {
            start: Position::start(),
            end: Position::start(),
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start.line == self.end.line {
            write!(
                f,
                "{}:{}-{}",
                self.start.line, self.start.column, self.end.column
            )
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_ordering() {
        assert!(Position::new(1, 5) < Position::new(2, 1));
        assert!(Position::new(3, 2) < Position::new(3, 7));
    }

    #[test]
    fn test_span_merge() {
        let a = Span::on_line(1, 1, 5);
        let b = Span::on_line(2, 3, 9);
        let merged = a.merge(b);
        assert_eq!(merged.start, Position::new(1, 1));
        assert_eq!(merged.end, Position::new(2, 9));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::on_line(4, 2, 8).to_string(), "4:2-8");
        let multi = Span::new(Position::new(1, 1), Position::new(2, 3));
        assert_eq!(multi.to_string(), "1:1-2:3");
    }
}
