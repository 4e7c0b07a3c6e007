//! Line/column source positions.
//!
//! Positions follow the front-end convention the program trees are produced
//! with: lines are 1-based, columns are 0-based.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single point in the source text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[must_use]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column + 1)
    }
}

/// The span a node occupies in the source, as start and end positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceLocation {
    pub start: Position,
    pub end: Position,
}

impl SourceLocation {
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        SourceLocation { start, end }
    }

    /// A location covering a single line, used by synthesized nodes.
    #[must_use]
    pub const fn line(line: u32) -> Self {
        SourceLocation {
            start: Position::new(line, 0),
            end: Position::new(line, 0),
        }
    }

    /// Line the node starts on.
    #[must_use]
    pub const fn start_line(&self) -> u32 {
        self.start.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display_is_one_based_column() {
        assert_eq!(Position::new(3, 0).to_string(), "3:1");
        assert_eq!(Position::new(10, 7).to_string(), "10:8");
    }

    #[test]
    fn test_line_location() {
        let loc = SourceLocation::line(4);
        assert_eq!(loc.start_line(), 4);
        assert_eq!(loc.start, loc.end);
    }
}
