//! Source positions and their short parenthesized display tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A line/column position within a named source.
///
/// Both coordinates are 1-indexed. A `column` of 0 means the column is not
/// known; the caret and the column part of the display tag are suppressed.
/// An empty `source_name` means the input did not come from a file but from
/// a command-line argument.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct SourcePosition {
    /// The line number (1-indexed).
    pub line: u32,
    /// The column number (1-indexed); 0 when unknown.
    pub column: u32,
    /// The name of the source file; empty for command-line input.
    pub source_name: String,
}

impl SourcePosition {
    /// Creates a position in the given source.
    pub fn new(line: u32, column: u32, source_name: impl Into<String>) -> Self {
        Self {
            line,
            column,
            source_name: source_name.into(),
        }
    }

    /// Returns `true` if a real column is known.
    pub fn has_column(&self) -> bool {
        self.column > 0
    }

    /// Returns `true` if the position refers to a named file rather than
    /// command-line input.
    pub fn is_in_file(&self) -> bool {
        !self.source_name.is_empty()
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.column > 0 {
            write!(f, "({}:{})", self.line, self.column)
        } else {
            write!(f, "({})", self.line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_with_column() {
        let pos = SourcePosition::new(10, 4, "foo.marl");
        assert_eq!(format!("{pos}"), "(10:4)");
    }

    #[test]
    fn display_without_column() {
        let pos = SourcePosition::new(10, 0, "foo.marl");
        assert_eq!(format!("{pos}"), "(10)");
    }

    #[test]
    fn display_ignores_source_name() {
        let pos = SourcePosition::new(3, 7, "");
        assert_eq!(format!("{pos}"), "(3:7)");
    }

    #[test]
    fn has_column() {
        assert!(SourcePosition::new(1, 1, "a.marl").has_column());
        assert!(!SourcePosition::new(1, 0, "a.marl").has_column());
    }

    #[test]
    fn is_in_file() {
        assert!(SourcePosition::new(1, 1, "a.marl").is_in_file());
        assert!(!SourcePosition::new(1, 1, "").is_in_file());
    }

    #[test]
    fn serde_round_trip() {
        let pos = SourcePosition::new(12, 8, "conf/site.marl");
        let json = serde_json::to_string(&pos).unwrap();
        let back: SourcePosition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pos);
    }
}
