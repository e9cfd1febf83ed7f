/// Position tracking for validation reports
///
/// Stores the source location (line/column) of the token a syntax error
/// was reported at.
use super::span::LineCol;

/// A position in source code (1-indexed, column counted in characters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl From<LineCol> for Position {
    fn from(lc: LineCol) -> Self {
        Self::new(lc.line + 1, lc.col + 1)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
