//! Board positions with row/column arithmetic for focus navigation.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the board (0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0 = top).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0 = left).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from row and column coordinates.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }

    /// One column left, or `None` at the left edge.
    pub fn left(self) -> Option<Self> {
        self.col()
            .checked_sub(1)
            .and_then(|col| Self::from_row_col(self.row(), col))
    }

    /// One column right, or `None` at the right edge.
    pub fn right(self) -> Option<Self> {
        Self::from_row_col(self.row(), self.col() + 1)
    }

    /// One row up, or `None` at the top edge.
    pub fn up(self) -> Option<Self> {
        self.row()
            .checked_sub(1)
            .and_then(|row| Self::from_row_col(row, self.col()))
    }

    /// One row down, or `None` at the bottom edge.
    pub fn down(self) -> Option<Self> {
        Self::from_row_col(self.row() + 1, self.col())
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_neighbors() {
        assert_eq!(Position::Center.left(), Some(Position::MiddleLeft));
        assert_eq!(Position::Center.right(), Some(Position::MiddleRight));
        assert_eq!(Position::Center.up(), Some(Position::TopCenter));
        assert_eq!(Position::Center.down(), Some(Position::BottomCenter));
    }

    #[test]
    fn test_corners_clamp() {
        assert_eq!(Position::TopLeft.left(), None);
        assert_eq!(Position::TopLeft.up(), None);
        assert_eq!(Position::BottomRight.right(), None);
        assert_eq!(Position::BottomRight.down(), None);
    }

    #[test]
    fn test_row_col() {
        assert_eq!(Position::BottomCenter.row(), 2);
        assert_eq!(Position::BottomCenter.col(), 1);
        assert_eq!(Position::from_row_col(2, 1), Some(Position::BottomCenter));
        assert_eq!(Position::from_row_col(3, 0), None);
    }
}
