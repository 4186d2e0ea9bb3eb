//! Win detection.

use tracing::instrument;

use super::super::outcome::WinningLine;
use super::super::position::Position;
use super::super::types::{Board, Cell, Mark};

/// The 8 fixed winning lines, checked in enumeration order:
/// rows top to bottom, columns left to right, main diagonal, anti-diagonal.
pub const WIN_LINES: [WinningLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks for a completed line on the board.
///
/// Lines are scanned in [`WIN_LINES`] order and the first full line wins,
/// which keeps the result deterministic even for boards where several lines
/// are complete at once.
#[instrument]
pub fn check_winner(board: &Board) -> Option<(Mark, WinningLine)> {
    for line in WIN_LINES {
        let [a, b, c] = line;
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Cell::Occupied(mark) => Some((mark, line)),
                Cell::Empty => None,
            };
        }
    }

    None
}
