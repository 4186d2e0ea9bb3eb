//! Derived game outcome, recomputed after every board mutation.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::types::Mark;

/// A winning triple of board positions.
pub type WinningLine = [Position; 3];

/// Outcome of evaluating a board.
///
/// Always derived from the board by [`rules::evaluate`](super::rules::evaluate),
/// never maintained incrementally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Outcome {
    /// Game is ongoing.
    #[display("in progress")]
    InProgress,
    /// Three in a row for `mark` along `line`.
    #[display("{mark} wins")]
    Won {
        /// The winning mark.
        mark: Mark,
        /// The completed line.
        line: WinningLine,
    },
    /// All nine cells occupied with no winning line.
    #[display("draw")]
    Draw,
}

impl Outcome {
    /// Returns true if the game is still accepting moves.
    pub fn is_in_progress(self) -> bool {
        matches!(self, Outcome::InProgress)
    }

    /// Returns true if the game has ended in a win or a draw.
    pub fn is_terminal(self) -> bool {
        !self.is_in_progress()
    }

    /// Returns the winning mark, if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(mark),
            _ => None,
        }
    }

    /// Returns the winning line, if there is one.
    pub fn winning_line(self) -> Option<WinningLine> {
        match self {
            Outcome::Won { line, .. } => Some(line),
            _ => None,
        }
    }
}
