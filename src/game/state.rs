//! Mutable game state: board, turn flag, and derived outcome.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Board, Cell, Mark};
use crate::input::Acceptance;

/// The complete game state for one screen session.
///
/// Invalid requests (placing on an occupied cell, playing after the game has
/// ended) are silently ignored rather than reported as errors; the
/// [`Acceptance`] return value records which happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark to play next. Flips only on an accepted placement while the
    /// game stays in progress.
    to_move: Mark,
    /// Derived outcome, recomputed after every mutation.
    outcome: Outcome,
}

impl GameState {
    /// Creates a new game with an empty board and `X` to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to play next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Places the current mark at the given position.
    ///
    /// Ignored (state unchanged) if the game has ended or the cell is
    /// occupied. On an accepted placement the outcome is re-evaluated and
    /// the turn flag flips only if the game is still in progress.
    #[instrument(skip(self), fields(mark = %self.to_move))]
    pub fn place_mark(&mut self, pos: Position) -> Acceptance {
        if self.outcome.is_terminal() {
            debug!("Placement ignored: game is over");
            return Acceptance::Ignored;
        }
        if !self.board.is_empty(pos) {
            debug!("Placement ignored: cell occupied");
            return Acceptance::Ignored;
        }

        self.board.set(pos, Cell::Occupied(self.to_move));
        self.outcome = rules::evaluate(&self.board);
        if self.outcome.is_in_progress() {
            self.to_move = self.to_move.opponent();
        }
        debug!(outcome = %self.outcome, "Placement accepted");
        Acceptance::Accepted
    }

    /// Resets to the initial state: empty board, `X` to move, in progress.
    ///
    /// Valid at any time, including mid-game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game state");
        *self = Self::new();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
