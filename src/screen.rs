//! The game screen: composed state machine and snapshot surface.
//!
//! A [`GameScreen`] is constructed on screen entry and discarded on screen
//! exit. The presentation layer observes it through [`GameScreen::snapshot`]
//! and mutates it only by forwarding input signals.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::focus::{FocusController, FocusTarget};
use crate::game::{Cell, GameState, Mark, Outcome};
use crate::input::{Acceptance, InputSignal};

/// One screen session of tic-tac-toe: game state plus focus tracking.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct GameScreen {
    game: GameState,
    focus: FocusController,
}

impl GameScreen {
    /// Creates a new screen: empty board, `X` to move, focus on the
    /// top-left cell.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game screen");
        Self {
            game: GameState::new(),
            focus: FocusController::new(),
        }
    }

    /// Handles one input signal to completion.
    #[instrument(skip(self))]
    pub fn handle(&mut self, signal: InputSignal) -> Acceptance {
        self.focus.handle(signal, &mut self.game)
    }

    /// Handles a `left` signal from the input dispatch layer.
    pub fn left(&mut self) {
        self.handle(InputSignal::Left);
    }

    /// Handles a `right` signal from the input dispatch layer.
    pub fn right(&mut self) {
        self.handle(InputSignal::Right);
    }

    /// Handles an `up` signal from the input dispatch layer.
    pub fn up(&mut self) {
        self.handle(InputSignal::Up);
    }

    /// Handles a `down` signal from the input dispatch layer.
    pub fn down(&mut self) {
        self.handle(InputSignal::Down);
    }

    /// Handles an `activate` signal from the input dispatch layer.
    pub fn activate(&mut self) {
        self.handle(InputSignal::Activate);
    }

    /// Handles a `cancel` signal from the input dispatch layer.
    pub fn cancel(&mut self) {
        self.handle(InputSignal::Cancel);
    }

    /// Restarts the game directly, independent of focus state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Restarting game");
        self.game.reset();
        self.focus.reset();
    }

    /// Called when the screen regains top-level focus from outside.
    ///
    /// Focus returns to the top-left cell; the game is untouched.
    #[instrument(skip(self))]
    pub fn focus_regained(&mut self) {
        self.focus.reset();
    }

    /// Captures a read-only snapshot for the presentation layer.
    pub fn snapshot(&self) -> ScreenSnapshot {
        ScreenSnapshot {
            cells: *self.game.board().cells(),
            to_move: self.game.to_move(),
            outcome: self.game.outcome(),
            focus: self.focus.target(),
        }
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only view of the screen state, consumed once per re-render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScreenSnapshot {
    /// Board cells in row-major order.
    cells: [Cell; 9],
    /// Mark to play next.
    to_move: Mark,
    /// Current outcome, including the winning line if any.
    outcome: Outcome,
    /// Currently focused UI target.
    focus: FocusTarget,
}

impl ScreenSnapshot {
    /// Status line for the screen header.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Won { mark, .. } => format!("Winner: {}", mark.label()),
            Outcome::Draw => "Draw!".to_string(),
            Outcome::InProgress => format!("Turn: {}", self.to_move.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    #[test]
    fn test_snapshot_reflects_initial_state() {
        let screen = GameScreen::new();
        let snapshot = screen.snapshot();
        assert!(snapshot.cells().iter().all(|c| *c == Cell::Empty));
        assert_eq!(*snapshot.to_move(), Mark::X);
        assert_eq!(*snapshot.outcome(), Outcome::InProgress);
        assert_eq!(*snapshot.focus(), FocusTarget::Cell(Position::TopLeft));
        assert_eq!(snapshot.status_line(), "Turn: Knight");
    }

    #[test]
    fn test_status_line_tracks_turn_and_outcome() {
        let mut screen = GameScreen::new();
        screen.activate();
        assert_eq!(screen.snapshot().status_line(), "Turn: Queen");

        // X: top row via focus moves; O: middle row.
        screen.down();
        screen.activate(); // O at MiddleLeft
        screen.up();
        screen.right();
        screen.activate(); // X at TopCenter
        screen.down();
        screen.activate(); // O at Center
        screen.up();
        screen.right();
        screen.activate(); // X at TopRight wins
        assert_eq!(screen.snapshot().status_line(), "Winner: Knight");
    }

    #[test]
    fn test_focus_regained_restores_default_without_touching_game() {
        let mut screen = GameScreen::new();
        screen.activate();
        screen.right();
        let board_before = screen.game().board().clone();
        screen.focus_regained();
        assert_eq!(
            *screen.snapshot().focus(),
            FocusTarget::Cell(Position::TopLeft)
        );
        assert_eq!(*screen.game().board(), board_before);
    }

    #[test]
    fn test_direct_reset_restores_everything() {
        let mut screen = GameScreen::new();
        screen.activate();
        screen.right();
        screen.reset();
        assert_eq!(screen.snapshot(), GameScreen::new().snapshot());
    }
}
