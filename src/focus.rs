//! Focus tracking and input interpretation for the game screen.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::game::{GameState, Position};
use crate::input::{Acceptance, InputSignal};

/// The UI element currently holding focus.
///
/// Exactly one target is focused at any time. The restart control carries
/// the cell focus came from so `up` can return to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FocusTarget {
    /// A board cell.
    Cell(Position),
    /// The restart control below the board.
    RestartControl {
        /// Bottom-row cell focus arrived from.
        last_cell: Position,
    },
}

impl FocusTarget {
    /// Returns true if the restart control is focused.
    pub fn is_restart(self) -> bool {
        matches!(self, FocusTarget::RestartControl { .. })
    }

    /// Returns the focused cell, if a cell is focused.
    pub fn cell(self) -> Option<Position> {
        match self {
            FocusTarget::Cell(pos) => Some(pos),
            FocusTarget::RestartControl { .. } => None,
        }
    }
}

/// Translates directional and activation signals into focus moves or
/// delegated calls into [`GameState`].
///
/// Focus moves are clamped at the board edges (no wraparound). While the
/// game is terminal the grid freezes, with one exception: `down` from the
/// bottom row still reaches the restart control, so a finished game can
/// always be restarted from there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusController {
    target: FocusTarget,
}

impl FocusController {
    /// Creates a controller focused on the top-left cell.
    pub fn new() -> Self {
        Self {
            target: FocusTarget::Cell(Position::TopLeft),
        }
    }

    /// Returns the current focus target.
    pub fn target(&self) -> FocusTarget {
        self.target
    }

    /// Returns focus to the top-left cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.target = FocusTarget::Cell(Position::TopLeft);
    }

    /// Handles one input signal against the given game state.
    #[instrument(skip(self, game), fields(target = ?self.target))]
    pub fn handle(&mut self, signal: InputSignal, game: &mut GameState) -> Acceptance {
        match signal {
            InputSignal::Left => self.move_within_row(game, Position::left),
            InputSignal::Right => self.move_within_row(game, Position::right),
            InputSignal::Up => self.move_up(game),
            InputSignal::Down => self.move_down(game),
            InputSignal::Activate => self.activate(game),
            // Reserved for a future back binding.
            InputSignal::Cancel => Acceptance::Ignored,
        }
    }

    /// Moves focus to `next`, or ignores the request at a board edge.
    fn focus_cell(&mut self, next: Option<Position>) -> Acceptance {
        match next {
            Some(pos) => {
                debug!(pos = %pos, "Focus moved");
                self.target = FocusTarget::Cell(pos);
                Acceptance::Accepted
            }
            None => Acceptance::Ignored,
        }
    }

    fn move_within_row(
        &mut self,
        game: &GameState,
        step: fn(Position) -> Option<Position>,
    ) -> Acceptance {
        match self.target {
            FocusTarget::Cell(pos) if game.outcome().is_in_progress() => {
                self.focus_cell(step(pos))
            }
            _ => Acceptance::Ignored,
        }
    }

    fn move_up(&mut self, game: &GameState) -> Acceptance {
        match self.target {
            FocusTarget::RestartControl { last_cell } => {
                debug!(pos = %last_cell, "Focus back on the board");
                self.target = FocusTarget::Cell(last_cell);
                Acceptance::Accepted
            }
            FocusTarget::Cell(pos) if game.outcome().is_in_progress() => {
                self.focus_cell(pos.up())
            }
            FocusTarget::Cell(_) => Acceptance::Ignored,
        }
    }

    fn move_down(&mut self, game: &GameState) -> Acceptance {
        match self.target {
            FocusTarget::RestartControl { .. } => Acceptance::Ignored,
            // The bottom row escapes to the restart control even when the
            // game is over; rows 0 and 1 freeze instead.
            FocusTarget::Cell(pos) if pos.row() == 2 => {
                debug!(pos = %pos, "Focus on restart control");
                self.target = FocusTarget::RestartControl { last_cell: pos };
                Acceptance::Accepted
            }
            FocusTarget::Cell(pos) if game.outcome().is_in_progress() => {
                self.focus_cell(pos.down())
            }
            FocusTarget::Cell(_) => Acceptance::Ignored,
        }
    }

    fn activate(&mut self, game: &mut GameState) -> Acceptance {
        match self.target {
            FocusTarget::RestartControl { .. } => {
                debug!("Restart control activated");
                game.reset();
                self.reset();
                Acceptance::Accepted
            }
            FocusTarget::Cell(pos) => game.place_mark(pos),
        }
    }
}

impl Default for FocusController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn won_game() -> GameState {
        let mut game = GameState::new();
        // X: left column; O: top center, center.
        game.place_mark(Position::TopLeft);
        game.place_mark(Position::TopCenter);
        game.place_mark(Position::MiddleLeft);
        game.place_mark(Position::Center);
        game.place_mark(Position::BottomLeft);
        assert!(game.outcome().is_terminal());
        game
    }

    #[test]
    fn test_default_focus_is_top_left() {
        let focus = FocusController::new();
        assert_eq!(focus.target(), FocusTarget::Cell(Position::TopLeft));
    }

    #[test]
    fn test_left_clamps_at_column_zero() {
        let mut focus = FocusController::new();
        let mut game = GameState::new();
        assert_eq!(
            focus.handle(InputSignal::Left, &mut game),
            Acceptance::Ignored
        );
        assert_eq!(focus.target(), FocusTarget::Cell(Position::TopLeft));
    }

    #[test]
    fn test_right_clamps_at_column_two() {
        let mut focus = FocusController::new();
        let mut game = GameState::new();
        focus.handle(InputSignal::Right, &mut game);
        focus.handle(InputSignal::Right, &mut game);
        assert_eq!(focus.target(), FocusTarget::Cell(Position::TopRight));
        assert_eq!(
            focus.handle(InputSignal::Right, &mut game),
            Acceptance::Ignored
        );
        assert_eq!(focus.target(), FocusTarget::Cell(Position::TopRight));
    }

    #[test]
    fn test_down_from_bottom_row_reaches_restart_control() {
        let mut focus = FocusController::new();
        let mut game = GameState::new();
        focus.handle(InputSignal::Down, &mut game);
        focus.handle(InputSignal::Down, &mut game);
        assert_eq!(focus.target(), FocusTarget::Cell(Position::BottomLeft));
        focus.handle(InputSignal::Down, &mut game);
        assert!(focus.target().is_restart());
        // Down from the control itself does nothing.
        assert_eq!(
            focus.handle(InputSignal::Down, &mut game),
            Acceptance::Ignored
        );
    }

    #[test]
    fn test_up_from_restart_control_returns_to_last_cell() {
        let mut focus = FocusController::new();
        let mut game = GameState::new();
        focus.handle(InputSignal::Down, &mut game);
        focus.handle(InputSignal::Down, &mut game);
        focus.handle(InputSignal::Right, &mut game);
        assert_eq!(focus.target(), FocusTarget::Cell(Position::BottomCenter));
        focus.handle(InputSignal::Down, &mut game);
        focus.handle(InputSignal::Up, &mut game);
        assert_eq!(focus.target(), FocusTarget::Cell(Position::BottomCenter));
    }

    #[test]
    fn test_terminal_game_freezes_grid_navigation() {
        let mut game = won_game();
        for signal in [InputSignal::Left, InputSignal::Right, InputSignal::Up] {
            let mut focus = FocusController {
                target: FocusTarget::Cell(Position::Center),
            };
            assert_eq!(focus.handle(signal, &mut game), Acceptance::Ignored);
            assert_eq!(focus.target(), FocusTarget::Cell(Position::Center));
        }
        // Down from a middle-row cell is frozen too.
        let mut focus = FocusController {
            target: FocusTarget::Cell(Position::Center),
        };
        assert_eq!(
            focus.handle(InputSignal::Down, &mut game),
            Acceptance::Ignored
        );
    }

    #[test]
    fn test_terminal_game_bottom_row_still_escapes_down() {
        let mut game = won_game();
        let mut focus = FocusController {
            target: FocusTarget::Cell(Position::BottomCenter),
        };
        assert_eq!(
            focus.handle(InputSignal::Down, &mut game),
            Acceptance::Accepted
        );
        assert!(focus.target().is_restart());
    }

    #[test]
    fn test_activate_on_restart_control_resets_game_and_focus() {
        let mut game = won_game();
        let mut focus = FocusController {
            target: FocusTarget::RestartControl {
                last_cell: Position::BottomLeft,
            },
        };
        assert_eq!(
            focus.handle(InputSignal::Activate, &mut game),
            Acceptance::Accepted
        );
        assert_eq!(game, GameState::new());
        assert_eq!(focus.target(), FocusTarget::Cell(Position::TopLeft));
    }

    #[test]
    fn test_cancel_is_reserved_no_op() {
        let mut focus = FocusController::new();
        let mut game = GameState::new();
        assert_eq!(
            focus.handle(InputSignal::Cancel, &mut game),
            Acceptance::Ignored
        );
        assert_eq!(focus.target(), FocusTarget::Cell(Position::TopLeft));
        assert_eq!(game, GameState::new());
    }
}
