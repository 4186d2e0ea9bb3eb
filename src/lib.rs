//! Focus-driven tic-tac-toe for remote-control style navigation.
//!
//! A single-screen game for two local players, driven by six input signals
//! (left/right/up/down/activate/cancel) instead of pointer input.
//!
//! # Architecture
//!
//! - **game**: board storage, positions, win/draw rules, and mutable state
//! - **focus**: focus target tracking and input interpretation
//! - **screen**: the composed per-screen state machine and snapshot surface
//! - **tui**: terminal frontend that observes snapshots and dispatches signals
//!
//! The core is synchronous and event-driven: one input signal is handled to
//! completion before the next is accepted. Invalid requests are silent
//! no-ops, never errors.
//!
//! # Example
//!
//! ```
//! use tictactoe_tv::{GameScreen, InputSignal};
//!
//! let mut screen = GameScreen::new();
//! screen.activate(); // X takes the top-left cell
//! screen.right();
//! screen.activate(); // O takes the top-center cell
//! assert_eq!(screen.snapshot().status_line(), "Turn: Knight");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod focus;
mod game;
mod input;
mod screen;
pub mod tui;

// Crate-level exports - Focus handling
pub use focus::{FocusController, FocusTarget};

// Crate-level exports - Game model
pub use game::{Board, Cell, GameState, Mark, Outcome, Position, WinningLine, rules};

// Crate-level exports - Input signals
pub use input::{Acceptance, InputSignal};

// Crate-level exports - Screen composition
pub use screen::{GameScreen, ScreenSnapshot};
