//! Input signals dispatched by the platform's input layer.

use serde::{Deserialize, Serialize};

/// A remote-control style input signal.
///
/// Each signal is handled to completion before the next is accepted; there
/// is no queueing and no suspension.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum InputSignal {
    /// Move focus one column left.
    Left,
    /// Move focus one column right.
    Right,
    /// Move focus one row up, or from the restart control back to the board.
    Up,
    /// Move focus one row down, or from the bottom row to the restart control.
    Down,
    /// Activate the focused element (place a mark or restart).
    Activate,
    /// Reserved for a future back action; currently ignored.
    Cancel,
}

/// Whether an input request changed state or was silently ignored.
///
/// This is the only result taxonomy in the core: there are no recoverable
/// errors, and callers are free to discard the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Acceptance {
    /// State changed; the outcome was re-evaluated where applicable.
    Accepted,
    /// Preconditions unmet; state unchanged.
    Ignored,
}

impl Acceptance {
    /// Returns true if the request changed state.
    pub fn is_accepted(self) -> bool {
        matches!(self, Acceptance::Accepted)
    }
}
