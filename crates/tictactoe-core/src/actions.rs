//! Input events from a view and the events the engine reports back.

use crate::board::Mark;
use crate::game::MoveError;
use serde::{Deserialize, Serialize};

/// Discrete inputs a view layer forwards to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ViewEvent {
    /// A cell was clicked (0-8, row-major)
    CellClicked { index: usize },
    /// The reset control was clicked
    ResetClicked,
}

/// Events that occur as a result of a view event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed
    MovePlayed { mark: Mark, index: usize },

    /// The last move completed a line
    GameWon { mark: Mark, line: [usize; 3] },

    /// The last move filled the board without a line
    GameDrawn,

    /// The click was ignored; state is unchanged
    MoveRejected { index: usize, reason: MoveError },

    /// Board cleared and X to move
    BoardReset,
}
