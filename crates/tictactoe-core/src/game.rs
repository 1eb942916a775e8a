//! Core game state machine.
//!
//! `GameState` is an immutable value: every accepted move returns a new
//! state and every rejected move leaves the caller's state as it was.

use crate::board::{evaluate_winner, is_full, Board, Mark, CELL_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Derived game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one empty cell
    InProgress,
    /// A mark completed a line
    Won(Mark),
    /// Board full with no completed line
    Draw,
}

impl Outcome {
    /// Won or Draw
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won(mark) => Some(*mark),
            _ => None,
        }
    }
}

/// Reasons a move is rejected.
///
/// None of these are failures: a rejected move is a no-op and the view
/// simply keeps showing the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum MoveError {
    #[error("Cell {0} is off the board")]
    OutOfRange(usize),

    #[error("Cell {0} is already taken")]
    CellOccupied(usize),

    #[error("Game is over")]
    GameOver,
}

/// Outcome of a board snapshot. A completed line wins even on a full board.
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some(mark) = evaluate_winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Status line for an outcome: "Winner: X", "Draw" or "Next: O"
pub fn status_text(outcome: Outcome, next: Mark) -> String {
    match outcome {
        Outcome::Won(mark) => format!("Winner: {}", mark),
        Outcome::Draw => "Draw".to_string(),
        Outcome::InProgress => format!("Next: {}", next),
    }
}

/// The complete game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board
    pub board: Board,
    /// Mark placed by the next accepted move
    pub next: Mark,
}

impl GameState {
    /// Empty board, first player to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next: Mark::FIRST,
        }
    }

    /// Fresh initial state, regardless of what came before
    pub fn reset() -> Self {
        Self::new()
    }

    /// Load a snapshot, deriving whose turn it is from the fill count
    pub fn from_board(board: Board) -> Self {
        let next = if board.filled_count() % 2 == 0 {
            Mark::FIRST
        } else {
            Mark::FIRST.opponent()
        };
        Self { board, next }
    }

    pub fn outcome(&self) -> Outcome {
        compute_outcome(&self.board)
    }

    pub fn is_finished(&self) -> bool {
        self.outcome().is_decided()
    }

    pub fn status_text(&self) -> String {
        status_text(self.outcome(), self.next)
    }

    /// Check that the turn indicator matches the number of filled cells
    pub fn is_consistent(&self) -> bool {
        *self == Self::from_board(self.board)
    }

    /// Check whether a move at `index` would be accepted
    pub fn validate_move(&self, index: usize) -> Result<(), MoveError> {
        if index >= CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        if self.is_finished() {
            return Err(MoveError::GameOver);
        }
        if self.board.is_occupied(index) {
            return Err(MoveError::CellOccupied(index));
        }
        Ok(())
    }

    /// Place the current mark at `index` and pass the turn.
    ///
    /// Returns the successor state; `self` is never modified.
    pub fn apply_move(&self, index: usize) -> Result<GameState, MoveError> {
        self.validate_move(index)?;
        let board = self
            .board
            .with_mark(index, self.next)
            .ok_or(MoveError::OutOfRange(index))?;
        Ok(GameState {
            board,
            next: self.next.opponent(),
        })
    }

    /// Cells that would accept a move right now
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_finished() {
            return Vec::new();
        }
        self.board.empty_cells()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
