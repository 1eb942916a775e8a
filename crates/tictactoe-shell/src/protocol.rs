//! Line protocol between the terminal and the shell.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tictactoe_core::{Board, Mark, MoveError, Outcome, ViewEvent, CELL_COUNT};

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward to the engine
    Event(ViewEvent),
    /// Stop reading input
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Cell must be 1-9, got {0}")]
    CellOutOfRange(usize),

    #[error("Unrecognised input: {0}")]
    Unrecognised(String),
}

/// Parse a line of input.
///
/// Accepts a JSON view event, a 1-based cell number, `r`/`reset` or
/// `q`/`quit`. Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Command>, ProtocolError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if line.starts_with('{') {
        return serde_json::from_str::<ViewEvent>(line)
            .map(|event| Some(Command::Event(event)))
            .map_err(|_| ProtocolError::Unrecognised(line.to_string()));
    }

    match line.to_ascii_lowercase().as_str() {
        "r" | "reset" => return Ok(Some(Command::Event(ViewEvent::ResetClicked))),
        "q" | "quit" => return Ok(Some(Command::Quit)),
        _ => {}
    }

    let cell: usize = line
        .parse()
        .map_err(|_| ProtocolError::Unrecognised(line.to_string()))?;
    if !(1..=CELL_COUNT).contains(&cell) {
        return Err(ProtocolError::CellOutOfRange(cell));
    }
    Ok(Some(Command::Event(ViewEvent::CellClicked { index: cell - 1 })))
}

/// Messages written in JSON output mode, one per line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum ShellMessage {
    /// Current state after the last event
    State {
        board: [Option<Mark>; CELL_COUNT],
        status: String,
        outcome: Outcome,
        show_reset: bool,
    },

    /// A click was ignored
    Rejected { index: usize, reason: MoveError },

    /// Input could not be parsed
    Error { message: String },
}

impl ShellMessage {
    pub fn state(board: &Board, status: String, outcome: Outcome) -> Self {
        ShellMessage::State {
            board: *board.cells(),
            status,
            outcome,
            show_reset: outcome.is_decided(),
        }
    }
}
