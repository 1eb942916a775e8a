//! Tic-tac-toe game engine
//!
//! This crate provides the complete game logic for a two-player 3x3 board:
//! - Board representation and the fixed table of winning lines
//! - Move legality, turn order and win/draw detection
//! - A session type that owns the live state for a view layer
//!
//! # Architecture
//!
//! The engine is a pure state-in, state-out core. A view holds a
//! [`Session`], forwards [`ViewEvent`]s to it and re-renders from its
//! accessors. It can be compiled to:
//! - Native Rust for the terminal shell
//! - WebAssembly for a browser view (`wasm` feature)
//!
//! # Modules
//!
//! - [`board`]: Marks, the 9-cell board and line detection
//! - [`game`]: Outcomes, move application and status text
//! - [`actions`]: View events in, game events out
//! - [`session`]: Single owner of the current state

pub mod actions;
pub mod board;
pub mod game;
pub mod session;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use actions::{GameEvent, ViewEvent};
pub use board::{evaluate_winner, is_full, winning_line, Board, Mark, CELL_COUNT, WIN_LINES};
pub use game::{compute_outcome, status_text, GameState, MoveError, Outcome};
pub use session::Session;
