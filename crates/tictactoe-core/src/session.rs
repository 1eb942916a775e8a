//! The single owner of the live game state.
//!
//! A view holds one `Session`, forwards each click through [`Session::dispatch`]
//! and re-renders from the accessors. The session never edits its state in
//! place; it swaps in whatever [`GameState::apply_move`] returns.

use crate::actions::{GameEvent, ViewEvent};
use crate::board::{winning_line, Board, Mark, CELL_COUNT};
use crate::game::{GameState, MoveError, Outcome};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    state: GameState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from an existing snapshot
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn next(&self) -> Mark {
        self.state.next
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    pub fn status_text(&self) -> String {
        self.state.status_text()
    }

    /// Whether a view should offer the reset control
    pub fn show_reset(&self) -> bool {
        self.outcome().is_decided()
    }

    /// Whether a cell should be clickable. The engine still rejects the
    /// move on its own if a view ignores this.
    pub fn cell_enabled(&self, index: usize) -> bool {
        self.state.validate_move(index).is_ok()
    }

    /// Accessible name for a cell, e.g. "Square 5" or "Square 5, X".
    /// `None` for an index off the board.
    pub fn cell_label(&self, index: usize) -> Option<String> {
        if index >= CELL_COUNT {
            return None;
        }
        let label = match self.state.board.get(index) {
            Some(mark) => format!("Square {}, {}", index + 1, mark),
            None => format!("Square {}", index + 1),
        };
        Some(label)
    }

    /// Result banner once the game is decided
    pub fn result_message(&self) -> Option<String> {
        let outcome = self.outcome();
        match outcome.winner() {
            Some(mark) => Some(format!("{} won", mark)),
            None if outcome.is_decided() => Some("Draw".to_string()),
            None => None,
        }
    }

    /// Place the current mark at `index`, replacing the held state on success
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        self.state = self.state.apply_move(index)?;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.state = GameState::reset();
    }

    /// Handle one view event and report what happened
    pub fn dispatch(&mut self, event: ViewEvent) -> Vec<GameEvent> {
        match event {
            ViewEvent::CellClicked { index } => self.handle_click(index),
            ViewEvent::ResetClicked => {
                self.reset();
                debug!("board reset");
                vec![GameEvent::BoardReset]
            }
        }
    }

    fn handle_click(&mut self, index: usize) -> Vec<GameEvent> {
        let mark = self.state.next;
        if let Err(reason) = self.apply_move(index) {
            debug!(index, %reason, "move rejected");
            return vec![GameEvent::MoveRejected { index, reason }];
        }
        debug!(index, %mark, "move played");

        let mut events = vec![GameEvent::MovePlayed { mark, index }];
        match self.outcome() {
            Outcome::Won(mark) => {
                if let Some(line) = winning_line(&self.state.board) {
                    events.push(GameEvent::GameWon { mark, line });
                }
            }
            Outcome::Draw => events.push(GameEvent::GameDrawn),
            Outcome::InProgress => {}
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn click(session: &mut Session, index: usize) -> Vec<GameEvent> {
        session.dispatch(ViewEvent::CellClicked { index })
    }

    #[test]
    fn test_click_places_mark() {
        let mut session = Session::new();
        let events = click(&mut session, 4);
        assert_eq!(
            events,
            vec![GameEvent::MovePlayed {
                mark: Mark::X,
                index: 4
            }]
        );
        assert_eq!(session.board().get(4), Some(Mark::X));
        assert_eq!(session.status_text(), "Next: O");
        assert!(!session.cell_enabled(4));
        assert!(session.cell_enabled(0));
    }

    #[test]
    fn test_rejected_click_changes_nothing() {
        let mut session = Session::new();
        click(&mut session, 4);
        let before = session.clone();

        let events = click(&mut session, 4);
        assert_eq!(
            events,
            vec![GameEvent::MoveRejected {
                index: 4,
                reason: MoveError::CellOccupied(4)
            }]
        );
        assert_eq!(session, before);

        let events = click(&mut session, 42);
        assert_eq!(
            events,
            vec![GameEvent::MoveRejected {
                index: 42,
                reason: MoveError::OutOfRange(42)
            }]
        );
        assert_eq!(session, before);
    }

    #[test]
    fn test_win_reports_line_and_disables_board() {
        let mut session = Session::new();
        for index in [0, 1, 3, 2] {
            click(&mut session, index);
        }
        let events = click(&mut session, 6);
        assert_eq!(
            events,
            vec![
                GameEvent::MovePlayed {
                    mark: Mark::X,
                    index: 6
                },
                GameEvent::GameWon {
                    mark: Mark::X,
                    line: [0, 3, 6]
                },
            ]
        );
        assert!(session.show_reset());
        assert_eq!(session.result_message().as_deref(), Some("X won"));
        assert!((0..9).all(|i| !session.cell_enabled(i)));
    }

    #[test]
    fn test_draw_event() {
        let mut session = Session::new();
        for index in [0, 1, 2, 5, 3, 6, 4, 8] {
            click(&mut session, index);
        }
        let events = click(&mut session, 7);
        assert_eq!(events.last(), Some(&GameEvent::GameDrawn));
        assert_eq!(session.result_message().as_deref(), Some("Draw"));
        assert!(session.show_reset());
    }

    #[test]
    fn test_reset_returns_to_initial() {
        let mut session = Session::new();
        click(&mut session, 0);
        click(&mut session, 1);
        let events = session.dispatch(ViewEvent::ResetClicked);
        assert_eq!(events, vec![GameEvent::BoardReset]);
        assert_eq!(session, Session::new());
        assert_eq!(session.result_message(), None);
        assert!(!session.show_reset());
    }

    #[test]
    fn test_cell_labels() {
        let mut session = Session::new();
        click(&mut session, 4);
        assert_eq!(session.cell_label(4).as_deref(), Some("Square 5, X"));
        assert_eq!(session.cell_label(0).as_deref(), Some("Square 1"));
        assert_eq!(session.cell_label(8).as_deref(), Some("Square 9"));
    }

    #[test]
    fn test_cell_label_off_board() {
        let session = Session::new();
        assert_eq!(session.cell_label(9), None);
        assert_eq!(session.cell_label(usize::MAX), None);
        assert!(!session.cell_enabled(usize::MAX));
    }

    #[test]
    fn test_resume_from_decided_state() {
        let won = [0, 1, 3, 2, 6]
            .iter()
            .fold(GameState::new(), |state, &index| state.apply_move(index).unwrap());
        let mut session = Session::from_state(won);
        assert_eq!(session.outcome().winner(), Some(Mark::X));
        assert_eq!(session.result_message().as_deref(), Some("X won"));
        assert_eq!(
            click(&mut session, 4),
            vec![GameEvent::MoveRejected {
                index: 4,
                reason: MoveError::GameOver
            }]
        );
        assert_eq!(session.state(), &won);
    }
}
