//! WebAssembly bindings for the tic-tac-toe engine.
//!
//! This module exposes a [`Session`] to JavaScript through wasm-bindgen.
//! The browser view renders from the getters and forwards clicks.

use wasm_bindgen::prelude::*;

use crate::actions::ViewEvent;
use crate::session::Session;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[wasm_bindgen]
pub struct WasmGame {
    session: Session,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a game with an empty board and X to move
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            session: Session::new(),
        }
    }

    /// Get the 9 cells as a JSON array ("X", "O" or null)
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        serde_json::to_string(self.session.board().cells()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the status line
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> String {
        self.session.status_text()
    }

    /// Get the outcome as JSON
    #[wasm_bindgen(js_name = getOutcome)]
    pub fn get_outcome(&self) -> String {
        serde_json::to_string(&self.session.outcome())
            .unwrap_or_else(|_| "\"InProgress\"".to_string())
    }

    /// Check if the game is decided (show the reset button)
    #[wasm_bindgen(js_name = isDecided)]
    pub fn is_decided(&self) -> bool {
        self.session.show_reset()
    }

    #[wasm_bindgen(js_name = isCellEnabled)]
    pub fn is_cell_enabled(&self, index: usize) -> bool {
        self.session.cell_enabled(index)
    }

    /// Get a cell's accessible name, or undefined off the board
    #[wasm_bindgen(js_name = getCellLabel)]
    pub fn get_cell_label(&self, index: usize) -> Option<String> {
        self.session.cell_label(index)
    }

    /// Get the result banner, if the game is decided
    #[wasm_bindgen(js_name = getResultMessage)]
    pub fn get_result_message(&self) -> Option<String> {
        self.session.result_message()
    }

    /// Forward a cell click, returns events JSON
    #[wasm_bindgen(js_name = clickCell)]
    pub fn click_cell(&mut self, index: usize) -> String {
        let events = self.session.dispatch(ViewEvent::CellClicked { index });
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Forward a reset click, returns events JSON
    pub fn reset(&mut self) -> String {
        let events = self.session.dispatch(ViewEvent::ResetClicked);
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_reports_events_like_click() {
        let mut game = WasmGame::new();
        let played = game.click_cell(4);
        assert!(played.contains("MovePlayed"));

        assert_eq!(game.reset(), r#"["BoardReset"]"#);
        assert_eq!(game.get_status(), "Next: X");
        assert_eq!(game.get_cell_label(4).as_deref(), Some("Square 5"));
        assert_eq!(game.get_cell_label(usize::MAX), None);
    }
}
