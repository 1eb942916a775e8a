//! Board representation and line detection.
//!
//! This module contains:
//! - The two player marks
//! - The 9-cell board in row-major order
//! - The fixed table of winning lines
//! - Pure queries over a board snapshot (winner, fullness)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// Every winning configuration, scanned in this order: rows, columns, diagonals
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Moves first
    X,
    /// Moves second
    O,
}

impl Mark {
    /// Both marks, first player first
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// The mark that moves first in every game
    pub const FIRST: Mark = Mark::X;

    /// The other mark
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The 3x3 grid.
///
/// Index 0-8 maps to row-major positions (0,1,2 is the top row). A `Board`
/// is a plain value: placing a mark produces a new board and leaves the
/// original untouched, so older snapshots stay valid for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cells
    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Mark at `index`, or `None` if the cell is empty or off the board
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// All cells in row-major order
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Indices of empty cells in ascending order
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_none()).collect()
    }

    /// Copy of this board with `mark` placed at `index`.
    ///
    /// Returns `None` if `index` is off the board. Legality (occupied cell,
    /// decided game) is checked by [`crate::game::GameState::apply_move`].
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Board> {
        if index >= CELL_COUNT {
            return None;
        }
        let mut next = *self;
        next.cells[index] = Some(mark);
        Some(next)
    }

    /// Render as three text rows; empty cells show their 1-based number
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Some(mark) => out.push_str(mark.as_str()),
                    None => out.push_str(&(index + 1).to_string()),
                }
                if col < 2 {
                    out.push('|');
                }
            }
            if row < 2 {
                out.push_str("\n-+-+-\n");
            }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// First line in [`WIN_LINES`] order held entirely by one mark
pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WIN_LINES.iter().copied().find(|&[a, b, c]| {
        let first = board.get(a);
        first.is_some() && first == board.get(b) && first == board.get(c)
    })
}

/// The mark that completed a line, if any.
///
/// Lines are scanned rows, then columns, then diagonals; on a malformed
/// board with two completed lines the first one found wins.
pub fn evaluate_winner(board: &Board) -> Option<Mark> {
    winning_line(board).and_then(|[a, _, _]| board.get(a))
}

/// True iff every cell holds a mark
pub fn is_full(board: &Board) -> bool {
    board.cells.iter().all(Option::is_some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(pattern: &str) -> Board {
        let mut cells = [None; CELL_COUNT];
        for (i, ch) in pattern.chars().filter(|c| !c.is_whitespace()).enumerate() {
            cells[i] = match ch {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                _ => None,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(!is_full(&board));
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_win_lines_cover_rows_columns_diagonals() {
        assert_eq!(WIN_LINES.len(), 8);
        for (i, line) in WIN_LINES.iter().take(3).enumerate() {
            assert_eq!(*line, [i * 3, i * 3 + 1, i * 3 + 2]);
        }
        for (i, line) in WIN_LINES[3..6].iter().enumerate() {
            assert_eq!(*line, [i, i + 3, i + 6]);
        }
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            for mark in Mark::ALL {
                let mut board = Board::new();
                for index in line {
                    board = board.with_mark(index, mark).unwrap();
                }
                assert_eq!(evaluate_winner(&board), Some(mark));
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_from("XXO ... ...");
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_scan_order_prefers_rows() {
        // Malformed: both marks hold a row
        let board = board_from("XXX OOO ...");
        assert_eq!(evaluate_winner(&board), Some(Mark::X));
        let board = board_from("OOO ... XXX");
        assert_eq!(evaluate_winner(&board), Some(Mark::O));
        // Column only
        let board = board_from("XOO X.. X..");
        assert_eq!(winning_line(&board), Some([0, 3, 6]));
    }

    #[test]
    fn test_full_board() {
        let board = board_from("XOX OXO OXO");
        assert!(is_full(&board));
        assert_eq!(evaluate_winner(&board), None);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new();
        let next = board.with_mark(4, Mark::X).unwrap();
        assert_eq!(board.get(4), None);
        assert_eq!(next.get(4), Some(Mark::X));
        assert!(board.with_mark(9, Mark::X).is_none());
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new();
        assert_eq!(board.get(9), None);
        assert!(!board.is_occupied(100));
    }

    #[test]
    fn test_render() {
        let board = board_from("X.. .O. ...");
        assert_eq!(board.render(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.to_string(), "X");
    }
}
