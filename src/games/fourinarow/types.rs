//! Core domain types for Four-in-a-Row.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of columns on the board.
pub const WIDTH: usize = 7;

/// Number of rows on the board.
pub const HEIGHT: usize = 6;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's tile.
    Occupied(Player),
}

/// Rejection reasons for a drop move.
///
/// A rejected drop leaves the board completely unchanged; the caller is
/// expected to re-prompt and re-submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum DropError {
    /// The column index is outside the board.
    #[display("no such column on the board")]
    InvalidColumn,
    /// Every cell in the column is already occupied.
    #[display("the column is already full")]
    ColumnFull,
}

impl std::error::Error for DropError {}

/// 7x6 tile-drop board.
///
/// Row 0 is the top row; dropped tiles fall toward row `HEIGHT - 1`.
/// Every in-range coordinate always holds exactly one [`Cell`], and a cell
/// only ever transitions from empty to occupied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// Creates a new board with every cell empty.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Gets the cell at the given coordinates.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[row][column]
    }

    /// Returns all rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; WIDTH]; HEIGHT] {
        &self.cells
    }

    /// Checks if a column has no room left.
    pub fn is_column_full(&self, column: usize) -> bool {
        self.cells[0][column] != Cell::Empty
    }

    /// Drops a tile into a column and returns the row where it landed.
    ///
    /// The tile falls to the lowest empty row in the column: rows are
    /// scanned from the bottom up and the first empty cell found is the
    /// landing cell. Exactly one cell changes per accepted drop.
    ///
    /// # Errors
    ///
    /// Returns [`DropError::InvalidColumn`] if `column` is outside the
    /// board, or [`DropError::ColumnFull`] if the column's top cell is
    /// already occupied. The board is untouched in both cases.
    #[instrument(skip(self))]
    pub fn drop_tile(&mut self, column: usize, player: Player) -> Result<usize, DropError> {
        if column >= WIDTH {
            return Err(DropError::InvalidColumn);
        }
        if self.is_column_full(column) {
            return Err(DropError::ColumnFull);
        }

        for row in (0..HEIGHT).rev() {
            if self.cells[row][column] == Cell::Empty {
                self.cells[row][column] = Cell::Occupied(player);
                return Ok(row);
            }
        }

        // A column with an empty top cell always has room.
        Err(DropError::ColumnFull)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..HEIGHT {
            for column in 0..WIDTH {
                assert_eq!(board.get(row, column), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_lands_on_bottom_row() {
        let mut board = Board::new();
        let row = board.drop_tile(3, Player::X).unwrap();
        assert_eq!(row, HEIGHT - 1);
        assert_eq!(board.get(HEIGHT - 1, 3), Cell::Occupied(Player::X));
    }

    #[test]
    fn test_drops_stack_upward() {
        let mut board = Board::new();
        board.drop_tile(3, Player::X).unwrap();
        let row = board.drop_tile(3, Player::O).unwrap();
        assert_eq!(row, HEIGHT - 2);
        assert_eq!(board.get(HEIGHT - 2, 3), Cell::Occupied(Player::O));
    }

    #[test]
    fn test_drop_changes_exactly_one_cell() {
        let mut board = Board::new();
        board.drop_tile(2, Player::X).unwrap();
        let before = board.clone();
        let row = board.drop_tile(2, Player::O).unwrap();

        let mut changed = 0;
        for r in 0..HEIGHT {
            for c in 0..WIDTH {
                if board.get(r, c) != before.get(r, c) {
                    changed += 1;
                    assert_eq!((r, c), (row, 2));
                    assert_eq!(before.get(r, c), Cell::Empty);
                }
            }
        }
        assert_eq!(changed, 1);
    }

    #[test]
    fn test_full_column_rejects_and_leaves_board_unchanged() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            board.drop_tile(0, Player::X).unwrap();
        }
        assert!(board.is_column_full(0));

        let before = board.clone();
        assert_eq!(board.drop_tile(0, Player::O), Err(DropError::ColumnFull));
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_column_rejects() {
        let mut board = Board::new();
        let before = board.clone();
        assert_eq!(
            board.drop_tile(WIDTH, Player::X),
            Err(DropError::InvalidColumn)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_opponent_alternation() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }
}
