//! Tie detection logic for Four-in-a-Row.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if the board has no empty cells left.
///
/// A full board with no winner is a tie. The turn loop checks for a
/// winner first, so a final move that both wins and fills the board is
/// scored as a win.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .flatten()
        .all(|cell| *cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{HEIGHT, Player, WIDTH};
    use super::super::win::has_won;
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.drop_tile(3, Player::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for column in 0..WIDTH {
            for _ in 0..HEIGHT {
                board.drop_tile(column, Player::X).unwrap();
            }
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_tie_board_has_no_winner() {
        // Columns 0-1 and 4-5 alternate X first from the bottom; the rest
        // alternate O first. No run of four exists in any direction.
        let mut board = Board::new();
        for column in 0..WIDTH {
            let mut player = match column {
                0 | 1 | 4 | 5 => Player::X,
                _ => Player::O,
            };
            for _ in 0..HEIGHT {
                board.drop_tile(column, player).unwrap();
                player = player.opponent();
            }
        }

        assert!(is_full(&board));
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }
}
