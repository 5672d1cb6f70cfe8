//! Win detection logic for Four-in-a-Row.

use super::super::{Board, Cell, HEIGHT, Player, WIDTH};
use tracing::instrument;

/// Length of a winning run.
const CONNECT: usize = 4;

/// Checks if the player has four tiles in a row anywhere on the board.
///
/// Scans every 4-length window horizontally, vertically, and along both
/// diagonals. Whole-board scanning is O(board size) and plenty fast at
/// this board size.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    let tile = Cell::Occupied(player);

    // Across to the right:
    for row in 0..HEIGHT {
        for column in 0..=WIDTH - CONNECT {
            if (0..CONNECT).all(|i| board.get(row, column + i) == tile) {
                return true;
            }
        }
    }

    // Straight down:
    for column in 0..WIDTH {
        for row in 0..=HEIGHT - CONNECT {
            if (0..CONNECT).all(|i| board.get(row + i, column) == tile) {
                return true;
            }
        }
    }

    // Both diagonals share the same window anchors:
    for row in 0..=HEIGHT - CONNECT {
        for column in 0..=WIDTH - CONNECT {
            // Down-right:
            if (0..CONNECT).all(|i| board.get(row + i, column + i) == tile) {
                return true;
            }
            // Down-left:
            if (0..CONNECT).all(|i| board.get(row + i, column + CONNECT - 1 - i) == tile) {
                return true;
            }
        }
    }

    false
}
