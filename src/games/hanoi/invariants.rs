//! Reachable-state invariants for the tower puzzle.
//!
//! Every state reachable through validated moves satisfies both checks
//! here. They back the debug assertions in the move rules and give tests
//! a direct way to audit a sequence of moves.

use super::{Peg, Towers};
use strum::IntoEnumIterator;

/// Invariant: every peg is strictly decreasing bottom-to-top.
///
/// A larger disk never rests above a smaller one.
pub fn well_stacked(towers: &Towers) -> bool {
    Peg::iter().all(|peg| towers.peg(peg).windows(2).all(|pair| pair[0] > pair[1]))
}

/// Invariant: the pegs together hold exactly the disks `1..=total_disks`.
///
/// Moves relocate disks; they never create, destroy, or duplicate them.
pub fn conserved(towers: &Towers) -> bool {
    let mut disks: Vec<u8> = Peg::iter()
        .flat_map(|peg| towers.peg(peg).iter().copied())
        .collect();
    disks.sort_unstable();
    disks == (1..=towers.total_disks()).collect::<Vec<u8>>()
}
