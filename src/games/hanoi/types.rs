//! Core domain types for the Tower of Hanoi.

use serde::{Deserialize, Serialize};

/// Disk count used when the player does not choose one.
pub const DEFAULT_DISKS: u8 = 5;

/// A peg holding a stack of disks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Peg {
    /// Left peg; all disks start here.
    A,
    /// Middle peg.
    B,
    /// Right peg.
    C,
}

impl Peg {
    /// Parses a peg from its single-letter label.
    pub fn from_char(label: char) -> Option<Self> {
        match label {
            'A' => Some(Peg::A),
            'B' => Some(Peg::B),
            'C' => Some(Peg::C),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Peg::A => 0,
            Peg::B => 1,
            Peg::C => 2,
        }
    }
}

impl std::fmt::Display for Peg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Peg::A => write!(f, "A"),
            Peg::B => write!(f, "B"),
            Peg::C => write!(f, "C"),
        }
    }
}

/// The three pegs and their disks.
///
/// Disk sizes are the integers `1..=total_disks`. Each peg holds its disks
/// bottom-to-top, strictly decreasing in size, and every disk sits on
/// exactly one peg at any time. The state is an owned value: sessions own
/// their towers and the engine keeps nothing global, so independent games
/// can run side by side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Towers {
    total_disks: u8,
    pegs: [Vec<u8>; 3],
}

impl Towers {
    /// Creates a new puzzle with the full tower on peg A.
    ///
    /// Peg A holds `[total_disks, .., 2, 1]` bottom-to-top; B and C start
    /// empty.
    pub fn new(total_disks: u8) -> Self {
        let full: Vec<u8> = (1..=total_disks).rev().collect();
        Self {
            total_disks,
            pegs: [full, Vec::new(), Vec::new()],
        }
    }

    /// Returns the number of disks in play.
    pub fn total_disks(&self) -> u8 {
        self.total_disks
    }

    /// Returns a peg's disks, bottom-to-top.
    pub fn peg(&self, peg: Peg) -> &[u8] {
        &self.pegs[peg.index()]
    }

    /// Returns the topmost disk on a peg, if any.
    pub fn top(&self, peg: Peg) -> Option<u8> {
        self.pegs[peg.index()].last().copied()
    }

    pub(super) fn peg_mut(&mut self, peg: Peg) -> &mut Vec<u8> {
        &mut self.pegs[peg.index()]
    }
}

impl Default for Towers {
    fn default() -> Self {
        Self::new(DEFAULT_DISKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_towers_stacks_everything_on_a() {
        let towers = Towers::new(5);
        assert_eq!(towers.peg(Peg::A), &[5, 4, 3, 2, 1]);
        assert!(towers.peg(Peg::B).is_empty());
        assert!(towers.peg(Peg::C).is_empty());
    }

    #[test]
    fn test_top_of_each_peg() {
        let towers = Towers::new(3);
        assert_eq!(towers.top(Peg::A), Some(1));
        assert_eq!(towers.top(Peg::B), None);
        assert_eq!(towers.top(Peg::C), None);
    }

    #[test]
    fn test_peg_labels_parse() {
        assert_eq!(Peg::from_char('A'), Some(Peg::A));
        assert_eq!(Peg::from_char('C'), Some(Peg::C));
        assert_eq!(Peg::from_char('D'), None);
    }
}
