//! First-class move type and rejection reasons for the Tower of Hanoi.

use super::Peg;
use serde::{Deserialize, Serialize};

/// A move: lift the top disk off one peg and set it down on another.
///
/// Moves are plain values so they can be parsed, validated, and logged
/// independently of execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiskMove {
    /// Peg the disk is lifted from.
    pub from: Peg,
    /// Peg the disk is set down on.
    pub to: Peg,
}

impl DiskMove {
    /// Creates a new move.
    pub fn new(from: Peg, to: Peg) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for DiskMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Rejection reasons for a disk move.
///
/// A rejected move leaves the towers completely unchanged; the caller is
/// expected to re-prompt and re-submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The source peg has no disks to lift.
    #[display("nothing to move from an empty peg")]
    EmptySource,
    /// The lifted disk is larger than the destination's top disk.
    #[display("a larger disk cannot rest on a smaller disk")]
    SizeViolation,
}

impl std::error::Error for MoveError {}
