//! Move validation and completion rules for the Tower of Hanoi.

use super::invariants;
use super::{MoveError, Peg, Towers};
use tracing::instrument;

impl Towers {
    /// Validates a move without applying it.
    ///
    /// Checked in order: the source peg must have a disk to lift; an empty
    /// destination accepts any disk; otherwise the lifted disk must be
    /// smaller than the destination's top disk.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::EmptySource`] or [`MoveError::SizeViolation`].
    #[instrument(skip(self))]
    pub fn validate(&self, from: Peg, to: Peg) -> Result<(), MoveError> {
        let Some(disk) = self.top(from) else {
            return Err(MoveError::EmptySource);
        };
        match self.top(to) {
            Some(resting) if disk > resting => Err(MoveError::SizeViolation),
            _ => Ok(()),
        }
    }

    /// Applies a move, returning the disk that was relocated.
    ///
    /// The caller is expected to have validated the move already; the
    /// engine re-validates and rejects rather than silently ignoring an
    /// invalid move. An accepted move pops the top disk off `from` and
    /// pushes it onto `to`; a rejected move leaves the towers unchanged.
    ///
    /// # Errors
    ///
    /// Returns the same rejections as [`Towers::validate`].
    #[instrument(skip(self))]
    pub fn apply(&mut self, from: Peg, to: Peg) -> Result<u8, MoveError> {
        self.validate(from, to)?;
        let disk = self.peg_mut(from).pop().ok_or(MoveError::EmptySource)?;
        self.peg_mut(to).push(disk);

        debug_assert!(invariants::well_stacked(self));
        debug_assert!(invariants::conserved(self));

        Ok(disk)
    }

    /// Checks if the full tower has been rebuilt away from peg A.
    ///
    /// True iff peg B or peg C holds every disk in order, largest on the
    /// bottom.
    #[instrument(skip(self))]
    pub fn is_complete(&self) -> bool {
        let full: Vec<u8> = (1..=self.total_disks()).rev().collect();
        self.peg(Peg::B) == full.as_slice() || self.peg(Peg::C) == full.as_slice()
    }
}
