//! Terminal-condition rules for Four-in-a-Row.
//!
//! The board itself stores no won/tied state; these predicates are
//! consulted by the turn loop after each accepted move, winner check
//! first. A move that wins and fills the board at once is a win.

pub mod tie;
pub mod win;
