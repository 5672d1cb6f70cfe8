//! Parlor Games library - turn-based text puzzle games
//!
//! This library provides two self-contained game-state engines and the
//! console front end that drives them:
//!
//! - **Four-in-a-Row**: a tile-drop game on a 7x6 grid where two players
//!   race to line up four tiles horizontally, vertically, or diagonally
//! - **Tower of Hanoi**: a disk-stacking puzzle across three pegs
//!
//! # Architecture
//!
//! - **Engines**: pure state values plus validation and terminal-detection
//!   rules; no I/O, no global state, recoverable rejections only
//! - **Console**: line-based turn loops, input parsing, and fixed-template
//!   rendering layered on top of the engines
//!
//! # Example
//!
//! ```
//! use parlor_games::{Board, Player, games::fourinarow::rules};
//!
//! let mut board = Board::new();
//! let row = board.drop_tile(3, Player::X)?;
//! assert_eq!(row, 5); // lands on the bottom row
//! assert!(!rules::win::has_won(&board, Player::X));
//! # Ok::<(), parlor_games::DropError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod console;
pub mod games;

// Crate-level exports - Four-in-a-Row engine
pub use games::fourinarow::{Board, Cell, DropError, HEIGHT, Player, WIDTH};

// Crate-level exports - Tower of Hanoi engine
pub use games::hanoi::{DEFAULT_DISKS, DiskMove, MoveError, Peg, Towers};

// Crate-level exports - command line surface
pub use cli::{Cli, Command};
