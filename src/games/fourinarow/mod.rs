//! Four-in-a-Row: a tile-drop game on a 7x6 grid.

mod types;

pub mod rules;

pub use types::{Board, Cell, DropError, HEIGHT, Player, WIDTH};
