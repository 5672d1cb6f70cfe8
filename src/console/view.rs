//! Fixed-template text rendering for both games.
//!
//! Renderers read the full state once per turn and produce a fixed-width
//! text grid; they never mutate anything.

use crate::games::fourinarow::{Board, Cell, Player, WIDTH};
use crate::games::hanoi::{Peg, Towers};
use strum::IntoEnumIterator;

/// Renders the board template: labeled columns, a border, and one line
/// per board row with `.` for empty cells.
pub fn render_board(board: &Board) -> String {
    let labels: String = (1..=WIDTH).map(|column| column.to_string()).collect();
    let border = format!("    +{}+", "-".repeat(WIDTH));

    let mut out = String::new();
    out.push_str(&format!("     {labels}\n"));
    out.push_str(&border);
    out.push('\n');
    for row in board.rows() {
        out.push_str("    |");
        for cell in row {
            out.push(match cell {
                Cell::Empty => '.',
                Cell::Occupied(Player::X) => 'X',
                Cell::Occupied(Player::O) => 'O',
            });
        }
        out.push_str("|\n");
    }
    out.push_str(&border);
    out.push('\n');
    out
}

/// Renders the three pegs level by level, top line first, then the peg
/// labels.
///
/// Each level shows either a bare pole segment or a disk sized to its
/// number: disk 3 draws as `@@@_3@@@`.
pub fn render_towers(towers: &Towers) -> String {
    let total = towers.total_disks() as usize;

    let mut out = String::new();
    for level in (0..=total).rev() {
        for peg in Peg::iter() {
            match towers.peg(peg).get(level) {
                Some(&disk) => push_disk(&mut out, disk, total),
                None => push_pole(&mut out, total),
            }
        }
        out.push('\n');
    }

    let gap = " ".repeat(total);
    out.push_str(&format!("{gap}A{gap}{gap} B{gap}{gap} C{gap}\n"));
    out
}

fn push_disk(out: &mut String, disk: u8, total: usize) {
    let pad = " ".repeat(total - disk as usize);
    let shell = "@".repeat(disk as usize);
    out.push_str(&format!("{pad}{shell}_{disk}{shell}{pad}"));
}

fn push_pole(out: &mut String, total: usize) {
    let pad = " ".repeat(total);
    out.push_str(&format!("{pad}||{pad}"));
}
