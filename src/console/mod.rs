//! Interactive console front end.
//!
//! The turn loops here are the outer collaborator the engines are written
//! for: render the state, read a line, parse it, hand the move to the
//! engine, then consult the terminal predicates. All blocking happens
//! here; the engines never touch I/O. Both loops are generic over their
//! reader and writer so tests can drive a whole game from byte buffers.

pub mod input;
pub mod view;

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::games::fourinarow::{Board, DropError, Player, WIDTH, rules};
use crate::games::hanoi::{MoveError, Towers};
use input::Command;

const FOURINAROW_BANNER: &str = "\
Four-in-a-Row

Two players take turns dropping tiles into one of seven columns, trying
to make four-in-a-row horizontally, vertically, or diagonally.
";

const HANOI_BANNER: &str = "\
The Tower of Hanoi

Move the tower of disks, one disk at a time, to another peg. Larger
disks cannot rest on top of smaller disks.
";

const FAREWELL: &str = "Thanks for playing!";

/// Runs a single game of Four-in-a-Row, X moving first.
pub fn run_fourinarow(mut input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(output, "{FOURINAROW_BANNER}")?;

    let mut board = Board::new();
    let mut player = Player::X;

    loop {
        writeln!(output)?;
        write!(output, "{}", view::render_board(&board))?;
        writeln!(output, "Player {player}, enter a column from 1 to {WIDTH}, or QUIT:")?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(output, "{FAREWELL}")?;
            return Ok(());
        };

        let column = match input::parse_column(&line) {
            Ok(Command::Quit) => {
                writeln!(output, "{FAREWELL}")?;
                return Ok(());
            }
            Ok(Command::Move(column)) => column,
            Err(_) => {
                writeln!(output, "Enter a number from 1 to {WIDTH}.")?;
                continue;
            }
        };

        match board.drop_tile(column, player) {
            Ok(row) => debug!(column, row, %player, "tile dropped"),
            Err(DropError::ColumnFull) => {
                writeln!(output, "That column is full, select another one.")?;
                continue;
            }
            Err(err) => {
                writeln!(output, "Invalid move: {err}.")?;
                continue;
            }
        }

        if rules::win::has_won(&board, player) {
            info!(%player, "four-in-a-row");
            writeln!(output)?;
            write!(output, "{}", view::render_board(&board))?;
            writeln!(output, "Player {player} has won!")?;
            return Ok(());
        }
        if rules::tie::is_full(&board) {
            info!("board full with no winner");
            writeln!(output)?;
            write!(output, "{}", view::render_board(&board))?;
            writeln!(output, "There is a tie!")?;
            return Ok(());
        }

        player = player.opponent();
    }
}

/// Runs a single game of the Tower of Hanoi.
pub fn run_hanoi(mut input: impl BufRead, mut output: impl Write, total_disks: u8) -> Result<()> {
    writeln!(output, "{HANOI_BANNER}")?;

    let mut towers = Towers::new(total_disks);

    loop {
        writeln!(output)?;
        write!(output, "{}", view::render_towers(&towers))?;
        writeln!(output, "Enter the letters of \"from\" and \"to\" pegs, or QUIT.")?;
        writeln!(output, "(e.g., AB moves a disk from peg A to peg B.)")?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            writeln!(output, "{FAREWELL}")?;
            return Ok(());
        };

        let mv = match input::parse_peg_pair(&line) {
            Ok(Command::Quit) => {
                writeln!(output, "{FAREWELL}")?;
                return Ok(());
            }
            Ok(Command::Move(mv)) => mv,
            Err(_) => {
                writeln!(output, "Invalid move. Enter one of AB, AC, BA, BC, CA, or CB.")?;
                continue;
            }
        };

        match towers.validate(mv.from, mv.to) {
            Ok(()) => {}
            Err(MoveError::EmptySource) => {
                writeln!(output, "Nothing to move from an empty peg.")?;
                continue;
            }
            Err(MoveError::SizeViolation) => {
                writeln!(output, "Invalid move. A larger disk cannot rest on a smaller disk.")?;
                continue;
            }
        }

        let disk = towers
            .apply(mv.from, mv.to)
            .context("validated move failed to apply")?;
        debug!(%mv, disk, "disk moved");

        if towers.is_complete() {
            info!("tower rebuilt");
            writeln!(output)?;
            write!(output, "{}", view::render_towers(&towers))?;
            writeln!(output, "You won!")?;
            return Ok(());
        }
    }
}

/// Reads one line of input. Returns `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read player input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
