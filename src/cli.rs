//! Command-line interface for parlor_games.

use crate::games::hanoi::DEFAULT_DISKS;
use clap::{Parser, Subcommand};

/// Parlor Games - turn-based text puzzle games
#[derive(Parser, Debug)]
#[command(name = "parlor_games")]
#[command(about = "Turn-based text puzzle games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available games
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Drop tiles on a 7x6 grid and race to four-in-a-row
    FourInARow,

    /// Rebuild the tower of disks on another peg
    Hanoi {
        /// Number of disks on the starting peg
        #[arg(long, default_value_t = DEFAULT_DISKS, value_parser = clap::value_parser!(u8).range(3..=10))]
        disks: u8,
    },
}
