//! Parlor Games - turn-based text puzzle games.

use anyhow::Result;
use clap::Parser;
use parlor_games::cli::{Cli, Command};
use parlor_games::console;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    match cli.command {
        Command::FourInARow => {
            info!("starting Four-in-a-Row");
            console::run_fourinarow(stdin.lock(), stdout.lock())
        }
        Command::Hanoi { disks } => {
            info!(disks, "starting the Tower of Hanoi");
            console::run_hanoi(stdin.lock(), stdout.lock(), disks)
        }
    }
}
