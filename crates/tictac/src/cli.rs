//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tictac - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictac.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves without a UI and print the result
    Replay {
        /// Comma-separated 1-based positions, e.g. 1,5,9
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print a JSON snapshot instead of a text grid
        #[arg(long)]
        json: bool,
    },
}
