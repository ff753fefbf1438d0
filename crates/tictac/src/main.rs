//! tictac - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tictac::{GameConfig, Replay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tui::run_tui(&config),
        Command::Replay { moves, json } => run_replay(&config, &moves, json),
    }
}

/// Run a headless replay and print the outcome
fn run_replay(config: &GameConfig, moves: &[usize], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(moves = ?moves, "Replaying moves");

    let replay = Replay::run(config, moves);
    if json {
        println!("{}", replay.to_json()?);
    } else {
        println!("{}", replay.to_text());
    }

    Ok(())
}
