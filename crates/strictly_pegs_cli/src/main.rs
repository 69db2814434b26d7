//! Strictly Pegs - Unified CLI
//!
//! Play and analyze peg-removal games from the terminal.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use strictly_pegs_cli::cli::{Cli, Command, GameArgs};
use strictly_pegs_cli::{PegConfig, commands};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = PegConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Layouts => commands::run_layouts(&mut out),
        Command::Moves { game } => commands::run_moves(&load_game(&config, &game)?, &mut out),
        Command::Solve { game } => commands::run_solve(&mut load_game(&config, &game)?, &mut out),
        Command::Snapshot { game } => {
            commands::run_snapshot(&load_game(&config, &game)?, &mut out)
        }
        Command::Autoplay { game } => {
            commands::run_autoplay(&mut load_game(&config, &game)?, &mut out).map(|_| ())
        }
        Command::Play { game, players } => {
            let game = load_game(&config, &game)?;
            let mut input = io::stdin().lock();
            commands::run_play(game, players, &mut input, &mut out).map(|_| ())
        }
    }?;

    out.flush().context("Failed to flush output")?;
    Ok(())
}

/// Builds the starting position for a command.
#[instrument(skip_all)]
fn load_game(config: &PegConfig, args: &GameArgs) -> Result<strictly_pegs::Game> {
    let game = commands::starting_game(config, args)?;
    info!(
        width = game.width(),
        height = game.height(),
        pegs = game.peg_count(),
        to_move = %game.to_move(),
        "Game ready"
    );
    Ok(game)
}
