//! Command handlers.

use crate::cli::{GameArgs, Seating};
use crate::config::PegConfig;
use crate::orchestrator::Orchestrator;
use crate::players::{HumanSeat, Seat, SolverSeat};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_pegs::{Game, Layout, Player};
use strictly_pegs_solver::{analyze, legal_moves, solve};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

/// Builds the starting position from the config, the overrides or a snapshot.
#[instrument(skip_all)]
pub fn starting_game(config: &PegConfig, args: &GameArgs) -> Result<Game> {
    if let Some(json) = &args.from_snapshot {
        return Game::from_snapshot(json).context("Failed to read snapshot");
    }
    config
        .clone()
        .with_overrides(args)
        .build_game()
        .context("Invalid game configuration")
}

/// Lists the layout catalog.
pub fn run_layouts(out: &mut dyn Write) -> Result<()> {
    for layout in Layout::iter() {
        let board = layout.board().context("Layout failed to build")?;
        writeln!(
            out,
            "{:<22} {}x{}  {:>2} pegs",
            layout,
            board.width(),
            board.height(),
            board.count_occupied()
        )?;
    }
    Ok(())
}

/// Lists the legal moves of a position, one per line.
pub fn run_moves(game: &Game, out: &mut dyn Write) -> Result<()> {
    let moves = legal_moves(&game.rules(), game.board(), game.state());
    info!(count = moves.len(), "Enumerated moves");
    writeln!(out, "{}", game)?;
    for mov in &moves {
        writeln!(out, "{}", mov)?;
    }
    writeln!(out, "{} legal moves", moves.len())?;
    Ok(())
}

/// Prints the solver's analysis of a position.
pub fn run_solve(game: &mut Game, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", game)?;
    let analysis = analyze(game).context("Solver failed")?;
    if analysis.best_move().is_empty() {
        writeln!(out, "The game is over")?;
        return Ok(());
    }
    let verdict = if analysis.forced_win() {
        "forced win"
    } else {
        "no forced win"
    };
    writeln!(
        out,
        "Best move for player {}: {} ({}, {} positions searched)",
        game.to_move(),
        analysis.best_move(),
        verdict,
        analysis.nodes_visited()
    )?;
    Ok(())
}

/// Prints the snapshot of a position.
pub fn run_snapshot(game: &Game, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{}", game.to_snapshot())?;
    Ok(())
}

/// Lets the solver play both sides, printing every ply.
#[instrument(skip_all)]
pub fn run_autoplay(game: &mut Game, out: &mut dyn Write) -> Result<Player> {
    writeln!(out, "{}", game)?;
    loop {
        if let Some(winner) = game.state().winner() {
            writeln!(out, "Player {} wins after {} plies", winner, game.history().len())?;
            return Ok(winner);
        }
        let player = game.to_move();
        let mov = solve(game).context("Solver failed")?;
        game.make_move(&mov)
            .with_context(|| format!("Solver produced an illegal move {}", mov))?;
        writeln!(out, "\nPlayer {} takes {}\n{}", player, mov, game)?;
    }
}

/// Plays interactively with the given seating.
///
/// The first seat belongs to whoever moves first in `game`.
pub fn run_play(
    game: Game,
    seating: Seating,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<Player> {
    let seat = |human: bool, player: Player| -> Box<dyn Seat> {
        let name = format!("Player {}", player);
        if human {
            Box::new(HumanSeat::new(name))
        } else {
            Box::new(SolverSeat::new(name))
        }
    };
    let (first_human, second_human) = match seating {
        Seating::PersonComputer => (true, false),
        Seating::ComputerPerson => (false, true),
        Seating::PersonPerson => (true, true),
    };
    let (one, two) = match game.first_player() {
        Player::One => (seat(first_human, Player::One), seat(second_human, Player::Two)),
        Player::Two => (seat(second_human, Player::One), seat(first_human, Player::Two)),
    };

    writeln!(out, "Enter moves as x,y pairs separated by spaces, e.g. 0,0 1,0")?;
    Orchestrator::new(game, one, two).run(input, out)
}
