//! The exhaustive solver as a player.

use super::Seat;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_pegs::{Game, Move};
use strictly_pegs_solver::analyze;
use tracing::{info, instrument};

/// Plays the solver's best move.
#[derive(Debug, Clone)]
pub struct SolverSeat {
    name: String,
}

impl SolverSeat {
    /// Creates a solver seat.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Seat for SolverSeat {
    #[instrument(skip_all, fields(seat = %self.name))]
    fn choose_move(
        &mut self,
        game: &mut Game,
        _input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Move> {
        let analysis = analyze(game).context("Solver failed")?;
        info!(
            best_move = %analysis.best_move(),
            forced_win = analysis.forced_win(),
            "Solver chose move"
        );
        writeln!(out, "{} plays {}", self.name, analysis.best_move())
            .context("Failed to write move")?;
        Ok(analysis.best_move().clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
