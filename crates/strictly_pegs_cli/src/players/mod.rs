//! Seat trait and implementations.

mod human;
mod solver;

pub use human::{HumanSeat, ParseMoveError, parse_move};
pub use solver::SolverSeat;

use anyhow::Result;
use std::io::{BufRead, Write};
use strictly_pegs::{Game, Move};

/// Something that chooses moves for one side.
pub trait Seat {
    /// Chooses the next move for the side to move.
    ///
    /// The game is lent mutably so a seat may search it; it must be left in
    /// the position it was given. Typed moves come from `input`, prompts go
    /// to `out`.
    fn choose_move(
        &mut self,
        game: &mut Game,
        input: &mut dyn BufRead,
        out: &mut dyn Write,
    ) -> Result<Move>;

    /// Returns the seat's display name.
    fn name(&self) -> &str;

    /// Whether an illegal move from this seat should be retried rather than
    /// treated as fatal.
    fn may_retry(&self) -> bool {
        false
    }
}
