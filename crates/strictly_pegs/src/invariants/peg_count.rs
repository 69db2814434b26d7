//! Peg count invariant: the tracked count matches the board.

use super::Invariant;
use crate::game::Game;

/// Invariant: the number of pegs left equals the number of occupied tiles.
pub struct PegCountInvariant;

impl Invariant<Game> for PegCountInvariant {
    fn holds(game: &Game) -> bool {
        game.peg_count() == game.board().count_occupied()
    }

    fn description() -> &'static str {
        "Pegs left match the occupied tiles on the board"
    }
}
