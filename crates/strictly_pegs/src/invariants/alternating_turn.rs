//! Alternating turn invariant: the turn flips on every ply.

use super::Invariant;
use crate::game::Game;

/// Invariant: after an even number of plies the first player is to move,
/// after an odd number their opponent is.
pub struct AlternatingTurnInvariant;

impl Invariant<Game> for AlternatingTurnInvariant {
    fn holds(game: &Game) -> bool {
        let expected = if game.history().len() % 2 == 0 {
            game.first_player()
        } else {
            game.first_player().opponent()
        };
        game.to_move() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
