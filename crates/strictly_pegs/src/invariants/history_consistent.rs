//! History consistency invariant: history accounts for every removed peg.

use super::Invariant;
use crate::game::Game;
use crate::tile::TileState;

/// Invariant: pegs removed by the history equal the pegs missing since the
/// start, and every cell in the history is vacant.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        let history = game.history();
        let removed = game.initial_peg_count().checked_sub(game.peg_count());

        removed == Some(history.pegs_removed())
            && history
                .moves()
                .iter()
                .flat_map(|mv| mv.iter())
                .all(|&cell| game.board().at(cell) == Some(TileState::Vacant))
    }

    fn description() -> &'static str {
        "History accounts for every removed peg"
    }
}
