//! Scoped move application.

use std::ops::{Deref, DerefMut};
use strictly_pegs::{Game, IllegalMoveError, Move};
use tracing::warn;

/// A move applied to a game for the lifetime of the guard.
///
/// The move is undone when the guard drops, on every exit path: normal
/// scope end, `?` propagation and unwinding. While the guard lives the game
/// is reachable only through it.
#[derive(Debug)]
pub struct AppliedMove<'g> {
    game: &'g mut Game,
}

impl<'g> AppliedMove<'g> {
    /// Applies `mov` and returns the guard that will undo it.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`IllegalMoveError`]; the game is untouched and
    /// no guard exists.
    pub fn apply(game: &'g mut Game, mov: &Move) -> Result<Self, IllegalMoveError> {
        game.make_move(mov)?;
        Ok(Self { game })
    }
}

impl Deref for AppliedMove<'_> {
    type Target = Game;

    fn deref(&self) -> &Game {
        self.game
    }
}

impl DerefMut for AppliedMove<'_> {
    fn deref_mut(&mut self) -> &mut Game {
        self.game
    }
}

impl Drop for AppliedMove<'_> {
    fn drop(&mut self) {
        if self.game.undo().is_none() {
            warn!("Guarded move was already undone");
        }
    }
}
