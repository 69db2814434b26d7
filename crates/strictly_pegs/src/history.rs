//! Append-only move history.

use crate::action::Move;

/// Stack of applied moves, most recent last.
///
/// Entries are owned copies taken when the move was applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    moves: Vec<Move>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an applied move.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// The most recent move, without removing it.
    pub fn peek(&self) -> Option<&Move> {
        self.moves.last()
    }

    /// Removes and returns the most recent move.
    pub fn pop(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    /// Number of recorded moves.
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Whether no move has been recorded.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// All recorded moves, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Total pegs removed by the recorded moves.
    pub fn pegs_removed(&self) -> usize {
        self.moves.iter().map(Move::len).sum()
    }
}
