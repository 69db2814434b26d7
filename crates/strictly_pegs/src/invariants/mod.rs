//! First-class invariants for the peg game.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are checked in debug builds and can be tested independently.

use crate::game::Game;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

pub mod alternating_turn;
pub mod history_consistent;
pub mod peg_count;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use peg_count::PegCountInvariant;

type Check = (fn(&Game) -> bool, fn() -> &'static str);

/// Every peg-game invariant, checked in one pass.
pub struct PegInvariants;

impl PegInvariants {
    const CHECKS: [Check; 3] = [
        (
            <PegCountInvariant as Invariant<Game>>::holds,
            <PegCountInvariant as Invariant<Game>>::description,
        ),
        (
            <HistoryConsistentInvariant as Invariant<Game>>::holds,
            <HistoryConsistentInvariant as Invariant<Game>>::description,
        ),
        (
            <AlternatingTurnInvariant as Invariant<Game>>::holds,
            <AlternatingTurnInvariant as Invariant<Game>>::description,
        ),
    ];

    /// Checks every invariant, collecting each violation.
    pub fn check_all(game: &Game) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = Self::CHECKS
            .iter()
            .filter(|(holds, _)| !holds(game))
            .map(|(_, description)| InvariantViolation::new(description()))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
