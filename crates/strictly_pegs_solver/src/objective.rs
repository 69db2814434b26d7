//! Which terminal state each side is searching for.

use strictly_pegs::{GameState, Player};

/// The winning terminal state a player tries to force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Objective {
    /// Player one ends up to move on an empty board.
    #[strum(to_string = "player one wins")]
    PlayerOneWins,
    /// Player two ends up to move on an empty board.
    #[strum(to_string = "player two wins")]
    PlayerTwoWins,
}

impl Objective {
    /// The objective of the given mover.
    pub fn for_mover(player: Player) -> Self {
        match player {
            Player::One => Objective::PlayerOneWins,
            Player::Two => Objective::PlayerTwoWins,
        }
    }

    /// The objective of whoever is to move in a running game, `None` once it is over.
    pub fn for_state(state: GameState) -> Option<Self> {
        state.to_move().map(Self::for_mover)
    }

    /// The outcome a terminal state represents, `None` while the game runs.
    pub fn from_terminal(state: GameState) -> Option<Self> {
        match state {
            GameState::PlayerOneWins => Some(Objective::PlayerOneWins),
            GameState::PlayerTwoWins => Some(Objective::PlayerTwoWins),
            GameState::PlayerOnesTurn | GameState::PlayerTwosTurn => None,
        }
    }

    /// The other side's objective.
    pub fn opponent(self) -> Self {
        match self {
            Objective::PlayerOneWins => Objective::PlayerTwoWins,
            Objective::PlayerTwoWins => Objective::PlayerOneWins,
        }
    }

    /// The player this objective favours.
    pub fn player(self) -> Player {
        match self {
            Objective::PlayerOneWins => Player::One,
            Objective::PlayerTwoWins => Player::Two,
        }
    }

    /// The terminal game state this objective names.
    pub fn state(self) -> GameState {
        match self {
            Objective::PlayerOneWins => GameState::PlayerOneWins,
            Objective::PlayerTwoWins => GameState::PlayerTwoWins,
        }
    }
}
