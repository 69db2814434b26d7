//! Core domain types for the peg game.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Player one (moves first unless the game is adjourned).
    One,
    /// Player two.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Maps the snapshot turn flag to a player.
    pub fn from_first_flag(is_first_players_turn: bool) -> Self {
        if is_first_players_turn {
            Player::One
        } else {
            Player::Two
        }
    }
}

/// Current state of the game, derived from the pegs remaining and the turn.
///
/// Once the board is empty the player to move wins: their opponent took the
/// last peg.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum GameState {
    /// Player one is to move.
    #[strum(to_string = "Player one's turn")]
    PlayerOnesTurn,
    /// Player two is to move.
    #[strum(to_string = "Player two's turn")]
    PlayerTwosTurn,
    /// Player two removed the last peg.
    #[strum(to_string = "Player one wins")]
    PlayerOneWins,
    /// Player one removed the last peg.
    #[strum(to_string = "Player two wins")]
    PlayerTwoWins,
}

impl GameState {
    /// Derives the state from the number of pegs left and the player to move.
    pub fn derive(pegs_left: usize, to_move: Player) -> Self {
        match (pegs_left, to_move) {
            (0, Player::One) => GameState::PlayerOneWins,
            (0, Player::Two) => GameState::PlayerTwoWins,
            (_, Player::One) => GameState::PlayerOnesTurn,
            (_, Player::Two) => GameState::PlayerTwosTurn,
        }
    }

    /// Whether no further moves can be made.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::PlayerOneWins | GameState::PlayerTwoWins)
    }

    /// The player to move, if the game is still running.
    pub fn to_move(self) -> Option<Player> {
        match self {
            GameState::PlayerOnesTurn => Some(Player::One),
            GameState::PlayerTwosTurn => Some(Player::Two),
            GameState::PlayerOneWins | GameState::PlayerTwoWins => None,
        }
    }

    /// The winner, if the game is over.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameState::PlayerOneWins => Some(Player::One),
            GameState::PlayerTwoWins => Some(Player::Two),
            GameState::PlayerOnesTurn | GameState::PlayerTwosTurn => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }

    #[test]
    fn test_empty_board_means_player_to_move_wins() {
        assert_eq!(GameState::derive(0, Player::One), GameState::PlayerOneWins);
        assert_eq!(GameState::derive(0, Player::Two), GameState::PlayerTwoWins);
        assert_eq!(GameState::derive(3, Player::Two), GameState::PlayerTwosTurn);
    }

    #[test]
    fn test_terminal_states_have_winner_and_no_mover() {
        for state in <GameState as strum::IntoEnumIterator>::iter() {
            assert_eq!(state.is_terminal(), state.winner().is_some());
            assert_eq!(state.is_terminal(), state.to_move().is_none());
        }
    }
}
