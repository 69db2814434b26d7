//! The game engine: board, rules, turn and history.

use crate::action::Move;
use crate::board::Board;
use crate::contracts::{LegalMove, assert_invariants};
use crate::error::{ConstructionError, IllegalMoveError, SnapshotError};
use crate::history::History;
use crate::rules::Rules;
use crate::snapshot::{Snapshot, SnapshotRef};
use crate::tile::TileState;
use crate::types::{GameState, Player};
use tracing::{debug, error, instrument};

/// A peg game in progress (or finished).
///
/// The game owns its board, a copy of its rules and its history. The state
/// ([`GameState`]) is never stored; it is derived from the pegs left and the
/// player to move. Transitions happen only through [`Game::make_move`] and
/// [`Game::undo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    rules: Rules,
    board: Board,
    to_move: Player,
    first_player: Player,
    pegs_left: usize,
    initial_pegs: usize,
    history: History,
}

impl Game {
    /// Creates a game with player one to move.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if the rules are invalid.
    #[instrument(skip(board), fields(width = board.width(), height = board.height()))]
    pub fn new(rules: Rules, board: Board) -> Result<Self, ConstructionError> {
        Self::with_first_player(rules, board, Player::One)
    }

    /// Creates a game with the given player to move, e.g. to resume an adjourned game.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if the rules are invalid.
    #[instrument(skip(board), fields(width = board.width(), height = board.height()))]
    pub fn with_first_player(
        rules: Rules,
        board: Board,
        first_player: Player,
    ) -> Result<Self, ConstructionError> {
        rules.validate()?;

        let pegs_left = board.count_occupied();
        debug!(pegs_left, ?first_player, "Created game");

        Ok(Self {
            rules,
            board,
            to_move: first_player,
            first_player,
            pegs_left,
            initial_pegs: pegs_left,
            history: History::new(),
        })
    }

    /// Creates a game from rows of tiles.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] if the rules or the board are invalid.
    pub fn from_rows(
        rules: Rules,
        rows: Vec<Vec<TileState>>,
        first_player: Player,
    ) -> Result<Self, ConstructionError> {
        Self::with_first_player(rules, Board::from_rows(rows)?, first_player)
    }

    /// Returns the rules (a copy).
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state, derived from the pegs left and the turn.
    pub fn state(&self) -> GameState {
        GameState::derive(self.pegs_left, self.to_move)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.board.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.board.height()
    }

    /// Pegs left on the board.
    pub fn peg_count(&self) -> usize {
        self.pegs_left
    }

    /// Pegs on the board when the game was created.
    pub fn initial_peg_count(&self) -> usize {
        self.initial_pegs
    }

    /// The player whose turn it is (or who wins, once the board is empty).
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The player who moved first in this game.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Snapshot turn flag.
    pub fn is_first_players_turn(&self) -> bool {
        self.to_move == Player::One
    }

    /// The move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The tile at `(x, y)`, or `None` if off the board.
    pub fn tile(&self, x: i32, y: i32) -> Option<TileState> {
        self.board.get(x, y)
    }

    /// Validates a candidate move without applying it.
    ///
    /// # Errors
    ///
    /// Returns the first failing check, in this order: too few, too many,
    /// duplicate cells, out of bounds, not occupied, multiple rows (x-only),
    /// adjacency.
    #[instrument(level = "debug", skip_all, fields(mov = %mov))]
    pub fn validate_move(&self, mov: &Move) -> Result<(), IllegalMoveError> {
        LegalMove::check(mov, self)
    }

    /// Applies a move: vacates its cells, records it and passes the turn.
    ///
    /// The move is copied before validation, so the history never shares
    /// storage with the caller.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalMoveError`] and leaves the game untouched if the move
    /// is illegal.
    #[instrument(level = "debug", skip_all, fields(mov = %mov, player = %self.to_move))]
    pub fn make_move(&mut self, mov: &Move) -> Result<(), IllegalMoveError> {
        let copy = mov.clone();

        if let Err(e) = LegalMove::check(&copy, self) {
            debug!(error = %e, "Rejected move");
            return Err(e);
        }

        for &cell in &copy {
            self.board.set(cell, TileState::Vacant);
        }
        self.pegs_left -= copy.len();
        self.history.push(copy);
        self.to_move = self.to_move.opponent();

        assert_invariants(self);

        Ok(())
    }

    /// Reverts the most recent move and returns it.
    ///
    /// Returns `None` (and changes nothing) at the start of the game.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> Option<Move> {
        let mov = self.history.pop()?;

        for &cell in &mov {
            self.board.set(cell, TileState::Occupied);
        }
        self.pegs_left += mov.len();
        self.to_move = self.to_move.opponent();

        assert_invariants(self);

        debug!(mov = %mov, "Undid move");
        Some(mov)
    }

    /// A copy of the most recent move, if any.
    pub fn peek_move(&self) -> Option<Move> {
        self.history.peek().cloned()
    }

    /// Canonical JSON snapshot: rules, board and turn flag, without whitespace.
    #[instrument(skip(self))]
    pub fn to_snapshot(&self) -> String {
        let snapshot = SnapshotRef {
            rules: &self.rules,
            board: &self.board,
            is_first_players_turn: self.is_first_players_turn(),
        };
        match serde_json::to_string(&snapshot) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to serialize snapshot");
                String::new()
            }
        }
    }

    /// Rebuilds a game from a snapshot. The history starts empty.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the JSON is malformed or describes an
    /// invalid game.
    #[instrument(skip(json))]
    pub fn from_snapshot(json: &str) -> Result<Self, SnapshotError> {
        let Snapshot {
            rules,
            board,
            is_first_players_turn,
        } = serde_json::from_str(json)?;
        Ok(Self::with_first_player(
            rules,
            board,
            Player::from_first_flag(is_first_players_turn),
        )?)
    }

    /// Dumps the board as a table to the debug log.
    pub fn print(&self) {
        debug!("\n{}", self);
    }

    /// Overwrites a tile without bookkeeping, to exercise invariant checks.
    #[cfg(test)]
    pub(crate) fn corrupt_tile_for_test(&mut self, coord: crate::action::Coord, tile: TileState) {
        self.board.set(coord, tile);
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{} ({} pegs left)", self.board, self.state(), self.pegs_left)
    }
}
