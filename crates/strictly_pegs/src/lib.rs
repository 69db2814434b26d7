//! Strictly Pegs - a peg-removal game for two players
//!
//! Players alternately remove pegs from a board. The rules decide how many
//! pegs one ply may take and whether they must form a contiguous run along a
//! row (or a column). Whoever removes the last peg loses.
//!
//! # Architecture
//!
//! - **Game**: the engine. Owns the board, a copy of the rules and the history.
//! - **Contracts**: one precondition type per validation rule, composed by
//!   [`contracts::LegalMove`].
//! - **Invariants**: properties checked after every transition in debug builds.
//! - **Snapshots**: canonical JSON for persisting and comparing positions.
//!
//! # Example
//!
//! ```
//! use strictly_pegs::{Game, GameState, Layout, Move, Rules};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(Rules::default(), Layout::Triangle2x2.board()?)?;
//! game.make_move(&Move::single(0, 0))?;
//! assert_eq!(game.state(), GameState::PlayerTwosTurn);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod error;
mod game;
mod history;
mod layouts;
mod rules;
mod snapshot;
mod tile;
mod types;

// Public modules
pub mod contracts;
pub mod invariants;

// Crate-level exports - Moves
pub use action::{Coord, Move};

// Crate-level exports - Board and tiles
pub use board::Board;
pub use layouts::Layout;
pub use tile::{TileState, UnknownTileCode};

// Crate-level exports - Rules
pub use rules::{MAX_X, MAX_Y, MIN_X, MIN_Y, Rules};

// Crate-level exports - Engine
pub use game::Game;
pub use history::History;
pub use types::{GameState, Player};

// Crate-level exports - Errors
pub use error::{Axis, ConstructionError, IllegalMoveError, SnapshotError};
