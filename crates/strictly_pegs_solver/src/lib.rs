//! Strictly Pegs solver - move enumeration and exhaustive search
//!
//! Given a [`strictly_pegs::Game`], this crate lists every legal move in a
//! canonical order and searches the full game tree for the best one.
//!
//! # Architecture
//!
//! - **Combinatorics**: exact counts and combinadic unranking of k-subsets.
//! - **Mechanics**: the legal-move enumerator built on them.
//! - **Objective**: the terminal state each side plays for.
//! - **Guard**: [`AppliedMove`] pairs every applied move with its undo.
//! - **DFS**: the search itself, reporting an [`Analysis`].
//!
//! # Example
//!
//! ```
//! use strictly_pegs::{Coord, Game, Layout, Rules};
//! use strictly_pegs_solver::analyze;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(Rules::new(true, 1, 2, true), Layout::Triangle2x2.board()?)?;
//! let analysis = analyze(&mut game)?;
//! assert!(analysis.forced_win());
//! assert_eq!(analysis.best_move().cells(), &[Coord::new(0, 0), Coord::new(1, 0)]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod dfs;
mod error;
mod guard;
mod mechanics;
mod objective;
mod tree;

// Public modules
pub mod combinatorics;

// Crate-level exports - Search
pub use dfs::{Analysis, analyze, solve};
pub use guard::AppliedMove;
pub use objective::Objective;

// Crate-level exports - Enumeration
pub use combinatorics::{Combinadic, Combinations, combination, combinations, factorial, permutation};
pub use mechanics::legal_moves;

// Crate-level exports - Errors
pub use error::SolverError;
