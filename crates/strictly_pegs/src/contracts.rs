//! Contract-based move validation.
//!
//! Each precondition is its own type with a `check` function. [`LegalMove`]
//! composes them in a fixed order, and the first failing check decides the
//! reported error.

use crate::action::Move;
use crate::error::{Axis, IllegalMoveError};
use crate::game::Game;
use crate::invariants::PegInvariants;
use crate::tile::TileState;
use std::collections::BTreeSet;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the move takes at least the rules' minimum.
pub struct TakesAtLeastMin;

impl TakesAtLeastMin {
    #[instrument(level = "trace", skip_all)]
    pub fn check(mov: &Move, game: &Game) -> Result<(), IllegalMoveError> {
        let min = game.rules().min_num_of_pegs_can_take();
        if mov.len() < min as usize {
            Err(IllegalMoveError::TooFew {
                min,
                count: mov.len(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move takes at most the rules' maximum, bounded by the pegs left.
///
/// Bounding by the pegs left keeps the message meaningful near the end of a game.
pub struct TakesAtMostMax;

impl TakesAtMostMax {
    #[instrument(level = "trace", skip_all)]
    pub fn check(mov: &Move, game: &Game) -> Result<(), IllegalMoveError> {
        let max = game
            .peg_count()
            .min(game.rules().max_num_of_pegs_can_take() as usize);
        if mov.len() > max {
            Err(IllegalMoveError::TooMany {
                max,
                count: mov.len(),
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: no cell is named twice.
pub struct DistinctCells;

impl DistinctCells {
    #[instrument(level = "trace", skip_all)]
    pub fn check(mov: &Move, _game: &Game) -> Result<(), IllegalMoveError> {
        let keys: BTreeSet<i64> = mov.iter().map(|cell| cell.partial_key()).collect();
        if keys.len() < mov.len() {
            Err(IllegalMoveError::DuplicateMoves)
        } else {
            Ok(())
        }
    }
}

/// Precondition: every cell lies on the board.
pub struct WithinBoard;

impl WithinBoard {
    #[instrument(level = "trace", skip_all)]
    pub fn check(mov: &Move, game: &Game) -> Result<(), IllegalMoveError> {
        let width = game.width() as i32;
        let height = game.height() as i32;
        for &coord in mov {
            if !(0..width).contains(&coord.x) {
                return Err(IllegalMoveError::OutOfBounds {
                    axis: Axis::X,
                    coord,
                });
            }
            if !(0..height).contains(&coord.y) {
                return Err(IllegalMoveError::OutOfBounds {
                    axis: Axis::Y,
                    coord,
                });
            }
        }
        Ok(())
    }
}

/// Precondition: every cell holds a peg.
pub struct AllOccupied;

impl AllOccupied {
    #[instrument(level = "trace", skip_all)]
    pub fn check(mov: &Move, game: &Game) -> Result<(), IllegalMoveError> {
        for &coord in mov {
            match game.board().at(coord) {
                Some(TileState::Occupied) => {}
                Some(tile @ (TileState::Vacant | TileState::NonExistent)) => {
                    return Err(IllegalMoveError::NotOccupied { coord, tile });
                }
                None => {
                    // WithinBoard runs first; reaching this is a caller bug.
                    warn!(%coord, "Occupancy checked before bounds");
                    return Err(IllegalMoveError::OutOfBounds {
                        axis: Axis::X,
                        coord,
                    });
                }
            }
        }
        Ok(())
    }
}

/// Precondition: under x-only rules all cells share one row.
pub struct SingleRowWhenXOnly;

impl SingleRowWhenXOnly {
    #[instrument(level = "trace", skip_all)]
    pub fn check(mov: &Move, game: &Game) -> Result<(), IllegalMoveError> {
        if !game.rules().x_only() {
            return Ok(());
        }
        let rows: BTreeSet<i32> = mov.iter().map(|cell| cell.y).collect();
        if rows.len() > 1 {
            Err(IllegalMoveError::MultipleRows)
        } else {
            Ok(())
        }
    }
}

/// Precondition: under adjacency rules a multi-cell move is one contiguous run.
///
/// The run lies along a single row (consecutive x) or a single column
/// (consecutive y). Cells may be given in any order.
pub struct ContiguousRun;

impl ContiguousRun {
    #[instrument(level = "trace", skip_all)]
    pub fn check(mov: &Move, game: &Game) -> Result<(), IllegalMoveError> {
        if !game.rules().adjacent_required() || mov.len() < 2 {
            return Ok(());
        }

        let mut xs: Vec<i32> = mov.iter().map(|cell| cell.x).collect();
        let mut ys: Vec<i32> = mov.iter().map(|cell| cell.y).collect();
        xs.sort_unstable();
        ys.sort_unstable();
        let distinct_ys = ys.iter().collect::<BTreeSet<_>>().len();

        if distinct_ys == 1 {
            Self::unit_steps(&xs)
        } else if distinct_ys == mov.len() {
            if xs.first() != xs.last() {
                return Err(IllegalMoveError::NotAdjacent(
                    "cells span several rows and several columns".to_string(),
                ));
            }
            Self::unit_steps(&ys)
        } else {
            Err(IllegalMoveError::NotAdjacent(
                "cells share a row but not all of them".to_string(),
            ))
        }
    }

    /// Sorted values must ascend by exactly one.
    fn unit_steps(sorted: &[i32]) -> Result<(), IllegalMoveError> {
        match sorted.windows(2).find(|pair| pair[0] + 1 != pair[1]) {
            Some(pair) => Err(IllegalMoveError::NotAdjacent(format!(
                "{}, {}",
                pair[0], pair[1]
            ))),
            None => Ok(()),
        }
    }
}

/// Composite precondition: all checks, in their reporting order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(level = "trace", skip_all, fields(pegs_left = game.peg_count()))]
    pub fn check(mov: &Move, game: &Game) -> Result<(), IllegalMoveError> {
        TakesAtLeastMin::check(mov, game)?;
        TakesAtMostMax::check(mov, game)?;
        DistinctCells::check(mov, game)?;
        WithinBoard::check(mov, game)?;
        AllOccupied::check(mov, game)?;
        SingleRowWhenXOnly::check(mov, game)?;
        ContiguousRun::check(mov, game)?;
        Ok(())
    }
}

/// Asserts that all game invariants hold (panic on violation in debug builds).
///
/// Release builds skip the check.
#[instrument(level = "trace", skip(game))]
pub fn assert_invariants(game: &Game) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = PegInvariants::check_all(game) {
        for violation in &violations {
            warn!(description = %violation.description, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "Game invariants violated: {:?}", violations);
    }
}
