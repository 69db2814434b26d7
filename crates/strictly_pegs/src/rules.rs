//! Game rules and board limits.

use crate::error::ConstructionError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The minimum number of tiles on the x-axis.
pub const MIN_X: usize = 2;
/// The minimum number of tiles on the y-axis.
pub const MIN_Y: usize = 2;
/// The largest number of tiles on the x-axis. No physical board is larger.
pub const MAX_X: usize = 10;
/// The largest number of tiles on the y-axis. No physical board is larger.
pub const MAX_Y: usize = 10;

/// The configurable rules of a game.
///
/// Rules are a `Copy` value: a game keeps its own copy, so nothing the caller
/// does afterwards can change a live game's rules. Field order matches the
/// snapshot format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rules {
    /// Multi-peg moves must be one contiguous run along a row or column.
    #[getter(copy)]
    adjacent_required: bool,
    /// Most pegs a player may take in one ply.
    #[getter(copy)]
    max_num_of_pegs_can_take: u32,
    /// Fewest pegs a player must take in one ply.
    #[getter(copy)]
    min_num_of_pegs_can_take: u32,
    /// Multi-peg moves are restricted to a single row.
    #[getter(copy)]
    x_only: bool,
}

impl Rules {
    /// Creates a rule set. Validation happens when a game is built from it.
    #[instrument]
    pub fn new(adjacent_required: bool, min: u32, max: u32, x_only: bool) -> Self {
        Self {
            adjacent_required,
            max_num_of_pegs_can_take: max,
            min_num_of_pegs_can_take: min,
            x_only,
        }
    }

    /// Validates the rule invariant: both counts at least one, max above min.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    #[instrument]
    pub fn validate(&self) -> Result<(), ConstructionError> {
        if self.max_num_of_pegs_can_take < 1 {
            return Err(ConstructionError::MaxBelowOne(self.max_num_of_pegs_can_take));
        }
        if self.min_num_of_pegs_can_take < 1 {
            return Err(ConstructionError::MinBelowOne(self.min_num_of_pegs_can_take));
        }
        if self.max_num_of_pegs_can_take <= self.min_num_of_pegs_can_take {
            return Err(ConstructionError::MaxNotAboveMin {
                min: self.min_num_of_pegs_can_take,
                max: self.max_num_of_pegs_can_take,
            });
        }
        Ok(())
    }
}

impl Default for Rules {
    /// Adjacent, x-only, one or two pegs per ply.
    fn default() -> Self {
        Self::new(true, 1, 2, true)
    }
}
