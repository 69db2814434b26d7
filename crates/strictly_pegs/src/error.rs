//! Error types for game construction, move validation and snapshots.

use crate::action::Coord;
use crate::tile::TileState;
use derive_more::{Display, Error, From};

/// Which board axis a coordinate or dimension refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Axis {
    /// Columns.
    #[display("x")]
    X,
    /// Rows.
    #[display("y")]
    Y,
}

/// Error raised when rules or the initial board are invalid.
///
/// No game is created when construction fails.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConstructionError {
    /// The maximum take is below one.
    #[display(
        "The maximum number of pegs that a player can take must be greater than or equal to 1 (got {})",
        _0
    )]
    MaxBelowOne(#[error(not(source))] u32),

    /// The minimum take is below one.
    #[display(
        "The minimum number of pegs that a player can take must be greater than or equal to 1 (got {})",
        _0
    )]
    MinBelowOne(#[error(not(source))] u32),

    /// The maximum take does not exceed the minimum take.
    #[display(
        "The maximum number of pegs ({}) must be greater than the minimum number of pegs ({}) that a player can take",
        max,
        min
    )]
    MaxNotAboveMin {
        /// Configured minimum.
        min: u32,
        /// Configured maximum.
        max: u32,
    },

    /// The board is smaller than allowed along an axis.
    #[display("The board's {}-axis is too small ({} < {})", axis, len, min)]
    TooSmall {
        /// Offending axis.
        axis: Axis,
        /// Actual length.
        len: usize,
        /// Smallest allowed length.
        min: usize,
    },

    /// The board is larger than allowed along an axis.
    #[display("The board's {}-axis is too large ({} > {})", axis, len, max)]
    TooLarge {
        /// Offending axis.
        axis: Axis,
        /// Actual length.
        len: usize,
        /// Largest allowed length.
        max: usize,
    },

    /// Rows of the board have different widths.
    #[display("Row {} has {} tiles but row 0 has {}", row, len, expected)]
    Ragged {
        /// Index of the first mismatching row.
        row: usize,
        /// Width of that row.
        len: usize,
        /// Width of the first row.
        expected: usize,
    },
}

/// Error raised when a candidate move is illegal.
///
/// The game state is unchanged when a move is rejected, so the caller may retry.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum IllegalMoveError {
    /// Fewer cells than the rules' minimum.
    #[display("Illegal move: move count must be at least {} (got {})", min, count)]
    TooFew {
        /// Minimum take.
        min: u32,
        /// Cells in the candidate.
        count: usize,
    },

    /// More cells than the rules' maximum or the pegs left.
    #[display("Illegal move: move count must be at most {} (got {})", max, count)]
    TooMany {
        /// Effective maximum (rules' maximum bounded by the pegs left).
        max: usize,
        /// Cells in the candidate.
        count: usize,
    },

    /// The same cell appears more than once.
    #[display("Duplicate moves provided")]
    DuplicateMoves,

    /// A cell lies outside the board.
    #[display("{} out of bounds: {}", axis, coord)]
    OutOfBounds {
        /// The offending axis.
        axis: Axis,
        /// The offending cell.
        coord: Coord,
    },

    /// A cell does not hold a peg.
    #[display(
        "The game tile must be occupied to remove it: {}. It is currently {}.",
        coord,
        tile
    )]
    NotOccupied {
        /// The offending cell.
        coord: Coord,
        /// What the cell holds instead.
        tile: TileState,
    },

    /// Cells span several rows under x-only rules.
    #[display("Cannot take pegs from multiple rows")]
    MultipleRows,

    /// Cells do not form one contiguous run along a row or column.
    #[display("Violates adjacency: {}", _0)]
    NotAdjacent(#[error(not(source))] String),
}

/// Error raised while reading a snapshot.
#[derive(Debug, Display, Error, From)]
pub enum SnapshotError {
    /// The snapshot is not valid JSON of the expected shape.
    #[display("Malformed snapshot: {}", _0)]
    Json(serde_json::Error),

    /// The snapshot describes an invalid game.
    #[display("Invalid snapshot: {}", _0)]
    Construction(ConstructionError),
}
