//! First-class move types.
//!
//! A move is a value: the set of cells a player vacates in one ply. The
//! engine copies every move it is given, so a caller's `Move` can never
//! alias the game's history.

use crate::rules::{MAX_X, MAX_Y};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A single cell reference, `x` being the column and `y` the row.
///
/// Coordinates are signed so that off-board input can be represented and
/// rejected by validation rather than by the type system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Scalar key of a partial move, used for duplicate detection.
    ///
    /// Distinct in-board cells always map to distinct keys. Widened to `i64`
    /// so arbitrary off-board input cannot overflow before bounds are checked.
    pub fn partial_key(self) -> i64 {
        i64::from(self.x) + i64::from(self.y) * MAX_X.max(MAX_Y) as i64
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ x: {}, y: {} }}", self.x, self.y)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The cells removed in one ply.
///
/// Order is preserved as given; validation is order-independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move {
    cells: Vec<Coord>,
}

impl Move {
    /// Creates a move from its cells.
    #[instrument(level = "trace")]
    pub fn new(cells: Vec<Coord>) -> Self {
        Self { cells }
    }

    /// A move removing a single peg.
    pub fn single(x: i32, y: i32) -> Self {
        Self {
            cells: vec![Coord::new(x, y)],
        }
    }

    /// The cells of this move.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Mutable access to the cells, for callers editing a pending move.
    pub fn cells_mut(&mut self) -> &mut Vec<Coord> {
        &mut self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the move removes nothing (the solver's answer on a finished game).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", cell)?;
        }
        write!(f, "]")
    }
}

impl From<Vec<Coord>> for Move {
    fn from(cells: Vec<Coord>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Coord> for Move {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Move {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
