//! The rectangular game board.

use crate::action::Coord;
use crate::error::{Axis, ConstructionError};
use crate::rules::{MAX_X, MAX_Y, MIN_X, MIN_Y};
use crate::tile::TileState;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A rectangular grid of tiles, stored row-major as `rows[y][x]`.
///
/// A `Board` value is always within the size limits and rectangular; every
/// constructor validates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Board {
    rows: Vec<Vec<TileState>>,
}

impl Board {
    /// Builds a board from its rows.
    ///
    /// # Errors
    ///
    /// Fails if either axis is outside `MIN..=MAX` or the rows differ in width.
    #[instrument(skip(rows), fields(height = rows.len()))]
    pub fn from_rows(rows: Vec<Vec<TileState>>) -> Result<Self, ConstructionError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);

        if width > MAX_X {
            return Err(ConstructionError::TooLarge {
                axis: Axis::X,
                len: width,
                max: MAX_X,
            });
        }
        if width < MIN_X {
            return Err(ConstructionError::TooSmall {
                axis: Axis::X,
                len: width,
                min: MIN_X,
            });
        }
        if height > MAX_Y {
            return Err(ConstructionError::TooLarge {
                axis: Axis::Y,
                len: height,
                max: MAX_Y,
            });
        }
        if height < MIN_Y {
            return Err(ConstructionError::TooSmall {
                axis: Axis::Y,
                len: height,
                min: MIN_Y,
            });
        }
        if let Some((row, len)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != width)
        {
            return Err(ConstructionError::Ragged {
                row,
                len,
                expected: width,
            });
        }

        Ok(Self { rows })
    }

    /// Builds a `width` x `height` board with every tile set to `tile`.
    ///
    /// # Errors
    ///
    /// Fails if either axis is outside `MIN..=MAX`.
    pub fn filled(width: usize, height: usize, tile: TileState) -> Result<Self, ConstructionError> {
        Self::from_rows(vec![vec![tile; width]; height])
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The tile at `(x, y)`, or `None` if off the board.
    pub fn get(&self, x: i32, y: i32) -> Option<TileState> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.rows.get(y)?.get(x).copied()
    }

    /// The tile under a coordinate, or `None` if off the board.
    pub fn at(&self, coord: Coord) -> Option<TileState> {
        self.get(coord.x, coord.y)
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> &[Vec<TileState>] {
        &self.rows
    }

    /// Number of occupied tiles.
    pub fn count_occupied(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|tile| **tile == TileState::Occupied)
            .count()
    }

    /// Overwrites an in-bounds tile. Callers validate coordinates first.
    pub(crate) fn set(&mut self, coord: Coord, tile: TileState) {
        self.rows[coord.y as usize][coord.x as usize] = tile;
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let rows = Vec::<Vec<TileState>>::deserialize(deserializer)?;
        Board::from_rows(rows).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Board {
    /// Tabular dump: a header of column indices, then one line per row.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "   ")?;
        for x in 0..self.width() {
            write!(f, " {}", x)?;
        }
        for (y, row) in self.rows.iter().enumerate() {
            write!(f, "\n{:>2} ", y)?;
            for tile in row {
                write!(f, " {}", tile.glyph())?;
            }
        }
        Ok(())
    }
}
