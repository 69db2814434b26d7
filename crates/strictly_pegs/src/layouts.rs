//! Named starting boards.

use crate::board::Board;
use crate::error::ConstructionError;
use crate::tile::TileState;
use serde::{Deserialize, Serialize};
use tracing::instrument;

const O: TileState = TileState::Occupied;
const N: TileState = TileState::NonExistent;

/// A predefined board shape.
///
/// Names are the lowercase identifiers accepted on the command line and in
/// config files.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
pub enum Layout {
    /// Rows of 5, 4 and 3 pegs, right-aligned.
    #[default]
    #[strum(serialize = "trapezoid5x3")]
    #[serde(rename = "trapezoid5x3")]
    Trapezoid5x3,
    /// A 3x3 block with one extra peg pointing left from the middle row.
    #[strum(serialize = "square_with_point4x3")]
    #[serde(rename = "square_with_point4x3")]
    SquareWithPoint4x3,
    /// Rows of 2 and 1 pegs.
    #[strum(serialize = "triangle2x2")]
    #[serde(rename = "triangle2x2")]
    Triangle2x2,
    /// Rows of 3, 2 and 1 pegs.
    #[strum(serialize = "triangle3x3")]
    #[serde(rename = "triangle3x3")]
    Triangle3x3,
    /// Rows of 5 down to 1 pegs.
    #[strum(serialize = "triangle5x5")]
    #[serde(rename = "triangle5x5")]
    Triangle5x5,
    /// Rows of 3 and 2 pegs.
    #[strum(serialize = "p3x2")]
    #[serde(rename = "p3x2")]
    P3x2,
    /// A row of 3 with one peg below its right end.
    #[strum(serialize = "l3x2")]
    #[serde(rename = "l3x2")]
    L3x2,
    /// A ring of 8 pegs around a missing centre.
    #[strum(serialize = "circle3x3")]
    #[serde(rename = "circle3x3")]
    Circle3x3,
}

impl Layout {
    /// Rows of the layout, top to bottom.
    pub fn rows(self) -> Vec<Vec<TileState>> {
        match self {
            Layout::Trapezoid5x3 => vec![
                vec![O, O, O, O, O],
                vec![N, O, O, O, O],
                vec![N, N, O, O, O],
            ],
            Layout::SquareWithPoint4x3 => vec![
                vec![N, O, O, O],
                vec![O, O, O, O],
                vec![N, O, O, O],
            ],
            Layout::Triangle2x2 => vec![vec![O, O], vec![N, O]],
            Layout::Triangle3x3 => vec![vec![O, O, O], vec![N, O, O], vec![N, N, O]],
            Layout::Triangle5x5 => (0..5)
                .map(|y| (0..5).map(|x| if x < y { N } else { O }).collect())
                .collect(),
            Layout::P3x2 => vec![vec![O, O, O], vec![N, O, O]],
            Layout::L3x2 => vec![vec![O, O, O], vec![N, N, O]],
            Layout::Circle3x3 => vec![vec![O, O, O], vec![O, N, O], vec![O, O, O]],
        }
    }

    /// Builds a fresh board for this layout.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] only if a layout falls outside the board
    /// limits.
    #[instrument]
    pub fn board(self) -> Result<Board, ConstructionError> {
        Board::from_rows(self.rows())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_layout_builds() {
        for layout in Layout::iter() {
            assert!(layout.board().is_ok(), "{layout} failed to build");
        }
    }

    #[test]
    fn test_peg_counts() {
        let counts: Vec<(Layout, usize)> = Layout::iter()
            .map(|layout| (layout, layout.board().unwrap().count_occupied()))
            .collect();
        assert_eq!(
            counts,
            vec![
                (Layout::Trapezoid5x3, 12),
                (Layout::SquareWithPoint4x3, 10),
                (Layout::Triangle2x2, 3),
                (Layout::Triangle3x3, 6),
                (Layout::Triangle5x5, 15),
                (Layout::P3x2, 5),
                (Layout::L3x2, 4),
                (Layout::Circle3x3, 8),
            ]
        );
    }

    #[test]
    fn test_triangle5x5_is_right_aligned() {
        let board = Layout::Triangle5x5.board().unwrap();
        assert_eq!(board.get(0, 0), Some(O));
        assert_eq!(board.get(0, 1), Some(N));
        assert_eq!(board.get(4, 4), Some(O));
        assert_eq!(board.get(3, 4), Some(N));
    }

    #[test]
    fn test_names_round_trip() {
        for layout in Layout::iter() {
            assert_eq!(Layout::from_str(&layout.to_string()), Ok(layout));
        }
        assert!(Layout::from_str("hexagon").is_err());
    }
}
