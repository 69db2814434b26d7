//! Tile states.

use serde::{Deserialize, Serialize};

/// State of a single cell on the board.
///
/// Serialized as its numeric code (1, 2 or 3) to keep snapshots compact.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum TileState {
    /// A peg sits in this cell.
    #[strum(to_string = "occupied")]
    Occupied = 1,
    /// The peg has been removed.
    #[strum(to_string = "vacant")]
    Vacant = 2,
    /// The cell is not part of the board, e.g. the hole of an O-shaped board.
    #[strum(to_string = "non existent")]
    NonExistent = 3,
}

impl TileState {
    /// Single-character glyph used by the tabular board dump.
    pub fn glyph(self) -> char {
        match self {
            TileState::Occupied => 'o',
            TileState::Vacant => '.',
            TileState::NonExistent => ' ',
        }
    }
}

impl From<TileState> for u8 {
    fn from(tile: TileState) -> Self {
        tile as u8
    }
}

/// Unknown numeric tile code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unknown tile code {} (expected 1, 2 or 3)", code)]
pub struct UnknownTileCode {
    /// The rejected code.
    pub code: u8,
}

impl TryFrom<u8> for TileState {
    type Error = UnknownTileCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(TileState::Occupied),
            2 => Ok(TileState::Vacant),
            3 => Ok(TileState::NonExistent),
            code => Err(UnknownTileCode { code }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for tile in <TileState as strum::IntoEnumIterator>::iter() {
            assert_eq!(TileState::try_from(u8::from(tile)), Ok(tile));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(TileState::try_from(4), Err(UnknownTileCode { code: 4 }));
        assert!(serde_json::from_str::<TileState>("0").is_err());
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&TileState::NonExistent).unwrap(), "3");
    }
}
