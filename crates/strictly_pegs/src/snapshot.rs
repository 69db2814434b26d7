//! Canonical JSON snapshots of a game.
//!
//! A snapshot carries the rules, the board and the turn flag, in that order,
//! with camelCase keys. History is not part of a snapshot.

use crate::board::Board;
use crate::rules::Rules;
use serde::{Deserialize, Serialize};

/// Borrowed view used for writing snapshots.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SnapshotRef<'a> {
    pub(crate) rules: &'a Rules,
    pub(crate) board: &'a Board,
    pub(crate) is_first_players_turn: bool,
}

/// Owned form used for reading snapshots.
///
/// The board deserializer validates dimensions; the rules are validated when
/// the game is built.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Snapshot {
    pub(crate) rules: Rules,
    pub(crate) board: Board,
    pub(crate) is_first_players_turn: bool,
}
