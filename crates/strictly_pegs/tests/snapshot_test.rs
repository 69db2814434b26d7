//! Tests for canonical JSON snapshots.

use strictly_pegs::{
    Board, ConstructionError, Game, GameState, Layout, Move, Rules, SnapshotError, TileState,
};

fn three_by_three() -> Game {
    Game::new(
        Rules::new(true, 1, 3, false),
        Board::filled(3, 3, TileState::Occupied).unwrap(),
    )
    .unwrap()
}

#[test]
fn test_snapshot_after_one_move() {
    let mut game = three_by_three();
    game.make_move(&Move::single(0, 0)).unwrap();
    assert_eq!(
        game.to_snapshot(),
        r#"{"rules":{"adjacentRequired":true,"maxNumOfPegsCanTake":3,"minNumOfPegsCanTake":1,"xOnly":false},"board":[[2,1,1],[1,1,1],[1,1,1]],"isFirstPlayersTurn":false}"#
    );
}

#[test]
fn test_snapshot_round_trip() {
    let mut game = Game::new(
        Rules::new(false, 1, 2, true),
        Layout::Circle3x3.board().unwrap(),
    )
    .unwrap();
    game.make_move(&Move::single(1, 0)).unwrap();

    let json = game.to_snapshot();
    let restored = Game::from_snapshot(&json).unwrap();

    assert_eq!(restored.to_snapshot(), json);
    assert_eq!(restored.board(), game.board());
    assert_eq!(restored.rules(), game.rules());
    assert_eq!(restored.state(), GameState::PlayerTwosTurn);
    assert_eq!(restored.peg_count(), 7);
    assert!(restored.history().is_empty());
}

#[test]
fn test_snapshot_of_finished_game() {
    let json = r#"{"rules":{"adjacentRequired":true,"maxNumOfPegsCanTake":2,"minNumOfPegsCanTake":1,"xOnly":true},"board":[[2,2],[3,2]],"isFirstPlayersTurn":false}"#;
    let game = Game::from_snapshot(json).unwrap();
    assert_eq!(game.state(), GameState::PlayerTwoWins);
}

#[test]
fn test_malformed_snapshot_rejected() {
    assert!(matches!(
        Game::from_snapshot("{not json"),
        Err(SnapshotError::Json(_))
    ));
    // Unknown tile code
    let json = r#"{"rules":{"adjacentRequired":true,"maxNumOfPegsCanTake":2,"minNumOfPegsCanTake":1,"xOnly":true},"board":[[1,4],[1,1]],"isFirstPlayersTurn":true}"#;
    assert!(matches!(
        Game::from_snapshot(json),
        Err(SnapshotError::Json(_))
    ));
}

#[test]
fn test_snapshot_with_invalid_rules_rejected() {
    let json = r#"{"rules":{"adjacentRequired":true,"maxNumOfPegsCanTake":1,"minNumOfPegsCanTake":1,"xOnly":true},"board":[[1,1],[1,1]],"isFirstPlayersTurn":true}"#;
    assert!(matches!(
        Game::from_snapshot(json),
        Err(SnapshotError::Construction(ConstructionError::MaxNotAboveMin { min: 1, max: 1 }))
    ));
}
