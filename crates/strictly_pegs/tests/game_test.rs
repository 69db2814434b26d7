//! Tests for the peg game engine: full games, rejected moves and history.

use strictly_pegs::{
    Axis, Board, ConstructionError, Coord, Game, GameState, IllegalMoveError, Layout, MAX_X, MAX_Y,
    Move, Player, Rules, TileState,
};

fn mv(cells: &[(i32, i32)]) -> Move {
    cells.iter().copied().map(Coord::from).collect()
}

fn trapezoid(rules: Rules) -> Game {
    Game::new(rules, Layout::Trapezoid5x3.board().unwrap()).unwrap()
}

/// Plays the opening shared by both full-game scenarios.
///
/// Leaves the board as
/// ```text
/// . . . . o
///   . . o o
///     o o o
/// ```
/// with player one to move.
fn play_opening(game: &mut Game, first_double: &[(i32, i32)]) {
    assert_eq!(game.width(), 5);
    assert_eq!(game.height(), 3);
    assert_eq!(game.peg_count(), 12);
    assert_eq!(game.state(), GameState::PlayerOnesTurn);

    game.make_move(&mv(&[(0, 0)])).unwrap();
    assert_eq!(game.state(), GameState::PlayerTwosTurn);
    assert_eq!(game.tile(0, 0), Some(TileState::Vacant));

    game.make_move(&mv(&[(1, 0)])).unwrap();
    assert_eq!(game.state(), GameState::PlayerOnesTurn);
    assert_eq!(game.tile(1, 0), Some(TileState::Vacant));

    game.make_move(&mv(first_double)).unwrap();
    assert_eq!(game.state(), GameState::PlayerTwosTurn);
    assert_eq!(game.tile(2, 0), Some(TileState::Vacant));
    assert_eq!(game.tile(3, 0), Some(TileState::Vacant));

    game.make_move(&mv(&[(1, 1), (2, 1)])).unwrap();
    assert_eq!(game.state(), GameState::PlayerOnesTurn);
    assert_eq!(game.tile(1, 1), Some(TileState::Vacant));
    assert_eq!(game.tile(2, 1), Some(TileState::Vacant));
    assert_eq!(game.peg_count(), 6);
}

/// Asserts the move is rejected with `expected` and nothing changed.
fn assert_rejected(game: &mut Game, cells: &[(i32, i32)], expected: IllegalMoveError) {
    let before = game.clone();
    assert_eq!(game.make_move(&mv(cells)), Err(expected));
    assert_eq!(*game, before, "rejected move {cells:?} changed the game");
}

#[test]
fn test_non_adjacent_x_only_game() {
    let mut game = trapezoid(Rules::new(false, 1, 2, true));
    play_opening(&mut game, &[(2, 0), (3, 0)]);

    assert_rejected(
        &mut game,
        &[(0, 0)],
        IllegalMoveError::NotOccupied {
            coord: Coord::new(0, 0),
            tile: TileState::Vacant,
        },
    );
    assert_rejected(
        &mut game,
        &[(1, 1), (3, 1)],
        IllegalMoveError::NotOccupied {
            coord: Coord::new(1, 1),
            tile: TileState::Vacant,
        },
    );
    assert_rejected(
        &mut game,
        &[(-1, 0)],
        IllegalMoveError::OutOfBounds {
            axis: Axis::X,
            coord: Coord::new(-1, 0),
        },
    );
    assert_rejected(
        &mut game,
        &[(0, -1)],
        IllegalMoveError::OutOfBounds {
            axis: Axis::Y,
            coord: Coord::new(0, -1),
        },
    );
    assert_rejected(
        &mut game,
        &[(0, 4)],
        IllegalMoveError::OutOfBounds {
            axis: Axis::Y,
            coord: Coord::new(0, 4),
        },
    );
    assert_rejected(
        &mut game,
        &[(5, 0)],
        IllegalMoveError::OutOfBounds {
            axis: Axis::X,
            coord: Coord::new(5, 0),
        },
    );
    assert_rejected(&mut game, &[], IllegalMoveError::TooFew { min: 1, count: 0 });
    assert_rejected(
        &mut game,
        &[(2, 0), (3, 0), (4, 0)],
        IllegalMoveError::TooMany { max: 2, count: 3 },
    );
    assert_rejected(&mut game, &[(4, 0), (3, 1)], IllegalMoveError::MultipleRows);
    assert_rejected(
        &mut game,
        &[(1, 2), (2, 2)],
        IllegalMoveError::NotOccupied {
            coord: Coord::new(1, 2),
            tile: TileState::NonExistent,
        },
    );
    assert_rejected(&mut game, &[(4, 0), (4, 0)], IllegalMoveError::DuplicateMoves);
    assert_rejected(&mut game, &[(4, 0), (4, 1)], IllegalMoveError::MultipleRows);

    game.make_move(&mv(&[(3, 1), (4, 1)])).unwrap();
    assert_eq!(game.state(), GameState::PlayerTwosTurn);
    game.make_move(&mv(&[(4, 0)])).unwrap();
    assert_eq!(game.state(), GameState::PlayerOnesTurn);
    game.make_move(&mv(&[(3, 2), (4, 2)])).unwrap();
    assert_eq!(game.state(), GameState::PlayerTwosTurn);
    game.make_move(&mv(&[(2, 2)])).unwrap();

    assert_eq!(game.state(), GameState::PlayerOneWins);
    assert_eq!(game.peg_count(), 0);
}

#[test]
fn test_adjacent_game() {
    let mut game = trapezoid(Rules::new(true, 1, 2, false));
    // Cells may be given in any order.
    play_opening(&mut game, &[(3, 0), (2, 0)]);

    assert_rejected(
        &mut game,
        &[(2, 2), (4, 2)],
        IllegalMoveError::NotAdjacent("2, 4".to_string()),
    );
    assert_rejected(
        &mut game,
        &[(4, 0), (4, 2)],
        IllegalMoveError::NotAdjacent("0, 2".to_string()),
    );
    assert_rejected(
        &mut game,
        &[(4, 0), (3, 1)],
        IllegalMoveError::NotAdjacent("cells span several rows and several columns".to_string()),
    );
    assert_rejected(
        &mut game,
        &[(1, 2), (2, 2)],
        IllegalMoveError::NotOccupied {
            coord: Coord::new(1, 2),
            tile: TileState::NonExistent,
        },
    );
    assert_rejected(&mut game, &[(4, 0), (4, 0)], IllegalMoveError::DuplicateMoves);

    game.make_move(&mv(&[(4, 0), (4, 1)])).unwrap();
    assert_eq!(game.state(), GameState::PlayerTwosTurn);
    game.make_move(&mv(&[(3, 1)])).unwrap();
    assert_eq!(game.state(), GameState::PlayerOnesTurn);
    game.make_move(&mv(&[(3, 2)])).unwrap();
    assert_eq!(game.state(), GameState::PlayerTwosTurn);
    game.make_move(&mv(&[(2, 2)])).unwrap();
    assert_eq!(game.state(), GameState::PlayerOnesTurn);
    game.make_move(&mv(&[(4, 2)])).unwrap();

    assert_eq!(game.state(), GameState::PlayerTwoWins);
    assert_eq!(game.peg_count(), 0);
    assert_eq!(game.state().winner(), Some(Player::Two));
}

#[test]
fn test_adjourned_game_starts_with_player_two() {
    let game = Game::with_first_player(
        Rules::new(false, 1, 2, false),
        Layout::Trapezoid5x3.board().unwrap(),
        Player::Two,
    )
    .unwrap();
    assert_eq!(game.state(), GameState::PlayerTwosTurn);
    assert!(!game.is_first_players_turn());
}

#[test]
fn test_mixed_rows_rejected_on_larger_takes() {
    let mut game = Game::new(
        Rules::new(true, 1, 3, false),
        Board::filled(5, 5, TileState::Occupied).unwrap(),
    )
    .unwrap();
    assert!(matches!(
        game.make_move(&mv(&[(0, 0), (1, 1), (2, 1)])),
        Err(IllegalMoveError::NotAdjacent(_))
    ));
    assert_eq!(game.state(), GameState::PlayerOnesTurn);
}

#[test]
fn test_board_size_limits() {
    let one_column = vec![vec![TileState::Occupied], vec![TileState::Occupied]];
    assert!(matches!(
        Game::from_rows(Rules::default(), one_column, Player::One),
        Err(ConstructionError::TooSmall { axis: Axis::X, .. })
    ));

    let one_row = vec![vec![TileState::Occupied; MAX_X]];
    assert!(matches!(
        Game::from_rows(Rules::default(), one_row, Player::One),
        Err(ConstructionError::TooSmall { axis: Axis::Y, .. })
    ));

    let too_wide = vec![vec![TileState::Occupied; MAX_X + 1]; 2];
    assert!(matches!(
        Game::from_rows(Rules::default(), too_wide, Player::One),
        Err(ConstructionError::TooLarge { axis: Axis::X, .. })
    ));

    let too_tall = vec![vec![TileState::Occupied; 2]; MAX_Y + 1];
    assert!(matches!(
        Game::from_rows(Rules::default(), too_tall, Player::One),
        Err(ConstructionError::TooLarge { axis: Axis::Y, .. })
    ));
}

#[test]
fn test_invalid_rules_create_no_game() {
    let board = Layout::Triangle2x2.board().unwrap();
    assert_eq!(
        Game::new(Rules::new(true, 2, 2, false), board),
        Err(ConstructionError::MaxNotAboveMin { min: 2, max: 2 })
    );
}

#[test]
fn test_take_bounded_by_pegs_left() {
    // Three pegs, max five: a four-peg take reports the bound of three.
    let mut game = Game::new(
        Rules::new(false, 1, 5, false),
        Layout::Triangle2x2.board().unwrap(),
    )
    .unwrap();
    assert_eq!(
        game.make_move(&mv(&[(0, 0), (1, 0), (1, 1), (0, 1)])),
        Err(IllegalMoveError::TooMany { max: 3, count: 4 })
    );
}

#[test]
fn test_extreme_coordinates_are_out_of_bounds() {
    let mut game = Game::new(
        Rules::new(false, 1, 2, false),
        Layout::Triangle3x3.board().unwrap(),
    )
    .unwrap();

    assert_rejected(
        &mut game,
        &[(0, i32::MAX)],
        IllegalMoveError::OutOfBounds {
            axis: Axis::Y,
            coord: Coord::new(0, i32::MAX),
        },
    );
    assert_rejected(
        &mut game,
        &[(0, 300_000_000)],
        IllegalMoveError::OutOfBounds {
            axis: Axis::Y,
            coord: Coord::new(0, 300_000_000),
        },
    );
    assert_rejected(
        &mut game,
        &[(0, 0), (i32::MIN, i32::MIN)],
        IllegalMoveError::OutOfBounds {
            axis: Axis::X,
            coord: Coord::new(i32::MIN, i32::MIN),
        },
    );
}

#[test]
fn test_validate_move_does_not_apply() {
    let game = trapezoid(Rules::default());
    assert!(game.validate_move(&mv(&[(0, 0), (1, 0)])).is_ok());
    assert_eq!(game.peg_count(), 12);
    assert!(game.history().is_empty());
}

#[test]
fn test_history_is_independent_of_caller() {
    let mut game = trapezoid(Rules::new(false, 1, 2, false));
    let mut pending = mv(&[(0, 0)]);
    game.make_move(&pending).unwrap();

    pending.cells_mut()[0] = Coord::new(4, 2);
    assert_eq!(game.peek_move(), Some(mv(&[(0, 0)])));

    let mut peeked = game.peek_move().unwrap();
    peeked.cells_mut().push(Coord::new(1, 0));
    assert_eq!(game.peek_move(), Some(mv(&[(0, 0)])));
}

#[test]
fn test_undo_restores_previous_position() {
    let mut game = trapezoid(Rules::new(true, 1, 2, false));
    let start = game.to_snapshot();

    game.make_move(&mv(&[(0, 0), (1, 0)])).unwrap();
    let after_first = game.to_snapshot();
    game.make_move(&mv(&[(4, 1), (4, 2)])).unwrap();

    assert_eq!(game.undo(), Some(mv(&[(4, 1), (4, 2)])));
    assert_eq!(game.to_snapshot(), after_first);
    assert_eq!(game.undo(), Some(mv(&[(0, 0), (1, 0)])));
    assert_eq!(game.to_snapshot(), start);
    assert_eq!(game.peg_count(), 12);
    assert_eq!(game.state(), GameState::PlayerOnesTurn);
}

#[test]
fn test_undo_at_start_is_a_no_op() {
    let mut game = trapezoid(Rules::default());
    let before = game.clone();
    assert_eq!(game.undo(), None);
    assert_eq!(game, before);
}

#[test]
fn test_no_moves_after_game_over() {
    let mut game = Game::new(
        Rules::new(false, 1, 2, false),
        Board::from_rows(vec![
            vec![TileState::Occupied, TileState::Vacant],
            vec![TileState::Vacant, TileState::Vacant],
        ])
        .unwrap(),
    )
    .unwrap();
    game.make_move(&mv(&[(0, 0)])).unwrap();
    assert_eq!(game.state(), GameState::PlayerTwoWins);
    assert!(game.state().is_terminal());

    assert_eq!(
        game.make_move(&mv(&[(0, 0)])),
        Err(IllegalMoveError::TooMany { max: 0, count: 1 })
    );
    assert_eq!(game.state(), GameState::PlayerTwoWins);
}

#[test]
fn test_display_shows_board_and_state() {
    let game = Game::new(Rules::default(), Layout::Triangle2x2.board().unwrap()).unwrap();
    assert_eq!(
        game.to_string(),
        "    0 1\n 0  o o\n 1    o\nPlayer one's turn (3 pegs left)"
    );
}
