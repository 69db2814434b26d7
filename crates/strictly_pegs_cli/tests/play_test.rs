//! Tests for the command handlers and interactive play.

use std::io::Cursor;
use strictly_pegs::{Game, Layout, Player, Rules};
use strictly_pegs_cli::cli::{GameArgs, Seating};
use strictly_pegs_cli::commands::{
    run_autoplay, run_layouts, run_moves, run_play, run_snapshot, run_solve, starting_game,
};
use strictly_pegs_cli::PegConfig;

fn game(layout: Layout, rules: Rules) -> Game {
    Game::new(rules, layout.board().unwrap()).unwrap()
}

fn output(buffer: Vec<u8>) -> String {
    String::from_utf8(buffer).unwrap()
}

#[test]
fn test_layouts_lists_catalog() {
    let mut out = Vec::new();
    run_layouts(&mut out).unwrap();
    let text = output(out);
    assert_eq!(text.lines().count(), 8);
    assert!(text.contains("trapezoid5x3"));
    assert!(text.contains("12 pegs"));
}

#[test]
fn test_moves_counts_trapezoid() {
    let mut out = Vec::new();
    run_moves(&game(Layout::Trapezoid5x3, Rules::new(true, 1, 2, false)), &mut out).unwrap();
    assert!(output(out).ends_with("28 legal moves\n"));
}

#[test]
fn test_solve_reports_forced_win() {
    let mut out = Vec::new();
    let mut game = game(Layout::Triangle2x2, Rules::default());
    run_solve(&mut game, &mut out).unwrap();
    assert!(output(out).contains("[{ x: 0, y: 0 }, { x: 1, y: 0 }] (forced win"));
}

#[test]
fn test_snapshot_matches_engine() {
    let game = game(Layout::L3x2, Rules::default());
    let mut out = Vec::new();
    run_snapshot(&game, &mut out).unwrap();
    assert_eq!(output(out), format!("{}\n", game.to_snapshot()));
}

#[test]
fn test_starting_game_from_snapshot() {
    let json = game(Layout::P3x2, Rules::new(false, 1, 3, false)).to_snapshot();
    let args = GameArgs {
        from_snapshot: Some(json.clone()),
        ..GameArgs::default()
    };
    let game = starting_game(&PegConfig::default(), &args).unwrap();
    assert_eq!(game.to_snapshot(), json);
}

#[test]
fn test_starting_game_rejects_bad_overrides() {
    let args = GameArgs {
        min: Some(3),
        ..GameArgs::default()
    };
    assert!(starting_game(&PegConfig::default(), &args).is_err());
}

#[test]
fn test_autoplay_first_mover_wins_forced_position() {
    let mut game = game(Layout::P3x2, Rules::new(true, 1, 2, false));
    let mut out = Vec::new();
    let winner = run_autoplay(&mut game, &mut out).unwrap();
    assert_eq!(winner, Player::One);
    assert!(game.state().is_terminal());
    assert!(output(out).contains("Player One wins"));
}

#[test]
fn test_person_vs_person_retries_illegal_input() {
    // Triangle 2x2: player one takes the top row, player two must take the last peg.
    let mut input = Cursor::new("nonsense\n1,1 0,0\n0,0 1,0\n1,1\n");
    let mut out = Vec::new();
    let winner = run_play(
        game(Layout::Triangle2x2, Rules::new(true, 1, 2, false)),
        Seating::PersonPerson,
        &mut input,
        &mut out,
    )
    .unwrap();

    assert_eq!(winner, Player::One);
    let text = output(out);
    assert!(text.contains("Expected x,y but got 'nonsense'"));
    assert!(text.contains("Violates adjacency"));
    assert!(text.contains("Player One wins"));
}

#[test]
fn test_person_vs_computer() {
    // Opening with a single peg loses: the computer answers by leaving one
    // peg. The last line covers either peg it leaves behind.
    let mut input = Cursor::new("0,0\n1,0\n1,1\n");
    let mut out = Vec::new();
    let winner = run_play(
        game(Layout::Triangle2x2, Rules::new(true, 1, 2, true)),
        Seating::PersonComputer,
        &mut input,
        &mut out,
    );
    let text = output(out);
    assert_eq!(winner.unwrap(), Player::Two, "{text}");
    assert!(text.contains("Player Two plays"));
}

#[test]
fn test_closed_input_is_an_error() {
    let mut input = Cursor::new("");
    let mut out = Vec::new();
    let result = run_play(
        game(Layout::Triangle2x2, Rules::default()),
        Seating::PersonComputer,
        &mut input,
        &mut out,
    );
    assert!(result.is_err());
}
