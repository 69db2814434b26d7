//! Legal-move enumeration.

use crate::combinatorics::combinations;
use strictly_pegs::{Board, Coord, GameState, Move, Rules, TileState};
use tracing::instrument;

/// Every legal move for the given rules, board and state, in canonical order.
///
/// Rows come first: for each row top to bottom, each take size from the
/// minimum to the maximum, subsets in combinadic order. Unless the rules are
/// x-only, columns follow, left to right, with take sizes starting at two so
/// single pegs are not listed twice. A terminal state has no moves.
///
/// Take sizes stop at the pegs on each line, so a large rules maximum costs
/// nothing extra.
#[instrument(level = "trace", skip(board))]
pub fn legal_moves(rules: &Rules, board: &Board, state: GameState) -> Vec<Move> {
    if state.is_terminal() {
        return Vec::new();
    }

    let min = rules.min_num_of_pegs_can_take() as usize;
    let max = rules.max_num_of_pegs_can_take() as usize;
    let width = board.width() as i32;
    let height = board.height() as i32;
    let occupied = |x: i32, y: i32| board.get(x, y) == Some(TileState::Occupied);

    let mut moves = Vec::new();

    for y in 0..height {
        let xs: Vec<i32> = (0..width).filter(|&x| occupied(x, y)).collect();
        for size in min..=max.min(xs.len()) {
            moves.extend(
                line_takes(&xs, size, rules.adjacent_required())
                    .map(|run| run.into_iter().map(|x| Coord::new(x, y)).collect::<Move>()),
            );
        }
    }

    if !rules.x_only() {
        for x in 0..width {
            let ys: Vec<i32> = (0..height).filter(|&y| occupied(x, y)).collect();
            for size in min.max(2)..=max.min(ys.len()) {
                moves.extend(
                    line_takes(&ys, size, rules.adjacent_required())
                        .map(|run| run.into_iter().map(|y| Coord::new(x, y)).collect::<Move>()),
                );
            }
        }
    }

    moves
}

/// Subsets of one line's occupied indices, optionally restricted to unit-step runs.
fn line_takes(
    indices: &[i32],
    size: usize,
    adjacent_required: bool,
) -> impl Iterator<Item = Vec<i32>> {
    combinations(indices.to_vec(), size)
        .filter(move |subset| !adjacent_required || is_run(subset))
}

/// Ascending indices that step by exactly one.
fn is_run(indices: &[i32]) -> bool {
    indices.windows(2).all(|pair| pair[0] + 1 == pair[1])
}
