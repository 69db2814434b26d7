//! Exhaustive depth-first search for the best move.
//!
//! The search runs on the caller's live game. Each candidate move is applied
//! through an [`AppliedMove`] guard and undone when the guard drops, so the
//! game is back in its starting position whenever the search returns.

use crate::error::SolverError;
use crate::guard::AppliedMove;
use crate::mechanics::legal_moves;
use crate::objective::Objective;
use crate::tree::MoveTreeNode;
use derive_getters::Getters;
use derive_new::new;
use strictly_pegs::{Game, GameState, Move};
use tracing::{debug, error, info, instrument};

/// Depth from which evaluated subtrees are released. The root's children and
/// grandchildren survive the search; nothing deeper is read afterwards.
const RELEASE_DEPTH: usize = 2;

/// Outcome of a search from one position.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Analysis {
    /// The chosen move; empty when the game is already over.
    best_move: Move,
    /// Whether `best_move` wins against every reply.
    #[getter(copy)]
    forced_win: bool,
    /// Positions evaluated during the search.
    #[getter(copy)]
    nodes_visited: u64,
}

/// Returns the best move for the side to move, or an empty move if the game
/// is over.
///
/// # Errors
///
/// Returns [`SolverError::InternalConsistency`] if the enumerator and the
/// engine disagree.
pub fn solve(game: &mut Game) -> Result<Move, SolverError> {
    analyze(game).map(|analysis| analysis.best_move)
}

/// Searches the position and reports the chosen move, whether it is a forced
/// win and how many positions were visited.
///
/// A forced win takes the first winning move in enumeration order. Without
/// one, the move that leaves the opponent the largest share of losing
/// replies is chosen among moves not already proven lost. A proven loss
/// falls back to the first legal move.
///
/// # Errors
///
/// Returns [`SolverError::InternalConsistency`] if the enumerator and the
/// engine disagree.
#[instrument(skip(game), fields(pegs_left = game.peg_count(), to_move = %game.to_move()))]
pub fn analyze(game: &mut Game) -> Result<Analysis, SolverError> {
    let Some(objective) = Objective::for_state(game.state()) else {
        debug!(state = %game.state(), "Game already over");
        return Ok(Analysis::new(Move::default(), false, 0));
    };

    let mut search = Search::default();
    let mut root = MoveTreeNode::root(game.peek_move());
    search.evaluate(game, &mut root, 0)?;

    let analysis = match choose(&root, objective) {
        Some((mov, forced_win)) => Analysis::new(mov.clone(), forced_win, search.nodes_visited),
        None => {
            error!("Search produced no root moves");
            return Err(SolverError::internal_consistency(
                "no legal moves at a running position",
            ));
        }
    };

    info!(
        best_move = %analysis.best_move,
        forced_win = analysis.forced_win,
        nodes_visited = analysis.nodes_visited,
        "Search complete"
    );
    Ok(analysis)
}

/// Picks the root move: `(move, forced_win)`.
fn choose(root: &MoveTreeNode, objective: Objective) -> Option<(&Move, bool)> {
    let children = root.children();

    if let Some(winner) = children
        .iter()
        .find(|child| child.evaluation() == Some(objective))
    {
        return winner.mov().map(|mov| (mov, true));
    }

    let opponent = objective.opponent();
    let mut incumbent: Option<&MoveTreeNode> = None;
    for child in children
        .iter()
        .filter(|child| child.evaluation() != Some(opponent))
    {
        let better = incumbent
            .is_none_or(|best| child.win_ratio(objective) > best.win_ratio(objective));
        if better {
            incumbent = Some(child);
        }
    }

    match incumbent {
        Some(best) => best.mov().map(|mov| (mov, false)),
        None => {
            debug!(%objective, "Position is lost against perfect play");
            children.first().and_then(MoveTreeNode::mov).map(|mov| (mov, false))
        }
    }
}

/// Per-call search state.
#[derive(Debug, Default)]
struct Search {
    nodes_visited: u64,
}

impl Search {
    /// Expands `node`, the current position of `game`, and resolves it where
    /// the subtree decides it.
    fn evaluate(
        &mut self,
        game: &mut Game,
        node: &mut MoveTreeNode,
        depth: usize,
    ) -> Result<(), SolverError> {
        self.nodes_visited += 1;

        let moves = legal_moves(&game.rules(), game.board(), game.state());
        if moves.is_empty() {
            return match game.state() {
                GameState::PlayerOneWins => {
                    node.resolve(Objective::PlayerOneWins);
                    Ok(())
                }
                GameState::PlayerTwoWins => {
                    node.resolve(Objective::PlayerTwoWins);
                    Ok(())
                }
                state @ (GameState::PlayerOnesTurn | GameState::PlayerTwosTurn) => {
                    error!(%state, pegs_left = game.peg_count(), "No legal moves in a running game");
                    Err(SolverError::internal_consistency(format!(
                        "no legal moves while {} with {} pegs left",
                        state,
                        game.peg_count()
                    )))
                }
            };
        }

        let mover = Objective::for_mover(game.to_move());
        let mut children = Vec::with_capacity(moves.len());
        let mut pending = moves.into_iter();

        for mov in pending.by_ref() {
            let mut applied = AppliedMove::apply(game, &mov).map_err(|e| {
                error!(%mov, error = %e, "Engine rejected an enumerated move");
                SolverError::internal_consistency(format!(
                    "enumerated move {} rejected: {}",
                    mov, e
                ))
            })?;
            let child_mover = Objective::for_mover(applied.to_move());
            let mut child = MoveTreeNode::child(mov);
            self.evaluate(&mut applied, &mut child, depth + 1)?;
            drop(applied);

            child.aggregate(child_mover);
            if depth + 1 >= RELEASE_DEPTH {
                child.release_children();
            }

            let decided = child.evaluation() == Some(mover);
            children.push(child);
            if decided {
                node.resolve(mover);
                break;
            }
        }

        children.extend(pending.map(MoveTreeNode::child));
        node.set_children(children);
        Ok(())
    }
}
