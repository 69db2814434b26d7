//! Search tree nodes.

use crate::objective::Objective;
use std::cmp::Ordering;
use strictly_pegs::Move;

/// One position in the search tree, identified by the move that reached it.
///
/// Children are filled in when the node is evaluated. A node is resolved once
/// its outcome under perfect play is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct MoveTreeNode {
    mov: Option<Move>,
    children: Option<Vec<MoveTreeNode>>,
    evaluation: Option<Objective>,
}

impl MoveTreeNode {
    /// The search root. `last_move` is whatever move led to the position, if any.
    pub(crate) fn root(last_move: Option<Move>) -> Self {
        Self {
            mov: last_move,
            ..Self::default()
        }
    }

    /// An unvisited node reached by `mov`.
    pub(crate) fn child(mov: Move) -> Self {
        Self {
            mov: Some(mov),
            ..Self::default()
        }
    }

    pub(crate) fn mov(&self) -> Option<&Move> {
        self.mov.as_ref()
    }

    /// Children, empty when the node was never expanded or was released.
    pub(crate) fn children(&self) -> &[MoveTreeNode] {
        self.children.as_deref().unwrap_or_default()
    }

    pub(crate) fn set_children(&mut self, children: Vec<MoveTreeNode>) {
        self.children = Some(children);
    }

    /// Drops the subtree once its outcome has been folded into this node.
    pub(crate) fn release_children(&mut self) {
        self.children = None;
    }

    pub(crate) fn evaluation(&self) -> Option<Objective> {
        self.evaluation
    }

    pub(crate) fn resolve(&mut self, outcome: Objective) {
        self.evaluation = Some(outcome);
    }

    /// Folds the children's outcomes into this node, seen from `mover`, the
    /// side to move here.
    ///
    /// A child resolved to the mover's objective decides the node. Otherwise
    /// the node takes its children's outcome when they all agree. A node that
    /// is already resolved, or has no children, is left alone.
    pub(crate) fn aggregate(&mut self, mover: Objective) {
        if self.evaluation.is_some() {
            return;
        }
        let Some((first, rest)) = self.children().split_first() else {
            return;
        };

        let outcome = if self.children().iter().any(|c| c.evaluation == Some(mover)) {
            Some(mover)
        } else if rest.iter().all(|c| c.evaluation == first.evaluation) {
            first.evaluation
        } else {
            None
        };
        self.evaluation = outcome;
    }

    /// Share of this node's children resolved to `objective`.
    pub(crate) fn win_ratio(&self, objective: Objective) -> WinRatio {
        let children = self.children();
        WinRatio::new(
            children
                .iter()
                .filter(|c| c.evaluation == Some(objective))
                .count(),
            children.len(),
        )
    }
}

/// An exact fraction `won / total`, compared without rounding.
///
/// An empty total reads as zero.
#[derive(Debug, Clone, Copy)]
pub(crate) struct WinRatio {
    won: usize,
    total: usize,
}

impl WinRatio {
    pub(crate) fn new(won: usize, total: usize) -> Self {
        if total == 0 {
            Self { won: 0, total: 1 }
        } else {
            Self { won, total }
        }
    }
}

impl Ord for WinRatio {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.won * other.total).cmp(&(other.won * self.total))
    }
}

impl PartialOrd for WinRatio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for WinRatio {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WinRatio {}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(outcome: Option<Objective>) -> MoveTreeNode {
        MoveTreeNode {
            evaluation: outcome,
            ..MoveTreeNode::default()
        }
    }

    fn with_children(outcomes: &[Option<Objective>]) -> MoveTreeNode {
        let mut node = MoveTreeNode::child(Move::single(0, 0));
        node.set_children(outcomes.iter().copied().map(resolved).collect());
        node
    }

    const ONE: Option<Objective> = Some(Objective::PlayerOneWins);
    const TWO: Option<Objective> = Some(Objective::PlayerTwoWins);

    #[test]
    fn test_any_winning_child_decides() {
        let mut node = with_children(&[TWO, None, ONE]);
        node.aggregate(Objective::PlayerOneWins);
        assert_eq!(node.evaluation(), ONE);
    }

    #[test]
    fn test_unanimous_children_decide() {
        let mut node = with_children(&[TWO, TWO]);
        node.aggregate(Objective::PlayerOneWins);
        assert_eq!(node.evaluation(), TWO);
    }

    #[test]
    fn test_mixed_children_stay_unresolved() {
        let mut node = with_children(&[TWO, None]);
        node.aggregate(Objective::PlayerOneWins);
        assert_eq!(node.evaluation(), None);
    }

    #[test]
    fn test_leaf_and_resolved_nodes_untouched() {
        let mut leaf = MoveTreeNode::child(Move::single(0, 0));
        leaf.aggregate(Objective::PlayerOneWins);
        assert_eq!(leaf.evaluation(), None);

        let mut decided = with_children(&[ONE]);
        decided.resolve(Objective::PlayerTwoWins);
        decided.aggregate(Objective::PlayerOneWins);
        assert_eq!(decided.evaluation(), TWO);
    }

    #[test]
    fn test_release_keeps_evaluation() {
        let mut node = with_children(&[TWO]);
        node.aggregate(Objective::PlayerOneWins);
        node.release_children();
        assert!(node.children().is_empty());
        assert_eq!(node.evaluation(), TWO);
    }

    #[test]
    fn test_ratios_compare_exactly() {
        assert!(WinRatio::new(1, 3) > WinRatio::new(0, 5));
        assert!(WinRatio::new(2, 3) > WinRatio::new(3, 5));
        assert_eq!(WinRatio::new(1, 2), WinRatio::new(2, 4));
        assert_eq!(WinRatio::new(0, 0), WinRatio::new(0, 7));
    }
}
