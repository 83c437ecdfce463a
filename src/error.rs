use thiserror::Error;

/// The first structural invariant found broken by
/// [`LlrbTree::check_invariants`](crate::LlrbTree::check_invariants).
///
/// A tree only reaches one of these states when its comparator is not a
/// consistent total order, or was swapped for one that disagrees with the
/// stored order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum InvariantError {
    #[error("the root node is red")]
    RedRoot,
    #[error("the root node has a parent link")]
    RootHasParent,
    #[error("a node has a red right child")]
    RedRightChild,
    #[error("a red node has a red left child")]
    ConsecutiveRed,
    #[error("black height differs between siblings (left {left}, right {right})")]
    BlackHeight { left: usize, right: usize },
    #[error("a value is out of order relative to an ancestor")]
    OutOfOrder,
    #[error("a child does not link back to its parent")]
    ParentLink,
    #[error("extras are stored although duplicates are replaced")]
    ExtrasUnderReplace,
    #[error("node count is {maintained} but {counted} nodes are reachable")]
    NodeCount { maintained: usize, counted: usize },
    #[error("value count is {maintained} but {counted} values are reachable")]
    ValueCount { maintained: usize, counted: usize },
}
