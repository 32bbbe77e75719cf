//! Validation failure taxonomy.
//!
//! Validation never panics on a broken tree; each violated invariant maps
//! to its own variant so tests can assert on the exact failure kind.

use thiserror::Error;

/// A structural invariant violation detected by tree validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Stored AVL balance factor disagrees with the recomputed subtree
    /// heights, or lies outside {-1, 0, 1}.
    #[error("stored balance factor {stored} does not match computed {computed}")]
    BalanceMismatch {
        /// Balance factor recorded in the node.
        stored: i8,
        /// Balance factor recomputed from subtree heights.
        computed: i64,
    },

    /// A node's key does not sit strictly between its subtrees.
    #[error("binary search tree ordering violated")]
    OrderViolation,

    /// The comparator did not report a key equal to itself.
    #[error("comparator is not reflexive")]
    ComparatorInconsistent,

    /// A red node has a red child.
    #[error("red node has a red child")]
    RedViolation,

    /// The root of a red-black tree is not black.
    #[error("root is not black")]
    RootNotBlack,

    /// Two root-to-leaf paths pass through different numbers of black
    /// nodes.
    #[error("black height differs across leaf paths: {expected} vs {found}")]
    BlackHeightMismatch {
        /// Black count of the first leaf path encountered.
        expected: u32,
        /// Black count of the offending path.
        found: u32,
    },

    /// A parent back-reference does not point at the actual parent.
    #[error("parent link does not point at the actual parent")]
    ParentMismatch,

    /// The number of nodes reachable from the root disagrees with the
    /// pool's used-slot count or the tree's live counter.
    #[error("tree reaches {visited} nodes but counter is {counted}, pool holds {in_pool}")]
    CountMismatch {
        /// Nodes visited by the validation walk.
        visited: usize,
        /// The tree's live-node counter.
        counted: usize,
        /// Used slots reported by the pool.
        in_pool: usize,
    },
}
