//! # slottree
//!
//! Self-balancing binary search trees backed by slot-pool allocators.
//!
//! Two interchangeable balancing strategies over the same storage model:
//! - [`AvlTree`]: height-balanced, recursive rebalancing via a per-node
//!   balance factor
//! - [`RbTree`]: color-balanced, iterative fix-ups over explicit parent
//!   back-references
//!
//! ## Features
//! - Dedicated slot pools own all node storage; teardown releases chunks
//!   in bulk without walking the tree
//! - Stable `u32` slot indices instead of per-node heap pointers
//! - Pluggable three-way comparator ([`Compare`]), attached values
//!   optional
//! - Structural validation that recomputes every invariant from scratch
//!   and reports the exact violation ([`ValidationError`])
//! - Ascending in-order traversal: recursive visitor (AVL), stackless
//!   parent-link walk and lazy iterator (red-black)
//!
//! Single-threaded by design: a tree and its pool are exclusively owned
//! by one caller.

mod avl;
mod compare;
mod constants;
mod error;
mod pool;
mod rb;

pub use avl::AvlTree;
pub use compare::{Compare, FnCompare, Natural};
pub use error::ValidationError;
pub use pool::{AppendPool, FreePool, PoolConfig, PoolStatus};
pub use rb::{DetachStrategy, Iter, RbTree};

#[cfg(test)]
mod proptests;
