//! Three-way key comparison seam for the tree engines.
//!
//! Both engines order keys exclusively through a [`Compare`] instance
//! carried by the tree, so a key type needs no intrinsic `Ord` when a
//! custom comparator is supplied.

use core::cmp::Ordering;

/// Three-way comparator over two keys.
///
/// Implementations must describe a strict total order; the validators
/// additionally probe that a key compares equal to itself and report
/// comparator inconsistency as a distinct failure.
pub trait Compare<K: ?Sized> {
    /// Compare `lhs` against `rhs`.
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering;
}

/// Comparator delegating to the key's own [`Ord`] implementation.
///
/// This is the default comparator type parameter of both trees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<K: Ord + ?Sized> Compare<K> for Natural {
    #[inline(always)]
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        lhs.cmp(rhs)
    }
}

/// Adapter turning any three-way closure into a comparator.
///
/// ```rust
/// use slottree::{AvlTree, FnCompare};
///
/// let mut tree = AvlTree::with_comparator(FnCompare(|a: &u32, b: &u32| b.cmp(a)));
/// tree.insert(1, ());
/// tree.insert(2, ());
/// let mut keys = Vec::new();
/// tree.for_each(|k, _| keys.push(*k));
/// assert_eq!(keys, vec![2, 1]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnCompare<F>(pub F);

impl<K: ?Sized, F> Compare<K> for FnCompare<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, lhs: &K, rhs: &K) -> Ordering {
        (self.0)(lhs, rhs)
    }
}
