//! Structural validation for the red-black tree.
//!
//! Black heights are recomputed along every root-to-leaf path rather than
//! derived from any cached value, and parent links are checked against
//! the actual descent, so miswired links and bad recoloring are always
//! caught.

use core::cmp::Ordering;

use crate::compare::Compare;
use crate::constants::NIL;
use crate::error::ValidationError;
use crate::rb::tree::RbTree;
use crate::rb::Color;

/// Running state of one validation walk.
struct CheckState {
    /// Black count of the first leaf path reached; every other path must
    /// match it.
    expected_black: Option<u32>,
    /// Nodes visited so far.
    visited: usize,
}

impl<K, V, C: Compare<K>> RbTree<K, V, C> {
    /// Check every structural invariant of the tree.
    ///
    /// Verifies, independently of stored metadata:
    /// - the root is black,
    /// - comparator reflexivity at every node,
    /// - no red node has a red child,
    /// - every root-to-leaf path carries the same number of black nodes,
    /// - every parent link points at the actual parent,
    /// - binary search tree ordering against both children,
    /// - node count against the live counter and the pool's used slots.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.root != NIL && self.color_of(self.root) != Color::Black {
            return Err(ValidationError::RootNotBlack);
        }

        let mut state = CheckState {
            expected_black: None,
            visited: 0,
        };
        self.check_subtree(self.root, NIL, 0, &mut state)?;

        let in_pool = self.pool.status().used;
        if state.visited != self.len || in_pool != state.visited {
            return Err(ValidationError::CountMismatch {
                visited: state.visited,
                counted: self.len,
                in_pool,
            });
        }
        Ok(())
    }

    fn check_subtree(
        &self,
        idx: u32,
        expected_parent: u32,
        blacks_above: u32,
        state: &mut CheckState,
    ) -> Result<(), ValidationError> {
        if idx == NIL {
            // A leaf path ends here; its black count must match the first
            // one recorded.
            return match state.expected_black {
                None => {
                    state.expected_black = Some(blacks_above);
                    Ok(())
                }
                Some(expected) if expected != blacks_above => {
                    Err(ValidationError::BlackHeightMismatch {
                        expected,
                        found: blacks_above,
                    })
                }
                Some(_) => Ok(()),
            };
        }

        let node = self.pool.get(idx);
        if self.cmp.compare(&node.key, &node.key) != Ordering::Equal {
            return Err(ValidationError::ComparatorInconsistent);
        }
        if node.parent != expected_parent {
            return Err(ValidationError::ParentMismatch);
        }
        state.visited += 1;

        let blacks_below = match node.color {
            Color::Red => {
                if node.parent != NIL && self.pool.get(node.parent).color == Color::Red {
                    return Err(ValidationError::RedViolation);
                }
                blacks_above
            }
            Color::Black => blacks_above + 1,
        };

        self.check_subtree(node.left, idx, blacks_below, state)?;
        self.check_subtree(node.right, idx, blacks_below, state)?;

        if node.left != NIL {
            let left_key = &self.pool.get(node.left).key;
            if self.cmp.compare(left_key, &node.key) != Ordering::Less {
                return Err(ValidationError::OrderViolation);
            }
        }
        if node.right != NIL {
            let right_key = &self.pool.get(node.right).key;
            if self.cmp.compare(right_key, &node.key) != Ordering::Greater {
                return Err(ValidationError::OrderViolation);
            }
        }
        Ok(())
    }
}
