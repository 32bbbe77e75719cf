//! Structural validation for the height-balanced tree.
//!
//! Heights are recomputed from scratch rather than trusted from the
//! stored balance factors, so a corrupted factor or a miswired child link
//! is always caught.

use core::cmp::Ordering;

use crate::avl::tree::AvlTree;
use crate::compare::Compare;
use crate::constants::NIL;
use crate::error::ValidationError;

impl<K, V, C: Compare<K>> AvlTree<K, V, C> {
    /// Check every structural invariant of the tree.
    ///
    /// Verifies, independently of stored metadata:
    /// - comparator reflexivity at every node,
    /// - binary search tree ordering against both children,
    /// - stored balance factor against recomputed subtree heights,
    /// - node count against the live counter and the pool's used slots.
    ///
    /// Returns the first violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut visited = 0usize;
        self.check_subtree(self.root, &mut visited)?;

        let in_pool = self.pool.status().used;
        if visited != self.len || in_pool != visited {
            return Err(ValidationError::CountMismatch {
                visited,
                counted: self.len,
                in_pool,
            });
        }
        Ok(())
    }

    /// Validate the subtree at `idx` and return its recomputed height.
    fn check_subtree(&self, idx: u32, visited: &mut usize) -> Result<i64, ValidationError> {
        if idx == NIL {
            return Ok(0);
        }
        *visited += 1;

        let node = self.pool.get(idx);
        if self.cmp.compare(&node.key, &node.key) != Ordering::Equal {
            return Err(ValidationError::ComparatorInconsistent);
        }
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

        let left_height = self.check_subtree(node.left, visited)?;
        let right_height = self.check_subtree(node.right, visited)?;

        let computed = right_height - left_height;
        if i64::from(node.balance) != computed || node.balance.abs() > 1 {
            return Err(ValidationError::BalanceMismatch {
                stored: node.balance,
                computed,
            });
        }
        Ok(1 + left_height.max(right_height))
    }
}
