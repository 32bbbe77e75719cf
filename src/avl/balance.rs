//! Rotation and rebalancing case analysis for the height-balanced tree.
//!
//! Growth repair and shrink repair are kept as separate, mirrored case
//! analyses. Growth rotations always restore the pre-growth subtree
//! height. Shrink repair may or may not absorb the height change; the
//! `height_changed` flag it clears (or leaves set) tells the caller
//! whether to keep propagating.

use crate::avl::tree::AvlTree;

impl<K, V, C> AvlTree<K, V, C> {
    /// Repair a node whose left subtree just outgrew the right by two.
    ///
    /// Single rotation when the left child leans left as well, double
    /// rotation when it leans right. Returns the index now rooting the
    /// subtree.
    pub(super) fn rebalance_left_heavy(&mut self, idx: u32) -> u32 {
        let left = self.pool.get(idx).left;

        if self.pool.get(left).balance == -1 {
            // Single LL rotation.
            let left_right = self.pool.get(left).right;
            {
                let node = self.pool.get_mut(idx);
                node.left = left_right;
                node.balance = 0;
            }
            {
                let pivot = self.pool.get_mut(left);
                pivot.right = idx;
                pivot.balance = 0;
            }
            left
        } else {
            // Double LR rotation around the left child's right child.
            let pivot = self.pool.get(left).right;
            let pivot_balance = self.pool.get(pivot).balance;
            let pivot_left = self.pool.get(pivot).left;
            let pivot_right = self.pool.get(pivot).right;

            self.pool.get_mut(left).right = pivot_left;
            self.pool.get_mut(idx).left = pivot_right;
            {
                let p = self.pool.get_mut(pivot);
                p.left = left;
                p.right = idx;
                p.balance = 0;
            }
            self.pool.get_mut(idx).balance = if pivot_balance == -1 { 1 } else { 0 };
            self.pool.get_mut(left).balance = if pivot_balance == 1 { -1 } else { 0 };
            pivot
        }
    }

    /// Mirror of [`Self::rebalance_left_heavy`] for a right-heavy node.
    pub(super) fn rebalance_right_heavy(&mut self, idx: u32) -> u32 {
        let right = self.pool.get(idx).right;

        if self.pool.get(right).balance == 1 {
            // Single RR rotation.
            let right_left = self.pool.get(right).left;
            {
                let node = self.pool.get_mut(idx);
                node.right = right_left;
                node.balance = 0;
            }
            {
                let pivot = self.pool.get_mut(right);
                pivot.left = idx;
                pivot.balance = 0;
            }
            right
        } else {
            // Double RL rotation around the right child's left child.
            let pivot = self.pool.get(right).left;
            let pivot_balance = self.pool.get(pivot).balance;
            let pivot_left = self.pool.get(pivot).left;
            let pivot_right = self.pool.get(pivot).right;

            self.pool.get_mut(right).left = pivot_right;
            self.pool.get_mut(idx).right = pivot_left;
            {
                let p = self.pool.get_mut(pivot);
                p.right = right;
                p.left = idx;
                p.balance = 0;
            }
            self.pool.get_mut(idx).balance = if pivot_balance == 1 { -1 } else { 0 };
            self.pool.get_mut(right).balance = if pivot_balance == -1 { 1 } else { 0 };
            pivot
        }
    }

    /// Adjust a node after its left subtree lost one level of height.
    ///
    /// Clears `height_changed` when the adjustment preserves the subtree
    /// height; leaves it set when the subtree shrank and the ancestor must
    /// keep repairing. Returns the index now rooting the subtree.
    pub(super) fn on_left_shrunk(&mut self, idx: u32, height_changed: &mut bool) -> u32 {
        match self.pool.get(idx).balance {
            -1 => {
                // The taller side shrank; the subtree is now level but one
                // shorter, so the change keeps propagating.
                self.pool.get_mut(idx).balance = 0;
                idx
            }
            0 => {
                self.pool.get_mut(idx).balance = 1;
                *height_changed = false;
                idx
            }
            _ => {
                // Right side is now two levels taller; rotate toward the
                // shrunk side.
                let right = self.pool.get(idx).right;
                let right_balance = self.pool.get(right).balance;

                if right_balance >= 0 {
                    // Single RR rotation.
                    let right_left = self.pool.get(right).left;
                    self.pool.get_mut(idx).right = right_left;
                    self.pool.get_mut(right).left = idx;
                    if right_balance == 0 {
                        self.pool.get_mut(idx).balance = 1;
                        self.pool.get_mut(right).balance = -1;
                        *height_changed = false;
                    } else {
                        self.pool.get_mut(idx).balance = 0;
                        self.pool.get_mut(right).balance = 0;
                    }
                    right
                } else {
                    // Double RL rotation; the subtree shrinks, so the
                    // change keeps propagating.
                    let pivot = self.pool.get(right).left;
                    let pivot_balance = self.pool.get(pivot).balance;
                    let pivot_left = self.pool.get(pivot).left;
                    let pivot_right = self.pool.get(pivot).right;

                    self.pool.get_mut(right).left = pivot_right;
                    self.pool.get_mut(idx).right = pivot_left;
                    {
                        let p = self.pool.get_mut(pivot);
                        p.right = right;
                        p.left = idx;
                        p.balance = 0;
                    }
                    self.pool.get_mut(idx).balance = if pivot_balance == 1 { -1 } else { 0 };
                    self.pool.get_mut(right).balance = if pivot_balance == -1 { 1 } else { 0 };
                    pivot
                }
            }
        }
    }

    /// Mirror of [`Self::on_left_shrunk`] for a shrunk right subtree.
    pub(super) fn on_right_shrunk(&mut self, idx: u32, height_changed: &mut bool) -> u32 {
        match self.pool.get(idx).balance {
            1 => {
                self.pool.get_mut(idx).balance = 0;
                idx
            }
            0 => {
                self.pool.get_mut(idx).balance = -1;
                *height_changed = false;
                idx
            }
            _ => {
                let left = self.pool.get(idx).left;
                let left_balance = self.pool.get(left).balance;

                if left_balance <= 0 {
                    // Single LL rotation.
                    let left_right = self.pool.get(left).right;
                    self.pool.get_mut(idx).left = left_right;
                    self.pool.get_mut(left).right = idx;
                    if left_balance == 0 {
                        self.pool.get_mut(idx).balance = -1;
                        self.pool.get_mut(left).balance = 1;
                        *height_changed = false;
                    } else {
                        self.pool.get_mut(idx).balance = 0;
                        self.pool.get_mut(left).balance = 0;
                    }
                    left
                } else {
                    // Double LR rotation.
                    let pivot = self.pool.get(left).right;
                    let pivot_balance = self.pool.get(pivot).balance;
                    let pivot_left = self.pool.get(pivot).left;
                    let pivot_right = self.pool.get(pivot).right;

                    self.pool.get_mut(left).right = pivot_left;
                    self.pool.get_mut(idx).left = pivot_right;
                    {
                        let p = self.pool.get_mut(pivot);
                        p.left = left;
                        p.right = idx;
                        p.balance = 0;
                    }
                    self.pool.get_mut(idx).balance = if pivot_balance == -1 { 1 } else { 0 };
                    self.pool.get_mut(left).balance = if pivot_balance == 1 { -1 } else { 0 };
                    pivot
                }
            }
        }
    }
}
