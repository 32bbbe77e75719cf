//! Red-black search tree over a free-capable slot pool.

use core::cmp::Ordering;
use core::fmt;

use tracing::debug;

use crate::compare::{Compare, Natural};
use crate::constants::NIL;
use crate::pool::{FreePool, PoolConfig, PoolStatus};
use crate::rb::{Color, RbNode};

/// How a node with two real children is detached during removal.
///
/// Either way the node that physically leaves the tree has at most one
/// real child, which the six-case fix-up then repairs around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetachStrategy {
    /// Swap key and value with the in-order successor and delete the
    /// successor's slot. Cheap when the payload is small; this is what
    /// [`RbTree::new_set`] picks for value-less trees.
    SwapPayload,
    /// Physically relink the in-order successor into the doomed node's
    /// structural position and delete the doomed node in the successor's
    /// old place. Never moves payload bytes; this is what [`RbTree::new`]
    /// picks for value-carrying trees.
    RelinkSuccessor,
}

/// Red-black search tree.
///
/// Keys are ordered by the comparator `C`; every node may carry an
/// attached value `V` (default `()` for set-style use). Node storage
/// lives in a slot pool owned by the tree; parent links are slot indices,
/// never owning references.
///
/// # Example
/// ```rust
/// use slottree::RbTree;
///
/// let mut tree = RbTree::new();
/// tree.insert(30, "thirty");
/// tree.insert(10, "ten");
/// tree.insert(20, "twenty");
/// let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
/// assert_eq!(keys, vec![10, 20, 30]);
/// ```
#[derive(Debug)]
pub struct RbTree<K, V = (), C = Natural> {
    /// Node storage; used-slot count mirrors `len` at all times.
    pub(super) pool: FreePool<RbNode<K, V>>,

    /// Root slot, `NIL` when the tree is empty.
    pub(super) root: u32,

    /// Live node counter.
    pub(super) len: usize,

    /// Three-way key comparator.
    pub(super) cmp: C,

    /// Two-child removal strategy, fixed at construction.
    detach: DetachStrategy,
}

impl<K: Ord, V> RbTree<K, V> {
    /// Create an empty tree ordered by the key's `Ord`.
    ///
    /// Uses [`DetachStrategy::RelinkSuccessor`], the right choice when an
    /// attached value type is configured.
    pub fn new() -> Self {
        Self::with_config(
            Natural,
            PoolConfig::default(),
            DetachStrategy::RelinkSuccessor,
        )
    }
}

impl<K: Ord> RbTree<K, ()> {
    /// Create an empty value-less (set-style) tree ordered by the key's
    /// `Ord`.
    ///
    /// Uses [`DetachStrategy::SwapPayload`]; with no attached value the
    /// payload swap moves only the key.
    pub fn new_set() -> Self {
        Self::with_config(Natural, PoolConfig::default(), DetachStrategy::SwapPayload)
    }
}

impl<K: Ord, V> Default for RbTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Compare<K>> RbTree<K, V, C> {
    /// Create an empty tree with a custom comparator.
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_config(cmp, PoolConfig::default(), DetachStrategy::RelinkSuccessor)
    }

    /// Create an empty tree with explicit comparator, pool sizing and
    /// removal strategy.
    pub fn with_config(cmp: C, pool: PoolConfig, detach: DetachStrategy) -> Self {
        RbTree {
            pool: FreePool::with_config(pool),
            root: NIL,
            len: 0,
            cmp,
            detach,
        }
    }

    /// Number of live nodes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no node is stored.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Occupancy snapshot of the owned node pool.
    pub fn pool_status(&self) -> PoolStatus {
        self.pool.status()
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let idx = self.find_index(key);
        if idx == NIL {
            None
        } else {
            Some(&self.pool.get(idx).value)
        }
    }

    /// Look up the value stored under `key` mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find_index(key);
        if idx == NIL {
            None
        } else {
            Some(&mut self.pool.get_mut(idx).value)
        }
    }

    /// True when `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.find_index(key) != NIL
    }

    /// Insert `key` with `value`.
    ///
    /// Returns `true` when the key was newly inserted. When the key is
    /// already present the tree is left untouched, the existing value
    /// stays in place, the given `value` is dropped and `false` is
    /// returned.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut parent = NIL;
        let mut went_left = false;
        let mut current = self.root;

        while current != NIL {
            match self.cmp.compare(&key, &self.pool.get(current).key) {
                Ordering::Less => {
                    parent = current;
                    went_left = true;
                    current = self.pool.get(current).left;
                }
                Ordering::Greater => {
                    parent = current;
                    went_left = false;
                    current = self.pool.get(current).right;
                }
                Ordering::Equal => return false,
            }
        }

        let slot = self.pool.allocate(RbNode::new(key, value, parent));
        if parent == NIL {
            self.root = slot;
        } else if went_left {
            self.pool.get_mut(parent).left = slot;
        } else {
            self.pool.get_mut(parent).right = slot;
        }
        self.len += 1;

        self.adjust_after_insert(slot);
        true
    }

    /// Remove `key` and hand back its value, or `None` when absent.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let node = self.find_index(key);
        if node == NIL {
            return None;
        }

        let (left, right) = {
            let n = self.pool.get(node);
            (n.left, n.right)
        };

        let doomed = if left != NIL && right != NIL {
            // In-order successor: leftmost node of the right subtree.
            let mut successor = right;
            loop {
                let l = self.pool.get(successor).left;
                if l == NIL {
                    break;
                }
                successor = l;
            }

            match self.detach {
                DetachStrategy::SwapPayload => {
                    let (a, b) = self.pool.get_pair_mut(node, successor);
                    core::mem::swap(&mut a.key, &mut b.key);
                    core::mem::swap(&mut a.value, &mut b.value);
                    successor
                }
                DetachStrategy::RelinkSuccessor => {
                    self.exchange_with_successor(node, successor);
                    node
                }
            }
        } else {
            node
        };

        self.splice_out(doomed);
        let freed = self.pool.free(doomed);
        self.len -= 1;
        Some(freed.value)
    }

    /// Drop every node and release all pool memory in bulk.
    ///
    /// Runs in O(chunks); the tree structure is never walked.
    pub fn clear(&mut self) {
        debug!(len = self.len, "red-black tree cleared");
        self.pool.clear();
        self.root = NIL;
        self.len = 0;
    }

    /// Render a depth-indented in-order dump, one node per line as
    /// `key[R]` or `key[B]`.
    pub fn write_dump(&self, out: &mut dyn fmt::Write) -> fmt::Result
    where
        K: fmt::Debug,
    {
        self.dump_rec(self.root, 0, out)
    }

    /// Iterative lookup; returns the slot index or `NIL`.
    fn find_index(&self, key: &K) -> u32 {
        let mut idx = self.root;
        while idx != NIL {
            let node = self.pool.get(idx);
            match self.cmp.compare(key, &node.key) {
                Ordering::Less => idx = node.left,
                Ordering::Greater => idx = node.right,
                Ordering::Equal => break,
            }
        }
        idx
    }

    /// Restore the red-black rules after inserting the red node at
    /// `node`.
    fn adjust_after_insert(&mut self, mut node: u32) {
        debug_assert_eq!(self.pool.get(node).color, Color::Red);

        loop {
            let parent = self.pool.get(node).parent;

            // The root is always black.
            if parent == NIL {
                self.pool.get_mut(node).color = Color::Black;
                return;
            }
            if self.pool.get(parent).color == Color::Black {
                return;
            }

            // A red parent is never the root, so a grandparent exists.
            let grandparent = self.pool.get(parent).parent;
            debug_assert!(grandparent != NIL);

            let uncle = if parent == self.pool.get(grandparent).left {
                self.pool.get(grandparent).right
            } else {
                self.pool.get(grandparent).left
            };

            if self.color_of(uncle) == Color::Red {
                // Push the red conflict two levels up and retry there.
                self.pool.get_mut(parent).color = Color::Black;
                self.pool.get_mut(uncle).color = Color::Black;
                self.pool.get_mut(grandparent).color = Color::Red;
                node = grandparent;
                continue;
            }

            // Black uncle. An inner (zig-zag) grandchild is rotated
            // outward first so one final rotation suffices.
            if node == self.pool.get(parent).right
                && parent == self.pool.get(grandparent).left
            {
                self.rotate_left(parent);
                node = parent;
            } else if node == self.pool.get(parent).left
                && parent == self.pool.get(grandparent).right
            {
                self.rotate_right(parent);
                node = parent;
            }

            let parent = self.pool.get(node).parent;
            let grandparent = self.pool.get(parent).parent;
            self.pool.get_mut(parent).color = Color::Black;
            self.pool.get_mut(grandparent).color = Color::Red;
            if node == self.pool.get(parent).left {
                debug_assert_eq!(self.pool.get(grandparent).left, parent);
                self.rotate_right(grandparent);
            } else {
                debug_assert_eq!(self.pool.get(grandparent).right, parent);
                self.rotate_left(grandparent);
            }
            return;
        }
    }

    /// Physically exchange `node` with its in-order successor.
    ///
    /// Children, colors and parent links swap places so `node` ends up in
    /// the successor's old structural position with at most one real
    /// child; payload bytes never move.
    fn exchange_with_successor(&mut self, node: u32, successor: u32) {
        let node_parent = self.pool.get(node).parent;
        let node_left = self.pool.get(node).left;
        let node_right = self.pool.get(node).right;
        let node_color = self.pool.get(node).color;
        let succ_right = self.pool.get(successor).right;
        let succ_color = self.pool.get(successor).color;

        debug_assert!(node_left != NIL && node_right != NIL);
        debug_assert_eq!(self.pool.get(successor).left, NIL);

        if node_right == successor {
            // Adjacent: the successor is the direct right child.
            self.replace_in_parent(node_parent, node, successor);
            {
                let s = self.pool.get_mut(successor);
                s.parent = node_parent;
                s.left = node_left;
                s.color = node_color;
            }
            self.pool.get_mut(node_left).parent = successor;

            {
                let n = self.pool.get_mut(node);
                n.parent = successor;
                n.left = NIL;
                n.right = succ_right;
                n.color = succ_color;
            }
            if succ_right != NIL {
                self.pool.get_mut(succ_right).parent = node;
            }

            self.pool.get_mut(successor).right = node;
        } else {
            let succ_parent = self.pool.get(successor).parent;

            self.replace_in_parent(node_parent, node, successor);
            {
                let s = self.pool.get_mut(successor);
                s.parent = node_parent;
                s.left = node_left;
                s.right = node_right;
                s.color = node_color;
            }
            self.pool.get_mut(node_left).parent = successor;
            self.pool.get_mut(node_right).parent = successor;

            // A non-adjacent successor is the leftmost node of the right
            // subtree, so it hangs off its parent's left side.
            debug_assert_eq!(self.pool.get(succ_parent).left, successor);
            self.pool.get_mut(succ_parent).left = node;
            {
                let n = self.pool.get_mut(node);
                n.parent = succ_parent;
                n.left = NIL;
                n.right = succ_right;
                n.color = succ_color;
            }
            if succ_right != NIL {
                self.pool.get_mut(succ_right).parent = node;
            }
        }
    }

    /// Splice out a node with at most one real child and repair black
    /// heights when a black node left the tree.
    fn splice_out(&mut self, node: u32) {
        let (left, right, color, parent) = {
            let n = self.pool.get(node);
            (n.left, n.right, n.color, n.parent)
        };
        debug_assert!(left == NIL || right == NIL);

        let child = if left == NIL { right } else { left };
        self.replace_in_parent(parent, node, child);
        if child != NIL {
            self.pool.get_mut(child).parent = parent;
        }

        // Removing a red node never violates a rule.
        if color == Color::Red {
            return;
        }

        // A red single child just takes over the black slot.
        if child != NIL && self.pool.get(child).color == Color::Red {
            self.pool.get_mut(child).color = Color::Black;
            return;
        }

        self.repair_double_black(child, parent);
    }

    /// Restore the equal-black-height rule after a black node above
    /// `node` was removed.
    ///
    /// `node` may be `NIL` (the spliced-in child was the sentinel), so its
    /// parent is carried explicitly instead of read through a link.
    fn repair_double_black(&mut self, mut node: u32, mut parent: u32) {
        loop {
            // Case 1: the root absorbs the missing black level.
            if parent == NIL {
                return;
            }
            debug_assert_eq!(self.color_of(node), Color::Black);

            let mut sibling = if self.pool.get(parent).left == node {
                self.pool.get(parent).right
            } else {
                self.pool.get(parent).left
            };

            // Case 2: red sibling. Rotate it over the parent; the new
            // sibling is black.
            if self.color_of(sibling) == Color::Red {
                self.pool.get_mut(parent).color = Color::Red;
                self.pool.get_mut(sibling).color = Color::Black;
                if self.pool.get(parent).left == node {
                    self.rotate_left(parent);
                    sibling = self.pool.get(parent).right;
                } else {
                    self.rotate_right(parent);
                    sibling = self.pool.get(parent).left;
                }
            }

            debug_assert!(sibling != NIL, "black-height deficit implies a real sibling");
            let sibling_left = self.pool.get(sibling).left;
            let sibling_right = self.pool.get(sibling).right;

            if self.color_of(sibling_left) == Color::Black
                && self.color_of(sibling_right) == Color::Black
            {
                if self.pool.get(parent).color == Color::Black {
                    // Case 3: both subtrees lose one black level; the
                    // deficit moves up.
                    self.pool.get_mut(sibling).color = Color::Red;
                    node = parent;
                    parent = self.pool.get(node).parent;
                    continue;
                }
                // Case 4: the red parent pays the missing black level.
                self.pool.get_mut(sibling).color = Color::Red;
                self.pool.get_mut(parent).color = Color::Black;
                return;
            }

            // Case 5: the sibling's red child sits on the near side;
            // rotate it to the far side.
            if self.pool.get(parent).left == node
                && self.color_of(sibling_left) == Color::Red
                && self.color_of(sibling_right) == Color::Black
            {
                self.pool.get_mut(sibling).color = Color::Red;
                self.pool.get_mut(sibling_left).color = Color::Black;
                self.rotate_right(sibling);
                sibling = self.pool.get(sibling).parent;
            } else if self.pool.get(parent).right == node
                && self.color_of(sibling_right) == Color::Red
                && self.color_of(sibling_left) == Color::Black
            {
                self.pool.get_mut(sibling).color = Color::Red;
                self.pool.get_mut(sibling_right).color = Color::Black;
                self.rotate_left(sibling);
                sibling = self.pool.get(sibling).parent;
            }

            // Case 6: black sibling with a red far child; one rotation
            // rebalances the black heights.
            let parent_color = self.pool.get(parent).color;
            self.pool.get_mut(sibling).color = parent_color;
            self.pool.get_mut(parent).color = Color::Black;
            if self.pool.get(parent).left == node {
                let far = self.pool.get(sibling).right;
                debug_assert_eq!(self.color_of(far), Color::Red);
                self.pool.get_mut(far).color = Color::Black;
                self.rotate_left(parent);
            } else {
                let far = self.pool.get(sibling).left;
                debug_assert_eq!(self.color_of(far), Color::Red);
                self.pool.get_mut(far).color = Color::Black;
                self.rotate_right(parent);
            }
            return;
        }
    }

    /// Rotate the node at `x` left, lifting its right child.
    fn rotate_left(&mut self, x: u32) {
        let y = self.pool.get(x).right;
        debug_assert!(y != NIL);
        let y_left = self.pool.get(y).left;

        self.pool.get_mut(x).right = y_left;
        if y_left != NIL {
            self.pool.get_mut(y_left).parent = x;
        }

        let x_parent = self.pool.get(x).parent;
        self.pool.get_mut(y).parent = x_parent;
        self.replace_in_parent(x_parent, x, y);

        self.pool.get_mut(y).left = x;
        self.pool.get_mut(x).parent = y;
    }

    /// Rotate the node at `x` right, lifting its left child.
    fn rotate_right(&mut self, x: u32) {
        let y = self.pool.get(x).left;
        debug_assert!(y != NIL);
        let y_right = self.pool.get(y).right;

        self.pool.get_mut(x).left = y_right;
        if y_right != NIL {
            self.pool.get_mut(y_right).parent = x;
        }

        let x_parent = self.pool.get(x).parent;
        self.pool.get_mut(y).parent = x_parent;
        self.replace_in_parent(x_parent, x, y);

        self.pool.get_mut(y).right = x;
        self.pool.get_mut(x).parent = y;
    }

    /// Point whatever held `old` (a parent's child link or the root) at
    /// `new` instead.
    fn replace_in_parent(&mut self, parent: u32, old: u32, new: u32) {
        if parent == NIL {
            self.root = new;
        } else if self.pool.get(parent).left == old {
            self.pool.get_mut(parent).left = new;
        } else {
            debug_assert_eq!(self.pool.get(parent).right, old);
            self.pool.get_mut(parent).right = new;
        }
    }

    /// Color of a possibly-`NIL` slot; the sentinel counts as black.
    #[inline(always)]
    pub(super) fn color_of(&self, idx: u32) -> Color {
        if idx == NIL {
            Color::Black
        } else {
            self.pool.get(idx).color
        }
    }

    fn dump_rec(&self, idx: u32, depth: usize, out: &mut dyn fmt::Write) -> fmt::Result
    where
        K: fmt::Debug,
    {
        if idx == NIL {
            return Ok(());
        }
        let node = self.pool.get(idx);
        self.dump_rec(node.left, depth + 1, out)?;
        for _ in 0..depth {
            out.write_char(' ')?;
        }
        let tag = match node.color {
            Color::Red => 'R',
            Color::Black => 'B',
        };
        writeln!(out, "{:?}[{}]", node.key, tag)?;
        self.dump_rec(node.right, depth + 1, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::FnCompare;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn collect_keys<V, C: Compare<i32>>(tree: &RbTree<i32, V, C>) -> Vec<i32> {
        let mut keys = Vec::new();
        tree.for_each(|k, _| keys.push(*k));
        keys
    }

    #[test]
    fn test_simple_tree() {
        let mut tree = RbTree::new_set();

        for key in [10, 40, 30, 20, 50] {
            assert!(tree.insert(key, ()));
        }
        assert!(tree.validate().is_ok());

        assert_eq!(tree.remove(&30), Some(()));

        assert!(tree.contains(&10));
        assert!(tree.contains(&20));
        assert!(tree.contains(&40));
        assert!(tree.contains(&50));
        assert!(!tree.contains(&30));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_duplicate_insert_leaves_tree_untouched() {
        let mut tree = RbTree::new();
        assert!(tree.insert(7, "first"));
        let status_before = tree.pool_status();

        assert!(!tree.insert(7, "second"));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.get(&7), Some(&"first"));
        assert_eq!(tree.pool_status(), status_before);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_remove_absent_key_is_a_noop() {
        let mut tree: RbTree<i32> = RbTree::new();
        assert_eq!(tree.remove(&1), None);

        tree.insert(1, ());
        tree.insert(2, ());
        assert_eq!(tree.remove(&3), None);
        assert_eq!(tree.len(), 2);
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_values_are_reachable_and_mutable() {
        let mut tree = RbTree::new();
        tree.insert(1, String::from("one"));
        tree.insert(2, String::from("two"));

        assert_eq!(tree.get(&2).map(String::as_str), Some("two"));
        tree.get_mut(&2).unwrap().push_str("!");
        assert_eq!(tree.remove(&2).as_deref(), Some("two!"));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_relink_with_adjacent_successor() {
        // Remove a two-child node whose right child is the successor.
        let mut tree = RbTree::new();
        for key in [20, 10, 30, 25, 40] {
            tree.insert(key, key.to_string());
        }
        assert!(tree.validate().is_ok());

        // 30 has children 25 and 40; its successor 40 is adjacent.
        assert_eq!(tree.remove(&30).as_deref(), Some("30"));
        assert!(tree.validate().is_ok());
        assert_eq!(collect_keys(&tree), vec![10, 20, 25, 40]);
    }

    #[test]
    fn test_relink_with_deep_successor() {
        let mut tree = RbTree::new();
        for key in [50, 20, 80, 10, 30, 70, 90, 60, 75] {
            tree.insert(key, key.to_string());
        }
        assert!(tree.validate().is_ok());

        // 50's successor is 60, two levels down in the right subtree.
        assert_eq!(tree.remove(&50).as_deref(), Some("50"));
        assert!(tree.validate().is_ok());
        assert_eq!(
            collect_keys(&tree),
            vec![10, 20, 30, 60, 70, 75, 80, 90]
        );
    }

    #[test]
    fn test_swap_payload_two_child_removal() {
        let mut tree = RbTree::new_set();
        for key in [50, 20, 80, 10, 30, 70, 90] {
            tree.insert(key, ());
        }

        assert_eq!(tree.remove(&50), Some(()));
        assert!(tree.validate().is_ok());
        assert_eq!(collect_keys(&tree), vec![10, 20, 30, 70, 80, 90]);
    }

    #[test]
    fn test_ascending_inserts_stay_balanced() {
        let mut tree = RbTree::new_set();
        for key in 0..128 {
            assert!(tree.insert(key, ()));
            assert!(tree.validate().is_ok());
        }
        assert_eq!(collect_keys(&tree), (0..128).collect::<Vec<_>>());
    }

    #[test]
    fn test_pool_tracks_live_nodes_across_growth() {
        let mut tree = RbTree::with_config(
            Natural,
            PoolConfig {
                slots_per_chunk: 4,
                chunks_per_cluster: 2,
            },
            DetachStrategy::RelinkSuccessor,
        );

        for key in 0..50 {
            tree.insert(key, key);
            assert_eq!(tree.pool_status().used, tree.len());
        }
        for key in (0..50).step_by(2) {
            tree.remove(&key);
            assert_eq!(tree.pool_status().used, tree.len());
        }
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_insert_remove_round_trip_empties_tree() {
        let mut tree = RbTree::new();
        for key in 0..40 {
            tree.insert(key, key * 2);
        }
        for key in 0..40 {
            assert_eq!(tree.remove(&key), Some(key * 2));
            assert!(tree.validate().is_ok());
        }

        assert!(tree.is_empty());
        assert_eq!(tree.root, NIL);
        assert_eq!(tree.pool_status().used, 0);
    }

    #[test]
    fn test_permutation_churn_both_strategies() {
        for detach in [DetachStrategy::SwapPayload, DetachStrategy::RelinkSuccessor] {
            let mut rng = StdRng::seed_from_u64(0x2b2b);
            let mut keys: Vec<i32> = (1..=500).collect();
            keys.shuffle(&mut rng);

            let mut tree =
                RbTree::with_config(Natural, PoolConfig::default(), detach);
            for &key in &keys {
                assert!(tree.insert(key, key as u64));
                assert!(tree.validate().is_ok());
            }
            assert_eq!(tree.len(), 500);
            assert_eq!(collect_keys(&tree), (1..=500).collect::<Vec<_>>());

            keys.shuffle(&mut rng);
            for &key in &keys {
                assert_eq!(tree.remove(&key), Some(key as u64));
                assert!(tree.validate().is_ok());
            }
            assert!(tree.is_empty());
        }
    }

    #[test]
    fn test_custom_comparator_reverses_order() {
        let mut tree = RbTree::with_comparator(FnCompare(|a: &i32, b: &i32| b.cmp(a)));
        for key in [3, 1, 2] {
            tree.insert(key, ());
        }
        assert!(tree.validate().is_ok());
        assert_eq!(collect_keys(&tree), vec![3, 2, 1]);
    }

    #[test]
    fn test_clear_releases_pool() {
        let mut tree = RbTree::new_set();
        for key in 0..100 {
            tree.insert(key, ());
        }
        tree.clear();

        assert!(tree.is_empty());
        assert_eq!(tree.pool_status().used, 0);
        assert_eq!(tree.pool_status().allocated, 0);

        assert!(tree.insert(1, ()));
        assert!(tree.validate().is_ok());
    }

    #[test]
    fn test_dump_renders_in_order() {
        let mut tree = RbTree::new_set();
        for key in [2, 1, 3] {
            tree.insert(key, ());
        }
        let mut out = String::new();
        tree.write_dump(&mut out).unwrap();
        assert_eq!(out, " 1[R]\n2[B]\n 3[R]\n");
    }
}
