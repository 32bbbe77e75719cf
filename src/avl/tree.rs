//! Height-balanced search tree over a free-capable slot pool.

use core::cmp::Ordering;
use core::fmt;

use tracing::debug;

use crate::avl::AvlNode;
use crate::compare::{Compare, Natural};
use crate::constants::NIL;
use crate::pool::{FreePool, PoolConfig, PoolStatus};

/// Height-balanced search tree.
///
/// Keys are ordered by the comparator `C`; every node may carry an
/// attached value `V` (default `()` for set-style use). Node storage
/// lives in a slot pool owned by the tree, so teardown releases chunks in
/// bulk instead of walking nodes.
///
/// # Example
/// ```rust
/// use slottree::AvlTree;
///
/// let mut tree = AvlTree::new();
/// assert!(tree.insert(2, "two"));
/// assert!(tree.insert(1, "one"));
/// assert!(!tree.insert(2, "again"));   // key already present
/// assert_eq!(tree.get(&2), Some(&"two"));
/// assert_eq!(tree.remove(&1), Some("one"));
/// ```
#[derive(Debug)]
pub struct AvlTree<K, V = (), C = Natural> {
    /// Node storage; used-slot count mirrors `len` at all times.
    pub(super) pool: FreePool<AvlNode<K, V>>,

    /// Root slot, `NIL` when the tree is empty.
    pub(super) root: u32,

    /// Live node counter.
    pub(super) len: usize,

    /// Three-way key comparator.
    pub(super) cmp: C,
}

/// State threaded through the recursive insertion descent.
struct InsertCtx<K, V> {
    /// Key and value travelling to the insertion point. Consumed exactly
    /// once, at the sentinel.
    payload: Option<(K, V)>,
    /// Subtree height grew and ancestors must re-check their balance.
    height_changed: bool,
    /// Key was already present; the tree is untouched.
    found: bool,
}

/// State threaded through the recursive removal descent.
struct RemoveCtx<'a, K, V> {
    key: &'a K,
    /// Subtree height shrank and ancestors must re-check their balance.
    height_changed: bool,
    /// Payload of the removed node, set at the unlink point.
    removed: Option<V>,
}

impl<K: Ord, V> AvlTree<K, V> {
    /// Create an empty tree ordered by the key's `Ord`.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K: Ord, V> Default for AvlTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C: Compare<K>> AvlTree<K, V, C> {
    /// Create an empty tree with a custom comparator.
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_config(cmp, PoolConfig::default())
    }

    /// Create an empty tree with a custom comparator and pool sizing.
    pub fn with_config(cmp: C, pool: PoolConfig) -> Self {
        AvlTree {
            pool: FreePool::with_config(pool),
            root: NIL,
            len: 0,
            cmp,
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
        let mut idx = self.root;
        while idx != NIL {
            let node = self.pool.get(idx);
            match self.cmp.compare(key, &node.key) {
                Ordering::Less => idx = node.left,
                Ordering::Greater => idx = node.right,
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    /// Look up the value stored under `key` mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut idx = self.root;
        while idx != NIL {
            let node = self.pool.get(idx);
            match self.cmp.compare(key, &node.key) {
                Ordering::Less => idx = node.left,
                Ordering::Greater => idx = node.right,
                Ordering::Equal => return Some(&mut self.pool.get_mut(idx).value),
            }
        }
        None
    }

    /// True when `key` is stored in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Insert `key` with `value`.
    ///
    /// Returns `true` when the key was newly inserted. When the key is
    /// already present the tree is left untouched, the existing value
    /// stays in place, the given `value` is dropped and `false` is
    /// returned.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut ctx = InsertCtx {
            payload: Some((key, value)),
            height_changed: false,
            found: false,
        };
        self.root = self.insert_rec(self.root, &mut ctx);
        !ctx.found
    }

    /// Remove `key` and hand back its value, or `None` when absent.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let mut ctx = RemoveCtx {
            key,
            height_changed: false,
            removed: None,
        };
        self.root = self.remove_rec(self.root, &mut ctx);
        ctx.removed
    }

    /// Drop every node and release all pool memory in bulk.
    ///
    /// Runs in O(chunks); the tree structure is never walked.
    pub fn clear(&mut self) {
        debug!(len = self.len, "avl tree cleared");
        self.pool.clear();
        self.root = NIL;
        self.len = 0;
    }

    /// Visit every entry in ascending key order.
    pub fn for_each(&self, mut visitor: impl FnMut(&K, &V)) {
        self.for_each_rec(self.root, &mut visitor);
    }

    /// Render a depth-indented in-order dump, one node per line as
    /// `key(balance)`.
    pub fn write_dump(&self, out: &mut dyn fmt::Write) -> fmt::Result
    where
        K: fmt::Debug,
    {
        self.dump_rec(self.root, 0, out)
    }

    fn insert_rec(&mut self, idx: u32, ctx: &mut InsertCtx<K, V>) -> u32 {
        if idx == NIL {
            let (key, value) = ctx
                .payload
                .take()
                .expect("payload is consumed once, at the insertion point");
            let slot = self.pool.allocate(AvlNode::new(key, value));
            self.len += 1;
            ctx.height_changed = true;
            return slot;
        }

        let ordering = {
            let (key, _) = ctx
                .payload
                .as_ref()
                .expect("payload is present while descending");
            self.cmp.compare(key, &self.pool.get(idx).key)
        };

        match ordering {
            Ordering::Less => {
                let left = self.pool.get(idx).left;
                let new_left = self.insert_rec(left, ctx);
                self.pool.get_mut(idx).left = new_left;

                if ctx.height_changed {
                    let node = self.pool.get_mut(idx);
                    match node.balance {
                        1 => {
                            // Growth cancelled the existing right lean.
                            node.balance = 0;
                            ctx.height_changed = false;
                            idx
                        }
                        0 => {
                            node.balance = -1;
                            idx
                        }
                        _ => {
                            ctx.height_changed = false;
                            self.rebalance_left_heavy(idx)
                        }
                    }
                } else {
                    idx
                }
            }
            Ordering::Greater => {
                let right = self.pool.get(idx).right;
                let new_right = self.insert_rec(right, ctx);
                self.pool.get_mut(idx).right = new_right;

                if ctx.height_changed {
                    let node = self.pool.get_mut(idx);
                    match node.balance {
                        -1 => {
                            node.balance = 0;
                            ctx.height_changed = false;
                            idx
                        }
                        0 => {
                            node.balance = 1;
                            idx
                        }
                        _ => {
                            ctx.height_changed = false;
                            self.rebalance_right_heavy(idx)
                        }
                    }
                } else {
                    idx
                }
            }
            Ordering::Equal => {
                ctx.found = true;
                idx
            }
        }
    }

    fn remove_rec(&mut self, idx: u32, ctx: &mut RemoveCtx<'_, K, V>) -> u32 {
        if idx == NIL {
            // Key is absent; nothing below changed.
            return NIL;
        }

        match self.cmp.compare(ctx.key, &self.pool.get(idx).key) {
            Ordering::Less => {
                let left = self.pool.get(idx).left;
                let new_left = self.remove_rec(left, ctx);
                self.pool.get_mut(idx).left = new_left;
                if ctx.height_changed {
                    return self.on_left_shrunk(idx, &mut ctx.height_changed);
                }
                idx
            }
            Ordering::Greater => {
                let right = self.pool.get(idx).right;
                let new_right = self.remove_rec(right, ctx);
                self.pool.get_mut(idx).right = new_right;
                if ctx.height_changed {
                    return self.on_right_shrunk(idx, &mut ctx.height_changed);
                }
                idx
            }
            Ordering::Equal => self.unlink(idx, ctx),
        }
    }

    /// Structurally remove the node at `idx` and return what replaces it.
    fn unlink(&mut self, idx: u32, ctx: &mut RemoveCtx<'_, K, V>) -> u32 {
        let (left, right) = {
            let node = self.pool.get(idx);
            (node.left, node.right)
        };

        let replacement = if right == NIL {
            ctx.height_changed = true;
            left
        } else if left == NIL {
            ctx.height_changed = true;
            right
        } else {
            // Two real children: physically detach the in-order
            // predecessor (rightmost of the left subtree) and splice it
            // into this node's position, adopting children and balance.
            let (new_left, predecessor) = self.detach_rightmost(left, ctx);
            {
                let balance = self.pool.get(idx).balance;
                let node = self.pool.get_mut(predecessor);
                node.left = new_left;
                node.right = right;
                node.balance = balance;
            }
            let mut subtree = predecessor;
            if ctx.height_changed {
                subtree = self.on_left_shrunk(subtree, &mut ctx.height_changed);
            }
            subtree
        };

        let node = self.pool.free(idx);
        self.len -= 1;
        ctx.removed = Some(node.value);
        replacement
    }

    /// Disconnect the rightmost node of the subtree at `idx`.
    ///
    /// Returns the new subtree root and the detached slot, propagating the
    /// right-side shrink repair back along the descent path.
    fn detach_rightmost(&mut self, idx: u32, ctx: &mut RemoveCtx<'_, K, V>) -> (u32, u32) {
        let right = self.pool.get(idx).right;
        if right != NIL {
            let (new_right, detached) = self.detach_rightmost(right, ctx);
            self.pool.get_mut(idx).right = new_right;
            let mut root = idx;
            if ctx.height_changed {
                root = self.on_right_shrunk(root, &mut ctx.height_changed);
            }
            (root, detached)
        } else {
            ctx.height_changed = true;
            (self.pool.get(idx).left, idx)
        }
    }

    fn for_each_rec(&self, idx: u32, visitor: &mut impl FnMut(&K, &V)) {
        if idx == NIL {
            return;
        }
        let node = self.pool.get(idx);
        self.for_each_rec(node.left, visitor);
        visitor(&node.key, &node.value);
        self.for_each_rec(node.right, visitor);
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
        writeln!(out, "{:?}({})", node.key, node.balance)?;
        self.dump_rec(node.right, depth + 1, out)
    }
}
