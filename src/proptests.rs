//! Randomized operation sequences checked against `BTreeMap`.
//!
//! Every generated sequence of inserts and removes is applied to a tree
//! and to a `BTreeMap` model in lockstep; after each step the tree must
//! validate cleanly, agree with the model on the outcome, and keep its
//! pool occupancy equal to its live count.

use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::pool::PoolConfig;
use crate::{AvlTree, DetachStrategy, Natural, RbTree};

/// One step of a generated workload.
#[derive(Debug, Clone)]
enum Op {
    Insert(u16, u32),
    Remove(u16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        // Narrow key space so removals hit live keys often.
        (0..400u16, any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        (0..400u16).prop_map(Op::Remove),
    ]
}

/// Tiny pool chunks force cluster growth and slot reuse mid-sequence.
fn small_pool() -> PoolConfig {
    PoolConfig {
        slots_per_chunk: 8,
        chunks_per_cluster: 2,
    }
}

fn check_against_model<F>(ops: &[Op], mut apply: F)
where
    F: FnMut(&Op, &BTreeMap<u16, u32>) -> (bool, usize, usize, usize),
{
    let mut model = BTreeMap::new();
    for op in ops {
        // Note: on a duplicate insert the model overwrites its value
        // while the trees keep the original; only membership and counts
        // are compared here.
        let expected = match op {
            Op::Insert(k, v) => model.insert(*k, *v).is_none(),
            Op::Remove(k) => model.remove(k).is_some(),
        };

        let (outcome, len, pool_used, model_len) = apply(op, &model);
        assert_eq!(outcome, expected, "op {:?} disagreed with the model", op);
        assert_eq!(len, model_len);
        assert_eq!(pool_used, len, "pool occupancy must track live nodes");
    }
}

proptest! {
    #[test]
    fn avl_matches_model(ops in proptest::collection::vec(op_strategy(), 1..200)) {
        let mut tree = AvlTree::with_config(Natural, small_pool());

        check_against_model(&ops, |op, model| {
            let outcome = match op {
                Op::Insert(k, v) => tree.insert(*k, *v),
                Op::Remove(k) => tree.remove(k).is_some(),
            };
            tree.validate().expect("avl invariants must hold after every op");
            (outcome, tree.len(), tree.pool_status().used, model.len())
        });

        let mut keys = Vec::new();
        tree.for_each(|k, _| keys.push(*k));
        let model_keys: Vec<u16> = ops
            .iter()
            .fold(BTreeMap::new(), |mut m, op| {
                match op {
                    Op::Insert(k, v) => {
                        m.entry(*k).or_insert(*v);
                    }
                    Op::Remove(k) => {
                        m.remove(k);
                    }
                }
                m
            })
            .into_keys()
            .collect();
        prop_assert_eq!(keys, model_keys);
    }

    #[test]
    fn rb_matches_model_with_relink(ops in proptest::collection::vec(op_strategy(), 1..200)) {
        let mut tree = RbTree::with_config(
            Natural,
            small_pool(),
            DetachStrategy::RelinkSuccessor,
        );

        check_against_model(&ops, |op, model| {
            let outcome = match op {
                Op::Insert(k, v) => tree.insert(*k, *v),
                Op::Remove(k) => tree.remove(k).is_some(),
            };
            tree.validate().expect("rb invariants must hold after every op");
            (outcome, tree.len(), tree.pool_status().used, model.len())
        });

        let iterated: Vec<u16> = tree.iter().map(|(k, _)| *k).collect();
        let mut visited = Vec::new();
        tree.for_each(|k, _| visited.push(*k));
        prop_assert_eq!(iterated, visited);
    }

    #[test]
    fn rb_matches_model_with_payload_swap(ops in proptest::collection::vec(op_strategy(), 1..200)) {
        let mut tree = RbTree::with_config(
            Natural,
            small_pool(),
            DetachStrategy::SwapPayload,
        );

        check_against_model(&ops, |op, model| {
            let outcome = match op {
                Op::Insert(k, v) => tree.insert(*k, *v),
                Op::Remove(k) => tree.remove(k).is_some(),
            };
            tree.validate().expect("rb invariants must hold after every op");
            (outcome, tree.len(), tree.pool_status().used, model.len())
        });
    }

    #[test]
    fn engines_agree_with_each_other(ops in proptest::collection::vec(op_strategy(), 1..150)) {
        let mut avl = AvlTree::new();
        let mut rb = RbTree::new();

        for op in &ops {
            match op {
                Op::Insert(k, v) => {
                    prop_assert_eq!(avl.insert(*k, *v), rb.insert(*k, *v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(avl.remove(k), rb.remove(k));
                }
            }
        }

        let mut avl_pairs = Vec::new();
        avl.for_each(|k, v| avl_pairs.push((*k, *v)));
        let rb_pairs: Vec<(u16, u32)> = rb.iter().map(|(k, v)| (*k, *v)).collect();
        prop_assert_eq!(avl_pairs, rb_pairs);
    }
}
