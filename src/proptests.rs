use crate::treap::{tree, Node, Treap};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn validate_node<K: Ord + Copy, V>(
    tree: &tree::Tree<K, V>,
    low: Option<K>,
    high: Option<K>,
    keys: &mut Vec<K>,
) {
    if let Some(ref node) = *tree {
        if let Some(low) = low {
            assert!(*node.key() > low, "left ancestor key must be smaller");
        }
        if let Some(high) = high {
            assert!(*node.key() < high, "right ancestor key must be larger");
        }
        for child in [node.left(), node.right()].iter() {
            if let Some(ref child_node) = **child {
                assert!(
                    node.priority() >= child_node.priority(),
                    "parent priority must not be smaller than child priority"
                );
            }
        }
        validate_node(node.left(), low, Some(*node.key()), keys);
        keys.push(*node.key());
        validate_node(node.right(), Some(*node.key()), high, keys);
    }
}

fn validate_tree<K: Ord + Copy, V>(tree: &tree::Tree<K, V>) -> Vec<K> {
    let mut keys = Vec::new();
    validate_node(tree, None, None, &mut keys);
    keys
}

fn build(pairs: &[(u16, u32)]) -> tree::Tree<u16, u32> {
    let mut root = None;
    for &(key, priority) in pairs {
        root = tree::insert(root, Node::new(key, priority, priority)).0;
    }
    root
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_insert_keeps_invariants(pairs in prop::collection::vec((any::<u16>(), any::<u32>()), 0..200)) {
        let root = build(&pairs);
        let mut expected: Vec<u16> = pairs.iter().map(|&(key, _)| key).collect();
        expected.sort();
        expected.dedup();
        prop_assert_eq!(validate_tree(&root), expected);
    }

    #[test]
    fn prop_shape_ignores_insertion_order(
        pairs in prop::collection::btree_map(any::<u16>(), any::<u32>(), 1..100)
    ) {
        let mut priorities: Vec<u32> = pairs.values().cloned().collect();
        priorities.sort();
        priorities.dedup();
        prop_assume!(priorities.len() == pairs.len());

        let ascending: Vec<(u16, u32)> = pairs.iter().map(|(&key, &priority)| (key, priority)).collect();
        let descending: Vec<(u16, u32)> = ascending.iter().rev().cloned().collect();
        let a = build(&ascending);
        let b = build(&descending);

        prop_assert_eq!(a.as_ref().map(|node| *node.key()), b.as_ref().map(|node| *node.key()));
        prop_assert_eq!(tree::height(&a), tree::height(&b));
    }

    #[test]
    fn prop_split_partitions_keys(
        pairs in prop::collection::vec((any::<u16>(), any::<u32>()), 0..200),
        pivot in any::<u16>()
    ) {
        let root = build(&pairs);
        let all = validate_tree(&root);

        let (left, right) = tree::split(root, &pivot);
        let left_keys = validate_tree(&left);
        let right_keys = validate_tree(&right);

        prop_assert!(left_keys.iter().all(|key| *key < pivot));
        prop_assert!(right_keys.iter().all(|key| *key >= pivot));

        let mut joined = left_keys;
        joined.extend(right_keys);
        prop_assert_eq!(joined, all);
    }

    #[test]
    fn prop_equivalence_with_btreemap(pairs in prop::collection::vec((0u16..512, any::<u32>()), 0..300)) {
        let mut t = Treap::with_seed(17);
        let mut m = BTreeMap::new();

        for &(key, value) in &pairs {
            let before = t.len();
            let fresh = !t.contains(&key);
            prop_assert_eq!(t.insert(key, value), m.insert(key, value));
            if fresh {
                prop_assert_eq!(t.len(), before + 1);
            }
            prop_assert_eq!(t.len(), m.len());
        }

        for key in 0u16..512 {
            prop_assert_eq!(t.contains(&key), m.contains_key(&key));
            prop_assert_eq!(t.get(&key), m.get(&key));
        }
        prop_assert_eq!(tree::len(t.root()), m.len());
        validate_tree(t.root());
    }
}

#[test]
fn exhaustive_insert_order_small_set() {
    fn rec(
        items: &[(u16, u32)],
        used: &mut [bool],
        out: &mut Vec<(u16, u32)>,
        shape: &mut Option<Vec<u16>>,
    ) {
        if out.len() == items.len() {
            let root = build(&out[..]);
            let mut preorder = Vec::new();
            preorder_keys(&root, &mut preorder);
            match *shape {
                Some(ref expected) => assert_eq!(&preorder, expected),
                None => *shape = Some(preorder),
            }
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i]);
            rec(items, used, out, shape);
            out.pop();
            used[i] = false;
        }
    }

    fn preorder_keys(tree: &tree::Tree<u16, u32>, ret: &mut Vec<u16>) {
        if let Some(ref node) = *tree {
            ret.push(*node.key());
            preorder_keys(node.left(), ret);
            preorder_keys(node.right(), ret);
        }
    }

    let items = [(4, 40), (2, 10), (6, 50), (1, 30), (3, 20), (5, 60)];
    let mut used = [false; 6];
    let mut shape = None;
    rec(&items, &mut used, &mut Vec::new(), &mut shape);
    assert_eq!(shape, Some(vec![5, 4, 1, 3, 2, 6]));
}
