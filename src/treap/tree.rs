use crate::entry::Entry;
use crate::treap::node::Node;
use log::trace;
use std::cmp::{self, Ordering};
use std::mem;

/// A possibly empty treap. `None` is the empty tree.
pub type Tree<K, V> = Option<Box<Node<K, V>>>;

/// Splits `tree` into the nodes with keys less than `key` and the nodes with keys greater than
/// or equal to `key`. Only keys are compared, so both halves keep the heap ordering of the
/// input.
///
/// # Examples
///
/// ```
/// use treap_height::treap::{tree, Node};
///
/// let mut root = None;
/// for (key, priority) in vec![(2, 5), (1, 3), (3, 4)] {
///     root = tree::insert(root, Node::new(key, (), priority)).0;
/// }
///
/// let (left, right) = tree::split(root, &2);
/// assert!(tree::contains(&left, &1));
/// assert!(!tree::contains(&left, &2));
/// assert!(tree::contains(&right, &2));
/// assert!(tree::contains(&right, &3));
/// ```
pub fn split<K: Ord, V>(tree: Tree<K, V>, key: &K) -> (Tree<K, V>, Tree<K, V>) {
    match tree {
        Some(mut node) => {
            if node.entry.key < *key {
                let (left, right) = split(node.right.take(), key);
                node.right = left;
                (Some(node), right)
            } else {
                let (left, right) = split(node.left.take(), key);
                node.left = right;
                (left, Some(node))
            }
        },
        None => (None, None),
    }
}

/// Splits `tree` into the nodes with keys less than `key`, the node with a key equal to `key` (if
/// any) detached from its children, and the nodes with keys greater than `key`.
pub fn split_at<K: Ord, V>(tree: Tree<K, V>, key: &K) -> (Tree<K, V>, Tree<K, V>, Tree<K, V>) {
    match tree {
        Some(mut node) => match key.cmp(&node.entry.key) {
            Ordering::Less => {
                let (left, equal, right) = split_at(node.left.take(), key);
                node.left = right;
                (left, equal, Some(node))
            },
            Ordering::Greater => {
                let (left, equal, right) = split_at(node.right.take(), key);
                node.right = left;
                (Some(node), equal, right)
            },
            Ordering::Equal => {
                let left = node.left.take();
                let right = node.right.take();
                (left, Some(node), right)
            },
        },
        None => (None, None, None),
    }
}

/// Inserts a detached node into `tree` and returns the new root. If a node with the same key
/// already exists, its entry is replaced and the previous entry is returned.
///
/// # Panics
///
/// Panics in debug builds if `new_node` still owns children.
pub fn insert<K: Ord, V>(
    tree: Tree<K, V>,
    mut new_node: Box<Node<K, V>>,
) -> (Tree<K, V>, Option<Entry<K, V>>) {
    debug_assert!(new_node.is_detached(), "inserted node must not own subtrees");
    match tree {
        Some(mut node) => {
            if node.priority > new_node.priority {
                let ret = match new_node.entry.key.cmp(&node.entry.key) {
                    Ordering::Less => {
                        let (left, ret) = insert(node.left.take(), new_node);
                        node.left = left;
                        ret
                    },
                    Ordering::Greater => {
                        let (right, ret) = insert(node.right.take(), new_node);
                        node.right = right;
                        ret
                    },
                    Ordering::Equal => Some(mem::replace(&mut node.entry, new_node.into_entry())),
                };
                (Some(node), ret)
            } else {
                trace!(
                    "priority {} takes over subtree with root priority {}",
                    new_node.priority,
                    node.priority
                );
                let (left, equal, right) = split_at(Some(node), &new_node.entry.key);
                new_node.left = left;
                new_node.right = right;
                (Some(new_node), equal.map(|node| node.into_entry()))
            }
        },
        None => (Some(new_node), None),
    }
}

pub fn contains<K: Ord, V>(tree: &Tree<K, V>, key: &K) -> bool {
    match *tree {
        Some(ref node) => match key.cmp(&node.entry.key) {
            Ordering::Less => contains(&node.left, key),
            Ordering::Greater => contains(&node.right, key),
            Ordering::Equal => true,
        },
        None => false,
    }
}

pub fn get<'a, K: Ord, V>(tree: &'a Tree<K, V>, key: &K) -> Option<&'a V> {
    tree.as_ref().and_then(|node| match key.cmp(&node.entry.key) {
        Ordering::Less => get(&node.left, key),
        Ordering::Greater => get(&node.right, key),
        Ordering::Equal => Some(&node.entry.value),
    })
}

/// Returns a mutable reference to the value stored under `key`. Keys are never handed out
/// mutably.
pub fn get_mut<'a, K: Ord, V>(tree: &'a mut Tree<K, V>, key: &K) -> Option<&'a mut V> {
    tree.as_mut().and_then(|node| match key.cmp(&node.entry.key) {
        Ordering::Less => get_mut(&mut node.left, key),
        Ordering::Greater => get_mut(&mut node.right, key),
        Ordering::Equal => Some(&mut node.entry.value),
    })
}

/// Returns the number of nodes on the longest root-to-leaf path. The empty tree has height 0.
pub fn height<K, V>(tree: &Tree<K, V>) -> usize {
    match *tree {
        Some(ref node) => 1 + cmp::max(height(&node.left), height(&node.right)),
        None => 0,
    }
}

/// Counts the nodes of `tree`.
pub fn len<K, V>(tree: &Tree<K, V>) -> usize {
    match *tree {
        Some(ref node) => 1 + len(&node.left) + len(&node.right),
        None => 0,
    }
}
