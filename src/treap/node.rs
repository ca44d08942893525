use crate::entry::Entry;
use crate::treap::tree;
use rand::Rng;

/// A struct representing an internal node of a treap.
///
/// A node exclusively owns its two subtrees. The key and the priority are fixed when the node is
/// constructed.
#[derive(Debug)]
pub struct Node<K, V> {
    pub(super) entry: Entry<K, V>,
    pub(super) priority: u32,
    pub(super) left: tree::Tree<K, V>,
    pub(super) right: tree::Tree<K, V>,
}

impl<K, V> Node<K, V> {
    /// Constructs a detached node with an explicit priority.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_height::treap::Node;
    ///
    /// let node = Node::new(1, "one", 7);
    /// assert_eq!(node.key(), &1);
    /// assert_eq!(node.priority(), 7);
    /// ```
    pub fn new(key: K, value: V, priority: u32) -> Box<Self> {
        Box::new(Node {
            entry: Entry { key, value },
            priority,
            left: None,
            right: None,
        })
    }

    /// Constructs a detached node whose priority is drawn from `rng`. Exactly one `u32` is
    /// consumed from the generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::XorShiftRng;
    /// use treap_height::treap::Node;
    ///
    /// let mut rng = XorShiftRng::from_seed([1, 1, 1, 1]);
    /// let node = Node::with_rng(1, "one", &mut rng);
    /// assert_eq!(node.value(), &"one");
    /// ```
    pub fn with_rng<R: Rng>(key: K, value: V, rng: &mut R) -> Box<Self> {
        Node::new(key, value, rng.next_u32())
    }

    pub fn key(&self) -> &K {
        &self.entry.key
    }

    pub fn value(&self) -> &V {
        &self.entry.value
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }

    pub fn left(&self) -> &tree::Tree<K, V> {
        &self.left
    }

    pub fn right(&self) -> &tree::Tree<K, V> {
        &self.right
    }

    pub(super) fn is_detached(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(super) fn into_entry(self) -> Entry<K, V> {
        self.entry
    }
}

#[cfg(test)]
mod tests {
    use super::Node;
    use rand::{Rng, SeedableRng, XorShiftRng};

    #[test]
    fn test_with_rng_consumes_one_value() {
        let mut rng = XorShiftRng::from_seed([1, 2, 3, 4]);
        let mut expected = XorShiftRng::from_seed([1, 2, 3, 4]);

        let node = Node::with_rng(0, 0, &mut rng);
        assert_eq!(node.priority(), expected.next_u32());
        assert_eq!(rng.next_u32(), expected.next_u32());
    }

    #[test]
    fn test_new_is_detached() {
        let node = Node::new(5, 6, 7);
        assert!(node.is_detached());
        assert_eq!(node.key(), &5);
        assert_eq!(node.value(), &6);
        assert!(node.left().is_none());
        assert!(node.right().is_none());
    }
}
