use crate::rng;
use crate::treap::node::Node;
use crate::treap::tree;
use rand::{Rand, Rng, XorShiftRng};

/// An ordered key-value store implemented by a treap.
///
/// A treap is a tree that satisfies both the binary search tree property and a heap property. Each
/// node has a key, a value, and a priority. The key of any node is greater than all keys in its
/// left subtree and less than all keys occuring in its right subtree. The priority of a node is
/// greater than or equal to the priority of all nodes in its subtrees. By randomly generating
/// priorities, the expected height of the tree is proportional to the logarithm of the number of
/// keys.
///
/// Priorities are drawn from the generator owned by the treap, so a treap built with a fixed seed
/// always has the same shape for the same sequence of insertions.
///
/// # Examples
///
/// ```
/// use treap_height::Treap;
///
/// let mut t = Treap::new();
/// t.insert(0, 1);
/// t.insert(3, 4);
///
/// assert!(t.contains(&0));
/// assert!(!t.contains(&1));
/// assert_eq!(t.get(&3), Some(&4));
/// assert_eq!(t.len(), 2);
/// assert!(t.height() >= 1);
/// ```
pub struct Treap<K, V, R = XorShiftRng> {
    root: tree::Tree<K, V>,
    rng: R,
    len: usize,
}

impl<K: Ord, V> Treap<K, V> {
    /// Constructs a new, empty `Treap<K, V>` whose priorities are seeded from the system clock.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_height::Treap;
    ///
    /// let t: Treap<u32, u32> = Treap::new();
    /// assert!(t.is_empty());
    /// ```
    pub fn new() -> Self {
        Treap::with_rng(rng::time_seeded())
    }

    /// Constructs a new, empty `Treap<K, V>` whose priorities are fully determined by `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_height::Treap;
    ///
    /// let mut a = Treap::with_seed(3);
    /// let mut b = Treap::with_seed(3);
    /// for key in 0..100 {
    ///     a.insert(key, ());
    ///     b.insert(key, ());
    /// }
    /// assert_eq!(a.height(), b.height());
    /// ```
    pub fn with_seed(seed: u64) -> Self {
        Treap::with_rng(rng::from_seed(seed))
    }
}

impl<K: Ord, V, R: Rng> Treap<K, V, R> {
    /// Constructs a new, empty treap that draws priorities from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{SeedableRng, XorShiftRng};
    /// use treap_height::Treap;
    ///
    /// let t: Treap<u32, u32, XorShiftRng> = Treap::with_rng(XorShiftRng::from_seed([1, 1, 1, 1]));
    /// assert_eq!(t.len(), 0);
    /// ```
    pub fn with_rng(rng: R) -> Self {
        Treap {
            root: None,
            rng,
            len: 0,
        }
    }

    /// Inserts a key-value pair into the treap. If the key already exists in the treap, the value
    /// is replaced and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_height::Treap;
    ///
    /// let mut t = Treap::new();
    /// assert_eq!(t.insert(1, 1), None);
    /// assert_eq!(t.get(&1), Some(&1));
    /// assert_eq!(t.insert(1, 2), Some(1));
    /// assert_eq!(t.get(&1), Some(&2));
    /// assert_eq!(t.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let Treap {
            ref mut root,
            ref mut rng,
            ref mut len,
        } = self;
        let new_node = Node::with_rng(key, value, rng);
        let (new_root, ret) = tree::insert(root.take(), new_node);
        *root = new_root;
        match ret {
            Some(entry) => Some(entry.into_value()),
            None => {
                *len += 1;
                None
            },
        }
    }

    /// Checks if a key exists in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_height::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// assert!(!t.contains(&0));
    /// assert!(t.contains(&1));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        tree::contains(&self.root, key)
    }

    /// Returns an immutable reference to the value associated with a particular key. Returns
    /// `None` if the key does not exist in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_height::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// assert_eq!(t.get(&0), None);
    /// assert_eq!(t.get(&1), Some(&1));
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        tree::get(&self.root, key)
    }

    /// Returns a mutable reference to the value associated with a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_height::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// *t.get_mut(&1).unwrap() = 2;
    /// assert_eq!(t.get(&1), Some(&2));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        tree::get_mut(&mut self.root, key)
    }

    /// Returns the height of the treap: the number of nodes on its longest root-to-leaf path.
    /// The height is recomputed on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_height::Treap;
    ///
    /// let mut t = Treap::new();
    /// assert_eq!(t.height(), 0);
    /// t.insert(1, 1);
    /// assert_eq!(t.height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        tree::height(&self.root)
    }

    /// Returns the number of elements in the treap.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_height::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// assert_eq!(t.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the treap has no elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_height::Treap;
    ///
    /// let mut t = Treap::new();
    /// assert!(t.is_empty());
    /// t.insert(1, 1);
    /// assert!(!t.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the root of the underlying tree.
    pub fn root(&self) -> &tree::Tree<K, V> {
        &self.root
    }

    /// Splits the treap at `key`. Afterwards `self` holds the keys less than `key` and the
    /// returned treap holds the keys greater than or equal to `key`. The returned treap draws its
    /// priorities from a generator seeded by `self`'s generator.
    ///
    /// # Examples
    ///
    /// ```
    /// use treap_height::Treap;
    ///
    /// let mut t = Treap::new();
    /// t.insert(1, 1);
    /// t.insert(2, 2);
    /// t.insert(3, 3);
    ///
    /// let u = t.split_off(&2);
    /// assert_eq!(t.len(), 1);
    /// assert!(t.contains(&1));
    /// assert_eq!(u.len(), 2);
    /// assert!(u.contains(&2));
    /// assert!(u.contains(&3));
    /// ```
    pub fn split_off(&mut self, key: &K) -> Self
    where
        R: Rand,
    {
        let (left, right) = tree::split(self.root.take(), key);
        let right_len = tree::len(&right);
        self.root = left;
        self.len -= right_len;
        Treap {
            root: right,
            rng: self.rng.gen(),
            len: right_len,
        }
    }
}

impl<K: Ord, V> Default for Treap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
