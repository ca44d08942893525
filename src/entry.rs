/// A key-value pair stored in a treap node. Entries are compared by key only.
///
/// The key is read-only outside of the crate, since changing it in place would break the ordering
/// of the tree holding the entry.
///
/// ```compile_fail
/// use treap_height::treap::{tree, Node};
///
/// let (mut root, _) = tree::insert(None, Node::new(3, 30, 1));
/// let (_, mut entry) = tree::insert(root.take(), Node::new(3, 31, 2));
/// entry.as_mut().unwrap().key = 0;
/// ```
#[derive(Debug)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<K, V> PartialEq for Entry<K, V>
where
    K: PartialEq,
{
    fn eq(&self, other: &Entry<K, V>) -> bool {
        self.key == other.key
    }
}

impl<K, V> Eq for Entry<K, V> where K: Eq {}
