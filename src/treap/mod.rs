//! Probabilistic binary search tree where each node also maintains the heap invariant.

mod map;
mod node;
pub mod tree;

pub use self::map::Treap;
pub use self::node::Node;
