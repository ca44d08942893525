//! A randomized binary search tree (treap) and the driver that measures its height.
//!
//! The [`treap::tree`] module exposes the structural operations over bare trees (`split`,
//! `insert`, `contains`, `height`), and [`Treap`] wraps them together with the generator that
//! draws node priorities.

mod entry;
pub mod driver;
pub mod rng;
pub mod treap;

#[cfg(test)]
mod proptests;

pub use crate::entry::Entry;
pub use crate::treap::Treap;
