//! What [`Tree::insert`](crate::Tree::insert) does with a key that is already in the tree.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Duplicates, Tree};
//!
//! let mut tree = Tree::with_duplicates(Duplicates::Allow);
//! tree.insert(1, "first");
//! tree.insert(1, "second");
//!
//! // Both nodes are kept. Point lookups see the first one on the search path.
//! assert_eq!(tree.len(), 2);
//! assert_eq!(tree.lookup(&1), Some(&"first"));
//!
//! // Removing it uncovers the second.
//! assert_eq!(tree.remove(&1), Ok("first"));
//! assert_eq!(tree.lookup(&1), Some(&"second"));
//! ```

/// The duplicate key policy a [`Tree`](crate::Tree) is built with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Duplicates {
    /// Inserting an existing key overwrites the value of the node holding it. The tree never
    /// holds two nodes with equal keys.
    #[default]
    Overwrite,
    /// Inserting an existing key adds another node. Equal keys descend to the right so the new
    /// node ends up in the right subtree of the old one and stays hidden from `lookup`,
    /// `update` and `remove` until the old one is removed.
    Allow,
}
