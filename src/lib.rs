//! This crate exposes a plain, non-balancing Binary Search Tree (BST) mapping ordered keys to
//! values, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key, the value
//! associated with it, and up to two child `Node`s. The invariants kept here are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key strictly less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than or equal to its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is the longest path from the root
//! `Node` to a leaf `Node`). This tree makes no attempt to limit its height, so inserting keys
//! in sorted order yields a chain with a height of `N`. BSTs also naturally support sorted
//! iteration by visiting the left subtree, then the subtree root, then the right subtree. See
//! [`traversal`] for that and the other visiting orders.
//!
//! ## Logging
//!
//! Structural changes are reported through [`tracing`] at the `trace` level and refused
//! operations at the `debug` level. Install a subscriber to see them.

#![deny(missing_docs)]

pub mod duplicates;
pub mod error;
pub mod traversal;
pub mod tree;

pub use duplicates::Duplicates;
pub use error::Error;
pub use tree::Tree;
