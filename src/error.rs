//! Errors returned by the fallible [`Tree`](crate::Tree) operations.
//!
//! Looking up a key that isn't there is not an error: [`Tree::lookup`](crate::Tree::lookup)
//! returns `None` and [`Tree::contains`](crate::Tree::contains) returns `false`. Errors are
//! reserved for operations that need the key to be present (or absent) before they can mutate
//! the tree. A call that returns an error leaves the tree exactly as it was.

use thiserror::Error;

/// The ways a mutation of a [`Tree`](crate::Tree) can be refused.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// [`update`](crate::Tree::update) or [`remove`](crate::Tree::remove) was given a key that
    /// no node holds.
    #[error("key not found in tree")]
    KeyNotFound,
    /// [`try_insert`](crate::Tree::try_insert) was given a key that a node already holds.
    #[error("key already present in tree")]
    DuplicateKey,
}
