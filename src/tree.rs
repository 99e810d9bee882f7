//! A plain Binary Search Tree. Nothing is rebalanced: keys inserted in sorted order build a
//! chain and every operation on it costs `O(n)`. Each node owns its two children through a
//! `Box` and has no pointer back to its parent. Operations that need a parent find the link
//! holding a node by walking down from the root again.
//!
//! # Examples
//!
//! ```
//! use ordtree::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.is_empty());
//! assert_eq!(tree.lookup(&1), None);
//!
//! tree.insert(1, 2);
//! assert_eq!(tree.lookup(&1), Some(&2));
//!
//! // Updating needs the key to be there and gives back the old value.
//! assert_eq!(tree.update(&1, 3), Ok(2));
//! assert_eq!(tree.update(&42, 3), Err(Error::KeyNotFound));
//!
//! // So does removing.
//! assert_eq!(tree.remove(&1), Ok(3));
//! assert_eq!(tree.remove(&1), Err(Error::KeyNotFound));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::{Duplicates, Error};

/// The slot owning a node: either the tree's root or one of a node's children.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A Binary Search Tree mapping keys to values. Keys in a node's left subtree are strictly less
/// than its key and keys in its right subtree are greater or equal.
///
/// The tree does no locking of its own. To share one between threads, wrap it in a lock such
/// as [`std::sync::RwLock`].
pub struct Tree<K, V> {
    pub(crate) root: Link<K, V>,
    len: usize,
    duplicates: Duplicates,
}

pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Default for Tree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Drop for Tree<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V> Clone for Tree<K, V>
where
    K: Clone,
    V: Clone,
{
    fn clone(&self) -> Self {
        // Copy with an explicit stack of (source node, destination slot) so a degenerate chain
        // can't overflow the call stack.
        let mut root: Link<K, V> = None;
        let mut stack: Vec<(&Node<K, V>, &mut Link<K, V>)> = Vec::new();
        if let Some(node) = self.root.as_deref() {
            stack.push((node, &mut root));
        }
        while let Some((source, slot)) = stack.pop() {
            let copy = slot.insert(Node::new_boxed(source.key.clone(), source.value.clone()));
            if let Some(left) = source.left.as_deref() {
                stack.push((left, &mut copy.left));
            }
            if let Some(right) = source.right.as_deref() {
                stack.push((right, &mut copy.right));
            }
        }

        Self {
            root,
            len: self.len,
            duplicates: self.duplicates,
        }
    }
}

impl<K, V> fmt::Debug for Tree<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.in_order()).finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K, V> Extend<(K, V)> for Tree<K, V>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V> Tree<K, V> {
    /// Generates a new, empty `Tree` which overwrites values on duplicate inserts.
    pub fn new() -> Self {
        Self::with_duplicates(Duplicates::default())
    }

    /// Generates a new, empty `Tree` with the given duplicate key policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Duplicates, Tree};
    ///
    /// let mut tree = Tree::with_duplicates(Duplicates::Allow);
    /// tree.insert(1, 'a');
    /// tree.insert(1, 'b');
    ///
    /// assert_eq!(tree.duplicates(), Duplicates::Allow);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn with_duplicates(duplicates: Duplicates) -> Self {
        Self {
            root: None,
            len: 0,
            duplicates,
        }
    }

    /// The duplicate key policy this tree was built with.
    pub fn duplicates(&self) -> Duplicates {
        self.duplicates
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// The number of levels in the tree. An empty tree has a height of 0 and a lone root has a
    /// height of 1.
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// The key and value stored at the root, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_, _> = [(5, 'e'), (3, 'c'), (8, 'h')].into_iter().collect();
    ///
    /// assert_eq!(tree.root(), Some((&5, &'e')));
    /// ```
    pub fn root(&self) -> Option<(&K, &V)> {
        self.root.as_deref().map(Node::entry)
    }

    /// The entry with the smallest key.
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(node.entry())
    }

    /// The entry with the largest key. With [`Duplicates::Allow`] this is the most recently
    /// inserted of the equal largest keys.
    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(node.entry())
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        // Tear down with an explicit stack so a degenerate chain can't overflow the call stack.
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Inserts the key and value as a new leaf. The walk from the root goes left when the key is
    /// strictly less than a node's key and right otherwise. What happens when the walk meets an
    /// equal key depends on the tree's [`Duplicates`] policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1, 2);
    /// assert_eq!(tree.lookup(&1), Some(&2));
    ///
    /// tree.insert(1, 3);
    /// assert_eq!(tree.lookup(&1), Some(&3));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V)
    where
        K: Ord,
    {
        let overwrite = self.duplicates == Duplicates::Overwrite;
        let mut depth = 0usize;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match key.cmp(&node.key) {
                Ordering::Less => slot = &mut node.left,
                Ordering::Equal if overwrite => {
                    trace!(depth, "overwriting value of existing key");
                    node.value = value;
                    return;
                }
                _ => slot = &mut node.right,
            }
            depth += 1;
        }

        trace!(depth, "attaching new leaf");
        *slot = Some(Node::new_boxed(key, value));
        self.len += 1;
    }

    /// Inserts the key and value only if the key isn't in the tree yet.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateKey`] if a node already holds the key. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.try_insert(1, 2), Ok(()));
    /// assert_eq!(tree.try_insert(1, 3), Err(Error::DuplicateKey));
    /// assert_eq!(tree.lookup(&1), Some(&2));
    /// ```
    pub fn try_insert(&mut self, key: K, value: V) -> Result<(), Error>
    where
        K: Ord,
    {
        if self.contains(&key) {
            debug!("rejecting insert of duplicate key");
            return Err(Error::DuplicateKey);
        }
        self.insert(key, value);
        Ok(())
    }

    /// Whether some node holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.find(key).is_some()
    }

    /// Potentially finds the value associated with the given key in this tree. If no node has
    /// the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1, 2);
    ///
    /// assert_eq!(tree.lookup(&1), Some(&2));
    /// assert_eq!(tree.lookup(&42), None);
    /// ```
    pub fn lookup(&self, key: &K) -> Option<&V>
    where
        K: Ord,
    {
        self.find(key).map(|node| &node.value)
    }

    /// Like [`lookup`](Self::lookup) but the value can be modified in place.
    pub fn lookup_mut(&mut self, key: &K) -> Option<&mut V>
    where
        K: Ord,
    {
        self.find_mut(key).map(|node| &mut node.value)
    }

    /// Replaces the value stored at the given key and returns the previous value.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no node holds the key. The tree is left unchanged.
    pub fn update(&mut self, key: &K, value: V) -> Result<V, Error>
    where
        K: Ord,
    {
        match self.find_mut(key) {
            Some(node) => Ok(mem::replace(&mut node.value, value)),
            None => {
                debug!("rejecting update of missing key");
                Err(Error::KeyNotFound)
            }
        }
    }

    /// Removes the node holding the given key and returns its value.
    ///
    /// A node with two children isn't unlinked itself. Its in-order successor (the leftmost
    /// node of its right subtree) is unlinked instead and its key and value move into the node.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no node holds the key. The tree is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree: Tree<_, _> = [5, 3, 8, 1, 4, 7, 9].into_iter().map(|k| (k, ())).collect();
    ///
    /// // 5 has two children so its successor, 7, takes its place at the root.
    /// tree.remove(&5).unwrap();
    /// assert_eq!(tree.root(), Some((&7, &())));
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<V, Error>
    where
        K: Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Like [`remove`](Self::remove) but hands back the removed key as well.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no node holds the key.
    pub fn remove_entry(&mut self, key: &K) -> Result<(K, V), Error>
    where
        K: Ord,
    {
        let slot = Node::slot_mut(&mut self.root, key);
        let Some(entry) = Node::unlink(slot) else {
            debug!("rejecting remove of missing key");
            return Err(Error::KeyNotFound);
        };
        self.len -= 1;
        Ok(entry)
    }

    fn find(&self, key: &K) -> Option<&Node<K, V>>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    fn find_mut(&mut self, key: &K) -> Option<&mut Node<K, V>>
    where
        K: Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right.as_deref_mut(),
            };
        }
        None
    }
}

impl<K, V> Node<K, V> {
    fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Self {
            key,
            value,
            left: None,
            right: None,
        })
    }

    pub(crate) fn entry(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    fn height(&self) -> usize {
        let left = self.left.as_deref().map_or(0, Self::height);
        let right = self.right.as_deref().map_or(0, Self::height);
        left.max(right) + 1
    }

    /// Walks down from `slot` and returns the slot holding the first node with `key`. If no node
    /// has the key, the empty slot the walk ended on is returned.
    fn slot_mut<'a>(mut slot: &'a mut Link<K, V>, key: &K) -> &'a mut Link<K, V>
    where
        K: Ord,
    {
        while let Some(ordering) = slot
            .as_ref()
            .map(|node| key.cmp(&node.key))
            .filter(|ordering| ordering.is_ne())
        {
            if let Some(node) = slot {
                slot = match ordering {
                    Ordering::Less => &mut node.left,
                    Ordering::Equal | Ordering::Greater => &mut node.right,
                };
            }
        }
        slot
    }

    /// Returns the slot holding the leftmost node under `slot`.
    fn leftmost_slot(mut slot: &mut Link<K, V>) -> &mut Link<K, V> {
        while slot.as_ref().is_some_and(|node| node.left.is_some()) {
            if let Some(node) = slot {
                slot = &mut node.left;
            }
        }
        slot
    }

    /// Removes the node in `slot` from the tree and returns its key and value, or `None` if the
    /// slot is empty.
    fn unlink(slot: &mut Link<K, V>) -> Option<(K, V)> {
        let node = slot.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            // The successor has no left child so unlinking it never recurses further.
            trace!("promoting in-order successor");
            let (key, value) = Self::unlink(Self::leftmost_slot(&mut node.right))?;
            return Some((
                mem::replace(&mut node.key, key),
                mem::replace(&mut node.value, value),
            ));
        }

        let mut node = slot.take()?;
        let child = node.left.take().or_else(|| node.right.take());
        if child.is_some() {
            trace!("splicing single child into removed node's slot");
        } else {
            trace!("removing leaf");
        }
        *slot = child;
        Some((node.key, node.value))
    }
}
