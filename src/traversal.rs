//! The four classic ways of visiting every node of a [`Tree`]. Each returns the key and value
//! pairs in visiting order.
//!
//! Depth first traversals recurse once per level so they need stack space proportional to the
//! tree's height. Level order uses a queue on the heap instead.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! //         5
//! //       /   \
//! //      3     8
//! //     / \   / \
//! //    1   4 7   9
//! let tree: Tree<_, _> = [5, 3, 8, 1, 4, 7, 9].into_iter().map(|k| (k, ())).collect();
//! let keys = |pairs: Vec<(&i32, &())>| pairs.into_iter().map(|(k, _)| *k).collect::<Vec<_>>();
//!
//! assert_eq!(keys(tree.in_order()), [1, 3, 4, 5, 7, 8, 9]);
//! assert_eq!(keys(tree.pre_order()), [5, 3, 1, 4, 8, 7, 9]);
//! assert_eq!(keys(tree.post_order()), [1, 4, 3, 7, 9, 8, 5]);
//! assert_eq!(keys(tree.level_order()), [5, 3, 8, 1, 4, 7, 9]);
//! ```

use std::collections::VecDeque;

use crate::tree::{Link, Node};
use crate::Tree;

/// Where a node is visited relative to its subtrees.
#[derive(Clone, Copy)]
enum Order {
    Pre,
    In,
    Post,
}

impl<K, V> Tree<K, V> {
    /// Left subtree, node, right subtree. Keys come out in ascending order.
    pub fn in_order(&self) -> Vec<(&K, &V)> {
        self.depth_first(Order::In)
    }

    /// Node, left subtree, right subtree. Inserting the pairs in this order into an empty tree
    /// rebuilds the same shape.
    pub fn pre_order(&self) -> Vec<(&K, &V)> {
        self.depth_first(Order::Pre)
    }

    /// Left subtree, right subtree, node. Every node comes after all of its descendants.
    pub fn post_order(&self) -> Vec<(&K, &V)> {
        self.depth_first(Order::Post)
    }

    /// Breadth first: the root, then its children, then theirs, each level left to right.
    pub fn level_order(&self) -> Vec<(&K, &V)> {
        let mut visited = Vec::with_capacity(self.len());
        let mut queue: VecDeque<&Node<K, V>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visited.push(node.entry());
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        visited
    }

    fn depth_first(&self, order: Order) -> Vec<(&K, &V)> {
        let mut visited = Vec::with_capacity(self.len());
        visit(&self.root, order, &mut visited);
        visited
    }
}

fn visit<'a, K, V>(link: &'a Link<K, V>, order: Order, visited: &mut Vec<(&'a K, &'a V)>) {
    let Some(node) = link.as_deref() else {
        return;
    };
    if let Order::Pre = order {
        visited.push(node.entry());
    }
    visit(&node.left, order, visited);
    if let Order::In = order {
        visited.push(node.entry());
    }
    visit(&node.right, order, visited);
    if let Order::Post = order {
        visited.push(node.entry());
    }
}
