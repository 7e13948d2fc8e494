//! A plain binary tree. Nothing here rebalances or even enforces ordering: trees can be built
//! node by node into any shape, and only [`Tree::quick_find`] and [`Tree::insert`] assume the
//! binary search tree invariant (everything in a node's left subtree is smaller than it and
//! everything in its right subtree is larger).
//!
//! # Examples
//!
//! ```
//! use textbook::binary_tree::{Node, Tree};
//!
//! //        7
//! //      /   \
//! //    23     3
//! //   /  \   / \
//! //  5    4 18  21
//! let tree = Tree::from(
//!     Node::new(7)
//!         .with_left(Node::new(23).with_left(Node::new(5)).with_right(Node::new(4)))
//!         .with_right(Node::new(3).with_left(Node::new(18)).with_right(Node::new(21))),
//! );
//!
//! assert_eq!(tree.walk_pre_order(), [&7, &23, &5, &4, &3, &18, &21]);
//! assert_eq!(tree.walk_in_order(), [&5, &23, &4, &7, &18, &3, &21]);
//! assert_eq!(tree.walk_post_order(), [&5, &4, &23, &18, &21, &3, &7]);
//!
//! // `clone` is deep so the copy can be changed freely.
//! let mut copy = tree.clone();
//! assert!(tree.compare_shape_and_values(&copy));
//!
//! *copy.root_mut().unwrap().value_mut() = 1337;
//! assert!(!tree.compare_shape_and_values(&copy));
//! assert_eq!(tree.root().map(Node::value), Some(&7));
//! ```

use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A binary tree that owns all of its nodes. An empty tree has no root.
///
/// With the `serde` feature enabled a tree serializes as its root node, or `null` when empty.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Tree<T> {
    root: Option<Box<Node<T>>>,
}

/// A single value and up to two owned children.
///
/// With the `serde` feature enabled a node serializes as
/// `{ "value": .., "children": { "left": .., "right": .. } }` where missing children are left
/// out, as is `children` itself for a leaf.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(deserialize = "T: Deserialize<'de>"))
)]
pub struct Node<T> {
    value: T,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Children::is_empty")
    )]
    children: Children<T>,
}

// `default` on a field would otherwise make the derive require `T: Default`.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(deserialize = "T: Deserialize<'de>"))
)]
struct Children<T> {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    left: Option<Box<Node<T>>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    right: Option<Box<Node<T>>>,
}

// Written by hand so `T` doesn't need to be `Default`.
impl<T> Default for Children<T> {
    fn default() -> Self {
        Self {
            left: None,
            right: None,
        }
    }
}

impl<T> Children<T> {
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    // Detaches nodes one at a time so dropping a tall, unbalanced tree doesn't recurse.
    fn drop(&mut self) {
        let mut stack: Vec<_> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.left.take());
            stack.extend(node.children.right.take());
        }
    }
}

impl<T> From<Node<T>> for Tree<T> {
    fn from(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }
}

impl<T: PartialEq> PartialEq for Tree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare_shape_and_values(other)
    }
}

impl<T: Eq> Eq for Tree<T> {}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        self.compare_shape_and_values(other)
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T> Tree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Mutable access to the root node. Changing values through this can break the ordering
    /// [`quick_find`][Self::quick_find] relies on.
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.iter_pre_order().count()
    }

    /// The number of nodes on the longest path from the root to a leaf. An empty tree has a
    /// height of 0.
    pub fn height(&self) -> usize {
        height(self.root())
    }

    /// Inserts `value` where a binary search would look for it. Returns `false`, leaving the
    /// tree as it was, if the value is already present.
    ///
    /// The tree is never rebalanced so inserting sorted values produces a tree as tall as it is
    /// long.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook::binary_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    ///
    /// assert_eq!(tree.walk_in_order(), [&3, &5]);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        loop {
            match link {
                Some(node) => match value.cmp(&node.value) {
                    Ordering::Less => link = &mut node.children.left,
                    Ordering::Equal => {
                        trace!("value already present, tree unchanged");
                        return false;
                    }
                    Ordering::Greater => link = &mut node.children.right,
                },
                None => {
                    *link = Some(Box::new(Node::new(value)));
                    return true;
                }
            }
        }
    }

    /// Every value in the tree, each node before its left then right subtree.
    pub fn walk_pre_order(&self) -> Vec<&T> {
        let mut path = Vec::new();
        walk_pre_order(self.root(), &mut path);
        path
    }

    /// Every value in the tree, each node between its left and right subtree. For a binary
    /// search tree this is ascending order.
    pub fn walk_in_order(&self) -> Vec<&T> {
        let mut path = Vec::new();
        walk_in_order(self.root(), &mut path);
        path
    }

    /// Every value in the tree, each node after its left then right subtree.
    pub fn walk_post_order(&self) -> Vec<&T> {
        let mut path = Vec::new();
        walk_post_order(self.root(), &mut path);
        path
    }

    /// Lazily yields the same sequence as [`walk_pre_order`][Self::walk_pre_order]. The walk
    /// can be abandoned at any point by dropping the iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook::binary_tree::{Node, Tree};
    ///
    /// let tree = Tree::from(Node::new(2).with_left(Node::new(1)).with_right(Node::new(3)));
    /// let first_two: Vec<_> = tree.iter_pre_order().take(2).collect();
    ///
    /// assert_eq!(first_two, [&2, &1]);
    /// ```
    pub fn iter_pre_order(&self) -> PreOrder<'_, T> {
        PreOrder {
            stack: self.root().into_iter().collect(),
        }
    }

    /// Lazily yields the same sequence as [`walk_in_order`][Self::walk_in_order].
    pub fn iter_in_order(&self) -> InOrder<'_, T> {
        let mut iter = InOrder { stack: Vec::new() };
        iter.push_left_spine(self.root());
        iter
    }

    /// Lazily yields the same sequence as [`walk_post_order`][Self::walk_post_order].
    pub fn iter_post_order(&self) -> PostOrder<'_, T> {
        PostOrder {
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Whether both trees have the same shape and hold equal values in every position. Two
    /// empty trees are equal.
    pub fn compare_shape_and_values(&self, other: &Tree<T>) -> bool
    where
        T: PartialEq,
    {
        compare_shape_and_values(self.root(), other.root())
    }

    /// Searches for `item` assuming the tree is a binary search tree. This takes time
    /// proportional to the tree's height: `O(lg N)` when balanced but `O(N)` in the worst case.
    ///
    /// On a tree that isn't ordered this can miss values that are present.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook::binary_tree::{Node, Tree};
    ///
    /// let tree = Tree::from(
    ///     Node::new(42)
    ///         .with_left(Node::new(9).with_left(Node::new(5)).with_right(Node::new(18)))
    ///         .with_right(Node::new(69).with_left(Node::new(52)).with_right(Node::new(420))),
    /// );
    ///
    /// assert!(tree.quick_find(&18));
    /// assert!(tree.quick_find(&69));
    /// assert!(!tree.quick_find(&1337));
    /// ```
    pub fn quick_find(&self, item: &T) -> bool
    where
        T: Ord,
    {
        let mut curr = self.root();
        while let Some(node) = curr {
            curr = match node.value.cmp(item) {
                Ordering::Equal => return true,
                Ordering::Less => node.right(),
                Ordering::Greater => node.left(),
            };
        }

        false
    }
}

impl<T> Node<T> {
    /// Creates a node without children.
    pub fn new(value: T) -> Self {
        Self {
            value,
            children: Children::default(),
        }
    }

    /// Replaces the left child with `left`, returning the updated node.
    pub fn with_left(mut self, left: Node<T>) -> Self {
        self.children.left = Some(Box::new(left));
        self
    }

    /// Replaces the right child with `right`, returning the updated node.
    pub fn with_right(mut self, right: Node<T>) -> Self {
        self.children.right = Some(Box::new(right));
        self
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the value stored in this node.
    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// The left child.
    pub fn left(&self) -> Option<&Node<T>> {
        self.children.left.as_deref()
    }

    /// The right child.
    pub fn right(&self) -> Option<&Node<T>> {
        self.children.right.as_deref()
    }

    /// Mutable access to the left child.
    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.children.left.as_deref_mut()
    }

    /// Mutable access to the right child.
    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.children.right.as_deref_mut()
    }

    /// Whether the subtrees rooted at `self` and `other` have the same shape and values.
    pub fn compare_shape_and_values(&self, other: &Node<T>) -> bool
    where
        T: PartialEq,
    {
        compare_shape_and_values(Some(self), Some(other))
    }
}

fn height<T>(curr: Option<&Node<T>>) -> usize {
    curr.map_or(0, |node| height(node.left()).max(height(node.right())) + 1)
}

fn walk_pre_order<'a, T>(curr: Option<&'a Node<T>>, path: &mut Vec<&'a T>) {
    let Some(node) = curr else {
        return;
    };

    path.push(&node.value);
    walk_pre_order(node.left(), path);
    walk_pre_order(node.right(), path);
}

fn walk_in_order<'a, T>(curr: Option<&'a Node<T>>, path: &mut Vec<&'a T>) {
    let Some(node) = curr else {
        return;
    };

    walk_in_order(node.left(), path);
    path.push(&node.value);
    walk_in_order(node.right(), path);
}

fn walk_post_order<'a, T>(curr: Option<&'a Node<T>>, path: &mut Vec<&'a T>) {
    let Some(node) = curr else {
        return;
    };

    walk_post_order(node.left(), path);
    walk_post_order(node.right(), path);
    path.push(&node.value);
}

fn compare_shape_and_values<T: PartialEq>(curr: Option<&Node<T>>, other: Option<&Node<T>>) -> bool {
    match (curr, other) {
        (None, None) => true,
        (Some(curr), Some(other)) => {
            curr.value == other.value
                && compare_shape_and_values(curr.left(), other.left())
                && compare_shape_and_values(curr.right(), other.right())
        }
        // Only one side ran out of nodes.
        _ => false,
    }
}

/// A lazy pre-order walk over a [`Tree`]. See [`Tree::iter_pre_order`].
#[derive(Debug)]
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so left comes off first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(&node.value)
    }
}

/// A lazy in-order walk over a [`Tree`]. See [`Tree::iter_in_order`].
#[derive(Debug)]
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn push_left_spine(&mut self, mut curr: Option<&'a Node<T>>) {
        while let Some(node) = curr {
            self.stack.push(node);
            curr = node.left();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(&node.value)
    }
}

/// A lazy post-order walk over a [`Tree`]. See [`Tree::iter_post_order`].
#[derive(Debug)]
pub struct PostOrder<'a, T> {
    /// Nodes still to visit, flagged once their children have been pushed.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(&node.value);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}
