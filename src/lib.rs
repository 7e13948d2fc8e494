//! This crate exposes textbook data structures and algorithms mostly for
//! educational purposes.
//!
//! The two structures with real invariants to keep are:
//!
//! - [`binary_tree`]: a binary tree with deep cloning, pre/in/post-order
//!   walks, structural comparison, and a lookup that assumes the tree is a
//!   Binary Search Tree (BST).
//! - [`linked_list`]: a doubly linked list with index based insertion,
//!   lookup, and removal plus a walk over its entries that the caller can
//!   stop at any point.
//!
//! Alongside them live a [`stack`], a [`queue`], two [`search`]es over
//! sorted slices, and two in place [`sort`]s.
//!
//! ## Binary Search Tree
//!
//! A BST is a binary tree where, for every `Node`:
//!
//! 1. all the `Node`s in its left subtree have a value less than its own
//!    value.
//! 2. all the `Node`s in its right subtree have a value greater than its own
//!    value.
//!
//! Searching such a tree takes `O(height)`. Nothing in this crate rebalances
//! trees, so the height is `O(lg N)` only when values arrive in a helpful
//! order and `O(N)` when they arrive sorted.
//!
//! ## Errors
//!
//! Operations that can fail return [`Result`] with an [`Error`] and leave
//! the container as it was. Tree operations can't fail: a missed lookup is
//! just `false`.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`binary_tree::Tree`] as
//!   nested `{ "value", "children": { "left", "right" } }` objects. Its
//!   tests only build with the feature on: `cargo test --all-features`.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]
#![warn(missing_debug_implementations)]

pub mod binary_tree;
mod error;
pub mod linked_list;
pub mod queue;
pub mod search;
pub mod sort;
pub mod stack;

pub use error::{Error, Result};


/// The commonly used types in one place.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::binary_tree::{Node, Tree};
    #[doc(no_inline)]
    pub use crate::linked_list::DoublyLinkedList;
    #[doc(no_inline)]
    pub use crate::queue::Queue;
    #[doc(no_inline)]
    pub use crate::stack::Stack;
    #[doc(no_inline)]
    pub use crate::{Error, Result};
}
