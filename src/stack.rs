//! A last in, first out stack built from singly linked, owned nodes.
//!
//! # Examples
//!
//! ```
//! use textbook::stack::Stack;
//! use textbook::Error;
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Ok(&2));
//! assert_eq!(stack.pop(), Ok(2));
//! assert_eq!(stack.pop(), Ok(1));
//! assert_eq!(stack.pop(), Err(Error::EmptyContainer));
//! ```

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};

/// A stack. Every operation takes constant time.
pub struct Stack<T> {
    length: usize,
    head: Option<Box<Node<T>>>,
}

struct Node<T> {
    value: T,
    prev: Option<Box<Node<T>>>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    // Unlinks one node at a time so dropping a tall stack doesn't recurse.
    fn drop(&mut self) {
        let mut curr = self.head.take();
        while let Some(mut node) = curr {
            curr = node.prev.take();
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Self {
            length: 0,
            head: None,
        }
    }

    /// The number of values on the stack.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        let prev = self.head.take();
        self.head = Some(Box::new(Node { value: item, prev }));
        self.length += 1;
    }

    /// Removes and returns the value on top of the stack.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the stack is empty.
    pub fn pop(&mut self) -> Result<T> {
        let node = self.head.take().ok_or_else(empty)?;
        self.head = node.prev;
        self.length -= 1;
        Ok(node.value)
    }

    /// The value on top of the stack.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the stack is empty.
    pub fn peek(&self) -> Result<&T> {
        self.head
            .as_deref()
            .map(|node| &node.value)
            .ok_or_else(empty)
    }

    /// The values from the top of the stack down.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        std::iter::successors(self.head.as_deref(), |node| node.prev.as_deref())
            .map(|node| &node.value)
    }
}

fn empty() -> Error {
    debug!("rejected operation on empty stack");
    Error::EmptyContainer
}
