//! A first in, first out queue built from singly linked nodes. Nodes are heap allocated and
//! linked with raw pointers so the queue can reach both its front and its back in constant time.
//!
//! # Examples
//!
//! ```
//! use textbook::queue::Queue;
//! use textbook::Error;
//!
//! let mut queue = Queue::new();
//! queue.enqueue(1);
//! queue.enqueue(2);
//!
//! assert_eq!(queue.peek(), Ok(&1));
//! assert_eq!(queue.deque(), Ok(1));
//! assert_eq!(queue.deque(), Ok(2));
//! assert_eq!(queue.deque(), Err(Error::EmptyContainer));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::debug;

use crate::error::{Error, Result};

type Link<T> = Option<NonNull<Node<T>>>;

/// A queue. Every operation takes constant time.
pub struct Queue<T> {
    length: usize,
    head: Link<T>,
    /// `None` exactly when `head` is.
    tail: Link<T>,
    /// Tells the drop checker that we own boxed nodes (and so `T`s).
    _marker: PhantomData<Box<Node<T>>>,
}

struct Node<T> {
    value: T,
    next: Link<T>,
}

// SAFETY: The queue owns its nodes exclusively, so it is as thread safe as `T` is.
unsafe impl<T: Send> Send for Queue<T> {}
unsafe impl<T: Sync> Sync for Queue<T> {}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        while let Some(head) = self.head {
            // SAFETY: See `deque`.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
        }
        self.tail = None;
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Queue<T> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            length: 0,
            head: None,
            tail: None,
            _marker: PhantomData,
        }
    }

    /// The number of values waiting in the queue.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Adds `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        let node = NonNull::from(Box::leak(Box::new(Node {
            value: item,
            next: None,
        })));

        match self.tail {
            // SAFETY: `tail` is a live node owned by this queue and nothing else borrows it while
            // we hold `&mut self`.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.length += 1;
    }

    /// Removes and returns the value at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the queue is empty.
    pub fn deque(&mut self) -> Result<T> {
        let head = self.head.ok_or_else(empty)?;
        // SAFETY: Every node was leaked from a `Box` in `enqueue` and is owned by this queue
        // alone. `head` moves past it before anything else can reach it.
        let node = unsafe { Box::from_raw(head.as_ptr()) };

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }

        self.length -= 1;
        Ok(node.value)
    }

    /// The value at the front of the queue.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the queue is empty.
    pub fn peek(&self) -> Result<&T> {
        // SAFETY: `head` is a live node and the reference borrows `self`, so it can't be freed
        // while in use.
        self.head
            .map(|head| unsafe { &(*head.as_ptr()).value })
            .ok_or_else(empty)
    }

    /// The values from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        // SAFETY: See `peek`.
        std::iter::successors(self.head, |node| unsafe { (*node.as_ptr()).next })
            .map(|node| unsafe { &(*node.as_ptr()).value })
    }
}

fn empty() -> Error {
    debug!("rejected operation on empty queue");
    Error::EmptyContainer
}
