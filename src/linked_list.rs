//! A doubly linked list with index based access. Nodes are heap allocated and linked with raw
//! pointers: each node is owned by the chain running from `head` to `tail` while `prev`
//! pointers only exist for navigation.
//!
//! # Examples
//!
//! ```
//! use textbook::linked_list::DoublyLinkedList;
//! use textbook::Error;
//!
//! let mut list = DoublyLinkedList::new();
//! list.append(10);
//! list.append(11);
//! list.append(12);
//!
//! assert_eq!(list.get(1), Ok(&11));
//! assert_eq!(list.len(), 3);
//!
//! assert_eq!(list.remove_at(1), Ok(11));
//! assert_eq!(list.get(1), Ok(&12));
//! assert_eq!(list.len(), 2);
//!
//! assert_eq!(list.remove(&1337), Err(Error::NotFound));
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use tracing::{debug, trace};

use crate::error::{Error, Result};

type Link<T> = Option<NonNull<Node<T>>>;

/// A doubly linked list. Values can be added at either end in constant time and inserted,
/// read, or removed at any index in time proportional to the distance from the nearer end.
pub struct DoublyLinkedList<T> {
    length: usize,
    head: Link<T>,
    tail: Link<T>,
    /// Tells the drop checker that we own boxed nodes (and so `T`s).
    _marker: PhantomData<Box<Node<T>>>,
}

struct Node<T> {
    value: T,
    prev: Link<T>,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a node and hands ownership of it to the caller as a raw pointer. It must be
    /// released with `Box::from_raw`.
    fn new_leaked(value: T, prev: Link<T>, next: Link<T>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { value, prev, next })))
    }
}

// SAFETY: The list owns its nodes exclusively, just like a `Vec<T>` owns its elements, so it is
// as thread safe as `T` is.
unsafe impl<T: Send> Send for DoublyLinkedList<T> {}
unsafe impl<T: Sync> Sync for DoublyLinkedList<T> {}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoublyLinkedList<T> {
    fn drop(&mut self) {
        while let Some(head) = self.head {
            // SAFETY: Every node reachable from `head` was allocated by `Node::new_leaked` and is
            // owned by this list alone. We step `head` past the node before it's freed so it is
            // never visited twice.
            let node = unsafe { Box::from_raw(head.as_ptr()) };
            self.head = node.next;
        }
        self.tail = None;
        self.length = 0;
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            length: 0,
            head: None,
            tail: None,
            _marker: PhantomData,
        }
    }

    /// The number of values in the list.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Whether the list holds no values.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The first value, if any.
    pub fn front(&self) -> Option<&T> {
        // SAFETY: `head` is either `None` or a live node owned by this list. The returned
        // reference borrows `self` so the node can't be freed while it's in use.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value })
    }

    /// The last value, if any.
    pub fn back(&self) -> Option<&T> {
        // SAFETY: See `front`.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value })
    }

    /// Inserts `item` at the head of the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook::linked_list::DoublyLinkedList;
    ///
    /// let mut list = DoublyLinkedList::new();
    /// list.prepend(1);
    /// list.prepend(2);
    ///
    /// assert_eq!(list.get(0), Ok(&2));
    /// assert_eq!(list.get(1), Ok(&1));
    /// ```
    pub fn prepend(&mut self, item: T) {
        let node = Node::new_leaked(item, None, self.head);
        match self.head {
            // SAFETY: `head` is a live node owned by this list and nothing else borrows it while
            // we hold `&mut self`.
            Some(head) => unsafe { (*head.as_ptr()).prev = Some(node) },
            None => self.tail = Some(node),
        }

        self.head = Some(node);
        self.length += 1;
    }

    /// Inserts `item` at the tail of the list.
    pub fn append(&mut self, item: T) {
        let node = Node::new_leaked(item, self.tail, None);
        match self.tail {
            // SAFETY: See `prepend`.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }

        self.tail = Some(node);
        self.length += 1;
    }

    /// Inserts `item` so that it ends up at `index`, shifting everything after it one place
    /// towards the tail. `index` may be equal to the length, which appends.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] when `index` is greater than the length.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook::linked_list::DoublyLinkedList;
    /// use textbook::Error;
    ///
    /// let mut list: DoublyLinkedList<_> = [1, 3].into_iter().collect();
    /// list.insert_at(2, 1).unwrap();
    /// list.insert_at(4, 3).unwrap();
    ///
    /// assert!(list.iter().eq(&[1, 2, 3, 4]));
    /// assert_eq!(
    ///     list.insert_at(6, 5),
    ///     Err(Error::IndexOutOfRange { index: 5, len: 4 })
    /// );
    /// ```
    pub fn insert_at(&mut self, item: T, index: usize) -> Result<()> {
        if index > self.length {
            return Err(self.out_of_range(index));
        } else if index == self.length {
            self.append(item);
            return Ok(());
        } else if index == 0 {
            self.prepend(item);
            return Ok(());
        }

        let curr = self.node_at(index)?;
        // SAFETY: `curr` is a live node owned by this list. Because `0 < index < length` it has
        // a previous node which is live as well. We hold `&mut self` so nothing else can be
        // reading either of them.
        unsafe {
            let prev = (*curr.as_ptr()).prev;
            let node = Node::new_leaked(item, prev, Some(curr));
            (*curr.as_ptr()).prev = Some(node);
            if let Some(prev) = prev {
                (*prev.as_ptr()).next = Some(node);
            }
        }

        trace!(index, len = self.length, "spliced node into list");
        self.length += 1;
        Ok(())
    }

    /// The value at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the list is empty and [`Error::IndexOutOfRange`] when
    /// `index` is not less than the length.
    pub fn get(&self, index: usize) -> Result<&T> {
        let node = self.node_at(index)?;
        // SAFETY: See `front`.
        Ok(unsafe { &(*node.as_ptr()).value })
    }

    /// Mutable access to the value at `index`. Fails like [`get`][Self::get].
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let node = self.node_at(index)?;
        // SAFETY: As for `get`, and `&mut self` guarantees the reference is unique.
        Ok(unsafe { &mut (*node.as_ptr()).value })
    }

    /// Removes and returns the value at `index`. Fails like [`get`][Self::get], in which case
    /// the list is left untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        let node = self.node_at(index)?;
        // SAFETY: `node_at` only returns live nodes owned by this list.
        Ok(unsafe { self.unlink(node) })
    }

    /// Removes and returns the first value, scanning from the head, that equals `item`.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyContainer`] when the list is empty and [`Error::NotFound`] when no value
    /// matches.
    pub fn remove(&mut self, item: &T) -> Result<T>
    where
        T: PartialEq,
    {
        if self.length == 0 {
            return Err(self.empty());
        }

        let mut curr = self.head;
        while let Some(node) = curr {
            // SAFETY: Every node reachable from `head` is live and owned by this list. `unlink`
            // is only called on the node we're looking at and we return right after.
            unsafe {
                if (*node.as_ptr()).value == *item {
                    return Ok(self.unlink(node));
                }
                curr = (*node.as_ptr()).next;
            }
        }

        debug!(len = self.length, "no matching value to remove");
        Err(Error::NotFound)
    }

    /// Walks the list from head to tail yielding each value with its index. The walk is driven
    /// by the caller: it can be stopped at any point with [`Entries::cancel`] or by dropping it.
    ///
    /// # Examples
    ///
    /// ```
    /// use textbook::linked_list::DoublyLinkedList;
    ///
    /// let list: DoublyLinkedList<_> = ["a", "b", "c"].into_iter().collect();
    /// let mut entries = list.iter_entries();
    ///
    /// assert_eq!(entries.next(), Some((0, &"a")));
    /// assert_eq!(entries.next(), Some((1, &"b")));
    ///
    /// entries.cancel();
    /// assert_eq!(entries.next(), None);
    /// ```
    pub fn iter_entries(&self) -> Entries<'_, T> {
        Entries {
            next: self.head,
            index: 0,
            remaining: self.length,
            _marker: PhantomData,
        }
    }

    /// The values from head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter_entries().map(|(_, value)| value)
    }

    /// Finds the node at `index`, starting from whichever end is closer.
    fn node_at(&self, index: usize) -> Result<NonNull<Node<T>>> {
        if self.length == 0 {
            return Err(self.empty());
        } else if index >= self.length {
            return Err(self.out_of_range(index));
        }

        let found = if index < self.length / 2 {
            // SAFETY: Every node reachable from `head` is live and owned by this list.
            walk(self.head, index, |node| unsafe { (*node.as_ptr()).next })
        } else {
            // SAFETY: Every node reachable from `tail` is live and owned by this list.
            walk(self.tail, self.length - 1 - index, |node| unsafe {
                (*node.as_ptr()).prev
            })
        };

        found.ok_or(Error::IndexOutOfRange {
            index,
            len: self.length,
        })
    }

    /// Detaches `node` from its neighbours (or from `head`/`tail`), frees it, and returns its
    /// value.
    ///
    /// # Safety
    ///
    /// `node` must be a live node owned by this list.
    unsafe fn unlink(&mut self, node: NonNull<Node<T>>) -> T {
        let Node { value, prev, next } = *Box::from_raw(node.as_ptr());

        match prev {
            Some(prev) => (*prev.as_ptr()).next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => (*next.as_ptr()).prev = prev,
            None => self.tail = prev,
        }

        self.length -= 1;
        trace!(len = self.length, "unlinked node from list");
        value
    }

    fn empty(&self) -> Error {
        debug!("rejected operation on empty list");
        Error::EmptyContainer
    }

    fn out_of_range(&self, index: usize) -> Error {
        debug!(index, len = self.length, "rejected out of range index");
        Error::IndexOutOfRange {
            index,
            len: self.length,
        }
    }
}

/// Follows `step` from `start` `steps` times.
fn walk<T>(start: Link<T>, steps: usize, step: impl Fn(NonNull<Node<T>>) -> Link<T>) -> Link<T> {
    (0..steps).try_fold(start?, |node, _| step(node))
}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for DoublyLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.append(item);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// The `(index, value)` pairs of a [`DoublyLinkedList`] from head to tail. Created by
/// [`DoublyLinkedList::iter_entries`].
///
/// Each call to `iter_entries` starts a fresh walk. Nothing runs between calls to `next`, so a
/// walk that is cancelled or dropped early leaves nothing behind.
pub struct Entries<'a, T> {
    next: Link<T>,
    index: usize,
    remaining: usize,
    _marker: PhantomData<&'a T>,
}

impl<T> Entries<'_, T> {
    /// Stops the walk. Every later call to `next` returns `None`.
    pub fn cancel(&mut self) {
        if self.remaining > 0 {
            trace!(
                index = self.index,
                remaining = self.remaining,
                "entries walk cancelled"
            );
        }
        self.next = None;
        self.remaining = 0;
    }
}

impl<T> fmt::Debug for Entries<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries")
            .field("index", &self.index)
            .field("remaining", &self.remaining)
            .finish()
    }
}

impl<'a, T> Iterator for Entries<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: The iterator borrows the list for `'a` so the list can't be changed or dropped
        // while we hold pointers into it.
        let node = unsafe { &*node.as_ptr() };
        let entry = (self.index, &node.value);

        self.next = node.next;
        self.index += 1;
        self.remaining -= 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {}

impl<T> FusedIterator for Entries<'_, T> {}

#[cfg(test)]
impl<T> DoublyLinkedList<T> {
    /// Panics unless every link agrees with its neighbour and `length` matches the chain.
    fn assert_invariants(&self) {
        let mut count = 0;
        let mut prev: Link<T> = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            let node_ref = unsafe { node.as_ref() };
            assert_eq!(node_ref.prev, prev);
            prev = Some(node);
            curr = node_ref.next;
            count += 1;
        }

        assert_eq!(self.tail, prev);
        assert_eq!(self.length, count);
        assert_eq!(self.head.is_none(), self.length == 0);
    }
}
