// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A priority queue backed by a `HashedHeap`.
//!
//! # Examples
//!
//! ```rust
//! use compare::{Compare, natural};
//! use hashheap::PriorityQueue;
//!
//! let mut queue = PriorityQueue::with_comparator(natural().rev());
//! queue.enqueue(2);
//! queue.enqueue(7);
//! queue.enqueue(5);
//! assert_eq!(queue.dequeue(), Some(7));
//! assert_eq!(queue.dequeue(), Some(5));
//! assert_eq!(queue.peek(), Some(&2));
//! ```

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};
use std::iter;

use compare::{Compare, Natural, natural};

use crate::hashed_heap::{self, HashedHeap, ReplaceError};

/// A queue that hands out its items by priority rather than by arrival.
///
/// Items that come first under the comparator are dequeued first, so the natural order
/// dequeues the smallest item and a reversed order the greatest. All the work is done by
/// the wrapped [`HashedHeap`].
#[derive(Clone)]
pub struct PriorityQueue<T, C: Compare<T> = Natural<T>, S = RandomState> {
    heap: HashedHeap<T, C, S>,
}

impl<T: Hash + Eq + Clone + Ord> PriorityQueue<T> {
    /// Returns an empty queue that dequeues its smallest item first.
    pub fn new() -> PriorityQueue<T> { PriorityQueue::with_comparator(natural()) }

    /// Returns an empty queue with the given capacity that dequeues its smallest item
    /// first.
    pub fn with_capacity(capacity: usize) -> PriorityQueue<T> {
        PriorityQueue::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Hash + Eq + Clone + Ord> From<Vec<T>> for PriorityQueue<T> {
    fn from(vec: Vec<T>) -> PriorityQueue<T> {
        PriorityQueue { heap: HashedHeap::from(vec) }
    }
}

impl<T: Hash + Eq + Clone, C: Compare<T>> PriorityQueue<T, C> {
    /// Returns an empty queue ordered according to the given comparator.
    pub fn with_comparator(cmp: C) -> PriorityQueue<T, C> {
        PriorityQueue { heap: HashedHeap::with_comparator(cmp) }
    }

    /// Returns an empty queue with the given capacity and comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> PriorityQueue<T, C> {
        PriorityQueue { heap: HashedHeap::with_capacity_and_comparator(capacity, cmp) }
    }
}

impl<T: Hash + Eq + Clone, C: Compare<T>, S: BuildHasher> PriorityQueue<T, C, S> {
    /// Adds an item to the queue.
    pub fn enqueue(&mut self, item: T) {
        self.heap.push(item);
    }

    /// Removes the item with the highest priority and returns it, or `None` if the queue
    /// is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop()
    }

    /// Returns the item that would be dequeued next.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Returns `true` if the item is waiting in the queue.
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool
        where T: Borrow<Q>, Q: Hash + Eq
    {
        self.heap.contains(item)
    }

    /// Takes the given item out of the queue before its turn.
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> Option<T>
        where T: Borrow<Q>, Q: Hash + Eq
    {
        self.heap.remove(item)
    }

    /// Swaps a queued item for one with a higher priority and returns the old item.
    ///
    /// The new item must come before the one it replaces, otherwise the queue is left as
    /// it was and the new item is returned in the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashheap::PriorityQueue;
    ///
    /// let mut queue = PriorityQueue::from(vec![(3, 'a'), (1, 'b'), (4, 'c')]);
    /// assert_eq!(queue.promote(&(4, 'c'), (0, 'c')), Ok((4, 'c')));
    /// assert_eq!(queue.dequeue(), Some((0, 'c')));
    /// ```
    pub fn promote<Q: ?Sized>(&mut self, current: &Q, item: T) -> Result<T, ReplaceError<T>>
        where T: Borrow<Q>, Q: Hash + Eq
    {
        match self.heap.index_of(current) {
            Some(index) => self.heap.replace(index, item),
            None => Err(ReplaceError::Untracked { value: item }),
        }
    }

    /// An iterator visiting all queued items in arbitrary order.
    pub fn iter(&self) -> hashed_heap::Iter<T> {
        self.heap.iter()
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drops all queued items.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Consumes the queue and returns the heap behind it.
    pub fn into_heap(self) -> HashedHeap<T, C, S> { self.heap }
}

impl<T: Debug, C: Compare<T>, S> Debug for PriorityQueue<T, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(&self.heap, f)
    }
}

impl<T: Hash + Eq + Clone + Ord> iter::FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> PriorityQueue<T> {
        PriorityQueue { heap: iter.into_iter().collect() }
    }
}

impl<T: Hash + Eq + Clone, C: Compare<T>, S: BuildHasher> Extend<T> for PriorityQueue<T, C, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.heap.extend(iter);
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering;

    use compare::{Compare, natural};
    use rand::{thread_rng, Rng};

    use crate::hashed_heap::ReplaceError;
    use super::PriorityQueue;

    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    struct Message {
        text: &'static str,
        priority: u32,
    }

    fn message(text: &'static str, priority: u32) -> Message {
        Message { text: text, priority: priority }
    }

    fn by_priority(a: &Message, b: &Message) -> Ordering {
        a.priority.cmp(&b.priority)
    }

    #[test]
    fn test_empty() {
        let mut queue: PriorityQueue<Message, _> = PriorityQueue::with_comparator(by_priority);
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_one_element() {
        let mut queue = PriorityQueue::with_comparator(by_priority);
        queue.enqueue(message("hello", 100));
        assert!(!queue.is_empty());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek().map(|m| m.priority), Some(100));

        assert_eq!(queue.dequeue().map(|m| m.priority), Some(100));
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn test_two_elements_in_order() {
        let mut queue = PriorityQueue::with_comparator(by_priority);
        queue.enqueue(message("hello", 100));
        queue.enqueue(message("world", 200));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek().map(|m| m.priority), Some(100));

        assert_eq!(queue.dequeue().map(|m| m.priority), Some(100));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek().map(|m| m.priority), Some(200));

        assert_eq!(queue.dequeue().map(|m| m.priority), Some(200));
        assert!(queue.is_empty());
        assert_eq!(queue.peek(), None);
    }

    #[test]
    fn test_two_elements_out_of_order() {
        let mut queue = PriorityQueue::with_comparator(by_priority);
        queue.enqueue(message("world", 200));
        queue.enqueue(message("hello", 100));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek().map(|m| m.text), Some("hello"));

        assert_eq!(queue.dequeue().map(|m| m.text), Some("hello"));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek().map(|m| m.text), Some("world"));

        assert_eq!(queue.dequeue().map(|m| m.text), Some("world"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_remove_and_promote() {
        let mut queue = PriorityQueue::with_comparator(by_priority);
        queue.extend(vec![message("a", 30), message("b", 10), message("c", 20)]);

        assert!(queue.contains(&message("c", 20)));
        assert_eq!(queue.remove(&message("c", 20)), Some(message("c", 20)));
        assert!(!queue.contains(&message("c", 20)));

        assert_eq!(queue.promote(&message("a", 30), message("a", 5)), Ok(message("a", 30)));
        assert_eq!(queue.peek(), Some(&message("a", 5)));

        let err = queue.promote(&message("z", 1), message("z", 0)).unwrap_err();
        assert_eq!(err, ReplaceError::Untracked { value: message("z", 0) });

        // lowering the priority is refused
        assert!(queue.promote(&message("b", 10), message("b", 50)).is_err());
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.dequeue(), Some(message("a", 5)));
        assert_eq!(queue.dequeue(), Some(message("b", 10)));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_max_queue() {
        let mut queue = PriorityQueue::with_comparator(natural().rev());
        queue.extend(vec![1, 3, 2, 7, 5, 9]);
        let mut out = vec![];
        while let Some(x) = queue.dequeue() { out.push(x); }
        assert_eq!(out, vec![9, 7, 5, 3, 2, 1]);
    }

    #[test]
    fn test_collect() {
        let mut queue: PriorityQueue<u8> = vec![4, 2, 8].into_iter().collect();
        assert_eq!(queue.iter().count(), 3);
        assert_eq!(queue.dequeue(), Some(2));
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(format!("{:?}", PriorityQueue::from(vec![1])), "[1]");
    }

    #[test]
    fn fuzz_dequeue_in_order() {
        let mut rng = thread_rng();
        for _ in 0..100 {
            let mut queue = PriorityQueue::with_capacity(100);
            for _ in 0..100 {
                queue.enqueue(rng.gen::<u32>());
            }
            let mut last: Option<u32> = None;
            let mut count = 0;
            while let Some(x) = queue.dequeue() {
                if let Some(prev) = last { assert!(prev <= x); }
                last = Some(x);
                count += 1;
            }
            assert_eq!(count, 100);
            assert!(queue.into_heap().is_empty());
        }
    }
}
