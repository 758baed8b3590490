// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A binary heap with an index hash map to speed up lookups by value.
//!
//! A plain binary heap has to scan its whole array to find where a given item lives. A
//! `HashedHeap` keeps a map from every item to its current position, so the position of
//! an item can be looked up in amortized `O(1)` time and the item can then be removed or
//! promoted in `O(log n)`. This is what heuristic searches such as A* need from their open
//! set.
//!
//! Insertion and removal are `O(log n)`, building from a vector is `O(n)` and peeking at
//! the root is `O(1)`.

use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::fmt::{self, Debug};
use std::hash::{BuildHasher, Hash};
use std::iter;
use std::mem;
use std::slice;
use std::vec;

use compare::{Compare, Natural, natural};
use thiserror::Error;
use tracing::trace;

// The heap is stored in a linear array in the usual way: the root lives at offset 0 and
// the children of the item at offset `i` live at `2i + 1` and `2i + 2`.
//
//            0
//         /     \
//        1       2
//       / \     / \
//      3   4   5   6
//
// Next to the array there is a map from item to offset. Every write into the array goes
// through `track`, which points the entry of the written item at its new slot. As a
// consequence an entry always points at a slot holding an equal item. With duplicate
// items only the copy written last is tracked; when that copy leaves the heap its entry
// is dropped and the other copies become untracked.

fn parent(x: usize) -> usize {
    debug_assert!(x > 0);
    (x - 1) / 2
}

fn left_child(x: usize) -> usize { 2 * x + 1 }

/// A binary heap that also knows where each of its items is stored.
///
/// The comparator decides which items sit closest to the root: an item `a` comes before
/// `b` when `cmp.compares_lt(a, b)` holds. The natural order gives a min-heap; use
/// `natural().rev()` (or any reversed comparator) for a max-heap.
///
/// Items are keys of the internal hash map and therefore must be `Hash + Eq + Clone`.
/// Lookups by value are only reliable when the heap holds no duplicate items: of several
/// equal items only the one indexed most recently is tracked.
///
/// `HashedHeap` performs no locking. Callers that share one across threads must serialize
/// access themselves.
#[derive(Clone)]
pub struct HashedHeap<T, C: Compare<T> = Natural<T>, S = RandomState> {
    data: Vec<T>,
    indices: HashMap<T, usize, S>,
    cmp: C,
}

/// The error returned by [`HashedHeap::replace`] when the heap was left untouched.
///
/// The rejected value is handed back to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ReplaceError<T> {
    /// There is no item at the given index.
    #[error("index {index} is out of bounds for a heap of length {len}")]
    OutOfBounds { index: usize, len: usize, value: T },
    /// The new value does not come before the item it was meant to replace.
    #[error("the replacement for index {index} does not come before the current item")]
    NotBefore { index: usize, value: T },
    /// The item to be replaced is not tracked by the heap.
    #[error("the item to replace is not tracked by the heap")]
    Untracked { value: T },
}

impl<T> ReplaceError<T> {
    /// Returns the value that was rejected.
    pub fn into_value(self) -> T {
        match self {
            ReplaceError::OutOfBounds { value, .. } => value,
            ReplaceError::NotBefore { value, .. } => value,
            ReplaceError::Untracked { value } => value,
        }
    }
}

impl<T, C, S> Default for HashedHeap<T, C, S>
    where T: Hash + Eq + Clone, C: Compare<T> + Default, S: BuildHasher + Default
{
    /// Returns an empty heap ordered according to a default comparator.
    fn default() -> HashedHeap<T, C, S> {
        HashedHeap::with_hasher(C::default(), S::default())
    }
}

/// `HashedHeap` iterator, in arbitrary order.
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

/// `HashedHeap` consuming iterator, in arbitrary order.
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T: Hash + Eq + Clone + Ord> HashedHeap<T> {
    /// Returns an empty min-heap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashheap::HashedHeap;
    ///
    /// let heap = HashedHeap::<u32>::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> HashedHeap<T> { HashedHeap::with_comparator(natural()) }

    /// Returns an empty min-heap with the given capacity, ordered according to the
    /// natural order of its items.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashheap::HashedHeap;
    ///
    /// let heap = HashedHeap::<u32>::with_capacity(5);
    /// assert!(heap.is_empty());
    /// assert!(heap.capacity() >= 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> HashedHeap<T> {
        HashedHeap::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Hash + Eq + Clone + Ord> From<Vec<T>> for HashedHeap<T> {
    /// Returns a min-heap containing all the items of the given vector.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashheap::HashedHeap;
    ///
    /// let heap = HashedHeap::from(vec![5u32, 1, 6, 4]);
    /// assert_eq!(heap.len(), 4);
    /// assert_eq!(heap.peek(), Some(&1));
    /// assert_eq!(heap.index_of(&1), Some(0));
    /// ```
    fn from(vec: Vec<T>) -> HashedHeap<T> {
        HashedHeap::from_vec_and_comparator(vec, natural())
    }
}

impl<T: Hash + Eq + Clone, C: Compare<T>> HashedHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    pub fn with_comparator(cmp: C) -> HashedHeap<T, C> {
        HashedHeap::with_hasher(cmp, RandomState::new())
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> HashedHeap<T, C> {
        HashedHeap::with_capacity_comparator_and_hasher(capacity, cmp, RandomState::new())
    }

    /// Returns a heap containing all the items of the given vector and ordered according
    /// to the given comparator.
    ///
    /// The vector is turned into a heap bottom-up in `O(n)` time.
    pub fn from_vec_and_comparator(vec: Vec<T>, cmp: C) -> HashedHeap<T, C> {
        HashedHeap::from_vec_comparator_and_hasher(vec, cmp, RandomState::new())
    }
}

impl<T: Hash + Eq + Clone, C: Compare<T>, S: BuildHasher> HashedHeap<T, C, S> {
    /// Returns an empty heap ordered according to the given comparator, whose index map
    /// hashes items with `hasher`.
    pub fn with_hasher(cmp: C, hasher: S) -> HashedHeap<T, C, S> {
        HashedHeap { data: vec![], indices: HashMap::with_hasher(hasher), cmp: cmp }
    }

    /// Returns an empty heap with the given capacity, comparator and hasher.
    pub fn with_capacity_comparator_and_hasher(capacity: usize, cmp: C, hasher: S)
        -> HashedHeap<T, C, S>
    {
        HashedHeap {
            data: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity_and_hasher(capacity, hasher),
            cmp: cmp,
        }
    }

    /// Returns a heap containing all the items of the given vector, ordered according to
    /// the given comparator and hashed with `hasher`.
    ///
    /// If the vector holds duplicate items, the last copy of each is the one indexed.
    pub fn from_vec_comparator_and_hasher(vec: Vec<T>, cmp: C, hasher: S)
        -> HashedHeap<T, C, S>
    {
        let mut indices = HashMap::with_capacity_and_hasher(vec.len(), hasher);
        for (index, item) in vec.iter().enumerate() {
            indices.insert(item.clone(), index);
        }
        let mut heap = HashedHeap { data: vec, indices: indices, cmp: cmp };
        let len = heap.data.len();
        for index in (0..len / 2).rev() {
            heap.sift_down(index, len);
        }
        trace!(len, tracked = heap.indices.len(), "built hashed heap");
        heap
    }

    /// An iterator visiting all items in the underlying array, in arbitrary order.
    pub fn iter(&self) -> Iter<T> {
        Iter(self.data.iter())
    }

    /// Returns a reference to the root item, or `None` if the heap is empty.
    ///
    /// The root is the item that comes before all others: the smallest in a min-heap, the
    /// greatest in a max-heap.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Returns the index of the given item in the underlying array, or `None` if it was
    /// never pushed or has since been removed.
    ///
    /// This is the lookup a plain binary heap answers in `O(n)`; here it takes amortized
    /// constant time.
    pub fn index_of<Q: ?Sized>(&self, item: &Q) -> Option<usize>
        where T: Borrow<Q>, Q: Hash + Eq
    {
        self.indices.get(item).cloned()
    }

    /// Returns `true` if the given item is tracked by the heap.
    pub fn contains<Q: ?Sized>(&self, item: &Q) -> bool
        where T: Borrow<Q>, Q: Hash + Eq
    {
        self.indices.contains_key(item)
    }

    /// Returns the number of items the heap can hold without reallocation.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` more items.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
        self.indices.reserve(additional);
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
        self.indices.shrink_to_fit();
    }

    /// Pushes an item onto the heap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashheap::HashedHeap;
    ///
    /// let mut heap = HashedHeap::new();
    /// heap.push(3);
    /// heap.push(1);
    /// assert_eq!(heap.peek(), Some(&1));
    /// assert_eq!(heap.index_of(&3), Some(1));
    /// ```
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Removes the root item and returns it, or `None` if the heap is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashheap::HashedHeap;
    ///
    /// let mut heap = HashedHeap::from(vec![2, 3, 1]);
    /// assert_eq!(heap.pop(), Some(1));
    /// assert_eq!(heap.pop(), Some(2));
    /// assert_eq!(heap.pop(), Some(3));
    /// assert_eq!(heap.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        match self.data.len() {
            0 => None,
            1 => self.pop_last(),
            _ => {
                self.untrack(0);
                let root = self.data.swap_remove(0);
                self.track(0);
                let len = self.data.len();
                self.sift_down(0, len);
                Some(root)
            }
        }
    }

    /// Removes the item at the given index of the underlying array and returns it, or
    /// `None` if the index is out of bounds.
    ///
    /// Combine with [`index_of`](#method.index_of) to remove an item by value, or use
    /// [`remove`](#method.remove).
    pub fn pop_at(&mut self, index: usize) -> Option<T> {
        let len = self.data.len();
        if index >= len { return None; }
        let last = len - 1;
        if index != last {
            // The item moved into `index` may belong above or below its new neighbours.
            self.swap(index, last);
            self.sift_down(index, last);
            self.sift_up(index);
        }
        trace!(index, len, "removing item at arbitrary position");
        self.pop_last()
    }

    /// Removes the given item from the heap and returns it, or `None` if it is not
    /// tracked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hashheap::HashedHeap;
    ///
    /// let mut heap = HashedHeap::from(vec!["b", "c", "a"]);
    /// assert_eq!(heap.remove("a"), Some("a"));
    /// assert_eq!(heap.remove("a"), None);
    /// assert_eq!(heap.peek(), Some(&"b"));
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, item: &Q) -> Option<T>
        where T: Borrow<Q>, Q: Hash + Eq
    {
        let index = self.index_of(item)?;
        self.pop_at(index)
    }

    /// Replaces the item at the given index with `value` and returns the previous item.
    ///
    /// The new value must come before the item it replaces: in a max-heap it must be
    /// greater, in a min-heap smaller. The replaced item only ever moves toward the root,
    /// so any other value is rejected and the heap is left untouched, as it is when the
    /// index is out of bounds. The rejected value is returned inside the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use compare::{Compare, natural};
    /// use hashheap::{HashedHeap, ReplaceError};
    ///
    /// let mut heap = HashedHeap::with_comparator(natural().rev());
    /// heap.extend(vec![10, 7, 3]);
    /// let index = heap.index_of(&3).unwrap();
    ///
    /// assert_eq!(heap.replace(index, 12), Ok(3));
    /// assert_eq!(heap.peek(), Some(&12));
    ///
    /// let index = heap.index_of(&7).unwrap();
    /// assert_eq!(heap.replace(index, 1), Err(ReplaceError::NotBefore { index: index, value: 1 }));
    /// ```
    pub fn replace(&mut self, index: usize, value: T) -> Result<T, ReplaceError<T>> {
        let len = self.data.len();
        if index >= len {
            return Err(ReplaceError::OutOfBounds { index: index, len: len, value: value });
        }
        if !self.cmp.compares_lt(&value, &self.data[index]) {
            trace!(index, "rejected replacement moving away from the root");
            return Err(ReplaceError::NotBefore { index: index, value: value });
        }
        self.untrack(index);
        let old = mem::replace(&mut self.data[index], value);
        self.sift_up(index);
        Ok(old)
    }

    /// Consumes the heap and returns the underlying vector in arbitrary order.
    pub fn into_vec(self) -> Vec<T> { self.data }

    /// Consumes the heap and returns a vector with its items in the order they would be
    /// popped: ascending for a min-heap, descending for a max-heap.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut vec = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            vec.push(item);
        }
        vec
    }

    /// Returns the number of items in the heap.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the heap contains no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drops all items from the heap.
    pub fn clear(&mut self) {
        trace!(len = self.data.len(), "clearing hashed heap");
        self.data.clear();
        self.indices.clear();
    }

    /// Removes the last item of the array. No sifting is needed.
    fn pop_last(&mut self) -> Option<T> {
        let last = self.data.len().checked_sub(1)?;
        self.untrack(last);
        self.data.pop()
    }

    fn comes_before(&self, a: usize, b: usize) -> bool {
        self.cmp.compares_lt(&self.data[a], &self.data[b])
    }

    /// Points the entry of the item at `index` to `index`.
    fn track(&mut self, index: usize) {
        let item = &self.data[index];
        match self.indices.get_mut(item) {
            Some(slot) => *slot = index,
            None => { self.indices.insert(item.clone(), index); }
        }
    }

    /// Drops the entry of the item at `index`, unless it points at another copy.
    fn untrack(&mut self, index: usize) {
        let item = &self.data[index];
        if self.indices.get(item) == Some(&index) {
            self.indices.remove(item);
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.track(a);
        self.track(b);
    }

    /// Moves the item at `index` toward the root while it comes before its parent.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !self.comes_before(index, parent) { break; }
            self.data.swap(index, parent);
            self.track(index);
            index = parent;
        }
        self.track(index);
    }

    /// Moves the item at `index` toward the leaves while one of its children, among the
    /// first `bound` items, comes before it.
    fn sift_down(&mut self, mut index: usize, bound: usize) {
        loop {
            let left = left_child(index);
            let right = left + 1;

            // Only a child that strictly comes first displaces its parent; on a tie
            // between the children the left one wins.
            let mut first = index;
            if left < bound && self.comes_before(left, first) { first = left; }
            if right < bound && self.comes_before(right, first) { first = right; }
            if first == index { return; }

            self.swap(index, first);
            index = first;
        }
    }

    /// Checks that no child comes before its parent and that every index entry points at
    /// an equal item.
    #[cfg(test)]
    fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| !self.comes_before(i, parent(i))) &&
        self.indices.iter().all(|(item, &i)| self.data.get(i) == Some(item))
    }
}

impl<T: Debug, C: Compare<T>, S> Debug for HashedHeap<T, C, S> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T: Hash + Eq + Clone + Ord> iter::FromIterator<T> for HashedHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> HashedHeap<T> {
        HashedHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: Hash + Eq + Clone, C: Compare<T>, S: BuildHasher> Extend<T> for HashedHeap<T, C, S> {
    /// Pushes the items one after another, in iteration order.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(lower);
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline] fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    #[inline] fn next(&mut self) -> Option<T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline] fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T, C: Compare<T>, S> IntoIterator for HashedHeap<T, C, S> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> IntoIter<T> { IntoIter(self.data.into_iter()) }
}

impl<'a, T, C: Compare<T>, S> IntoIterator for &'a HashedHeap<T, C, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Iter<'a, T> { Iter(self.data.iter()) }
}
