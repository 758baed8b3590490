// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Heaps that know where their items are.
//!
//! A [`HashedHeap`] is a binary heap augmented with a hash map from each item to its
//! position in the heap array. Finding an item then takes amortized constant time instead
//! of a linear scan, which makes removing or promoting an arbitrary item `O(log n)`.
//! [`PriorityQueue`] puts queue vocabulary on top of it.
//!
//! Both are ordered by a comparator from the [`compare`] crate, so the same type serves
//! as a min-heap or a max-heap:
//!
//! ```rust
//! use compare::{Compare, natural};
//! use hashheap::HashedHeap;
//!
//! let mut min = HashedHeap::from(vec![4, 1, 3, 2, 16, 9, 10, 14, 8, 7]);
//! assert_eq!(min.pop(), Some(1));
//!
//! let mut max = HashedHeap::with_comparator(natural().rev());
//! max.extend(vec![1, 3, 2, 7, 5, 9]);
//! assert_eq!(max.pop(), Some(9));
//! ```
//!
//! Everything here is single-threaded and does no locking of its own.

pub use hashed_heap::{HashedHeap, ReplaceError};
pub use order::Before;
pub use priority_queue::PriorityQueue;

pub mod hashed_heap;
pub mod order;
pub mod priority_queue;
