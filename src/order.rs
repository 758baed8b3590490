// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Ordering strategies for the heaps in this crate.
//!
//! Every heap is parameterized by a [`Compare`] comparator. An item `a` is said to
//! *come before* `b` when `cmp.compares_lt(a, b)` holds; items that come first end up
//! closer to the root. This means that `compare::Natural` produces a min-heap and its
//! reversal produces a max-heap:
//!
//! ```rust
//! use compare::{Compare, natural};
//! use hashheap::HashedHeap;
//!
//! let mut max = HashedHeap::with_comparator(natural().rev());
//! max.extend(vec![1, 3, 2]);
//! assert_eq!(max.peek(), Some(&3));
//! ```
//!
//! Closures of type `Fn(&T, &T) -> Ordering` are comparators too. When all that is at
//! hand is a boolean "comes before" predicate, wrap it in [`Before`].

use std::cmp::Ordering::{self, Equal, Greater, Less};
use std::fmt;

use compare::Compare;

/// A comparator built from a strict weak ordering predicate.
///
/// `Before(f)` treats `a` as coming before `b` exactly when `f(a, b)` is true. Items for
/// which neither `f(a, b)` nor `f(b, a)` holds compare equal. The predicate is trusted
/// to be a strict weak ordering; a predicate that is not one yields an unspecified heap
/// shape, but never a panic.
///
/// # Examples
///
/// ```rust
/// use hashheap::{Before, HashedHeap};
///
/// let mut heap = HashedHeap::with_comparator(Before(|a: &u32, b: &u32| a > b));
/// heap.extend(vec![4, 9, 1]);
/// assert_eq!(heap.pop(), Some(9));
/// ```
#[derive(Clone, Copy)]
pub struct Before<F>(pub F);

impl<T: ?Sized, F> Compare<T> for Before<F> where F: Fn(&T, &T) -> bool {
    fn compare(&self, l: &T, r: &T) -> Ordering {
        if (self.0)(l, r) { Less }
        else if (self.0)(r, l) { Greater }
        else { Equal }
    }

    fn compares_lt(&self, l: &T, r: &T) -> bool { (self.0)(l, r) }

    fn compares_gt(&self, l: &T, r: &T) -> bool { (self.0)(r, l) }
}

impl<F> fmt::Debug for Before<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Before(..)")
    }
}

#[cfg(test)]
mod test {
    use std::cmp::Ordering::{Equal, Greater, Less};

    use compare::Compare;
    use super::Before;

    #[test]
    fn test_predicate_ordering() {
        let cmp = Before(|a: &i32, b: &i32| a < b);
        assert_eq!(cmp.compare(&1, &2), Less);
        assert_eq!(cmp.compare(&2, &1), Greater);
        assert_eq!(cmp.compare(&2, &2), Equal);
        assert!(cmp.compares_lt(&1, &2));
        assert!(!cmp.compares_lt(&2, &2));
        assert!(cmp.compares_gt(&3, &2));
    }

    #[test]
    fn test_predicate_on_key() {
        // only the first field takes part in the ordering
        let cmp = Before(|a: &(u8, &str), b: &(u8, &str)| a.0 > b.0);
        assert_eq!(cmp.compare(&(2, "x"), &(1, "y")), Less);
        assert_eq!(cmp.compare(&(1, "x"), &(1, "y")), Equal);
    }
}
