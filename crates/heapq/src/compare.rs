//! # Priority relations
//! A [`Compare`] decides which of two elements sits higher in the heap. The
//! relation must be a strict weak ordering, otherwise the heap property cannot
//! be maintained (the queue stays memory safe, but the order of [`pop`]ped
//! elements is unspecified).
//!
//! [`pop`]: crate::PriorityQueue::pop

use std::fmt::{Debug, Formatter};

/// A strict priority relation over `T`.
pub trait Compare<T: ?Sized> {
    /// `true` when `a` has strictly higher priority than `b`, and so belongs
    /// above it in the heap.
    fn outranks(&self, a: &T, b: &T) -> bool;
}

/// Greatest first, a max-heap. The default relation.
///
/// ```
/// # use heapq::compare::{Compare, Greater};
/// assert!(Greater.outranks(&5, &3));
/// assert!(!Greater.outranks(&3, &3));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Greater;

impl<T: Ord + ?Sized> Compare<T> for Greater {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Least first, a min-heap.
///
/// ```
/// # use heapq::compare::{Compare, Less};
/// assert!(Less.outranks(&3, &5));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Less;

impl<T: Ord + ?Sized> Compare<T> for Less {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Flips the relation it wraps, turning a max-heap into a min-heap and back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        self.0.outranks(b, a)
    }
}

/// A relation given by a closure, see [`compare_by`].
#[derive(Clone, Copy)]
pub struct FnCompare<F>(F);

impl<F> Debug for FnCompare<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnCompare")
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Compare<T> for FnCompare<F> {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

/// Use a closure as the priority relation.
///
/// ```
/// # use heapq::compare::{compare_by, Compare};
/// let by_len = compare_by(|a: &String, b: &String| a.len() > b.len());
/// assert!(by_len.outranks(&"three".to_string(), &"one".to_string()));
/// ```
pub fn compare_by<T: ?Sized, F: Fn(&T, &T) -> bool>(f: F) -> FnCompare<F> {
    FnCompare(f)
}

/// Ranks elements by a key extracted from them, greatest key first, see
/// [`compare_by_key`].
#[derive(Clone, Copy)]
pub struct KeyCompare<F>(F);

impl<F> Debug for KeyCompare<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("KeyCompare")
    }
}

impl<T: ?Sized, K: Ord, F: Fn(&T) -> K> Compare<T> for KeyCompare<F> {
    #[inline]
    fn outranks(&self, a: &T, b: &T) -> bool {
        (self.0)(a) > (self.0)(b)
    }
}

/// Rank by a key, largest key first. Wrap in [`Reversed`] for smallest first.
///
/// ```
/// # use heapq::compare::{compare_by_key, Compare, Reversed};
/// let latest = compare_by_key(|job: &(u32, char)| job.0);
/// assert!(latest.outranks(&(9, 'b'), &(2, 'a')));
/// assert!(Reversed(latest).outranks(&(2, 'a'), &(9, 'b')));
/// ```
pub fn compare_by_key<T: ?Sized, K: Ord, F: Fn(&T) -> K>(f: F) -> KeyCompare<F> {
    KeyCompare(f)
}
