//! # Heap maintenance
//! Index arithmetic over a [`Sequence`] laid out as an implicit complete binary
//! tree:
//! - `parent(i) = (i - 1) / 2`
//! - `left(i)   = 2i + 1`
//! - `right(i)  = 2i + 2`
//!
//! The heap property holds when, for every `0 < i < len`, the element at `i`
//! does not [outrank](Compare::outranks) the element at `parent(i)`.
//!
//! All functions are iterative, using constant extra space.

use crate::{compare::Compare, sequence::Sequence};
use tracing::trace;

#[inline(always)]
fn parent(index: usize) -> usize {
    (index - 1) / 2
}

#[inline(always)]
fn left_child(index: usize) -> usize {
    2 * index + 1
}

/// Move the element at `index` towards the root while it outranks its parent.
/// - `INV`: `index < seq.len()`
/// - `INV`: the sequence without the element at `index` is a valid heap
///
/// `O(log n)` comparisons.
pub fn sift_up<T, S, C>(seq: &mut S, mut index: usize, compare: &C)
where
    S: Sequence<T>,
    C: Compare<T>,
{
    while index > 0 {
        let up = parent(index);
        if !compare.outranks(&seq[index], &seq[up]) {
            break;
        }
        seq.swap(index, up);
        index = up;
    }
}

/// Move the element at `index` towards the leaves while either child outranks
/// it, swapping with the highest priority child at each step.
/// - `INV`: the subtrees rooted at both children of `index` are valid heaps
///
/// When both children outrank the element equally, the left child is chosen;
/// the right child only replaces the current best when it strictly outranks it.
///
/// `O(log n)` comparisons.
pub fn sift_down<T, S, C>(seq: &mut S, mut index: usize, compare: &C)
where
    S: Sequence<T>,
    C: Compare<T>,
{
    let len = seq.len();
    loop {
        let left = left_child(index);
        let right = left + 1;
        let mut best = index;

        if left < len && compare.outranks(&seq[left], &seq[best]) {
            best = left;
        }
        if right < len && compare.outranks(&seq[right], &seq[best]) {
            best = right;
        }
        if best == index {
            break;
        }
        seq.swap(index, best);
        index = best;
    }
}

/// Rearrange an arbitrary sequence into a heap, in place.
///
/// Sifts down every internal node from the last (`len / 2 - 1`) to the root, so
/// each call's children are already heaps. Bounded by `2n` comparisons, as the
/// cost of each sift is bounded by the height of its subtree.
pub fn heapify<T, S, C>(seq: &mut S, compare: &C)
where
    S: Sequence<T>,
    C: Compare<T>,
{
    let len = seq.len();
    trace!(len, "heapifying sequence");
    for index in (0..len / 2).rev() {
        sift_down(seq, index, compare);
    }
}

/// Check the heap property over the whole sequence.
pub fn is_heap<T, S, C>(seq: &S, compare: &C) -> bool
where
    S: Sequence<T>,
    C: Compare<T>,
{
    (1..seq.len()).all(|index| !compare.outranks(&seq[index], &seq[parent(index)]))
}
