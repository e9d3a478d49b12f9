//! # Backing sequences
//! The heap lives in an index-addressable sequence using the implicit complete
//! binary tree layout. Any container that can grow and shrink at its back and
//! swap two positions can hold a heap.

use std::{collections::VecDeque, ops::Index};

/// A growable, index-addressable sequence owned by a single queue.
pub trait Sequence<T>: Index<usize, Output = T> + Default + FromIterator<T> {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_back(&mut self, value: T);

    fn pop_back(&mut self) -> Option<T>;

    /// Exchange the elements at two positions.
    /// - `INV`: both indices are in bounds
    fn swap(&mut self, a: usize, b: usize);

    fn first(&self) -> Option<&T>;

    fn clear(&mut self);

    fn reserve(&mut self, additional: usize);
}

impl<T> Sequence<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        Vec::push(self, value)
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }

    #[inline]
    fn first(&self) -> Option<&T> {
        <[T]>::first(self)
    }

    fn clear(&mut self) {
        Vec::clear(self)
    }

    fn reserve(&mut self, additional: usize) {
        Vec::reserve(self, additional)
    }
}

impl<T> Sequence<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value)
    }

    #[inline]
    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }

    #[inline]
    fn first(&self) -> Option<&T> {
        VecDeque::front(self)
    }

    fn clear(&mut self) {
        VecDeque::clear(self)
    }

    fn reserve(&mut self, additional: usize) {
        VecDeque::reserve(self, additional)
    }
}
