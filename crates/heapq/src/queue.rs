//! # The priority queue
//! A heap stored in a [`Sequence`], ordered by a [`Compare`] fixed at
//! construction.

use crate::{
    compare::{Compare, Greater, Less},
    error::EmptyContainer,
    heap,
    sequence::Sequence,
};
use derive_where::derive_where;
use std::{collections::VecDeque, marker::PhantomData, mem};
use tracing::trace;

/// A priority queue backed by a binary heap.
/// - `T` the element type
/// - `S` the [`Sequence`] the heap is stored in, a [`Vec`] by default
/// - `C` the priority relation, [`Greater`] (a max-heap) by default
///
/// ```
/// # use heapq::MaxQueue;
/// let mut queue = MaxQueue::new();
/// queue.push(2);
/// queue.push(10);
/// queue.push(7);
///
/// assert_eq!(queue.top(), Ok(10));
/// assert_eq!(queue.pop(), Ok(10));
/// assert_eq!(queue.pop(), Ok(7));
/// assert_eq!(queue.len(), 1);
/// ```
///
/// ## Copying and Moving
/// [`Clone`] copies the sequence and the comparator, the two queues are then
/// independent. Moving a queue transfers its sequence, and the moved-from
/// binding cannot be used again:
/// ```compile_fail
/// # use heapq::MaxQueue;
/// let first = MaxQueue::from([2, 9, 4]);
/// let second = first;
/// assert!(first.is_empty());
/// ```
/// Use [`PriorityQueue::take`] to move the contents out from behind a
/// reference, leaving an empty queue in place.
///
/// ## Invariant
/// After every public operation returns, no element outranks its parent (see
/// [`heap`]). This relies on the comparator being a strict weak ordering.
#[derive_where(Clone; S: Clone, C: Clone)]
#[derive_where(Debug; S: std::fmt::Debug, C: std::fmt::Debug)]
#[derive_where(Default; S: Default, C: Default)]
pub struct PriorityQueue<T, S = Vec<T>, C = Greater> {
    data: S,
    compare: C,
    _elem: PhantomData<T>,
}

/// Greatest element first.
pub type MaxQueue<T> = PriorityQueue<T, Vec<T>, Greater>;

/// Least element first.
pub type MinQueue<T> = PriorityQueue<T, Vec<T>, Less>;

impl<T, S, C> PriorityQueue<T, S, C>
where
    S: Sequence<T>,
    C: Compare<T>,
{
    /// An empty queue using the default comparator.
    pub fn new() -> Self
    where
        C: Default,
    {
        Self::with_compare(C::default())
    }

    pub fn with_compare(compare: C) -> Self {
        PriorityQueue {
            data: S::default(),
            compare,
            _elem: PhantomData,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self
    where
        C: Default,
    {
        Self::with_capacity_and_compare(capacity, C::default())
    }

    pub fn with_capacity_and_compare(capacity: usize, compare: C) -> Self {
        let mut queue = Self::with_compare(compare);
        queue.data.reserve(capacity);
        queue
    }

    /// Take ownership of an existing sequence, and rearrange it into a heap in
    /// `O(n)`.
    ///
    /// ```
    /// # use heapq::{MinQueue, PriorityQueue, compare::Less};
    /// let queue: MinQueue<i32> = PriorityQueue::from_sequence(vec![4, 7, 2], Less);
    /// assert_eq!(queue.top(), Ok(2));
    /// ```
    pub fn from_sequence(mut data: S, compare: C) -> Self {
        heap::heapify(&mut data, &compare);
        PriorityQueue {
            data,
            compare,
            _elem: PhantomData,
        }
    }

    /// Collect the values into the backing sequence, then heapify in one pass.
    pub fn from_iter_with<I>(values: I, compare: C) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_sequence(values.into_iter().collect(), compare)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Borrow the highest priority element.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// A copy of the highest priority element.
    pub fn top(&self) -> Result<T, EmptyContainer>
    where
        T: Clone,
    {
        self.peek().cloned().ok_or_else(|| {
            trace!("top of an empty queue");
            EmptyContainer
        })
    }

    /// Add a value to the queue in `O(log n)`.
    pub fn push(&mut self, value: T) {
        self.data.push_back(value);
        let last = self.data.len() - 1;
        heap::sift_up(&mut self.data, last, &self.compare);
    }

    /// Remove and return the highest priority element in `O(log n)`.
    ///
    /// The root is exchanged with the last element, which is then sifted down
    /// from the root.
    pub fn pop(&mut self) -> Result<T, EmptyContainer> {
        if self.data.is_empty() {
            trace!("pop from an empty queue");
            return Err(EmptyContainer);
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let top = self.data.pop_back().ok_or(EmptyContainer)?;
        if !self.data.is_empty() {
            heap::sift_down(&mut self.data, 0, &self.compare);
        }
        Ok(top)
    }

    /// Remove every element, retaining the comparator.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn comparator(&self) -> &C {
        &self.compare
    }

    /// Check the heap property holds over the whole queue, in `O(n)`.
    /// Can only fail when the comparator is not a strict weak ordering.
    pub fn is_heap(&self) -> bool {
        heap::is_heap(&self.data, &self.compare)
    }

    /// Move the contents out into a new queue, leaving this queue empty (with
    /// the same comparator).
    ///
    /// ```
    /// # use heapq::MaxQueue;
    /// let mut first = MaxQueue::from([7, 3]);
    /// let second = first.take();
    /// assert!(first.is_empty());
    /// assert_eq!(second.top(), Ok(7));
    /// ```
    pub fn take(&mut self) -> Self
    where
        C: Clone,
    {
        PriorityQueue {
            data: mem::take(&mut self.data),
            compare: self.compare.clone(),
            _elem: PhantomData,
        }
    }

    /// Drain the queue into a vector, highest priority first.
    ///
    /// ```
    /// # use heapq::MinQueue;
    /// let queue: MinQueue<_> = [5, 1, 8, 3].into_iter().collect();
    /// assert_eq!(queue.into_sorted_vec(), vec![1, 3, 5, 8]);
    /// ```
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Ok(top) = self.pop() {
            sorted.push(top);
        }
        sorted
    }
}

impl<T, S, C> FromIterator<T> for PriorityQueue<T, S, C>
where
    S: Sequence<T>,
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, S, C> Extend<T> for PriorityQueue<T, S, C>
where
    S: Sequence<T>,
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C, const N: usize> From<[T; N]> for PriorityQueue<T, Vec<T>, C>
where
    C: Compare<T> + Default,
{
    fn from(values: [T; N]) -> Self {
        Self::from_iter_with(values, C::default())
    }
}

impl<T, C> From<Vec<T>> for PriorityQueue<T, Vec<T>, C>
where
    C: Compare<T> + Default,
{
    fn from(data: Vec<T>) -> Self {
        Self::from_sequence(data, C::default())
    }
}

impl<T, C> From<VecDeque<T>> for PriorityQueue<T, VecDeque<T>, C>
where
    C: Compare<T> + Default,
{
    fn from(data: VecDeque<T>) -> Self {
        Self::from_sequence(data, C::default())
    }
}
