#![doc = include_str!("../README.md")]

pub mod compare;
pub mod error;
pub mod heap;
pub mod queue;
pub mod sequence;

pub use compare::Compare;
pub use error::EmptyContainer;
pub use queue::{MaxQueue, MinQueue, PriorityQueue};
pub use sequence::Sequence;

/// Build a queue from a list of values, heapified in one pass. The queue type
/// (and so the comparator) is taken from context.
/// ```
/// # use heapq::{priority_queue, MaxQueue, MinQueue};
/// let max: MaxQueue<_> = priority_queue![1, 6, 3];
/// let min: MinQueue<_> = priority_queue![1, 6, 3];
/// assert_eq!(max.top(), Ok(6));
/// assert_eq!(min.top(), Ok(1));
/// ```
#[macro_export]
macro_rules! priority_queue {
    () => {
        $crate::PriorityQueue::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::PriorityQueue::from([$($value),+])
    };
}
