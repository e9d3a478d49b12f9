use thiserror::Error;

/// Returned when reading or removing the top of a queue with no elements.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("priority queue is empty")]
pub struct EmptyContainer;
