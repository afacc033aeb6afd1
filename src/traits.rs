//! Common traits and errors for max-oriented priority queues
//!
//! [`PriorityQueue`] is the queue contract implemented by
//! [`BoundedMaxHeap`](crate::bounded::BoundedMaxHeap). It is also implemented
//! for `std::collections::BinaryHeap` (see [`stdlib_compat`](crate::stdlib_compat)),
//! so generic code and tests can run against either.

use thiserror::Error;

/// Error type for heap operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A requested or required capacity is above the policy ceiling
    #[error("capacity {requested} exceeds the maximum heap capacity of {max}")]
    CapacityExceeded { requested: usize, max: usize },
    /// The heap failed its structural self-audit
    #[error("heap integrity check failed: {reason}")]
    Integrity { reason: String },
    /// A capacity policy whose floor is zero or above its ceiling
    #[error("invalid capacity policy: floor {floor}, ceiling {ceiling}")]
    InvalidPolicy { floor: usize, ceiling: usize },
}

/// A max-oriented priority queue
///
/// Elements are their own priority: `remove_max` always yields the largest
/// pending element under `Ord`. Callers that want min-ordering wrap their
/// elements in [`std::cmp::Reverse`].
///
/// # Example
///
/// ```rust
/// use bounded_max_heap::{BoundedMaxHeap, PriorityQueue};
///
/// let mut heap = BoundedMaxHeap::new();
/// heap.insert(3).unwrap();
/// heap.insert(7).unwrap();
/// heap.insert(5).unwrap();
///
/// assert_eq!(heap.peek_max(), Some(&7));
/// assert_eq!(heap.remove_max(), Some(7));
/// assert_eq!(heap.size(), 2);
/// ```
pub trait PriorityQueue<T: Ord> {
    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Alias for [`len`](PriorityQueue::len)
    fn size(&self) -> usize {
        self.len()
    }

    /// Inserts an element
    ///
    /// # Errors
    /// Returns [`HeapError::CapacityExceeded`] when the queue is bounded and
    /// cannot grow any further. The queue is left unmodified in that case.
    ///
    /// # Time Complexity
    /// O(log n) amortized.
    fn insert(&mut self, value: T) -> Result<(), HeapError>;

    /// Returns the largest element without removing it, or `None` if empty
    ///
    /// # Time Complexity
    /// O(1)
    fn peek_max(&self) -> Option<&T>;

    /// Removes and returns the largest element, or `None` if empty
    ///
    /// # Time Complexity
    /// O(log n)
    fn remove_max(&mut self) -> Option<T>;

    /// Drops every element
    fn clear(&mut self);
}
