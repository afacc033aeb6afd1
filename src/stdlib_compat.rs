//! Standard library compatibility layer
//!
//! Implements [`PriorityQueue`] for `std::collections::BinaryHeap`, which is
//! also a max-heap. The standard heap is unbounded, so its `insert` never
//! fails. This makes it a drop-in reference model for code written against
//! the trait.
//!
//! # Example
//!
//! ```rust
//! use bounded_max_heap::PriorityQueue;
//! use std::collections::BinaryHeap;
//!
//! fn top<Q: PriorityQueue<i32>>(queue: &mut Q) -> Option<i32> {
//!     queue.insert(5).ok()?;
//!     queue.insert(8).ok()?;
//!     queue.remove_max()
//! }
//!
//! assert_eq!(top(&mut BinaryHeap::new()), Some(8));
//! ```

use std::collections::BinaryHeap;

use crate::traits::{HeapError, PriorityQueue};

impl<T: Ord> PriorityQueue<T> for BinaryHeap<T> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn insert(&mut self, value: T) -> Result<(), HeapError> {
        self.push(value);
        Ok(())
    }

    fn peek_max(&self) -> Option<&T> {
        self.peek()
    }

    fn remove_max(&mut self) -> Option<T> {
        self.pop()
    }

    fn clear(&mut self) {
        BinaryHeap::clear(self)
    }
}
