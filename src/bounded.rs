//! Bounded Binary Max-Heap implementation
//!
//! An array-backed binary max-heap whose slot count starts at a floor,
//! doubles on demand, and never exceeds a hard ceiling (see
//! [`CapacityPolicy`]).
//!
//! Slots are `Option<T>`: positions `0..len` are always occupied, positions
//! `len..capacity` are always empty. Sift-up and sift-down slide a hole
//! through the tree instead of swapping, so each level costs one move.
//!
//! # Time Complexity
//!
//! | Operation       | Complexity         |
//! |-----------------|--------------------|
//! | `insert`        | O(log n) amortized |
//! | `remove_max`    | O(log n)           |
//! | `peek_max`      | O(1)               |
//! | `from_vec`      | O(n)               |
//! | `clear`         | O(n)               |
//!
//! # Example
//!
//! ```rust
//! use bounded_max_heap::{BoundedMaxHeap, PriorityQueue};
//!
//! let mut heap = BoundedMaxHeap::from_vec(vec![3, 1, 4, 1, 5, 9, 2, 6]).unwrap();
//! assert_eq!(heap.peek_max(), Some(&9));
//!
//! heap.insert(7).unwrap();
//! assert_eq!(heap.into_sorted_vec(), vec![9, 7, 6, 5, 4, 3, 2, 1, 1]);
//! ```

use crate::policy::CapacityPolicy;
use crate::traits::{HeapError, PriorityQueue};

/// A bounded-capacity binary max-heap
///
/// Construction is fallible: a capacity above the ceiling yields
/// [`HeapError::CapacityExceeded`] and no heap. Once built, only `insert`
/// can fail, and only when the heap is full at the ceiling.
///
/// Not internally synchronized. Share it across threads behind a lock.
#[derive(Debug, Clone)]
pub struct BoundedMaxHeap<T: Ord> {
    /// Heap slots; `slots.len()` is the current capacity
    slots: Vec<Option<T>>,
    /// Number of live elements, stored in `slots[..len]`
    len: usize,
    policy: CapacityPolicy,
}

impl<T: Ord> BoundedMaxHeap<T> {
    /// Creates an empty heap with the default capacity
    pub fn new() -> Self {
        let policy = CapacityPolicy::STANDARD;
        Self::empty(policy.floor(), policy)
    }

    /// Creates an empty heap able to hold `initial_capacity` elements before growing
    ///
    /// Capacities below the floor are raised to the floor.
    ///
    /// # Errors
    /// [`HeapError::CapacityExceeded`] if `initial_capacity` is above the ceiling.
    pub fn with_capacity(initial_capacity: usize) -> Result<Self, HeapError> {
        Self::with_policy(initial_capacity, CapacityPolicy::STANDARD)
    }

    /// Creates an empty heap governed by a custom [`CapacityPolicy`]
    pub fn with_policy(initial_capacity: usize, policy: CapacityPolicy) -> Result<Self, HeapError> {
        let capacity = policy.clamp_initial(initial_capacity)?;
        Ok(Self::empty(capacity, policy))
    }

    /// Builds a heap holding exactly `entries`
    ///
    /// Entries keep their input order in storage and are then heapified
    /// bottom-up, which is O(n) overall.
    ///
    /// # Errors
    /// [`HeapError::CapacityExceeded`] if there are more entries than the ceiling allows.
    pub fn from_vec(entries: Vec<T>) -> Result<Self, HeapError> {
        let policy = CapacityPolicy::STANDARD;
        let capacity = policy.clamp_initial(entries.len())?;

        let len = entries.len();
        let mut slots: Vec<Option<T>> = Vec::with_capacity(capacity);
        slots.extend(entries.into_iter().map(Some));
        slots.resize_with(capacity, || None);

        let mut heap = Self { slots, len, policy };
        heap.heapify();
        log::trace!("built heap of {} entries, capacity {}", len, capacity);
        Ok(heap)
    }

    /// Builds a heap from cloned copies of `entries`
    pub fn from_slice(entries: &[T]) -> Result<Self, HeapError>
    where
        T: Clone,
    {
        Self::from_vec(entries.to_vec())
    }

    fn empty(capacity: usize, policy: CapacityPolicy) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        log::trace!("created empty heap, capacity {}", capacity);
        Self {
            slots,
            len: 0,
            policy,
        }
    }

    /// Current number of slots
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Consumes the heap, returning its elements largest first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len);
        while let Some(max) = self.remove_max() {
            sorted.push(max);
        }
        sorted
    }

    /// Audits the heap structure
    ///
    /// Checks capacity against the policy, slot occupancy against `len`, and
    /// the max-heap property at every live position.
    ///
    /// # Errors
    /// [`HeapError::Integrity`] describing the first violation found.
    pub fn validate(&self) -> Result<(), HeapError> {
        let capacity = self.capacity();
        if capacity < self.policy.floor() || capacity > self.policy.ceiling() {
            return Err(integrity(format!(
                "capacity {} outside [{}, {}]",
                capacity,
                self.policy.floor(),
                self.policy.ceiling()
            )));
        }
        if self.len > capacity {
            return Err(integrity(format!(
                "length {} exceeds capacity {}",
                self.len, capacity
            )));
        }
        if let Some(index) = self.slots[..self.len].iter().position(Option::is_none) {
            return Err(integrity(format!("live slot {} is empty", index)));
        }
        if let Some(offset) = self.slots[self.len..].iter().position(Option::is_some) {
            return Err(integrity(format!(
                "slot {} past the end is occupied",
                self.len + offset
            )));
        }
        for index in 1..self.len {
            let parent = (index - 1) / 2;
            if self.slots[parent] < self.slots[index] {
                return Err(integrity(format!(
                    "slot {} is larger than its parent {}",
                    index, parent
                )));
            }
        }
        Ok(())
    }

    /// Grows storage ahead of an insert into a full heap
    fn grow(&mut self) -> Result<(), HeapError> {
        let current = self.capacity();
        let next = self.policy.next_capacity(current)?;
        self.slots.resize_with(next, || None);
        log::debug!("grew heap capacity from {} to {}", current, next);
        Ok(())
    }

    /// Restores the heap property over all slots, deepest parent first
    fn heapify(&mut self) {
        for root in (0..self.len / 2).rev() {
            self.sift_down(root);
        }
    }

    /// Slides a hole up from `hole` past every smaller ancestor, then fills it with `value`
    fn sift_up(&mut self, mut hole: usize, value: T) {
        while hole > 0 {
            let parent = (hole - 1) / 2;
            if self.slots[parent].as_ref() >= Some(&value) {
                break;
            }
            self.slots[hole] = self.slots[parent].take();
            hole = parent;
        }
        self.slots[hole] = Some(value);
    }

    /// Takes the element at `hole` and slides the hole down past every larger child
    ///
    /// Both subtrees under `hole` must already be heaps.
    fn sift_down(&mut self, mut hole: usize) {
        let Some(orphan) = self.slots[hole].take() else {
            return;
        };

        loop {
            let left = 2 * hole + 1;
            if left >= self.len {
                break;
            }
            let right = left + 1;
            let larger = if right < self.len && self.slots[right] > self.slots[left] {
                right
            } else {
                left
            };

            if self.slots[larger].as_ref() <= Some(&orphan) {
                break;
            }
            self.slots[hole] = self.slots[larger].take();
            hole = larger;
        }

        self.slots[hole] = Some(orphan);
    }
}

fn integrity(reason: String) -> HeapError {
    HeapError::Integrity { reason }
}

impl<T: Ord> PriorityQueue<T> for BoundedMaxHeap<T> {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn len(&self) -> usize {
        self.len
    }

    fn insert(&mut self, value: T) -> Result<(), HeapError> {
        if self.len == self.capacity() {
            if let Err(err) = self.grow() {
                log::warn!("rejected insert into full heap: {}", err);
                return Err(err);
            }
        }
        let hole = self.len;
        self.len += 1;
        self.sift_up(hole, value);
        Ok(())
    }

    fn peek_max(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.slots[0].as_ref()
    }

    fn remove_max(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        let max = self.slots[0].take();
        if self.len > 0 {
            self.slots[0] = self.slots[self.len].take();
            self.sift_down(0);
        }
        max
    }

    fn clear(&mut self) {
        for slot in &mut self.slots[..self.len] {
            *slot = None;
        }
        log::trace!("cleared {} elements", self.len);
        self.len = 0;
    }
}

impl<T: Ord> Default for BoundedMaxHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> TryFrom<Vec<T>> for BoundedMaxHeap<T> {
    type Error = HeapError;

    fn try_from(entries: Vec<T>) -> Result<Self, Self::Error> {
        Self::from_vec(entries)
    }
}
