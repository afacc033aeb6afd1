//! Capacity policy for bounded heaps
//!
//! A [`CapacityPolicy`] fixes the smallest slot count a heap allocates (the
//! floor) and the largest it may ever reach (the ceiling). Requests below the
//! floor are raised to it; anything above the ceiling is an error.

use crate::traits::HeapError;

/// Default and minimum capacity of a heap
pub const DEFAULT_CAPACITY: usize = 25;

/// Hard upper bound on heap capacity
pub const MAX_CAPACITY: usize = 10_000;

/// Floor and ceiling on the number of slots a heap may allocate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapacityPolicy {
    floor: usize,
    ceiling: usize,
}

impl CapacityPolicy {
    /// The policy used by [`BoundedMaxHeap::new`](crate::bounded::BoundedMaxHeap::new):
    /// floor [`DEFAULT_CAPACITY`], ceiling [`MAX_CAPACITY`]
    pub const STANDARD: CapacityPolicy = CapacityPolicy {
        floor: DEFAULT_CAPACITY,
        ceiling: MAX_CAPACITY,
    };

    /// Creates a policy, rejecting a zero floor or a floor above the ceiling
    pub fn new(floor: usize, ceiling: usize) -> Result<Self, HeapError> {
        if floor == 0 || floor > ceiling {
            return Err(HeapError::InvalidPolicy { floor, ceiling });
        }
        Ok(Self { floor, ceiling })
    }

    pub fn floor(&self) -> usize {
        self.floor
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    /// Resolves a requested initial capacity
    ///
    /// Values below the floor are raised to the floor. Values above the
    /// ceiling fail with [`HeapError::CapacityExceeded`].
    pub fn clamp_initial(&self, requested: usize) -> Result<usize, HeapError> {
        if requested > self.ceiling {
            return Err(HeapError::CapacityExceeded {
                requested,
                max: self.ceiling,
            });
        }
        Ok(requested.max(self.floor))
    }

    /// Returns the capacity to grow to from a full heap of `current` slots
    ///
    /// Doubles, clamped to the ceiling. A heap already at the ceiling cannot
    /// grow and gets [`HeapError::CapacityExceeded`].
    pub fn next_capacity(&self, current: usize) -> Result<usize, HeapError> {
        if current >= self.ceiling {
            return Err(HeapError::CapacityExceeded {
                requested: current.saturating_add(1),
                max: self.ceiling,
            });
        }
        Ok(current.saturating_mul(2).clamp(self.floor, self.ceiling))
    }
}

impl Default for CapacityPolicy {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        let policy = CapacityPolicy::default();
        assert_eq!(policy.floor(), DEFAULT_CAPACITY);
        assert_eq!(policy.ceiling(), MAX_CAPACITY);
    }

    #[test]
    fn test_new_rejects_bad_bounds() {
        assert_eq!(
            CapacityPolicy::new(0, 10),
            Err(HeapError::InvalidPolicy {
                floor: 0,
                ceiling: 10
            })
        );
        assert_eq!(
            CapacityPolicy::new(20, 10),
            Err(HeapError::InvalidPolicy {
                floor: 20,
                ceiling: 10
            })
        );
        assert!(CapacityPolicy::new(10, 10).is_ok());
    }

    #[test]
    fn test_clamp_initial() {
        let policy = CapacityPolicy::STANDARD;
        assert_eq!(policy.clamp_initial(0), Ok(25));
        assert_eq!(policy.clamp_initial(5), Ok(25));
        assert_eq!(policy.clamp_initial(25), Ok(25));
        assert_eq!(policy.clamp_initial(500), Ok(500));
        assert_eq!(policy.clamp_initial(10_000), Ok(10_000));
        assert_eq!(
            policy.clamp_initial(20_000),
            Err(HeapError::CapacityExceeded {
                requested: 20_000,
                max: 10_000
            })
        );
    }

    #[test]
    fn test_next_capacity_doubles_then_clamps() {
        let policy = CapacityPolicy::STANDARD;
        assert_eq!(policy.next_capacity(25), Ok(50));
        assert_eq!(policy.next_capacity(6400), Ok(10_000));
        assert_eq!(policy.next_capacity(9_999), Ok(10_000));
        assert_eq!(
            policy.next_capacity(10_000),
            Err(HeapError::CapacityExceeded {
                requested: 10_001,
                max: 10_000
            })
        );
    }

    #[test]
    fn test_next_capacity_small_policy() {
        let policy = CapacityPolicy::new(1, 3).unwrap();
        assert_eq!(policy.next_capacity(1), Ok(2));
        assert_eq!(policy.next_capacity(2), Ok(3));
        assert!(policy.next_capacity(3).is_err());
    }
}
