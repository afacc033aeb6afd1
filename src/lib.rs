//! Bounded Max-Heap for Rust
//!
//! This crate provides [`BoundedMaxHeap`], an array-backed binary max-heap
//! with a capacity floor and a hard capacity ceiling.
//!
//! # Features
//!
//! - **Hole-sliding sift-up and sift-down**: one move per tree level instead of a swap
//! - **O(n) construction** from an existing sequence via bottom-up heapify
//! - **Bounded growth**: capacity doubles on demand, clamped to a ceiling (10 000 by default)
//! - **Fallible construction**: oversized requests return [`HeapError::CapacityExceeded`]
//!   rather than a half-built heap
//!
//! # Example
//!
//! ```rust
//! use bounded_max_heap::{BoundedMaxHeap, HeapError, PriorityQueue};
//!
//! let mut heap = BoundedMaxHeap::with_capacity(5)?;
//! assert_eq!(heap.capacity(), 25); // raised to the floor
//!
//! heap.insert("pear")?;
//! heap.insert("apple")?;
//! heap.insert("quince")?;
//! assert_eq!(heap.remove_max(), Some("quince"));
//!
//! assert!(matches!(
//!     BoundedMaxHeap::<u8>::with_capacity(20_000),
//!     Err(HeapError::CapacityExceeded { .. })
//! ));
//! # Ok::<(), HeapError>(())
//! ```

pub mod bounded;
pub mod policy;
pub mod stdlib_compat;
pub mod traits;

pub use bounded::BoundedMaxHeap;
pub use policy::{CapacityPolicy, DEFAULT_CAPACITY, MAX_CAPACITY};
pub use traits::{HeapError, PriorityQueue};
