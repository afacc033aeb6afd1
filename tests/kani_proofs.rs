//! Kani verification proofs for heap operations
//!
//! Kani is AWS's model checker for Rust. It can verify properties of Rust code
//! by checking all possible executions up to certain bounds.
//!
//! To run these proofs:
//!   cargo kani

#[cfg(kani)]
use bounded_max_heap::{BoundedMaxHeap, CapacityPolicy, PriorityQueue};

/// Proof that insert always increments the length
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(30)]
fn verify_insert_increments_len() {
    let policy = CapacityPolicy::new(2, 4).unwrap();
    let mut heap: BoundedMaxHeap<u32> = BoundedMaxHeap::with_policy(0, policy).unwrap();
    heap.insert(kani::any()).unwrap();
    let initial_len = heap.size();

    heap.insert(kani::any()).unwrap();

    assert!(heap.size() == initial_len + 1);
}

/// Proof that remove_max returns an element no smaller than any other
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(30)]
fn verify_remove_max_is_maximum() {
    let a: u32 = kani::any();
    let b: u32 = kani::any();
    let c: u32 = kani::any();

    let mut heap = BoundedMaxHeap::from_vec(vec![a, b, c]).unwrap();
    let max = heap.remove_max().unwrap();

    assert!(max >= a && max >= b && max >= c);
    assert!(max == a || max == b || max == c);
    assert!(heap.size() == 2);
}

/// Proof that draining three elements yields non-increasing order
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(30)]
fn verify_drain_order() {
    let mut heap = BoundedMaxHeap::new();
    heap.insert(kani::any::<u8>()).unwrap();
    heap.insert(kani::any::<u8>()).unwrap();
    heap.insert(kani::any::<u8>()).unwrap();

    let first = heap.remove_max().unwrap();
    let second = heap.remove_max().unwrap();
    let third = heap.remove_max().unwrap();

    assert!(first >= second && second >= third);
    assert!(heap.remove_max().is_none());
}

/// Proof that the empty heap never changes on peek or remove
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(30)]
fn verify_empty_heap_inert() {
    let mut heap: BoundedMaxHeap<u32> = BoundedMaxHeap::new();
    assert!(heap.peek_max().is_none());
    assert!(heap.remove_max().is_none());
    assert!(heap.is_empty());
}
