// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A double-ended sequence with a hard capacity.
//!
//! Pushing into a full deque evicts from the end opposite the insertion
//! side before inserting, and hands the evicted element back to the caller.
//! Length never exceeds capacity; both pops fail with `EmptyContainer` on
//! an empty deque; rotation is modular in the current length.

use std::collections::VecDeque;

use crate::contracts;
use crate::errors::CofferError;

/// A fixed-capacity deque with rotation and eviction on overflow.
#[derive(Debug, Clone)]
pub struct BoundedDeque<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> BoundedDeque<T> {
    /// An empty deque with the given capacity. Capacity zero is rejected
    /// with `PreconditionViolated`: every push would evict itself.
    pub fn new(capacity: usize) -> Result<Self, CofferError> {
        if capacity == 0 {
            return Err(CofferError::precondition("deque capacity is zero"));
        }
        Ok(BoundedDeque {
            items: VecDeque::with_capacity(capacity),
            capacity,
        })
    }

    /// A deque seeded by pushing each item to the back in order, with the
    /// usual eviction rule. Seeding with more than `capacity` items keeps
    /// the last `capacity` of them.
    pub fn with_items(
        capacity: usize,
        items: impl IntoIterator<Item = T>,
    ) -> Result<Self, CofferError> {
        let mut deque = BoundedDeque::new(capacity)?;
        deque.extend(items);
        Ok(deque)
    }

    /// Push to the front. If the deque is full, the back element is
    /// evicted first and returned.
    pub fn push_front(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_back()
        } else {
            None
        };
        self.items.push_front(item);
        contracts::check_capacity_bound(self.items.len(), self.capacity);
        evicted
    }

    /// Push to the back. If the deque is full, the front element is
    /// evicted first and returned.
    pub fn push_back(&mut self, item: T) -> Option<T> {
        let evicted = if self.items.len() == self.capacity {
            self.items.pop_front()
        } else {
            None
        };
        self.items.push_back(item);
        contracts::check_capacity_bound(self.items.len(), self.capacity);
        evicted
    }

    /// Remove and return the front element.
    pub fn pop_front(&mut self) -> Result<T, CofferError> {
        self.items.pop_front().ok_or(CofferError::EmptyContainer)
    }

    /// Remove and return the back element.
    pub fn pop_back(&mut self) -> Result<T, CofferError> {
        self.items.pop_back().ok_or(CofferError::EmptyContainer)
    }

    /// Rotate in place. Positive `n` moves the last `n` elements to the
    /// front; negative `n` moves the first `|n|` elements to the back.
    /// `n` is taken modulo the current length, and rotating an empty
    /// deque or by zero is a no-op. Relative order within the rotated
    /// and non-rotated runs is preserved.
    pub fn rotate(&mut self, n: isize) {
        let len = self.items.len();
        if len == 0 {
            return;
        }
        let steps = n.rem_euclid(len as isize) as usize;
        self.items.rotate_right(steps);
    }

    /// Push each item to the back in sequence order, evicting per element.
    /// An extend longer than the capacity retains only the last `capacity`
    /// items pushed, in arrival order.
    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.push_back(item);
        }
    }

    /// Push each item to the front in sequence order, evicting per
    /// element. The sequence therefore appears reversed at the front:
    /// extending the front with `[a, b]` leaves `b` front-most.
    pub fn extend_front(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.push_front(item);
        }
    }

    /// Current length. Never exceeds [`capacity`](BoundedDeque::capacity).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The capacity bound, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the next push will evict.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// The front element, if any.
    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    /// The back element, if any.
    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }
}

impl<T: PartialEq> BoundedDeque<T> {
    /// Membership by value equality.
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

/// Element-wise equality, front to back. The capacity bound does not
/// participate: two deques holding the same elements compare equal even
/// with different capacities.
impl<T: PartialEq> PartialEq for BoundedDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for BoundedDeque<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(deque: &BoundedDeque<i64>) -> Vec<i64> {
        deque.iter().copied().collect()
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = BoundedDeque::<i64>::new(0).unwrap_err();
        assert!(matches!(err, CofferError::PreconditionViolated { .. }));
    }

    #[test]
    fn push_back_evicts_the_front_when_full() {
        let mut deque = BoundedDeque::with_items(3, [1, 2, 3]).unwrap();
        assert_eq!(deque.push_back(4), Some(1));
        assert_eq!(contents(&deque), vec![2, 3, 4]);
    }

    #[test]
    fn push_front_evicts_the_back_when_full() {
        let mut deque = BoundedDeque::with_items(3, [1, 2, 3]).unwrap();
        assert_eq!(deque.push_front(0), Some(3));
        assert_eq!(contents(&deque), vec![0, 1, 2]);
    }

    #[test]
    fn pops_fail_on_empty() {
        let mut deque = BoundedDeque::<i64>::new(2).unwrap();
        assert_eq!(deque.pop_front().unwrap_err(), CofferError::EmptyContainer);
        assert_eq!(deque.pop_back().unwrap_err(), CofferError::EmptyContainer);
    }

    #[test]
    fn rotate_is_modular() {
        let mut deque = BoundedDeque::with_items(10, [1, 2, 3, 4, 5]).unwrap();
        deque.rotate(7); // same as rotate(2)
        assert_eq!(contents(&deque), vec![4, 5, 1, 2, 3]);
        deque.rotate(-7); // same as rotate(-2)
        assert_eq!(contents(&deque), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn rotate_on_empty_is_a_no_op() {
        let mut deque = BoundedDeque::<i64>::new(4).unwrap();
        deque.rotate(3);
        assert!(deque.is_empty());
    }

    #[test]
    fn oversized_extend_keeps_the_last_capacity_items() {
        let mut deque = BoundedDeque::new(3).unwrap();
        deque.extend(1..=7);
        assert_eq!(contents(&deque), vec![5, 6, 7]);
    }

    #[test]
    fn extend_front_reverses_arrival_order_at_the_front() {
        let mut deque = BoundedDeque::with_items(10, [1]).unwrap();
        deque.extend_front([-2, -3]);
        assert_eq!(contents(&deque), vec![-3, -2, 1]);
    }

    #[test]
    fn equality_ignores_capacity() {
        let a = BoundedDeque::with_items(3, [1, 2]).unwrap();
        let b = BoundedDeque::with_items(9, [1, 2]).unwrap();
        assert_eq!(a, b);
    }
}
