//! Shared test utilities and fixtures.

#![allow(dead_code)]

use coffer::BoundedDeque;

// Re-export canonical fixtures from coffer::testing
pub use coffer::testing::{card_vocabulary, layer, make_card, sample_scope, seeded_deque};

/// Snapshot a deque's contents front to back.
pub fn contents(deque: &BoundedDeque<i64>) -> Vec<i64> {
    deque.iter().copied().collect()
}
