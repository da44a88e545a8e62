//! Test fixtures shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication between the
//! in-crate tests and the `tests/` directory.

#![doc(hidden)]

use std::collections::HashMap;

use crate::deck::{Card, Vocabulary};
use crate::deque::BoundedDeque;
use crate::layers::LayeredMap;

/// The standard 52-card vocabulary: ranks 2..10, J, Q, K, A and the four
/// suits weighted spades > hearts > diamonds > clubs.
pub fn card_vocabulary() -> Vocabulary {
    let ranks = (2..=10)
        .map(|n| n.to_string())
        .chain(["J", "Q", "K", "A"].into_iter().map(String::from))
        .collect();
    let categories = vec![
        ("spades".to_string(), 3),
        ("hearts".to_string(), 2),
        ("diamonds".to_string(), 1),
        ("clubs".to_string(), 0),
    ];
    Vocabulary::new(ranks, categories).expect("standard vocabulary is well-formed")
}

/// Shorthand card constructor.
pub fn make_card(rank: &str, category: &str) -> Card {
    Card::new(rank, category)
}

/// A deque seeded with the given items, in push_back order.
pub fn seeded_deque(capacity: usize, items: &[i64]) -> BoundedDeque<i64> {
    BoundedDeque::with_items(capacity, items.iter().copied())
        .expect("fixture capacity is non-zero")
}

/// A single mapping layer from literal pairs.
pub fn layer(pairs: &[(&str, i64)]) -> HashMap<String, i64> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), *value))
        .collect()
}

/// The two-layer scope used throughout the tests:
/// front `{a:1, b:2}` over back `{a:3, c:4}`.
pub fn sample_scope() -> LayeredMap<i64> {
    LayeredMap::from_layers(vec![layer(&[("a", 1), ("b", 2)]), layer(&[("a", 3), ("c", 4)])])
        .expect("fixture stack is non-empty")
}
