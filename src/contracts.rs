//! Debug-mode contract checks for the container invariants.
//!
//! These assertions run on the containers' mutating paths and cost nothing
//! in release builds (`debug_assert!`). Each mirrors one of the documented
//! invariants:
//!
//! | Contract                     | Invariant                                  |
//! |------------------------------|--------------------------------------------|
//! | `check_deck_complete`        | Deck holds every (rank, category) pair once |
//! | `check_capacity_bound`       | Deque length never exceeds its capacity     |
//! | `check_layer_stack_nonempty` | A layered view always has a front layer     |

use crate::deck::Card;

/// Check that a generated deck is the full cartesian product: expected
/// length, no duplicate (rank, category) pairs.
///
/// # Panics (debug builds only)
/// Panics if the deck is short or a pair repeats.
#[inline]
pub(crate) fn check_deck_complete(cards: &[Card], expected: usize) {
    debug_assert!(
        cards.len() == expected,
        "Contract violation: deck has {} cards, expected {}",
        cards.len(),
        expected
    );

    #[cfg(debug_assertions)]
    {
        let mut seen = std::collections::HashSet::with_capacity(cards.len());
        for card in cards {
            debug_assert!(
                seen.insert((card.rank.as_str(), card.category.as_str())),
                "Contract violation: duplicate card ({}, {})",
                card.rank,
                card.category
            );
        }
    }
}

/// Check that a deque's length is within its capacity bound.
#[inline]
pub(crate) fn check_capacity_bound(len: usize, capacity: usize) {
    debug_assert!(
        len <= capacity,
        "Contract violation: deque length {} exceeds capacity {}",
        len,
        capacity
    );
}

/// Check that a layered view still has at least one layer.
#[inline]
pub(crate) fn check_layer_stack_nonempty(count: usize) {
    debug_assert!(
        count > 0,
        "Contract violation: layered map has no layers"
    );
}
