// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A fixed sequence of records with a derived total order.
//!
//! A [`Deck`] is built from a [`Vocabulary`]: an ordered rank list and an
//! ordered category table mapping each category to an integer weight. The
//! deck holds the full cartesian product, so its length is always
//! `ranks × categories` and every (rank, category) pair appears exactly once.
//!
//! # Invariants (checked at construction)
//!
//! - Both vocabulary axes are non-empty.
//! - Ranks are pairwise distinct; categories are pairwise distinct.
//! - Weights are pairwise distinct and strictly below the category count,
//!   so [`Deck::rank_key`] is a strict total order with no ties:
//!
//! ```text
//! rank_key(card) = rank_index * category_count + category_weight
//! ```
//!
//! Violating any of these fails fast with `PreconditionViolated` rather than
//! producing a deck whose sorted view has unstable ties.

use serde::{Deserialize, Serialize};

use crate::contracts;
use crate::errors::CofferError;

/// One record in a deck: a rank drawn from the rank vocabulary and a
/// category drawn from the category table.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: String,
    pub category: String,
}

impl Card {
    pub fn new(rank: impl Into<String>, category: impl Into<String>) -> Self {
        Card {
            rank: rank.into(),
            category: category.into(),
        }
    }
}

/// The fixed vocabulary a deck is generated from.
///
/// Rank order is significant: a rank's position in the list is its
/// `rank_index`. Category order is significant only for enumeration order
/// of the generated deck; ordering between cards of different categories
/// comes from the weights.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vocabulary {
    ranks: Vec<String>,
    categories: Vec<(String, u64)>,
}

impl Vocabulary {
    /// Validate and build a vocabulary.
    ///
    /// Fails with `PreconditionViolated` if either axis is empty, if a rank
    /// or category repeats, or if weights are not distinct values below the
    /// category count.
    pub fn new(
        ranks: Vec<String>,
        categories: Vec<(String, u64)>,
    ) -> Result<Self, CofferError> {
        if ranks.is_empty() {
            return Err(CofferError::precondition("rank vocabulary is empty"));
        }
        if categories.is_empty() {
            return Err(CofferError::precondition("category vocabulary is empty"));
        }

        for (i, rank) in ranks.iter().enumerate() {
            if ranks[..i].contains(rank) {
                return Err(CofferError::precondition(format!(
                    "duplicate rank '{}'",
                    rank
                )));
            }
        }

        let count = categories.len() as u64;
        for (i, (category, weight)) in categories.iter().enumerate() {
            if categories[..i].iter().any(|(c, _)| c == category) {
                return Err(CofferError::precondition(format!(
                    "duplicate category '{}'",
                    category
                )));
            }
            if categories[..i].iter().any(|(_, w)| w == weight) {
                return Err(CofferError::precondition(format!(
                    "duplicate category weight {}",
                    weight
                )));
            }
            if *weight >= count {
                return Err(CofferError::precondition(format!(
                    "category weight {} >= category count {}",
                    weight, count
                )));
            }
        }

        Ok(Vocabulary { ranks, categories })
    }

    /// Position of a rank in the rank vocabulary.
    pub fn rank_index(&self, rank: &str) -> Option<usize> {
        self.ranks.iter().position(|r| r == rank)
    }

    /// Weight of a category.
    pub fn weight(&self, category: &str) -> Option<u64> {
        self.categories
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, w)| *w)
    }

    pub fn rank_count(&self) -> usize {
        self.ranks.len()
    }

    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

/// The generated sequence: every (rank, category) pair, exactly once.
///
/// Enumeration is category-major: all ranks of the first category, then all
/// ranks of the second, and so on. Sorting is a separate, non-mutating view
/// ordered by [`rank_key`](Deck::rank_key).
#[derive(Debug, Clone)]
pub struct Deck {
    vocab: Vocabulary,
    cards: Vec<Card>,
    // Rank key per card, parallel to `cards`. Precomputed so sorted_view()
    // never has to re-resolve vocabulary positions.
    keys: Vec<u64>,
}

impl Deck {
    /// Generate the full deck for a vocabulary.
    pub fn new(vocab: Vocabulary) -> Self {
        let category_count = vocab.category_count() as u64;
        let mut cards = Vec::with_capacity(vocab.rank_count() * vocab.category_count());
        let mut keys = Vec::with_capacity(cards.capacity());

        for (category, weight) in &vocab.categories {
            for (rank_index, rank) in vocab.ranks.iter().enumerate() {
                cards.push(Card::new(rank.clone(), category.clone()));
                keys.push(rank_index as u64 * category_count + weight);
            }
        }

        contracts::check_deck_complete(&cards, vocab.rank_count() * vocab.category_count());

        Deck { vocab, cards, keys }
    }

    /// The card at `index`.
    pub fn get(&self, index: usize) -> Result<&Card, CofferError> {
        self.cards.get(index).ok_or(CofferError::IndexOutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Number of cards. Constant: `rank_count * category_count`.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a validated vocabulary; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Membership by value equality of (rank, category).
    pub fn contains(&self, card: &Card) -> bool {
        self.vocab.rank_index(&card.rank).is_some() && self.vocab.weight(&card.category).is_some()
    }

    /// The derived ordering key: `rank_index * category_count + weight`.
    ///
    /// Strict total order over the deck; fails with `KeyNotFound` for a
    /// card whose rank or category is outside the vocabulary.
    pub fn rank_key(&self, card: &Card) -> Result<u64, CofferError> {
        let rank_index = self
            .vocab
            .rank_index(&card.rank)
            .ok_or_else(|| CofferError::KeyNotFound {
                key: card.rank.clone(),
            })?;
        let weight = self
            .vocab
            .weight(&card.category)
            .ok_or_else(|| CofferError::KeyNotFound {
                key: card.category.clone(),
            })?;
        Ok(rank_index as u64 * self.vocab.category_count() as u64 + weight)
    }

    /// Cards in ascending rank-key order.
    ///
    /// The sort is stable, so if this view is reused over a partial key
    /// (fewer fields than the full rank key), ties keep their original
    /// relative order. The view is a permutation: same multiset of cards
    /// as the deck itself.
    pub fn sorted_view(&self) -> Vec<&Card> {
        let mut order: Vec<usize> = (0..self.cards.len()).collect();
        order.sort_by_key(|&i| self.keys[i]);
        order.into_iter().map(|i| &self.cards[i]).collect()
    }

    /// Iterate cards in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The vocabulary this deck was generated from.
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocab
    }
}
