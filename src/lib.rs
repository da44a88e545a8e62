//! Small containers with explicit lookup, ordering, and identity contracts.
//!
//! Five independent abstractions, none of which calls another:
//!
//! | Module     | Type           | Contract                                        |
//! |------------|----------------|-------------------------------------------------|
//! | `identity` | [`Label`]      | Equality and hash derive from the same field    |
//! | `deck`     | [`Deck`]       | Full cartesian product, derived total order     |
//! | `normmap`  | [`NormMap`]    | Keys canonicalized at one choke point           |
//! | `layers`   | [`LayeredMap`] | Front-to-back lookup over shared layers         |
//! | `deque`    | [`BoundedDeque`] | Capacity bound, rotation, opposite-end eviction |
//!
//! Every fallible operation returns [`CofferError`]; all failures are local
//! and recoverable. Invariants are enforced at construction where possible
//! (`Vocabulary::new`, `BoundedDeque::new`, `LayeredMap::from_layers`) and
//! re-checked on mutating paths in debug builds by the `contracts` module.
//!
//! # Usage
//!
//! ```
//! use coffer::{BoundedDeque, NormMap};
//!
//! let mut recent = BoundedDeque::with_items(10, [1, 2, 3, 4, 5])?;
//! recent.rotate(2);
//! assert_eq!(recent.iter().copied().collect::<Vec<_>>(), [4, 5, 1, 2, 3]);
//!
//! let mut names = NormMap::new();
//! names.insert("2", "two");
//! assert_eq!(names.get(2)?, "two");
//! # Ok::<(), coffer::CofferError>(())
//! ```
//!
//! All containers are single-threaded by design: no operation blocks, and
//! no internal synchronization is performed. Sharing an instance across
//! threads requires external synchronization (one exclusive lock per
//! instance).

// Module declarations
mod contracts;
mod deck;
mod deque;
mod errors;
mod identity;
mod layers;
mod normalize;
mod normmap;

pub mod testing;

// Re-exports for public API
pub use deck::{Card, Deck, Vocabulary};
pub use deque::BoundedDeque;
pub use errors::CofferError;
pub use identity::Label;
pub use layers::LayeredMap;
pub use normalize::normalize;
pub use normmap::{MissingAction, NormMap};

#[cfg(test)]
mod tests {
    //! Cross-module smoke tests; the bulk of the coverage lives in the
    //! per-module test mods and the `tests/` directory.

    use super::*;
    use std::collections::HashMap;

    #[test]
    fn labels_key_a_map_of_decks() {
        // The identity contract in actual use: equal-by-content labels
        // retrieve entries inserted under a different instance.
        let mut shelves: HashMap<Label, usize> = HashMap::new();
        shelves.insert(Label::new("standard", "the 52-card vocabulary"), 52);

        let deck = Deck::new(testing::card_vocabulary());
        let probe = Label::new("standard", "different note, same identity");
        assert_eq!(shelves[&probe], deck.len());
    }

    #[test]
    fn normalized_keys_survive_a_layered_scope() {
        let mut front = HashMap::new();
        front.insert(normalize("Two  Words"), 1);
        let view = LayeredMap::new(front);
        assert_eq!(*view.lookup(&normalize(" two words ")).unwrap(), 1);
    }
}
