// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A value type that is equal by content, not by address.
//!
//! `Label` designates one field, the key, as its identity. Equality and
//! hashing are both computed from exactly that field, so the core contract
//! for map keys holds by construction:
//!
//! ```text
//! a == b  ⇒  hash(a) == hash(b)
//! ```
//!
//! The reverse need not hold (hashes may collide). The `note` field is free
//! metadata: two labels with the same key and different notes are equal and
//! land in the same map slot.
//!
//! The key is consumed at construction and only exposed by shared reference,
//! so it cannot change while the label is in use as a map key. If you copy
//! this pattern for your own type, keep the `PartialEq` and `Hash` impls
//! reading the same field set, and cover the contract in tests rather than
//! at runtime.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A labelled value: identity key plus free-form note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    key: String,
    note: String,
}

impl Label {
    /// Create a label with the given identity key and note.
    pub fn new(key: impl Into<String>, note: impl Into<String>) -> Self {
        Label {
            key: key.into(),
            note: note.into(),
        }
    }

    /// The identity key. Immutable for the lifetime of the label.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The note. Not part of identity.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Replace the note. Safe while the label is used as a map key,
    /// because the note participates in neither equality nor hashing.
    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Exactly the field set compared by eq, nothing more.
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashMap;

    fn hash_of(label: &Label) -> u64 {
        let mut hasher = DefaultHasher::new();
        label.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_labels_hash_equal() {
        let a = Label::new("1", "first");
        let b = Label::new("1", "a different note");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn note_changes_do_not_move_map_entries() {
        let mut seen: HashMap<Label, u32> = HashMap::new();
        let mut label = Label::new("x", "before");
        seen.insert(label.clone(), 7);

        label.set_note("after");
        assert_eq!(seen.get(&label), Some(&7));
    }

    #[test]
    fn distinct_keys_are_unequal() {
        assert_ne!(Label::new("1", "n"), Label::new("2", "n"));
    }
}
