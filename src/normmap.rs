// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A mapping that coerces every key to a canonical form.
//!
//! `NormMap` composes an inner string-keyed store with a normalizer applied
//! at a single choke point, on both reads and writes. Two keys that render
//! to the same canonical form denote the same entry: inserting under the
//! integer `2` and looking up the string `"2"` hit the same slot.
//!
//! Missing keys go through an on-missing policy, a caller-supplied function
//! over the normalized key. The policy can supply a value, rewrite the key
//! once, or give up. At most one rewrite is honored per lookup; a rewrite
//! that misses again fails with `KeyNotFound`, so chained coercions cannot
//! loop.

use std::collections::HashMap;
use std::fmt::{self, Display};

use crate::errors::CofferError;
use crate::normalize::normalize;

/// What an on-missing policy may do with an absent normalized key.
pub enum MissingAction<V> {
    /// Produce a value for this key without storing it.
    Supply(V),
    /// Rewrite the key and look it up once more. Honored at most once per
    /// lookup; a second miss fails with `KeyNotFound`.
    Retry(String),
    /// Fall through to `KeyNotFound`.
    GiveUp,
}

type MissingPolicy<V> = Box<dyn Fn(&str) -> MissingAction<V>>;

/// A key-normalizing map with a programmable on-missing policy.
///
/// The normalizer defaults to [`normalize`](crate::normalize): lowercase,
/// diacritics stripped, whitespace collapsed. Keys are accepted as any
/// `Display` type and rendered before normalization, which is what makes
/// `2` and `"2"` collide.
pub struct NormMap<V> {
    entries: HashMap<String, V>,
    normalizer: fn(&str) -> String,
    on_missing: Option<MissingPolicy<V>>,
}

impl<V> NormMap<V> {
    /// An empty map with the default normalizer and no on-missing policy.
    pub fn new() -> Self {
        NormMap {
            entries: HashMap::new(),
            normalizer: normalize,
            on_missing: None,
        }
    }

    /// An empty map with a custom normalizer.
    ///
    /// The normalizer is the single choke point: it runs on every insert
    /// and every lookup, so entries written through one spelling are found
    /// through any spelling with the same canonical form.
    pub fn with_normalizer(normalizer: fn(&str) -> String) -> Self {
        NormMap {
            entries: HashMap::new(),
            normalizer,
            on_missing: None,
        }
    }

    /// Install an on-missing policy, replacing any previous one.
    pub fn on_missing(mut self, policy: impl Fn(&str) -> MissingAction<V> + 'static) -> Self {
        self.on_missing = Some(Box::new(policy));
        self
    }

    /// Insert a value under the normalized form of `key`.
    ///
    /// Returns the previous value stored under the same canonical form.
    pub fn insert(&mut self, key: impl Display, value: V) -> Option<V> {
        let canonical = (self.normalizer)(&key.to_string());
        self.entries.insert(canonical, value)
    }

    /// Membership under normalization.
    ///
    /// Because normalization happens here too, this is aware of keys the
    /// caller never normalized explicitly: `contains(2)` is true whenever
    /// an entry is stored under `"2"`.
    pub fn contains(&self, key: impl Display) -> bool {
        let canonical = (self.normalizer)(&key.to_string());
        self.entries.contains_key(&canonical)
    }

    /// Borrow the stored value, without consulting the on-missing policy.
    pub fn peek(&self, key: impl Display) -> Option<&V> {
        let canonical = (self.normalizer)(&key.to_string());
        self.entries.get(&canonical)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate canonical keys and values in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<V: Clone> NormMap<V> {
    /// Look up a key, consulting the on-missing policy when the normalized
    /// key is absent.
    ///
    /// The policy is only invoked after the canonical lookup misses. A
    /// `Retry` rewrite is itself normalized and looked up exactly once;
    /// if that misses too, the lookup fails with `KeyNotFound` naming the
    /// original canonical key.
    pub fn get(&self, key: impl Display) -> Result<V, CofferError> {
        let canonical = (self.normalizer)(&key.to_string());
        if let Some(value) = self.entries.get(&canonical) {
            return Ok(value.clone());
        }

        if let Some(policy) = &self.on_missing {
            match policy(&canonical) {
                MissingAction::Supply(value) => return Ok(value),
                MissingAction::Retry(rewritten) => {
                    // The one permitted rewrite. No further policy call.
                    let canonical2 = (self.normalizer)(&rewritten);
                    if let Some(value) = self.entries.get(&canonical2) {
                        return Ok(value.clone());
                    }
                }
                MissingAction::GiveUp => {}
            }
        }

        Err(CofferError::KeyNotFound { key: canonical })
    }

    /// Like [`get`](NormMap::get), but substitutes `default` for
    /// `KeyNotFound` instead of propagating it. Other outcomes pass
    /// through unchanged.
    pub fn get_or(&self, key: impl Display, default: V) -> V {
        match self.get(key) {
            Ok(value) => value,
            Err(_) => default,
        }
    }
}

impl<V> Default for NormMap<V> {
    fn default() -> Self {
        NormMap::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for NormMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormMap")
            .field("entries", &self.entries)
            .field("on_missing", &self.on_missing.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_and_reads_share_the_choke_point() {
        let mut map = NormMap::new();
        map.insert("  TWO ", 2);
        assert_eq!(map.get("two").unwrap(), 2);
        assert!(map.contains("Two"));
    }

    #[test]
    fn display_keys_collide_across_types() {
        let mut map = NormMap::new();
        map.insert("2", "two");
        assert_eq!(map.get(2).unwrap(), "two");
    }

    #[test]
    fn missing_policy_runs_only_on_a_miss() {
        let mut map = NormMap::new().on_missing(|_| MissingAction::Supply(0));
        map.insert("hit", 1);
        assert_eq!(map.get("hit").unwrap(), 1);
        assert_eq!(map.get("miss").unwrap(), 0);
    }

    #[test]
    fn retry_is_honored_at_most_once() {
        // A policy that always rewrites. Without the bound this would
        // loop; with it, the rewritten miss fails cleanly.
        let map: NormMap<i32> =
            NormMap::new().on_missing(|key| MissingAction::Retry(format!("{}!", key)));
        let err = map.get("absent").unwrap_err();
        assert_eq!(
            err,
            CofferError::KeyNotFound {
                key: "absent".to_string()
            }
        );
    }

    #[test]
    fn retry_that_hits_resolves() {
        let mut map = NormMap::new().on_missing(|key| MissingAction::Retry(format!("{}s", key)));
        map.insert("cards", 52);
        assert_eq!(map.get("card").unwrap(), 52);
    }

    #[test]
    fn get_or_substitutes_only_for_missing_keys() {
        let mut map = NormMap::new();
        map.insert("4", "four");
        assert_eq!(map.get_or(4, "n/a"), "four");
        assert_eq!(map.get_or(3, "n/a"), "n/a");
    }
}
