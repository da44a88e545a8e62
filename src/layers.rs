// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A lookup view over a priority-ordered stack of mapping layers.
//!
//! Layers are scanned front to back; the first layer containing the key
//! wins. Pushing and popping the front layer are value operations: they
//! return a new view and leave every existing view untouched. Lower layers
//! are structurally shared between views (`Arc`), not deep-copied.
//!
//! Writes only ever target the front layer. If that layer is shared with
//! another view, it is cloned before the write (copy-on-write via
//! `Arc::make_mut`), so no view observes another view's mutations.
//!
//! # Invariants
//!
//! - A view always has at least one layer. [`pop_front`](LayeredMap::pop_front)
//!   on a single-layer view fails with `PreconditionViolated`; a lookup
//!   with no scope at all is meaningless.
//! - `lookup` resolves to the front-most layer containing the key.

use std::collections::HashMap;
use std::sync::Arc;

use crate::contracts;
use crate::errors::CofferError;

/// A composed view over a stack of mapping layers, front first.
#[derive(Debug, Clone)]
pub struct LayeredMap<V> {
    layers: Vec<Arc<HashMap<String, V>>>,
}

impl<V> LayeredMap<V> {
    /// A view with a single layer.
    pub fn new(front: HashMap<String, V>) -> Self {
        LayeredMap {
            layers: vec![Arc::new(front)],
        }
    }

    /// A view over the given layers, first = front. Fails with
    /// `PreconditionViolated` if no layers are given.
    pub fn from_layers(layers: Vec<HashMap<String, V>>) -> Result<Self, CofferError> {
        if layers.is_empty() {
            return Err(CofferError::precondition("layer stack is empty"));
        }
        Ok(LayeredMap {
            layers: layers.into_iter().map(Arc::new).collect(),
        })
    }

    /// Resolve a key to the value in the front-most layer containing it.
    pub fn lookup(&self, key: &str) -> Result<&V, CofferError> {
        self.layers
            .iter()
            .find_map(|layer| layer.get(key))
            .ok_or_else(|| CofferError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Whether any layer contains the key.
    pub fn contains(&self, key: &str) -> bool {
        self.layers.iter().any(|layer| layer.contains_key(key))
    }

    /// A new view with `layer` prepended as the front. The receiver and
    /// every other existing view are unchanged; lower layers are shared,
    /// not copied.
    pub fn push_front(&self, layer: HashMap<String, V>) -> LayeredMap<V> {
        let mut layers = Vec::with_capacity(self.layers.len() + 1);
        layers.push(Arc::new(layer));
        layers.extend(self.layers.iter().cloned());
        LayeredMap { layers }
    }

    /// A new view without the current front layer.
    ///
    /// Fails with `PreconditionViolated` when only one layer remains.
    pub fn pop_front(&self) -> Result<LayeredMap<V>, CofferError> {
        if self.layers.len() == 1 {
            return Err(CofferError::precondition(
                "cannot pop the last remaining layer",
            ));
        }
        Ok(LayeredMap {
            layers: self.layers[1..].to_vec(),
        })
    }

    /// Number of layers in this view.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Keys visible through this view, front-most occurrence only.
    pub fn keys(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        let mut keys = Vec::new();
        for layer in &self.layers {
            for key in layer.keys() {
                if seen.insert(key.as_str()) {
                    keys.push(key.as_str());
                }
            }
        }
        keys
    }
}

impl<V: Clone> LayeredMap<V> {
    /// Insert into the front layer only.
    ///
    /// Lower layers are never written. If the front layer is shared with
    /// another view it is cloned first, so the write is invisible
    /// everywhere but here.
    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        contracts::check_layer_stack_nonempty(self.layers.len());
        // First (and only) layer mutated; make_mut unshares it on demand.
        Arc::make_mut(&mut self.layers[0]).insert(key.into(), value);
    }

    /// A merged snapshot of the whole stack, front layer winning on
    /// conflicts. Detached from the view: later changes to either are
    /// not reflected in the other.
    pub fn flatten(&self) -> HashMap<String, V> {
        let mut merged = HashMap::new();
        for layer in self.layers.iter().rev() {
            for (key, value) in layer.iter() {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(pairs: &[(&str, i64)]) -> HashMap<String, i64> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), *v))
            .collect()
    }

    #[test]
    fn front_layer_wins() {
        let view = LayeredMap::from_layers(vec![
            layer(&[("a", 1), ("b", 2)]),
            layer(&[("a", 3), ("c", 4)]),
        ])
        .unwrap();

        assert_eq!(*view.lookup("a").unwrap(), 1);
        assert_eq!(*view.lookup("b").unwrap(), 2);
        assert_eq!(*view.lookup("c").unwrap(), 4);
    }

    #[test]
    fn absent_everywhere_is_key_not_found() {
        let view = LayeredMap::new(layer(&[("a", 1)]));
        let err = view.lookup("z").unwrap_err();
        assert_eq!(
            err,
            CofferError::KeyNotFound {
                key: "z".to_string()
            }
        );
    }

    #[test]
    fn push_front_leaves_the_old_view_intact() {
        let base = LayeredMap::new(layer(&[("a", 1)]));
        let child = base.push_front(layer(&[("a", 5)]));

        assert_eq!(*child.lookup("a").unwrap(), 5);
        assert_eq!(*base.lookup("a").unwrap(), 1);
        assert_eq!(base.layer_count(), 1);
        assert_eq!(child.layer_count(), 2);
    }

    #[test]
    fn pop_front_restores_the_parent_scope() {
        let base = LayeredMap::new(layer(&[("a", 1)]));
        let child = base.push_front(layer(&[("a", 5)]));
        let restored = child.pop_front().unwrap();
        assert_eq!(*restored.lookup("a").unwrap(), 1);
    }

    #[test]
    fn popping_the_last_layer_fails() {
        let view = LayeredMap::new(layer(&[("a", 1)]));
        let err = view.pop_front().unwrap_err();
        assert!(matches!(err, CofferError::PreconditionViolated { .. }));
    }

    #[test]
    fn insert_targets_only_the_front_layer() {
        let base = LayeredMap::new(layer(&[("a", 1)]));
        let mut child = base.push_front(layer(&[]));

        child.insert("a", 9);
        assert_eq!(*child.lookup("a").unwrap(), 9);
        // Popping the front reveals the untouched lower layer.
        assert_eq!(*child.pop_front().unwrap().lookup("a").unwrap(), 1);
    }

    #[test]
    fn insert_through_a_shared_front_is_copy_on_write() {
        let original = LayeredMap::new(layer(&[("a", 1)]));
        let mut sibling = original.clone();

        sibling.insert("b", 2);
        assert_eq!(*sibling.lookup("b").unwrap(), 2);
        assert!(original.lookup("b").is_err());
    }

    #[test]
    fn flatten_merges_front_wins() {
        let view = LayeredMap::from_layers(vec![
            layer(&[("a", 1), ("b", 2)]),
            layer(&[("a", 3), ("c", 4)]),
        ])
        .unwrap();

        let merged = view.flatten();
        assert_eq!(merged.len(), 3);
        assert_eq!(merged["a"], 1);
        assert_eq!(merged["c"], 4);
    }
}
