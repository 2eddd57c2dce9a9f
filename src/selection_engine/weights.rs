//! Weight sources consulted by the probabilistic algorithm.
//!
//! | Provider             | Keyed by        | Bounds on `T`  |
//! |----------------------|-----------------|----------------|
//! | `NullWeightProvider` | nothing         | none           |
//! | `Weights`            | [`ItemId`]      | none           |
//! | `ValueWeights<T>`    | the item value  | `Eq + Hash`    |
//!
//! `Weights` is the default choice. It gives identity semantics: equal values
//! at different positions can carry different weights. `ValueWeights` opts
//! into value semantics for plain values such as strings or numbers, where
//! equal values are meant to be the same item.

use std::collections::HashMap;
use std::hash::Hash;

use crate::selection_engine::models::ItemId;

/// Supplies per-item weights. The engine never mutates a provider.
pub trait WeightProvider<T> {
    /// Explicit weight of an item, or `None` to fall back on the default weight.
    fn weight(&self, id: ItemId, item: &T) -> Option<i64>;

    /// Whether any item carries an explicit weight.
    fn has_weighted_items(&self) -> bool;
}

/// Knows no weights; every item uses the default weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullWeightProvider;

impl<T> WeightProvider<T> for NullWeightProvider {
    fn weight(&self, _id: ItemId, _item: &T) -> Option<i64> {
        None
    }

    fn has_weighted_items(&self) -> bool {
        false
    }
}

// ---------------------------------------------------------------------------
// Handle-keyed weights
// ---------------------------------------------------------------------------

/// Side table of weights keyed by item handle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Weights {
    by_id: HashMap<ItemId, i64>,
}

impl Weights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_weight(&mut self, id: ItemId, weight: i64) {
        self.by_id.insert(id, weight);
    }

    pub fn with(mut self, id: ItemId, weight: i64) -> Self {
        self.set_weight(id, weight);
        self
    }

    pub fn get(&self, id: ItemId) -> Option<i64> {
        self.by_id.get(&id).copied()
    }
}

impl FromIterator<(ItemId, i64)> for Weights {
    fn from_iter<I: IntoIterator<Item = (ItemId, i64)>>(iter: I) -> Self {
        Weights { by_id: iter.into_iter().collect() }
    }
}

impl<T> WeightProvider<T> for Weights {
    fn weight(&self, id: ItemId, _item: &T) -> Option<i64> {
        self.get(id)
    }

    fn has_weighted_items(&self) -> bool {
        !self.by_id.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Value-keyed weights
// ---------------------------------------------------------------------------

/// Weights keyed by item value, the opt-in for value semantics.
///
/// Every item equal to a key shares its weight, whatever its position. Use
/// [`Weights`] when items must be told apart by identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueWeights<T: Eq + Hash> {
    by_value: HashMap<T, i64>,
}

impl<T: Eq + Hash> Default for ValueWeights<T> {
    fn default() -> Self {
        ValueWeights { by_value: HashMap::new() }
    }
}

impl<T: Eq + Hash> ValueWeights<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(item, weight)` pairs; later pairs overwrite earlier ones.
    pub fn from_pairs<I: IntoIterator<Item = (T, i64)>>(pairs: I) -> Self {
        let mut weights = Self::new();
        for (item, weight) in pairs {
            weights.set_weight(item, weight);
        }
        weights
    }

    pub fn set_weight(&mut self, item: T, weight: i64) {
        self.by_value.insert(item, weight);
    }

    pub fn get(&self, item: &T) -> Option<i64> {
        self.by_value.get(item).copied()
    }
}

impl<T: Eq + Hash> WeightProvider<T> for ValueWeights<T> {
    fn weight(&self, _id: ItemId, item: &T) -> Option<i64> {
        self.get(item)
    }

    fn has_weighted_items(&self) -> bool {
        !self.by_value.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_provider_has_no_weights() {
        let provider = NullWeightProvider;
        assert_eq!(WeightProvider::<&str>::weight(&provider, ItemId(0), &"a"), None);
        assert!(!WeightProvider::<&str>::has_weighted_items(&provider));
    }

    #[test]
    fn weights_start_empty() {
        let weights = Weights::new();
        assert!(!WeightProvider::<u8>::has_weighted_items(&weights));
    }

    #[test]
    fn weights_are_keyed_by_handle_not_value() {
        let weights = Weights::new().with(ItemId(0), 10).with(ItemId(2), 30);
        // Same value, different handles.
        assert_eq!(weights.weight(ItemId(0), &"x"), Some(10));
        assert_eq!(weights.weight(ItemId(1), &"x"), None);
        assert_eq!(weights.weight(ItemId(2), &"x"), Some(30));
        assert!(WeightProvider::<&str>::has_weighted_items(&weights));
    }

    #[test]
    fn later_weights_overwrite_earlier_ones() {
        let mut weights = Weights::new();
        weights.set_weight(ItemId(1), 10);
        weights.set_weight(ItemId(1), 20);
        assert_eq!(weights.get(ItemId(1)), Some(20));
        assert_eq!(weights.get(ItemId(0)), None);
    }

    #[test]
    fn weights_collect_from_pairs() {
        let weights: Weights = [(ItemId(0), 1), (ItemId(1), 2)].into_iter().collect();
        assert_eq!(weights.get(ItemId(1)), Some(2));
    }

    #[test]
    fn value_weights_from_pairs() {
        let weights = ValueWeights::from_pairs([("item1", 10), ("item2", 20), ("item3", 30)]);
        assert_eq!(weights.get(&"item1"), Some(10));
        assert_eq!(weights.get(&"item3"), Some(30));
        assert_eq!(weights.get(&"item4"), None);
        assert!(weights.has_weighted_items());
    }

    #[test]
    fn value_weights_ignore_handles() {
        let weights = ValueWeights::from_pairs([(7u32, 70)]);
        assert_eq!(weights.weight(ItemId(0), &7), Some(70));
        assert_eq!(weights.weight(ItemId(9), &7), Some(70));
    }

    #[test]
    fn value_weights_report_weighted_items_after_set() {
        let mut weights = ValueWeights::new();
        assert!(!weights.has_weighted_items());
        weights.set_weight(String::from("item"), 10);
        assert!(weights.has_weighted_items());
    }
}
