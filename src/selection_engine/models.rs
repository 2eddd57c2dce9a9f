use std::fmt;

use serde::{Deserialize, Serialize};

use crate::selection_engine::{
    algorithm::Algorithm,
    error::{PickerError, PickerResult},
    weights::{NullWeightProvider, WeightProvider},
};

// ---------------------------------------------------------------------------
// Item handles
// ---------------------------------------------------------------------------

/// Stable handle for one registered item.
///
/// Issued at collection construction from the item's position in the input
/// sequence. Two equal values at different positions get different handles,
/// so they stay distinct items for weighting and tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub usize);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An item together with its handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot<T> {
    pub id: ItemId,
    pub item: T,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Serializable part of the picker options.
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub algorithm: Algorithm,
    /// Weight of items the weight provider knows nothing about.
    pub default_weight: i64,
    /// `true` keeps every item selectable on every pick; `false` hands out
    /// each item once per cycle.
    pub allow_duplicates: bool,
    /// Number of full passes before the picker refuses to pick. `None` is unbounded.
    pub max_loops: Option<i64>,
    pub seed: Option<i64>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            algorithm: Algorithm::Random,
            default_weight: 1,
            allow_duplicates: true,
            max_loops: None,
            seed: None,
        }
    }
}

impl PickerConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> PickerResult<Self> {
        let config: PickerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> PickerResult<()> {
        if self.default_weight < 0 {
            return Err(PickerError::InvalidConfig(
                "Default weight must be non-negative".to_string(),
            ));
        }
        if matches!(self.max_loops, Some(n) if n < 0) {
            return Err(PickerError::InvalidConfig(
                "Max loops must be non-negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything an [`ItemPicker`](crate::ItemPicker) needs besides its items.
pub struct ItemPickerOptions<T> {
    pub config: PickerConfig,
    pub weights: Box<dyn WeightProvider<T>>,
}

impl<T> Default for ItemPickerOptions<T> {
    fn default() -> Self {
        ItemPickerOptions::from_config(PickerConfig::default())
    }
}

impl<T> fmt::Debug for ItemPickerOptions<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemPickerOptions")
            .field("config", &self.config)
            .field("has_weighted_items", &self.weights.has_weighted_items())
            .finish()
    }
}

impl<T> ItemPickerOptions<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: PickerConfig) -> Self {
        ItemPickerOptions { config, weights: Box::new(NullWeightProvider) }
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    pub fn default_weight(mut self, weight: i64) -> Self {
        self.config.default_weight = weight;
        self
    }

    pub fn allow_duplicates(mut self, allow: bool) -> Self {
        self.config.allow_duplicates = allow;
        self
    }

    pub fn max_loops(mut self, max_loops: i64) -> Self {
        self.config.max_loops = Some(max_loops);
        self
    }

    pub fn seed(mut self, seed: i64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn weights(mut self, weights: impl WeightProvider<T> + 'static) -> Self {
        self.weights = Box::new(weights);
        self
    }

    /// Resolved weight of one item: the provider's answer or the default weight.
    pub fn weight_of(&self, id: ItemId, item: &T) -> i64 {
        self.weights.weight(id, item).unwrap_or(self.config.default_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection_engine::weights::Weights;

    #[test]
    fn defaults_match_documented_values() {
        let config = PickerConfig::default();
        assert_eq!(config.algorithm, Algorithm::Random);
        assert_eq!(config.default_weight, 1);
        assert!(config.allow_duplicates);
        assert_eq!(config.max_loops, None);
        assert_eq!(config.seed, None);

        let options: ItemPickerOptions<&str> = ItemPickerOptions::new();
        assert!(!options.weights.has_weighted_items());
    }

    #[test]
    fn builder_sets_every_field() {
        let options: ItemPickerOptions<&str> = ItemPickerOptions::new()
            .algorithm(Algorithm::RoundRobin)
            .default_weight(5)
            .allow_duplicates(false)
            .max_loops(10)
            .seed(12345)
            .weights(Weights::new().with(ItemId(0), 3));

        assert_eq!(
            options.config,
            PickerConfig {
                algorithm: Algorithm::RoundRobin,
                default_weight: 5,
                allow_duplicates: false,
                max_loops: Some(10),
                seed: Some(12345),
            }
        );
        assert!(options.weights.has_weighted_items());
        assert_eq!(options.weight_of(ItemId(0), &"a"), 3);
        assert_eq!(options.weight_of(ItemId(1), &"b"), 5);
    }

    #[test]
    fn negative_default_weight_is_invalid() {
        let config = PickerConfig { default_weight: -1, ..PickerConfig::default() };
        assert_eq!(
            config.validate(),
            Err(PickerError::InvalidConfig("Default weight must be non-negative".into()))
        );
    }

    #[test]
    fn negative_max_loops_is_invalid() {
        let config = PickerConfig { max_loops: Some(-1), ..PickerConfig::default() };
        assert_eq!(
            config.validate(),
            Err(PickerError::InvalidConfig("Max loops must be non-negative".into()))
        );
    }

    #[test]
    fn zero_values_are_valid() {
        let config = PickerConfig { default_weight: 0, max_loops: Some(0), ..PickerConfig::default() };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_parses_partial_json() {
        let config = PickerConfig::from_json(r#"{"algorithm": "round_robin", "seed": 42}"#).unwrap();
        assert_eq!(config.algorithm, Algorithm::RoundRobin);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.default_weight, 1);
        assert!(config.allow_duplicates);
    }

    #[test]
    fn config_json_is_validated() {
        let err = PickerConfig::from_json(r#"{"max_loops": -3}"#).unwrap_err();
        assert!(matches!(err, PickerError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_is_an_invalid_config() {
        let err = PickerConfig::from_json(r#"{"algorithm": "shuffle"}"#).unwrap_err();
        assert!(matches!(err, PickerError::InvalidConfig(_)));
    }
}
