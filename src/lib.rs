//! # picker
//!
//! Pick one item at a time from a finite set, by round-robin, uniform random
//! or weighted draw, optionally reproducible from a seed.
//!
//! ## How it works
//!
//! 1. Build an [`ItemPickerOptions`] (or parse a [`PickerConfig`] from JSON)
//!    choosing the [`Algorithm`], the default weight, whether items may repeat
//!    within a cycle, an optional loop bound and an optional seed.
//! 2. Call [`create_picker`] with your items. The items are stored in a
//!    0-indexed collection and each gets a stable [`ItemId`] handle.
//! 3. Call [`ItemPicker::pick`] as often as you like. Each call returns one
//!    item, or [`PickerError::LoopLimitReached`] once a bounded picker is done.
//!
//! ## Key features
//!
//! - **Deterministic**: `.seed(n)` drives a 32-bit LCG; two pickers
//!   with the same items, options and seed produce the same sequence.
//! - **Two collection disciplines**: with `allow_duplicates(false)` every
//!   item comes out exactly once per cycle before any item repeats.
//! - **Weights by identity**: [`Weights`] is keyed by item handle, so equal
//!   values at different positions stay distinct. [`ValueWeights`] opts into
//!   value semantics for plain values.
//!
//! Seeded mode trades unpredictability for reproducibility. Nothing here is
//! suitable as a source of secure randomness.
//!
//! ## Quick start
//!
//! ```rust
//! use picker::{create_picker, Algorithm, ItemId, ItemPickerOptions, PickerError, Weights};
//!
//! // Round-robin over four items, stopping after two full passes:
//! let mut rr = create_picker(
//!     ["a", "b", "c", "d"],
//!     ItemPickerOptions::new().algorithm(Algorithm::RoundRobin).max_loops(2),
//! ).unwrap();
//! let picked: Vec<_> = rr.picks().map(Result::unwrap).collect();
//! assert_eq!(picked, ["a", "b", "c", "d", "a", "b", "c", "d"]);
//! assert!(matches!(rr.pick(), Err(PickerError::LoopLimitReached { .. })));
//!
//! // Weighted, reproducible draws. Weights follow the item's input position:
//! let weights = Weights::new().with(ItemId(0), 9).with(ItemId(1), 1);
//! let mut weighted = create_picker(
//!     ["common", "rare"],
//!     ItemPickerOptions::new().seed(42).weights(weights),
//! ).unwrap();
//! let item = weighted.pick().unwrap();
//! assert!(item == "common" || item == "rare");
//! ```

pub mod selection_engine;

// Convenience re-exports so callers can use `picker::create_picker`
// directly without reaching into `selection_engine::`.
pub use selection_engine::{
    create_picker, lcg_step, pick_number_between, random_int, Algorithm, ItemCollection,
    ItemId, ItemPicker, ItemPickerOptions, NullWeightProvider, NumberPicker,
    NumberPickerOptions, Picker, PickerConfig, PickerError, PickerResult, Picks,
    StaticItemCollection, UniqueItemCollection, ValueWeights, WeightProvider, Weights,
};
