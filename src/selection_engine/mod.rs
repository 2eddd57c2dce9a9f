//! Selection engine — number generation, item collections, algorithms, pickers.
//!
//! ## Module overview
//!
//! | Module        | Purpose |
//! |---------------|---------|
//! | `error`       | `PickerError` and the `PickerResult` alias |
//! | `models`      | Shared types: item handles, slots, configuration, options |
//! | `number`      | Entropy and seeded LCG integer draws; `NumberPicker` |
//! | `weights`     | Weight providers keyed by handle or by value |
//! | `collection`  | Persistent and cycling-unique item collections |
//! | `algorithm`   | Round-robin, uniform random and probabilistic selection |
//! | `item_picker` | Orchestration: loop accounting, seed ownership, limits |
//! | `generator`   | Entry points `create_picker()` / `pick_number_between()` |

pub mod algorithm;
pub mod collection;
pub mod error;
pub mod generator;
pub mod item_picker;
pub mod models;
pub mod number;
pub mod weights;

pub use algorithm::{Algorithm, PickerAlgorithm};
pub use collection::{ItemCollection, StaticItemCollection, UniqueItemCollection};
pub use error::{PickerError, PickerResult};
pub use generator::{create_picker, pick_number_between, Picker};
pub use item_picker::{ItemPicker, Picks};
pub use models::{ItemId, ItemPickerOptions, PickerConfig, Slot};
pub use number::{lcg_step, random_int, NumberPicker, NumberPickerOptions, SeedCursor};
pub use weights::{NullWeightProvider, ValueWeights, WeightProvider, Weights};
