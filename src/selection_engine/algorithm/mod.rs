//! Selection policies.
//!
//! Every algorithm implements [`PickerAlgorithm`] and is resolved once, when
//! the picker is built:
//!
//! | `Algorithm`  | explicit weights? | implementation            |
//! |--------------|-------------------|---------------------------|
//! | `RoundRobin` | ignored           | [`RoundRobinAlgorithm`]   |
//! | `Random`     | no                | [`RandomAlgorithm`]       |
//! | `Random`     | yes               | [`ProbabilisticAlgorithm`]|
//! | `Weighted`   | ignored           | [`ProbabilisticAlgorithm`]|
//!
//! `Random` without weights skips cumulative-weight bookkeeping; with equal
//! default weights both implementations have the same distribution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::selection_engine::{
    collection::ItemCollection,
    error::PickerResult,
    models::ItemPickerOptions,
    number::SeedCursor,
};

pub mod probabilistic;
pub mod random;
pub mod round_robin;

pub use probabilistic::ProbabilisticAlgorithm;
pub use random::RandomAlgorithm;
pub use round_robin::RoundRobinAlgorithm;

/// One selection policy. Each picker owns its own instance, so any state an
/// algorithm keeps belongs to exactly one picker.
pub trait PickerAlgorithm<T> {
    /// Select one item. Randomized algorithms draw with `seed` and advance it.
    fn pick(
        &mut self,
        items: &mut dyn ItemCollection<T>,
        options: &ItemPickerOptions<T>,
        seed: &mut SeedCursor,
    ) -> PickerResult<T>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    RoundRobin,
    #[default]
    Random,
    Weighted,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::RoundRobin => write!(f, "round-robin"),
            Algorithm::Random     => write!(f, "random"),
            Algorithm::Weighted   => write!(f, "weighted"),
        }
    }
}

impl Algorithm {
    pub fn instantiate<T: Clone + 'static>(
        self,
        options: &ItemPickerOptions<T>,
    ) -> Box<dyn PickerAlgorithm<T>> {
        match self {
            Algorithm::RoundRobin => Box::new(RoundRobinAlgorithm::new()),
            Algorithm::Weighted   => Box::new(ProbabilisticAlgorithm),
            Algorithm::Random => match options.weights.has_weighted_items() {
                true  => Box::new(ProbabilisticAlgorithm),
                false => Box::new(RandomAlgorithm),
            },
        }
    }
}
