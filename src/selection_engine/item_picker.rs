//! The item picker: collection + algorithm + seed + loop accounting.
//!
//! A *loop* is as many picks as the collection held at construction,
//! whichever discipline the collection follows. Once `max_loops` loops have
//! been issued, every further pick fails with
//! [`PickerError::LoopLimitReached`] and leaves the picker untouched.
//!
//! `pick` takes `&mut self`; share a picker across threads only behind a
//! `Mutex`.

use std::fmt;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::selection_engine::{
    algorithm::PickerAlgorithm,
    collection::{ItemCollection, StaticItemCollection, UniqueItemCollection},
    error::{PickerError, PickerResult},
    models::ItemPickerOptions,
    number::SeedCursor,
};

pub struct ItemPicker<T> {
    items: Box<dyn ItemCollection<T>>,
    algorithm: Box<dyn PickerAlgorithm<T>>,
    options: ItemPickerOptions<T>,
    seed: SeedCursor,
    current_loop: u64,
    picked: u64,
    items_per_loop: usize,
}

impl<T: Clone + 'static> ItemPicker<T> {
    pub fn create<I: IntoIterator<Item = T>>(
        items: I,
        options: ItemPickerOptions<T>,
    ) -> PickerResult<Self> {
        options.config.validate()?;

        let items: Box<dyn ItemCollection<T>> = match options.config.allow_duplicates {
            true  => Box::new(StaticItemCollection::new(items)),
            false => Box::new(UniqueItemCollection::new(items)?),
        };
        let algorithm = options.config.algorithm.instantiate(&options);
        let items_per_loop = items.count();

        debug!(
            algorithm = algorithm.name(),
            allow_duplicates = options.config.allow_duplicates,
            items_per_loop,
            max_loops = ?options.config.max_loops,
            seeded = options.config.seed.is_some(),
            "created item picker"
        );

        Ok(ItemPicker {
            items,
            algorithm,
            seed: SeedCursor::new(options.config.seed),
            options,
            current_loop: 0,
            picked: 0,
            items_per_loop,
        })
    }
}

impl<T> ItemPicker<T> {
    pub fn pick(&mut self) -> PickerResult<T> {
        if let Some(max_loops) = self.exhausted_at() {
            debug!(max_loops, picked = self.picked, "loop limit reached");
            return Err(PickerError::LoopLimitReached { max_loops });
        }

        let item = self
            .algorithm
            .pick(self.items.as_mut(), &self.options, &mut self.seed)?;

        self.picked += 1;
        trace!(picked = self.picked, remaining = self.items.count(), "picked item");

        // Empty pickers never get here: the algorithm rejects them first.
        if self.picked % self.items_per_loop as u64 == 0 {
            self.current_loop += 1;
            debug!(current_loop = self.current_loop, "loop complete");
        }
        Ok(item)
    }

    /// Iterate over picks until the loop limit is reached.
    ///
    /// Any other error is yielded once and ends the iteration.
    pub fn picks(&mut self) -> Picks<'_, T> {
        Picks { picker: self, done: false }
    }

    pub fn current_loop(&self) -> u64 {
        self.current_loop
    }

    pub fn picked_count(&self) -> u64 {
        self.picked
    }

    pub fn items_per_loop(&self) -> usize {
        self.items_per_loop
    }

    /// Seed the next randomized pick will use.
    pub fn seed(&self) -> Option<i64> {
        self.seed.current()
    }

    pub fn options(&self) -> &ItemPickerOptions<T> {
        &self.options
    }

    pub fn algorithm_name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted_at().is_some()
    }

    fn exhausted_at(&self) -> Option<i64> {
        self.options
            .config
            .max_loops
            .filter(|&max| self.current_loop >= max as u64)
    }
}

impl<T> fmt::Debug for ItemPicker<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemPicker")
            .field("algorithm", &self.algorithm.name())
            .field("options", &self.options)
            .field("seed", &self.seed)
            .field("current_loop", &self.current_loop)
            .field("picked", &self.picked)
            .field("items_per_loop", &self.items_per_loop)
            .finish()
    }
}

/// Iterator returned by [`ItemPicker::picks`].
pub struct Picks<'a, T> {
    picker: &'a mut ItemPicker<T>,
    done: bool,
}

impl<T> Iterator for Picks<'_, T> {
    type Item = PickerResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.picker.pick() {
            Ok(item) => Some(Ok(item)),
            Err(PickerError::LoopLimitReached { .. }) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<T> FusedIterator for Picks<'_, T> {}
