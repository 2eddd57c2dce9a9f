use crate::selection_engine::{
    algorithm::PickerAlgorithm,
    collection::ItemCollection,
    error::{PickerError, PickerResult},
    models::ItemPickerOptions,
    number::SeedCursor,
};

/// Uniform draw over the current collection.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAlgorithm;

impl<T> PickerAlgorithm<T> for RandomAlgorithm {
    fn pick(
        &mut self,
        items: &mut dyn ItemCollection<T>,
        _options: &ItemPickerOptions<T>,
        seed: &mut SeedCursor,
    ) -> PickerResult<T> {
        if items.is_empty() {
            return Err(PickerError::EmptySelection);
        }
        let max_index = items.count().saturating_sub(1) as i64;
        let index = seed.draw(0, max_index)?;
        items.get(index as usize)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
