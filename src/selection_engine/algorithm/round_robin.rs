use crate::selection_engine::{
    algorithm::PickerAlgorithm,
    collection::ItemCollection,
    error::{PickerError, PickerResult},
    models::ItemPickerOptions,
    number::SeedCursor,
};

/// Strict rotation through the collection. Never consumes randomness.
#[derive(Debug, Clone, Default)]
pub struct RoundRobinAlgorithm {
    /// Index handed out by the previous pick; `None` before the first one.
    cursor: Option<usize>,
}

impl RoundRobinAlgorithm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> PickerAlgorithm<T> for RoundRobinAlgorithm {
    fn pick(
        &mut self,
        items: &mut dyn ItemCollection<T>,
        _options: &ItemPickerOptions<T>,
        _seed: &mut SeedCursor,
    ) -> PickerResult<T> {
        let count = items.count();
        if count == 0 {
            return Err(PickerError::EmptySelection);
        }

        let next = match self.cursor {
            Some(i) if i + 1 < count => i + 1,
            _ => 0,
        };
        self.cursor = Some(next);
        items.get(next)
    }

    fn name(&self) -> &'static str {
        "round_robin"
    }
}
