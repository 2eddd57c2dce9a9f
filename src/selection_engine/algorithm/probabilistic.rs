use crate::selection_engine::{
    algorithm::PickerAlgorithm,
    collection::ItemCollection,
    error::{PickerError, PickerResult},
    models::ItemPickerOptions,
    number::SeedCursor,
};

/// Weighted draw over the current collection.
///
/// Item `i` is chosen iff `cumulative[i - 1] <= r < cumulative[i]`, where `r`
/// is drawn uniformly from `[0, total)`. Scan order follows collection order,
/// so weight alone decides each item's share.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbabilisticAlgorithm;

/// Running weight totals in collection order.
pub fn cumulative_weights<T>(
    items: &dyn ItemCollection<T>,
    options: &ItemPickerOptions<T>,
) -> PickerResult<Vec<i64>> {
    let mut total: i64 = 0;
    items
        .slots()
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let weight = options.weight_of(slot.id, &slot.item);
            if weight < 0 {
                return Err(PickerError::NegativeWeight { index, weight });
            }
            total = total
                .checked_add(weight)
                .ok_or(PickerError::WeightOverflow { index })?;
            Ok(total)
        })
        .collect()
}

impl<T> PickerAlgorithm<T> for ProbabilisticAlgorithm {
    fn pick(
        &mut self,
        items: &mut dyn ItemCollection<T>,
        options: &ItemPickerOptions<T>,
        seed: &mut SeedCursor,
    ) -> PickerResult<T> {
        if items.is_empty() {
            return Err(PickerError::EmptySelection);
        }

        let cumulative = cumulative_weights(&*items, options)?;
        let total = cumulative.last().copied().unwrap_or(0);
        if total == 0 {
            return Err(PickerError::ZeroTotalWeight);
        }

        let r = seed.draw(0, total - 1)?;
        match cumulative.iter().position(|&c| r < c) {
            Some(index) => items.get(index),
            None => unreachable!("draw {r} fell outside total weight {total}"),
        }
    }

    fn name(&self) -> &'static str {
        "probabilistic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection_engine::{
        collection::{StaticItemCollection, UniqueItemCollection},
        models::ItemId,
        weights::{ValueWeights, Weights},
    };

    fn weighted(pairs: [(&'static str, i64); 4]) -> ItemPickerOptions<&'static str> {
        ItemPickerOptions::new().weights(ValueWeights::from_pairs(pairs))
    }

    #[test]
    fn cumulative_weights_accumulate_in_order() {
        let items = StaticItemCollection::new(["a", "b", "c", "d"]);
        let options = weighted([("a", 10), ("b", 20), ("c", 30), ("d", 40)]);
        assert_eq!(cumulative_weights(&items, &options), Ok(vec![10, 30, 60, 100]));
    }

    #[test]
    fn unweighted_items_use_default_weight() {
        let items = StaticItemCollection::new(["a", "b", "c"]);
        let options: ItemPickerOptions<&str> = ItemPickerOptions::new()
            .default_weight(3)
            .weights(Weights::new().with(ItemId(1), 0));
        assert_eq!(cumulative_weights(&items, &options), Ok(vec![3, 3, 6]));
    }

    #[test]
    fn zero_weight_items_are_never_picked() {
        let mut items = StaticItemCollection::new(["a", "b", "c"]);
        let options: ItemPickerOptions<&str> = ItemPickerOptions::new()
            .weights(Weights::new().with(ItemId(0), 0).with(ItemId(2), 0));
        let mut seed = SeedCursor::default();
        for _ in 0..200 {
            assert_eq!(ProbabilisticAlgorithm.pick(&mut items, &options, &mut seed), Ok("b"));
        }
    }

    #[test]
    fn negative_weight_is_rejected() {
        let mut items = StaticItemCollection::new(["a", "b", "c", "d"]);
        let options = weighted([("a", 10), ("b", -5), ("c", 30), ("d", 40)]);
        let err = ProbabilisticAlgorithm
            .pick(&mut items, &options, &mut SeedCursor::default())
            .unwrap_err();
        assert_eq!(err, PickerError::NegativeWeight { index: 1, weight: -5 });
    }

    #[test]
    fn all_zero_weights_are_rejected() {
        let mut items = StaticItemCollection::new(["a", "b", "c", "d"]);
        let options = weighted([("a", 0), ("b", 0), ("c", 0), ("d", 0)]);
        let err = ProbabilisticAlgorithm
            .pick(&mut items, &options, &mut SeedCursor::new(Some(1)))
            .unwrap_err();
        assert_eq!(err, PickerError::ZeroTotalWeight);
    }

    #[test]
    fn failed_pick_does_not_advance_seed() {
        let mut items = StaticItemCollection::new(["a", "b", "c", "d"]);
        let options = weighted([("a", 0), ("b", 0), ("c", 0), ("d", 0)]);
        let mut seed = SeedCursor::new(Some(1));
        let _ = ProbabilisticAlgorithm.pick(&mut items, &options, &mut seed);
        assert_eq!(seed.current(), Some(1));
    }

    #[test]
    fn overflowing_total_is_rejected() {
        let mut items = StaticItemCollection::new([1u8, 2]);
        let options: ItemPickerOptions<u8> = ItemPickerOptions::new().default_weight(i64::MAX);
        let err = ProbabilisticAlgorithm
            .pick(&mut items, &options, &mut SeedCursor::default())
            .unwrap_err();
        assert_eq!(err, PickerError::WeightOverflow { index: 1 });
    }

    #[test]
    fn identical_values_keep_separate_weights() {
        let mut items = StaticItemCollection::new(["x", "x"]);
        let options: ItemPickerOptions<&str> =
            ItemPickerOptions::new().weights(Weights::new().with(ItemId(0), 0).with(ItemId(1), 1));
        let mut seed = SeedCursor::new(Some(3));
        for _ in 0..50 {
            let cumulative = cumulative_weights(&items, &options).unwrap();
            assert_eq!(cumulative, vec![0, 1]);
            assert_eq!(ProbabilisticAlgorithm.pick(&mut items, &options, &mut seed), Ok("x"));
        }
    }

    #[test]
    fn weights_follow_items_through_unique_cycles() {
        let mut items = UniqueItemCollection::new(["a", "b", "c"]).unwrap();
        let options = ItemPickerOptions::new()
            .weights(ValueWeights::from_pairs([("a", 1), ("b", 1), ("c", 1)]));
        let mut seed = SeedCursor::new(Some(2024));
        for _ in 0..10 {
            let mut cycle: Vec<&str> = (0..3)
                .map(|_| ProbabilisticAlgorithm.pick(&mut items, &options, &mut seed).unwrap())
                .collect();
            cycle.sort_unstable();
            assert_eq!(cycle, vec!["a", "b", "c"]);
        }
    }
}
