use crate::selection_engine::{
    error::PickerResult,
    item_picker::ItemPicker,
    models::ItemPickerOptions,
    number::{NumberPicker, NumberPickerOptions},
};

/// Anything that hands out one value per call.
pub trait Picker {
    type Item;

    fn pick(&mut self) -> PickerResult<Self::Item>;
}

impl<T> Picker for ItemPicker<T> {
    type Item = T;

    fn pick(&mut self) -> PickerResult<T> {
        ItemPicker::pick(self)
    }
}

impl Picker for NumberPicker {
    type Item = i64;

    fn pick(&mut self) -> PickerResult<i64> {
        NumberPicker::pick(self)
    }
}

/// Build a picker over `items`.
///
/// `allow_duplicates` picks the collection discipline; `algorithm` plus the
/// weight provider picks the selection policy.
pub fn create_picker<T, I>(items: I, options: ItemPickerOptions<T>) -> PickerResult<ItemPicker<T>>
where
    T: Clone + 'static,
    I: IntoIterator<Item = T>,
{
    ItemPicker::create(items, options)
}

/// Build a picker over the integers in `[min, max]`.
pub fn pick_number_between(
    min: i64,
    max: i64,
    options: NumberPickerOptions,
) -> PickerResult<NumberPicker> {
    NumberPicker::create(min, max, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection_engine::algorithm::Algorithm;

    fn drain<P: Picker>(picker: &mut P, n: usize) -> Vec<P::Item> {
        (0..n).filter_map(|_| picker.pick().ok()).collect()
    }

    #[test]
    fn both_pickers_share_one_interface() {
        let mut items = create_picker(
            ["a", "b"],
            ItemPickerOptions::new().algorithm(Algorithm::RoundRobin),
        )
        .unwrap();
        assert_eq!(drain(&mut items, 3), vec!["a", "b", "a"]);

        let mut numbers = pick_number_between(3, 3, NumberPickerOptions::default()).unwrap();
        assert_eq!(drain(&mut numbers, 2), vec![3, 3]);
    }

    #[test]
    fn number_picker_stays_in_bounds() {
        let mut picker = pick_number_between(-3, 3, NumberPickerOptions::seeded(8)).unwrap();
        for v in drain(&mut picker, 500) {
            assert!((-3..=3).contains(&v));
        }
    }
}
