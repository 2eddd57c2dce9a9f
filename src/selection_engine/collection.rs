//! Item containers and their indexing disciplines.
//!
//! Both collections normalize their input into a 0-indexed sequence of
//! [`Slot`]s, preserving order and discarding whatever keys the source had.
//!
//! - [`StaticItemCollection`] never changes after construction.
//! - [`UniqueItemCollection`] consumes an item on every [`get`](ItemCollection::get)
//!   and refills itself from its original snapshot once empty, so each item
//!   comes out exactly once per cycle. It is stateful and must not be shared
//!   between concurrent callers.

use tracing::trace;

use crate::selection_engine::{
    error::{PickerError, PickerResult},
    models::{ItemId, Slot},
};

/// Common contract every algorithm relies on.
pub trait ItemCollection<T> {
    /// Number of items currently selectable.
    fn count(&self) -> usize;

    /// Resolve `index` to its item. May mutate the collection.
    fn get(&mut self, index: usize) -> PickerResult<T>;

    /// Slots in current order.
    fn slots(&self) -> &[Slot<T>];

    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

fn register<T, I: IntoIterator<Item = T>>(items: I) -> Vec<Slot<T>> {
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| Slot { id: ItemId(i), item })
        .collect()
}

// ---------------------------------------------------------------------------
// Persistent collection
// ---------------------------------------------------------------------------

/// Items never disappear; indexing is read-only.
#[derive(Debug, Clone)]
pub struct StaticItemCollection<T> {
    slots: Vec<Slot<T>>,
    len: usize,
}

impl<T> StaticItemCollection<T> {
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        let slots = register(items);
        let len = slots.len();
        StaticItemCollection { slots, len }
    }
}

impl<T: Clone> ItemCollection<T> for StaticItemCollection<T> {
    fn count(&self) -> usize {
        self.len
    }

    fn get(&mut self, index: usize) -> PickerResult<T> {
        self.slots
            .get(index)
            .map(|slot| slot.item.clone())
            .ok_or(PickerError::IndexOutOfRange { index, count: self.len })
    }

    fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }
}

// ---------------------------------------------------------------------------
// Cycling-unique collection
// ---------------------------------------------------------------------------

/// Every item comes out once before any item repeats.
#[derive(Debug, Clone)]
pub struct UniqueItemCollection<T> {
    slots: Vec<Slot<T>>,
    initial: Vec<Slot<T>>,
}

impl<T: Clone> UniqueItemCollection<T> {
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> PickerResult<Self> {
        let slots = register(items);
        if slots.is_empty() {
            return Err(PickerError::EmptyInput);
        }
        let initial = slots.clone();
        Ok(UniqueItemCollection { slots, initial })
    }
}

impl<T: Clone> ItemCollection<T> for UniqueItemCollection<T> {
    fn count(&self) -> usize {
        self.slots.len()
    }

    fn get(&mut self, index: usize) -> PickerResult<T> {
        if index >= self.slots.len() {
            return Err(PickerError::IndexOutOfRange { index, count: self.slots.len() });
        }

        // `Vec::remove` shifts later slots down, keeping indices dense.
        let Slot { item, .. } = self.slots.remove(index);

        if self.slots.is_empty() {
            trace!(items = self.initial.len(), "cycle complete, restoring snapshot");
            self.slots = self.initial.clone();
        }
        Ok(item)
    }

    fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }
}
