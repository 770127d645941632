//! Batch advance over a caller-owned collection of items.

use tracing::trace;

use crate::item::Item;

/// Applies one day of aging to every item of a borrowed collection.
///
/// The caller keeps ownership of the items and reads them back once the
/// updater is dropped (or through [`InventoryUpdater::items`]).
#[derive(Debug)]
pub struct InventoryUpdater<'a> {
    items: &'a mut [Item],
}

impl<'a> InventoryUpdater<'a> {
    pub fn new(items: &'a mut [Item]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Age every item once, in input order.
    #[tracing::instrument(level = "debug", skip(self), fields(items = self.items.len()))]
    pub fn advance_one_day(&mut self) {
        advance_one_day(self.items);
    }
}

/// Age every item of `items` once, in place and in order.
pub fn advance_one_day(items: &mut [Item]) {
    for item in items.iter_mut() {
        let (sell_in, quality) = (item.sell_in(), item.quality());
        item.age();
        trace!(
            item = item.name(),
            category = %item.category(),
            sell_in_before = sell_in,
            sell_in_after = item.sell_in(),
            quality_before = quality,
            quality_after = item.quality(),
            "item aged"
        );
    }
}

/// Aged copies of `items`, same order; the input is left untouched.
pub fn advanced(items: &[Item]) -> Vec<Item> {
    items.iter().map(Item::aged).collect()
}
