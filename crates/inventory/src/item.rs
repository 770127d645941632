use serde::{Deserialize, Serialize};

use gildedrose_core::{DomainError, DomainResult};

use crate::category::ItemCategory;
use crate::quality::{self, MAX_QUALITY, MIN_QUALITY};

/// A stocked item: name, days left to sell, and current quality.
///
/// The category is resolved from the name when the item is built and never
/// re-derived, so the name is read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemRecord", into = "ItemRecord")]
pub struct Item {
    name: String,
    sell_in: i64,
    quality: i64,
    category: ItemCategory,
}

/// Wire shape of an [`Item`]. The category is not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub name: String,
    pub sell_in: i64,
    pub quality: i64,
}

impl Item {
    /// Build an item without any range checks.
    pub fn new(name: impl Into<String>, sell_in: i64, quality: i64) -> Self {
        let name = name.into();
        let category = ItemCategory::classify(&name);
        Self {
            name,
            sell_in,
            quality,
            category,
        }
    }

    /// Build an item, rejecting a blank name or a non-legendary quality
    /// outside `[MIN_QUALITY, MAX_QUALITY]`.
    pub fn validated(name: impl Into<String>, sell_in: i64, quality: i64) -> DomainResult<Self> {
        let item = Self::new(name, sell_in, quality);
        if item.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if !item.category.is_legendary() && !(MIN_QUALITY..=MAX_QUALITY).contains(&quality) {
            return Err(DomainError::quality_out_of_range(item.name, quality));
        }
        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i64 {
        self.sell_in
    }

    pub fn quality(&self) -> i64 {
        self.quality
    }

    pub fn category(&self) -> ItemCategory {
        self.category
    }

    pub fn raise_quality(&mut self, amount: i64) {
        self.quality = quality::raise_quality(self.quality, amount);
    }

    pub fn lower_quality(&mut self) {
        self.quality = quality::lower_quality(self.quality);
    }

    /// Advance this item by one day.
    ///
    /// Ordering contract: the quality rule reads `sell_in` as it was at the
    /// start of the day, and only then is `sell_in` decremented. An item at
    /// `sell_in == 0` is therefore already past due in the update that takes it
    /// to `-1`. Legendary items are left untouched.
    pub fn age(&mut self) {
        if self.category.is_legendary() {
            return;
        }

        // 1. quality, against the start-of-day sell_in
        self.quality = self.category.next_quality(self.sell_in, self.quality);

        // 2. then the day passes
        self.sell_in = self.sell_in.saturating_sub(1);
    }

    /// Same as [`Item::age`], returning the aged copy and leaving `self` as is.
    #[must_use]
    pub fn aged(&self) -> Self {
        let mut next = self.clone();
        next.age();
        next
    }
}

impl From<ItemRecord> for Item {
    fn from(record: ItemRecord) -> Self {
        Self::new(record.name, record.sell_in, record.quality)
    }
}

impl From<Item> for ItemRecord {
    fn from(item: Item) -> Self {
        Self {
            name: item.name,
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
