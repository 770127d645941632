//! Inventory aging domain module.
//!
//! Daily quality/sell-in rules for stocked items, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod category;
pub mod item;
pub mod quality;
pub mod updater;

pub use category::ItemCategory;
pub use gildedrose_core::{DomainError, DomainResult};
pub use item::{Item, ItemRecord};
pub use quality::{LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use updater::{InventoryUpdater, advance_one_day, advanced};
