//! Item categories and their daily quality rules.

use crate::quality::{lower_quality, raise_quality};

pub const LEGENDARY_NAME: &str = "Sulfuras, Hand of Ragnaros";
pub const EVENT_PASS_NAME: &str = "Backstage passes to a TAFKAL80ETC concert";
pub const AGING_GOOD_NAME: &str = "Aged Brie";
pub const CONJURED_NAME: &str = "Conjured Mana Cake";

/// Closed set of aging behaviours, resolved once from an item's name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    /// Never changes: neither quality nor sell_in move.
    Legendary,
    /// Gains value as the event nears, worthless once it has passed.
    EventPass,
    /// Gains value with age, twice as fast once past due.
    AgingGood,
    /// Loses value with age, twice as fast once past due.
    /// Conjured goods always lose value twice as fast.
    Perishable { conjured: bool },
}

impl ItemCategory {
    /// Classify by exact name match. Every name maps to some category.
    pub fn classify(name: &str) -> Self {
        match name {
            LEGENDARY_NAME => Self::Legendary,
            EVENT_PASS_NAME => Self::EventPass,
            AGING_GOOD_NAME => Self::AgingGood,
            CONJURED_NAME => Self::Perishable { conjured: true },
            _ => Self::Perishable { conjured: false },
        }
    }

    pub fn is_legendary(self) -> bool {
        matches!(self, Self::Legendary)
    }

    /// Quality after one day, judged on the `sell_in` value *before* that
    /// day's decrement.
    pub fn next_quality(self, sell_in: i64, quality: i64) -> i64 {
        match self {
            Self::Legendary => quality,
            Self::EventPass => match sell_in {
                i64::MIN..=0 => 0,
                1..=5 => raise_quality(quality, 3),
                6..=10 => raise_quality(quality, 2),
                _ => raise_quality(quality, 1),
            },
            Self::AgingGood => {
                if sell_in <= 0 {
                    raise_quality(quality, 2)
                } else {
                    raise_quality(quality, 1)
                }
            }
            Self::Perishable { conjured } => {
                let once = lower_quality(quality);
                if sell_in <= 0 || conjured {
                    lower_quality(once)
                } else {
                    once
                }
            }
        }
    }
}

impl core::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let label = match self {
            Self::Legendary => "legendary",
            Self::EventPass => "event_pass",
            Self::AgingGood => "aging_good",
            Self::Perishable { conjured: true } => "perishable(conjured)",
            Self::Perishable { conjured: false } => "perishable",
        };
        f.write_str(label)
    }
}
