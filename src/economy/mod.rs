//! Dungeon economy: puzzle sizing and rewards, item salvage, upgrades, pricing.
//!
//! Every formula is a pure function of its inputs. The ones that involve a
//! random draw take the caller's [`GameRng`].
//!
//! The free functions below use the standard [`EconomyConfig`]. Use
//! [`Economy`] directly for a tuned configuration.
//!
//! ## Example
//!
//! ```
//! use faction_sim::economy::{self, Item, ItemId, StatId};
//!
//! let item = Item::new(ItemId::new(1), "Ember Blade")
//!     .with_stat(StatId::Attack, 3)
//!     .with_stat(StatId::Defense, -1);
//!
//! assert_eq!(economy::attribute_total(&item), 2);
//! assert_eq!(economy::salvage_yield(&item), 1);
//! assert_eq!(economy::upgrade_cost(&item), 2);
//! assert_eq!(economy::item_gold_price(&item, 2), 8);
//!
//! let upgraded = economy::apply_upgrade(&item, StatId::Defense);
//! assert_eq!(upgraded.stat(StatId::Defense), 0);
//! assert_eq!(item.stat(StatId::Defense), -1);
//! ```

pub mod config;
pub mod formulas;
pub mod item;

pub use config::{ConfigError, EconomyConfig};
pub use formulas::{Economy, UpgradeOptions};
pub use item::{Item, ItemId, StatId, StatModifiers};

use crate::core::GameRng;

/// See [`Economy::puzzle_card_count`].
#[must_use]
pub fn puzzle_card_count(floor: u32) -> u32 {
    Economy::default().puzzle_card_count(floor)
}

/// See [`Economy::puzzle_max_flips`].
#[must_use]
pub fn puzzle_max_flips(card_count: u32, spirit: u32) -> u32 {
    Economy::default().puzzle_max_flips(card_count, spirit)
}

/// See [`Economy::puzzle_gold_reward`].
pub fn puzzle_gold_reward(floor: u32, rng: &mut GameRng) -> u64 {
    Economy::default().puzzle_gold_reward(floor, rng)
}

/// See [`Economy::puzzle_hp_loss`].
#[must_use]
pub fn puzzle_hp_loss(unmatched_pairs: u32) -> u32 {
    Economy::default().puzzle_hp_loss(unmatched_pairs)
}

/// See [`Economy::attribute_total`].
#[must_use]
pub fn attribute_total(item: &Item) -> i64 {
    Economy::default().attribute_total(item)
}

/// See [`Economy::salvage_yield`].
#[must_use]
pub fn salvage_yield(item: &Item) -> i64 {
    Economy::default().salvage_yield(item)
}

/// See [`Economy::upgrade_cost`].
#[must_use]
pub fn upgrade_cost(item: &Item) -> i64 {
    Economy::default().upgrade_cost(item)
}

/// See [`Economy::roll_upgrade_options`].
pub fn roll_upgrade_options(rng: &mut GameRng) -> UpgradeOptions {
    Economy::default().roll_upgrade_options(rng)
}

/// See [`Economy::item_gold_price`].
#[must_use]
pub fn item_gold_price(item: &Item, floor: u32) -> i64 {
    Economy::default().item_gold_price(item, floor)
}

/// See [`Economy::apply_upgrade`].
#[must_use]
pub fn apply_upgrade(item: &Item, stat: StatId) -> Item {
    Economy::default().apply_upgrade(item, stat)
}
