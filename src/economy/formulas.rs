//! Puzzle sizing/reward and item salvage/upgrade/pricing formulas.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::{ConfigError, EconomyConfig};
use super::item::{Item, StatId};
use crate::core::GameRng;

/// Upgrade choices offered to the player: every stat but one.
pub type UpgradeOptions = SmallVec<[StatId; 4]>;

/// Economy formulas bound to a validated configuration.
///
/// Serializes as its [`EconomyConfig`]; deserializing runs the same checks
/// as [`Economy::new`].
///
/// ```
/// use faction_sim::economy::{Economy, EconomyConfig};
///
/// let economy = Economy::new(EconomyConfig::default()).unwrap();
/// assert_eq!(economy.puzzle_card_count(3), 14);
/// assert_eq!(economy.puzzle_max_flips(14, 2), 9);
///
/// let inverted = EconomyConfig::default().with_gold_multiplier(6, 2);
/// assert!(Economy::new(inverted).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EconomyConfig", into = "EconomyConfig")]
pub struct Economy {
    config: EconomyConfig,
}

impl TryFrom<EconomyConfig> for Economy {
    type Error = ConfigError;

    fn try_from(config: EconomyConfig) -> Result<Self, Self::Error> {
        Self::new(config)
    }
}

impl From<Economy> for EconomyConfig {
    fn from(economy: Economy) -> Self {
        economy.config
    }
}

impl Economy {
    /// Bind the formulas to `config`, rejecting configurations they cannot use.
    pub fn new(config: EconomyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &EconomyConfig {
        &self.config
    }

    /// Cards on a floor: `ceil((base + floor) / 2) * 2`. Always even.
    ///
    /// Saturates at the largest even `u32` for floors deep enough to overflow.
    #[must_use]
    pub fn puzzle_card_count(&self, floor: u32) -> u32 {
        let count = (u64::from(self.config.base_card_count) + u64::from(floor)).div_ceil(2) * 2;
        u32::try_from(count).unwrap_or(u32::MAX - 1)
    }

    /// Flip budget: one attempt per pair plus a spirit bonus.
    #[must_use]
    pub fn puzzle_max_flips(&self, card_count: u32, spirit: u32) -> u32 {
        (card_count / 2).saturating_add(spirit)
    }

    /// Gold for clearing a floor: `floor * m`, `m` uniform over the multiplier range.
    pub fn puzzle_gold_reward(&self, floor: u32, rng: &mut GameRng) -> u64 {
        let range = self.config.gold_multiplier_min..=self.config.gold_multiplier_max;
        let multiplier = rng.gen_range_inclusive(range);
        u64::from(floor).saturating_mul(multiplier)
    }

    /// Hit points lost: one per unmatched pair.
    #[must_use]
    pub fn puzzle_hp_loss(&self, unmatched_pairs: u32) -> u32 {
        unmatched_pairs
    }

    /// Signed sum of an item's modifiers.
    #[must_use]
    pub fn attribute_total(&self, item: &Item) -> i64 {
        item.stat_modifiers.values().sum()
    }

    /// Gold from salvaging: half the total, rounded down, never negative.
    #[must_use]
    pub fn salvage_yield(&self, item: &Item) -> i64 {
        self.attribute_total(item).div_euclid(2).max(0)
    }

    /// Upgrade cost: the total, never below the minimum.
    #[must_use]
    pub fn upgrade_cost(&self, item: &Item) -> i64 {
        self.attribute_total(item).max(self.config.min_upgrade_cost)
    }

    /// Every stat except one uniformly chosen stat, in canonical order.
    pub fn roll_upgrade_options(&self, rng: &mut GameRng) -> UpgradeOptions {
        let excluded = rng.gen_index(StatId::ALL.len());
        StatId::ALL
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != excluded)
            .map(|(_, &stat)| stat)
            .collect()
    }

    /// Shop price from the sign of each modifier plus floor depth.
    ///
    /// Zero-valued modifiers count as neither positive nor negative.
    #[must_use]
    pub fn item_gold_price(&self, item: &Item, floor: u32) -> i64 {
        let (positive, negative) = item
            .stat_modifiers
            .values()
            .fold((0i64, 0i64), |(pos, neg), &v| match v.signum() {
                1 => (pos + 1, neg),
                -1 => (pos, neg + 1),
                _ => (pos, neg),
            });

        let base = positive
            .saturating_mul(self.config.price_per_positive_stat)
            .saturating_sub(negative.saturating_mul(self.config.price_per_negative_stat));
        let depth = i64::from(floor).saturating_mul(self.config.price_per_floor);
        base.saturating_add(depth).max(self.config.min_price)
    }

    /// A copy of `item` with `stat` raised by one. `item` is left untouched.
    #[must_use]
    pub fn apply_upgrade(&self, item: &Item, stat: StatId) -> Item {
        let mut upgraded = item.clone();
        *upgraded.stat_modifiers.entry(stat).or_insert(0) += 1;
        upgraded
    }
}
