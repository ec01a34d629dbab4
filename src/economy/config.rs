//! Economy tuning parameters.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when economy configuration invariants are violated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base card count must be even (got {0})")]
    OddCardCount(u32),
    #[error("base card count must be at least 2 (got {0})")]
    CardCountTooSmall(u32),
    #[error("gold multiplier minimum {min} exceeds maximum {max}")]
    GoldRange { min: u64, max: u64 },
}

/// Economy configuration.
///
/// The defaults are the live game's numbers; the free functions in
/// [`crate::economy`] always use them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomyConfig {
    /// Card count at floor 0. Each floor adds one card, rounded up to a pair.
    pub base_card_count: u32,

    /// Smallest per-floor gold multiplier for a cleared puzzle.
    pub gold_multiplier_min: u64,

    /// Largest per-floor gold multiplier for a cleared puzzle.
    pub gold_multiplier_max: u64,

    /// Shop price added per positive stat.
    pub price_per_positive_stat: i64,

    /// Shop price removed per negative stat.
    pub price_per_negative_stat: i64,

    /// Shop price added per floor of depth.
    pub price_per_floor: i64,

    /// Price floor.
    pub min_price: i64,

    /// Cheapest possible upgrade.
    pub min_upgrade_cost: i64,
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            base_card_count: 10,
            gold_multiplier_min: 2,
            gold_multiplier_max: 5,
            price_per_positive_stat: 5,
            price_per_negative_stat: 5,
            price_per_floor: 4,
            min_price: 1,
            min_upgrade_cost: 1,
        }
    }
}

impl EconomyConfig {
    /// Set the floor-0 card count.
    pub fn with_base_card_count(mut self, count: u32) -> Self {
        self.base_card_count = count;
        self
    }

    /// Set the gold multiplier range (inclusive).
    pub fn with_gold_multiplier(mut self, min: u64, max: u64) -> Self {
        self.gold_multiplier_min = min;
        self.gold_multiplier_max = max;
        self
    }

    /// Set the per-floor shop price increment.
    pub fn with_price_per_floor(mut self, price: i64) -> Self {
        self.price_per_floor = price;
        self
    }

    /// Check the invariants the formulas rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_card_count < 2 {
            return Err(ConfigError::CardCountTooSmall(self.base_card_count));
        }
        if self.base_card_count % 2 != 0 {
            return Err(ConfigError::OddCardCount(self.base_card_count));
        }
        if self.gold_multiplier_min > self.gold_multiplier_max {
            return Err(ConfigError::GoldRange {
                min: self.gold_multiplier_min,
                max: self.gold_multiplier_max,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EconomyConfig::default();
        assert_eq!(config.base_card_count, 10);
        assert_eq!((config.gold_multiplier_min, config.gold_multiplier_max), (2, 5));
        assert_eq!(config.price_per_floor, 4);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_builder_pattern() {
        let config = EconomyConfig::default()
            .with_base_card_count(16)
            .with_gold_multiplier(1, 3)
            .with_price_per_floor(10);

        assert_eq!(config.base_card_count, 16);
        assert_eq!(config.gold_multiplier_max, 3);
        assert_eq!(config.price_per_floor, 10);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert_eq!(
            EconomyConfig::default().with_base_card_count(11).validate(),
            Err(ConfigError::OddCardCount(11))
        );
        assert_eq!(
            EconomyConfig::default().with_base_card_count(0).validate(),
            Err(ConfigError::CardCountTooSmall(0))
        );
        assert_eq!(
            EconomyConfig::default().with_gold_multiplier(6, 2).validate(),
            Err(ConfigError::GoldRange { min: 6, max: 2 })
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: EconomyConfig = serde_json::from_str(r#"{"price_per_floor": 7}"#).unwrap();
        assert_eq!(config.price_per_floor, 7);
        assert_eq!(config.base_card_count, 10);
    }
}
