//! Items and their stat modifiers.
//!
//! Items are plain values. Anything that "changes" an item (upgrades) returns
//! a new `Item`, since the same item can be held by an inventory list and an
//! equipped slot at once.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::CoreError;

/// The closed set of item stats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StatId {
    #[serde(rename = "atk")]
    Attack,
    #[serde(rename = "def")]
    Defense,
    #[serde(rename = "vit")]
    Vitality,
    #[serde(rename = "spi")]
    Spirit,
    #[serde(rename = "lck")]
    Luck,
}

impl StatId {
    /// Every stat, in canonical order.
    pub const ALL: [StatId; 5] = [
        StatId::Attack,
        StatId::Defense,
        StatId::Vitality,
        StatId::Spirit,
        StatId::Luck,
    ];

    /// Short key used in serialized stat maps.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            StatId::Attack => "atk",
            StatId::Defense => "def",
            StatId::Vitality => "vit",
            StatId::Spirit => "spi",
            StatId::Luck => "lck",
        }
    }
}

impl std::fmt::Display for StatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for StatId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatId::ALL
            .into_iter()
            .find(|stat| stat.key() == s)
            .ok_or_else(|| CoreError::UnknownStat(s.to_string()))
    }
}

/// Signed stat deltas. Absent stats count as zero.
pub type StatModifiers = FxHashMap<StatId, i64>;

/// Item identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }
}

/// A dungeon item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub stat_modifiers: StatModifiers,
}

impl Item {
    /// Create an item with no modifiers.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stat_modifiers: StatModifiers::default(),
        }
    }

    /// Set a stat modifier (builder pattern).
    #[must_use]
    pub fn with_stat(mut self, stat: StatId, value: i64) -> Self {
        self.stat_modifiers.insert(stat, value);
        self
    }

    /// Modifier for a stat, zero if absent.
    #[must_use]
    pub fn stat(&self, stat: StatId) -> i64 {
        self.stat_modifiers.get(&stat).copied().unwrap_or(0)
    }

    /// Iterate over present modifiers in canonical stat order.
    pub fn modifiers(&self) -> impl Iterator<Item = (StatId, i64)> + '_ {
        StatId::ALL
            .into_iter()
            .filter_map(|stat| self.stat_modifiers.get(&stat).map(|&v| (stat, v)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_keys_round_trip() {
        for stat in StatId::ALL {
            assert_eq!(stat.key().parse::<StatId>().unwrap(), stat);
        }
        assert!(matches!("str".parse::<StatId>(), Err(CoreError::UnknownStat(_))));
    }

    #[test]
    fn test_item_builder() {
        let item = Item::new(ItemId::new(1), "Ember Blade")
            .with_stat(StatId::Attack, 3)
            .with_stat(StatId::Defense, -1);

        assert_eq!(item.stat(StatId::Attack), 3);
        assert_eq!(item.stat(StatId::Defense), -1);
        assert_eq!(item.stat(StatId::Luck), 0);
        assert_eq!(
            item.modifiers().collect::<Vec<_>>(),
            vec![(StatId::Attack, 3), (StatId::Defense, -1)]
        );
    }

    #[test]
    fn test_item_json_shape() {
        let json = r#"{"id":4,"name":"Bark Shield","stat_modifiers":{"def":2,"spi":-1}}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, ItemId::new(4));
        assert_eq!(item.stat(StatId::Defense), 2);
        assert_eq!(item.stat(StatId::Spirit), -1);

        let bare: Item = serde_json::from_str(r#"{"id":5,"name":"Pebble"}"#).unwrap();
        assert!(bare.stat_modifiers.is_empty());
    }
}
