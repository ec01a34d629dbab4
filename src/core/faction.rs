//! Faction identification and per-faction data storage.
//!
//! ## FactionId
//!
//! The closed set of five factions. [`FactionId::ALL`] is the one list every
//! faction-scoped structure is built from.
//!
//! ## FactionMap
//!
//! Fixed per-faction storage with one slot per faction, indexable by
//! `FactionId`. A `FactionMap` always holds an entry for every faction.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use super::error::CoreError;

/// One of the five factions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactionId {
    Fire,
    Earth,
    Water,
    Wood,
    Metal,
}

impl FactionId {
    /// Number of factions.
    pub const COUNT: usize = 5;

    /// Every faction, in canonical order.
    pub const ALL: [FactionId; Self::COUNT] = [
        FactionId::Fire,
        FactionId::Earth,
        FactionId::Water,
        FactionId::Wood,
        FactionId::Metal,
    ];

    /// Position of this faction in [`FactionId::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in storage keys.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FactionId::Fire => "fire",
            FactionId::Earth => "earth",
            FactionId::Water => "water",
            FactionId::Wood => "wood",
            FactionId::Metal => "metal",
        }
    }
}

impl std::fmt::Display for FactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FactionId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FactionId::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownFaction(s.to_string()))
    }
}

/// Per-faction data storage with O(1) access.
///
/// Backed by an array with one entry per faction, so every map covers the
/// full faction set by construction.
///
/// ## Example
///
/// ```
/// use faction_sim::core::{FactionId, FactionMap};
///
/// let mut health: FactionMap<i64> = FactionMap::new(|_| 100);
/// health[FactionId::Water] -= 15;
///
/// assert_eq!(health[FactionId::Water], 85);
/// assert_eq!(health.iter().count(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionMap<T> {
    data: [T; FactionId::COUNT],
}

impl<T> FactionMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl FnMut(FactionId) -> T) -> Self {
        Self {
            data: FactionId::ALL.map(factory),
        }
    }

    /// Create a map from a fallible factory, stopping at the first error.
    ///
    /// Factions are visited in [`FactionId::ALL`] order.
    pub fn try_new<E>(mut factory: impl FnMut(FactionId) -> Result<T, E>) -> Result<Self, E> {
        let mut values = Vec::with_capacity(FactionId::COUNT);
        for faction in FactionId::ALL {
            values.push(factory(faction)?);
        }
        match values.try_into() {
            Ok(data) => Ok(Self { data }),
            Err(_) => unreachable!("one value is collected per faction"),
        }
    }

    /// Create a map with every entry set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a faction's data.
    #[must_use]
    pub fn get(&self, faction: FactionId) -> &T {
        &self.data[faction.index()]
    }

    /// Get a mutable reference to a faction's data.
    pub fn get_mut(&mut self, faction: FactionId) -> &mut T {
        &mut self.data[faction.index()]
    }

    /// Iterate over (FactionId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (FactionId, &T)> {
        FactionId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (FactionId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (FactionId, &mut T)> {
        FactionId::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Iterate over the faction keys.
    pub fn factions(&self) -> impl Iterator<Item = FactionId> {
        FactionId::ALL.into_iter()
    }
}

impl<T: Default> Default for FactionMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<FactionId> for FactionMap<T> {
    type Output = T;

    fn index(&self, faction: FactionId) -> &Self::Output {
        self.get(faction)
    }
}

impl<T> IndexMut<FactionId> for FactionMap<T> {
    fn index_mut(&mut self, faction: FactionId) -> &mut Self::Output {
        self.get_mut(faction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_index_ordered() {
        for (i, faction) in FactionId::ALL.iter().enumerate() {
            assert_eq!(faction.index(), i);
        }
    }

    #[test]
    fn test_display_and_parse() {
        for faction in FactionId::ALL {
            let parsed: FactionId = faction.to_string().parse().unwrap();
            assert_eq!(parsed, faction);
        }
        assert_eq!("METAL".parse::<FactionId>().unwrap(), FactionId::Metal);

        let err = "air".parse::<FactionId>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownFaction(ref s) if s == "air"));
    }

    #[test]
    fn test_faction_map_new() {
        let map = FactionMap::new(|f| f.index() * 10);

        assert_eq!(map[FactionId::Fire], 0);
        assert_eq!(map[FactionId::Metal], 40);
    }

    #[test]
    fn test_faction_map_try_new_stops_at_error() {
        let mut visited = Vec::new();
        let result: Result<FactionMap<u8>, &str> = FactionMap::try_new(|f| {
            visited.push(f);
            if f == FactionId::Water {
                Err("water unavailable")
            } else {
                Ok(1)
            }
        });

        assert_eq!(result, Err("water unavailable"));
        assert_eq!(visited, vec![FactionId::Fire, FactionId::Earth, FactionId::Water]);
    }

    #[test]
    fn test_faction_map_iter_covers_every_faction() {
        let map: FactionMap<u32> = FactionMap::with_default();
        let keys: Vec<_> = map.iter().map(|(f, _)| f).collect();
        assert_eq!(keys, FactionId::ALL.to_vec());
    }

    #[test]
    fn test_faction_map_mutation() {
        let mut map = FactionMap::with_value(3i64);
        for (_, v) in map.iter_mut() {
            *v *= 2;
        }
        map[FactionId::Wood] = -1;

        assert_eq!(map[FactionId::Fire], 6);
        assert_eq!(map[FactionId::Wood], -1);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&FactionId::Earth).unwrap();
        assert_eq!(json, "\"earth\"");

        let map = FactionMap::new(|f| f.index() as u8);
        let json = serde_json::to_string(&map).unwrap();
        let back: FactionMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
