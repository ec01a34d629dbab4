//! Champion assignment snapshots and the registry that produces them.

use im::OrdMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{BoxError, FactionId, FactionMap};

/// Ordered slot ids a champion is assigned to.
pub type SlotList = SmallVec<[String; 4]>;

/// One faction's champion assignments: champion id → ordered slot ids.
///
/// Backed by a persistent map, so handing a snapshot out of a registry is an
/// O(1) clone and later registry edits never show through.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssignmentSnapshot {
    champions: OrdMap<String, SlotList>,
}

impl AssignmentSnapshot {
    /// An empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slots for a champion, empty if the champion has none.
    #[must_use]
    pub fn slots(&self, champion: &str) -> &[String] {
        self.champions.get(champion).map(|slots| slots.as_slice()).unwrap_or(&[])
    }

    /// Number of champions with at least one assignment.
    #[must_use]
    pub fn len(&self) -> usize {
        self.champions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }

    /// Total slot assignments across all champions.
    #[must_use]
    pub fn assignment_count(&self) -> usize {
        self.champions.values().map(SmallVec::len).sum()
    }

    /// Iterate over (champion, slots) in champion id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.champions.iter().map(|(c, s)| (c.as_str(), s.as_slice()))
    }
}

impl<C, I> FromIterator<(C, I)> for AssignmentSnapshot
where
    C: Into<String>,
    I: IntoIterator,
    I::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (C, I)>>(iter: T) -> Self {
        let champions = iter
            .into_iter()
            .map(|(champion, slots)| {
                let slots: SlotList = slots.into_iter().map(Into::into).collect();
                (champion.into(), slots)
            })
            .filter(|(_, slots)| !slots.is_empty())
            .collect();
        Self { champions }
    }
}

/// Source of per-faction assignment snapshots.
///
/// Called once per faction on every fan-out pass; implementations must return
/// the current assignments, not a cached copy from an earlier tick.
pub trait AssignmentRegistry {
    fn faction_assignments(&self, faction: FactionId) -> Result<AssignmentSnapshot, BoxError>;
}

impl<R: AssignmentRegistry + ?Sized> AssignmentRegistry for Rc<RefCell<R>> {
    fn faction_assignments(&self, faction: FactionId) -> Result<AssignmentSnapshot, BoxError> {
        self.try_borrow()?.faction_assignments(faction)
    }
}

/// In-memory assignment registry.
///
/// ```
/// use faction_sim::coordinator::{AssignmentBoard, AssignmentRegistry};
/// use faction_sim::core::FactionId;
///
/// let mut board = AssignmentBoard::new();
/// board.assign(FactionId::Fire, "ember", "forge");
/// board.assign(FactionId::Fire, "ember", "watchtower");
///
/// let snapshot = board.faction_assignments(FactionId::Fire).unwrap();
/// assert_eq!(snapshot.slots("ember"), ["forge", "watchtower"]);
/// assert!(board.snapshot(FactionId::Water).is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentBoard {
    factions: FactionMap<AssignmentSnapshot>,
}

impl AssignmentBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `slot` to a champion's assignments.
    ///
    /// Returns false if the champion already holds that slot.
    pub fn assign(
        &mut self,
        faction: FactionId,
        champion: impl Into<String>,
        slot: impl Into<String>,
    ) -> bool {
        let slot = slot.into();
        let slots = self.factions[faction]
            .champions
            .entry(champion.into())
            .or_insert_with(SlotList::new);
        if slots.contains(&slot) {
            return false;
        }
        slots.push(slot);
        true
    }

    /// Remove one slot from a champion. Champions left with no slots are dropped.
    pub fn unassign(&mut self, faction: FactionId, champion: &str, slot: &str) -> bool {
        let champions = &mut self.factions[faction].champions;
        let Some(slots) = champions.get_mut(champion) else {
            return false;
        };
        let Some(pos) = slots.iter().position(|s| s == slot) else {
            return false;
        };
        slots.remove(pos);
        if slots.is_empty() {
            champions.remove(champion);
        }
        true
    }

    /// Remove every assignment a champion holds.
    pub fn clear_champion(&mut self, faction: FactionId, champion: &str) -> bool {
        self.factions[faction].champions.remove(champion).is_some()
    }

    /// Current assignments for a faction.
    #[must_use]
    pub fn snapshot(&self, faction: FactionId) -> AssignmentSnapshot {
        self.factions[faction].clone()
    }
}

impl AssignmentRegistry for AssignmentBoard {
    fn faction_assignments(&self, faction: FactionId) -> Result<AssignmentSnapshot, BoxError> {
        Ok(self.snapshot(faction))
    }
}
