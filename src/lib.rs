//! # faction-sim
//!
//! Simulation kernel for a faction-themed game hub.
//!
//! ## Design Principles
//!
//! 1. **One Faction List**: Everything faction-scoped is built from
//!    [`FactionId::ALL`], so a [`FactionMap`] always covers every faction.
//!
//! 2. **Batched Ticks**: Each clock advance reaches the faction state store as
//!    exactly one update carrying every faction's assignments.
//!
//! 3. **Injected Randomness**: Formulas that roll dice take a [`GameRng`];
//!    seeded RNGs make every outcome reproducible.
//!
//! 4. **Value Semantics**: Item upgrades return new items instead of mutating
//!    shared ones.
//!
//! ## Modules
//!
//! - `core`: Faction ids, per-faction maps, ticks, RNG, errors
//! - `economy`: Puzzle sizing and rewards, item salvage/upgrade/pricing
//! - `puzzle`: Board generation and flip resolution
//! - `clock`: The global tick clock
//! - `coordinator`: Per-tick fan-out to the faction state store

pub mod core;
pub mod economy;
pub mod puzzle;
pub mod clock;
pub mod coordinator;

// Re-export commonly used types
pub use crate::core::{
    BoxError, CoreError,
    FactionId, FactionMap,
    GameRng,
    Tick,
};

pub use crate::economy::{
    ConfigError, Economy, EconomyConfig,
    Item, ItemId, StatId, StatModifiers, UpgradeOptions,
};

pub use crate::puzzle::{
    generate_puzzle_cards, FlipOutcome, PuzzleCard, PuzzleError, PuzzleOutcome, PuzzleSession,
};

pub use crate::clock::{SubscriptionId, TickClock, TickListener};

pub use crate::coordinator::{
    AssignmentBoard, AssignmentRegistry, AssignmentSnapshot,
    FactionStateStore, FanOutCoordinator,
};
