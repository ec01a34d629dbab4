//! Core types: factions, ticks, RNG, errors.
//!
//! These are shared by the economy, the puzzle code, and the tick pipeline.

pub mod error;
pub mod faction;
pub mod rng;
pub mod tick;

pub use error::{BoxError, CoreError};
pub use faction::{FactionId, FactionMap};
pub use rng::GameRng;
pub use tick::Tick;
