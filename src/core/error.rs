//! Errors raised by the tick pipeline and the closed identifier sets.

use thiserror::Error;

use super::faction::FactionId;
use super::tick::Tick;

/// Error type returned by external collaborators (registry, store).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the clock, the fan-out coordinator, and identifier parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The coordinator was notified while not attached to a clock.
    #[error("fan-out coordinator notified while not mounted")]
    NotMounted,

    /// A listener was notified again while it was still handling a tick.
    #[error("re-entrant tick notification at {tick}")]
    ReentrantNotification { tick: Tick },

    /// The assignment registry failed to produce a snapshot.
    #[error("assignment registry failed for faction {faction} at {tick}")]
    Registry {
        faction: FactionId,
        tick: Tick,
        #[source]
        source: BoxError,
    },

    /// The faction state store rejected the batch update.
    #[error("faction state store rejected the update for {tick}")]
    Store {
        tick: Tick,
        #[source]
        source: BoxError,
    },

    #[error("unknown faction: {0:?}")]
    UnknownFaction(String),

    #[error("unknown stat: {0:?}")]
    UnknownStat(String),
}
