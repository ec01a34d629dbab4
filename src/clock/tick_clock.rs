//! Tick clock implementation.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::TickListener;
use crate::core::{CoreError, Tick};

/// Handle returned by [`TickClock::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u32);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Subscription({})", self.0)
    }
}

/// Process-wide monotonically increasing tick counter.
///
/// Reading [`tick`](Self::tick) never mutates; [`advance`](Self::advance) is
/// the only transition.
#[derive(Default)]
pub struct TickClock {
    tick: Tick,
    listeners: Vec<(SubscriptionId, Box<dyn TickListener>)>,
    next_subscription: u32,
}

impl TickClock {
    /// Create a clock at tick 0 with no listeners.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current tick.
    #[must_use]
    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Number of subscribed listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Advance by exactly one tick and notify listeners.
    ///
    /// The tick is advanced even if a listener fails; the first listener error
    /// is returned and later listeners are not notified for this tick.
    pub fn advance(&mut self) -> Result<Tick, CoreError> {
        self.tick = self.tick.next();
        let tick = self.tick;
        trace!(
            target: "faction_sim::clock",
            tick = tick.raw(),
            listeners = self.listeners.len(),
            "Tick advanced"
        );

        for (_, listener) in &mut self.listeners {
            listener.on_tick(tick)?;
        }
        Ok(tick)
    }

    /// Subscribe a listener to future advances.
    pub fn subscribe(&mut self, listener: Box<dyn TickListener>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }
}

impl std::fmt::Debug for TickClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TickClock")
            .field("tick", &self.tick)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
