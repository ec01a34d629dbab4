//! Per-tick fan-out across every faction.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, warn};

use super::registry::{AssignmentRegistry, AssignmentSnapshot};
use super::store::FactionStateStore;
use crate::clock::{SubscriptionId, TickClock, TickListener};
use crate::core::{CoreError, FactionMap, Tick};

/// Turns clock advances into batched faction-state updates.
///
/// For every tick value greater than the last one it processed, the
/// coordinator asks the registry for each faction's assignments and hands the
/// whole set to the store in a single call. Tick values at or below the
/// watermark are ignored, so duplicate notifications are harmless.
///
/// The coordinator only sees ticks while it is mounted. Ticks that happen
/// while it is detached are not replayed.
#[derive(Debug)]
pub struct FanOutCoordinator<R, S> {
    registry: R,
    store: S,
    last_processed: Option<Tick>,
    mounted: bool,
    passes: u64,
}

impl<R: AssignmentRegistry, S: FactionStateStore> FanOutCoordinator<R, S> {
    /// Create an unmounted coordinator.
    pub fn new(registry: R, store: S) -> Self {
        Self {
            registry,
            store,
            last_processed: None,
            mounted: false,
            passes: 0,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The last tick a fan-out pass completed for.
    #[must_use]
    pub fn last_processed(&self) -> Option<Tick> {
        self.last_processed
    }

    /// Number of completed fan-out passes.
    #[must_use]
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Start observing, treating `current` as already seen.
    pub fn mount(&mut self, current: Tick) {
        self.mounted = true;
        self.last_processed = Some(self.last_processed.map_or(current, |last| last.max(current)));
    }

    /// Stop observing.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Handle a tick value. Returns whether a fan-out pass ran.
    ///
    /// The watermark only moves after the store accepted the batch, so a
    /// failed pass can be retried by the next notification.
    pub fn observe(&mut self, tick: Tick) -> Result<bool, CoreError> {
        if !self.mounted {
            return Err(CoreError::NotMounted);
        }
        if self.last_processed.is_some_and(|last| tick <= last) {
            return Ok(false);
        }

        let assignments = self.collect(tick)?;
        let champions: usize = assignments.iter().map(|(_, s)| s.len()).sum();

        if let Err(source) = self.store.advance_tick_update(assignments) {
            warn!(
                target: "faction_sim::fanout",
                tick = tick.raw(),
                error = %source,
                "Faction state store rejected update"
            );
            return Err(CoreError::Store { tick, source });
        }

        self.last_processed = Some(tick);
        self.passes += 1;
        debug!(
            target: "faction_sim::fanout",
            tick = tick.raw(),
            champions,
            "Fan-out pass complete"
        );
        Ok(true)
    }

    /// Observe the clock's current value.
    pub fn sync(&mut self, clock: &TickClock) -> Result<bool, CoreError> {
        self.observe(clock.tick())
    }

    fn collect(&self, tick: Tick) -> Result<FactionMap<AssignmentSnapshot>, CoreError> {
        FactionMap::try_new(|faction| {
            self.registry.faction_assignments(faction).map_err(|source| {
                warn!(
                    target: "faction_sim::fanout",
                    tick = tick.raw(),
                    %faction,
                    error = %source,
                    "Assignment registry failed"
                );
                CoreError::Registry { faction, tick, source }
            })
        })
    }
}

impl<R, S> FanOutCoordinator<R, S>
where
    R: AssignmentRegistry + 'static,
    S: FactionStateStore + 'static,
{
    /// Mount a shared coordinator and subscribe it to `clock`.
    ///
    /// The clock's current tick counts as already seen; the first pass runs
    /// on the next advance.
    pub fn attach(
        this: &Rc<RefCell<Self>>,
        clock: &mut TickClock,
    ) -> Result<SubscriptionId, CoreError> {
        this.try_borrow_mut()
            .map_err(|_| CoreError::ReentrantNotification { tick: clock.tick() })?
            .mount(clock.tick());
        Ok(clock.subscribe(Box::new(Rc::clone(this))))
    }

    /// Unsubscribe from `clock` and unmount.
    ///
    /// Returns false if `subscription` was not registered on `clock`.
    pub fn detach(
        this: &Rc<RefCell<Self>>,
        clock: &mut TickClock,
        subscription: SubscriptionId,
    ) -> Result<bool, CoreError> {
        let removed = clock.unsubscribe(subscription);
        this.try_borrow_mut()
            .map_err(|_| CoreError::ReentrantNotification { tick: clock.tick() })?
            .unmount();
        Ok(removed)
    }
}

impl<R: AssignmentRegistry, S: FactionStateStore> TickListener for FanOutCoordinator<R, S> {
    fn on_tick(&mut self, tick: Tick) -> Result<(), CoreError> {
        self.observe(tick).map(|_| ())
    }
}
