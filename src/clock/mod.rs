//! The global tick clock and its listeners.
//!
//! The clock is the only thing that moves simulation time forward. Every
//! [`TickClock::advance`] notifies subscribed listeners synchronously, on the
//! caller's stack, in subscription order. Nothing is queued: a listener that
//! is not subscribed when a tick happens never hears about it.
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use faction_sim::clock::{TickClock, TickListener};
//! use faction_sim::core::{CoreError, Tick};
//!
//! #[derive(Default)]
//! struct Seen(Vec<Tick>);
//!
//! impl TickListener for Seen {
//!     fn on_tick(&mut self, tick: Tick) -> Result<(), CoreError> {
//!         self.0.push(tick);
//!         Ok(())
//!     }
//! }
//!
//! let seen = Rc::new(RefCell::new(Seen::default()));
//! let mut clock = TickClock::new();
//! let id = clock.subscribe(Box::new(Rc::clone(&seen)));
//!
//! clock.advance().unwrap();
//! clock.advance().unwrap();
//! clock.unsubscribe(id);
//! clock.advance().unwrap();
//!
//! assert_eq!(clock.tick(), Tick::new(3));
//! assert_eq!(seen.borrow().0, vec![Tick::new(1), Tick::new(2)]);
//! ```

mod tick_clock;

pub use tick_clock::{SubscriptionId, TickClock};

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{CoreError, Tick};

/// Something that reacts to clock advances.
pub trait TickListener {
    /// Called once per advance with the new tick value.
    ///
    /// An error stops notification of the remaining listeners for this tick
    /// and is returned from [`TickClock::advance`].
    fn on_tick(&mut self, tick: Tick) -> Result<(), CoreError>;
}

/// Shared listeners, so the subscriber can keep a handle for inspection.
///
/// A notification that arrives while the listener is already borrowed (i.e.
/// while it is still handling a tick) is rejected instead of panicking.
impl<L: TickListener + ?Sized> TickListener for Rc<RefCell<L>> {
    fn on_tick(&mut self, tick: Tick) -> Result<(), CoreError> {
        let mut inner = self
            .try_borrow_mut()
            .map_err(|_| CoreError::ReentrantNotification { tick })?;
        inner.on_tick(tick)
    }
}
