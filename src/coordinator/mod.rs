//! Cross-faction tick coordination.
//!
//! ## Key Components
//!
//! - [`AssignmentRegistry`]: Per-faction champion assignment snapshots
//! - [`AssignmentBoard`]: In-memory registry
//! - [`FactionStateStore`]: Receives one batch of all factions per tick
//! - [`FanOutCoordinator`]: Watches the clock and drives the store
//!
//! ## Example
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use faction_sim::clock::TickClock;
//! use faction_sim::coordinator::{
//!     AssignmentBoard, AssignmentSnapshot, FactionStateStore, FanOutCoordinator,
//! };
//! use faction_sim::core::{BoxError, FactionId, FactionMap};
//!
//! #[derive(Default)]
//! struct Ledger {
//!     updates: usize,
//! }
//!
//! impl FactionStateStore for Ledger {
//!     fn advance_tick_update(
//!         &mut self,
//!         all: FactionMap<AssignmentSnapshot>,
//!     ) -> Result<(), BoxError> {
//!         assert_eq!(all.iter().count(), FactionId::COUNT);
//!         self.updates += 1;
//!         Ok(())
//!     }
//! }
//!
//! let mut clock = TickClock::new();
//! let coordinator = Rc::new(RefCell::new(FanOutCoordinator::new(
//!     AssignmentBoard::new(),
//!     Ledger::default(),
//! )));
//!
//! let sub = FanOutCoordinator::attach(&coordinator, &mut clock).unwrap();
//! clock.advance().unwrap();
//! clock.advance().unwrap();
//! FanOutCoordinator::detach(&coordinator, &mut clock, sub).unwrap();
//! clock.advance().unwrap();
//!
//! assert_eq!(coordinator.borrow().store().updates, 2);
//! ```

mod fanout;
mod registry;
mod store;

pub use fanout::FanOutCoordinator;
pub use registry::{AssignmentBoard, AssignmentRegistry, AssignmentSnapshot, SlotList};
pub use store::FactionStateStore;
