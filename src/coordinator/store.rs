//! The faction-state store boundary.
//!
//! The store owns per-faction mutable state (champion return rates, facility
//! health). How a tick changes that state belongs to the store; this crate
//! only fixes how it is called: once per tick, with every faction's
//! assignments in one batch.

use std::cell::RefCell;
use std::rc::Rc;

use super::registry::AssignmentSnapshot;
use crate::core::{BoxError, FactionMap};

/// Target of the per-tick fan-out.
pub trait FactionStateStore {
    /// Apply one tick's worth of updates.
    ///
    /// `assignments` always holds a fresh snapshot for every faction.
    fn advance_tick_update(
        &mut self,
        assignments: FactionMap<AssignmentSnapshot>,
    ) -> Result<(), BoxError>;
}

impl<S: FactionStateStore + ?Sized> FactionStateStore for Rc<RefCell<S>> {
    fn advance_tick_update(
        &mut self,
        assignments: FactionMap<AssignmentSnapshot>,
    ) -> Result<(), BoxError> {
        self.try_borrow_mut()?.advance_tick_update(assignments)
    }
}
