use super::RosterStore;
use crate::error::{PairzError, Result};
use crate::model::Roster;
use std::cell::RefCell;

/// In-memory store for testing and development. Does NOT persist data.
///
/// Uses `RefCell` for interior mutability since pairz is single-threaded,
/// which lets the `RosterStore` trait keep `&self` receivers throughout.
#[derive(Default)]
pub struct InMemoryStore {
    roster: RefCell<Roster>,
    simulate_write_error: RefCell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        Self {
            roster: RefCell::new(roster),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// Enable write error simulation for testing the transactional
    /// registration contract.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl RosterStore for InMemoryStore {
    fn load(&self) -> Roster {
        self.roster.borrow().clone()
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(PairzError::Store("simulated write failure".to_string()));
        }
        *self.roster.borrow_mut() = roster.clone();
        Ok(())
    }
}
