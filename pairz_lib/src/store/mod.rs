use crate::error::Result;
use crate::model::Roster;

pub mod fs;
pub mod memory;

/// Abstract interface for roster persistence.
/// Agnostic of the underlying mechanism (file, memory, eventually a DB).
pub trait RosterStore {
    /// Load the persisted roster. Missing, unreadable, or unparseable state
    /// all yield an empty roster; corruption never blocks startup, it only
    /// loses prior data.
    fn load(&self) -> Roster;

    /// Persist the whole roster. Must be atomic from the caller's
    /// perspective: a subsequent `load` never observes a partial document.
    fn save(&self, roster: &Roster) -> Result<()>;
}

// All methods take `&self`, so a shared reference is itself a store. Lets
// tests keep a handle on a store that a `Registry` owns by reference.
impl<S: RosterStore + ?Sized> RosterStore for &S {
    fn load(&self) -> Roster {
        (**self).load()
    }

    fn save(&self, roster: &Roster) -> Result<()> {
        (**self).save(roster)
    }
}
