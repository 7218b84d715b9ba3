//! Canonical state and its pure transition function.
//!
//! # Responsibility
//! - Hold the three record collections as one immutable-per-transition value.
//! - Apply tagged commands without performing any I/O.
//!
//! # Invariants
//! - `reduce` never mutates its input; every transition produces a fresh
//!   state value.
//! - Update replaces an entry in place and never changes its position.
//! - Update/delete of an unknown id leaves the state unchanged.

use serde::{Deserialize, Serialize};

use crate::model::{Contact, Event, Location, RecordId};

/// The whole store value at one instant. Also the persisted snapshot shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub events: Vec<Event>,
    pub locations: Vec<Location>,
    pub contacts: Vec<Contact>,
}

/// Tagged state transition.
#[derive(Debug, Clone)]
pub enum Command {
    /// Wholesale replacement, used once at startup when restoring.
    Load(State),
    AddEvent(Event),
    UpdateEvent(Event),
    DeleteEvent(RecordId),
    AddLocation(Location),
    UpdateLocation(Location),
    DeleteLocation(RecordId),
    AddContact(Contact),
    UpdateContact(Contact),
    DeleteContact(RecordId),
}

/// Applies one command to a state value.
///
/// Pure by contract: persistence and logging live outside, layered on the
/// store's observer seam. Deleting a Location never touches Events; any
/// event reference to the deleted id is left dangling on purpose.
pub fn reduce(state: &State, command: &Command) -> State {
    let mut next = state.clone();
    match command {
        Command::Load(snapshot) => next = snapshot.clone(),
        Command::AddEvent(item) => next.events.push(item.clone()),
        Command::UpdateEvent(item) => replace_in_place(&mut next.events, |e| e.id == item.id, item),
        Command::DeleteEvent(id) => next.events.retain(|e| e.id != *id),
        Command::AddLocation(item) => next.locations.push(item.clone()),
        Command::UpdateLocation(item) => {
            replace_in_place(&mut next.locations, |l| l.id == item.id, item);
        }
        Command::DeleteLocation(id) => next.locations.retain(|l| l.id != *id),
        Command::AddContact(item) => next.contacts.push(item.clone()),
        Command::UpdateContact(item) => {
            replace_in_place(&mut next.contacts, |c| c.id == item.id, item);
        }
        Command::DeleteContact(id) => next.contacts.retain(|c| c.id != *id),
    }
    next
}

fn replace_in_place<T: Clone>(items: &mut [T], matches: impl Fn(&T) -> bool, replacement: &T) {
    if let Some(slot) = items.iter_mut().find(|item| matches(item)) {
        *slot = replacement.clone();
    }
}
