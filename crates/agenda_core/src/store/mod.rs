//! Reducer-driven record store.
//!
//! # Responsibility
//! - Own the canonical in-memory collections and the only mutation path.
//! - Notify subscribed observers after every dispatched transition so
//!   persistence can react out-of-band.
//!
//! # Invariants
//! - There is no ambient singleton: a `Store` is constructed explicitly at
//!   process start and handed to its consumers.
//! - Observers run after the state transition completed; they see the new
//!   state, never an intermediate one.
//! - Falling back to seed data does not touch the slot; a corrupt slot is
//!   only overwritten by the first mutation.

use std::rc::Rc;

use log::{debug, info, warn};

use crate::model::{Contact, Event, Location, RecordId};
use crate::persist::{decode_snapshot, SlotStore, SlotWriter};

mod seed;
mod state;

pub use seed::seed;
pub use state::{reduce, Command, State};

/// Callback seam for "state changed" notifications.
///
/// The persistence subscriber lives behind this trait, which keeps
/// `reduce` pure and lets tests observe transitions without a storage
/// fake.
pub trait StateObserver {
    fn state_changed(&self, state: &State);
}

/// Single source of truth for the three record collections.
pub struct Store {
    state: State,
    observers: Vec<Box<dyn StateObserver>>,
}

impl Store {
    /// Creates a store holding the built-in seed dataset, with no
    /// observers attached. Startup restore goes through [`Store::open`].
    pub fn new() -> Self {
        Self::with_state(seed())
    }

    fn with_state(state: State) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    /// Opens the store against a persistence slot.
    ///
    /// Reads the slot once: a structurally valid snapshot is restored via
    /// the `load` path (observers, including the slot writer, see the
    /// restored state); anything else falls back to the seed dataset
    /// without writing the slot.
    pub fn open<S: SlotStore + 'static>(slot: Rc<S>) -> Self {
        let restored = match slot.read() {
            Ok(Some(text)) => {
                let snapshot = decode_snapshot(&text);
                if snapshot.is_none() {
                    warn!("event=store_open module=store status=fallback reason=malformed_snapshot");
                }
                snapshot
            }
            Ok(None) => None,
            Err(err) => {
                warn!("event=store_open module=store status=fallback reason=slot_read_failed error={err}");
                None
            }
        };

        match restored {
            Some(snapshot) => {
                info!(
                    "event=store_open module=store status=restored events={} locations={} contacts={}",
                    snapshot.events.len(),
                    snapshot.locations.len(),
                    snapshot.contacts.len()
                );
                let mut store = Self::with_state(State::default());
                store.subscribe(Box::new(SlotWriter::new(slot)));
                store.load(snapshot);
                store
            }
            None => {
                info!("event=store_open module=store status=seeded");
                let mut store = Self::new();
                store.subscribe(Box::new(SlotWriter::new(slot)));
                store
            }
        }
    }

    /// Registers an observer notified after every dispatched command.
    pub fn subscribe(&mut self, observer: Box<dyn StateObserver>) {
        self.observers.push(observer);
    }

    pub fn events(&self) -> &[Event] {
        &self.state.events
    }

    pub fn locations(&self) -> &[Location] {
        &self.state.locations
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.state.contacts
    }

    /// The whole current state; also the snapshot that persistence writes.
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn event(&self, id: RecordId) -> Option<&Event> {
        self.state.events.iter().find(|event| event.id == id)
    }

    pub fn location(&self, id: RecordId) -> Option<&Location> {
        self.state
            .locations
            .iter()
            .find(|location| location.id == id)
    }

    pub fn contact(&self, id: RecordId) -> Option<&Contact> {
        self.state.contacts.iter().find(|contact| contact.id == id)
    }

    /// Follows an event's weak location reference.
    ///
    /// Returns `None` both when no location is set and when the reference
    /// dangles; callers render either case as "none".
    pub fn resolve_location(&self, event: &Event) -> Option<&Location> {
        event.location_id.and_then(|id| self.location(id))
    }

    pub fn add_event(&mut self, item: Event) {
        self.dispatch(Command::AddEvent(item));
    }

    pub fn update_event(&mut self, item: Event) {
        self.dispatch(Command::UpdateEvent(item));
    }

    pub fn delete_event(&mut self, id: RecordId) {
        self.dispatch(Command::DeleteEvent(id));
    }

    pub fn add_location(&mut self, item: Location) {
        self.dispatch(Command::AddLocation(item));
    }

    pub fn update_location(&mut self, item: Location) {
        self.dispatch(Command::UpdateLocation(item));
    }

    pub fn delete_location(&mut self, id: RecordId) {
        self.dispatch(Command::DeleteLocation(id));
    }

    pub fn add_contact(&mut self, item: Contact) {
        self.dispatch(Command::AddContact(item));
    }

    pub fn update_contact(&mut self, item: Contact) {
        self.dispatch(Command::UpdateContact(item));
    }

    pub fn delete_contact(&mut self, id: RecordId) {
        self.dispatch(Command::DeleteContact(id));
    }

    /// Replaces all three collections wholesale. Used once at startup when
    /// restoring; bypasses the add/update/delete paths.
    pub fn load(&mut self, snapshot: State) {
        self.dispatch(Command::Load(snapshot));
    }

    /// Applies one command and notifies observers with the new state.
    pub fn dispatch(&mut self, command: Command) {
        self.log_unknown_id(&command);
        self.state = reduce(&self.state, &command);
        for observer in &self.observers {
            observer.state_changed(&self.state);
        }
    }

    // Update/delete of an unknown id stays a silent no-op by contract;
    // the debug line is the only way callers can detect it.
    fn log_unknown_id(&self, command: &Command) {
        let miss = match command {
            Command::UpdateEvent(item) if self.event(item.id).is_none() => {
                Some(("update_event", item.id))
            }
            Command::DeleteEvent(id) if self.event(*id).is_none() => Some(("delete_event", *id)),
            Command::UpdateLocation(item) if self.location(item.id).is_none() => {
                Some(("update_location", item.id))
            }
            Command::DeleteLocation(id) if self.location(*id).is_none() => {
                Some(("delete_location", *id))
            }
            Command::UpdateContact(item) if self.contact(item.id).is_none() => {
                Some(("update_contact", item.id))
            }
            Command::DeleteContact(id) if self.contact(*id).is_none() => {
                Some(("delete_contact", *id))
            }
            _ => None,
        };
        if let Some((operation, id)) = miss {
            debug!("event=store_mutate module=store status=noop operation={operation} id={id}");
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
