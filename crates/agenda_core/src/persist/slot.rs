//! Slot contracts and the persistence subscriber.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;

use super::{encode_snapshot, PersistResult};
use crate::store::{State, StateObserver};

/// One named key-value slot holding the serialized snapshot document.
///
/// The storage seam: the store never sees SQL or files, only this trait.
pub trait SlotStore {
    /// Returns the stored document, or `None` when the slot was never
    /// written.
    fn read(&self) -> PersistResult<Option<String>>;

    /// Overwrites the slot with a complete document.
    fn write(&self, value: &str) -> PersistResult<()>;
}

/// In-memory slot for tests and probes.
#[derive(Default)]
pub struct MemorySlotStore {
    value: RefCell<Option<String>>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a pre-existing document, as if a previous process had
    /// written it.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(value.into())),
        }
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self) -> PersistResult<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn write(&self, value: &str) -> PersistResult<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// Store observer that mirrors every new state into the slot.
///
/// Fire-and-forget by contract: a failed write is logged and the mutation
/// that triggered it is unaffected.
pub struct SlotWriter {
    slot: Rc<dyn SlotStore>,
}

impl SlotWriter {
    pub fn new<S: SlotStore + 'static>(slot: Rc<S>) -> Self {
        Self { slot }
    }
}

impl StateObserver for SlotWriter {
    fn state_changed(&self, state: &State) {
        let document = match encode_snapshot(state) {
            Ok(document) => document,
            Err(err) => {
                warn!("event=slot_write module=persist status=error error={err}");
                return;
            }
        };
        if let Err(err) = self.slot.write(&document) {
            warn!("event=slot_write module=persist status=error error={err}");
        }
    }
}
