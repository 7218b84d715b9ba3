//! Core domain logic for the agenda record manager.
//!
//! Owns the canonical collections of events, locations and contacts, the
//! reducer that mutates them, snapshot persistence to a single storage
//! slot, and the speech controller behind every read-aloud affordance.
//! UI layers consume this crate and add no invariants of their own.

pub mod logging;
pub mod model;
pub mod persist;
pub mod speech;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::{
    parse_coordinate, Contact, Event, Location, Recurrence, RecordId, ValidationError, SALUTATIONS,
};
pub use persist::{
    decode_snapshot, encode_snapshot, MemorySlotStore, PersistError, PersistResult, SlotStore,
    SlotWriter, SqliteSlotStore,
};
pub use speech::{
    contact_sentence, event_sentence, location_sentence, EngineError, PlaybackDone, ProcessEngine,
    SpeechConfig, SpeechController, SpeechEngine, Utterance, Voice,
};
pub use store::{reduce, seed, Command, State, StateObserver, Store};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
