//! Snapshot persistence for the record store.
//!
//! # Responsibility
//! - Write the full three-collection snapshot to a single named slot after
//!   every state transition.
//! - Read the slot back once at startup and hand structurally valid
//!   snapshots to the store.
//!
//! # Invariants
//! - The slot always holds a complete snapshot or nothing; no partial
//!   entity is ever written.
//! - Persistence failures are logged and never surfaced to the mutating
//!   caller.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod codec;
mod slot;
mod sqlite;

pub use codec::{decode_snapshot, encode_snapshot};
pub use slot::{MemorySlotStore, SlotStore, SlotWriter};
pub use sqlite::SqliteSlotStore;

pub type PersistResult<T> = Result<T, PersistError>;

#[derive(Debug)]
pub enum PersistError {
    Sqlite(rusqlite::Error),
    Encode(serde_json::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode snapshot: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "slot schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}
