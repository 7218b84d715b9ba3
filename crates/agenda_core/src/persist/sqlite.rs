//! SQLite-backed slot.
//!
//! # Responsibility
//! - Open file or in-memory SQLite storage for the snapshot slot.
//! - Bootstrap the one-table schema before any read or write.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A slot written by a newer schema version is rejected at open, never
//!   silently reinterpreted.

use std::path::Path;
use std::time::Instant;

use log::{error, info};
use rusqlite::{Connection, OptionalExtension};

use super::{PersistError, PersistResult, SlotStore};

const SLOT_KEY: &str = "agenda.records";
const SCHEMA_VERSION: u32 = 1;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS slots (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);";

/// Durable slot stored in a single-table SQLite database.
#[derive(Debug)]
pub struct SqliteSlotStore {
    conn: Connection,
}

impl SqliteSlotStore {
    /// Opens (creating if needed) the slot database at `path`.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let started_at = Instant::now();
        info!("event=slot_open module=persist status=start mode=file");
        match Connection::open(path).map_err(PersistError::from).and_then(Self::bootstrap) {
            Ok(store) => {
                info!(
                    "event=slot_open module=persist status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                error!(
                    "event=slot_open module=persist status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens a throwaway in-memory slot, used by tests and probes.
    pub fn open_in_memory() -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Self::bootstrap(conn)
    }

    fn bootstrap(conn: Connection) -> PersistResult<Self> {
        let db_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
        if db_version > SCHEMA_VERSION {
            return Err(PersistError::UnsupportedSchemaVersion {
                db_version,
                latest_supported: SCHEMA_VERSION,
            });
        }
        if db_version < SCHEMA_VERSION {
            conn.execute_batch(SCHEMA_SQL)?;
            conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
        }
        Ok(Self { conn })
    }
}

impl SlotStore for SqliteSlotStore {
    fn read(&self) -> PersistResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE key = ?1;",
                [SLOT_KEY],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, value: &str) -> PersistResult<()> {
        self.conn.execute(
            "INSERT INTO slots (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            [SLOT_KEY, value],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_of_unwritten_slot_is_none() {
        let store = SqliteSlotStore::open_in_memory().unwrap();
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn write_overwrites_previous_value() {
        let store = SqliteSlotStore::open_in_memory().unwrap();
        store.write("first").unwrap();
        store.write("second").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn newer_schema_version_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();
        let err = SqliteSlotStore::bootstrap(conn).unwrap_err();
        assert!(matches!(
            err,
            PersistError::UnsupportedSchemaVersion { db_version: 99, .. }
        ));
    }
}
