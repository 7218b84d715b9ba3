//! Snapshot text codec.
//!
//! The slot holds one JSON document `{events, locations, contacts}`. The
//! document carries no version field; any structurally different payload
//! is treated as absent and the store falls back to its seed data.

use serde_json::Value;

use super::PersistResult;
use crate::store::State;

const COLLECTION_FIELDS: [&str; 3] = ["events", "locations", "contacts"];

/// Serializes the full state for the slot.
pub fn encode_snapshot(state: &State) -> PersistResult<String> {
    Ok(serde_json::to_string(state)?)
}

/// Parses a stored document back into a state snapshot.
///
/// Returns `None` when the text is not JSON, the top level is not an
/// object with the three collection fields, any of those fields is not a
/// sequence, or an entity inside fails to decode. Recovery (seeding) is
/// the caller's concern.
pub fn decode_snapshot(text: &str) -> Option<State> {
    let value: Value = serde_json::from_str(text).ok()?;
    let object = value.as_object()?;
    if !COLLECTION_FIELDS
        .iter()
        .all(|field| object.get(*field).is_some_and(Value::is_array))
    {
        return None;
    }
    serde_json::from_value(value).ok()
}
