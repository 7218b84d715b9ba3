//! Location record.

use serde::{Deserialize, Serialize};

use super::{require_non_empty, RecordId, ValidationError};

/// Named place an event can reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: RecordId,
    pub title: String,
    pub address: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

impl Location {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.title, "location", "title")?;
        require_non_empty(&self.address, "location", "address")
    }
}

/// Parses a coordinate entered as free text.
///
/// Unparseable or empty input defaults to 0, matching the input-time rule
/// for latitude/longitude.
pub fn parse_coordinate(input: &str) -> f64 {
    input.trim().parse().unwrap_or(0.0)
}
