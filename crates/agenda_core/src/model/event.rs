//! Event record.
//!
//! # Invariants
//! - `invited` preserves caller order; duplicates are permitted.
//! - `time` carries no timezone offset; `timezone` is the IANA zone name.
//! - `location_id` is a weak reference and may dangle after the Location
//!   is deleted. Display and narration render a dangling reference as
//!   "none" instead of failing.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::{require_non_empty, RecordId, ValidationError};

/// Repeat rule for an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recurrence {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
}

impl Recurrence {
    /// Human label used by list views and narration.
    pub fn label(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// Calendar event.
///
/// Serialized with the external snapshot schema's camelCase field names so
/// a persisted snapshot stays compatible with previously stored documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: RecordId,
    pub title: String,
    /// Invitee identifiers, order-preserving.
    #[serde(default)]
    pub invited: Vec<String>,
    pub date: NaiveDate,
    #[serde(with = "wall_clock")]
    pub time: NaiveTime,
    pub timezone: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub recurrence: Recurrence,
    /// Reminder lead time in minutes; absent means no reminder.
    #[serde(default)]
    pub reminder_minutes_before: Option<u32>,
    #[serde(default)]
    pub category: String,
    /// Weak reference to a Location; may dangle.
    #[serde(default)]
    pub location_id: Option<RecordId>,
}

impl Event {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty(&self.title, "event", "title")
    }
}

/// Wall-clock time as `HH:MM`.
///
/// Stored documents carry minute precision; decoding also accepts a
/// trailing seconds component.
mod wall_clock {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&text, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&text, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_event() -> Event {
        Event {
            id: Uuid::new_v4(),
            title: "Planning sync".to_string(),
            invited: vec!["ana@example.com".to_string()],
            date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            timezone: "America/Denver".to_string(),
            description: String::new(),
            recurrence: Recurrence::Weekly,
            reminder_minutes_before: Some(30),
            category: "Meeting".to_string(),
            location_id: None,
        }
    }

    #[test]
    fn serializes_with_external_field_names_and_minute_precision() {
        let json = serde_json::to_value(sample_event()).unwrap();
        assert_eq!(json["time"], "10:00");
        assert_eq!(json["date"], "2025-07-01");
        assert_eq!(json["recurrence"], "weekly");
        assert_eq!(json["reminderMinutesBefore"], 30);
        assert!(json["locationId"].is_null());
    }

    #[test]
    fn decodes_time_with_or_without_seconds() {
        let mut json = serde_json::to_value(sample_event()).unwrap();
        json["time"] = "14:30:00".into();
        let event: Event = serde_json::from_value(json).unwrap();
        assert_eq!(event.time, NaiveTime::from_hms_opt(14, 30, 0).unwrap());
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut event = sample_event();
        event.title = "  ".to_string();
        assert!(matches!(
            event.validate(),
            Err(ValidationError::EmptyField { record: "event", field: "title" })
        ));
    }
}
