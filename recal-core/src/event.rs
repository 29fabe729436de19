//! Calendar event records.
//!
//! `Event` mirrors the JSON record shape of the event store: camelCase
//! keys, `YYYY-MM-DD` dates and `HH:MM` times-of-day. A repeating series
//! is not stored as a rule object; every expanded instance is a standalone
//! record whose id encodes its series membership (see [`crate::series`]).

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{RecalError, RecalResult};
use crate::recurrence::Repeat;

/// A calendar event record — either an anchor event or one expanded instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(with = "time_hm")]
    pub start_time: NaiveTime,
    #[serde(with = "time_hm")]
    pub end_time: NaiveTime,
    pub description: String,
    pub location: String,
    pub category: String,
    pub repeat: Repeat,
    /// Minutes before the event to notify
    pub notification_time: i64,
}

/// The `{ "events": [...] }` wrapper used by the event store and its
/// batch endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventList {
    pub events: Vec<Event>,
}

/// Parse a `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> RecalResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| RecalError::InvalidDate(s.to_string()))
}

/// Parse an `HH:MM` time-of-day string.
pub fn parse_time(s: &str) -> RecalResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| RecalError::InvalidTime(s.to_string()))
}

/// Serialize/deserialize `NaiveTime` as `HH:MM` (the store's time format).
mod time_hm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom)
    }
}
