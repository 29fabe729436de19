//! Series membership via the instance id convention.
//!
//! Repeating instances are stored as standalone records; the only link
//! between them is the id convention `"{baseId}_{YYYY-MM-DD}"`. These
//! helpers derive instance ids and recover the base id, so a caller holding
//! any one instance can find and act on the whole series (edit or delete
//! all siblings at once).

use chrono::NaiveDate;

use crate::event::Event;

/// Build the id for a repeating instance on a concrete date.
pub fn instance_id(base_id: &str, date: NaiveDate) -> String {
    format!("{}_{}", base_id, date.format("%Y-%m-%d"))
}

/// Recover the base (anchor) id from an event id.
///
/// Strips the trailing `_YYYY-MM-DD` suffix if present; ids without one are
/// returned unchanged, so base ids that themselves contain underscores
/// survive the round trip.
pub fn base_id(event_id: &str) -> &str {
    match event_id.rsplit_once('_') {
        Some((prefix, suffix)) if NaiveDate::parse_from_str(suffix, "%Y-%m-%d").is_ok() => prefix,
        _ => event_id,
    }
}

/// All events belonging to the series identified by `base`.
pub fn series_instances<'a>(events: &'a [Event], base: &str) -> Vec<&'a Event> {
    events.iter().filter(|e| base_id(&e.id) == base).collect()
}
