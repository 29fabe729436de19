//! Repeat-rule expansion for repeating events.
//!
//! Expands an anchor event plus a repeat rule into the standalone dated
//! instances the rule implies, up to a horizon date. The expansion is pure
//! and deterministic: no clock reads, no shared state, no I/O.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{RecalError, RecalResult};
use crate::event::Event;
use crate::series;

/// Latest date the application schedules events for.
///
/// Expansion never generates instances past the horizon, regardless of the
/// rule's end date. This is the application default; callers pass their own
/// horizon to [`expand_repeating_event`] to move it.
pub const DEFAULT_HORIZON: NaiveDate = match NaiveDate::from_ymd_opt(2025, 12, 31) {
    Some(date) => date,
    None => panic!("default horizon is a valid date"),
};

/// How an event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum RepeatKind {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl From<String> for RepeatKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "daily" => RepeatKind::Daily,
            "weekly" => RepeatKind::Weekly,
            "monthly" => RepeatKind::Monthly,
            "yearly" => RepeatKind::Yearly,
            // Unrecognized kinds degrade to a single, non-repeating event
            // rather than failing the whole record.
            _ => RepeatKind::None,
        }
    }
}

/// A repeat rule attached to an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Repeat {
    #[serde(rename = "type")]
    pub kind: RepeatKind,
    pub interval: u32,
    /// Last date to repeat until (inclusive). Clamped to the horizon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

impl Default for Repeat {
    fn default() -> Self {
        Repeat {
            kind: RepeatKind::None,
            interval: 1,
            end_date: None,
        }
    }
}

impl Repeat {
    /// A rule that never repeats.
    pub fn none() -> Self {
        Repeat::default()
    }

    pub fn new(kind: RepeatKind, interval: u32, end_date: Option<NaiveDate>) -> Self {
        Repeat {
            kind,
            interval,
            end_date,
        }
    }
}

/// Expand an anchor event into the instances its repeat rule implies.
///
/// Returns instances ordered by ascending date, from the anchor date through
/// `min(rule end date, horizon)` inclusive. The first instance always falls
/// on the anchor date, so an end date before the anchor still yields the
/// anchor instance alone. Every instance copies the anchor's fields verbatim
/// except `date` and `id`; ids follow the `"{anchorId}_{YYYY-MM-DD}"`
/// convention from [`crate::series`].
///
/// A rule of kind `none` yields a single instance with the id unchanged.
pub fn expand_repeating_event(
    base: &Event,
    repeat: &Repeat,
    horizon: NaiveDate,
) -> RecalResult<Vec<Event>> {
    if repeat.kind == RepeatKind::None {
        return Ok(vec![base.clone()]);
    }
    if repeat.interval == 0 {
        return Err(RecalError::InvalidInterval);
    }

    let anchor = base.date;
    let end = repeat.end_date.map_or(horizon, |d| d.min(horizon));

    let mut instances = vec![instance_on(base, anchor)];
    let mut next = next_date(anchor, anchor, repeat.kind, repeat.interval, horizon);

    while let Some(date) = next {
        if date > end {
            break;
        }
        instances.push(instance_on(base, date));
        next = next_date(date, anchor, repeat.kind, repeat.interval, horizon);
    }

    Ok(instances)
}

/// Materialize the anchor event on a concrete date as a standalone record.
fn instance_on(base: &Event, date: NaiveDate) -> Event {
    Event {
        id: series::instance_id(&base.id, date),
        date,
        ..base.clone()
    }
}

/// The recurrence point after `current`, or `None` once the horizon rules
/// out any further instance.
fn next_date(
    current: NaiveDate,
    anchor: NaiveDate,
    kind: RepeatKind,
    interval: u32,
    horizon: NaiveDate,
) -> Option<NaiveDate> {
    match kind {
        RepeatKind::None => None,
        RepeatKind::Daily => current.checked_add_days(Days::new(u64::from(interval))),
        RepeatKind::Weekly => current.checked_add_days(Days::new(7 * u64::from(interval))),
        RepeatKind::Monthly => next_monthly(current, anchor.day(), interval, horizon),
        RepeatKind::Yearly => next_yearly(current, anchor, interval, horizon),
    }
}

/// Advance by `interval` months, landing on the anchor's day-of-month.
///
/// Months with fewer days than the target day are skipped entirely (never
/// clamped to their last day); the scan continues month by month until a
/// month containing the day is found or the horizon year is passed.
fn next_monthly(
    current: NaiveDate,
    target_day: u32,
    interval: u32,
    horizon: NaiveDate,
) -> Option<NaiveDate> {
    let mut months = month_index(current) + interval as i32;
    loop {
        let year = months.div_euclid(12);
        let month = months.rem_euclid(12) as u32 + 1;
        if year > horizon.year() {
            return None;
        }
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, target_day) {
            return Some(date);
        }
        // Month too short for the target day: skip it.
        months += 1;
    }
}

/// Advance by `interval` years, landing on the anchor's month/day.
///
/// Years where the day does not exist (Feb 29 off leap years) are skipped;
/// the scan steps by `interval` years up to the horizon year.
fn next_yearly(
    current: NaiveDate,
    anchor: NaiveDate,
    interval: u32,
    horizon: NaiveDate,
) -> Option<NaiveDate> {
    let mut year = current.year() + interval as i32;
    while year <= horizon.year() {
        if let Some(date) = NaiveDate::from_ymd_opt(year, anchor.month(), anchor.day()) {
            return Some(date);
        }
        year += interval as i32;
    }
    None
}

/// Months elapsed since year 0, for month arithmetic that crosses years.
fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month0() as i32
}

/// Gregorian leap year rule: divisible by 400, or by 4 but not by 100.
pub fn is_leap_year(year: i32) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Whether a month (1-12) has 31 days.
pub fn month_has_31_days(month: u32) -> bool {
    matches!(month, 1 | 3 | 5 | 7 | 8 | 10 | 12)
}

/// Number of days in a month, accounting for leap years.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}
