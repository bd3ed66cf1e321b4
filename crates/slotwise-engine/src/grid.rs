//! Zoned time-grid helpers: day bounds, weekday test, fixed-size slot
//! enumeration over a single calendar day, and display-date formatting.
//!
//! All boundaries are computed in the scheduling timezone and carried around
//! as absolute instants, so interval comparisons never depend on the
//! caller's local zone.

use chrono::{DateTime, Datelike, Days, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::error::{EngineError, Result};

/// An ordered pair of absolute instants.
///
/// Used both for generated candidate slots and for timed busy events.
/// Invariant: `start < end` (checked by [`TimeInterval::new`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeInterval {
    /// Create an interval, rejecting empty or inverted ranges.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(EngineError::EmptyInterval);
        }
        Ok(Self { start, end })
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// True for Monday through Friday.
pub fn is_weekday(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Resolve a local wall-clock datetime to an instant.
///
/// Ambiguous times (DST fall-back) take the earlier offset. Times erased by
/// a DST spring-forward gap do not exist and resolve to `None`.
fn resolve_local(local: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earlier, _) => Some(earlier.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

/// Resolve a local wall-clock time, surfacing DST-gap times as an error.
pub(crate) fn local_instant(date: NaiveDate, time: NaiveTime, tz: Tz) -> Result<DateTime<Utc>> {
    resolve_local(date.and_time(time), tz)
        .ok_or_else(|| EngineError::UnrepresentableLocalTime(format!("{date}T{time}")))
}

/// Start (00:00:00) and end (23:59:59) of a calendar day as instants.
pub fn day_bounds(date: NaiveDate, tz: Tz) -> Result<(DateTime<Utc>, DateTime<Utc>)> {
    let last_second = NaiveTime::from_hms_opt(23, 59, 59).expect("valid wall-clock time");
    let start = local_instant(date, NaiveTime::MIN, tz)?;
    let end = local_instant(date, last_second, tz)?;
    Ok((start, end))
}

/// Enumerate the fixed slot grid for one calendar day.
///
/// Produces contiguous, non-overlapping intervals of `slot_minutes` covering
/// `[start_hour, end_hour)` in ascending order; boundaries roll over hour
/// marks exactly. Grid times erased by a DST gap are skipped, and ambiguous
/// times take the earlier offset.
pub fn generate_day_slots(date: NaiveDate, config: &SchedulerConfig) -> Result<Vec<TimeInterval>> {
    let tz = config.timezone;
    let step = Duration::minutes(config.slot_minutes as i64);

    let open = date.and_time(
        NaiveTime::from_hms_opt(config.hours.start_hour, 0, 0)
            .ok_or(EngineError::InvalidBusinessHours {
                start: config.hours.start_hour,
                end: config.hours.end_hour,
            })?,
    );
    // An end hour of 24 closes at midnight of the next day.
    let close = if config.hours.end_hour == 24 {
        date.checked_add_days(Days::new(1))
            .map(|next| next.and_time(NaiveTime::MIN))
            .ok_or_else(|| EngineError::UnrepresentableLocalTime(date.to_string()))?
    } else {
        date.and_time(
            NaiveTime::from_hms_opt(config.hours.end_hour, 0, 0)
                .ok_or(EngineError::InvalidBusinessHours {
                    start: config.hours.start_hour,
                    end: config.hours.end_hour,
                })?,
        )
    };

    let mut slots = Vec::new();
    let mut cursor = open;
    while cursor + step <= close {
        let next = cursor + step;
        if let (Some(start), Some(end)) = (resolve_local(cursor, tz), resolve_local(next, tz)) {
            slots.push(TimeInterval { start, end });
        }
        cursor = next;
    }

    Ok(slots)
}

/// Ordinal suffix for a day of month: 1st, 2nd, 3rd, 4th... with the
/// 11th/12th/13th exceptions.
fn ordinal_suffix(day: u32) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Display key for a calendar day, e.g. "Monday, 1st January 2024".
///
/// Used only for presentation, never for comparison.
pub fn format_ordinal_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{}, {}{} {} {}",
        date.format("%A"),
        day,
        ordinal_suffix(day),
        date.format("%B"),
        date.year()
    )
}
