//! Merge consecutive free slots into readable ranges and group them by day.
//!
//! This is the presentation half of the availability computation: the final
//! payload maps full-text ordinal date keys ("Monday, 1st January 2024") to
//! merged clock ranges ("10AM - 11:30AM"), days in ascending date order.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Timelike};
use chrono_tz::Tz;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::grid::{self, TimeInterval};

/// One calendar day's merged availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayAvailability {
    pub date: NaiveDate,
    /// Display key, e.g. "Monday, 1st January 2024".
    pub label: String,
    /// Merged ranges in ascending order, e.g. "10AM - 11:30AM".
    pub ranges: Vec<String>,
}

/// Availability for a whole request window, days in ascending date order.
///
/// Serializes as a JSON object mapping each day label to its ranges. The
/// map is emitted in date order, which survives into the output because
/// `serde_json` is built with `preserve_order`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AvailabilityResult {
    pub days: Vec<DayAvailability>,
}

impl AvailabilityResult {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Ranges for a display label, if the day is present.
    pub fn ranges_for(&self, label: &str) -> Option<&[String]> {
        self.days
            .iter()
            .find(|day| day.label == label)
            .map(|day| day.ranges.as_slice())
    }
}

impl Serialize for AvailabilityResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for day in &self.days {
            map.serialize_entry(&day.label, &day.ranges)?;
        }
        map.end()
    }
}

/// Clock label in the scheduling zone: 12-hour clock, no leading zero,
/// minutes omitted on the hour ("10AM", "11:30AM").
fn clock_label(instant: DateTime<Tz>) -> String {
    let (pm, hour) = instant.hour12();
    let meridiem = if pm { "PM" } else { "AM" };
    if instant.minute() == 0 {
        format!("{hour}{meridiem}")
    } else {
        format!("{}:{:02}{}", hour, instant.minute(), meridiem)
    }
}

/// Collapse runs of exactly adjacent slots into display ranges.
///
/// Precondition: the input is sorted ascending and non-overlapping, which
/// generation order guarantees. Only adjacency is merged — the current range
/// extends while the next slot starts exactly where it ends. This is not a
/// general interval union.
pub fn merge_consecutive(slots: &[TimeInterval], tz: Tz) -> Vec<String> {
    let mut merged: Vec<TimeInterval> = Vec::new();
    for slot in slots {
        match merged.last_mut() {
            Some(last) if last.end == slot.start => last.end = slot.end,
            _ => merged.push(*slot),
        }
    }

    merged
        .iter()
        .map(|range| {
            format!(
                "{} - {}",
                clock_label(range.start.with_timezone(&tz)),
                clock_label(range.end.with_timezone(&tz))
            )
        })
        .collect()
}

/// Partition filtered slots by local calendar date and merge each day.
///
/// Days appear in ascending date order; a date with no slots never appears.
pub fn group_by_day(slots: &[TimeInterval], tz: Tz) -> AvailabilityResult {
    let mut by_day: BTreeMap<NaiveDate, Vec<TimeInterval>> = BTreeMap::new();
    for slot in slots {
        by_day
            .entry(slot.start.with_timezone(&tz).date_naive())
            .or_default()
            .push(*slot);
    }

    let days = by_day
        .into_iter()
        .map(|(date, day_slots)| DayAvailability {
            date,
            label: grid::format_ordinal_date(date),
            ranges: merge_consecutive(&day_slots, tz),
        })
        .collect();

    AvailabilityResult { days }
}
