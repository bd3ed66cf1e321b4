//! Slot availability against busy events.
//!
//! A candidate is available iff no busy event blocks it. Overlap is strict
//! and half-open: touching endpoints do not conflict, so back-to-back
//! bookings are both available.

use chrono_tz::Tz;

use crate::event::{BusyEvent, EventStatus, Transparency};
use crate::grid::TimeInterval;

/// True when no busy event blocks the candidate interval.
pub fn is_available(candidate: &TimeInterval, busy: &[BusyEvent], tz: Tz) -> bool {
    busy.iter().all(|event| !blocks(event, candidate, tz))
}

/// Whether a single busy event blocks the candidate.
fn blocks(event: &BusyEvent, candidate: &TimeInterval, tz: Tz) -> bool {
    match event {
        // An all-day marker blocks the entire matching local date, with no
        // partial-day carve-out.
        BusyEvent::AllDay { date } => candidate.start.with_timezone(&tz).date_naive() == *date,
        BusyEvent::Timed {
            status: EventStatus::Cancelled,
            ..
        } => false,
        BusyEvent::Timed {
            transparency: Transparency::Transparent,
            ..
        } => false,
        BusyEvent::Timed { interval, .. } => {
            // Two intervals overlap iff a.start < b.end AND b.start < a.end;
            // this excludes the adjacent case where one ends as the other starts.
            candidate.start < interval.end && interval.start < candidate.end
        }
    }
}
