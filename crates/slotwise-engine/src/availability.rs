//! Availability over a multi-day window.
//!
//! The entry point for "show me open slots this week": expand the window
//! day by day, generate each weekday's grid, drop slots blocked by busy
//! events, then merge and group the survivors.

use chrono::NaiveDate;

use crate::aggregate::{self, AvailabilityResult};
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::event::BusyEvent;
use crate::filter;
use crate::grid::{self, TimeInterval};

/// Compute merged, day-grouped availability for `[window_start, window_end]`
/// (inclusive), given every busy event intersecting that window.
///
/// Non-weekdays contribute zero slots and never appear as keys; neither do
/// weekdays whose every slot is blocked. Pure function of its inputs — the
/// caller fetches busy events for the full window beforehand.
pub fn compute_availability(
    window_start: NaiveDate,
    window_end: NaiveDate,
    busy: &[BusyEvent],
    config: &SchedulerConfig,
) -> Result<AvailabilityResult> {
    let tz = config.timezone;
    let mut open_slots: Vec<TimeInterval> = Vec::new();

    let mut day = window_start;
    while day <= window_end {
        if grid::is_weekday(day) {
            for slot in grid::generate_day_slots(day, config)? {
                if filter::is_available(&slot, busy, tz) {
                    open_slots.push(slot);
                }
            }
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    Ok(aggregate::group_by_day(&open_slots, tz))
}
