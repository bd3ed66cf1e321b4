//! Tests for multi-day availability: weekend omission, busy-event
//! exclusion, day grouping, and purity.

use chrono::{DateTime, NaiveDate, Utc};
use slotwise_engine::compute_availability;
use slotwise_engine::config::SchedulerConfig;
use slotwise_engine::event::{BusyEvent, EventStatus, Transparency};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn busy(start: &str, end: &str) -> BusyEvent {
    BusyEvent::timed(utc(start), utc(end))
}

fn config() -> SchedulerConfig {
    SchedulerConfig::default()
}

// ── Window expansion ────────────────────────────────────────────────────────

#[test]
fn full_week_has_five_open_weekdays() {
    // Mon 2024-01-01 through Sun 2024-01-07, no busy events.
    let result =
        compute_availability(date("2024-01-01"), date("2024-01-07"), &[], &config()).unwrap();

    assert_eq!(result.days.len(), 5);
    assert_eq!(result.days[0].label, "Monday, 1st January 2024");
    assert_eq!(result.days[4].label, "Friday, 5th January 2024");
    for day in &result.days {
        assert_eq!(day.ranges, vec!["10AM - 5PM"]);
    }
}

#[test]
fn weekend_dates_never_appear() {
    let result =
        compute_availability(date("2024-01-06"), date("2024-01-07"), &[], &config()).unwrap();
    assert!(result.is_empty());
}

#[test]
fn single_day_window_is_inclusive() {
    let result =
        compute_availability(date("2024-01-01"), date("2024-01-01"), &[], &config()).unwrap();

    assert_eq!(result.days.len(), 1);
    assert_eq!(result.days[0].date, date("2024-01-01"));
}

#[test]
fn inverted_window_yields_empty_result() {
    let result =
        compute_availability(date("2024-01-05"), date("2024-01-01"), &[], &config()).unwrap();
    assert!(result.is_empty());
}

// ── Busy-event exclusion ────────────────────────────────────────────────────

#[test]
fn busy_event_splits_the_day_into_two_ranges() {
    // 2PM-2:30PM local (19:00Z-19:30Z) on Monday.
    let events = vec![busy("2024-01-01T19:00:00Z", "2024-01-01T19:30:00Z")];

    let result =
        compute_availability(date("2024-01-01"), date("2024-01-01"), &events, &config()).unwrap();

    assert_eq!(
        result.ranges_for("Monday, 1st January 2024"),
        Some(&["10AM - 2PM".to_string(), "2:30PM - 5PM".to_string()][..])
    );
}

#[test]
fn all_day_marker_removes_exactly_one_day() {
    let events = vec![BusyEvent::all_day(date("2024-01-02"))];

    let result =
        compute_availability(date("2024-01-01"), date("2024-01-03"), &events, &config()).unwrap();

    assert_eq!(result.days.len(), 2);
    assert_eq!(result.days[0].date, date("2024-01-01"));
    assert_eq!(result.days[1].date, date("2024-01-03"));
}

#[test]
fn fully_blocked_day_is_omitted_not_empty() {
    // A 10-17 local event erases every slot on Monday.
    let events = vec![busy("2024-01-01T15:00:00Z", "2024-01-01T22:00:00Z")];

    let result =
        compute_availability(date("2024-01-01"), date("2024-01-02"), &events, &config()).unwrap();

    assert_eq!(result.days.len(), 1);
    assert_eq!(result.days[0].date, date("2024-01-02"));
    assert_eq!(result.ranges_for("Monday, 1st January 2024"), None);
}

#[test]
fn cancelled_and_transparent_events_reduce_nothing() {
    let events = vec![
        busy("2024-01-01T15:00:00Z", "2024-01-01T22:00:00Z").with_status(EventStatus::Cancelled),
        busy("2024-01-01T15:00:00Z", "2024-01-01T22:00:00Z")
            .with_transparency(Transparency::Transparent),
    ];

    let with_events =
        compute_availability(date("2024-01-01"), date("2024-01-05"), &events, &config()).unwrap();
    let without =
        compute_availability(date("2024-01-01"), date("2024-01-05"), &[], &config()).unwrap();

    assert_eq!(with_events, without);
}

#[test]
fn confirmed_opaque_event_removes_exactly_its_slot() {
    // Busy 10:00-10:30 local: the day opens at 10:30AM.
    let events = vec![busy("2024-01-01T15:00:00Z", "2024-01-01T15:30:00Z")];

    let result =
        compute_availability(date("2024-01-01"), date("2024-01-01"), &events, &config()).unwrap();

    assert_eq!(
        result.ranges_for("Monday, 1st January 2024"),
        Some(&["10:30AM - 5PM".to_string()][..])
    );
}

// ── Purity ──────────────────────────────────────────────────────────────────

#[test]
fn identical_inputs_yield_identical_output() {
    let events = vec![
        busy("2024-01-02T16:00:00Z", "2024-01-02T17:00:00Z"),
        BusyEvent::all_day(date("2024-01-04")),
    ];

    let first =
        compute_availability(date("2024-01-01"), date("2024-01-07"), &events, &config()).unwrap();
    let second =
        compute_availability(date("2024-01-01"), date("2024-01-07"), &events, &config()).unwrap();

    assert_eq!(first, second);
}
