//! Tests for adjacent-slot merging, clock labels, and day grouping.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use slotwise_engine::aggregate::{group_by_day, merge_consecutive};
use slotwise_engine::grid::TimeInterval;

// ── Helpers ─────────────────────────────────────────────────────────────────

const NEW_YORK: Tz = chrono_tz::America::New_York;

fn utc(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn slot(start: &str, end: &str) -> TimeInterval {
    TimeInterval::new(utc(start), utc(end)).unwrap()
}

// ── Merging ─────────────────────────────────────────────────────────────────

#[test]
fn empty_input_merges_to_nothing() {
    assert!(merge_consecutive(&[], NEW_YORK).is_empty());
}

#[test]
fn adjacent_slots_merge_into_one_range() {
    // 10:00-10:30 and 10:30-11:00 local collapse into "10AM - 11AM".
    let slots = vec![
        slot("2024-01-01T15:00:00Z", "2024-01-01T15:30:00Z"),
        slot("2024-01-01T15:30:00Z", "2024-01-01T16:00:00Z"),
    ];

    assert_eq!(merge_consecutive(&slots, NEW_YORK), vec!["10AM - 11AM"]);
}

#[test]
fn gap_between_slots_produces_two_ranges() {
    // 10:00-10:30 and 11:00-11:30 local do NOT merge.
    let slots = vec![
        slot("2024-01-01T15:00:00Z", "2024-01-01T15:30:00Z"),
        slot("2024-01-01T16:00:00Z", "2024-01-01T16:30:00Z"),
    ];

    assert_eq!(
        merge_consecutive(&slots, NEW_YORK),
        vec!["10AM - 10:30AM", "11AM - 11:30AM"]
    );
}

#[test]
fn long_run_merges_into_single_range() {
    // The full 10-17 local grid collapses into one range.
    let mut slots = Vec::new();
    for half_hour in 0..14 {
        let start = utc("2024-01-01T15:00:00Z") + chrono::Duration::minutes(30 * half_hour);
        slots.push(TimeInterval::new(start, start + chrono::Duration::minutes(30)).unwrap());
    }

    assert_eq!(merge_consecutive(&slots, NEW_YORK), vec!["10AM - 5PM"]);
}

// ── Clock labels ────────────────────────────────────────────────────────────

#[test]
fn labels_omit_minutes_on_the_hour_and_skip_leading_zeros() {
    let slots = vec![slot("2024-01-01T14:00:00Z", "2024-01-01T14:30:00Z")];
    // 9:00-9:30 local: single-digit hour, half-hour end.
    assert_eq!(merge_consecutive(&slots, NEW_YORK), vec!["9AM - 9:30AM"]);
}

#[test]
fn labels_cross_noon_correctly() {
    // 11:30AM-12:30PM local.
    let slots = vec![
        slot("2024-01-01T16:30:00Z", "2024-01-01T17:00:00Z"),
        slot("2024-01-01T17:00:00Z", "2024-01-01T17:30:00Z"),
    ];

    assert_eq!(merge_consecutive(&slots, NEW_YORK), vec!["11:30AM - 12:30PM"]);
}

#[test]
fn labels_follow_the_scheduling_zone() {
    let slots = vec![slot("2024-01-01T15:00:00Z", "2024-01-01T15:30:00Z")];

    assert_eq!(merge_consecutive(&slots, NEW_YORK), vec!["10AM - 10:30AM"]);
    assert_eq!(
        merge_consecutive(&slots, chrono_tz::UTC),
        vec!["3PM - 3:30PM"]
    );
}

// ── Grouping ────────────────────────────────────────────────────────────────

#[test]
fn slots_group_by_local_date_in_ascending_order() {
    // Two days, fed out of order.
    let slots = vec![
        slot("2024-01-02T15:00:00Z", "2024-01-02T15:30:00Z"),
        slot("2024-01-01T15:00:00Z", "2024-01-01T15:30:00Z"),
        slot("2024-01-01T15:30:00Z", "2024-01-01T16:00:00Z"),
    ];

    let result = group_by_day(&slots, NEW_YORK);

    assert_eq!(result.days.len(), 2);
    assert_eq!(result.days[0].label, "Monday, 1st January 2024");
    assert_eq!(result.days[0].ranges, vec!["10AM - 11AM"]);
    assert_eq!(result.days[1].label, "Tuesday, 2nd January 2024");
    assert_eq!(result.days[1].ranges, vec!["10AM - 10:30AM"]);
}

#[test]
fn grouping_empty_slots_yields_empty_result() {
    let result = group_by_day(&[], NEW_YORK);
    assert!(result.is_empty());
}

#[test]
fn ranges_for_looks_up_by_label() {
    let slots = vec![slot("2024-01-01T15:00:00Z", "2024-01-01T15:30:00Z")];
    let result = group_by_day(&slots, NEW_YORK);

    assert_eq!(
        result.ranges_for("Monday, 1st January 2024"),
        Some(&["10AM - 10:30AM".to_string()][..])
    );
    assert_eq!(result.ranges_for("Tuesday, 2nd January 2024"), None);
}

// ── Serialization ───────────────────────────────────────────────────────────

#[test]
fn result_serializes_as_date_ordered_map() {
    let slots = vec![
        slot("2024-01-02T15:00:00Z", "2024-01-02T15:30:00Z"),
        slot("2024-01-01T15:00:00Z", "2024-01-01T15:30:00Z"),
    ];
    let result = group_by_day(&slots, NEW_YORK);

    // preserve_order keeps the ascending-date insertion order in the JSON.
    let json = serde_json::to_string(&result).unwrap();
    assert_eq!(
        json,
        r#"{"Monday, 1st January 2024":["10AM - 10:30AM"],"Tuesday, 2nd January 2024":["10AM - 10:30AM"]}"#
    );
}

#[test]
fn empty_result_serializes_as_empty_object() {
    let json = serde_json::to_string(&group_by_day(&[], NEW_YORK)).unwrap();
    assert_eq!(json, "{}");
}
