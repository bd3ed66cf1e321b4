//! Booking validation: weekday, business hours, then conflicts.
//!
//! A state-free pipeline over a single proposed appointment. Rules run in
//! order and the first failure determines the rejection; rejections are
//! ordinary decision values, never errors. Structural rules (weekday,
//! business hours) need no calendar data, so callers can short-circuit
//! before fetching anything.

use std::fmt;

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::event::BusyEvent;
use crate::filter;
use crate::grid::{self, TimeInterval};

/// A proposed appointment whose shape has already been validated upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Calendar date in the scheduling timezone.
    pub date: NaiveDate,
    /// Local wall-clock start time.
    pub start_time: NaiveTime,
    pub duration_minutes: u32,
    pub title: String,
    pub attendee_email: String,
    pub attendee_name: String,
}

/// Why a booking was refused.
///
/// Weekday and business-hours rejections are structural: decided from fixed
/// policy alone, without consulting the calendar source. A conflict is a
/// data-dependent soft refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    OutsideWeekday,
    OutsideBusinessHours,
    SlotConflict,
}

impl Rejection {
    /// True for rejections determined by fixed policy alone.
    pub fn is_structural(self) -> bool {
        !matches!(self, Self::SlotConflict)
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phrase = match self {
            Self::OutsideWeekday => "appointments are only available Monday through Friday",
            Self::OutsideBusinessHours => "the requested time falls outside business hours",
            Self::SlotConflict => "the requested time is no longer available",
        };
        f.write_str(phrase)
    }
}

/// A request that passed every rule, ready to hand to the calendar source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedBooking {
    pub interval: TimeInterval,
    pub title: String,
    pub attendee_email: String,
    pub attendee_name: String,
}

/// Outcome of the validation pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingDecision {
    Accepted(AcceptedBooking),
    Rejected(Rejection),
}

/// Apply the structural rules (weekday, then business hours) in order.
///
/// Returns the first failing rule, or `None` when the proposal is
/// structurally valid. Needs no calendar data. The appointment may end
/// exactly at closing, but not spill past it.
pub fn check_policy(request: &BookingRequest, config: &SchedulerConfig) -> Option<Rejection> {
    if !grid::is_weekday(request.date) {
        return Some(Rejection::OutsideWeekday);
    }

    // Minutes from local midnight sidestep wall-clock wrap-around and keep
    // an end hour of 24 expressible.
    let open = config.hours.start_hour * 60;
    let close = config.hours.end_hour * 60;
    let start = request.start_time.hour() * 60 + request.start_time.minute();
    let end = start + request.duration_minutes;
    if start < open || end > close {
        return Some(Rejection::OutsideBusinessHours);
    }

    None
}

/// Resolve the proposed appointment to an absolute interval in the
/// scheduling timezone.
pub fn proposed_interval(
    request: &BookingRequest,
    config: &SchedulerConfig,
) -> Result<TimeInterval> {
    let start = grid::local_instant(request.date, request.start_time, config.timezone)?;
    let end = start + Duration::minutes(request.duration_minutes as i64);
    TimeInterval::new(start, end)
}

/// Run the full validation pipeline against the day's busy events.
///
/// Rules run in order — weekday, business hours, conflict — and the first
/// failure determines the rejection; later rules are not evaluated. On
/// success the accepted interval plus the original attendee and title fields
/// are returned, ready for the event-creation collaborator.
pub fn decide(
    request: &BookingRequest,
    busy: &[BusyEvent],
    config: &SchedulerConfig,
) -> Result<BookingDecision> {
    if let Some(rejection) = check_policy(request, config) {
        return Ok(BookingDecision::Rejected(rejection));
    }

    let interval = proposed_interval(request, config)?;
    if !filter::is_available(&interval, busy, config.timezone) {
        return Ok(BookingDecision::Rejected(Rejection::SlotConflict));
    }

    Ok(BookingDecision::Accepted(AcceptedBooking {
        interval,
        title: request.title.clone(),
        attendee_email: request.attendee_email.clone(),
        attendee_name: request.attendee_name.clone(),
    }))
}
