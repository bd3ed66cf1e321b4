//! The external calendar collaborator and the async entry points that
//! sequence collaborator I/O around the pure computation.
//!
//! The engine itself performs no I/O and holds no state between calls.
//! Fetching busy events and creating the booked event belong to a
//! [`CalendarSource`] implementation (Google Calendar, CalDAV, a test stub);
//! timeouts, retries, and authentication are entirely its concern.

use std::future::Future;
use std::pin::Pin;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::AvailabilityResult;
use crate::availability;
use crate::booking::{self, AcceptedBooking, BookingDecision, BookingRequest, Rejection};
use crate::config::SchedulerConfig;
use crate::error::Result;
use crate::event::BusyEvent;
use crate::grid;

/// A boxed future for async trait methods, keeping the trait object-safe.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The event created by the calendar source after an accepted booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedEvent {
    pub id: String,
    pub summary: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub link: Option<String>,
}

/// Abstract calendar capability the engine consumes.
///
/// The engine calls each method at most once per request and never retries;
/// failures propagate to the caller unchanged.
pub trait CalendarSource: Send + Sync {
    /// Every busy event whose interval intersects `[range_start, range_end]`.
    ///
    /// Ordering is not significant — the engine re-sorts and regroups
    /// internally.
    fn list_busy_events(
        &self,
        range_start: DateTime<Utc>,
        range_end: DateTime<Utc>,
    ) -> BoxFuture<'_, Result<Vec<BusyEvent>>>;

    /// Create the event for an accepted booking.
    fn create_event(&self, booking: AcceptedBooking) -> BoxFuture<'_, Result<CreatedEvent>>;
}

/// Final outcome of a booking attempt that reached the calendar boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Booked(CreatedEvent),
    Rejected(Rejection),
}

/// Fetch busy events once for the whole window, then compute availability.
///
/// The fetch range spans from the start of the first day to the last second
/// of the last day in the scheduling zone. An inverted window yields an
/// empty result without touching the source.
pub async fn availability_window(
    source: &dyn CalendarSource,
    window_start: NaiveDate,
    window_end: NaiveDate,
    config: &SchedulerConfig,
) -> Result<AvailabilityResult> {
    if window_start > window_end {
        return Ok(AvailabilityResult::default());
    }

    let (range_start, _) = grid::day_bounds(window_start, config.timezone)?;
    let (_, range_end) = grid::day_bounds(window_end, config.timezone)?;

    let busy = source.list_busy_events(range_start, range_end).await?;
    debug!(
        events = busy.len(),
        %window_start,
        %window_end,
        "fetched busy events for availability window"
    );

    availability::compute_availability(window_start, window_end, &busy, config)
}

/// Validate and book a single appointment.
///
/// Structural rejections return before any collaborator call. The conflict
/// check reads the day's busy events and the creation call follows; another
/// booking can land in the same slot between the two. That read-then-create
/// window is accepted here — closing it would need an idempotency key or a
/// conditional create at the calendar source.
pub async fn book_appointment(
    source: &dyn CalendarSource,
    request: &BookingRequest,
    config: &SchedulerConfig,
) -> Result<BookingOutcome> {
    if let Some(rejection) = booking::check_policy(request, config) {
        debug!(?rejection, "booking rejected before fetching calendar data");
        return Ok(BookingOutcome::Rejected(rejection));
    }

    let (day_start, day_end) = grid::day_bounds(request.date, config.timezone)?;
    let busy = source.list_busy_events(day_start, day_end).await?;

    match booking::decide(request, &busy, config)? {
        BookingDecision::Rejected(rejection) => {
            debug!(?rejection, "booking rejected");
            Ok(BookingOutcome::Rejected(rejection))
        }
        BookingDecision::Accepted(accepted) => {
            let created = source.create_event(accepted).await?;
            debug!(id = %created.id, "booking created");
            Ok(BookingOutcome::Booked(created))
        }
    }
}
