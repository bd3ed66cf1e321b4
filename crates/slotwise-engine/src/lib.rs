//! # slotwise-engine
//!
//! Availability computation and booking validation for a single calendar
//! owner: fixed-grid slot generation over a date window, exclusion against
//! busy events, merging of adjacent free slots into readable day-grouped
//! ranges, and the weekday/business-hours/conflict rules applied to a
//! proposed appointment.
//!
//! Every boundary is computed in one configured timezone
//! ([`config::SchedulerConfig`]), never in the caller's local zone. The
//! engine is pure and stateless — fetching busy events and creating booked
//! events belong to an external [`source::CalendarSource`], awaited by the
//! thin async entry points in [`source`].
//!
//! ## Modules
//!
//! - [`config`] — scheduling policy (timezone, business hours, grid unit)
//! - [`grid`] — day bounds, weekday test, slot enumeration, date formatting
//! - [`event`] — busy events (all-day markers and timed intervals)
//! - [`filter`] — slot availability against busy events
//! - [`aggregate`] — adjacent-slot merging and per-day grouping
//! - [`availability`] — the multi-day availability entry point
//! - [`booking`] — the booking validation pipeline
//! - [`source`] — the calendar collaborator contract and async orchestration
//! - [`error`] — error types

pub mod aggregate;
pub mod availability;
pub mod booking;
pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod grid;
pub mod source;

pub use aggregate::{AvailabilityResult, DayAvailability};
pub use availability::compute_availability;
pub use booking::{AcceptedBooking, BookingDecision, BookingRequest, Rejection};
pub use config::{BusinessHours, DurationLimits, SchedulerConfig};
pub use error::EngineError;
pub use event::{BusyEvent, EventStatus, Transparency};
pub use filter::is_available;
pub use grid::TimeInterval;
pub use source::{BookingOutcome, CalendarSource, CreatedEvent};
