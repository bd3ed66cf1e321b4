//! Busy events fetched from the external calendar source.
//!
//! Events are read-only inputs: fetched fresh per request and never
//! persisted by the engine. The closed variant set keeps the availability
//! filter exhaustive — an all-day marker carries a calendar date and no time
//! component, a timed event carries an absolute interval plus its status and
//! transparency flags.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::grid::TimeInterval;

/// Lifecycle status reported by the calendar source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    Confirmed,
    Cancelled,
}

/// Whether an event blocks availability (opaque) or is informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transparency {
    Opaque,
    Transparent,
}

/// A single externally sourced event that can reduce availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BusyEvent {
    /// Blocks every slot on its calendar date in the scheduling zone.
    AllDay { date: NaiveDate },
    /// Blocks slots it overlaps, subject to status and transparency.
    Timed {
        interval: TimeInterval,
        status: EventStatus,
        transparency: Transparency,
    },
}

impl BusyEvent {
    pub fn all_day(date: NaiveDate) -> Self {
        Self::AllDay { date }
    }

    /// A confirmed, opaque timed event.
    pub fn timed(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self::Timed {
            interval: TimeInterval { start, end },
            status: EventStatus::Confirmed,
            transparency: Transparency::Opaque,
        }
    }

    /// Builder method to override the status. No effect on all-day markers.
    pub fn with_status(mut self, new_status: EventStatus) -> Self {
        if let Self::Timed { status, .. } = &mut self {
            *status = new_status;
        }
        self
    }

    /// Builder method to override the transparency. No effect on all-day
    /// markers.
    pub fn with_transparency(mut self, new_transparency: Transparency) -> Self {
        if let Self::Timed { transparency, .. } = &mut self {
            *transparency = new_transparency;
        }
        self
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay { .. })
    }
}
