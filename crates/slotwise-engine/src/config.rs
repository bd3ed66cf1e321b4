//! Scheduling policy configuration.
//!
//! The timezone, business hours, slot unit, and booking duration limits are
//! carried as an explicit [`SchedulerConfig`] value threaded into every
//! component rather than hidden process-wide constants, so tests can run the
//! same logic against any zone.

use std::str::FromStr;

use chrono_tz::Tz;

use crate::error::{EngineError, Result};

/// Daily booking window, in whole hours of the scheduling timezone.
///
/// Invariant: `start_hour < end_hour <= 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl BusinessHours {
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(EngineError::InvalidBusinessHours {
                start: start_hour,
                end: end_hour,
            });
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }
}

/// Accepted booking lengths in minutes.
///
/// Slot *generation* is independent of these: the grid always uses
/// [`SchedulerConfig::slot_minutes`]. These limits exist for the caller that
/// validates request shapes before handing them to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationLimits {
    pub min_minutes: u32,
    pub max_minutes: u32,
}

impl DurationLimits {
    pub fn new(min_minutes: u32, max_minutes: u32) -> Result<Self> {
        if min_minutes == 0 || min_minutes > max_minutes {
            return Err(EngineError::InvalidDurationLimits {
                min: min_minutes,
                max: max_minutes,
            });
        }
        Ok(Self {
            min_minutes,
            max_minutes,
        })
    }

    /// True when a proposed duration falls inside the accepted range.
    pub fn contains(&self, minutes: u32) -> bool {
        (self.min_minutes..=self.max_minutes).contains(&minutes)
    }
}

/// Process-wide scheduling policy: the fixed zone every slot boundary is
/// computed in, the daily window, the generation grid unit, and the booking
/// duration limits.
#[derive(Debug, Clone)]
pub struct SchedulerConfig {
    pub timezone: Tz,
    pub hours: BusinessHours,
    /// Fixed minute granularity used for availability generation.
    pub slot_minutes: u32,
    pub booking: DurationLimits,
}

impl SchedulerConfig {
    /// Build a config from an IANA zone name and validated components.
    pub fn new(
        tz_name: &str,
        hours: BusinessHours,
        slot_minutes: u32,
        booking: DurationLimits,
    ) -> Result<Self> {
        let timezone =
            Tz::from_str(tz_name).map_err(|_| EngineError::InvalidTimezone(tz_name.to_string()))?;
        if slot_minutes == 0 || 60 % slot_minutes != 0 {
            return Err(EngineError::InvalidSlotUnit(slot_minutes));
        }
        Ok(Self {
            timezone,
            hours,
            slot_minutes,
            booking,
        })
    }
}

impl Default for SchedulerConfig {
    /// The original deployment's policy: New York, 10-17, 30-minute grid,
    /// bookings of 15-90 minutes.
    fn default() -> Self {
        Self {
            timezone: chrono_tz::America::New_York,
            hours: BusinessHours {
                start_hour: 10,
                end_hour: 17,
            },
            slot_minutes: 30,
            booking: DurationLimits {
                min_minutes: 15,
                max_minutes: 90,
            },
        }
    }
}
