//! Error types for the scheduling engine.
//!
//! Booking rejections are NOT errors — they are ordinary decision values in
//! [`crate::booking`]. `EngineError` covers configuration mistakes,
//! unrepresentable local times, and calendar-source failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid business hours: start {start} must be before end {end}, end at most 24")]
    InvalidBusinessHours { start: u32, end: u32 },

    #[error("Invalid slot unit: {0} minutes (must be non-zero and divide 60)")]
    InvalidSlotUnit(u32),

    #[error("Invalid booking duration limits: min {min}, max {max}")]
    InvalidDurationLimits { min: u32, max: u32 },

    #[error("Interval start must be strictly before its end")]
    EmptyInterval,

    #[error("Local time does not exist in the scheduling timezone: {0}")]
    UnrepresentableLocalTime(String),

    #[error("Calendar source error: {0}")]
    Source(String),
}

impl EngineError {
    /// Wrap a calendar-source failure message.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
