//! Wall-clock timestamp helper.
//!
//! Converts an `(hours, minutes)` pair into seconds-since-midnight, rejecting
//! out-of-range values. The Rust realization of the collaborator contract
//! in `spec.md` §6, grounded on `original_source/include/tstamp.hpp` /
//! `src/tstamp.cpp`'s range-checked `TStamp` constructor.

use crate::errors::AnnealingError;
use std::fmt;

/// A time of day, validated at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
}

impl TimeOfDay {
    /// Builds a `TimeOfDay` from `hours ∈ [0,23]` and `minutes ∈ [0,59]`.
    pub fn new(hours: u8, minutes: u8) -> Result<Self, AnnealingError> {
        if hours > 23 {
            return Err(AnnealingError::InvalidTimestamp(format!(
                "hours must be in [0, 23], got {hours}"
            )));
        }
        if minutes > 59 {
            return Err(AnnealingError::InvalidTimestamp(format!(
                "minutes must be in [0, 59], got {minutes}"
            )));
        }
        Ok(Self { hours, minutes })
    }

    /// Seconds elapsed since midnight.
    pub fn seconds(&self) -> u32 {
        u32::from(self.hours) * 3600 + u32::from(self.minutes) * 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}
