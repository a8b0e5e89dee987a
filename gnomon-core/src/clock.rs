//! Wall-clock sample types
//!
//! A redraw always works from a single sample: the hands of one frame
//! must never mix times from different ticks.

use chrono::NaiveDate;

/// A time-of-day sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockTime {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

impl ClockTime {
    pub const MIDNIGHT: Self = Self::new(0, 0, 0);

    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }
}

/// A full wall-clock sample: calendar date plus time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallClock {
    pub date: NaiveDate,
    pub time: ClockTime,
}
