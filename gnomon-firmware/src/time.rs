//! Wall-clock time manager
//!
//! Maps a wall-clock reference (seated by time-sync messages from the
//! phone) onto the monotonic Embassy clock. Until the first sync the
//! watch runs from a fixed epoch, so the hands still move.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use embassy_time::Instant;

use gnomon_core::clock::{ClockTime, WallClock};
use gnomon_protocol::TimeSync;

pub struct TimeManager {
    reference: NaiveDateTime,
    set_at: Instant,
}

impl TimeManager {
    pub fn new() -> Self {
        // Placeholder epoch until the phone seats the real time
        let reference = NaiveDateTime::new(
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or(NaiveDate::MIN),
            NaiveTime::MIN,
        );
        Self {
            reference,
            set_at: Instant::now(),
        }
    }

    /// Seat the wall-clock reference from a phone time sync
    ///
    /// Returns false (and changes nothing) if the fields do not form a
    /// valid calendar date and time.
    pub fn set_reference(&mut self, sync: &TimeSync) -> bool {
        let Some(date) =
            NaiveDate::from_ymd_opt(sync.year as i32, sync.month as u32, sync.day as u32)
        else {
            return false;
        };
        let Some(time) =
            NaiveTime::from_hms_opt(sync.hour as u32, sync.minute as u32, sync.second as u32)
        else {
            return false;
        };

        self.reference = NaiveDateTime::new(date, time);
        self.set_at = Instant::now();
        true
    }

    /// Current wall-clock date and time
    pub fn now(&self) -> NaiveDateTime {
        let elapsed = TimeDelta::seconds(self.set_at.elapsed().as_secs() as i64);
        self.reference + elapsed
    }

    /// Current wall clock as a face sample
    pub fn wall_clock(&self) -> WallClock {
        let now = self.now();
        WallClock {
            date: now.date(),
            time: ClockTime::new(now.hour() as u8, now.minute() as u8, now.second() as u8),
        }
    }
}
