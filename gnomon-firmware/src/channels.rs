//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Uses embassy-sync primitives for safe async communication.

use chrono::NaiveDate;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use gnomon_core::clock::WallClock;
use gnomon_core::labels::StepReading;
use gnomon_protocol::{LinkFrame, TimeSync, WeatherReport};

/// A clock edge from the clock task
///
/// Both variants carry the one sample the whole frame is drawn from.
#[derive(Debug, Clone, Copy)]
pub enum ClockEvent {
    /// One second elapsed
    Second(WallClock),
    /// The minute rolled over (also fires once at boot)
    Minute(WallClock),
}

/// Channel capacity for clock events
const CLOCK_CHANNEL_SIZE: usize = 8;

/// Channel capacity for inbound weather reports
const WEATHER_CHANNEL_SIZE: usize = 4;

/// Channel capacity for outbound frames
const OUTBOUND_CHANNEL_SIZE: usize = 4;

/// Clock edges from the clock task to the controller
pub static CLOCK_EVENTS: Channel<CriticalSectionRawMutex, ClockEvent, CLOCK_CHANNEL_SIZE> =
    Channel::new();

/// Weather reports decoded off the companion link
pub static WEATHER_REPORTS: Channel<CriticalSectionRawMutex, WeatherReport, WEATHER_CHANNEL_SIZE> =
    Channel::new();

/// Frames queued for transmission to the phone
pub static OUTBOUND_FRAMES: Channel<CriticalSectionRawMutex, LinkFrame, OUTBOUND_CHANNEL_SIZE> =
    Channel::new();

/// Latest step reading (updated by the steps task)
pub static STEP_READINGS: Signal<CriticalSectionRawMutex, StepReading> = Signal::new();

/// Request a fresh step reading; carries the current date so the steps
/// task can reset its midnight baseline
pub static STEP_REFRESH: Signal<CriticalSectionRawMutex, NaiveDate> = Signal::new();

/// Wall-clock synchronization received from the phone
pub static TIME_SYNC: Signal<CriticalSectionRawMutex, TimeSync> = Signal::new();
