//! Clock task
//!
//! Owns the wall-clock time manager. Samples it once per second and
//! forwards clock edges to the controller; a minute edge precedes the
//! second edge so minute work lands before the redraw. Time syncs from
//! the phone are seated here between ticks.

use defmt::*;
use embassy_time::{Duration, Ticker};

use crate::channels::{ClockEvent, CLOCK_EVENTS, TIME_SYNC};
use crate::time::TimeManager;

/// Clock task - one-second heartbeat of the watchface
#[embassy_executor::task]
pub async fn clock_task() {
    info!("Clock task started");

    let mut time = TimeManager::new();
    let mut ticker = Ticker::every(Duration::from_secs(1));
    let mut last_minute: Option<u8> = None;

    loop {
        ticker.next().await;

        if let Some(sync) = TIME_SYNC.try_take() {
            if time.set_reference(&sync) {
                info!(
                    "Wall clock set: {}-{:02}-{:02} {:02}:{:02}:{:02}",
                    sync.year, sync.month, sync.day, sync.hour, sync.minute, sync.second
                );
                // Force a minute edge so the date label catches up
                last_minute = None;
            } else {
                warn!("Ignoring invalid time sync");
            }
        }

        let clock = time.wall_clock();

        if last_minute != Some(clock.time.minute) {
            last_minute = Some(clock.time.minute);
            CLOCK_EVENTS.send(ClockEvent::Minute(clock)).await;
        }
        CLOCK_EVENTS.send(ClockEvent::Second(clock)).await;
    }
}
