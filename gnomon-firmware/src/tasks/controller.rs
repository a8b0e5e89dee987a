//! Main controller task
//!
//! Owns the application state and the display. All widget state is
//! touched only from this task, between awaits, so no locking is
//! needed. Clock edges drive redraws; weather and step updates redraw
//! immediately with the last clock sample.

use defmt::*;
use embassy_futures::select::{select3, Either3};

use gnomon_core::app::WatchApp;
use gnomon_core::clock::ClockTime;
use gnomon_protocol::messages;

use crate::channels::{
    ClockEvent, CLOCK_EVENTS, OUTBOUND_FRAMES, STEP_READINGS, STEP_REFRESH, WEATHER_REPORTS,
};
use crate::peripherals::WatchDisplay;

/// Controller task - main coordination loop
#[embassy_executor::task]
pub async fn controller_task(mut display: WatchDisplay) {
    info!("Controller task started");

    let mut app = WatchApp::new();

    // The first clock edge seats the date label and paints the face
    let first = match CLOCK_EVENTS.receive().await {
        ClockEvent::Second(clock) | ClockEvent::Minute(clock) => clock,
    };
    app.load(first.date);
    info!("Watchface loaded");

    // Prime the labels: fetch steps now, ask the phone for weather once
    STEP_REFRESH.signal(first.date);
    send_weather_request().await;
    redraw(&app, &mut display, first.time);

    let mut last_clock = first;

    loop {
        match select3(
            CLOCK_EVENTS.receive(),
            WEATHER_REPORTS.receive(),
            STEP_READINGS.wait(),
        )
        .await
        {
            Either3::First(ClockEvent::Second(clock)) => {
                last_clock = clock;
                if app.on_second_tick(&clock) {
                    redraw(&app, &mut display, clock.time);
                }
            }

            Either3::First(ClockEvent::Minute(clock)) => {
                last_clock = clock;
                let actions = app.on_minute_tick(&clock);
                if actions.refresh_steps {
                    STEP_REFRESH.signal(clock.date);
                }
                if actions.request_weather {
                    send_weather_request().await;
                }
            }

            Either3::Second(report) => {
                if app.on_weather(&report) {
                    debug!("Weather label updated");
                    redraw(&app, &mut display, last_clock.time);
                }
            }

            Either3::Third(reading) => {
                if app.on_steps(reading) {
                    debug!("Steps label updated");
                    redraw(&app, &mut display, last_clock.time);
                }
            }
        }
    }
}

fn redraw(app: &WatchApp, display: &mut WatchDisplay, time: ClockTime) {
    if let Err(e) = app.draw(display, time) {
        warn!("Display draw failed: {:?}", Debug2Format(&e));
    }
}

async fn send_weather_request() {
    match messages::weather_request() {
        Ok(frame) => {
            OUTBOUND_FRAMES.send(frame).await;
            debug!("Weather request queued");
        }
        Err(e) => {
            warn!("Weather request build failed: {:?}", e);
        }
    }
}
