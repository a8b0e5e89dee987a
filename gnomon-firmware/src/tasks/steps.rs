//! Step counter task
//!
//! Queries the BMA423 whenever the controller asks for a refresh. The
//! hardware count is cumulative from enable; a baseline taken at each
//! date rollover turns it into steps since midnight. Any failure
//! degrades to Unavailable, never to a stale count.

use chrono::NaiveDate;
use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C0;

use gnomon_core::labels::StepReading;

use crate::channels::{STEP_READINGS, STEP_REFRESH};
use crate::peripherals::Bma423;

/// Steps task - serves refresh requests from the controller
#[embassy_executor::task]
pub async fn steps_task(i2c: I2c<'static, I2C0, Blocking>) {
    info!("Steps task started");

    let mut sensor = Bma423::new(i2c);
    let available = match sensor.init() {
        Ok(()) => true,
        Err(e) => {
            warn!("Step counter init failed: {:?}", Debug2Format(&e));
            false
        }
    };

    let mut baseline: u32 = 0;
    let mut baseline_date: Option<NaiveDate> = None;

    loop {
        let today = STEP_REFRESH.wait().await;

        if !available {
            warn!("No step data available");
            STEP_READINGS.signal(StepReading::Unavailable);
            continue;
        }

        match sensor.step_count() {
            Ok(total) => {
                // New day: everything counted so far belongs to yesterday
                if baseline_date != Some(today) {
                    if baseline_date.is_some() {
                        baseline = total;
                    }
                    baseline_date = Some(today);
                }

                let today_steps = total.saturating_sub(baseline);
                info!("Steps today: {}", today_steps);
                STEP_READINGS.signal(StepReading::Counted(today_steps));
            }
            Err(e) => {
                warn!("Step count read failed: {:?}", Debug2Format(&e));
                STEP_READINGS.signal(StepReading::Unavailable);
            }
        }
    }
}
