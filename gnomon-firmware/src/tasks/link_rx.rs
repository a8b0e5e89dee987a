//! Companion link receive task
//!
//! Decodes frames arriving from the phone and dispatches them. Malformed
//! input is logged and dropped; the decoder resynchronizes on its own.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use gnomon_protocol::{Decoder, LinkFrame, PhoneMessage};

use crate::channels::{TIME_SYNC, WEATHER_REPORTS};

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// Link RX task - receives and decodes frames from the phone
#[embassy_executor::task]
pub async fn link_rx_task(mut rx: BufferedUartRx) {
    info!("Link RX task started");

    let mut decoder = Decoder::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match decoder.push(byte) {
                        Ok(Some(frame)) => dispatch(&frame),
                        Ok(None) => {
                            // Need more bytes
                        }
                        Err(e) => {
                            warn!("Inbound frame dropped: {:?}", e);
                        }
                    }
                }
            }
            Ok(_) => {
                // No bytes read, continue
            }
            Err(e) => {
                warn!("UART read error: {:?}", e);
            }
        }
    }
}

/// Dispatch a decoded frame to whoever consumes it
fn dispatch(frame: &LinkFrame) {
    match PhoneMessage::from_frame(frame) {
        Ok(PhoneMessage::Weather(report)) => {
            debug!("Weather report received");
            // Drop rather than block the link if the controller lags
            if WEATHER_REPORTS.try_send(report).is_err() {
                warn!("Weather channel full, dropping report");
            }
        }
        Ok(PhoneMessage::TimeSync(sync)) => {
            debug!("Time sync received");
            TIME_SYNC.signal(sync);
        }
        Err(e) => {
            warn!("Inbound message dropped: {:?}", e);
        }
    }
}
