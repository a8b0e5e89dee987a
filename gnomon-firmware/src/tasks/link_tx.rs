//! Companion link transmit task
//!
//! Drains the outbound frame queue into the UART. Sends are
//! fire-and-forget: a failure is logged, never retried.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::OUTBOUND_FRAMES;

/// Link TX task - sends frames to the phone
#[embassy_executor::task]
pub async fn link_tx_task(mut tx: BufferedUartTx) {
    info!("Link TX task started");

    loop {
        let frame = OUTBOUND_FRAMES.receive().await;

        match frame.encode_to_vec() {
            Ok(bytes) => match tx.write_all(&bytes).await {
                Ok(()) => {
                    debug!("Outbound send success ({} bytes)", bytes.len());
                }
                Err(e) => {
                    warn!("Outbound send failed: {:?}", e);
                }
            },
            Err(e) => {
                warn!("Outbound frame encode failed: {:?}", e);
            }
        }
    }
}
