//! Periodic heartbeat transmitter task
//!
//! Enqueues a fixed heartbeat message unconditionally on every 100-tick
//! release, whatever the queue state. A full queue costs the node one
//! heartbeat, not a retry.

use crate::message::Message;
use crate::types::TaskConfig;

/// Fixed heartbeat payload.
pub const HEARTBEAT_TEXT: &str = "Periodic String\n";

/// Periodic heartbeat transmitter.
#[derive(Debug)]
pub struct PeriodicTransmitter {
    config: TaskConfig,
}

impl PeriodicTransmitter {
    /// Create the transmitter with the node's fixed configuration.
    pub const fn new() -> Self {
        Self {
            config: super::TRANSMITTER_CONFIG,
        }
    }

    /// One invocation: build the heartbeat message.
    pub fn poll(&self) -> Message {
        Message::new(self.config.id, HEARTBEAT_TEXT)
    }

    /// Periodic transmit loop on the embassy time driver.
    #[cfg(feature = "embassy")]
    pub async fn run(&self, queue: &crate::queue::MessageQueue) -> ! {
        use embassy_time::Ticker;

        use crate::telemetry::trace;
        use crate::types::tick_duration;
        use crate::{log_debug, log_info};

        log_info!("{} started", self.config.name());

        let mut ticker = Ticker::every(tick_duration(self.config.period_ticks));
        loop {
            ticker.next().await;

            let entry_us = trace::current_time_us();
            let message = trace::run_traced(self.config.id, entry_us, || self.poll());

            if queue
                .send_bounded(message, super::SEND_WAIT_TICKS)
                .await
                .is_err()
            {
                log_debug!("{}: queue full, heartbeat dropped", self.config.name());
            }
        }
    }
}

impl Default for PeriodicTransmitter {
    fn default() -> Self {
        Self::new()
    }
}
