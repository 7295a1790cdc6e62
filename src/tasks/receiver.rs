//! Serial receiver task (queue consumer)
//!
//! Runs on the shortest message-path period (20 ticks), drains one message
//! per invocation with a bounded wait and forwards its text verbatim to the
//! serial output. An empty queue after the wait is the expected steady
//! state, not an error; a failing serial write is logged and absorbed.

use crate::message::Message;
use crate::platform::{PlatformError, Result, UartError, UartInterface};
use crate::types::TaskConfig;

/// Queue consumer feeding the serial output.
#[derive(Debug)]
pub struct SerialReceiver {
    config: TaskConfig,
}

impl SerialReceiver {
    /// Create the receiver with the node's fixed configuration.
    pub const fn new() -> Self {
        Self {
            config: super::RECEIVER_CONFIG,
        }
    }

    /// Forward one message's text to the serial output.
    ///
    /// Handles short writes; a driver that accepts nothing is reported as
    /// [`UartError::WriteFailed`].
    pub fn forward<U: UartInterface>(&self, uart: &mut U, message: &Message) -> Result<()> {
        let mut rest = message.text();
        while !rest.is_empty() {
            let written = uart.write(rest)?;
            if written == 0 {
                return Err(PlatformError::Uart(UartError::WriteFailed));
            }
            rest = &rest[written..];
        }
        uart.flush()
    }

    /// Periodic drain loop on the embassy time driver.
    #[cfg(feature = "embassy")]
    pub async fn run<U: UartInterface>(
        &self,
        uart: &mut U,
        queue: &crate::queue::MessageQueue,
    ) -> ! {
        use embassy_time::Ticker;

        use crate::telemetry::trace;
        use crate::types::tick_duration;
        use crate::{log_info, log_warn};

        log_info!("{} started", self.config.name());

        let mut ticker = Ticker::every(tick_duration(self.config.period_ticks));
        loop {
            ticker.next().await;

            // The bounded wait is a suspension point, not busy time; only
            // the forwarding work runs inside the trace hooks.
            let received = queue.receive_bounded(super::RECEIVE_WAIT_TICKS).await;

            let entry_us = trace::current_time_us();
            trace::run_traced(self.config.id, entry_us, || {
                if let Some(message) = &received {
                    if self.forward(uart, message).is_err() {
                        log_warn!("{}: serial write failed", self.config.name());
                    }
                }
            });
        }
    }
}

impl Default for SerialReceiver {
    fn default() -> Self {
        Self::new()
    }
}
