//! Mock UART implementation for testing

use crate::platform::Result;
use crate::platform::traits::{UartConfig, UartInterface};

/// Capture buffer size, comfortably above anything one test emits.
const TX_CAPACITY: usize = 256;

/// Mock UART output
///
/// Captures transmitted bytes in memory so tests can verify the serial
/// stream without hardware.
///
/// # Example
///
/// ```rust,ignore
/// use edge_relay::platform::mock::MockUart;
/// use edge_relay::platform::traits::UartInterface;
///
/// let mut uart = MockUart::new(Default::default());
/// uart.write(b"Periodic String\n").unwrap();
/// assert_eq!(uart.tx_buffer(), b"Periodic String\n");
/// ```
#[derive(Debug)]
pub struct MockUart {
    config: UartConfig,
    tx_buffer: heapless::Vec<u8, TX_CAPACITY>,
}

impl MockUart {
    /// Create a new mock UART.
    pub fn new(config: UartConfig) -> Self {
        Self {
            config,
            tx_buffer: heapless::Vec::new(),
        }
    }

    /// Transmitted bytes, in write order (for test verification).
    pub fn tx_buffer(&self) -> &[u8] {
        &self.tx_buffer
    }

    /// Clear the capture buffer.
    pub fn clear_tx_buffer(&mut self) {
        self.tx_buffer.clear();
    }

    /// Configured baud rate.
    pub fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }
}

impl UartInterface for MockUart {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        let room = TX_CAPACITY - self.tx_buffer.len();
        let take = data.len().min(room);
        let _ = self.tx_buffer.extend_from_slice(&data[..take]);
        Ok(take)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}
