//! UART output interface trait
//!
//! The node's single observable data channel: a serial text stream the
//! receiver task forwards queue messages to.

use crate::platform::error::{PlatformError, Result};

/// UART configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baud_rate: u32,
}

impl UartConfig {
    /// Build a configuration, rejecting a zero baud rate.
    pub const fn new(baud_rate: u32) -> Result<Self> {
        if baud_rate == 0 {
            return Err(PlatformError::InvalidConfig);
        }
        Ok(Self { baud_rate })
    }
}

impl Default for UartConfig {
    fn default() -> Self {
        Self { baud_rate: 115_200 }
    }
}

/// UART output interface trait
///
/// Implementations may write fewer bytes than requested; callers handle the
/// returned count.
pub trait UartInterface {
    /// Write bytes to the serial output, returning how many were accepted.
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Block until previously written bytes have left the device.
    fn flush(&mut self) -> Result<()>;
}
