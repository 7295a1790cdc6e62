//! Platform error types
//!
//! Driver implementations map their HAL-specific errors to these variants.
//! There is no digital-input error variant on purpose: the input driver is
//! assumed total and always yields a level.

use core::fmt;

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformError {
    /// UART operation failed
    Uart(UartError),
    /// Invalid configuration provided
    InvalidConfig,
}

/// UART-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UartError {
    /// Write operation failed
    WriteFailed,
    /// Timeout occurred
    Timeout,
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Uart(e) => write!(f, "UART error: {:?}", e),
            PlatformError::InvalidConfig => write!(f, "Invalid configuration"),
        }
    }
}
