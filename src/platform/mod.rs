//! Platform abstraction layer
//!
//! The node consumes its hardware through these traits; the physical GPIO
//! and UART drivers live in the integrating firmware, not here.

pub mod error;
pub mod traits;

// Mock drivers for host testing
#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export commonly used types
pub use error::{PlatformError, Result, UartError};
pub use traits::{GpioInterface, GpioMode, UartConfig, UartInterface};
