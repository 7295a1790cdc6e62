//! Mock platform implementation for testing
//!
//! In-memory drivers that let the task bodies run on the host without
//! hardware: a settable input pin and a UART that captures its output.

pub mod gpio;
pub mod uart;

pub use gpio::MockGpio;
pub use uart::MockUart;
