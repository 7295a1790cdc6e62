//! Platform abstraction traits
//!
//! Interfaces the external drivers must provide: a digital input to sample
//! and a serial output to write the message stream to.

pub mod gpio;
pub mod uart;

pub use gpio::{GpioInterface, GpioMode};
pub use uart::{UartConfig, UartInterface};
