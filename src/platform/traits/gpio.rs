//! GPIO input interface trait
//!
//! The button monitors only ever sample a level; pin setup and the output
//! direction belong to the integrating firmware.

/// GPIO input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpioMode {
    /// Input mode (high impedance)
    Input,
    /// Input mode with pull-up resistor
    InputPullUp,
    /// Input mode with pull-down resistor
    InputPullDown,
}

/// GPIO input interface trait
///
/// Reading is total: a configured pin always yields a level. Failure modes
/// of the underlying driver are not modeled.
///
/// # Safety Invariants
///
/// - The pin must be configured as an input before use
/// - Only one owner per pin instance; no concurrent access from multiple
///   contexts
pub trait GpioInterface {
    /// Read the pin level. `true` is high.
    fn read(&self) -> bool;

    /// Current pin mode.
    fn mode(&self) -> GpioMode;
}
