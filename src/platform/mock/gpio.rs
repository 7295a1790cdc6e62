//! Mock GPIO implementation for testing

use crate::platform::traits::{GpioInterface, GpioMode};

/// Mock digital input
///
/// Tests drive the sampled level through [`MockGpio::set_input_state`].
#[derive(Debug)]
pub struct MockGpio {
    state: bool,
    mode: GpioMode,
}

impl MockGpio {
    /// Create a new mock input pin, initially low.
    pub fn new_input() -> Self {
        Self {
            state: false,
            mode: GpioMode::Input,
        }
    }

    /// Create a new mock input pin at a given initial level.
    pub fn with_level(high: bool) -> Self {
        Self {
            state: high,
            mode: GpioMode::Input,
        }
    }

    /// Set the level the next read will observe.
    pub fn set_input_state(&mut self, high: bool) {
        self.state = high;
    }
}

impl GpioInterface for MockGpio {
    fn read(&self) -> bool {
        self.state
    }

    fn mode(&self) -> GpioMode {
        self.mode
    }
}
