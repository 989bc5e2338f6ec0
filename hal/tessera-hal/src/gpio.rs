//! GPIO pin abstractions
//!
//! The panel is steered by plain push-pull outputs: the command/data
//! select line and the active-low reset line.

/// Digital output pin
///
/// Implementations drive the actual pin register for the specific chip.
/// Writes are assumed infallible, as they are on every MCU the driver
/// targets.
pub trait OutputPin {
    /// Drive the pin high (logic 1)
    fn set_high(&mut self);

    /// Drive the pin low (logic 0)
    fn set_low(&mut self);

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently driven low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Placeholder for a control line that is hard-wired on the board
///
/// Some modules tie reset to the MCU reset net; this keeps the driver's
/// generic parameters satisfied without a physical pin.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPin {
    high: bool,
}

impl OutputPin for NoPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
