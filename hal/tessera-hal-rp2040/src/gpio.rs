//! Panel control lines

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;
use tessera_hal::OutputPin;

/// Push-pull output driving D/C or reset
pub struct ControlPin<'d> {
    output: Output<'d>,
}

impl<'d> ControlPin<'d> {
    /// Configure `pin` as an output at `initial` level
    pub fn new(pin: Peri<'d, impl Pin>, initial: Level) -> Self {
        Self {
            output: Output::new(pin, initial),
        }
    }
}

impl<'d> From<Output<'d>> for ControlPin<'d> {
    fn from(output: Output<'d>) -> Self {
        Self { output }
    }
}

impl OutputPin for ControlPin<'_> {
    fn set_high(&mut self) {
        self.output.set_high();
    }

    fn set_low(&mut self) {
        self.output.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.output.is_set_high()
    }
}
