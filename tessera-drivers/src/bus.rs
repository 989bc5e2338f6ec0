//! SPI display bus
//!
//! Joins a byte transport and the D/C select line into the command/data
//! link the paint engine talks to. D/C low marks a command byte, D/C high a
//! parameter or pixel byte. The line is only switched while the transport
//! is idle, since the controller samples it on the last bit of each byte.

use tessera_core::DisplayBus;
use tessera_hal::{OutputPin, SpiTransport};

/// Command/data bus over SPI
pub struct SpiDisplayBus<S, DC> {
    spi: S,
    dc: DC,
}

impl<S, DC> SpiDisplayBus<S, DC>
where
    S: SpiTransport,
    DC: OutputPin,
{
    /// Create a bus; D/C starts in data mode
    pub fn new(spi: S, mut dc: DC) -> Self {
        dc.set_high();
        Self { spi, dc }
    }

    /// Give back the transport and pin
    pub fn release(self) -> (S, DC) {
        (self.spi, self.dc)
    }

    /// Settle the transport, then drive D/C
    fn select(&mut self, data: bool) {
        if self.dc.is_set_high() != data {
            self.spi.wait_idle();
            self.dc.set_state(data);
        }
    }
}

impl<S, DC> DisplayBus for SpiDisplayBus<S, DC>
where
    S: SpiTransport,
    DC: OutputPin,
{
    type Error = S::Error;

    fn command(&mut self, cmd: u8) -> Result<(), S::Error> {
        self.select(false);
        self.spi.write(cmd)
    }

    fn data(&mut self, byte: u8) -> Result<(), S::Error> {
        self.select(true);
        self.spi.write(byte)
    }

    fn data_async(&mut self, byte: u8) -> Result<(), S::Error> {
        self.select(true);
        self.spi.write_async(byte)
    }

    fn is_ready(&self) -> bool {
        self.spi.is_ready()
    }

    fn flush(&mut self) -> Result<(), S::Error> {
        self.spi.wait_idle();
        self.spi.wait_receive_full();
        Ok(())
    }
}
