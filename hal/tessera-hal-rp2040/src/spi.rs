//! PL022 SPI transport
//!
//! Setup (pins, clock divider, frame format) goes through embassy's
//! blocking driver. The per-byte path talks to the status and data
//! registers directly: embassy only offers whole-buffer transfers, and the
//! paint engine needs to queue a single byte and return.
//!
//! The peripheral is full duplex, so every byte written clocks one byte
//! into the receive FIFO. Those bytes are meaningless and are discarded;
//! the FIFO is drained before each blocking write so it cannot overrun.

use core::convert::Infallible;

use embassy_rp::pac;
use embassy_rp::spi::{self, Blocking, Instance, Spi};
use tessera_hal::spi::{Phase, Polarity};
use tessera_hal::{SpiConfig, SpiTransport};

/// embassy configuration for a [`SpiConfig`]
pub fn spi_config(config: &SpiConfig) -> spi::Config {
    let (polarity, phase) = config.mode.into();
    let mut out = spi::Config::default();
    out.frequency = config.frequency;
    out.polarity = match polarity {
        Polarity::IdleLow => spi::Polarity::IdleLow,
        Polarity::IdleHigh => spi::Polarity::IdleHigh,
    };
    out.phase = match phase {
        Phase::CaptureOnFirstTransition => spi::Phase::CaptureOnFirstTransition,
        Phase::CaptureOnSecondTransition => spi::Phase::CaptureOnSecondTransition,
    };
    out
}

/// Byte transport on SPI0 or SPI1
///
/// `regs` must be the register block of the same instance as `spi`
/// (`pac::SPI0` for `SPI0`).
pub struct Rp2040Transport<'d, T: Instance> {
    _spi: Spi<'d, T, Blocking>,
    regs: pac::spi::Spi,
}

impl<'d, T: Instance> Rp2040Transport<'d, T> {
    pub fn new(spi: Spi<'d, T, Blocking>, regs: pac::spi::Spi) -> Self {
        let mut transport = Self { _spi: spi, regs };
        transport.discard_received();
        transport
    }
}

impl<T: Instance> SpiTransport for Rp2040Transport<'_, T> {
    type Error = Infallible;

    fn write(&mut self, byte: u8) -> Result<(), Infallible> {
        self.wait_idle();
        self.discard_received();
        self.regs.dr().write(|w| w.set_data(byte as u16));
        self.wait_idle();
        self.wait_receive_full();
        Ok(())
    }

    fn write_async(&mut self, byte: u8) -> Result<(), Infallible> {
        self.regs.dr().write(|w| w.set_data(byte as u16));
        Ok(())
    }

    fn is_ready(&self) -> bool {
        self.regs.sr().read().tnf()
    }

    fn is_busy(&self) -> bool {
        self.regs.sr().read().bsy()
    }

    fn is_receive_full(&self) -> bool {
        self.regs.sr().read().rne()
    }

    /// Empties the whole receive FIFO, not just one entry
    fn discard_received(&mut self) {
        while self.regs.sr().read().rne() {
            let _ = self.regs.dr().read().data();
        }
    }
}
