//! SPI transport abstractions
//!
//! The panel pipeline streams one byte at a time and interleaves those
//! writes with the rest of the application loop, so the transport exposes
//! the raw primitives of an SPI master: a blocking write, a queued write
//! that returns immediately, and the status bits needed to pace them.

/// Byte-oriented SPI master
///
/// Write-only from the driver's perspective; whatever the peripheral
/// clocks in is discarded.
pub trait SpiTransport {
    /// Error type for SPI operations
    type Error;

    /// Write one byte and block until it has been clocked out
    ///
    /// Implementations wait for any previously queued byte first.
    fn write(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Queue one byte for transmission and return immediately
    ///
    /// Only valid when [`is_ready`](Self::is_ready) returned true.
    fn write_async(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// True when the transmit side can accept another queued byte
    fn is_ready(&self) -> bool;

    /// True while a byte is still being shifted out
    fn is_busy(&self) -> bool;

    /// True when the receive buffer holds a clocked-in byte
    fn is_receive_full(&self) -> bool;

    /// Read and drop the clocked-in byte
    fn discard_received(&mut self);

    /// Block until no byte is in flight
    fn wait_idle(&mut self) {
        while self.is_busy() {}
    }

    /// Block until the last queued byte has completed, then drain it
    ///
    /// The only blocking point in the paint path; bounded by the time of a
    /// single byte on the wire.
    fn wait_receive_full(&mut self) {
        while !self.is_receive_full() {}
        self.discard_received();
    }
}

/// SPI configuration
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Clock polarity and phase
    pub mode: Mode,
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self {
            frequency: 9_000_000, // 9 MHz, comfortably inside the ILI9341 write cycle
            mode: Mode::Mode0,
        }
    }
}

impl SpiConfig {
    /// Configuration at the given clock, SPI mode 0
    pub const fn with_frequency(frequency: u32) -> Self {
        Self {
            frequency,
            mode: Mode::Mode0,
        }
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}
