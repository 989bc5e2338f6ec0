//! RP2040 HAL for the Tessera panel driver
//!
//! Implements the `tessera-hal` traits on top of `embassy-rp`:
//!
//! - [`spi::Rp2040Transport`]: PL022 SPI master with a non-blocking,
//!   byte-at-a-time write path
//! - [`gpio::ControlPin`]: push-pull output for D/C and reset

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

pub use gpio::ControlPin;
pub use spi::{spi_config, Rp2040Transport};
