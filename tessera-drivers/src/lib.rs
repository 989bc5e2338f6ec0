//! Panel controller drivers
//!
//! Concrete implementations of the core's [`DisplayBus`] and panel
//! lifecycle on top of the capability traits in `tessera-hal`:
//!
//! - SPI display bus (transport + command/data select line)
//! - ILI9341 controller (init table, sleep/wake, display on/off)
//!
//! [`DisplayBus`]: tessera_core::DisplayBus

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod bus;
pub mod ili9341;

#[cfg(test)]
mod mock;

pub use bus::SpiDisplayBus;
pub use ili9341::{DriverError, Ili9341};
