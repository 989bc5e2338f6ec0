//! Tessera Hardware Abstraction Layer
//!
//! This crate defines the small capability interfaces the panel driver
//! needs from a chip: a byte-oriented SPI transport with readiness and
//! status signals, and output pins for the panel's control lines. Chip
//! specific HALs implement them; the core and drivers only see the traits,
//! which also lets tests substitute a simulated transport.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  tessera-drivers / tessera-firmware     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tessera-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ tessera-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Command/data select and reset lines
//! - [`spi::SpiTransport`] - Blocking and queued byte writes, bus status

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use gpio::OutputPin;
pub use spi::{SpiConfig, SpiTransport};
