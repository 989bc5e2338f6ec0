//! ILI9341 TFT controller
//!
//! 240x320 RGB panel controller driven over 4-wire SPI in 18-bit color
//! mode (three bytes per pixel, top six bits of each channel used).
//!
//! # Lifecycle
//!
//! - `init`: hardware reset, software reset, manufacturer tuning table,
//!   scan direction, color mode, backlight control, sleep out
//! - `sleep` / `wake`: dim the backlight and enter sleep, and back
//! - `display_on` / `display_off`: blank the panel without losing RAM
//!
//! None of these check whether a paint is in flight. Interleaving them
//! with a running paint corrupts the transfer; callers wait for
//! `is_painting()` to go false first.

pub mod commands;
mod driver;
mod init;

pub use driver::{DriverError, Ili9341};
pub use init::INIT_TABLE;
