//! Board-agnostic core of the panel paint pipeline
//!
//! The panel has no frame buffer behind it: every pixel is asked for on
//! demand from a [`traits::PixelProvider`] and streamed to the controller
//! one byte per [`paint::PaintEngine::tick`], interleaved with the rest of
//! the application's control loop.
//!
//! - Panel geometry (regions, active bounds, sweep cursor)
//! - 24-bit color and channel masking
//! - Bounded partial-paint request queue
//! - Address window programming
//! - The paint state machine
//! - Panel configuration types and the `panel.toml` parser

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod color;
pub mod config;
pub mod geometry;
pub mod paint;
pub mod queue;
pub mod traits;
pub mod window;

#[cfg(test)]
mod mock;

pub use color::Rgb24;
pub use geometry::{ActiveBounds, Region, SweepCursor};
pub use paint::{PaintEngine, PaintPolicy, PaintRequest, Repaint, RequestError, Tick};
pub use queue::{PaintQueue, QueueFull, QUEUE_CAPACITY};
pub use traits::{DisplayBus, PixelProvider};
