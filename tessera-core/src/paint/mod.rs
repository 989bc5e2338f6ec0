//! Paint pipeline
//!
//! The engine owns whether a paint is in flight, which rectangle is being
//! streamed, where the sweep cursor is, and which byte of the current
//! pixel goes out next. Every transition is a method on that one record.
//!
//! ```text
//!   request ──► Idle ──► Addressing ──► Streaming ──► Draining ──► Idle
//!                 ▲                      │    ▲                      │
//!                 │                      └────┘ one byte per tick    │
//!                 └─────────── queue drained one entry per tick ◄────┘
//! ```

pub mod engine;

pub use engine::PaintEngine;

use crate::geometry::Region;
use crate::queue::QueueFull;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do with a repaint request raised while a paint is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PaintPolicy {
    /// Queue the region verbatim; each request is painted on its own
    #[default]
    Queue,
    /// Grow the active bounds to cover the region and restart the sweep
    Merge,
}

/// Engine states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaintState {
    /// Nothing in flight
    Idle,
    /// Bounds chosen; address window goes out on the next tick
    Addressing,
    /// Pixel bytes going out, one per tick
    Streaming,
    /// Last byte queued; waiting for the transport to confirm it
    Draining,
}

/// Which byte of the current pixel is next on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransferPhase {
    #[default]
    ChannelHigh,
    ChannelMid,
    ChannelLow,
}

impl TransferPhase {
    /// Position of the channel in [`Rgb24::bytes`](crate::Rgb24::bytes)
    pub const fn index(self) -> usize {
        match self {
            TransferPhase::ChannelHigh => 0,
            TransferPhase::ChannelMid => 1,
            TransferPhase::ChannelLow => 2,
        }
    }

    /// The following phase, or `None` after the low byte
    pub const fn next(self) -> Option<TransferPhase> {
        match self {
            TransferPhase::ChannelHigh => Some(TransferPhase::ChannelMid),
            TransferPhase::ChannelMid => Some(TransferPhase::ChannelLow),
            TransferPhase::ChannelLow => None,
        }
    }
}

/// A repaint request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Repaint {
    /// The whole panel
    Full,
    /// One rectangle
    Region(Region),
}

/// How a repaint request was handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PaintRequest {
    /// The engine was idle; the paint begins on the next tick
    Started,
    /// A paint was in flight; the region waits in the queue
    Queued,
    /// Merge policy: active bounds grew and the sweep restarted
    Merged,
    /// Merge policy: the region was already inside the active bounds
    Absorbed,
    /// Empty or entirely off-panel; nothing to do
    Ignored,
}

/// A repaint request could not be accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RequestError {
    /// Every queue slot is still pending
    QueueFull,
}

impl From<QueueFull> for RequestError {
    fn from(_: QueueFull) -> Self {
        RequestError::QueueFull
    }
}

/// What a single `tick()` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tick {
    /// Nothing active and nothing queued
    Idle,
    /// A queued region became the active paint
    Dequeued,
    /// The address window went out
    Addressed,
    /// Transport not ready; retry on the next tick
    Stalled,
    /// One pixel byte went out
    Sent(TransferPhase),
    /// The final byte went out and the transport drained
    Completed,
}
