//! Address window programming
//!
//! Before a run of pixel data the controller is told which rectangle the
//! bytes belong to: a column range, a row (page) range, then a memory
//! write command. After that it places each incoming pixel itself,
//! row-major, so the stream carries no coordinates.

use crate::geometry::ActiveBounds;
use crate::traits::DisplayBus;

/// Addressing command opcodes (MIPI DCS)
pub mod cmd {
    /// Column address set: start and end column, 16-bit big-endian
    pub const COLUMN_ADDRESS_SET: u8 = 0x2A;
    /// Page address set: start and end row, 16-bit big-endian
    pub const PAGE_ADDRESS_SET: u8 = 0x2B;
    /// Start of a sequential pixel write into the window
    pub const MEMORY_WRITE: u8 = 0x2C;
}

/// Bytes per pixel on the wire (18-bit mode, one byte per channel)
pub const BYTES_PER_PIXEL: u32 = 3;

/// Controller address window; all coordinates inclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AddressWindow {
    pub x_start: u16,
    pub y_start: u16,
    pub x_end: u16,
    pub y_end: u16,
}

impl From<&ActiveBounds> for AddressWindow {
    fn from(bounds: &ActiveBounds) -> Self {
        Self {
            x_start: bounds.x_start,
            y_start: bounds.y_start,
            x_end: bounds.x_end.saturating_sub(1),
            y_end: bounds.y_end.saturating_sub(1),
        }
    }
}

impl AddressWindow {
    /// Window covering a whole `width` x `height` panel
    ///
    /// A zero dimension collapses to a single row or column; callers are
    /// expected to reject empty panels before programming a window.
    pub const fn full(width: u16, height: u16) -> Self {
        Self {
            x_start: 0,
            y_start: 0,
            x_end: width.saturating_sub(1),
            y_end: height.saturating_sub(1),
        }
    }

    /// Pixels the controller expects before the window is exhausted
    pub const fn pixel_count(&self) -> u32 {
        (self.x_end - self.x_start + 1) as u32 * (self.y_end - self.y_start + 1) as u32
    }

    /// Data bytes the controller expects after the memory write command
    pub const fn byte_count(&self) -> u32 {
        self.pixel_count() * BYTES_PER_PIXEL
    }
}

/// Send the column range, row range, and memory write commands for `window`
///
/// Blocking; the bus is armed for `window.byte_count()` data bytes when
/// this returns.
pub fn program<B: DisplayBus>(bus: &mut B, window: &AddressWindow) -> Result<(), B::Error> {
    bus.command_with_data(cmd::COLUMN_ADDRESS_SET, &range(window.x_start, window.x_end))?;
    bus.command_with_data(cmd::PAGE_ADDRESS_SET, &range(window.y_start, window.y_end))?;
    bus.command(cmd::MEMORY_WRITE)
}

fn range(start: u16, end: u16) -> [u8; 4] {
    let [s_hi, s_lo] = start.to_be_bytes();
    let [e_hi, e_lo] = end.to_be_bytes();
    [s_hi, s_lo, e_hi, e_lo]
}
