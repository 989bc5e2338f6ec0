//! Panel coordinate types
//!
//! All coordinates are unsigned panel pixels with the origin at the
//! top-left corner. Rectangles use exclusive end coordinates internally;
//! the controller's inclusive form lives in [`crate::window`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rectangle of panel pixels awaiting redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    /// Create a region from its top-left corner and size
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The whole panel
    pub const fn full(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// True if the region covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered
    pub const fn pixel_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Clip the region to a `panel_width` x `panel_height` panel
    ///
    /// Returns `None` when nothing of the region is left on the panel.
    pub fn clip(&self, panel_width: u16, panel_height: u16) -> Option<Region> {
        if self.is_empty() || self.x >= panel_width || self.y >= panel_height {
            return None;
        }

        let right = (self.x as u32 + self.width as u32).min(panel_width as u32);
        let bottom = (self.y as u32 + self.height as u32).min(panel_height as u32);

        Some(Region {
            x: self.x,
            y: self.y,
            width: (right - self.x as u32) as u16,
            height: (bottom - self.y as u32) as u16,
        })
    }
}

/// The rectangle currently being streamed
///
/// End coordinates are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ActiveBounds {
    pub x_start: u16,
    pub x_end: u16,
    pub y_start: u16,
    pub y_end: u16,
}

impl From<Region> for ActiveBounds {
    /// The region must already be clipped to the panel.
    fn from(region: Region) -> Self {
        Self {
            x_start: region.x,
            x_end: region.x + region.width,
            y_start: region.y,
            y_end: region.y + region.height,
        }
    }
}

impl ActiveBounds {
    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.x_end - self.x_start
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.y_end - self.y_start
    }

    /// Number of pixels covered
    pub const fn pixel_count(&self) -> u32 {
        self.width() as u32 * self.height() as u32
    }

    /// True if `other` lies entirely inside these bounds
    pub const fn contains(&self, other: &ActiveBounds) -> bool {
        other.x_start >= self.x_start
            && other.x_end <= self.x_end
            && other.y_start >= self.y_start
            && other.y_end <= self.y_end
    }

    /// Smallest bounds covering both rectangles
    pub fn union(&self, other: &ActiveBounds) -> ActiveBounds {
        ActiveBounds {
            x_start: self.x_start.min(other.x_start),
            x_end: self.x_end.max(other.x_end),
            y_start: self.y_start.min(other.y_start),
            y_end: self.y_end.max(other.y_end),
        }
    }

    /// Cursor positioned on the top-left pixel
    pub const fn origin(&self) -> SweepCursor {
        SweepCursor {
            x: self.x_start,
            y: self.y_start,
        }
    }
}

/// Pixel position within the active bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepCursor {
    pub x: u16,
    pub y: u16,
}

impl SweepCursor {
    /// Step to the next pixel in row-major order
    ///
    /// Returns true once the cursor has moved past the last row, i.e. the
    /// sweep of `bounds` is complete.
    pub fn advance(&mut self, bounds: &ActiveBounds) -> bool {
        self.x += 1;
        if self.x >= bounds.x_end {
            self.x = bounds.x_start;
            self.y += 1;
        }
        self.y >= bounds.y_end
    }
}
