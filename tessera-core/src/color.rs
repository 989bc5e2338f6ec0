//! 24-bit color
//!
//! Colors travel as `0xRRGGBB` words. The panel runs in 18-bit mode and
//! samples the upper six bits of each byte, so the pipeline clears the
//! least significant bit of every channel before transmission; provider
//! rounding in that bit would otherwise show up as dither noise.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-channel mask applied to every streamed pixel
pub const CHANNEL_MASK: u32 = 0x00FE_FEFE;

/// A 24-bit `0xRRGGBB` color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Rgb24(u32);

impl Rgb24 {
    pub const BLACK: Rgb24 = Rgb24(0x00_0000);
    pub const WHITE: Rgb24 = Rgb24(0xFF_FFFF);
    pub const RED: Rgb24 = Rgb24(0xFF_0000);
    pub const GREEN: Rgb24 = Rgb24(0x00_FF00);
    pub const BLUE: Rgb24 = Rgb24(0x00_00FF);

    /// Build a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Build a color from a `0xRRGGBB` word; bits above 24 are dropped
    pub const fn from_u32(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    /// The `0xRRGGBB` word
    pub const fn to_u32(self) -> u32 {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    /// The color with each channel's least significant bit cleared
    pub const fn masked(self) -> Self {
        Self(self.0 & CHANNEL_MASK)
    }

    /// Channel bytes in transmission order: red, green, blue
    pub const fn bytes(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}

impl From<u32> for Rgb24 {
    fn from(rgb: u32) -> Self {
        Self::from_u32(rgb)
    }
}
