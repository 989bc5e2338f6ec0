//! Configuration type definitions

use crate::color::Rgb24;
use crate::paint::PaintPolicy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest dimension the ILI9341 frame memory can address
pub const MAX_DIMENSION: u16 = 320;

/// Default SPI clock
pub const DEFAULT_SPI_FREQUENCY_HZ: u32 = 9_000_000;

/// Configuration error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown section header, or a key outside any section
    InvalidSection,
    /// Value could not be parsed for its key
    InvalidValue,
    /// Key not recognized in its section
    UnknownKey,
    /// Zero or oversized panel dimensions
    InvalidDimensions,
}

/// Memory access control flags (MADCTL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MemoryAccess {
    /// Row address order (MY)
    pub row_invert: bool,
    /// Column address order (MX)
    pub column_invert: bool,
    /// Row/column exchange (MV); set for landscape
    pub row_column_exchange: bool,
    /// BGR subpixel order
    pub bgr: bool,
}

impl MemoryAccess {
    const MY: u8 = 0x80;
    const MX: u8 = 0x40;
    const MV: u8 = 0x20;
    const BGR: u8 = 0x08;

    /// Register value for the controller
    pub const fn bits(&self) -> u8 {
        let mut bits = 0;
        if self.row_invert {
            bits |= Self::MY;
        }
        if self.column_invert {
            bits |= Self::MX;
        }
        if self.row_column_exchange {
            bits |= Self::MV;
        }
        if self.bgr {
            bits |= Self::BGR;
        }
        bits
    }
}

impl Default for MemoryAccess {
    /// Landscape, connector on the left
    fn default() -> Self {
        Self {
            row_invert: true,
            column_invert: true,
            row_column_exchange: true,
            bgr: true,
        }
    }
}

/// Panel hardware configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    /// Width in pixels, after rotation
    pub width: u16,
    /// Height in pixels, after rotation
    pub height: u16,
    /// Handling of repaints requested mid-paint
    pub policy: PaintPolicy,
    /// SPI clock in Hz
    pub spi_frequency_hz: u32,
    /// Scan direction and color order
    pub memory_access: MemoryAccess,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            width: 320,
            height: 240,
            policy: PaintPolicy::Queue,
            spi_frequency_hz: DEFAULT_SPI_FREQUENCY_HZ,
            memory_access: MemoryAccess::default(),
        }
    }
}

impl PanelConfig {
    /// Check dimensions and clock
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0
            || self.height == 0
            || self.width > MAX_DIMENSION
            || self.height > MAX_DIMENSION
        {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.spi_frequency_hz == 0 {
            return Err(ConfigError::InvalidValue);
        }
        Ok(())
    }
}

/// UI configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct UiConfig {
    /// Background color
    pub background: Rgb24,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            background: Rgb24::BLACK,
        }
    }
}

/// Complete configuration, one field per `panel.toml` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub panel: PanelConfig,
    pub ui: UiConfig,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.panel.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_landscape_ili9341() {
        let config = PanelConfig::default();
        assert_eq!((config.width, config.height), (320, 240));
        assert_eq!(config.policy, PaintPolicy::Queue);
        assert_eq!(config.spi_frequency_hz, 9_000_000);
        assert_eq!(config.memory_access.bits(), 0xE8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_memory_access_bits() {
        let portrait = MemoryAccess {
            row_column_exchange: false,
            ..MemoryAccess::default()
        };
        assert_eq!(portrait.bits(), 0xC8);

        let none = MemoryAccess {
            row_invert: false,
            column_invert: false,
            row_column_exchange: false,
            bgr: false,
        };
        assert_eq!(none.bits(), 0);
    }

    #[test]
    fn test_validate_dimensions() {
        let zero = PanelConfig {
            width: 0,
            ..PanelConfig::default()
        };
        assert_eq!(zero.validate(), Err(ConfigError::InvalidDimensions));

        let oversized = PanelConfig {
            height: 321,
            ..PanelConfig::default()
        };
        assert_eq!(oversized.validate(), Err(ConfigError::InvalidDimensions));

        let portrait = PanelConfig {
            width: 240,
            height: 320,
            ..PanelConfig::default()
        };
        assert!(portrait.validate().is_ok());
    }

    #[test]
    fn test_validate_frequency() {
        let stopped = PanelConfig {
            spi_frequency_hz: 0,
            ..PanelConfig::default()
        };
        assert_eq!(stopped.validate(), Err(ConfigError::InvalidValue));
    }
}
