//! Configuration type definitions

use dotchain_hal::SpiConfig;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::font::Font;
use crate::session::DEFAULT_BRIGHTNESS;

/// Chain configuration
///
/// `bus` is applied by whoever opens the SPI peripheral; the session only
/// uses the matrix fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatrixConfig {
    /// Number of daisy-chained modules
    pub chain_length: u8,
    /// Font for text rendering
    pub font: Font,
    /// Initial LED intensity (0-15)
    pub brightness: u8,
    /// SPI bus settings
    pub bus: SpiConfig,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            chain_length: 1,
            font: Font::default(),
            brightness: DEFAULT_BRIGHTNESS,
            bus: SpiConfig::default(),
        }
    }
}
