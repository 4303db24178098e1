//! Driver configuration types
//!
//! Board-independent settings applied when a controller is initialized.
//! With the `serde` feature the configuration can be persisted as postcard
//! binary data next to the rest of the firmware configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::state::BACKLIGHT_MAX;

/// Default backlight level applied at init (%)
pub const DEFAULT_BACKLIGHT: u8 = 100;

/// Default contrast recorded at init (%)
pub const DEFAULT_CONTRAST: u8 = 50;

/// Clip filter mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClipMode {
    /// Every draw is intersected with the active clip
    #[default]
    Enabled,
    /// Draws go straight to the controller; the caller keeps them on screen
    Disabled,
}

/// Controller driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Backlight level applied at init (0-100)
    pub initial_backlight: u8,
    /// Contrast level recorded at init (0-100)
    pub initial_contrast: u8,
    /// Clip filter mode
    pub clipping: ClipMode,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            initial_backlight: DEFAULT_BACKLIGHT,
            initial_contrast: DEFAULT_CONTRAST,
            clipping: ClipMode::Enabled,
        }
    }
}

impl DriverConfig {
    /// Configuration with levels clamped to 0-100
    pub fn normalized(mut self) -> Self {
        self.initial_backlight = self.initial_backlight.min(BACKLIGHT_MAX);
        self.initial_contrast = self.initial_contrast.min(BACKLIGHT_MAX);
        self
    }

    /// Set the backlight level applied at init
    pub fn with_backlight(mut self, percent: u8) -> Self {
        self.initial_backlight = percent.min(BACKLIGHT_MAX);
        self
    }

    /// Set the clip filter mode
    pub fn with_clipping(mut self, clipping: ClipMode) -> Self {
        self.clipping = clipping;
        self
    }
}

/// Configuration storage errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Output buffer too small or value not encodable
    Serialize,
    /// Stored bytes are not a valid configuration
    Deserialize,
}

#[cfg(feature = "serde")]
impl DriverConfig {
    /// Serialize into `buf` as postcard binary
    ///
    /// Returns the used prefix of `buf`.
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Deserialize from postcard binary
    ///
    /// Out-of-range levels are clamped rather than rejected.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes::<Self>(bytes)
            .map(Self::normalized)
            .map_err(|_| ConfigError::Deserialize)
    }
}
