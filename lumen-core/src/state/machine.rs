//! Display state record and its transitions
//!
//! The state is owned by a driver instance. These transitions are pure
//! bookkeeping; the register writes that accompany them live in the
//! controller driver.

use crate::config::DriverConfig;
use crate::geometry::{ClipRect, Rect};

/// Maximum backlight level in percent
pub const BACKLIGHT_MAX: u8 = 100;

/// Logical screen rotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Native portrait scan
    #[default]
    Rotate0,
    /// Quarter turn, logical axes swapped
    Rotate90,
    /// Half turn
    Rotate180,
    /// Three-quarter turn, logical axes swapped
    Rotate270,
}

impl Orientation {
    /// Check if logical width/height are swapped relative to the panel
    pub fn is_rotated(&self) -> bool {
        matches!(self, Orientation::Rotate90 | Orientation::Rotate270)
    }

    /// Rotation in degrees
    pub const fn degrees(&self) -> u16 {
        match self {
            Orientation::Rotate0 => 0,
            Orientation::Rotate90 => 90,
            Orientation::Rotate180 => 180,
            Orientation::Rotate270 => 270,
        }
    }

    /// Parse a rotation in degrees
    ///
    /// Anything other than the four right angles is rejected.
    pub const fn from_degrees(degrees: u32) -> Option<Self> {
        match degrees {
            0 => Some(Orientation::Rotate0),
            90 => Some(Orientation::Rotate90),
            180 => Some(Orientation::Rotate180),
            270 => Some(Orientation::Rotate270),
            _ => None,
        }
    }
}

/// Panel power mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerMode {
    /// Panel off (state before init)
    #[default]
    Off,
    /// Normal operation
    On,
    /// Low power, fast wake
    Sleep,
    /// Lowest power, slow wake
    DeepSleep,
}

impl PowerMode {
    /// Parse the raw power code used by the graphics layer
    ///
    /// Codes: off = 0, sleep = 1, deep sleep = 2, on = 3.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(PowerMode::Off),
            1 => Some(PowerMode::Sleep),
            2 => Some(PowerMode::DeepSleep),
            3 => Some(PowerMode::On),
            _ => None,
        }
    }

    /// Raw power code
    pub const fn raw(&self) -> u32 {
        match self {
            PowerMode::Off => 0,
            PowerMode::Sleep => 1,
            PowerMode::DeepSleep => 2,
            PowerMode::On => 3,
        }
    }
}

/// Per-display state
///
/// Invariant: `clip` always lies within `[0, width) x [0, height)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    native_width: u16,
    native_height: u16,
    orientation: Orientation,
    width: u16,
    height: u16,
    power_mode: PowerMode,
    backlight: u8,
    contrast: u8,
    clip: ClipRect,
}

impl DisplayState {
    /// State of a panel that has not been initialized yet
    ///
    /// - `native_width`, `native_height`: panel size at 0° rotation
    pub const fn new(native_width: u16, native_height: u16) -> Self {
        Self {
            native_width,
            native_height,
            orientation: Orientation::Rotate0,
            width: native_width,
            height: native_height,
            power_mode: PowerMode::Off,
            backlight: 0,
            contrast: 0,
            clip: ClipRect::full(native_width, native_height),
        }
    }

    /// Record a completed startup sequence
    pub fn mark_initialized(&mut self, config: &DriverConfig) {
        self.set_orientation(Orientation::Rotate0);
        self.power_mode = PowerMode::On;
        self.backlight = config.initial_backlight.min(BACKLIGHT_MAX);
        self.contrast = config.initial_contrast;
    }

    /// Change power mode
    ///
    /// Returns `false` (and changes nothing) if already in `mode`.
    pub fn set_power(&mut self, mode: PowerMode) -> bool {
        if self.power_mode == mode {
            return false;
        }
        self.power_mode = mode;
        true
    }

    /// Change orientation
    ///
    /// Logical dimensions follow the rotation and the clip resets to the
    /// full new screen.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if orientation.is_rotated() {
            self.width = self.native_height;
            self.height = self.native_width;
        } else {
            self.width = self.native_width;
            self.height = self.native_height;
        }
        self.orientation = orientation;
        self.reset_clip();
    }

    /// Store a backlight level, saturating at 100%
    ///
    /// Returns the stored level.
    pub fn set_backlight(&mut self, level: u8) -> u8 {
        self.backlight = level.min(BACKLIGHT_MAX);
        self.backlight
    }

    /// Restrict drawing to `rect` (intersected with the screen)
    pub fn set_clip(&mut self, rect: Rect) {
        self.clip = ClipRect::bounded(rect, self.width, self.height);
    }

    /// Allow drawing anywhere on the screen
    pub fn reset_clip(&mut self) {
        self.clip = ClipRect::full(self.width, self.height);
    }

    /// Current orientation
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Logical width for the current orientation
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Logical height for the current orientation
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Current power mode
    pub fn power_mode(&self) -> PowerMode {
        self.power_mode
    }

    /// Current backlight level (0-100)
    pub fn backlight(&self) -> u8 {
        self.backlight
    }

    /// Contrast level recorded at init
    pub fn contrast(&self) -> u8 {
        self.contrast
    }

    /// Active clip rectangle
    pub fn clip(&self) -> ClipRect {
        self.clip
    }
}
