//! Pixel display trait exposed to the graphics layer

use crate::color::Color;
use crate::geometry::Rect;
use crate::state::Control;

/// Pixel-addressable display driver
///
/// Out-of-clip geometry and unsupported control requests are silent no-ops:
/// they return `Ok(())` without touching the hardware. Errors only come from
/// the board underneath.
pub trait PixelDisplay {
    /// Board error type
    type Error;

    /// Reset and configure the controller, then switch the panel on
    ///
    /// Leaves the display powered on at 0° with the configured backlight.
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Set one pixel
    ///
    /// - `x`, `y`: logical coordinates for the current orientation
    fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> Result<(), Self::Error>;

    /// Fill a rectangle with a single color
    ///
    /// - `x`, `y`: top-left corner
    /// - `cx`, `cy`: width and height in pixels
    fn fill_area(
        &mut self,
        x: u16,
        y: u16,
        cx: u16,
        cy: u16,
        color: Color,
    ) -> Result<(), Self::Error>;

    /// Apply a control request (power, orientation, backlight)
    fn control(&mut self, request: Control) -> Result<(), Self::Error>;

    /// Logical width for the current orientation
    fn width(&self) -> u16;

    /// Logical height for the current orientation
    fn height(&self) -> u16;
}

/// Helper methods built on [`PixelDisplay`]
pub trait PixelDisplayExt: PixelDisplay {
    /// Fill a [`Rect`]
    fn fill_rect(&mut self, rect: Rect, color: Color) -> Result<(), Self::Error> {
        self.fill_area(rect.x, rect.y, rect.cx, rect.cy, color)
    }

    /// Fill the whole screen (subject to the active clip)
    fn clear(&mut self, color: Color) -> Result<(), Self::Error> {
        let (width, height) = (self.width(), self.height());
        self.fill_area(0, 0, width, height, color)
    }

    /// Draw a horizontal line of `length` pixels
    fn draw_hline(&mut self, x: u16, y: u16, length: u16, color: Color) -> Result<(), Self::Error> {
        self.fill_area(x, y, length, 1, color)
    }

    /// Draw a vertical line of `length` pixels
    fn draw_vline(&mut self, x: u16, y: u16, length: u16, color: Color) -> Result<(), Self::Error> {
        self.fill_area(x, y, 1, length, color)
    }
}

// Blanket implementation for all PixelDisplay types
impl<T: PixelDisplay> PixelDisplayExt for T {}
