//! Board control primitives
//!
//! Everything a display driver needs from the board besides the bus itself.

use crate::bus::CommandBus;

/// Display board
///
/// Implementations own the bus, the reset line and the backlight driver.
/// Errors share the bus error type so drivers only have one failure type to
/// propagate.
pub trait Board: CommandBus {
    /// One-time board bring-up (clocks, pin muxing)
    ///
    /// Called once at the start of driver initialization.
    fn init_board(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Drive the controller reset line
    ///
    /// - `active`: `true` holds the controller in reset
    fn set_reset_pin(&mut self, active: bool) -> Result<(), Self::Error>;

    /// Block for at least `ms` milliseconds
    fn sleep_ms(&mut self, ms: u32);

    /// Set backlight brightness
    ///
    /// - `percent`: requested level, 0-100
    ///
    /// Returns the level actually applied (boards with coarse PWM or an
    /// on/off backlight may round).
    fn set_backlight(&mut self, percent: u8) -> Result<u8, Self::Error>;
}
