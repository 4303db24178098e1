//! ILI9341 command opcodes and register bit fields
//!
//! Values follow the ILI9341 datasheet (V1.11). They are the wire protocol
//! and must not change.

use lumen_core::state::Orientation;

/// Command opcodes
pub mod cmd {
    /// Leave sleep mode (wait 120 ms before the next command)
    pub const SLEEP_OUT: u8 = 0x11;
    /// Enable panel output
    pub const DISPLAY_ON: u8 = 0x29;
    /// Column address window, 4 parameter bytes
    pub const COLUMN_ADDRESS_SET: u8 = 0x2A;
    /// Page (row) address window, 4 parameter bytes
    pub const PAGE_ADDRESS_SET: u8 = 0x2B;
    /// Start pixel data into the address window
    pub const MEMORY_WRITE: u8 = 0x2C;
    /// Scan direction and color order
    pub const MEMORY_ACCESS_CONTROL: u8 = 0x36;
    /// Interface pixel format
    pub const PIXEL_FORMAT_SET: u8 = 0x3A;
    /// Display function control
    pub const DISPLAY_FUNCTION_CTL: u8 = 0xB6;
}

/// MEMORY_ACCESS_CONTROL (MADCTL) bits
pub mod madctl {
    /// Vertical refresh order
    pub const ML: u8 = 0x10;
    /// BGR color filter panel
    pub const BGR: u8 = 0x08;
    /// Horizontal refresh order
    pub const MH: u8 = 0x04;
}

/// PIXEL_FORMAT_SET parameter: 16 bits/pixel on both RGB and MCU interfaces
pub const PIXEL_FORMAT_16BPP: u8 = 0x55;

/// DISPLAY_FUNCTION_CTL parameters
pub const DISPLAY_FUNCTION_PARAMS: [u8; 4] = [0x02, 0x82, 0x27, 0x00];

/// Reset pulse width (ms)
pub const RESET_PULSE_MS: u32 = 10;
/// Delay after releasing reset (ms)
pub const RESET_SETTLE_MS: u32 = 120;
/// Delay after SLEEP_OUT (ms)
pub const SLEEP_OUT_MS: u32 = 120;

/// MADCTL value for an orientation
///
/// The rotation itself happens upstream; the upright and rotated pairs share
/// a scan direction and the flipped pair reverses both refresh orders.
pub const fn scan_direction(orientation: Orientation) -> u8 {
    match orientation {
        Orientation::Rotate0 | Orientation::Rotate90 => madctl::BGR,
        Orientation::Rotate180 | Orientation::Rotate270 => madctl::BGR | madctl::ML | madctl::MH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_direction() {
        assert_eq!(scan_direction(Orientation::Rotate0), 0x08);
        assert_eq!(scan_direction(Orientation::Rotate90), 0x08);
        assert_eq!(scan_direction(Orientation::Rotate180), 0x1C);
        assert_eq!(scan_direction(Orientation::Rotate270), 0x1C);
        assert_eq!(
            scan_direction(Orientation::Rotate180),
            madctl::BGR | madctl::ML | madctl::MH
        );
    }
}
