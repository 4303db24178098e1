//! Control opcodes that drive state transitions

use super::machine::{Orientation, PowerMode, BACKLIGHT_MAX};

/// Raw opcode: set power mode (value = power code)
pub const CONTROL_POWER: u16 = 0;
/// Raw opcode: set orientation (value = degrees)
pub const CONTROL_ORIENTATION: u16 = 1;
/// Raw opcode: set backlight (value = percent)
pub const CONTROL_BACKLIGHT: u16 = 2;
/// Raw opcode: set contrast (not supported by TFT controllers)
pub const CONTROL_CONTRAST: u16 = 3;

/// Validated control request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Control {
    /// Change panel power mode
    Power(PowerMode),
    /// Change logical orientation
    Orientation(Orientation),
    /// Set backlight level in percent (saturates at 100)
    Backlight(u8),
}

impl Control {
    /// Decode a raw `(opcode, value)` pair from the graphics layer
    ///
    /// Returns `None` for unknown opcodes, unknown power codes, angles other
    /// than right angles, and opcodes this controller family ignores.
    pub fn decode(what: u16, value: u32) -> Option<Self> {
        match what {
            CONTROL_POWER => PowerMode::from_raw(value).map(Control::Power),
            CONTROL_ORIENTATION => Orientation::from_degrees(value).map(Control::Orientation),
            CONTROL_BACKLIGHT => Some(Control::Backlight(
                value.min(BACKLIGHT_MAX as u32) as u8,
            )),
            _ => None,
        }
    }

    /// Raw `(opcode, value)` pair for this request
    pub fn encode(&self) -> (u16, u32) {
        match self {
            Control::Power(mode) => (CONTROL_POWER, mode.raw()),
            Control::Orientation(o) => (CONTROL_ORIENTATION, o.degrees() as u32),
            Control::Backlight(level) => (CONTROL_BACKLIGHT, *level as u32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_known_opcodes() {
        assert_eq!(
            Control::decode(CONTROL_POWER, 3),
            Some(Control::Power(PowerMode::On))
        );
        assert_eq!(
            Control::decode(CONTROL_ORIENTATION, 270),
            Some(Control::Orientation(Orientation::Rotate270))
        );
        assert_eq!(
            Control::decode(CONTROL_BACKLIGHT, 42),
            Some(Control::Backlight(42))
        );
    }

    #[test]
    fn test_decode_backlight_saturates() {
        assert_eq!(
            Control::decode(CONTROL_BACKLIGHT, 150),
            Some(Control::Backlight(100))
        );
        assert_eq!(
            Control::decode(CONTROL_BACKLIGHT, u32::MAX),
            Some(Control::Backlight(100))
        );
        assert_eq!(
            Control::decode(CONTROL_BACKLIGHT, 0),
            Some(Control::Backlight(0))
        );
    }

    #[test]
    fn test_decode_rejects_unknown() {
        assert_eq!(Control::decode(CONTROL_POWER, 7), None);
        assert_eq!(Control::decode(CONTROL_ORIENTATION, 45), None);
        assert_eq!(Control::decode(CONTROL_CONTRAST, 50), None);
        assert_eq!(Control::decode(99, 0), None);
    }

    #[test]
    fn test_encode_matches_decode() {
        let requests = [
            Control::Power(PowerMode::Sleep),
            Control::Orientation(Orientation::Rotate90),
            Control::Backlight(75),
        ];
        for request in requests {
            let (what, value) = request.encode();
            assert_eq!(Control::decode(what, value), Some(request));
        }
    }
}
