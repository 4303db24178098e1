//! Pixel color type
//!
//! Colors are packed RGB565: red in bits 15..11, green in bits 10..5 and
//! blue in bits 4..0. The controller expects each pixel as two bytes,
//! most significant byte first.

/// Packed 16-bit RGB565 color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u16);

impl Color {
    pub const BLACK: Self = Self::from_html(0x000000);
    pub const WHITE: Self = Self::from_html(0xFFFFFF);
    pub const RED: Self = Self::from_html(0xFF0000);
    pub const GREEN: Self = Self::from_html(0x00FF00);
    pub const BLUE: Self = Self::from_html(0x0000FF);
    pub const YELLOW: Self = Self::from_html(0xFFFF00);
    pub const CYAN: Self = Self::from_html(0x00FFFF);
    pub const MAGENTA: Self = Self::from_html(0xFF00FF);
    pub const GRAY: Self = Self::from_html(0x808080);

    /// Wrap an already packed RGB565 value
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Pack 8-bit channels, truncating to 5/6/5 bits
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self((((r & 0xF8) as u16) << 8) | (((g & 0xFC) as u16) << 3) | ((b as u16) >> 3))
    }

    /// Pack a 24-bit `0xRRGGBB` value
    pub const fn from_html(hex: u32) -> Self {
        Self::from_rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Packed RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel scaled to 8 bits (low 3 bits zero)
    pub const fn red(self) -> u8 {
        ((self.0 >> 8) & 0xF8) as u8
    }

    /// Green channel scaled to 8 bits (low 2 bits zero)
    pub const fn green(self) -> u8 {
        ((self.0 >> 3) & 0xFC) as u8
    }

    /// Blue channel scaled to 8 bits (low 3 bits zero)
    pub const fn blue(self) -> u8 {
        ((self.0 << 3) & 0xF8) as u8
    }

    /// Unpack to a 24-bit `0xRRGGBB` value
    pub const fn to_html(self) -> u32 {
        ((self.red() as u32) << 16) | ((self.green() as u32) << 8) | (self.blue() as u32)
    }

    /// Wire representation sent to the controller
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}
