#![forbid(unsafe_code)]

//! 24-bit color.

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Unpack a `0xRRGGBB` value. Bits above the low 24 are ignored.
    #[must_use]
    pub const fn from_hex(packed: u32) -> Self {
        Self {
            r: ((packed >> 16) & 0xFF) as u8,
            g: ((packed >> 8) & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    /// Pack into `0xRRGGBB`.
    #[must_use]
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }
}

impl From<u32> for Rgb {
    fn from(packed: u32) -> Self {
        Self::from_hex(packed)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::Rgb;

    #[test]
    fn hex_unpacks_channels() {
        assert_eq!(Rgb::from_hex(0xa9b1d6), Rgb::new(0xa9, 0xb1, 0xd6));
        assert_eq!(Rgb::from(0x1a1b26_u32), Rgb::new(0x1a, 0x1b, 0x26));
    }

    #[test]
    fn hex_ignores_high_byte() {
        assert_eq!(Rgb::from_hex(0xFF00_0000), Rgb::BLACK);
        assert_eq!(Rgb::from_hex(0x00FF_FFFF), Rgb::WHITE);
    }

    #[test]
    fn tuple_conversion() {
        assert_eq!(Rgb::from((1, 2, 3)).to_hex(), 0x010203);
    }
}
