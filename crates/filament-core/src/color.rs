//! Packed RGB colors.

use std::fmt;

/// A packed `0xRRGGBB` color.
///
/// Cells and cursors carry colors by value; two cursors may share a
/// color (a "team"), which is what makes retrace and jump-to-own
/// meaningful across cursors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// The color of unfilled cells.
    pub const WHITE: Color = Color(0x00FF_FFFF);

    /// Build a color from 8-bit channels.
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Red channel.
    pub fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    /// Green channel.
    pub fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    /// Blue channel.
    pub fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0 & 0x00FF_FFFF)
    }
}

impl From<u32> for Color {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_round_trip() {
        let c = Color::from_rgb(0x12, 0x34, 0x56);
        assert_eq!(c.r(), 0x12);
        assert_eq!(c.g(), 0x34);
        assert_eq!(c.b(), 0x56);
        assert_eq!(c, Color(0x0012_3456));
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Color::WHITE.to_string(), "#FFFFFF");
        assert_eq!(Color(0xAB_CDEF).to_string(), "#ABCDEF");
    }
}
