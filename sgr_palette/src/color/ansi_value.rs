// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette representation.

use crate::SgrCode;

/// Represents a color in the ANSI 256-color palette.
///
/// Every `u8` is a valid palette ordinal, so there is nothing to validate: an out of
/// range value simply can't be constructed. The named palette entries are associated
/// constants, eg: [`AnsiValue::DARK_SEA_GREEN`].
///
/// ```rust
/// use r3bl_sgr_palette::AnsiValue;
///
/// assert_eq!(AnsiValue::new(0).foreground(), "\x1b[38;5;0m");
/// assert_eq!(AnsiValue::MAROON.background(), "\x1b[48;5;1m");
/// assert_eq!(AnsiValue::from(100).underline(), "\x1b[58;5;100m");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

/// The three regions of the palette, fixed by the xterm 256-color layout.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub enum PaletteRegion {
    /// 0-15: the 8 standard colors followed by their high intensity versions.
    Standard,
    /// 16-231: 6x6x6 RGB color cube (216 colors).
    Cube,
    /// 232-255: grayscale ramp (24 shades).
    Grayscale,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl From<AnsiValue> for u8 {
    fn from(value: AnsiValue) -> Self { value.index }
}

impl AnsiValue {
    #[must_use]
    pub const fn new(index: u8) -> Self { Self { index } }

    /// Escape sequence that sets this palette entry as the foreground color:
    /// `ESC[38;5;<index>m`.
    #[must_use]
    pub fn foreground(self) -> String { SgrCode::ForegroundAnsi256(self.index).to_string() }

    /// Escape sequence that sets this palette entry as the background color:
    /// `ESC[48;5;<index>m`.
    #[must_use]
    pub fn background(self) -> String { SgrCode::BackgroundAnsi256(self.index).to_string() }

    /// Escape sequence that sets this palette entry as the underline color:
    /// `ESC[58;5;<index>m`.
    ///
    /// Not in ECMA-48; implemented by Kitty, VTE, mintty and iTerm2.
    #[must_use]
    pub fn underline(self) -> String { SgrCode::UnderlineAnsi256(self.index).to_string() }

    #[must_use]
    pub const fn region(self) -> PaletteRegion {
        match self.index {
            0..=15 => PaletteRegion::Standard,
            16..=231 => PaletteRegion::Cube,
            _ => PaletteRegion::Grayscale,
        }
    }

    /// Check if this is a basic ANSI color (indices 0-15).
    #[must_use]
    pub const fn is_basic(self) -> bool { self.index < 16 }

    /// Check if this is an extended ANSI color (indices 16-255).
    #[must_use]
    pub const fn is_extended(self) -> bool { !self.is_basic() }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(0,   "\x1b[38;5;0m")]
    #[test_case(10,  "\x1b[38;5;10m")]
    #[test_case(100, "\x1b[38;5;100m")]
    #[test_case(255, "\x1b[38;5;255m")]
    fn test_foreground(index: u8, expected: &str) {
        assert_eq!(AnsiValue::new(index).foreground(), expected);
    }

    #[test_case(0,   "\x1b[48;5;0m")]
    #[test_case(10,  "\x1b[48;5;10m")]
    #[test_case(100, "\x1b[48;5;100m")]
    #[test_case(255, "\x1b[48;5;255m")]
    fn test_background(index: u8, expected: &str) {
        assert_eq!(AnsiValue::new(index).background(), expected);
    }

    #[test_case(0,   "\x1b[58;5;0m")]
    #[test_case(10,  "\x1b[58;5;10m")]
    #[test_case(100, "\x1b[58;5;100m")]
    #[test_case(255, "\x1b[58;5;255m")]
    fn test_underline(index: u8, expected: &str) {
        assert_eq!(AnsiValue::new(index).underline(), expected);
    }

    #[test]
    fn test_all_ordinals() {
        for index in 0..=255_u8 {
            let color = AnsiValue::from(index);
            assert_eq!(color.foreground(), format!("\x1b[38;5;{index}m"));
            assert_eq!(color.background(), format!("\x1b[48;5;{index}m"));
            assert_eq!(color.underline(), format!("\x1b[58;5;{index}m"));
            assert_eq!(u8::from(color), index);
        }
    }

    #[test_case(0,   PaletteRegion::Standard)]
    #[test_case(15,  PaletteRegion::Standard)]
    #[test_case(16,  PaletteRegion::Cube)]
    #[test_case(231, PaletteRegion::Cube)]
    #[test_case(232, PaletteRegion::Grayscale)]
    #[test_case(255, PaletteRegion::Grayscale)]
    fn test_region(index: u8, expected: PaletteRegion) {
        assert_eq!(AnsiValue::new(index).region(), expected);
    }

    #[test]
    fn test_is_basic_and_extended_are_complementary() {
        for index in 0..=255_u8 {
            let color = AnsiValue::new(index);
            assert_ne!(color.is_basic(), color.is_extended(), "AnsiValue({index})");
            assert_eq!(color.is_basic(), color.region() == PaletteRegion::Standard);
        }
    }

    /// Spot checks that the named entries sit at their xterm ordinals.
    #[test_case(AnsiValue::BLACK,             0)]
    #[test_case(AnsiValue::MAROON,            1)]
    #[test_case(AnsiValue::WHITE,             15)]
    #[test_case(AnsiValue::DARK_NAVY_BLUE,    17)]
    #[test_case(AnsiValue::DEEP_SKY_BLUE,     39)]
    #[test_case(AnsiValue::ERIN,              47)]
    #[test_case(AnsiValue::DARK_SEA_GREEN,    108)]
    #[test_case(AnsiValue::LIGHT_CYAN,        195)]
    #[test_case(AnsiValue::RADICAL_RED,       197)]
    #[test_case(AnsiValue::GOLD,              220)]
    #[test_case(AnsiValue::LASER_LEMON,       227)]
    #[test_case(AnsiValue::ALMOST_BLACK,      232)]
    #[test_case(AnsiValue::DAVYS_GRAY,        240)]
    #[test_case(AnsiValue::NICKEL,            243)]
    #[test_case(AnsiValue::ALUMINIUM,         245)]
    #[test_case(AnsiValue::ANTI_FLASH_WHITE,  255)]
    fn test_named_color_ordinal(color: AnsiValue, index: u8) {
        assert_eq!(color.index, index);
    }
}
