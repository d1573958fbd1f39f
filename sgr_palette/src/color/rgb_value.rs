// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! This is the most precise color representation supported by modern terminals.

use crate::{ColorError, ColorResult, RgbChannel, SgrCode};

/// Represents a color in RGB (24-bit truecolor) format.
///
/// Once you have an [`RgbValue`] the channels are known to be in range, so the escape
/// sequence methods can't fail. Use [`RgbValue::try_from_channels()`] to validate
/// integers that come from elsewhere.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

/// `0xRRGGBB`, the top byte is ignored.
impl From<u32> for RgbValue {
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Validate each channel and build an [`RgbValue`].
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorComponent`] if any channel is outside of
    /// `0..=255`. When more than one channel is out of range, which one gets reported
    /// is unspecified.
    pub fn try_from_channels(red: i32, green: i32, blue: i32) -> ColorResult<Self> {
        Ok(Self {
            red: try_channel(RgbChannel::Red, red)?,
            green: try_channel(RgbChannel::Green, green)?,
            blue: try_channel(RgbChannel::Blue, blue)?,
        })
    }

    /// Escape sequence that sets this as the foreground color: `ESC[38;2;<r>;<g>;<b>m`.
    #[must_use]
    pub fn foreground(self) -> String {
        SgrCode::ForegroundRGB(self.red, self.green, self.blue).to_string()
    }

    /// Escape sequence that sets this as the background color: `ESC[48;2;<r>;<g>;<b>m`.
    #[must_use]
    pub fn background(self) -> String {
        SgrCode::BackgroundRGB(self.red, self.green, self.blue).to_string()
    }

    /// Escape sequence that sets this as the underline color: `ESC[58;2;<r>;<g>;<b>m`.
    #[must_use]
    pub fn underline(self) -> String {
        SgrCode::UnderlineRGB(self.red, self.green, self.blue).to_string()
    }
}

fn try_channel(channel: RgbChannel, value: i32) -> ColorResult<u8> {
    u8::try_from(value).map_err(|_| ColorError::InvalidColorComponent { channel, value })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn test_new() {
        let value = RgbValue::from_u8(1, 2, 3);
        assert_eq!((value.red, value.green, value.blue), (1, 2, 3));
        assert_eq!(RgbValue::from((1, 2, 3)), value);
    }

    #[test]
    fn test_from_hex_u32() {
        assert_eq!(RgbValue::from(0x87_AF_87_u32), RgbValue::from_u8(0x87, 0xAF, 0x87));
        assert_eq!(RgbValue::from(0xFF_00_00_00_u32), RgbValue::from_u8(0, 0, 0));
    }

    #[test_case(0, 0, 0)]
    #[test_case(255, 125, 0)]
    #[test_case(255, 255, 255)]
    fn test_try_from_channels_in_range(red: i32, green: i32, blue: i32) {
        let value = RgbValue::try_from_channels(red, green, blue).unwrap();
        assert_eq!(
            (i32::from(value.red), i32::from(value.green), i32::from(value.blue)),
            (red, green, blue)
        );
    }

    #[test_case(-1, 0, 0,    RgbChannel::Red,   -1)]
    #[test_case(0, 256, 0,   RgbChannel::Green, 256)]
    #[test_case(0, 0, 1000,  RgbChannel::Blue,  1000)]
    #[test_case(0, 0, i32::MIN, RgbChannel::Blue, i32::MIN)]
    fn test_try_from_channels_reports_bad_channel(
        red: i32,
        green: i32,
        blue: i32,
        channel: RgbChannel,
        value: i32,
    ) {
        assert_eq!(
            RgbValue::try_from_channels(red, green, blue),
            Err(ColorError::InvalidColorComponent { channel, value })
        );
    }

    #[test]
    fn test_escape_sequences() {
        let value = RgbValue::from_u8(175, 215, 135);
        assert_eq!(value.foreground(), "\x1b[38;2;175;215;135m");
        assert_eq!(value.background(), "\x1b[48;2;175;215;135m");
        assert_eq!(value.underline(), "\x1b[58;2;175;215;135m");
    }
}
