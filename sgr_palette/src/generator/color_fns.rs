// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiValue, ColorResult, RgbValue};

/// Palette foreground, `ESC[38;5;<n>m`. Same as [`AnsiValue::foreground()`].
#[must_use]
pub fn foreground(color: AnsiValue) -> String { color.foreground() }

/// Palette background, `ESC[48;5;<n>m`. Same as [`AnsiValue::background()`].
#[must_use]
pub fn background(color: AnsiValue) -> String { color.background() }

/// Palette underline color, `ESC[58;5;<n>m`. Same as [`AnsiValue::underline()`].
#[must_use]
pub fn underline(color: AnsiValue) -> String { color.underline() }

/// Truecolor foreground, `ESC[38;2;<r>;<g>;<b>m`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorComponent`](crate::ColorError::InvalidColorComponent)
/// if any channel is outside `0..=255`.
pub fn rgb_foreground(red: i32, green: i32, blue: i32) -> ColorResult<String> {
    RgbValue::try_from_channels(red, green, blue).map(RgbValue::foreground)
}

/// Truecolor background, `ESC[48;2;<r>;<g>;<b>m`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorComponent`](crate::ColorError::InvalidColorComponent)
/// if any channel is outside `0..=255`.
pub fn rgb_background(red: i32, green: i32, blue: i32) -> ColorResult<String> {
    RgbValue::try_from_channels(red, green, blue).map(RgbValue::background)
}

/// Truecolor underline color, `ESC[58;2;<r>;<g>;<b>m`.
///
/// # Errors
///
/// Returns [`ColorError::InvalidColorComponent`](crate::ColorError::InvalidColorComponent)
/// if any channel is outside `0..=255`.
pub fn rgb_underline(red: i32, green: i32, blue: i32) -> ColorResult<String> {
    RgbValue::try_from_channels(red, green, blue).map(RgbValue::underline)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;
    use crate::ColorError;

    #[test]
    fn free_fns_match_methods_for_every_ordinal() {
        for index in 0..=u8::MAX {
            let color = AnsiValue::new(index);
            assert_eq!(foreground(color), color.foreground());
            assert_eq!(background(color), color.background());
            assert_eq!(underline(color), color.underline());
            assert_eq!(foreground(color), format!("\x1b[38;5;{index}m"));
            assert_eq!(background(color), format!("\x1b[48;5;{index}m"));
            assert_eq!(underline(color), format!("\x1b[58;5;{index}m"));
        }
    }

    #[test]
    fn named_colors() {
        assert_eq!(foreground(AnsiValue::BLACK), "\x1b[38;5;0m");
        assert_eq!(background(AnsiValue::ANTI_FLASH_WHITE), "\x1b[48;5;255m");
        assert_eq!(underline(AnsiValue::DEEP_SKY_BLUE), "\x1b[58;5;39m");
    }

    #[test_case(0, 0, 0)]
    #[test_case(255, 255, 255)]
    #[test_case(10, 20, 30)]
    #[test_case(128, 0, 255)]
    fn rgb_in_range(red: i32, green: i32, blue: i32) {
        assert_eq!(
            rgb_foreground(red, green, blue).unwrap(),
            format!("\x1b[38;2;{red};{green};{blue}m")
        );
        assert_eq!(
            rgb_background(red, green, blue).unwrap(),
            format!("\x1b[48;2;{red};{green};{blue}m")
        );
        assert_eq!(
            rgb_underline(red, green, blue).unwrap(),
            format!("\x1b[58;2;{red};{green};{blue}m")
        );
    }

    #[test_case(256, 0, 0)]
    #[test_case(0, 256, 0)]
    #[test_case(0, 0, 256)]
    #[test_case(-1, -1, -1)]
    #[test_case(i32::MIN, 0, i32::MAX)]
    fn rgb_out_of_range(red: i32, green: i32, blue: i32) {
        for result in [
            rgb_foreground(red, green, blue),
            rgb_background(red, green, blue),
            rgb_underline(red, green, blue),
        ] {
            assert!(matches!(
                result,
                Err(ColorError::InvalidColorComponent { .. })
            ));
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(foreground(AnsiValue::GOLD), foreground(AnsiValue::GOLD));
        assert_eq!(rgb_background(1, 2, 3), rgb_background(1, 2, 3));
        assert_eq!(rgb_underline(-5, 0, 0), rgb_underline(-5, 0, 0));
    }
}
