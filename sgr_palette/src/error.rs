// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors produced while validating color input.
//!
//! | Variant                   | When                                        |
//! | :------------------------ | :------------------------------------------ |
//! | [`InvalidColorComponent`] | An RGB channel is outside of `0..=255`.     |
//!
//! Palette based functions can't fail, since [`AnsiValue`] can only hold a valid
//! ordinal.
//!
//! [`InvalidColorComponent`]: ColorError::InvalidColorComponent
//! [`AnsiValue`]: crate::AnsiValue

use std::fmt::{Display, Formatter, Result};

/// Result type for all the fallible functions in this crate.
pub type ColorResult<T> = std::result::Result<T, ColorError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ColorError {
    /// One of the channels passed to [`RgbValue::try_from_channels()`] (or one of the
    /// `rgb_*` functions) does not fit in a byte.
    ///
    /// [`RgbValue::try_from_channels()`]: crate::RgbValue::try_from_channels
    #[error("Color value must be between 0 and 255, got {value} for {channel}")]
    #[diagnostic(
        code(r3bl_sgr_palette::invalid_color_component),
        help("Each of the red, green and blue channels must be in the range 0..=255")
    )]
    InvalidColorComponent { channel: RgbChannel, value: i32 },
}

/// Identifies the channel that failed validation in [`ColorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RgbChannel {
    Red,
    Green,
    Blue,
}

impl Display for RgbChannel {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            RgbChannel::Red   => write!(f, "red"),
            RgbChannel::Green => write!(f, "green"),
            RgbChannel::Blue  => write!(f, "blue"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn error_message_names_channel_and_value() {
        let error = ColorError::InvalidColorComponent {
            channel: RgbChannel::Green,
            value: 256,
        };
        assert_eq!(
            error.to_string(),
            "Color value must be between 0 and 255, got 256 for green"
        );
    }

    #[test]
    fn error_has_diagnostic_code() {
        use miette::Diagnostic;

        let error = ColorError::InvalidColorComponent {
            channel: RgbChannel::Red,
            value: -1,
        };
        let code = error.code().map(|it| it.to_string());
        assert_eq!(
            code.as_deref(),
            Some("r3bl_sgr_palette::invalid_color_component")
        );
        assert!(error.help().is_some());
    }
}
