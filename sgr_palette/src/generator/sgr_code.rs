// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://doc.rust-lang.org/reference/tokens.html#ascii-escapes>
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>

use std::fmt::{Display, Formatter, Result, Write};

use smallstr::SmallString;

use crate::{CSI,
            SGR_BACKGROUND_PREFIX,
            SGR_END,
            SGR_FOREGROUND_PREFIX,
            SGR_MODE_PALETTE,
            SGR_MODE_TRUECOLOR,
            SGR_PARAM_SEP,
            SGR_UNDERLINE_PREFIX,
            SgrAttribute};

pub mod sizing {
    /// The longest sequence is `ESC[58;2;255;255;255m`, which is 19 bytes.
    pub const INLINE_SGR_STRING_SIZE: usize = 24;

    pub type InlineSgrString = smallstr::SmallString<[u8; INLINE_SGR_STRING_SIZE]>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SgrCode {
    Attribute(SgrAttribute),
    ForegroundAnsi256(u8),
    BackgroundAnsi256(u8),
    UnderlineAnsi256(u8),
    ForegroundRGB(u8, u8, u8),
    BackgroundRGB(u8, u8, u8),
    UnderlineRGB(u8, u8, u8),
}

impl From<SgrAttribute> for SgrCode {
    fn from(attribute: SgrAttribute) -> Self { SgrCode::Attribute(attribute) }
}

impl SgrCode {
    /// This is different than the [Display] trait implementation, because it doesn't
    /// allocate a new [String], but instead writes to an inline buffer on the stack.
    /// Every [`SgrCode`] fits in [`sizing::INLINE_SGR_STRING_SIZE`] bytes, so it never
    /// spills to the heap.
    #[must_use]
    pub fn to_small_str(&self) -> sizing::InlineSgrString {
        let mut acc = SmallString::new();
        // Writing to an in-memory buffer can't fail.
        write!(acc, "{self}").ok();
        acc
    }
}

fn fmt_ansi256(prefix: &str, index: u8, f: &mut Formatter<'_>) -> Result {
    write!(
        f,
        "{CSI}{prefix}{SGR_PARAM_SEP}{SGR_MODE_PALETTE}{SGR_PARAM_SEP}{index}{SGR_END}"
    )
}

fn fmt_rgb(prefix: &str, (r, g, b): (u8, u8, u8), f: &mut Formatter<'_>) -> Result {
    write!(
        f,
        "{CSI}{prefix}{SGR_PARAM_SEP}{SGR_MODE_TRUECOLOR}\
         {SGR_PARAM_SEP}{r}{SGR_PARAM_SEP}{g}{SGR_PARAM_SEP}{b}{SGR_END}"
    )
}

impl Display for SgrCode {
    /// SGR: set graphics mode command.
    /// More info:
    /// - <https://notes.burke.libbey.me/ansi-escape-codes/>
    /// - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
    /// - <https://en.wikipedia.org/wiki/ANSI_escape_code>
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            SgrCode::Attribute(attribute)     => f.write_str(attribute.as_str()),
            SgrCode::ForegroundAnsi256(index) => fmt_ansi256(SGR_FOREGROUND_PREFIX, index, f),
            SgrCode::BackgroundAnsi256(index) => fmt_ansi256(SGR_BACKGROUND_PREFIX, index, f),
            SgrCode::UnderlineAnsi256(index)  => fmt_ansi256(SGR_UNDERLINE_PREFIX, index, f),
            SgrCode::ForegroundRGB(r, g, b)   => fmt_rgb(SGR_FOREGROUND_PREFIX, (r, g, b), f),
            SgrCode::BackgroundRGB(r, g, b)   => fmt_rgb(SGR_BACKGROUND_PREFIX, (r, g, b), f),
            SgrCode::UnderlineRGB(r, g, b)    => fmt_rgb(SGR_UNDERLINE_PREFIX, (r, g, b), f),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bold() {
        let sgr_code = SgrCode::from(SgrAttribute::Bold);
        assert_eq!(sgr_code.to_string(), "\x1b[1m");
    }

    #[test]
    fn reset() {
        let sgr_code = SgrCode::Attribute(SgrAttribute::Default);
        assert_eq!(sgr_code.to_string(), "\x1b[0m");
    }

    #[test]
    fn overline() {
        let sgr_code = SgrCode::Attribute(SgrAttribute::Overlined);
        assert_eq!(sgr_code.to_string(), "\x1b[53m");
    }

    #[test]
    fn fg_color_ansi256() {
        let sgr_code = SgrCode::ForegroundAnsi256(150);
        assert_eq!(sgr_code.to_string(), "\x1b[38;5;150m");
    }

    #[test]
    fn bg_color_ansi256() {
        let sgr_code = SgrCode::BackgroundAnsi256(150);
        assert_eq!(sgr_code.to_string(), "\x1b[48;5;150m");
    }

    #[test]
    fn underline_color_ansi256() {
        let sgr_code = SgrCode::UnderlineAnsi256(150);
        assert_eq!(sgr_code.to_string(), "\x1b[58;5;150m");
    }

    #[test]
    fn fg_color_rgb() {
        let sgr_code = SgrCode::ForegroundRGB(175, 215, 135);
        assert_eq!(sgr_code.to_string(), "\x1b[38;2;175;215;135m");
    }

    #[test]
    fn bg_color_rgb() {
        let sgr_code = SgrCode::BackgroundRGB(175, 215, 135);
        assert_eq!(sgr_code.to_string(), "\x1b[48;2;175;215;135m");
    }

    #[test]
    fn underline_color_rgb() {
        let sgr_code = SgrCode::UnderlineRGB(0, 7, 255);
        assert_eq!(sgr_code.to_string(), "\x1b[58;2;0;7;255m");
    }

    #[test]
    fn small_str_matches_display_and_stays_inline() {
        let widest = SgrCode::UnderlineRGB(255, 255, 255);
        let small_str = widest.to_small_str();
        assert_eq!(small_str.as_str(), widest.to_string());
        assert_eq!(small_str.len(), 19);
        assert!(small_str.len() <= sizing::INLINE_SGR_STRING_SIZE);
        assert!(!small_str.spilled());
    }
}
