// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Enum view of the style attribute constants in [`crate::constants`].
//!
//! Use this when you need to iterate over every attribute, or go from an attribute to
//! its SGR parameter number. Each variant's [`SgrAttribute::as_str()`] returns the
//! exact same `&'static str` as the matching constant.

use std::fmt::{Display, Formatter, Result};

use strum_macros::{EnumCount, EnumIter};

use crate::constants;

/// Generates [`SgrAttribute`], along with [`SgrAttribute::param()`] and
/// [`SgrAttribute::as_str()`], from one table so the three can't drift apart.
macro_rules! sgr_attributes {
    ($($variant:ident => $constant:ident = $param:literal),* $(,)?) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter)]
        pub enum SgrAttribute {
            $(
                #[doc = concat!("See [`", stringify!($constant), "`](crate::", stringify!($constant), ").")]
                $variant,
            )*
        }

        impl SgrAttribute {
            /// The SGR parameter number, eg: `1` for [`SgrAttribute::Bold`].
            #[must_use]
            pub const fn param(self) -> u8 {
                match self {
                    $(SgrAttribute::$variant => $param,)*
                }
            }

            /// The escape sequence, eg: `"\x1b[1m"` for [`SgrAttribute::Bold`].
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(SgrAttribute::$variant => constants::$constant,)*
                }
            }
        }
    };
}

sgr_attributes! {
    Default                         => DEFAULT                             = 0,
    Bold                            => BOLD                                = 1,
    Faint                           => FAINT                               = 2,
    Italic                          => ITALIC                              = 3,
    Underlined                      => UNDERLINED                          = 4,
    BlinkingSlow                    => BLINKING_SLOW                       = 5,
    BlinkingRapid                   => BLINKING_RAPID                      = 6,
    Inverted                        => INVERTED                            = 7,
    Hide                            => HIDE                                = 8,
    Crossed                         => CROSSED                             = 9,
    Primary                         => PRIMARY                             = 10,
    AlternateFont1                  => ALTERNATE_FONT_1                    = 11,
    AlternateFont2                  => ALTERNATE_FONT_2                    = 12,
    AlternateFont3                  => ALTERNATE_FONT_3                    = 13,
    AlternateFont4                  => ALTERNATE_FONT_4                    = 14,
    AlternateFont5                  => ALTERNATE_FONT_5                    = 15,
    AlternateFont6                  => ALTERNATE_FONT_6                    = 16,
    AlternateFont7                  => ALTERNATE_FONT_7                    = 17,
    AlternateFont8                  => ALTERNATE_FONT_8                    = 18,
    AlternateFont9                  => ALTERNATE_FONT_9                    = 19,
    Fraktur                         => FRAKTUR                             = 20,
    DoubleUnderlined                => DOUBLE_UNDERLINED                   = 21,
    NormalIntensity                 => NORMAL_INTENSITY                    = 22,
    NoItalicNorBlackletter          => NO_ITALIC_NOR_BLACKLETTER           = 23,
    NotUnderlined                   => NOT_UNDERLINED                      = 24,
    NotBlinking                     => NOT_BLINKING                        = 25,
    ProportionalSpacing             => PROPORTIONAL_SPACING                = 26,
    NotReversed                     => NOT_REVERSED                        = 27,
    Reveal                          => REVEAL                              = 28,
    NotCrossedOut                   => NOT_CROSSED_OUT                     = 29,
    StdColorBlackForeground         => STD_COLOR_BLACK_FOREGROUND          = 30,
    StdColorRedForeground           => STD_COLOR_RED_FOREGROUND            = 31,
    StdColorGreenForeground         => STD_COLOR_GREEN_FOREGROUND          = 32,
    StdColorYellowForeground        => STD_COLOR_YELLOW_FOREGROUND         = 33,
    StdColorBlueForeground          => STD_COLOR_BLUE_FOREGROUND           = 34,
    StdColorMagentaForeground       => STD_COLOR_MAGENTA_FOREGROUND        = 35,
    StdColorCyanForeground          => STD_COLOR_CYAN_FOREGROUND           = 36,
    StdColorWhiteForeground         => STD_COLOR_WHITE_FOREGROUND          = 37,
    DefaultColorForeground          => DEFAULT_COLOR_FOREGROUND            = 39,
    StdColorBlackBackground         => STD_COLOR_BLACK_BACKGROUND          = 40,
    StdColorRedBackground           => STD_COLOR_RED_BACKGROUND            = 41,
    StdColorGreenBackground         => STD_COLOR_GREEN_BACKGROUND          = 42,
    StdColorYellowBackground        => STD_COLOR_YELLOW_BACKGROUND         = 43,
    StdColorBlueBackground          => STD_COLOR_BLUE_BACKGROUND           = 44,
    StdColorMagentaBackground       => STD_COLOR_MAGENTA_BACKGROUND        = 45,
    StdColorCyanBackground          => STD_COLOR_CYAN_BACKGROUND           = 46,
    StdColorWhiteBackground         => STD_COLOR_WHITE_BACKGROUND          = 47,
    DefaultColorBackground          => DEFAULT_COLOR_BACKGROUND            = 49,
    DisableProportionalSpacing      => DISABLE_PROPORTIONAL_SPACING        = 50,
    Framed                          => FRAMED                              = 51,
    Encircled                       => ENCIRCLED                           = 52,
    Overlined                       => OVERLINED                           = 53,
    NoFramedNorEncircled            => NO_FRAMED_NOR_ENCIRCLED             = 54,
    NotOverlined                    => NOT_OVERLINED                       = 55,
    DefaultUnderlineColor           => DEFAULT_UNDERLINE_COLOR             = 59,
    IdeogramUnderlineOrRightLine    => IDEOGRAM_UNDERLINE_OR_RIGHT_LINE    = 60,
    IdeogramDoubleUnderlineOrRight  => IDEOGRAM_DOUBLE_UNDERLINE_OR_RIGHT  = 61,
    IdeogramOverlineOrLeftLine      => IDEOGRAM_OVERLINE_OR_LEFT_LINE      = 62,
    IdeogramDoubleOverlineLeft      => IDEOGRAM_DOUBLE_OVERLINE_LEFT       = 63,
    IdeogramStressMarking           => IDEOGRAM_STRESS_MARKING             = 64,
    IdeogramReset                   => IDEOGRAM_RESET                      = 65,
    Superscript                     => SUPERSCRIPT                         = 73,
    Subscript                       => SUBSCRIPT                           = 74,
    NoSuperscriptNorSubscript       => NO_SUPERSCRIPT_NOR_SUBSCRIPT        = 75,
    StdColorBrightBlackForeground   => STD_COLOR_BRIGHT_BLACK_FOREGROUND   = 90,
    StdColorBrightRedForeground     => STD_COLOR_BRIGHT_RED_FOREGROUND     = 91,
    StdColorBrightGreenForeground   => STD_COLOR_BRIGHT_GREEN_FOREGROUND   = 92,
    StdColorBrightYellowForeground  => STD_COLOR_BRIGHT_YELLOW_FOREGROUND  = 93,
    StdColorBrightBlueForeground    => STD_COLOR_BRIGHT_BLUE_FOREGROUND    = 94,
    StdColorBrightMagentaForeground => STD_COLOR_BRIGHT_MAGENTA_FOREGROUND = 95,
    StdColorBrightCyanForeground    => STD_COLOR_BRIGHT_CYAN_FOREGROUND    = 96,
    StdColorBrightWhiteForeground   => STD_COLOR_BRIGHT_WHITE_FOREGROUND   = 97,
    StdColorBrightBlackBackground   => STD_COLOR_BRIGHT_BLACK_BACKGROUND   = 100,
    StdColorBrightRedBackground     => STD_COLOR_BRIGHT_RED_BACKGROUND     = 101,
    StdColorBrightGreenBackground   => STD_COLOR_BRIGHT_GREEN_BACKGROUND   = 102,
    StdColorBrightYellowBackground  => STD_COLOR_BRIGHT_YELLOW_BACKGROUND  = 103,
    StdColorBrightBlueBackground    => STD_COLOR_BRIGHT_BLUE_BACKGROUND    = 104,
    StdColorBrightMagentaBackground => STD_COLOR_BRIGHT_MAGENTA_BACKGROUND = 105,
    StdColorBrightCyanBackground    => STD_COLOR_BRIGHT_CYAN_BACKGROUND    = 106,
    StdColorBrightWhiteBackground   => STD_COLOR_BRIGHT_WHITE_BACKGROUND   = 107,
}

impl Display for SgrAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { f.write_str(self.as_str()) }
}

impl From<SgrAttribute> for &'static str {
    fn from(attribute: SgrAttribute) -> Self { attribute.as_str() }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::*;
    use crate::{BOLD, CSI, DEFAULT, NOT_UNDERLINED, SGR_END};

    #[test]
    fn every_attribute_renders_its_param() {
        for attribute in SgrAttribute::iter() {
            let expected = format!("{CSI}{}{SGR_END}", attribute.param());
            assert_eq!(attribute.as_str(), expected, "{attribute:?}");
            assert_eq!(attribute.to_string(), expected, "{attribute:?}");
        }
    }

    #[test]
    fn params_are_unique() {
        let params: HashSet<u8> = SgrAttribute::iter().map(SgrAttribute::param).collect();
        assert_eq!(params.len(), SgrAttribute::COUNT);
    }

    #[test]
    fn table_size() {
        // 0-29, 30-37, 39, 40-47, 49, 50-55, 59, 60-65, 73-75, 90-97, 100-107.
        assert_eq!(SgrAttribute::COUNT, 30 + 8 + 1 + 8 + 1 + 6 + 1 + 6 + 3 + 8 + 8);
    }

    #[test_case(SgrAttribute::Default,       DEFAULT)]
    #[test_case(SgrAttribute::Bold,          BOLD)]
    #[test_case(SgrAttribute::NotUnderlined, NOT_UNDERLINED)]
    fn matches_constant(attribute: SgrAttribute, constant: &str) {
        assert_eq!(attribute.as_str(), constant);
        let as_str: &'static str = attribute.into();
        assert_eq!(as_str, constant);
    }
}
