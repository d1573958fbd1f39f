// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! SGR (Select Graphic Rendition) style attribute constants.
//!
//! Each constant is `ESC[<n>m` for SGR parameter `n`. Terminal support varies a lot for
//! the less common ones, notes are on the constants where it matters.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use const_format::concatcp;

use super::{CSI, SGR_END};

/// All attributes off.
pub const DEFAULT:                             &str = concatcp!(CSI, "0",   SGR_END);
pub const BOLD:                                &str = concatcp!(CSI, "1",   SGR_END);
/// Some terminals render this as a lighter font weight.
pub const FAINT:                               &str = concatcp!(CSI, "2",   SGR_END);
/// Sometimes rendered as inverse or blink.
pub const ITALIC:                              &str = concatcp!(CSI, "3",   SGR_END);
pub const UNDERLINED:                          &str = concatcp!(CSI, "4",   SGR_END);
/// Less than 150 blinks per minute.
pub const BLINKING_SLOW:                       &str = concatcp!(CSI, "5",   SGR_END);
/// 150+ blinks per minute, rarely supported.
pub const BLINKING_RAPID:                      &str = concatcp!(CSI, "6",   SGR_END);
/// Swaps foreground and background colors.
pub const INVERTED:                            &str = concatcp!(CSI, "7",   SGR_END);
pub const HIDE:                                &str = concatcp!(CSI, "8",   SGR_END);
/// Strikethrough. Not supported in Terminal.app.
pub const CROSSED:                             &str = concatcp!(CSI, "9",   SGR_END);
/// Primary (default) font.
pub const PRIMARY:                             &str = concatcp!(CSI, "10",  SGR_END);
pub const ALTERNATE_FONT_1:                    &str = concatcp!(CSI, "11",  SGR_END);
pub const ALTERNATE_FONT_2:                    &str = concatcp!(CSI, "12",  SGR_END);
pub const ALTERNATE_FONT_3:                    &str = concatcp!(CSI, "13",  SGR_END);
pub const ALTERNATE_FONT_4:                    &str = concatcp!(CSI, "14",  SGR_END);
pub const ALTERNATE_FONT_5:                    &str = concatcp!(CSI, "15",  SGR_END);
pub const ALTERNATE_FONT_6:                    &str = concatcp!(CSI, "16",  SGR_END);
pub const ALTERNATE_FONT_7:                    &str = concatcp!(CSI, "17",  SGR_END);
pub const ALTERNATE_FONT_8:                    &str = concatcp!(CSI, "18",  SGR_END);
pub const ALTERNATE_FONT_9:                    &str = concatcp!(CSI, "19",  SGR_END);
pub const FRAKTUR:                             &str = concatcp!(CSI, "20",  SGR_END);
/// Double underline in ECMA-48. The Linux console before 4.17 (and a few others)
/// treat it as "bold off" instead.
pub const DOUBLE_UNDERLINED:                   &str = concatcp!(CSI, "21",  SGR_END);
/// Neither bold nor faint.
pub const NORMAL_INTENSITY:                    &str = concatcp!(CSI, "22",  SGR_END);
pub const NO_ITALIC_NOR_BLACKLETTER:           &str = concatcp!(CSI, "23",  SGR_END);
/// Neither singly nor doubly underlined.
pub const NOT_UNDERLINED:                      &str = concatcp!(CSI, "24",  SGR_END);
pub const NOT_BLINKING:                        &str = concatcp!(CSI, "25",  SGR_END);
/// ITU T.61 and T.416, unused by terminals in practice.
pub const PROPORTIONAL_SPACING:                &str = concatcp!(CSI, "26",  SGR_END);
pub const NOT_REVERSED:                        &str = concatcp!(CSI, "27",  SGR_END);
/// Not concealed.
pub const REVEAL:                              &str = concatcp!(CSI, "28",  SGR_END);
pub const NOT_CROSSED_OUT:                     &str = concatcp!(CSI, "29",  SGR_END);

pub const STD_COLOR_BLACK_FOREGROUND:          &str = concatcp!(CSI, "30",  SGR_END);
pub const STD_COLOR_RED_FOREGROUND:            &str = concatcp!(CSI, "31",  SGR_END);
pub const STD_COLOR_GREEN_FOREGROUND:          &str = concatcp!(CSI, "32",  SGR_END);
pub const STD_COLOR_YELLOW_FOREGROUND:         &str = concatcp!(CSI, "33",  SGR_END);
pub const STD_COLOR_BLUE_FOREGROUND:           &str = concatcp!(CSI, "34",  SGR_END);
pub const STD_COLOR_MAGENTA_FOREGROUND:        &str = concatcp!(CSI, "35",  SGR_END);
pub const STD_COLOR_CYAN_FOREGROUND:           &str = concatcp!(CSI, "36",  SGR_END);
pub const STD_COLOR_WHITE_FOREGROUND:          &str = concatcp!(CSI, "37",  SGR_END);
/// Implementation defined.
pub const DEFAULT_COLOR_FOREGROUND:            &str = concatcp!(CSI, "39",  SGR_END);

pub const STD_COLOR_BLACK_BACKGROUND:          &str = concatcp!(CSI, "40",  SGR_END);
pub const STD_COLOR_RED_BACKGROUND:            &str = concatcp!(CSI, "41",  SGR_END);
pub const STD_COLOR_GREEN_BACKGROUND:          &str = concatcp!(CSI, "42",  SGR_END);
pub const STD_COLOR_YELLOW_BACKGROUND:         &str = concatcp!(CSI, "43",  SGR_END);
pub const STD_COLOR_BLUE_BACKGROUND:           &str = concatcp!(CSI, "44",  SGR_END);
pub const STD_COLOR_MAGENTA_BACKGROUND:        &str = concatcp!(CSI, "45",  SGR_END);
pub const STD_COLOR_CYAN_BACKGROUND:           &str = concatcp!(CSI, "46",  SGR_END);
pub const STD_COLOR_WHITE_BACKGROUND:          &str = concatcp!(CSI, "47",  SGR_END);
/// Implementation defined.
pub const DEFAULT_COLOR_BACKGROUND:            &str = concatcp!(CSI, "49",  SGR_END);

pub const DISABLE_PROPORTIONAL_SPACING:        &str = concatcp!(CSI, "50",  SGR_END);
/// mintty implements this as an emoji variation selector.
pub const FRAMED:                              &str = concatcp!(CSI, "51",  SGR_END);
/// mintty implements this as an emoji variation selector.
pub const ENCIRCLED:                           &str = concatcp!(CSI, "52",  SGR_END);
/// Not supported in Terminal.app.
pub const OVERLINED:                           &str = concatcp!(CSI, "53",  SGR_END);
pub const NO_FRAMED_NOR_ENCIRCLED:             &str = concatcp!(CSI, "54",  SGR_END);
pub const NOT_OVERLINED:                       &str = concatcp!(CSI, "55",  SGR_END);
/// Not in ECMA-48; implemented by Kitty, VTE, mintty and iTerm2.
pub const DEFAULT_UNDERLINE_COLOR:             &str = concatcp!(CSI, "59",  SGR_END);

// Ideogram attributes (60-65) are rarely supported.
pub const IDEOGRAM_UNDERLINE_OR_RIGHT_LINE:    &str = concatcp!(CSI, "60",  SGR_END);
pub const IDEOGRAM_DOUBLE_UNDERLINE_OR_RIGHT:  &str = concatcp!(CSI, "61",  SGR_END);
pub const IDEOGRAM_OVERLINE_OR_LEFT_LINE:      &str = concatcp!(CSI, "62",  SGR_END);
pub const IDEOGRAM_DOUBLE_OVERLINE_LEFT:       &str = concatcp!(CSI, "63",  SGR_END);
pub const IDEOGRAM_STRESS_MARKING:             &str = concatcp!(CSI, "64",  SGR_END);
pub const IDEOGRAM_RESET:                      &str = concatcp!(CSI, "65",  SGR_END);

// mintty only.
pub const SUPERSCRIPT:                         &str = concatcp!(CSI, "73",  SGR_END);
pub const SUBSCRIPT:                           &str = concatcp!(CSI, "74",  SGR_END);
pub const NO_SUPERSCRIPT_NOR_SUBSCRIPT:        &str = concatcp!(CSI, "75",  SGR_END);

pub const STD_COLOR_BRIGHT_BLACK_FOREGROUND:   &str = concatcp!(CSI, "90",  SGR_END);
pub const STD_COLOR_BRIGHT_RED_FOREGROUND:     &str = concatcp!(CSI, "91",  SGR_END);
pub const STD_COLOR_BRIGHT_GREEN_FOREGROUND:   &str = concatcp!(CSI, "92",  SGR_END);
pub const STD_COLOR_BRIGHT_YELLOW_FOREGROUND:  &str = concatcp!(CSI, "93",  SGR_END);
pub const STD_COLOR_BRIGHT_BLUE_FOREGROUND:    &str = concatcp!(CSI, "94",  SGR_END);
pub const STD_COLOR_BRIGHT_MAGENTA_FOREGROUND: &str = concatcp!(CSI, "95",  SGR_END);
pub const STD_COLOR_BRIGHT_CYAN_FOREGROUND:    &str = concatcp!(CSI, "96",  SGR_END);
pub const STD_COLOR_BRIGHT_WHITE_FOREGROUND:   &str = concatcp!(CSI, "97",  SGR_END);

pub const STD_COLOR_BRIGHT_BLACK_BACKGROUND:   &str = concatcp!(CSI, "100", SGR_END);
pub const STD_COLOR_BRIGHT_RED_BACKGROUND:     &str = concatcp!(CSI, "101", SGR_END);
pub const STD_COLOR_BRIGHT_GREEN_BACKGROUND:   &str = concatcp!(CSI, "102", SGR_END);
pub const STD_COLOR_BRIGHT_YELLOW_BACKGROUND:  &str = concatcp!(CSI, "103", SGR_END);
pub const STD_COLOR_BRIGHT_BLUE_BACKGROUND:    &str = concatcp!(CSI, "104", SGR_END);
pub const STD_COLOR_BRIGHT_MAGENTA_BACKGROUND: &str = concatcp!(CSI, "105", SGR_END);
pub const STD_COLOR_BRIGHT_CYAN_BACKGROUND:    &str = concatcp!(CSI, "106", SGR_END);
pub const STD_COLOR_BRIGHT_WHITE_BACKGROUND:   &str = concatcp!(CSI, "107", SGR_END);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case(DEFAULT,                            "\x1b[0m")]
    #[test_case(BOLD,                               "\x1b[1m")]
    #[test_case(CROSSED,                            "\x1b[9m")]
    #[test_case(NOT_UNDERLINED,                     "\x1b[24m")]
    #[test_case(DEFAULT_UNDERLINE_COLOR,            "\x1b[59m")]
    #[test_case(NO_SUPERSCRIPT_NOR_SUBSCRIPT,       "\x1b[75m")]
    #[test_case(STD_COLOR_BRIGHT_WHITE_BACKGROUND,  "\x1b[107m")]
    fn literal_value(constant: &str, expected: &str) {
        assert_eq!(constant, expected);
    }
}
