// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Build a string that shows off the palette when printed to a terminal.
//!
//! Nothing is written to stdout here. The caller (eg: the `preview` example) decides
//! what to do with the returned [`String`].

use std::fmt::Write;

use crate::{DEFAULT, SgrCode};

/// Layout knobs for [`build_preview()`]. A zero value for either field is treated as 1.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PreviewConfig {
    /// How many palette swatches go on each line.
    pub swatches_per_row: usize,
    /// Distance between adjacent red (row) and green (column) values in the RGB
    /// gradient.
    pub gradient_step: u16,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            swatches_per_row: 8,
            gradient_step: 3,
        }
    }
}

/// Amount that blue drops per gradient column, before saturating at 0.
const GRADIENT_BLUE_FALLOFF: usize = 4;

/// Number of values a color channel can hold.
const CHANNEL_SIZE: usize = 256;

/// Preview with the [`PreviewConfig::default()`] layout.
#[must_use]
pub fn demo() -> String { build_preview(&PreviewConfig::default()) }

/// Returns two sections:
/// 1. `Predefined colors:` every palette ordinal as a background swatch labeled with its
///    zero padded index.
/// 2. `Color palette:` a truecolor background gradient, red increasing by row, green
///    increasing by column, blue decreasing by column.
///
/// Every swatch row ends with [`DEFAULT`] so colors don't bleed into the next line.
#[must_use]
pub fn build_preview(config: &PreviewConfig) -> String {
    let swatches_per_row = config.swatches_per_row.max(1);
    let step = usize::from(config.gradient_step.max(1));

    let mut acc = String::new();
    push_palette_swatches(&mut acc, swatches_per_row);
    push_rgb_gradient(&mut acc, step);

    tracing::debug!(
        message = "Built color preview",
        config = ?config,
        len_bytes = acc.len()
    );

    acc
}

fn push_palette_swatches(acc: &mut String, swatches_per_row: usize) {
    acc.push_str("\nPredefined colors:");
    for index in 0..=u8::MAX {
        if usize::from(index).is_multiple_of(swatches_per_row) {
            acc.push_str(DEFAULT);
            acc.push('\n');
        }
        acc.push_str(&SgrCode::BackgroundAnsi256(index).to_small_str());
        // Writing to a String can't fail.
        write!(acc, " {index:03}").ok();
    }
    acc.push_str(DEFAULT);
    acc.push('\n');
}

fn push_rgb_gradient(acc: &mut String, step: usize) {
    acc.push_str("\nColor palette:\n");
    let count = CHANNEL_SIZE / step;
    for row in 0..count {
        for col in 0..count {
            let red = channel(row * step);
            let green = channel(col * step);
            let blue = channel(
                (CHANNEL_SIZE - 1).saturating_sub(col * GRADIENT_BLUE_FALLOFF),
            );
            acc.push_str(&SgrCode::BackgroundRGB(red, green, blue).to_small_str());
            acc.push_str("  ");
        }
        acc.push_str(DEFAULT);
        acc.push('\n');
    }
    acc.push_str(DEFAULT);
    acc.push('\n');
}

/// Callers only pass values below [`CHANNEL_SIZE`], so this never saturates.
fn channel(value: usize) -> u8 {
    debug_assert!(
        value < CHANNEL_SIZE,
        "gradient channel {value} is out of range"
    );
    u8::try_from(value).unwrap_or(u8::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn count_distinct_palette_backgrounds(preview: &str) -> usize {
        (0..=u8::MAX)
            .filter(|index| preview.contains(&format!("\x1b[48;5;{index}m ")))
            .count()
    }

    #[test]
    fn default_config() {
        assert_eq!(
            PreviewConfig::default(),
            PreviewConfig {
                swatches_per_row: 8,
                gradient_step: 3
            }
        );
    }

    #[test]
    fn demo_uses_default_config() {
        assert_eq!(demo(), build_preview(&PreviewConfig::default()));
    }

    #[test]
    fn demo_has_headings_and_resets() {
        let preview = demo();
        assert!(!preview.is_empty());
        assert!(preview.starts_with("\nPredefined colors:"));
        assert!(preview.contains("\nColor palette:\n"));
        assert!(preview.contains(DEFAULT));
        assert!(preview.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn demo_shows_every_palette_entry() {
        let preview = demo();
        assert_eq!(count_distinct_palette_backgrounds(&preview), 256);
        assert!(preview.contains("\x1b[48;5;0m 000"));
        assert!(preview.contains("\x1b[48;5;7m 007"));
        assert!(preview.contains("\x1b[48;5;255m 255"));
    }

    #[test]
    fn swatches_wrap_every_row() {
        let preview = demo();
        let swatch_section = preview
            .split("\nColor palette:\n")
            .next()
            .unwrap_or_default();
        // One reset + newline before every 8th entry, plus the trailing one.
        assert_eq!(swatch_section.matches("\x1b[0m\n").count(), 256 / 8 + 1);
        assert!(swatch_section.contains("\x1b[0m\n\x1b[48;5;8m 008"));
    }

    #[test]
    fn gradient_blue_channel_saturates_at_zero() {
        let preview = demo();
        // First cell.
        assert!(preview.contains("\x1b[48;2;0;0;255m  "));
        // Last cell, 255 - 84 * 4 is clamped.
        assert!(preview.contains("\x1b[48;2;252;252;0m"));
    }

    #[test]
    fn gradient_has_expected_dimensions() {
        let preview = demo();
        let gradient = preview.split("\nColor palette:\n").nth(1).unwrap();
        // 85 rows plus the trailing reset line.
        assert_eq!(gradient.lines().count(), 86);
        assert_eq!(gradient.matches("\x1b[48;2;").count(), 85 * 85);
    }

    #[test]
    fn custom_config() {
        let preview = build_preview(&PreviewConfig {
            swatches_per_row: 16,
            gradient_step: 64,
        });
        let gradient = preview.split("\nColor palette:\n").nth(1).unwrap();
        assert_eq!(gradient.matches("\x1b[48;2;").count(), 4 * 4);
        assert!(gradient.contains("\x1b[48;2;192;192;243m"));
        assert!(preview.contains("\x1b[0m\n\x1b[48;5;16m 016"));
        assert!(!preview.contains("\x1b[0m\n\x1b[48;5;8m 008"));
    }

    #[test]
    fn zero_config_is_treated_as_one() {
        let zero = build_preview(&PreviewConfig {
            swatches_per_row: 0,
            gradient_step: 0,
        });
        let one = build_preview(&PreviewConfig {
            swatches_per_row: 1,
            gradient_step: 1,
        });
        assert_eq!(zero, one);
        assert!(zero.contains("\x1b[48;2;255;255;0m"));
    }

    #[test]
    fn channel_accepts_full_range() {
        assert_eq!(channel(0), 0);
        assert_eq!(channel(CHANNEL_SIZE - 1), u8::MAX);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "gradient channel 256 is out of range")]
    fn channel_rejects_out_of_range_in_debug() { channel(CHANNEL_SIZE); }

    #[test]
    fn extreme_config_does_not_panic() {
        let preview = build_preview(&PreviewConfig {
            swatches_per_row: usize::MAX,
            gradient_step: u16::MAX,
        });
        assert!(preview.starts_with("\nPredefined colors:\x1b[0m\n"));
        let gradient = preview.split("\nColor palette:\n").nth(1).unwrap();
        // 256 / 65535 is 0, so the gradient is only the trailing reset.
        assert_eq!(gradient, "\x1b[0m\n");
    }
}
