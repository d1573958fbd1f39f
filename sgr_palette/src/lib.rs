// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_sgr_palette
//!
//! Generate ANSI SGR (Select Graphic Rendition) escape sequences for terminal output.
//! There is no state, no terminal capability detection and no I/O. Every function
//! returns a [`String`] that the caller decides how (and whether) to display.
//!
//! ## What is in the box
//!
//! - **Style attributes**: [`BOLD`], [`ITALIC`], [`NOT_UNDERLINED`], ... are `&'static
//!   str` constants equal to `ESC[<n>m`. [`SgrAttribute`] is the enum view of the same
//!   table, when you need to iterate over it or look up the SGR parameter.
//! - **256-color palette**: [`AnsiValue`] holds a palette ordinal (`0..=255`). The named
//!   entries ([`AnsiValue::MAROON`], [`AnsiValue::DARK_SEA_GREEN`], ...) follow the
//!   xterm layout: 0-15 standard colors, 16-231 the 6x6x6 color cube, 232-255 the
//!   grayscale ramp.
//! - **Truecolor**: [`RgbValue`] and the [`rgb_foreground()`], [`rgb_background()`],
//!   [`rgb_underline()`] functions, which validate each channel and return
//!   [`ColorError::InvalidColorComponent`] when one is outside `0..=255`.
//! - **Preview**: [`demo()`] and [`build_preview()`] build a string that shows every
//!   palette entry and an RGB gradient when printed to a capable terminal.
//!
//! ## Example
//!
//! ```rust
//! use r3bl_sgr_palette::{AnsiValue, BOLD, DEFAULT, background, foreground, rgb_foreground};
//!
//! // Method and free function forms produce identical output.
//! assert_eq!(AnsiValue::MAROON.foreground(), foreground(AnsiValue::MAROON));
//! assert_eq!(background(AnsiValue::new(255)), "\x1b[48;5;255m");
//!
//! // RGB channels are validated.
//! assert_eq!(rgb_foreground(0, 0, 0).unwrap(), "\x1b[38;2;0;0;0m");
//! assert!(rgb_foreground(256, 0, 0).is_err());
//!
//! let styled = format!("{BOLD}{}hello{DEFAULT}", AnsiValue::DARK_SEA_GREEN.foreground());
//! assert!(styled.starts_with("\x1b[1m\x1b[38;5;108m"));
//! ```
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#24-bit>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

// Enforce strict error handling in production library code only. Tests and examples are
// allowed to use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
mod color;
mod constants;
mod error;
mod generator;
mod preview;
mod sgr_attribute;

// Re-export.
pub use color::*;
pub use constants::*;
pub use error::*;
pub use generator::*;
pub use preview::*;
pub use sgr_attribute::*;
