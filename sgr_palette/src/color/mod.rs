// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Color value types.
//!
//! This module provides:
//! - [`AnsiValue`]: an ordinal in the 256-color palette, along with the named palette
//!   entries (eg: [`AnsiValue::MAROON`]).
//! - [`RgbValue`]: a 24-bit truecolor value, with validated construction from
//!   arbitrary integers.
//!
//! Both can produce foreground, background and underline escape sequences. The actual
//! formatting is done in one place, [`SgrCode`](crate::SgrCode).

// Attach.
mod ansi_value;
mod named_colors;
mod rgb_value;

// Re-export.
pub use ansi_value::*;
pub use rgb_value::*;
