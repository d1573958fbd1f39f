// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Escape sequence generation.
//!
//! - [`SgrCode`] is where every sequence actually gets written.
//! - The free functions ([`foreground()`], [`rgb_background()`], ...) are thin
//!   wrappers over the methods on [`AnsiValue`](crate::AnsiValue) and
//!   [`RgbValue`](crate::RgbValue), for callers that prefer that calling style.

// Attach.
mod color_fns;
mod sgr_code;

// Re-export.
pub use color_fns::*;
pub use sgr_code::*;
