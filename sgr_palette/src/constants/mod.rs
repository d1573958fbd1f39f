// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI/SGR escape sequence constants.
//!
//! ## Usage
//!
//! ```rust
//! use r3bl_sgr_palette::{BOLD, CSI, DEFAULT, SGR_END};
//!
//! assert_eq!(BOLD, "\x1b[1m");
//! assert_eq!(DEFAULT, format!("{CSI}0{SGR_END}"));
//! ```

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Private modules (hide internal structure).
mod csi;
mod sgr;

// Public re-exports (flat API) for convenience.
pub use csi::*;
pub use sgr::*;
