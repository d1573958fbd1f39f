// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Building blocks shared by every generated sequence.

/// Control Sequence Introducer: `ESC [`.
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence.
pub const SGR_END: &str = "m";

/// Separates SGR parameters.
pub const SGR_PARAM_SEP: char = ';';

/// Selects a 256-color palette entry, eg: `38;5;<n>`.
pub const SGR_MODE_PALETTE: &str = "5";

/// Selects a 24-bit color, eg: `38;2;<r>;<g>;<b>`.
pub const SGR_MODE_TRUECOLOR: &str = "2";

/// Extended color prefixes.
pub const SGR_FOREGROUND_PREFIX: &str = "38";
pub const SGR_BACKGROUND_PREFIX: &str = "48";
/// Not in ECMA-48; implemented by Kitty, VTE, mintty and iTerm2.
pub const SGR_UNDERLINE_PREFIX: &str = "58";
