// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Prints the palette preview and a few styled lines.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example preview
//! ```

use r3bl_sgr_palette::{AnsiValue, BOLD, CROSSED, DEFAULT, ITALIC, OVERLINED,
                       PreviewConfig, UNDERLINED, background, build_preview, demo,
                       rgb_background, rgb_foreground, rgb_underline};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    // Log to stderr so stdout only has the preview.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print!("{}", demo());

    // Styled text.
    {
        println!(
            "{BOLD}{ITALIC}{UNDERLINED}{}{}Bold, italic, underlined w/ RGB colors.{DEFAULT}",
            rgb_foreground(50, 50, 50)?,
            rgb_background(100, 200, 1)?,
        );
        println!(
            "{CROSSED}{OVERLINED}{}{}Strikethrough and overline.{DEFAULT}",
            AnsiValue::RADICAL_RED.foreground(),
            background(AnsiValue::LASER_LEMON),
        );
        println!(
            "{UNDERLINED}{}Colored underline.{DEFAULT}",
            rgb_underline(0, 175, 255)?,
        );
    }

    // A smaller preview.
    print!(
        "{}",
        build_preview(&PreviewConfig {
            swatches_per_row: 16,
            gradient_step: 16,
        })
    );

    // Out of range channels produce a diagnostic instead of an escape sequence.
    if let Err(error) = rgb_foreground(300, 0, 0) {
        eprintln!("{:?}", miette::Report::new(error));
    }

    Ok(())
}
