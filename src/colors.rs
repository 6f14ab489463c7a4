//! Color constants for the watch face.
//!
//! Rgb565 is the native format of the target panel: 5 bits red, 6 bits
//! green, 5 bits blue. Built-in `RgbColor` trait constants are used where
//! they exist; custom colors are constructed directly.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Face background. Purple.
/// RGB565: (21, 0, 21) ≈ #AA00AA.
pub const BACKGROUND: Rgb565 = Rgb565::new(21, 0, 21);

/// Pure white. Time and date text, battery bar fill, Bluetooth rune.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Light gray for the battery bar outline. Visible on the purple
/// background without competing with the fill.
/// RGB565: (24, 48, 24) ≈ 75% brightness.
pub const GRAY: Rgb565 = Rgb565::new(24, 48, 24);
