//! Color constants for the status screen.
//!
//! The display is RGB565 (5 bits red, 6 bits green, 5 bits blue), native to
//! the ILI9341 panel and to the simulator, so no conversion happens on the
//! write path. Standard colors come from the `RgbColor` trait constants;
//! only orange needs a hand-picked value.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Pure black (0, 0, 0). Boot background before the first measurement.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31). Status text and readout on every background.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0). Warning background, obstacle at 5 cm or closer.
pub const RED: Rgb565 = Rgb565::RED;

/// Pure blue (0, 0, 31). Normal background, obstacle at 11 cm or farther.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Orange caution background. RGB565 (31, 32, 0) - half-green red, darker
/// than yellow.
pub const ORANGE: Rgb565 = Rgb565::new(31, 32, 0);
