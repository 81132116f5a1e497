//! Display geometry and loop timing constants.
//!
//! Layout values like the screen center are computed at compile time as
//! `const`, so the refresh path never does per-cycle arithmetic for fixed
//! positions.

use embedded_graphics::prelude::Point;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ILI9341 in portrait orientation: 240x320).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 320;

/// Width of one status text cell in pixels.
pub const GLYPH_WIDTH: u32 = 8;

/// Height of one status text cell in pixels. Taller than the 8x13 status
/// font so the band keeps a little vertical padding around the glyphs.
pub const GLYPH_HEIGHT: u32 = 16;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Microseconds between measurement cycles. The HC-SR04 datasheet asks for
/// at least 60 ms between triggers so a late echo from one cycle cannot
/// bleed into the next.
pub const MEASURE_PERIOD_US: u32 = 60_000;

// =============================================================================
// Pre-computed Layout Constants
// =============================================================================

/// Screen center X coordinate, pre-computed as `i32` for drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate, pre-computed as `i32` for drawing code.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Top-left origin of a run of `text_len` status cells centered on screen.
///
/// Horizontal: `(SCREEN_WIDTH - len * GLYPH_WIDTH) / 2`, vertical:
/// `(SCREEN_HEIGHT - GLYPH_HEIGHT) / 2`. Integer division, so an odd pixel
/// remainder lands on the right/bottom edge.
pub const fn centered_origin(text_len: usize) -> Point {
    let x = (SCREEN_WIDTH as i32 - text_len as i32 * GLYPH_WIDTH as i32) / 2;
    let y = (SCREEN_HEIGHT as i32 - GLYPH_HEIGHT as i32) / 2;
    Point::new(x, y)
}

// =============================================================================
// Unit Tests
// =============================================================================
