//! Status screen refresher.
//!
//! Tracks the background color that is currently on the panel and only
//! issues a full-screen clear when the bucket color changes - a clear is the
//! slowest operation on the write path and repainting an unchanged
//! background just flickers. The centered text is redrawn every cycle over
//! a freshly erased fixed-width band, so a shorter label never shows stale
//! glyphs from a longer one.
//!
//! # Update Strategy
//!
//! | Element          | Update Frequency      | Strategy            |
//! |------------------|-----------------------|---------------------|
//! | Background       | On bucket change      | Conditional clear   |
//! | Status label     | Every cycle           | Band erase + redraw |
//! | Distance readout | Every cycle           | Band erase + redraw |

use core::fmt::Write;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use heapless::String;

use crate::config::{CENTER_X, GLYPH_HEIGHT, GLYPH_WIDTH, SCREEN_WIDTH, centered_origin};
use crate::status::StatusLevel;
use crate::styles::{CENTERED_TOP, STATUS_TEXT_STYLE, VALUE_FONT, VALUE_STYLE_WHITE};

// =============================================================================
// Band Layout Constants
// =============================================================================

/// Width of the erased status band in text cells. Covers the longest label
/// ("Warning", 7 cells) with margin on both sides.
const STATUS_BAND_GLYPHS: usize = 10;

/// Width of the erased readout band in readout-font cells ("999 cm" is 6).
const READOUT_GLYPHS: u32 = 8;

/// Gap in pixels between the status band and the distance readout.
const READOUT_GAP: u32 = 12;

// The status band must fit on the screen.
const _: () = assert!(STATUS_BAND_GLYPHS as u32 * GLYPH_WIDTH <= SCREEN_WIDTH);

// =============================================================================
// Status Screen
// =============================================================================

/// Owns the drawn-background state across refresh cycles.
pub struct StatusScreen {
    /// Background color currently on the panel. `None` until the first
    /// refresh, which therefore always clears.
    prev_bg: Option<Rgb565>,
}

impl StatusScreen {
    pub const fn new() -> Self { Self { prev_bg: None } }

    /// Redraw the screen for `level`, showing `distance_cm` below the label.
    ///
    /// Clears the full screen only when the level's background differs from
    /// what is already drawn; erases and redraws both text bands
    /// unconditionally. Draw errors are ignored - the next cycle repaints.
    pub fn refresh<D>(
        &mut self,
        display: &mut D,
        level: StatusLevel,
        distance_cm: u32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let (bg, _) = level.colors();

        if self.prev_bg != Some(bg) {
            display.clear(bg).ok();
            self.prev_bg = Some(bg);
        }

        // Erase the status band, then draw the label centered inside it.
        let band_origin = centered_origin(STATUS_BAND_GLYPHS);
        Rectangle::new(
            band_origin,
            Size::new(STATUS_BAND_GLYPHS as u32 * GLYPH_WIDTH, GLYPH_HEIGHT),
        )
        .into_styled(PrimitiveStyle::with_fill(bg))
        .draw(display)
        .ok();

        let label = level.label();
        Text::with_baseline(label, centered_origin(label.len()), STATUS_TEXT_STYLE, Baseline::Top)
            .draw(display)
            .ok();

        self.draw_readout(display, bg, distance_cm, band_origin.y);
    }

    /// Distance readout below the status band, right-padded to three digits
    /// so successive values line up.
    fn draw_readout<D>(
        &mut self,
        display: &mut D,
        bg: Rgb565,
        distance_cm: u32,
        status_band_y: i32,
    ) where
        D: DrawTarget<Color = Rgb565>,
    {
        let cell = VALUE_FONT.character_size;
        let band_w = READOUT_GLYPHS * cell.width;
        let band_x = ((SCREEN_WIDTH - band_w) / 2) as i32;
        let band_y = status_band_y + (GLYPH_HEIGHT + READOUT_GAP) as i32;

        Rectangle::new(Point::new(band_x, band_y), Size::new(band_w, cell.height))
            .into_styled(PrimitiveStyle::with_fill(bg))
            .draw(display)
            .ok();

        let mut value: String<16> = String::new();
        let _ = write!(value, "{distance_cm:>3} cm");
        Text::with_text_style(&value, Point::new(CENTER_X, band_y), VALUE_STYLE_WHITE, CENTERED_TOP)
            .draw(display)
            .ok();
    }
}

impl Default for StatusScreen {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use core::convert::Infallible;

    use super::*;
    use crate::colors::{BLUE, ORANGE, RED};

    /// Display double that counts operations instead of storing pixels.
    struct CountingDisplay {
        clears: usize,
        fills: usize,
        pixels: usize,
        last_clear: Option<Rgb565>,
    }

    impl CountingDisplay {
        fn new() -> Self {
            Self {
                clears: 0,
                fills: 0,
                pixels: 0,
                last_clear: None,
            }
        }
    }

    impl OriginDimensions for CountingDisplay {
        fn size(&self) -> Size { Size::new(crate::config::SCREEN_WIDTH, crate::config::SCREEN_HEIGHT) }
    }

    impl DrawTarget for CountingDisplay {
        type Color = Rgb565;
        type Error = Infallible;

        fn draw_iter<I>(
            &mut self,
            pixels: I,
        ) -> Result<(), Self::Error>
        where
            I: IntoIterator<Item = Pixel<Self::Color>>,
        {
            self.pixels += pixels.into_iter().count();
            Ok(())
        }

        fn fill_solid(
            &mut self,
            _area: &Rectangle,
            _color: Self::Color,
        ) -> Result<(), Self::Error> {
            self.fills += 1;
            Ok(())
        }

        fn clear(
            &mut self,
            color: Self::Color,
        ) -> Result<(), Self::Error> {
            self.clears += 1;
            self.last_clear = Some(color);
            Ok(())
        }
    }

    // -------------------------------------------------------------------------
    // Conditional Clear Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_refresh_always_clears() {
        let mut display = CountingDisplay::new();
        let mut screen = StatusScreen::new();

        screen.refresh(&mut display, StatusLevel::Normal, 120);

        assert_eq!(display.clears, 1, "first refresh must clear the screen");
        assert_eq!(display.last_clear, Some(BLUE));
    }

    #[test]
    fn test_same_bucket_clears_exactly_once() {
        let mut display = CountingDisplay::new();
        let mut screen = StatusScreen::new();

        screen.refresh(&mut display, StatusLevel::Caution, 8);
        screen.refresh(&mut display, StatusLevel::Caution, 9);

        assert_eq!(
            display.clears, 1,
            "two refreshes in the same bucket must clear once, not twice"
        );
        assert_eq!(display.last_clear, Some(ORANGE));
    }

    #[test]
    fn test_bucket_change_clears_again() {
        let mut display = CountingDisplay::new();
        let mut screen = StatusScreen::new();

        screen.refresh(&mut display, StatusLevel::Normal, 40);
        screen.refresh(&mut display, StatusLevel::Warning, 3);

        assert_eq!(display.clears, 2);
        assert_eq!(display.last_clear, Some(RED));
    }

    // -------------------------------------------------------------------------
    // Band Redraw Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_bands_erased_every_refresh() {
        let mut display = CountingDisplay::new();
        let mut screen = StatusScreen::new();

        screen.refresh(&mut display, StatusLevel::Normal, 40);
        let fills_after_first = display.fills;
        assert!(
            fills_after_first >= 2,
            "both text bands must be erased on a refresh"
        );

        // Same bucket again: no clear, but the bands are erased regardless.
        screen.refresh(&mut display, StatusLevel::Normal, 41);
        assert!(display.fills >= fills_after_first + 2);
        assert_eq!(display.clears, 1);
    }

    #[test]
    fn test_text_drawn_every_refresh() {
        let mut display = CountingDisplay::new();
        let mut screen = StatusScreen::new();

        screen.refresh(&mut display, StatusLevel::Warning, 2);
        let pixels_after_first = display.pixels;
        assert!(pixels_after_first > 0, "label and readout must draw glyph pixels");

        screen.refresh(&mut display, StatusLevel::Warning, 3);
        assert!(display.pixels > pixels_after_first);
    }
}
