//! Pre-computed text styles, built as `const` so the refresh path never
//! constructs style objects.

use embedded_graphics::mono_font::ascii::FONT_8X13;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_24_POINT;

use crate::colors::WHITE;

/// Status label font. 8 px wide to match the layout's text cell; the 13 px
/// glyph sits inside the 16 px band with a little headroom.
pub const STATUS_FONT: &MonoFont = &FONT_8X13;

/// White status label on the bucket background.
pub const STATUS_TEXT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(STATUS_FONT, WHITE);

/// Large font for the distance readout.
pub const VALUE_FONT: &MonoFont = &PROFONT_24_POINT;

/// White distance readout on the bucket background.
pub const VALUE_STYLE_WHITE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(VALUE_FONT, WHITE);

/// Horizontally centered text anchored at its top edge. Used for the
/// readout so the erase band and the glyphs share the same top line.
pub const CENTERED_TOP: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();
