//! Distance classification: bucket levels, colors, labels, normalization.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLUE, ORANGE, RED, WHITE};
use crate::sampler::EchoReading;
use crate::thresholds::{CAUTION_MAX_CM, DISTANCE_CAP_CM, WARNING_MAX_CM};

/// Proximity status bucket. The three variants partition the distance
/// domain with inclusive boundaries and no gaps (see [`crate::thresholds`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    /// Obstacle at `WARNING_MAX_CM` or closer.
    Warning,
    /// Obstacle between the Warning and Caution bounds.
    Caution,
    /// Obstacle beyond `CAUTION_MAX_CM`, or no obstacle at all.
    Normal,
}

impl StatusLevel {
    /// Classify a normalized distance. Pure and total: every `u32` maps to
    /// exactly one bucket.
    pub const fn from_distance_cm(cm: u32) -> Self {
        if cm <= WARNING_MAX_CM {
            Self::Warning
        } else if cm <= CAUTION_MAX_CM {
            Self::Caution
        } else {
            Self::Normal
        }
    }

    /// Background color drawn for this level.
    pub const fn bg_color(self) -> Rgb565 {
        match self {
            Self::Warning => RED,
            Self::Caution => ORANGE,
            Self::Normal => BLUE,
        }
    }

    /// `(background, text)` color pair. Text is white on every background.
    pub const fn colors(self) -> (Rgb565, Rgb565) { (self.bg_color(), WHITE) }

    /// Status text shown centered on screen.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Caution => "Caution",
            Self::Normal => "Normal",
        }
    }
}

/// Normalize a raw echo reading into the `0..=DISTANCE_CAP_CM` range the
/// classifier expects. Must run before [`StatusLevel::from_distance_cm`].
///
/// A missing echo substitutes the cap, so "nothing in range" reads as
/// maximally far away and classifies Normal. Truncated pulses keep their
/// measured width; the cap applies to them like any other reading.
pub const fn normalize_distance(reading: EchoReading) -> u32 {
    match reading {
        EchoReading::NoEcho => DISTANCE_CAP_CM,
        EchoReading::Detected { cm } | EchoReading::Truncated { cm } => {
            if cm > DISTANCE_CAP_CM { DISTANCE_CAP_CM } else { cm }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
