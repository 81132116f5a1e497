//! Distance classification thresholds.
//!
//! All thresholds are compile-time constants with validation assertions.
//! This keeps the classifier, the display refresher, and the firmware loop
//! agreeing on a single source of truth for the bucket boundaries.
//!
//! # Compile-Time Validation
//!
//! The threshold group includes `const` assertions that verify ordering at
//! compile time. If the boundaries are configured incorrectly (e.g.,
//! `CAUTION_MAX_CM < WARNING_MAX_CM`), compilation fails with a clear error.
//!
//! # Bucket Layout
//!
//! Boundaries are inclusive and partition the whole distance domain:
//!
//! | Bucket  | Range (cm)  | Background |
//! |---------|-------------|------------|
//! | Warning | 0..=5       | Red        |
//! | Caution | 6..=10      | Orange     |
//! | Normal  | 11..=999    | Blue       |

// =============================================================================
// Bucket Boundaries
// =============================================================================

/// Upper bound (inclusive) of the Warning bucket. At or below this distance
/// the obstacle is close enough to demand immediate attention.
pub const WARNING_MAX_CM: u32 = 5;

/// Upper bound (inclusive) of the Caution bucket (6-10 cm = ORANGE).
pub const CAUTION_MAX_CM: u32 = 10;

/// Largest distance the pipeline reports. Raw readings above this clamp to
/// it, and a missing echo substitutes it, so the cap always classifies as
/// Normal.
pub const DISTANCE_CAP_CM: u32 = 999;

// Compile-time validation: buckets must be in ascending order and the cap
// must land in the Normal bucket.
const _: () = assert!(WARNING_MAX_CM < CAUTION_MAX_CM);
const _: () = assert!(CAUTION_MAX_CM < DISTANCE_CAP_CM);

// =============================================================================
// Unit Tests
// =============================================================================
