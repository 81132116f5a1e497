//! Platform-agnostic core of the ParkSense proximity monitor.
//!
//! Everything that decides or draws lives here, behind two seams:
//!
//! - [`sampler`]: ultrasonic echo measurement over `embedded-hal` pins and
//!   a [`sampler::MicrosClock`]
//! - [`screen`]: status rendering over any `embedded-graphics` `DrawTarget`
//!
//! plus the supporting constant modules ([`colors`], [`config`],
//! [`thresholds`], [`styles`]) and the classifier ([`status`]). The STM32
//! firmware and the desktop simulator both run this exact pipeline:
//!
//! ```text
//! measure() -> normalize_distance() -> StatusLevel::from_distance_cm() -> refresh()
//! ```
//!
//! # Testing
//!
//! The crate is `no_std` on targets but tests build with `std` (via
//! `cfg_attr`), so unit tests run on the host with the standard harness:
//!
//! ```bash
//! cargo test -p parksense-common
//! ```

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod sampler;
pub mod screen;
pub mod status;
pub mod styles;
pub mod thresholds;

// Re-export commonly used items
pub use colors::*;
pub use config::*;
pub use sampler::{EchoReading, MicrosClock, RangeSampler};
pub use screen::StatusScreen;
pub use status::{StatusLevel, normalize_distance};
pub use thresholds::*;
