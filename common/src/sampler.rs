//! Ultrasonic range sampling over HC-SR04-class sensors.
//!
//! The sampler owns two GPIO pins and a microsecond clock, and runs the
//! sensor's fixed protocol: a 10 us trigger pulse, then a busy-poll for the
//! echo pulse whose width encodes the round-trip time of flight. Both the
//! wait for the echo to start and the wait for it to end are bounded by
//! [`ECHO_TIMEOUT_US`]; worst case a call blocks for about 60 ms.
//!
//! Pins come in as `embedded-hal` digital traits and the clock as the
//! repo-local [`MicrosClock`], so the same sampler runs against embassy GPIO
//! on the target, and against scripted fakes in the tests below.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{InputPin, OutputPin};

use crate::config::MEASURE_PERIOD_US;

// =============================================================================
// Protocol Constants
// =============================================================================

/// Low time before the trigger pulse, so the sensor sees a clean rising edge.
pub const TRIGGER_SETTLE_US: u32 = 2;

/// Width of the trigger pulse. Fixed by the sensor protocol; must not vary.
pub const TRIGGER_PULSE_US: u32 = 10;

/// Bound on each echo wait phase. 30 ms of echo corresponds to ~5 m of
/// round trip, past the sensor's rated range.
pub const ECHO_TIMEOUT_US: u32 = 30_000;

/// Microseconds of echo width per centimeter of distance (speed-of-sound
/// round trip, fractional part truncated).
pub const US_PER_CM: u32 = 58;

// Both wait phases timing out must still fit inside one measurement period.
const _: () = assert!(2 * ECHO_TIMEOUT_US <= MEASURE_PERIOD_US);

// =============================================================================
// Clock Seam
// =============================================================================

/// A restartable free-running microsecond counter.
///
/// On the target this is a monotonic clock read; in tests it is a scripted
/// counter. Implementations only need microsecond granularity and enough
/// range to cover [`ECHO_TIMEOUT_US`] without wrapping.
pub trait MicrosClock {
    /// Zero the counter.
    fn restart(&mut self);

    /// Microseconds elapsed since the last [`restart`](Self::restart).
    fn elapsed_us(&mut self) -> u32;
}

impl<C: MicrosClock> MicrosClock for &mut C {
    fn restart(&mut self) { (**self).restart() }

    fn elapsed_us(&mut self) -> u32 { (**self).elapsed_us() }
}

// =============================================================================
// Reading
// =============================================================================

/// Outcome of one measurement cycle.
///
/// The three cases stay separate so the caller decides the far-away policy
/// (see `status::normalize_distance`) instead of reading it out of a
/// sentinel value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EchoReading {
    /// Clean echo: the full pulse was observed.
    Detected { cm: u32 },
    /// The echo was still high at the timeout; `cm` is the width measured
    /// up to that point, kept rather than discarded.
    Truncated { cm: u32 },
    /// The echo never rose within the timeout. Nothing in range, a wiring
    /// fault, or a missed trigger - indistinguishable from here.
    NoEcho,
}

// =============================================================================
// Sampler
// =============================================================================

/// Drives the trigger pin and times the echo pulse against the clock.
pub struct RangeSampler<TRIG, ECHO, CLK, DLY> {
    trigger: TRIG,
    echo: ECHO,
    clock: CLK,
    delay: DLY,
}

impl<TRIG, ECHO, CLK, DLY> RangeSampler<TRIG, ECHO, CLK, DLY>
where
    TRIG: OutputPin,
    ECHO: InputPin,
    CLK: MicrosClock,
    DLY: DelayNs,
{
    pub fn new(
        trigger: TRIG,
        echo: ECHO,
        clock: CLK,
        delay: DLY,
    ) -> Self {
        Self {
            trigger,
            echo,
            clock,
            delay,
        }
    }

    /// Run one measurement cycle. Busy-waits for the whole duration of the
    /// trigger and echo phases (worst case ~2x [`ECHO_TIMEOUT_US`]).
    ///
    /// Pin errors are not surfaced: the trigger writes are fire-and-forget
    /// and a failed echo read counts as low, which at worst turns the cycle
    /// into a `NoEcho`. The next cycle is the retry.
    pub fn measure(&mut self) -> EchoReading {
        // Trigger: 2 us clean low, then exactly 10 us high.
        self.trigger.set_low().ok();
        self.delay.delay_us(TRIGGER_SETTLE_US);
        self.trigger.set_high().ok();
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low().ok();

        // Wait for the echo pulse to start.
        self.clock.restart();
        while !self.echo_high() {
            if self.clock.elapsed_us() > ECHO_TIMEOUT_US {
                return EchoReading::NoEcho;
            }
        }

        // Measure the pulse width.
        self.clock.restart();
        let mut truncated = false;
        while self.echo_high() {
            if self.clock.elapsed_us() > ECHO_TIMEOUT_US {
                truncated = true;
                break;
            }
        }
        let width_us = self.clock.elapsed_us();

        let cm = width_us / US_PER_CM;
        if truncated {
            EchoReading::Truncated { cm }
        } else {
            EchoReading::Detected { cm }
        }
    }

    fn echo_high(&mut self) -> bool { self.echo.is_high().unwrap_or(false) }
}

// =============================================================================
// Unit Tests
// =============================================================================
