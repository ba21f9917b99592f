//! Cosine phase clock driving the day/night cycle.
//!
//! The clock is advanced once per fixed tick; tick count is the only time source
//! (no wall-clock drift correction). The cosine wave `1 -> -1 -> 1` is normalized
//! to `1 -> 0 -> 1` so `day_weight` is 1 at noon and 0 at midnight.

use std::f64::consts::TAU;

/// Phase angle plus the two normalized weights derived from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseClock {
    angle: f64,        // radians, wraps at TAU
    day_weight: f64,   // 1 = full day, 0 = full night
    night_weight: f64, // always 1 - day_weight
}

impl Default for PhaseClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PhaseClock {
    /// Clock at angle 0 (full day).
    pub fn new() -> Self {
        Self {
            angle: 0.0,
            day_weight: 1.0,
            night_weight: 0.0,
        }
    }

    /// Angle added per tick for a full period of `2 * half_period_seconds`.
    pub fn increment(half_period_seconds: f64, calls_per_second: u32) -> f64 {
        1.0 / (calls_per_second as f64 * 2.0 * half_period_seconds) * TAU
    }

    /// Advance one tick. The weights are computed from the angle at the start of
    /// this tick (after the wrap), then the angle moves forward.
    pub fn advance(&mut self, half_period_seconds: f64, calls_per_second: u32) {
        if self.angle >= TAU {
            self.angle = 0.0;
        }
        self.day_weight = normalize_cosine(self.angle.cos());
        self.night_weight = 1.0 - self.day_weight;
        self.angle += Self::increment(half_period_seconds, calls_per_second);
    }

    /// Restart state: angle 0 but weights at full night, so the first frame after a
    /// restart starts the visual ramp from night instead of jumping to bright day.
    pub fn reset(&mut self) {
        self.angle = 0.0;
        self.day_weight = 0.0;
        self.night_weight = 1.0;
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn day_weight(&self) -> f64 {
        self.day_weight
    }

    pub fn night_weight(&self) -> f64 {
        self.night_weight
    }
}

/// Maps `cos` in [-1, 1] to [0, 1].
#[inline]
pub fn normalize_cosine(cos: f64) -> f64 {
    (1.0 + cos) * 0.5
}

/// Tick-scoped snapshot shared by the renderer and the hit-tester so both see the
/// same scale within one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameScalars {
    pub day_weight: f64,
    pub night_weight: f64,
    /// Click / hover radius around each star: `unit_size * night_weight`.
    pub hit_radius: f64,
}

impl FrameScalars {
    pub fn from_clock(clock: &PhaseClock, unit_size: f64) -> Self {
        Self {
            day_weight: clock.day_weight(),
            night_weight: clock.night_weight(),
            hit_radius: unit_size * clock.night_weight(),
        }
    }
}
