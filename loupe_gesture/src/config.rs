// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Thresholds used by the gesture recognizers.
///
/// Distances are in viewport units (typically logical pixels), velocities in
/// units per second, and times in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    /// Distance a pointer must travel before a drag starts.
    pub touch_slop: f64,
    /// Minimum release velocity on either axis that produces a fling.
    pub min_fling_velocity: f64,
    /// Release velocities are clamped to this magnitude per axis before the
    /// fling threshold is checked, so a jittery last sample cannot throw the
    /// content arbitrarily far. Use `f64::INFINITY` to disable the clamp.
    pub max_fling_velocity: f64,
    /// Maximum delay between the first up and the second down of a double tap.
    pub double_tap_timeout_ms: u64,
    /// Minimum delay between the first up and the second down of a double tap.
    pub double_tap_min_time_ms: u64,
    /// Maximum distance between the two downs of a double tap.
    pub double_tap_slop: f64,
    /// Hold time after which a still pointer becomes a long press.
    pub long_press_timeout_ms: u64,
    /// Minimum two-pointer span before a pinch is reported.
    pub min_scale_span: f64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            min_fling_velocity: 50.0,
            max_fling_velocity: 8_000.0,
            double_tap_timeout_ms: 300,
            double_tap_min_time_ms: 40,
            double_tap_slop: 100.0,
            long_press_timeout_ms: 500,
            min_scale_span: 0.0,
        }
    }
}

impl GestureConfig {
    /// Returns a copy with the given touch slop.
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Returns a copy with the given minimum fling velocity.
    #[must_use]
    pub fn with_min_fling_velocity(mut self, velocity: f64) -> Self {
        self.min_fling_velocity = velocity;
        self
    }

    /// Returns a copy with the given maximum fling velocity.
    #[must_use]
    pub fn with_max_fling_velocity(mut self, velocity: f64) -> Self {
        self.max_fling_velocity = velocity;
        self
    }

    /// Returns a copy with the given double-tap timeout.
    #[must_use]
    pub fn with_double_tap_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.double_tap_timeout_ms = timeout_ms;
        self
    }

    /// Returns a copy with the given long-press timeout.
    #[must_use]
    pub fn with_long_press_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.long_press_timeout_ms = timeout_ms;
        self
    }
}
