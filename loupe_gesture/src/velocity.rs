// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Release-velocity estimation from recent pointer samples.
//!
//! [`VelocityTracker`] keeps a short ring buffer of timestamped positions and
//! estimates velocity with an impulse model: each segment contributes the
//! kinetic energy needed to change from the previous estimate to its own
//! velocity. Samples older than [`HORIZON_MS`] relative to the newest one, or
//! separated by a pause longer than [`ASSUME_STOPPED_MS`], are ignored.
//!
//! ```
//! use kurbo::Point;
//! use loupe_gesture::velocity::VelocityTracker;
//!
//! let mut tracker = VelocityTracker::new();
//! for i in 0..5_u32 {
//!     tracker.add_movement(u64::from(i) * 10, Point::new(f64::from(i) * 20.0, 0.0));
//! }
//! let v = tracker.velocity(8_000.0);
//! assert!(v.x > 1_000.0);
//! assert_eq!(v.y, 0.0);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Number of samples retained.
const HISTORY_SIZE: usize = 20;

/// Only samples this recent relative to the newest are used.
pub const HORIZON_MS: u64 = 100;

/// A gap between samples longer than this means the pointer had stopped.
pub const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug, Default)]
struct Sample {
    time_ms: u64,
    position: Point,
}

/// Estimates pointer velocity in units per second.
#[derive(Clone, Debug)]
pub struct VelocityTracker {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records the pointer at `position` at time `time_ms`.
    pub fn add_movement(&mut self, time_ms: u64, position: Point) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Discards all samples.
    pub fn clear(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }

    /// Returns `true` if no samples have been recorded since the last clear.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples[self.index].is_none()
    }

    /// Estimated velocity per second, each axis clamped to `max_velocity`.
    ///
    /// Returns zero with fewer than two usable samples.
    #[must_use]
    pub fn velocity(&self, max_velocity: f64) -> Vec2 {
        let Some(newest) = self.samples[self.index] else {
            return Vec2::ZERO;
        };

        let mut xs = [0.0_f64; HISTORY_SIZE];
        let mut ys = [0.0_f64; HISTORY_SIZE];
        let mut times = [0.0_f64; HISTORY_SIZE];
        let mut count = 0;

        let mut current = self.index;
        let mut previous = newest;
        while let Some(sample) = self.samples[current] {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = previous.time_ms.abs_diff(sample.time_ms);
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }
            previous = sample;

            xs[count] = sample.position.x;
            ys[count] = sample.position.y;
            times[count] = -(age as f64);
            count += 1;
            if count >= HISTORY_SIZE {
                break;
            }
            current = if current == 0 {
                HISTORY_SIZE - 1
            } else {
                current - 1
            };
        }

        if count < 2 {
            return Vec2::ZERO;
        }

        let clamp = |v: f64| {
            if !v.is_finite() || max_velocity <= 0.0 {
                0.0
            } else {
                v.clamp(-max_velocity, max_velocity)
            }
        };
        Vec2::new(
            clamp(impulse_velocity(&xs[..count], &times[..count]) * 1000.0),
            clamp(impulse_velocity(&ys[..count], &times[..count]) * 1000.0),
        )
    }
}

/// Impulse-model velocity per millisecond.
///
/// `values` and `times` are ordered newest first; `times` are non-positive
/// ages relative to the newest sample.
fn impulse_velocity(values: &[f64], times: &[f64]) -> f64 {
    let count = values.len();
    if count < 2 {
        return 0.0;
    }

    let mut work = 0.0;
    let start = count - 1;
    let mut next_time = times[start];
    for i in (1..=start).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }
        let v_curr = (values[i - 1] - values[i]) / (next_time - current_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == start {
            work *= 0.5;
        }
    }
    kinetic_energy_to_velocity(work)
}

/// `E = ½ m v²` with unit mass.
fn kinetic_energy_to_velocity(kinetic_energy: f64) -> f64 {
    let speed = (2.0 * kinetic_energy.abs()).sqrt();
    if kinetic_energy < 0.0 { -speed } else { speed }
}
