// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ballistic fling solver.
//!
//! [`Scroller`] moves a 2D position under constant deceleration from an
//! initial velocity until it stops or reaches a hard bound. Each axis decays
//! independently. Positions are queried with explicit timestamps, so the
//! solver is fully deterministic.
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use loupe_animation::{Scroller, ScrollerConfig};
//!
//! let mut scroller = Scroller::new(ScrollerConfig::default().with_deceleration(1_000.0));
//! scroller.fling(
//!     0,
//!     Point::ORIGIN,
//!     Vec2::new(1_000.0, 0.0),
//!     Point::ORIGIN,
//!     Point::new(10_000.0, 0.0),
//! );
//! // Stops after v / a = 1 s, having covered v² / 2a = 500 units.
//! assert_eq!(scroller.final_position(), Point::new(500.0, 0.0));
//! assert!(scroller.compute_offset(500));
//! assert_eq!(scroller.current(), Point::new(375.0, 0.0));
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// Standard gravity in m/s².
const GRAVITY_EARTH: f64 = 9.806_65;
const INCHES_PER_METER: f64 = 39.37;
const PIXELS_PER_INCH: f64 = 160.0;
const FRICTION: f64 = 0.015;

/// Fling physics parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollerConfig {
    /// Deceleration in units per second squared.
    pub deceleration: f64,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            deceleration: GRAVITY_EARTH * INCHES_PER_METER * PIXELS_PER_INCH * FRICTION,
        }
    }
}

impl ScrollerConfig {
    /// Returns a copy with the given deceleration.
    #[must_use]
    pub fn with_deceleration(mut self, deceleration: f64) -> Self {
        self.deceleration = deceleration;
        self
    }
}

/// One axis of a fling.
#[derive(Clone, Copy, Debug, Default)]
struct Axis {
    start: f64,
    velocity: f64,
    /// Time at which this axis stops, in seconds after the start.
    duration: f64,
    end: f64,
    current: f64,
}

impl Axis {
    fn new(start: f64, velocity: f64, min: f64, max: f64, deceleration: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let start = start.clamp(min, max);
        if velocity == 0.0 || !velocity.is_finite() || deceleration <= 0.0 {
            return Self {
                start,
                end: start,
                current: start,
                ..Self::default()
            };
        }

        let stop_time = velocity.abs() / deceleration;
        let free_end = start + velocity * stop_time / 2.0;
        let end = free_end.clamp(min, max);
        let duration = if end == free_end {
            stop_time
        } else {
            // Time at which the decaying motion reaches the bound.
            let distance = (end - start).abs();
            let speed = velocity.abs();
            let disc = (speed * speed - 2.0 * deceleration * distance).max(0.0);
            (speed - disc.sqrt()) / deceleration
        };
        Self {
            start,
            velocity,
            duration,
            end,
            current: start,
        }
    }

    fn position_at(&self, t: f64, deceleration: f64) -> f64 {
        if t >= self.duration {
            return self.end;
        }
        let travelled = self.velocity.abs() * t - deceleration * t * t / 2.0;
        if self.velocity < 0.0 {
            self.start - travelled
        } else {
            self.start + travelled
        }
    }
}

/// Two-axis constant-deceleration solver with hard bounds.
#[derive(Clone, Copy, Debug)]
pub struct Scroller {
    config: ScrollerConfig,
    x: Axis,
    y: Axis,
    started_ms: u64,
    duration_ms: f64,
    finished: bool,
}

impl Scroller {
    /// Creates an idle scroller.
    #[must_use]
    pub fn new(config: ScrollerConfig) -> Self {
        Self {
            config,
            x: Axis::default(),
            y: Axis::default(),
            started_ms: 0,
            duration_ms: 0.0,
            finished: true,
        }
    }

    /// Starts a fling from `start` at `velocity` units per second, bounded
    /// by the box from `min` to `max`.
    pub fn fling(&mut self, now_ms: u64, start: Point, velocity: Vec2, min: Point, max: Point) {
        let a = self.config.deceleration;
        self.x = Axis::new(start.x, velocity.x, min.x, max.x, a);
        self.y = Axis::new(start.y, velocity.y, min.y, max.y, a);
        self.started_ms = now_ms;
        self.duration_ms = self.x.duration.max(self.y.duration) * 1_000.0;
        self.finished = false;
        log::debug!(
            "fling from {start:?} at {velocity:?} towards {:?} over {:.0} ms",
            self.final_position(),
            self.duration_ms
        );
    }

    /// Updates the current position for `now_ms`.
    ///
    /// Returns `false` once the fling had already finished; the call that
    /// reaches the end position still returns `true`.
    pub fn compute_offset(&mut self, now_ms: u64) -> bool {
        if self.finished {
            return false;
        }
        let elapsed_ms = now_ms.saturating_sub(self.started_ms) as f64;
        if elapsed_ms >= self.duration_ms {
            self.x.current = self.x.end;
            self.y.current = self.y.end;
            self.finished = true;
        } else {
            let t = elapsed_ms / 1_000.0;
            let a = self.config.deceleration;
            self.x.current = self.x.position_at(t, a);
            self.y.current = self.y.position_at(t, a);
        }
        true
    }

    /// Stops immediately, leaving the current position where it is.
    pub fn force_finished(&mut self) {
        self.finished = true;
    }

    /// Returns `true` when no fling is running.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Position as of the last [`compute_offset`](Self::compute_offset).
    #[must_use]
    pub fn current(&self) -> Point {
        Point::new(self.x.current, self.y.current)
    }

    /// Where the fling will come to rest.
    #[must_use]
    pub fn final_position(&self) -> Point {
        Point::new(self.x.end, self.y.end)
    }
}
