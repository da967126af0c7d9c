// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::{AnimationTarget, Easing, Progress};

/// An eased zoom from one scale to another about a fixed focus.
///
/// Each step computes the scale the curve calls for and applies only the
/// factor between it and the target's *actual* scale, so the tween stays
/// correct when something else changes the scale while it runs.
///
/// The clock starts at the first [`advance`](Self::advance).
#[derive(Clone, Copy, Debug)]
pub struct ZoomTween {
    from: f64,
    to: f64,
    focus: Point,
    duration_ms: u64,
    easing: Easing,
    started_ms: Option<u64>,
}

impl ZoomTween {
    /// Creates a tween from scale `from` to scale `to` about `focus`.
    #[must_use]
    pub fn new(from: f64, to: f64, focus: Point, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            focus,
            duration_ms,
            easing,
            started_ms: None,
        }
    }

    /// Scale the tween ends at.
    #[must_use]
    pub fn target_scale(&self) -> f64 {
        self.to
    }

    /// Point held fixed while zooming.
    #[must_use]
    pub fn focus(&self) -> Point {
        self.focus
    }

    /// Applies one step for time `now_ms`.
    pub fn advance(&mut self, now_ms: u64, target: &mut impl AnimationTarget) -> Progress {
        let started = *self.started_ms.get_or_insert(now_ms);
        let t = if self.duration_ms == 0 {
            1.0
        } else {
            (now_ms.saturating_sub(started) as f64 / self.duration_ms as f64).min(1.0)
        };

        let scale = if t >= 1.0 {
            self.to
        } else {
            self.from + self.easing.apply(t) * (self.to - self.from)
        };
        let current = target.current_scale();
        if current > 0.0 && current.is_finite() {
            let factor = scale / current;
            log::trace!("zoom step t={t:.3} scale={scale} factor={factor}");
            target.apply_scale(factor, self.focus);
        }

        if t < 1.0 {
            Progress::Continue
        } else {
            Progress::Done
        }
    }
}
