// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};
use loupe_transform::TransformComposer;

/// The narrow mutation surface animations drive.
///
/// Tasks only ever zoom or pan through this trait, so whatever clamping the
/// implementor performs after a mutation also applies to every animation
/// step.
pub trait AnimationTarget {
    /// Current zoom of the user transform.
    fn current_scale(&self) -> f64;

    /// Content bounds in viewport coordinates, if content is bound.
    fn display_rect(&self) -> Option<Rect>;

    /// Multiplies the zoom by `factor`, holding `focus` fixed.
    fn apply_scale(&mut self, factor: f64, focus: Point);

    /// Pans by `delta` in viewport coordinates.
    fn apply_translate(&mut self, delta: Vec2);
}

impl AnimationTarget for TransformComposer {
    fn current_scale(&self) -> f64 {
        self.scale()
    }

    fn display_rect(&self) -> Option<Rect> {
        Self::display_rect(self)
    }

    fn apply_scale(&mut self, factor: f64, focus: Point) {
        Self::apply_scale(self, factor, focus);
    }

    fn apply_translate(&mut self, delta: Vec2) {
        Self::apply_translate(self, delta);
    }
}
