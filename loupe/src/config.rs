// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_animation::{Easing, ScrollerConfig};
use loupe_gesture::GestureConfig;
use loupe_transform::{FitPolicy, ScaleLevels};

/// Initial settings of a [`PhotoController`](crate::PhotoController).
///
/// Every field can also be changed later through the controller.
#[derive(Clone, Copy, Debug)]
pub struct ControllerConfig {
    /// Let the enclosing container take over a drag that pushes against a
    /// resting edge.
    pub allow_parent_intercept_on_edge: bool,
    /// Whether pointer input is handled at all.
    pub zoom_enabled: bool,
    /// Duration of animated zooms.
    pub zoom_duration_ms: u64,
    /// Curve of animated zooms.
    pub easing: Easing,
    /// Minimum, medium and maximum zoom.
    pub scale_levels: ScaleLevels,
    /// How content is fitted into the viewport at rest.
    pub fit_policy: FitPolicy,
    /// Recognizer thresholds.
    pub gesture: GestureConfig,
    /// Fling physics.
    pub scroller: ScrollerConfig,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            allow_parent_intercept_on_edge: true,
            zoom_enabled: true,
            zoom_duration_ms: 200,
            easing: Easing::AccelerateDecelerate,
            scale_levels: ScaleLevels::default(),
            fit_policy: FitPolicy::FitCenter,
            gesture: GestureConfig::default(),
            scroller: ScrollerConfig::default(),
        }
    }
}

impl ControllerConfig {
    /// Returns a copy with the given scale levels.
    #[must_use]
    pub fn with_scale_levels(mut self, levels: ScaleLevels) -> Self {
        self.scale_levels = levels;
        self
    }

    /// Returns a copy with the given fit policy.
    #[must_use]
    pub fn with_fit_policy(mut self, policy: FitPolicy) -> Self {
        self.fit_policy = policy;
        self
    }

    /// Returns a copy with the given zoom duration.
    #[must_use]
    pub fn with_zoom_duration_ms(mut self, duration_ms: u64) -> Self {
        self.zoom_duration_ms = duration_ms;
        self
    }

    /// Returns a copy with the given zoom curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Returns a copy with the given recognizer thresholds.
    #[must_use]
    pub fn with_gesture(mut self, gesture: GestureConfig) -> Self {
        self.gesture = gesture;
        self
    }

    /// Returns a copy with the given fling physics.
    #[must_use]
    pub fn with_scroller(mut self, scroller: ScrollerConfig) -> Self {
        self.scroller = scroller;
        self
    }

    /// Returns a copy with edge handoff to the container switched on or off.
    #[must_use]
    pub fn with_allow_parent_intercept_on_edge(mut self, allow: bool) -> Self {
        self.allow_parent_intercept_on_edge = allow;
        self
    }
}
