// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Maps linear time progress in `[0, 1]` to animation progress.
#[derive(Clone, Copy, Debug, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Slow start and end, fastest in the middle.
    #[default]
    AccelerateDecelerate,
    /// Starts slowly.
    Accelerate,
    /// Ends slowly.
    Decelerate,
    /// A caller-supplied curve. It should map 0 to 0 and 1 to 1.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Eased progress for `t`, which is clamped to `[0, 1]` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::AccelerateDecelerate => {
                ((t + 1.0) * core::f64::consts::PI).cos() / 2.0 + 0.5
            }
            Self::Accelerate => t * t,
            Self::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
            Self::Custom(f) => f(t),
        }
    }
}
