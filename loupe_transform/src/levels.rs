// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::TransformError;

/// Relative distance within which a scale counts as being at a level.
///
/// Animated zooms end within a few ulps of their target.
const LEVEL_TOLERANCE: f64 = 1e-9;

/// The three discrete zoom levels: minimum, medium and maximum.
///
/// Always finite, positive and ordered `min <= mid <= max`. Setters validate
/// the whole triple and leave `self` untouched on failure.
///
/// ```
/// use loupe_transform::ScaleLevels;
///
/// let mut levels = ScaleLevels::default();
/// assert_eq!((levels.min(), levels.mid(), levels.max()), (1.0, 1.75, 3.0));
///
/// assert!(levels.set_max(1.5).is_err());
/// assert_eq!(levels.max(), 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLevels {
    min: f64,
    mid: f64,
    max: f64,
}

impl Default for ScaleLevels {
    fn default() -> Self {
        Self {
            min: 1.0,
            mid: 1.75,
            max: 3.0,
        }
    }
}

impl ScaleLevels {
    /// Validates and creates a set of levels.
    pub fn new(min: f64, mid: f64, max: f64) -> Result<Self, TransformError> {
        let valid = [min, mid, max].iter().all(|v| v.is_finite() && *v > 0.0)
            && min <= mid
            && mid <= max;
        if valid {
            Ok(Self { min, mid, max })
        } else {
            log::warn!("rejecting scale levels {min} / {mid} / {max}");
            Err(TransformError::InvalidScaleLevels { min, mid, max })
        }
    }

    /// Minimum level.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Medium level, the first double-tap target.
    #[must_use]
    pub fn mid(&self) -> f64 {
        self.mid
    }

    /// Maximum level.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Replaces all three levels.
    pub fn set(&mut self, min: f64, mid: f64, max: f64) -> Result<(), TransformError> {
        *self = Self::new(min, mid, max)?;
        Ok(())
    }

    /// Replaces the minimum level.
    pub fn set_min(&mut self, min: f64) -> Result<(), TransformError> {
        self.set(min, self.mid, self.max)
    }

    /// Replaces the medium level.
    pub fn set_mid(&mut self, mid: f64) -> Result<(), TransformError> {
        self.set(self.min, mid, self.max)
    }

    /// Replaces the maximum level.
    pub fn set_max(&mut self, max: f64) -> Result<(), TransformError> {
        self.set(self.min, self.mid, max)
    }

    /// Fails with [`TransformError::ScaleOutOfRange`] unless `min <= scale <= max`.
    pub fn check(&self, scale: f64) -> Result<(), TransformError> {
        if scale >= self.min && scale <= self.max {
            Ok(())
        } else {
            log::warn!("scale {scale} outside [{}, {}]", self.min, self.max);
            Err(TransformError::ScaleOutOfRange {
                scale,
                min: self.min,
                max: self.max,
            })
        }
    }

    /// The level a double tap moves to from `current`.
    ///
    /// Below medium goes to medium, from medium up to maximum goes to
    /// maximum, anything else returns to minimum. A scale within rounding
    /// error of a level counts as that level.
    #[must_use]
    pub fn double_tap_target(&self, current: f64) -> f64 {
        if below(current, self.mid) {
            self.mid
        } else if below(current, self.max) {
            self.max
        } else {
            self.min
        }
    }

    /// The nearest level to return to after a gesture left `current`
    /// outside `[min, max]`, or `None` when it is in range.
    #[must_use]
    pub fn rest_target(&self, current: f64) -> Option<f64> {
        if below(current, self.min) {
            Some(self.min)
        } else if above(current, self.max) {
            Some(self.max)
        } else {
            None
        }
    }
}

fn below(value: f64, level: f64) -> bool {
    value < level * (1.0 - LEVEL_TOLERANCE)
}

fn above(value: f64, level: f64) -> bool {
    value > level * (1.0 + LEVEL_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_levels_are_allowed() {
        let levels = ScaleLevels::new(2.0, 2.0, 2.0).unwrap();
        assert_eq!(levels.min(), levels.max());
    }

    #[test]
    fn misordered_or_degenerate_levels_are_rejected() {
        for (min, mid, max) in [
            (2.0, 1.0, 3.0),
            (1.0, 4.0, 3.0),
            (0.0, 1.0, 2.0),
            (-1.0, 1.0, 2.0),
            (1.0, f64::NAN, 2.0),
            (1.0, 2.0, f64::INFINITY),
        ] {
            assert!(
                ScaleLevels::new(min, mid, max).is_err(),
                "{min} / {mid} / {max} should be rejected"
            );
        }
    }

    #[test]
    fn failed_setter_keeps_previous_levels() {
        let mut levels = ScaleLevels::default();
        assert_eq!(
            levels.set_min(2.0),
            Err(TransformError::InvalidScaleLevels {
                min: 2.0,
                mid: 1.75,
                max: 3.0
            })
        );
        assert_eq!(levels, ScaleLevels::default());

        levels.set_mid(2.5).unwrap();
        assert_eq!(levels.mid(), 2.5);
    }

    #[test]
    fn double_tap_cycles_through_levels() {
        let levels = ScaleLevels::default();
        assert_eq!(levels.double_tap_target(1.0), 1.75);
        assert_eq!(levels.double_tap_target(1.75), 3.0);
        assert_eq!(levels.double_tap_target(2.9), 3.0);
        assert_eq!(levels.double_tap_target(3.0), 1.0);
        assert_eq!(levels.double_tap_target(5.0), 1.0);
    }

    #[test]
    fn rounding_error_counts_as_the_level() {
        let levels = ScaleLevels::default();
        let just_under_mid = 1.75 - 4.0 * f64::EPSILON;
        assert_eq!(levels.double_tap_target(just_under_mid), 3.0);
        let just_under_max = 3.0 - 8.0 * f64::EPSILON;
        assert_eq!(levels.double_tap_target(just_under_max), 1.0);
        assert_eq!(levels.rest_target(3.0 + 8.0 * f64::EPSILON), None);
        assert_eq!(levels.rest_target(1.0 - 2.0 * f64::EPSILON), None);
    }

    #[test]
    fn check_and_rest_target() {
        let levels = ScaleLevels::default();
        assert!(levels.check(1.0).is_ok());
        assert!(levels.check(3.0).is_ok());
        assert!(matches!(
            levels.check(3.5),
            Err(TransformError::ScaleOutOfRange { .. })
        ));
        assert_eq!(levels.rest_target(0.5), Some(1.0));
        assert_eq!(levels.rest_target(4.0), Some(3.0));
        assert_eq!(levels.rest_target(2.0), None);
    }
}
