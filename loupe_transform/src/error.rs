// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Rejected configuration or mutation.
///
/// A call that returns one of these has not changed any state.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum TransformError {
    /// Scale levels must be finite, positive and ordered `min <= mid <= max`.
    #[error("scale levels must satisfy 0 < min <= mid <= max, got {min} / {mid} / {max}")]
    InvalidScaleLevels {
        /// Requested minimum.
        min: f64,
        /// Requested medium.
        mid: f64,
        /// Requested maximum.
        max: f64,
    },
    /// A scale was requested outside the configured levels.
    #[error("scale {scale} is outside the allowed range [{min}, {max}]")]
    ScaleOutOfRange {
        /// Requested scale.
        scale: f64,
        /// Current minimum level.
        min: f64,
        /// Current maximum level.
        max: f64,
    },
    /// The operation needs bound content.
    #[error("no content is bound")]
    NoContent,
    /// An explicit transform had NaN or infinite coefficients.
    #[error("transform has non-finite coefficients")]
    NonFiniteTransform,
}
