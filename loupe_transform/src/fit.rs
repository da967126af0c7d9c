// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Size, Vec2};

/// How content is fitted into the viewport before any user interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitPolicy {
    /// Center the content without scaling.
    Center,
    /// Scale uniformly so the content covers the viewport, then center.
    CenterCrop,
    /// Like [`FitPolicy::FitCenter`], but never scale up.
    CenterInside,
    /// Scale uniformly to fit inside the viewport and center.
    #[default]
    FitCenter,
    /// Scale uniformly to fit and align with the leading (top-left) corner.
    FitStart,
    /// Scale uniformly to fit and align with the trailing (bottom-right) corner.
    FitEnd,
    /// Scale each axis independently to fill the viewport exactly.
    FitXy,
}

/// Where content smaller than the viewport is pinned on one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Align {
    Start,
    Center,
    End,
}

impl Align {
    /// Offset that positions an extent of `size` inside `available`.
    pub(crate) fn offset(self, available: f64, size: f64) -> f64 {
        match self {
            Self::Start => 0.0,
            Self::Center => (available - size) / 2.0,
            Self::End => available - size,
        }
    }
}

impl FitPolicy {
    /// Alignment used when content is smaller than the viewport.
    pub(crate) fn align(self) -> Align {
        match self {
            Self::FitStart => Align::Start,
            Self::FitEnd => Align::End,
            _ => Align::Center,
        }
    }

    /// Base transform mapping content of `content` size into `viewport`.
    ///
    /// `rotation_degrees` only matters to the `Fit*` policies: when it is an
    /// odd multiple of 90 degrees the content's width and height are swapped
    /// before solving the fit, so the rotated content fits. The rotation
    /// itself is not part of the base transform.
    #[must_use]
    pub fn base_transform(self, content: Size, viewport: Size, rotation_degrees: f64) -> Affine {
        let centered = |scale: f64| {
            let offset = (viewport.to_vec2() - content.to_vec2() * scale) / 2.0;
            Affine::translate(offset) * Affine::scale(scale)
        };
        let ratio = Vec2::new(
            viewport.width / content.width,
            viewport.height / content.height,
        );

        match self {
            Self::Center => centered(1.0),
            Self::CenterCrop => centered(ratio.x.max(ratio.y)),
            Self::CenterInside => centered(ratio.x.min(ratio.y).min(1.0)),
            Self::FitCenter | Self::FitStart | Self::FitEnd | Self::FitXy => {
                let src = if rotation_degrees.trunc() % 180.0 != 0.0 {
                    Size::new(content.height, content.width)
                } else {
                    content
                };
                self.rect_to_rect(src, viewport)
            }
        }
    }

    /// Solves the transform mapping `(0, 0, src)` onto `(0, 0, dst)`.
    fn rect_to_rect(self, src: Size, dst: Size) -> Affine {
        let sx = dst.width / src.width;
        let sy = dst.height / src.height;
        if self == Self::FitXy {
            return Affine::scale_non_uniform(sx, sy);
        }
        let scale = sx.min(sy);
        let align = self.align();
        let offset = Vec2::new(
            align.offset(dst.width, src.width * scale),
            align.offset(dst.height, src.height * scale),
        );
        Affine::translate(offset) * Affine::scale(scale)
    }
}
