// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::fit::Align;
use crate::{EdgeState, EdgeStates, FitPolicy, TransformError};

/// Result of a clamp-and-publish pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayUpdate {
    /// Transform to draw content with.
    pub draw_transform: Affine,
    /// Content bounds under `draw_transform`, in viewport coordinates.
    pub display_rect: Rect,
    /// Whether `draw_transform` differs from the previous publish.
    pub changed: bool,
}

/// Owns the base and supplementary transforms of one piece of content.
///
/// The *base* transform fits the content into the viewport according to a
/// [`FitPolicy`]. The *supplementary* transform accumulates user pans, zooms
/// and rotations on top of it. Drawing uses `supplementary * base`.
///
/// Every mutation post-concatenates onto the supplementary transform and then
/// runs a clamp pass: per axis, content smaller than the viewport is pinned
/// according to the fit policy, and larger content is pulled back so that no
/// gap opens between a content edge and the matching viewport edge. The
/// resulting [`EdgeStates`] are kept for scroll-handoff decisions.
///
/// Mutations return `None` and change nothing while no content is bound or
/// the viewport is empty.
///
/// ```
/// use kurbo::{Point, Rect, Size};
/// use loupe_transform::TransformComposer;
///
/// let mut composer = TransformComposer::new();
/// composer.set_viewport(Size::new(200.0, 100.0));
/// composer.bind_content(Size::new(400.0, 200.0));
/// assert_eq!(composer.display_rect(), Some(Rect::new(0.0, 0.0, 200.0, 100.0)));
///
/// composer.apply_scale(2.0, Point::new(100.0, 50.0));
/// assert_eq!(composer.scale(), 2.0);
/// assert_eq!(composer.display_rect(), Some(Rect::new(-100.0, -50.0, 300.0, 150.0)));
/// ```
#[derive(Clone, Debug)]
pub struct TransformComposer {
    content: Option<Size>,
    viewport: Size,
    fit_policy: FitPolicy,
    base_rotation: f64,
    base: Affine,
    supplementary: Affine,
    edges: EdgeStates,
    last_published: Option<Affine>,
}

impl Default for TransformComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformComposer {
    /// Creates a composer with no content and an empty viewport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            content: None,
            viewport: Size::ZERO,
            fit_policy: FitPolicy::default(),
            base_rotation: 0.0,
            base: Affine::IDENTITY,
            supplementary: Affine::IDENTITY,
            edges: EdgeStates::default(),
            last_published: None,
        }
    }

    /// Binds content of the given intrinsic size and refits it.
    ///
    /// Sizes with a non-positive or non-finite dimension unbind the content.
    pub fn bind_content(&mut self, size: Size) -> Option<DisplayUpdate> {
        if size.width > 0.0 && size.height > 0.0 && size.is_finite() {
            self.content = Some(size);
            self.update_base_transform()
        } else {
            log::debug!("unbinding content of degenerate size {size:?}");
            self.unbind_content();
            None
        }
    }

    /// Removes the bound content.
    pub fn unbind_content(&mut self) {
        self.content = None;
        self.last_published = None;
    }

    /// Intrinsic size of the bound content.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        self.content
    }

    /// Sets the viewport size (after padding) and refits if it changed.
    pub fn set_viewport(&mut self, size: Size) -> Option<DisplayUpdate> {
        if self.viewport == size {
            return None;
        }
        self.viewport = size;
        self.update_base_transform()
    }

    /// Current viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Sets the fit policy and refits if it changed.
    pub fn set_fit_policy(&mut self, policy: FitPolicy) -> Option<DisplayUpdate> {
        if self.fit_policy == policy {
            return None;
        }
        self.fit_policy = policy;
        self.update_base_transform()
    }

    /// Current fit policy.
    #[must_use]
    pub fn fit_policy(&self) -> FitPolicy {
        self.fit_policy
    }

    /// Sets the rotation applied at rest, in degrees, and refits.
    pub fn set_base_rotation(&mut self, degrees: f64) -> Option<DisplayUpdate> {
        self.base_rotation = degrees % 360.0;
        self.update_base_transform()
    }

    /// Rotation applied at rest, in degrees.
    #[must_use]
    pub fn base_rotation(&self) -> f64 {
        self.base_rotation
    }

    /// Recomputes the base transform and resets user interaction.
    pub fn update_base_transform(&mut self) -> Option<DisplayUpdate> {
        let content = self.content?;
        if !self.has_viewport() {
            return None;
        }
        self.base = self
            .fit_policy
            .base_transform(content, self.viewport, self.base_rotation);
        log::debug!(
            "base transform for {content:?} in {:?} with {:?}: {:?}",
            self.viewport,
            self.fit_policy,
            self.base
        );
        self.reset()
    }

    /// Resets the supplementary transform to the base rotation alone.
    pub fn reset(&mut self) -> Option<DisplayUpdate> {
        self.supplementary = rotation(self.base_rotation);
        self.check_bounds()
    }

    /// Pans by `delta` in viewport coordinates.
    pub fn apply_translate(&mut self, delta: Vec2) -> Option<DisplayUpdate> {
        self.mutate(|m| Affine::translate(delta) * m)
    }

    /// Multiplies the scale by `factor`, holding `focus` fixed.
    ///
    /// Factors that are not finite and positive are ignored.
    pub fn apply_scale(&mut self, factor: f64, focus: Point) -> Option<DisplayUpdate> {
        if !(factor.is_finite() && factor > 0.0) {
            log::trace!("ignoring scale factor {factor}");
            return None;
        }
        let about = focus.to_vec2();
        self.mutate(|m| {
            Affine::translate(about) * Affine::scale(factor) * Affine::translate(-about) * m
        })
    }

    /// Rotates about the viewport origin.
    ///
    /// With `absolute`, the supplementary transform is replaced by a pure
    /// rotation, dropping any pan and zoom.
    pub fn apply_rotate(&mut self, degrees: f64, absolute: bool) -> Option<DisplayUpdate> {
        let r = rotation(degrees % 360.0);
        self.mutate(|m| if absolute { r } else { r * m })
    }

    /// Replaces the supplementary transform by a pure zoom to `scale` about
    /// `focus`, dropping any rotation.
    ///
    /// Scales that are not finite and positive are ignored.
    pub fn set_scale_about(&mut self, scale: f64, focus: Point) -> Option<DisplayUpdate> {
        if !(scale.is_finite() && scale > 0.0) {
            return None;
        }
        let about = focus.to_vec2();
        self.mutate(|_| {
            Affine::translate(about) * Affine::scale(scale) * Affine::translate(-about)
        })
    }

    /// Replaces the supplementary transform.
    ///
    /// Fails with [`TransformError::NoContent`] unless content is bound and
    /// the viewport is non-empty.
    pub fn set_supplementary(
        &mut self,
        transform: Affine,
    ) -> Result<DisplayUpdate, TransformError> {
        if !transform.is_finite() {
            return Err(TransformError::NonFiniteTransform);
        }
        if self.content.is_none() {
            return Err(TransformError::NoContent);
        }
        self.mutate(|_| transform).ok_or(TransformError::NoContent)
    }

    /// Clamps the supplementary transform into bounds and publishes.
    ///
    /// Running it again without an intervening mutation changes nothing.
    pub fn check_bounds(&mut self) -> Option<DisplayUpdate> {
        let rect = self.display_rect()?;
        if !self.has_viewport() {
            return None;
        }
        let align = self.fit_policy.align();
        let (horizontal, dx) = clamp_axis(rect.x0, rect.x1, self.viewport.width, align);
        let (vertical, dy) = clamp_axis(rect.y0, rect.y1, self.viewport.height, align);
        self.edges = EdgeStates {
            horizontal,
            vertical,
        };
        if dx != 0.0 || dy != 0.0 {
            log::trace!("clamp correction ({dx}, {dy})");
            self.supplementary = Affine::translate((dx, dy)) * self.supplementary;
        }
        Some(self.publish())
    }

    /// Content bounds under the draw transform, without clamping.
    #[must_use]
    pub fn display_rect(&self) -> Option<Rect> {
        let content = self.content?;
        Some(self.draw_transform().transform_rect_bbox(content.to_rect()))
    }

    /// `supplementary * base`.
    #[must_use]
    pub fn draw_transform(&self) -> Affine {
        self.supplementary * self.base
    }

    /// The fit transform alone.
    #[must_use]
    pub fn base(&self) -> Affine {
        self.base
    }

    /// User interaction on top of the fit transform.
    #[must_use]
    pub fn supplementary(&self) -> Affine {
        self.supplementary
    }

    /// Zoom of the supplementary transform.
    ///
    /// This is the length of its first column, so it is unaffected by
    /// rotation.
    #[must_use]
    pub fn scale(&self) -> f64 {
        let [a, b, ..] = self.supplementary.as_coeffs();
        (a * a + b * b).sqrt()
    }

    /// Edge states from the last clamp pass.
    #[must_use]
    pub fn edges(&self) -> EdgeStates {
        self.edges
    }

    /// Returns `true` while content is bound and the viewport is non-empty.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.content.is_some() && self.has_viewport()
    }

    fn has_viewport(&self) -> bool {
        self.viewport.width > 0.0 && self.viewport.height > 0.0
    }

    fn mutate(&mut self, f: impl FnOnce(Affine) -> Affine) -> Option<DisplayUpdate> {
        if !self.is_ready() {
            return None;
        }
        self.supplementary = f(self.supplementary);
        self.check_bounds()
    }

    fn publish(&mut self) -> DisplayUpdate {
        let draw_transform = self.draw_transform();
        let changed = self.last_published != Some(draw_transform);
        self.last_published = Some(draw_transform);
        let display_rect = self
            .display_rect()
            .unwrap_or_else(|| self.viewport.to_rect());
        DisplayUpdate {
            draw_transform,
            display_rect,
            changed,
        }
    }
}

/// Classifies one axis and returns the correction that clamps it.
///
/// `start..end` is the content extent, `0..available` the viewport.
fn clamp_axis(start: f64, end: f64, available: f64, align: Align) -> (EdgeState, f64) {
    let size = end - start;
    if size <= available {
        (EdgeState::Both, align.offset(available, size) - start)
    } else if start > 0.0 {
        (EdgeState::Start, -start)
    } else if end < available {
        (EdgeState::End, available - end)
    } else {
        (EdgeState::None, 0.0)
    }
}

fn rotation(degrees: f64) -> Affine {
    Affine::rotate(degrees * (core::f64::consts::PI / 180.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Size = Size::new(200.0, 100.0);
    const CONTENT: Size = Size::new(400.0, 200.0);

    fn composer() -> TransformComposer {
        let mut c = TransformComposer::new();
        c.set_viewport(VIEW);
        c.bind_content(CONTENT);
        c
    }

    fn assert_rect_near(a: Rect, b: Rect) {
        let d = (a.x0 - b.x0).abs()
            + (a.y0 - b.y0).abs()
            + (a.x1 - b.x1).abs()
            + (a.y1 - b.y1).abs();
        assert!(d < 1e-9, "{a:?} != {b:?}");
    }

    #[test]
    fn degenerate_scale_factors_leave_the_transform_alone() {
        let mut c = composer();
        c.apply_scale(1.5, Point::new(100.0, 50.0)).unwrap();
        let before = c.supplementary();
        for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert_eq!(c.apply_scale(factor, Point::new(100.0, 50.0)), None);
            assert_eq!(c.set_scale_about(factor, Point::new(100.0, 50.0)), None);
        }
        assert_eq!(c.supplementary(), before);
        assert!((c.scale() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn no_content_is_a_no_op() {
        let mut c = TransformComposer::new();
        c.set_viewport(VIEW);
        assert_eq!(c.apply_translate(Vec2::new(5.0, 5.0)), None);
        assert_eq!(c.display_rect(), None);
        assert_eq!(c.supplementary(), Affine::IDENTITY);
    }

    #[test]
    fn empty_viewport_is_a_no_op() {
        let mut c = TransformComposer::new();
        c.bind_content(CONTENT);
        assert_eq!(c.apply_scale(2.0, Point::ORIGIN), None);
        assert_eq!(c.scale(), 1.0);
    }

    #[test]
    fn degenerate_content_unbinds() {
        let mut c = composer();
        assert_eq!(c.bind_content(Size::new(0.0, 10.0)), None);
        assert_eq!(c.content_size(), None);
        assert!(!c.is_ready());
    }

    #[test]
    fn pan_is_clamped_at_rest() {
        let mut c = composer();
        // Fitted exactly: any pan is undone.
        let update = c.apply_translate(Vec2::new(30.0, -20.0)).unwrap();
        assert_rect_near(update.display_rect, Rect::new(0.0, 0.0, 200.0, 100.0));
        assert_eq!(
            c.edges(),
            EdgeStates {
                horizontal: EdgeState::Both,
                vertical: EdgeState::Both
            }
        );
    }

    #[test]
    fn zoomed_content_classifies_edges() {
        let mut c = composer();
        c.apply_scale(2.0, Point::new(0.0, 0.0));
        assert_rect_near(c.display_rect().unwrap(), Rect::new(0.0, 0.0, 400.0, 200.0));
        assert_eq!(c.edges().horizontal, EdgeState::None);

        // Pushing past the leading edges is corrected and reported.
        c.apply_translate(Vec2::new(10.0, 10.0));
        assert_rect_near(c.display_rect().unwrap(), Rect::new(0.0, 0.0, 400.0, 200.0));
        assert_eq!(c.edges().horizontal, EdgeState::Start);
        assert_eq!(c.edges().vertical, EdgeState::Start);

        c.apply_translate(Vec2::new(-50.0, -25.0));
        assert_eq!(c.edges().horizontal, EdgeState::None);
        assert_eq!(c.edges().vertical, EdgeState::None);

        // Pulling past the trailing edge is corrected back.
        c.apply_translate(Vec2::new(-1_000.0, -1_000.0));
        assert_rect_near(c.display_rect().unwrap(), Rect::new(-200.0, -100.0, 200.0, 100.0));
        assert_eq!(c.edges().horizontal, EdgeState::End);
        assert_eq!(c.edges().vertical, EdgeState::End);
    }

    #[test]
    fn small_content_is_pinned_by_policy() {
        let mut c = TransformComposer::new();
        c.set_viewport(Size::new(200.0, 200.0));
        c.set_fit_policy(FitPolicy::FitEnd);
        c.bind_content(CONTENT);
        assert_rect_near(c.display_rect().unwrap(), Rect::new(0.0, 100.0, 200.0, 200.0));

        c.apply_translate(Vec2::new(0.0, -60.0));
        assert_rect_near(c.display_rect().unwrap(), Rect::new(0.0, 100.0, 200.0, 200.0));
    }

    #[test]
    fn second_clamp_is_a_no_op() {
        let mut c = composer();
        c.apply_scale(2.5, Point::new(37.0, 11.0));
        c.apply_translate(Vec2::new(999.0, -3.0));
        let first = c.display_rect().unwrap();
        let update = c.check_bounds().unwrap();
        assert_eq!(update.display_rect, first);
        assert!(!update.changed);
    }

    #[test]
    fn publish_reports_changes() {
        let mut c = composer();
        assert!(c.apply_scale(2.0, Point::new(100.0, 50.0)).unwrap().changed);
        assert!(!c.apply_translate(Vec2::ZERO).unwrap().changed);
    }

    #[test]
    fn scale_ignores_rotation() {
        let mut c = composer();
        c.apply_scale(2.0, Point::new(100.0, 50.0));
        c.apply_rotate(30.0, false);
        assert!((c.scale() - 2.0).abs() < 1e-12);

        c.apply_rotate(45.0, true);
        assert!((c.scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn set_scale_about_replaces_interaction() {
        let mut c = composer();
        c.apply_rotate(90.0, false);
        c.set_scale_about(3.0, Point::new(100.0, 50.0));
        let [a, b, ..] = c.supplementary().as_coeffs();
        assert_eq!((a, b), (3.0, 0.0));
    }

    #[test]
    fn base_rotation_survives_reset() {
        let mut c = composer();
        c.set_base_rotation(90.0);
        let [_, b, ..] = c.supplementary().as_coeffs();
        assert!((b - 1.0).abs() < 1e-12);
        // Rotated 400x200 content fits 200x100 at a quarter scale, then centres.
        assert_rect_near(c.display_rect().unwrap(), Rect::new(75.0, 0.0, 125.0, 100.0));

        c.apply_scale(2.0, Point::new(100.0, 50.0));
        c.reset();
        assert!((c.scale() - 1.0).abs() < 1e-12);
        let [_, b, ..] = c.supplementary().as_coeffs();
        assert!((b - 1.0).abs() < 1e-12);
    }

    #[test]
    fn explicit_transform_is_validated() {
        let mut empty = TransformComposer::new();
        assert_eq!(
            empty.set_supplementary(Affine::scale(2.0)),
            Err(TransformError::NoContent)
        );

        let mut c = composer();
        assert_eq!(
            c.set_supplementary(Affine::new([f64::NAN, 0.0, 0.0, 1.0, 0.0, 0.0])),
            Err(TransformError::NonFiniteTransform)
        );
        assert_eq!(c.supplementary(), Affine::IDENTITY);

        c.set_supplementary(Affine::scale(2.0)).unwrap();
        assert_eq!(c.scale(), 2.0);
    }
}
