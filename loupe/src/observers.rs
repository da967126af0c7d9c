// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional notification handlers.
//!
//! Each channel is independent and may be left unset. Handlers run
//! synchronously inside the controller call that triggered them.

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Affine, Point, Rect, Vec2};

/// Receives the draw transform after every clamp pass.
pub type RenderHandler = Box<dyn FnMut(Affine)>;
/// Receives the display rect whenever the draw transform changed.
pub type MatrixChangedHandler = Box<dyn FnMut(Rect)>;
/// Receives each accepted pinch or animation step as `(factor, focus)`.
pub type ScaleChangedHandler = Box<dyn FnMut(f64, Point)>;
/// Receives a tap on the content in normalized content coordinates.
pub type PhotoTapHandler = Box<dyn FnMut(Point)>;
/// Receives a notification without a payload.
pub type NotifyHandler = Box<dyn FnMut()>;
/// Receives a point in viewport coordinates.
pub type PointHandler = Box<dyn FnMut(Point)>;
/// Receives a single-pointer fling at rest scale; returns whether it was consumed.
pub type SingleFlingHandler = Box<dyn FnMut(SingleFling) -> bool>;
/// Receives each drag delta before it is applied.
pub type ViewDragHandler = Box<dyn FnMut(Vec2)>;
/// Receives whether the enclosing container may intercept the gesture.
pub type ParentInterceptHandler = Box<dyn FnMut(bool)>;

/// A fast single-pointer release seen while the content is not zoomed in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SingleFling {
    /// Down position.
    pub start: Point,
    /// Up position.
    pub end: Point,
    /// Pointer velocity at release, in units per second.
    pub velocity: Vec2,
}

/// The set of notification handlers of a controller.
#[derive(Default)]
pub struct Observers {
    render: Option<RenderHandler>,
    matrix_changed: Option<MatrixChangedHandler>,
    scale_changed: Option<ScaleChangedHandler>,
    photo_tap: Option<PhotoTapHandler>,
    outside_photo_tap: Option<NotifyHandler>,
    view_tap: Option<PointHandler>,
    single_click: Option<NotifyHandler>,
    long_press: Option<PointHandler>,
    single_fling: Option<SingleFlingHandler>,
    view_drag: Option<ViewDragHandler>,
    parent_intercept: Option<ParentInterceptHandler>,
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("render", &self.render.is_some())
            .field("matrix_changed", &self.matrix_changed.is_some())
            .field("scale_changed", &self.scale_changed.is_some())
            .field("photo_tap", &self.photo_tap.is_some())
            .field("outside_photo_tap", &self.outside_photo_tap.is_some())
            .field("view_tap", &self.view_tap.is_some())
            .field("single_click", &self.single_click.is_some())
            .field("long_press", &self.long_press.is_some())
            .field("single_fling", &self.single_fling.is_some())
            .field("view_drag", &self.view_drag.is_some())
            .field("parent_intercept", &self.parent_intercept.is_some())
            .finish()
    }
}

impl Observers {
    /// Sets the handler that receives the draw transform to render with.
    pub fn set_render(&mut self, f: impl FnMut(Affine) + 'static) {
        self.render = Some(Box::new(f));
    }

    /// Sets the handler for display rect changes.
    pub fn set_matrix_changed(&mut self, f: impl FnMut(Rect) + 'static) {
        self.matrix_changed = Some(Box::new(f));
    }

    /// Sets the handler for zoom steps.
    pub fn set_scale_changed(&mut self, f: impl FnMut(f64, Point) + 'static) {
        self.scale_changed = Some(Box::new(f));
    }

    /// Sets the handler for taps on the content.
    ///
    /// The point is relative to the display rect, with `(0, 0)` at its top
    /// left and `(1, 1)` at its bottom right.
    pub fn set_photo_tap(&mut self, f: impl FnMut(Point) + 'static) {
        self.photo_tap = Some(Box::new(f));
    }

    /// Sets the handler for taps that miss the content.
    pub fn set_outside_photo_tap(&mut self, f: impl FnMut() + 'static) {
        self.outside_photo_tap = Some(Box::new(f));
    }

    /// Sets the handler for every confirmed single tap, in viewport
    /// coordinates.
    pub fn set_view_tap(&mut self, f: impl FnMut(Point) + 'static) {
        self.view_tap = Some(Box::new(f));
    }

    /// Sets the handler for every confirmed single tap, without position.
    pub fn set_single_click(&mut self, f: impl FnMut() + 'static) {
        self.single_click = Some(Box::new(f));
    }

    /// Sets the handler for long presses.
    pub fn set_long_press(&mut self, f: impl FnMut(Point) + 'static) {
        self.long_press = Some(Box::new(f));
    }

    /// Sets the handler for single-pointer flings at rest scale.
    pub fn set_single_fling(&mut self, f: impl FnMut(SingleFling) -> bool + 'static) {
        self.single_fling = Some(Box::new(f));
    }

    /// Sets the handler for drag deltas.
    pub fn set_view_drag(&mut self, f: impl FnMut(Vec2) + 'static) {
        self.view_drag = Some(Box::new(f));
    }

    /// Sets the handler for parent-intercept decisions.
    pub fn set_parent_intercept(&mut self, f: impl FnMut(bool) + 'static) {
        self.parent_intercept = Some(Box::new(f));
    }

    /// Removes every handler.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn render(&mut self, transform: Affine) {
        if let Some(f) = &mut self.render {
            f(transform);
        }
    }

    pub(crate) fn matrix_changed(&mut self, rect: Rect) {
        if let Some(f) = &mut self.matrix_changed {
            f(rect);
        }
    }

    pub(crate) fn scale_changed(&mut self, factor: f64, focus: Point) {
        if let Some(f) = &mut self.scale_changed {
            f(factor, focus);
        }
    }

    pub(crate) fn photo_tap(&mut self, normalized: Point) {
        if let Some(f) = &mut self.photo_tap {
            f(normalized);
        }
    }

    pub(crate) fn outside_photo_tap(&mut self) {
        if let Some(f) = &mut self.outside_photo_tap {
            f();
        }
    }

    pub(crate) fn view_tap(&mut self, at: Point) {
        if let Some(f) = &mut self.view_tap {
            f(at);
        }
    }

    pub(crate) fn single_click(&mut self) {
        if let Some(f) = &mut self.single_click {
            f();
        }
    }

    pub(crate) fn long_press(&mut self, at: Point) {
        if let Some(f) = &mut self.long_press {
            f(at);
        }
    }

    pub(crate) fn has_single_fling(&self) -> bool {
        self.single_fling.is_some()
    }

    pub(crate) fn single_fling(&mut self, fling: SingleFling) -> bool {
        match &mut self.single_fling {
            Some(f) => f(fling),
            None => false,
        }
    }

    pub(crate) fn view_drag(&mut self, delta: Vec2) {
        if let Some(f) = &mut self.view_drag {
            f(delta);
        }
    }

    pub(crate) fn parent_intercept(&mut self, allowed: bool) {
        if let Some(f) = &mut self.parent_intercept {
            f(allowed);
        }
    }
}
