// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::{AnimationTarget, Easing, FlingTask, Progress, ScrollerConfig, ZoomTween};

/// Holds at most one zoom tween and one fling and steps them each frame.
///
/// The host calls [`advance`](Self::advance) once per display frame while it
/// returns [`Progress::Continue`].
#[derive(Clone, Debug, Default)]
pub struct AnimationScheduler {
    scroller: ScrollerConfig,
    zoom: Option<ZoomTween>,
    fling: Option<FlingTask>,
}

impl AnimationScheduler {
    /// Creates an idle scheduler whose flings use `scroller`.
    #[must_use]
    pub fn new(scroller: ScrollerConfig) -> Self {
        Self {
            scroller,
            zoom: None,
            fling: None,
        }
    }

    /// Starts a zoom tween from the target's current scale, replacing any
    /// running one.
    pub fn start_zoom(
        &mut self,
        target: &impl AnimationTarget,
        to: f64,
        focus: Point,
        duration_ms: u64,
        easing: Easing,
    ) {
        let from = target.current_scale();
        log::debug!("zoom {from} -> {to} about {focus:?} over {duration_ms} ms");
        self.zoom = Some(ZoomTween::new(from, to, focus, duration_ms, easing));
    }

    /// Starts a fling of the target's content, replacing any running one.
    ///
    /// Returns `false` if nothing was started because no content is bound
    /// or the content cannot scroll.
    pub fn start_fling(
        &mut self,
        target: &impl AnimationTarget,
        viewport: Size,
        velocity: Vec2,
    ) -> bool {
        self.cancel_fling();
        let Some(rect) = target.display_rect() else {
            return false;
        };
        self.fling = FlingTask::new(rect, viewport, velocity, self.scroller);
        self.fling.is_some()
    }

    /// Stops a running fling immediately.
    pub fn cancel_fling(&mut self) {
        if let Some(mut fling) = self.fling.take() {
            if !fling.is_finished() {
                log::debug!("cancelling fling");
            }
            fling.cancel();
        }
    }

    /// Drops a running zoom tween without finishing it.
    pub fn cancel_zoom(&mut self) {
        self.zoom = None;
    }

    /// The running zoom tween, if any.
    #[must_use]
    pub fn zoom(&self) -> Option<&ZoomTween> {
        self.zoom.as_ref()
    }

    /// The running fling, if any.
    #[must_use]
    pub fn fling(&self) -> Option<&FlingTask> {
        self.fling.as_ref()
    }

    /// Returns `true` when nothing is running.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.zoom.is_none() && self.fling.is_none()
    }

    /// Steps every running task for time `now_ms`, dropping finished ones.
    pub fn advance(&mut self, now_ms: u64, target: &mut impl AnimationTarget) -> Progress {
        if let Some(zoom) = &mut self.zoom {
            if zoom.advance(now_ms, target) == Progress::Done {
                self.zoom = None;
            }
        }
        if let Some(fling) = &mut self.fling {
            if fling.advance(now_ms, target) == Progress::Done {
                self.fling = None;
            }
        }
        if self.is_idle() {
            Progress::Done
        } else {
            Progress::Continue
        }
    }
}
