// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::{AnimationTarget, Progress, Scroller, ScrollerConfig};

/// Scrollable range of one axis, in scroll-offset coordinates.
///
/// A scroll offset is the negated content position: `0` means the leading
/// content edge sits on the leading viewport edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingRange {
    /// Offset at the start of the fling.
    pub start: f64,
    /// Smallest reachable offset.
    pub min: f64,
    /// Largest reachable offset.
    pub max: f64,
}

impl FlingRange {
    /// Range of content spanning `content_start..content_start + content_extent`
    /// inside a viewport of `viewport_extent`.
    ///
    /// Content no larger than the viewport cannot move.
    #[must_use]
    pub fn new(content_start: f64, content_extent: f64, viewport_extent: f64) -> Self {
        let start = -content_start;
        if viewport_extent < content_extent {
            Self {
                start,
                min: 0.0,
                max: content_extent - viewport_extent,
            }
        } else {
            Self {
                start,
                min: start,
                max: start,
            }
        }
    }

    /// Returns `true` if the range allows no movement.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        self.min == self.max
    }
}

/// Inertial scroll after a release, driving a [`Scroller`].
///
/// The scroller starts at the first [`advance`](Self::advance); each step
/// pans the target by the change in scroll offset since the previous step.
#[derive(Clone, Copy, Debug)]
pub struct FlingTask {
    horizontal: FlingRange,
    vertical: FlingRange,
    velocity: Vec2,
    scroller: Scroller,
    current: Point,
    started: bool,
}

impl FlingTask {
    /// Plans a fling of content at `display_rect` inside `viewport`.
    ///
    /// `velocity` is in scroll-offset space, which is the negated pointer
    /// velocity. Returns `None` when neither axis can move.
    #[must_use]
    pub fn new(
        display_rect: Rect,
        viewport: Size,
        velocity: Vec2,
        config: ScrollerConfig,
    ) -> Option<Self> {
        let horizontal = FlingRange::new(display_rect.x0, display_rect.width(), viewport.width);
        let vertical = FlingRange::new(display_rect.y0, display_rect.height(), viewport.height);
        if horizontal.is_fixed() && vertical.is_fixed() {
            log::debug!("content cannot scroll, skipping fling");
            return None;
        }
        Some(Self {
            horizontal,
            vertical,
            velocity,
            scroller: Scroller::new(config),
            current: Point::new(horizontal.start, vertical.start),
            started: false,
        })
    }

    /// Horizontal range.
    #[must_use]
    pub fn horizontal(&self) -> FlingRange {
        self.horizontal
    }

    /// Vertical range.
    #[must_use]
    pub fn vertical(&self) -> FlingRange {
        self.vertical
    }

    /// Stops the fling where it is.
    pub fn cancel(&mut self) {
        self.scroller.force_finished();
        self.started = true;
    }

    /// Returns `true` once the fling has stopped or was cancelled.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.started && self.scroller.is_finished()
    }

    /// Applies one step for time `now_ms`.
    pub fn advance(&mut self, now_ms: u64, target: &mut impl AnimationTarget) -> Progress {
        if !self.started {
            self.started = true;
            self.scroller.fling(
                now_ms,
                self.current,
                self.velocity,
                Point::new(self.horizontal.min, self.vertical.min),
                Point::new(self.horizontal.max, self.vertical.max),
            );
        }
        if self.scroller.is_finished() || !self.scroller.compute_offset(now_ms) {
            return Progress::Done;
        }
        let next = self.scroller.current();
        let delta = self.current - next;
        self.current = next;
        log::trace!("fling step {delta:?}");
        target.apply_translate(delta);
        Progress::Continue
    }
}
