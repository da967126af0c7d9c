// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-pointer pinch detection.
//!
//! [`ScaleDetector`] watches the spread of all pointers that are down. Once at
//! least two are down and their span reaches the configured minimum, a pinch
//! is in progress and every move reports the ratio between the current and
//! previous span, together with the pointers' centroid as the focus.
//!
//! Adding or lifting a pointer re-bases the span without reporting a step, so
//! pointer-count changes never produce a jump. A pinch whose span collapses
//! below the minimum ends instead of reporting a zero factor.

use kurbo::{Point, Vec2};

use crate::event::{PointerAction, PointerEvent};

/// Smallest span a pinch can run at, whatever the configured minimum.
const SPAN_FLOOR: f64 = 1e-6;

/// One reported pinch step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleStep {
    /// Ratio of the current span to the previous span.
    ///
    /// May be NaN or infinite on degenerate input; callers filter these.
    pub factor: f64,
    /// Centroid of the pointers in viewport coordinates.
    pub focus: Point,
}

/// Pinch detector over a raw pointer stream.
#[derive(Clone, Debug, Default)]
pub struct ScaleDetector {
    in_progress: bool,
    prev_span: f64,
    focus: Point,
    min_span: f64,
}

impl ScaleDetector {
    /// Creates a detector that starts a pinch once the span reaches `min_span`.
    #[must_use]
    pub fn new(min_span: f64) -> Self {
        Self {
            min_span,
            ..Self::default()
        }
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.in_progress
    }

    /// Focus of the current or most recent pinch.
    #[must_use]
    pub fn focus(&self) -> Point {
        self.focus
    }

    /// Feeds one event, returning a step if the pinch moved.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<ScaleStep> {
        if event.ends_gesture() || matches!(event.action, PointerAction::Down) {
            self.end();
            return None;
        }

        let (focus, span, count) = measure(event);
        self.focus = focus;

        match event.action {
            PointerAction::PointerDown { .. } | PointerAction::PointerUp { .. } => {
                if count < 2 {
                    self.end();
                } else {
                    self.prev_span = span;
                    self.try_begin(span);
                }
                None
            }
            PointerAction::Move => {
                if !self.in_progress {
                    if count >= 2 {
                        self.try_begin(span);
                    }
                    return None;
                }
                if span < self.span_floor() {
                    self.end();
                    return None;
                }
                let factor = span / self.prev_span;
                self.prev_span = span;
                Some(ScaleStep { factor, focus })
            }
            PointerAction::Down | PointerAction::Up | PointerAction::Cancel => None,
        }
    }

    fn try_begin(&mut self, span: f64) {
        if !self.in_progress && span >= self.span_floor() {
            log::trace!("pinch begins at span {span}");
            self.in_progress = true;
            self.prev_span = span;
        }
    }

    fn span_floor(&self) -> f64 {
        self.min_span.max(SPAN_FLOOR)
    }

    fn end(&mut self) {
        if self.in_progress {
            log::trace!("pinch ends");
        }
        self.in_progress = false;
        self.prev_span = 0.0;
    }
}

/// Centroid, span and count of the pointers that remain down.
///
/// The span is the diagonal of twice the mean absolute deviation on each
/// axis, which equals the pointer distance for two pointers.
fn measure(event: &PointerEvent) -> (Point, f64, usize) {
    let mut sum = Vec2::ZERO;
    let mut count = 0_usize;
    for p in event.remaining() {
        sum += p.position.to_vec2();
        count += 1;
    }
    if count == 0 {
        return (event.primary_position(), 0.0, 0);
    }
    let n = count as f64;
    let focus = (sum / n).to_point();

    let mut dev = Vec2::ZERO;
    for p in event.remaining() {
        dev.x += (p.position.x - focus.x).abs();
        dev.y += (p.position.y - focus.y).abs();
    }
    let span = (dev / n * 2.0).hypot();
    (focus, span, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Pointer;

    fn two(action: PointerAction, a: (f64, f64), b: (f64, f64)) -> PointerEvent {
        PointerEvent::new(action, 0, [Pointer::new(1, a), Pointer::new(2, b)])
    }

    #[test]
    fn single_pointer_never_scales() {
        let mut det = ScaleDetector::new(0.0);
        assert_eq!(det.on_event(&PointerEvent::down(0, 1, (0.0, 0.0))), None);
        assert_eq!(det.on_event(&PointerEvent::moved(1, 1, (50.0, 0.0))), None);
        assert!(!det.is_in_progress());
    }

    #[test]
    fn spreading_two_pointers_reports_ratio_about_centroid() {
        let mut det = ScaleDetector::new(0.0);
        det.on_event(&PointerEvent::down(0, 1, (0.0, 0.0)));
        det.on_event(&two(
            PointerAction::PointerDown { index: 1 },
            (0.0, 0.0),
            (100.0, 0.0),
        ));
        assert!(det.is_in_progress());

        let step = det
            .on_event(&two(PointerAction::Move, (-50.0, 0.0), (150.0, 0.0)))
            .unwrap();
        assert!((step.factor - 2.0).abs() < 1e-12);
        assert_eq!(step.focus, Point::new(50.0, 0.0));

        // Next step is relative to the previous span.
        let step = det
            .on_event(&two(PointerAction::Move, (0.0, 0.0), (100.0, 0.0)))
            .unwrap();
        assert!((step.factor - 0.5).abs() < 1e-12);
    }

    #[test]
    fn lifting_second_pointer_ends_pinch() {
        let mut det = ScaleDetector::new(0.0);
        det.on_event(&two(
            PointerAction::PointerDown { index: 1 },
            (0.0, 0.0),
            (100.0, 0.0),
        ));
        assert!(det.is_in_progress());
        det.on_event(&two(
            PointerAction::PointerUp { index: 1 },
            (0.0, 0.0),
            (100.0, 0.0),
        ));
        assert!(!det.is_in_progress());
    }

    #[test]
    fn min_span_delays_start() {
        let mut det = ScaleDetector::new(80.0);
        det.on_event(&two(
            PointerAction::PointerDown { index: 1 },
            (0.0, 0.0),
            (40.0, 0.0),
        ));
        assert!(!det.is_in_progress());
        assert_eq!(
            det.on_event(&two(PointerAction::Move, (0.0, 0.0), (90.0, 0.0))),
            None
        );
        assert!(det.is_in_progress());
    }

    #[test]
    fn pointers_meeting_end_the_pinch() {
        let mut det = ScaleDetector::new(0.0);
        det.on_event(&two(
            PointerAction::PointerDown { index: 1 },
            (100.0, 0.0),
            (200.0, 0.0),
        ));
        assert_eq!(
            det.on_event(&two(PointerAction::Move, (150.0, 0.0), (150.0, 0.0))),
            None
        );
        assert!(!det.is_in_progress());

        // Spreading again starts a fresh pinch without a step.
        assert_eq!(
            det.on_event(&two(PointerAction::Move, (140.0, 0.0), (160.0, 0.0))),
            None
        );
        assert!(det.is_in_progress());
        let step = det
            .on_event(&two(PointerAction::Move, (130.0, 0.0), (170.0, 0.0)))
            .unwrap();
        assert!((step.factor - 2.0).abs() < 1e-12);
    }

    #[test]
    fn span_below_min_ends_the_pinch() {
        let mut det = ScaleDetector::new(50.0);
        det.on_event(&two(
            PointerAction::PointerDown { index: 1 },
            (0.0, 0.0),
            (100.0, 0.0),
        ));
        assert!(det.is_in_progress());
        assert_eq!(
            det.on_event(&two(PointerAction::Move, (0.0, 0.0), (40.0, 0.0))),
            None
        );
        assert!(!det.is_in_progress());
    }

    #[test]
    fn cancel_resets() {
        let mut det = ScaleDetector::new(0.0);
        det.on_event(&two(
            PointerAction::PointerDown { index: 1 },
            (0.0, 0.0),
            (100.0, 0.0),
        ));
        det.on_event(&PointerEvent::cancel(5, 1, (0.0, 0.0)));
        assert!(!det.is_in_progress());
    }
}
