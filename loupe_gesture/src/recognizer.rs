// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag, pinch and fling recognition over a raw pointer stream.

use kurbo::{Point, Vec2};

use crate::GestureConfig;
use crate::drag::DragState;
use crate::event::{PointerAction, PointerEvent, PointerId};
use crate::scale::ScaleDetector;
use crate::velocity::VelocityTracker;

/// A high-level gesture produced by [`GestureRecognizer`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// The active pointer moved by this delta while dragging.
    Drag(Vec2),
    /// A pinch step: multiply the current scale by `factor` about `focus`.
    ///
    /// `factor` is always finite and positive.
    Scale {
        /// Incremental scale factor.
        factor: f64,
        /// Point held fixed, in viewport coordinates.
        focus: Point,
    },
    /// A drag was released fast enough to throw the content.
    Fling {
        /// Last position of the active pointer.
        position: Point,
        /// Throw velocity in units per second.
        ///
        /// This is the negated pointer velocity, so it points the way the
        /// visible window should travel over the content.
        velocity: Vec2,
    },
}

/// Turns raw pointer events into [`Gesture`]s.
///
/// One pointer is designated *active* and drives drag tracking; when it is
/// lifted while others remain down, the next remaining pointer takes over and
/// the reference position is re-synchronized so that the switch does not
/// produce a jump. A separate [`ScaleDetector`] sees the same stream.
///
/// ```
/// use kurbo::Vec2;
/// use loupe_gesture::{Gesture, GestureConfig, GestureRecognizer, PointerEvent};
///
/// let mut recognizer = GestureRecognizer::new(GestureConfig::default());
/// let mut out = Vec::new();
/// recognizer.process_event(&PointerEvent::down(0, 1, (100.0, 100.0)), &mut out);
/// recognizer.process_event(&PointerEvent::moved(16, 1, (120.0, 100.0)), &mut out);
/// assert_eq!(out, vec![Gesture::Drag(Vec2::new(20.0, 0.0))]);
/// assert!(recognizer.is_dragging());
/// ```
#[derive(Clone, Debug)]
pub struct GestureRecognizer {
    config: GestureConfig,
    scale: ScaleDetector,
    drag: DragState,
    velocity: VelocityTracker,
    tracking_velocity: bool,
    active: Option<PointerId>,
}

impl GestureRecognizer {
    /// Creates a recognizer with the given thresholds.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            scale: ScaleDetector::new(config.min_scale_span),
            drag: DragState::default(),
            velocity: VelocityTracker::new(),
            tracking_velocity: false,
            active: None,
        }
    }

    /// Thresholds in use.
    #[must_use]
    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Returns `true` while a pinch is in progress.
    #[must_use]
    pub fn is_scaling(&self) -> bool {
        self.scale.is_in_progress()
    }

    /// Returns `true` once the active pointer has crossed the touch slop.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The pointer currently driving drag tracking, if any.
    #[must_use]
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active
    }

    /// Feeds one event and appends any recognized gestures to `out`.
    ///
    /// Pinch steps are reported before drag or fling for the same event.
    /// Returns whether the event was consumed, which is always the case.
    pub fn process_event(&mut self, event: &PointerEvent, out: &mut impl Extend<Gesture>) -> bool {
        if let Some(step) = self.scale.on_event(event) {
            if step.factor.is_finite() && step.factor > 0.0 {
                out.extend([Gesture::Scale {
                    factor: step.factor,
                    focus: step.focus,
                }]);
            } else {
                log::trace!("dropping degenerate scale factor {}", step.factor);
            }
        }

        match event.action {
            PointerAction::Down => {
                self.active = event.id(0);
                let pos = self.active_position(event);
                self.velocity.clear();
                self.velocity.add_movement(event.time_ms, pos);
                self.tracking_velocity = true;
                self.drag.start(pos);
            }
            PointerAction::Move => {
                let pos = self.active_position(event);
                if let Some(delta) = self.drag.update(pos, self.config.touch_slop) {
                    out.extend([Gesture::Drag(delta)]);
                    if self.tracking_velocity {
                        self.velocity.add_movement(event.time_ms, pos);
                    }
                }
            }
            PointerAction::Cancel => {
                self.active = None;
                self.discard_velocity();
                self.drag.end();
            }
            PointerAction::Up => {
                if self.drag.is_dragging() && self.tracking_velocity {
                    let pos = self.active_position(event);
                    self.velocity.add_movement(event.time_ms, pos);
                    let v = self.velocity.velocity(self.config.max_fling_velocity);
                    if v.x.abs().max(v.y.abs()) >= self.config.min_fling_velocity {
                        log::debug!("fling released at {pos:?} with velocity {v:?}");
                        out.extend([Gesture::Fling {
                            position: pos,
                            velocity: -v,
                        }]);
                    }
                }
                self.active = None;
                self.discard_velocity();
                self.drag.end();
            }
            PointerAction::PointerUp { index } => {
                if event.id(index).is_some() && event.id(index) == self.active {
                    let new_index = if index == 0 { 1 } else { 0 };
                    self.active = event.id(new_index);
                    if let Some(pos) = event.position(new_index) {
                        self.drag.resync(pos);
                    }
                }
            }
            PointerAction::PointerDown { .. } => {}
        }
        true
    }

    /// Position of the active pointer, falling back to the primary pointer
    /// when the active pointer is not part of this event.
    fn active_position(&self, event: &PointerEvent) -> Point {
        self.active
            .and_then(|id| event.find_index(id))
            .and_then(|index| event.position(index))
            .unwrap_or_else(|| event.primary_position())
    }

    fn discard_velocity(&mut self) {
        self.velocity.clear();
        self.tracking_velocity = false;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::event::Pointer;

    fn recognizer() -> GestureRecognizer {
        GestureRecognizer::new(GestureConfig::default())
    }

    fn feed(r: &mut GestureRecognizer, ev: PointerEvent) -> Vec<Gesture> {
        let mut out = Vec::new();
        assert!(r.process_event(&ev, &mut out));
        out
    }

    #[test]
    fn small_moves_stay_below_slop() {
        let mut r = recognizer();
        feed(&mut r, PointerEvent::down(0, 1, (0.0, 0.0)));
        assert!(feed(&mut r, PointerEvent::moved(10, 1, (3.0, 4.0))).is_empty());
        assert!(!r.is_dragging());
    }

    #[test]
    fn fast_release_flings_with_inverted_velocity() {
        let mut r = recognizer();
        feed(&mut r, PointerEvent::down(0, 1, (0.0, 0.0)));
        for i in 1..=5_u32 {
            feed(
                &mut r,
                PointerEvent::moved(u64::from(i) * 10, 1, (f64::from(i) * 20.0, 0.0)),
            );
        }
        let out = feed(&mut r, PointerEvent::up(60, 1, (120.0, 0.0)));
        match out.as_slice() {
            [Gesture::Fling { position, velocity }] => {
                assert_eq!(*position, Point::new(120.0, 0.0));
                assert!(velocity.x < -1_000.0, "got {velocity:?}");
                assert_eq!(velocity.y, 0.0);
            }
            other => panic!("expected a fling, got {other:?}"),
        }
        assert_eq!(r.active_pointer(), None);
    }

    #[test]
    fn slow_release_does_not_fling() {
        let mut r = recognizer();
        feed(&mut r, PointerEvent::down(0, 1, (0.0, 0.0)));
        feed(&mut r, PointerEvent::moved(10, 1, (20.0, 0.0)));
        // Pointer rests before lifting.
        let out = feed(&mut r, PointerEvent::up(500, 1, (20.0, 0.0)));
        assert!(out.is_empty());
    }

    #[test]
    fn cancel_never_flings() {
        let mut r = recognizer();
        feed(&mut r, PointerEvent::down(0, 1, (0.0, 0.0)));
        for i in 1..=5_u32 {
            feed(
                &mut r,
                PointerEvent::moved(u64::from(i) * 10, 1, (f64::from(i) * 20.0, 0.0)),
            );
        }
        let out = feed(&mut r, PointerEvent::cancel(60, 1, (120.0, 0.0)));
        assert!(out.is_empty());
        assert_eq!(r.active_pointer(), None);
        // A later up without a new down has nothing to report.
        assert!(feed(&mut r, PointerEvent::up(70, 1, (130.0, 0.0))).is_empty());
    }

    #[test]
    fn lifting_active_pointer_hands_over_without_jump() {
        let mut r = recognizer();
        feed(&mut r, PointerEvent::down(0, 1, (0.0, 0.0)));
        feed(&mut r, PointerEvent::moved(10, 1, (20.0, 0.0)));
        feed(
            &mut r,
            PointerEvent::new(
                PointerAction::PointerDown { index: 1 },
                20,
                [Pointer::new(1, (20.0, 0.0)), Pointer::new(2, (400.0, 400.0))],
            ),
        );
        feed(
            &mut r,
            PointerEvent::new(
                PointerAction::PointerUp { index: 0 },
                30,
                [Pointer::new(1, (20.0, 0.0)), Pointer::new(2, (400.0, 400.0))],
            ),
        );
        assert_eq!(r.active_pointer(), Some(PointerId(2)));

        let out = feed(&mut r, PointerEvent::moved(40, 2, (405.0, 400.0)));
        assert_eq!(out, [Gesture::Drag(Vec2::new(5.0, 0.0))]);
    }

    #[test]
    fn lifting_other_pointer_keeps_active() {
        let mut r = recognizer();
        feed(&mut r, PointerEvent::down(0, 1, (0.0, 0.0)));
        feed(
            &mut r,
            PointerEvent::new(
                PointerAction::PointerUp { index: 1 },
                30,
                [Pointer::new(1, (0.0, 0.0)), Pointer::new(2, (50.0, 50.0))],
            ),
        );
        assert_eq!(r.active_pointer(), Some(PointerId(1)));
    }

    #[test]
    fn pinch_reports_scale_before_drag() {
        let mut r = recognizer();
        feed(&mut r, PointerEvent::down(0, 1, (0.0, 0.0)));
        feed(
            &mut r,
            PointerEvent::new(
                PointerAction::PointerDown { index: 1 },
                10,
                [Pointer::new(1, (0.0, 0.0)), Pointer::new(2, (100.0, 0.0))],
            ),
        );
        assert!(r.is_scaling());
        let out = feed(
            &mut r,
            PointerEvent::new(
                PointerAction::Move,
                20,
                [Pointer::new(1, (-20.0, 0.0)), Pointer::new(2, (120.0, 0.0))],
            ),
        );
        match out.as_slice() {
            [Gesture::Scale { factor, focus }, Gesture::Drag(_)] => {
                assert!((factor - 1.4).abs() < 1e-12);
                assert_eq!(*focus, Point::new(50.0, 0.0));
            }
            other => panic!("unexpected gestures {other:?}"),
        }
    }

    #[test]
    fn coincident_pointers_never_report_a_factor() {
        let mut r = recognizer();
        feed(&mut r, PointerEvent::down(0, 1, (10.0, 10.0)));
        feed(
            &mut r,
            PointerEvent::new(
                PointerAction::PointerDown { index: 1 },
                10,
                [Pointer::new(1, (10.0, 10.0)), Pointer::new(2, (10.0, 10.0))],
            ),
        );
        let out = feed(
            &mut r,
            PointerEvent::new(
                PointerAction::Move,
                20,
                [Pointer::new(1, (10.0, 10.0)), Pointer::new(2, (10.0, 10.0))],
            ),
        );
        assert!(
            out.iter().all(|g| !matches!(g, Gesture::Scale { .. })),
            "got {out:?}"
        );
    }

    #[test]
    fn active_pointer_missing_falls_back_to_primary() {
        let mut r = recognizer();
        feed(&mut r, PointerEvent::down(0, 1, (0.0, 0.0)));
        // Host delivers a move that no longer lists pointer 1.
        let out = feed(&mut r, PointerEvent::moved(10, 9, (30.0, 0.0)));
        assert_eq!(out, [Gesture::Drag(Vec2::new(30.0, 0.0))]);
    }
}
