// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tap, double-tap, long-press and single-pointer fling detection.
//!
//! Some of these gestures are only known once time has passed without
//! further input: a single tap is confirmed when no second tap follows within
//! the double-tap timeout, and a long press fires when a pointer stays down
//! long enough. The detector is driven by the host clock through
//! [`TapDetector::poll`]; [`TapDetector::process_event`] also polls at each
//! event's timestamp, so deadlines that passed between events are honored in
//! order.

use kurbo::{Point, Vec2};

use crate::GestureConfig;
use crate::event::{PointerAction, PointerEvent};
use crate::velocity::VelocityTracker;

/// A gesture produced by [`TapDetector`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TapGesture {
    /// A tap that is not the first half of a double tap.
    SingleTapConfirmed(Point),
    /// A second tap landed close to the first one in time and space.
    ///
    /// Carries the down position of the first tap.
    DoubleTap(Point),
    /// A pointer stayed down without moving past the touch slop.
    LongPress(Point),
    /// A gesture ended with a fast release.
    Fling {
        /// Down position of the gesture.
        start: Point,
        /// Up position of the gesture.
        end: Point,
        /// Pointer velocity at release, in units per second.
        velocity: Vec2,
        /// Whether more than one pointer was down at some point.
        multi_pointer: bool,
    },
}

#[derive(Clone, Copy, Debug)]
struct Stamp {
    time_ms: u64,
    position: Point,
}

#[derive(Clone, Copy, Debug)]
struct PendingTap {
    deadline_ms: u64,
    position: Point,
}

/// Timer-driven tap detector.
#[derive(Clone, Debug)]
pub struct TapDetector {
    config: GestureConfig,
    velocity: VelocityTracker,
    current_down: Option<Stamp>,
    previous_down: Option<Stamp>,
    previous_up_ms: Option<u64>,
    pending_tap: Option<PendingTap>,
    long_press_deadline_ms: Option<u64>,
    still_down: bool,
    in_long_press: bool,
    double_tapping: bool,
    defer_confirm: bool,
    in_tap_region: bool,
    in_double_tap_region: bool,
    multi_pointer: bool,
}

impl TapDetector {
    /// Creates a detector with the given thresholds.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            velocity: VelocityTracker::new(),
            current_down: None,
            previous_down: None,
            previous_up_ms: None,
            pending_tap: None,
            long_press_deadline_ms: None,
            still_down: false,
            in_long_press: false,
            double_tapping: false,
            defer_confirm: false,
            in_tap_region: false,
            in_double_tap_region: false,
            multi_pointer: false,
        }
    }

    /// The earliest time at which [`poll`](Self::poll) may report something.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        let tap = self.pending_tap.map(|p| p.deadline_ms);
        match (tap, self.long_press_deadline_ms) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Returns `true` if a confirmation or long press is still outstanding.
    #[must_use]
    pub fn has_pending_deadline(&self) -> bool {
        self.next_deadline().is_some()
    }

    /// Fires every deadline that is due at `now_ms`, earliest first.
    pub fn poll(&mut self, now_ms: u64, out: &mut impl Extend<TapGesture>) {
        while let Some(deadline) = self.next_deadline() {
            if deadline > now_ms {
                break;
            }
            let tap_first = self
                .pending_tap
                .is_some_and(|p| p.deadline_ms == deadline);
            if tap_first {
                self.fire_tap_timeout(out);
            } else {
                self.fire_long_press(out);
            }
        }
    }

    /// Feeds one event and appends recognized gestures to `out`.
    ///
    /// Returns `true` if any gesture was recognized.
    pub fn process_event(
        &mut self,
        event: &PointerEvent,
        out: &mut impl Extend<TapGesture>,
    ) -> bool {
        let mut emitted = Counted { inner: out, count: 0 };
        self.poll(event.time_ms, &mut emitted);
        if event.pointer_count() > 1 {
            self.multi_pointer = true;
        }

        let position = event.primary_position();
        match event.action {
            PointerAction::Down => self.on_down(event.time_ms, position, &mut emitted),
            PointerAction::PointerDown { .. } => self.cancel_taps(),
            PointerAction::PointerUp { .. } => {}
            PointerAction::Move => self.on_move(event.time_ms, position),
            PointerAction::Up => self.on_up(event.time_ms, position, &mut emitted),
            PointerAction::Cancel => self.cancel(),
        }
        emitted.count > 0
    }

    fn on_down(&mut self, time_ms: u64, position: Point, out: &mut impl Extend<TapGesture>) {
        let had_pending_tap = self.pending_tap.take().is_some();
        let down = Stamp { time_ms, position };

        match (self.previous_down, self.previous_up_ms) {
            (Some(first_down), Some(first_up_ms))
                if had_pending_tap && self.is_double_tap(first_down, first_up_ms, down) =>
            {
                log::debug!("double tap at {:?}", first_down.position);
                self.double_tapping = true;
                out.extend([TapGesture::DoubleTap(first_down.position)]);
            }
            _ => {
                self.pending_tap = Some(PendingTap {
                    deadline_ms: time_ms.saturating_add(self.config.double_tap_timeout_ms),
                    position,
                });
            }
        }

        self.current_down = Some(down);
        self.in_tap_region = true;
        self.in_double_tap_region = true;
        self.still_down = true;
        self.in_long_press = false;
        self.defer_confirm = false;
        self.long_press_deadline_ms =
            Some(time_ms.saturating_add(self.config.long_press_timeout_ms));

        self.velocity.clear();
        self.velocity.add_movement(time_ms, position);
    }

    fn on_move(&mut self, time_ms: u64, position: Point) {
        self.velocity.add_movement(time_ms, position);
        if self.in_long_press || !self.in_tap_region {
            return;
        }
        let Some(down) = self.current_down else {
            return;
        };
        let distance = (position - down.position).hypot();
        if distance > self.config.touch_slop {
            self.in_tap_region = false;
            self.pending_tap = None;
            self.long_press_deadline_ms = None;
        }
        if distance > self.config.double_tap_slop {
            self.in_double_tap_region = false;
        }
    }

    fn on_up(&mut self, time_ms: u64, position: Point, out: &mut impl Extend<TapGesture>) {
        self.still_down = false;
        self.velocity.add_movement(time_ms, position);

        if self.double_tapping {
            // The second tap of a double tap has already been reported.
        } else if self.in_long_press {
            self.pending_tap = None;
            self.in_long_press = false;
        } else if self.in_tap_region {
            if self.defer_confirm {
                out.extend([TapGesture::SingleTapConfirmed(position)]);
            }
        } else {
            let velocity = self.velocity.velocity(self.config.max_fling_velocity);
            let min = self.config.min_fling_velocity;
            if velocity.x.abs() > min || velocity.y.abs() > min {
                let start = self.current_down.map_or(position, |d| d.position);
                out.extend([TapGesture::Fling {
                    start,
                    end: position,
                    velocity,
                    multi_pointer: self.multi_pointer,
                }]);
            }
        }

        self.previous_down = self.current_down;
        self.previous_up_ms = Some(time_ms);
        self.velocity.clear();
        self.double_tapping = false;
        self.defer_confirm = false;
        self.multi_pointer = false;
        self.long_press_deadline_ms = None;
    }

    fn is_double_tap(&self, first_down: Stamp, first_up_ms: u64, second_down: Stamp) -> bool {
        if !self.in_double_tap_region {
            return false;
        }
        let Some(gap) = second_down.time_ms.checked_sub(first_up_ms) else {
            return false;
        };
        if gap > self.config.double_tap_timeout_ms || gap < self.config.double_tap_min_time_ms {
            return false;
        }
        (second_down.position - first_down.position).hypot() < self.config.double_tap_slop
    }

    fn fire_tap_timeout(&mut self, out: &mut impl Extend<TapGesture>) {
        let Some(pending) = self.pending_tap.take() else {
            return;
        };
        if self.still_down {
            self.defer_confirm = true;
        } else {
            out.extend([TapGesture::SingleTapConfirmed(pending.position)]);
        }
    }

    fn fire_long_press(&mut self, out: &mut impl Extend<TapGesture>) {
        self.long_press_deadline_ms = None;
        let Some(down) = self.current_down else {
            return;
        };
        log::debug!("long press at {:?}", down.position);
        self.pending_tap = None;
        self.defer_confirm = false;
        self.in_long_press = true;
        out.extend([TapGesture::LongPress(down.position)]);
    }

    fn cancel_taps(&mut self) {
        self.pending_tap = None;
        self.long_press_deadline_ms = None;
        self.double_tapping = false;
        self.in_tap_region = false;
        self.in_double_tap_region = false;
        self.defer_confirm = false;
        self.in_long_press = false;
    }

    fn cancel(&mut self) {
        self.cancel_taps();
        self.velocity.clear();
        self.still_down = false;
        self.multi_pointer = false;
    }
}

/// Forwards to an inner sink while counting items.
struct Counted<'a, E> {
    inner: &'a mut E,
    count: usize,
}

impl<E: Extend<TapGesture>> Extend<TapGesture> for Counted<'_, E> {
    fn extend<I: IntoIterator<Item = TapGesture>>(&mut self, iter: I) {
        let count = &mut self.count;
        self.inner.extend(iter.into_iter().inspect(|_| *count += 1));
    }
}
