// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: touch-slop gating and per-move deltas.
//!
//! ## Usage
//!
//! 1) Call [`DragState::start`] with the down position.
//! 2) On each move, call [`DragState::update`]. It returns `None` until the
//!    pointer has travelled at least the touch slop from the down position,
//!    then the delta since the last reported position.
//! 3) When the tracked pointer changes, call [`DragState::resync`] so the next
//!    delta is measured from the new pointer.
//! 4) End with [`DragState::end`].
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use loupe_gesture::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 10.0));
//!
//! // Within slop: nothing yet.
//! assert_eq!(drag.update(Point::new(12.0, 10.0), 8.0), None);
//!
//! // Crossing the slop reports everything since the down position.
//! assert_eq!(drag.update(Point::new(20.0, 10.0), 8.0), Some(Vec2::new(10.0, 0.0)));
//! assert!(drag.is_dragging());
//! ```

use kurbo::{Point, Vec2};

/// Tracks one pointer from down to up.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Position of the down event.
    pub start_pos: Option<Point>,
    /// Last position a delta was measured from.
    pub last_pos: Option<Point>,
    dragging: bool,
}

impl DragState {
    /// Starts tracking from `pos`. Any previous drag is discarded.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.dragging = false;
    }

    /// Feeds a new position and returns the delta to apply, if any.
    ///
    /// Before the drag has started, the total travel since down is compared
    /// against `slop`. The first delta covers all of that travel.
    pub fn update(&mut self, pos: Point, slop: f64) -> Option<Vec2> {
        let last = self.last_pos?;
        if !self.dragging {
            let travelled = self.total_offset(pos)?;
            self.dragging = travelled.hypot() >= slop;
        }
        if self.dragging {
            self.last_pos = Some(pos);
            Some(pos - last)
        } else {
            None
        }
    }

    /// Moves the reference position without reporting a delta.
    pub fn resync(&mut self, pos: Point) {
        if self.is_tracking() {
            self.last_pos = Some(pos);
        }
    }

    /// Total offset of `current_pos` from the down position.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Ends the current drag and resets state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.dragging = false;
    }

    /// Returns `true` while a pointer is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the touch slop has been crossed.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SLOP: f64 = 8.0;

    #[test]
    fn new_drag_state_is_idle() {
        let drag = DragState::default();
        assert!(!drag.is_tracking());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn update_without_start_returns_none() {
        let mut drag = DragState::default();
        assert_eq!(drag.update(Point::new(100.0, 100.0), SLOP), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn slop_measures_travel_since_down() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));

        // Several small moves that individually stay under the slop.
        assert_eq!(drag.update(Point::new(3.0, 0.0), SLOP), None);
        assert_eq!(drag.update(Point::new(6.0, 0.0), SLOP), None);
        assert_eq!(drag.last_pos, Some(Point::new(0.0, 0.0)));

        // The sum crosses it and is reported in one delta.
        assert_eq!(
            drag.update(Point::new(6.0, 6.0), SLOP),
            Some(Vec2::new(6.0, 6.0))
        );
        assert!(drag.is_dragging());
    }

    #[test]
    fn deltas_are_incremental_once_dragging() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(10.0, 0.0), SLOP);

        assert_eq!(
            drag.update(Point::new(11.0, 2.0), SLOP),
            Some(Vec2::new(1.0, 2.0))
        );
        assert_eq!(
            drag.update(Point::new(11.0, 2.0), SLOP),
            Some(Vec2::new(0.0, 0.0))
        );
    }

    #[test]
    fn resync_avoids_jump() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(20.0, 0.0), SLOP);

        // A different finger takes over far away.
        drag.resync(Point::new(200.0, 300.0));
        assert_eq!(
            drag.update(Point::new(201.0, 300.0), SLOP),
            Some(Vec2::new(1.0, 0.0))
        );
    }

    #[test]
    fn total_offset_and_end() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0));
        assert_eq!(
            drag.total_offset(Point::new(20.0, 35.0)),
            Some(Vec2::new(10.0, 15.0))
        );

        drag.end();
        assert!(!drag.is_tracking());
        assert_eq!(drag.total_offset(Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn resync_before_start_is_ignored() {
        let mut drag = DragState::default();
        drag.resync(Point::new(5.0, 5.0));
        assert!(drag.last_pos.is_none());
        assert_eq!(drag.update(Point::new(50.0, 5.0), SLOP), None);
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(50.0, 0.0), SLOP);
        assert!(drag.is_dragging());

        drag.start(Point::new(5.0, 5.0));
        assert!(!drag.is_dragging());
        assert_eq!(drag.start_pos, drag.last_pos);
    }
}
