// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw multi-touch input as delivered by the host.
//!
//! A [`PointerEvent`] carries every pointer that is down at the time of the
//! event, ordered by index. Indices are only meaningful within one event;
//! [`PointerId`]s are stable for the lifetime of a touch.

use kurbo::Point;
use smallvec::SmallVec;

/// Stable identifier of one touch for as long as it stays down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u32);

/// One active pointer within a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    /// Identifier of the touch.
    pub id: PointerId,
    /// Position in viewport coordinates.
    pub position: Point,
}

impl Pointer {
    /// Creates a pointer with the given id at `position`.
    #[must_use]
    pub fn new(id: u32, position: impl Into<Point>) -> Self {
        Self {
            id: PointerId(id),
            position: position.into(),
        }
    }
}

/// What happened to the pointer set in a [`PointerEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// The first pointer went down.
    Down,
    /// An additional pointer went down; `index` is its index in the event.
    PointerDown {
        /// Index of the new pointer.
        index: usize,
    },
    /// One or more pointers moved.
    Move,
    /// A non-final pointer went up; `index` is its index in the event.
    ///
    /// The lifted pointer is still listed in the event.
    PointerUp {
        /// Index of the lifted pointer.
        index: usize,
    },
    /// The final pointer went up. It is still listed in the event.
    Up,
    /// The host aborted the gesture.
    Cancel,
}

/// A raw pointer event.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// The kind of event.
    pub action: PointerAction,
    /// Host timestamp in milliseconds.
    pub time_ms: u64,
    /// All pointers currently down, by index.
    pub pointers: SmallVec<[Pointer; 4]>,
}

impl PointerEvent {
    /// Creates an event from its parts.
    #[must_use]
    pub fn new(
        action: PointerAction,
        time_ms: u64,
        pointers: impl IntoIterator<Item = Pointer>,
    ) -> Self {
        Self {
            action,
            time_ms,
            pointers: pointers.into_iter().collect(),
        }
    }

    /// First pointer down.
    #[must_use]
    pub fn down(time_ms: u64, id: u32, position: impl Into<Point>) -> Self {
        Self::new(PointerAction::Down, time_ms, [Pointer::new(id, position)])
    }

    /// Single-pointer move.
    #[must_use]
    pub fn moved(time_ms: u64, id: u32, position: impl Into<Point>) -> Self {
        Self::new(PointerAction::Move, time_ms, [Pointer::new(id, position)])
    }

    /// Final pointer up.
    #[must_use]
    pub fn up(time_ms: u64, id: u32, position: impl Into<Point>) -> Self {
        Self::new(PointerAction::Up, time_ms, [Pointer::new(id, position)])
    }

    /// Gesture aborted by the host.
    #[must_use]
    pub fn cancel(time_ms: u64, id: u32, position: impl Into<Point>) -> Self {
        Self::new(PointerAction::Cancel, time_ms, [Pointer::new(id, position)])
    }

    /// Number of pointers listed in this event.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Position of the pointer at `index`, if there is one.
    #[must_use]
    pub fn position(&self, index: usize) -> Option<Point> {
        self.pointers.get(index).map(|p| p.position)
    }

    /// Id of the pointer at `index`, if there is one.
    #[must_use]
    pub fn id(&self, index: usize) -> Option<PointerId> {
        self.pointers.get(index).map(|p| p.id)
    }

    /// Position of the primary (index 0) pointer.
    ///
    /// Events without pointers report the origin.
    #[must_use]
    pub fn primary_position(&self) -> Point {
        self.position(0).unwrap_or(Point::ORIGIN)
    }

    /// Index of the pointer with the given id in this event.
    #[must_use]
    pub fn find_index(&self, id: PointerId) -> Option<usize> {
        self.pointers.iter().position(|p| p.id == id)
    }

    /// Index of the pointer that changed state, for `PointerDown`/`PointerUp`.
    #[must_use]
    pub fn action_index(&self) -> Option<usize> {
        match self.action {
            PointerAction::PointerDown { index } | PointerAction::PointerUp { index } => {
                Some(index)
            }
            _ => None,
        }
    }

    /// Returns `true` for `Up` and `Cancel`, the two ways a gesture ends.
    #[must_use]
    pub fn ends_gesture(&self) -> bool {
        matches!(self.action, PointerAction::Up | PointerAction::Cancel)
    }

    /// Iterates pointers that remain down after this event.
    ///
    /// This skips the pointer being lifted by a `PointerUp` or `Up`.
    pub fn remaining(&self) -> impl Iterator<Item = &Pointer> + '_ {
        let lifted = match self.action {
            PointerAction::PointerUp { index } => Some(index),
            PointerAction::Up | PointerAction::Cancel => Some(0),
            _ => None,
        };
        let all_lifted = self.ends_gesture();
        self.pointers
            .iter()
            .enumerate()
            .filter(move |(i, _)| !all_lifted && Some(*i) != lifted)
            .map(|(_, p)| p)
    }
}
