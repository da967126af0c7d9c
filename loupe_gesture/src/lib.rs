// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gesture: multi-touch gesture recognition for zoomable content.
//!
//! This crate turns a stream of raw [`PointerEvent`]s into high-level gestures.
//! It knows nothing about what is being zoomed; consumers map gestures onto
//! their own transform.
//!
//! - [`GestureRecognizer`]: drag (after a touch slop), two-pointer pinch, and
//!   fling on release.
//! - [`TapDetector`]: confirmed single taps, double taps, long presses, and the
//!   raw fling of a whole gesture. These need a clock, see
//!   [`TapDetector::poll`].
//!
//! The building blocks are public for hosts that want a different mix:
//! [`drag::DragState`], [`velocity::VelocityTracker`] and
//! [`scale::ScaleDetector`].
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_gesture::{
//!     Gesture, GestureConfig, GestureRecognizer, Pointer, PointerAction, PointerEvent,
//! };
//!
//! let mut recognizer = GestureRecognizer::new(GestureConfig::default());
//! let mut gestures = Vec::new();
//!
//! recognizer.process_event(&PointerEvent::down(0, 1, (40.0, 50.0)), &mut gestures);
//! recognizer.process_event(
//!     &PointerEvent::new(
//!         PointerAction::PointerDown { index: 1 },
//!         10,
//!         [Pointer::new(1, (40.0, 50.0)), Pointer::new(2, (60.0, 50.0))],
//!     ),
//!     &mut gestures,
//! );
//! recognizer.process_event(
//!     &PointerEvent::new(
//!         PointerAction::Move,
//!         20,
//!         [Pointer::new(1, (30.0, 50.0)), Pointer::new(2, (70.0, 50.0))],
//!     ),
//!     &mut gestures,
//! );
//!
//! assert!(recognizer.is_scaling());
//! assert!(gestures.contains(&Gesture::Scale {
//!     factor: 2.0,
//!     focus: Point::new(50.0, 50.0),
//! }));
//! ```
//!
//! ## Units
//!
//! Positions are in viewport coordinates, times are host milliseconds, and
//! velocities are in units per second. Timestamps must not go backwards.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod config;
pub mod drag;
mod event;
mod recognizer;
pub mod scale;
mod tap;
pub mod velocity;

pub use config::GestureConfig;
pub use event::{Pointer, PointerAction, PointerEvent, PointerId};
pub use recognizer::{Gesture, GestureRecognizer};
pub use tap::{TapDetector, TapGesture};
