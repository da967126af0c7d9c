// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe: pan, pinch-zoom, rotate and fling a single image inside a viewport.
//!
//! [`PhotoController`] is the host-facing piece. It ties together
//! - [`loupe_gesture`], which turns raw pointer events into drags, pinches,
//!   flings and taps,
//! - [`loupe_transform`], which owns the fit and user transforms and keeps
//!   the content clamped to the viewport, and
//! - [`loupe_animation`], which runs zoom tweens and inertial flings one frame
//!   at a time.
//!
//! The controller owns no pixels and reads no clock. The host:
//! - binds the content's intrinsic size and the viewport,
//! - forwards pointer events to [`PhotoController::on_pointer_event`],
//! - calls [`PhotoController::on_frame`] each display frame while it returns
//!   [`Progress::Continue`], and
//! - draws the content with the transform handed to the render observer (or
//!   read back from [`PhotoController::draw_transform`]).
//!
//! ## Example
//!
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use kurbo::{Insets, Point, Size};
//! use loupe::PhotoController;
//!
//! let mut photo = PhotoController::default();
//! photo.bind_viewport(Size::new(300.0, 200.0), Insets::ZERO);
//! photo.bind_content(Size::new(1200.0, 800.0));
//!
//! let zoomed = Rc::new(Cell::new(false));
//! let seen = zoomed.clone();
//! photo
//!     .observers_mut()
//!     .set_matrix_changed(move |rect| seen.set(rect.width() > 300.0));
//!
//! photo.set_scale_about(2.0, Point::new(150.0, 100.0), false).unwrap();
//! assert!(zoomed.get());
//! assert_eq!(photo.scale(), 2.0);
//!
//! // Out-of-range scales are refused.
//! assert!(photo.set_scale(10.0, false).is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc` for observer storage.

#![no_std]

extern crate alloc;

mod config;
mod controller;
pub mod observers;

pub use config::ControllerConfig;
pub use controller::PhotoController;
pub use observers::{Observers, SingleFling};

pub use loupe_animation::{Easing, Progress};
pub use loupe_gesture::{GestureConfig, Pointer, PointerAction, PointerEvent, PointerId};
pub use loupe_transform::{EdgeState, EdgeStates, FitPolicy, ScaleLevels, TransformError};
