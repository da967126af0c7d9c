// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Animation: frame-driven zoom tweens and inertial flings.
//!
//! Animations here are plain state machines. Instead of re-posting
//! themselves to a display loop, each task exposes
//! `advance(now_ms, target) -> Progress`, and the host calls it once per frame
//! until it reports [`Progress::Done`]. Timestamps are supplied by the caller,
//! so tests can drive every task with synthetic time.
//!
//! - [`ZoomTween`]: eased zoom to a target scale about a focus point.
//! - [`FlingTask`]: inertial pan after a release, solved by [`Scroller`].
//! - [`AnimationScheduler`]: owns at most one of each and steps them.
//!
//! Tasks reach the transform only through [`AnimationTarget`], which is
//! implemented for [`loupe_transform::TransformComposer`].
//!
//! ```
//! use kurbo::{Point, Size};
//! use loupe_animation::{AnimationScheduler, Easing, Progress};
//! use loupe_transform::TransformComposer;
//!
//! let mut composer = TransformComposer::new();
//! composer.set_viewport(Size::new(100.0, 100.0));
//! composer.bind_content(Size::new(100.0, 100.0));
//!
//! let mut scheduler = AnimationScheduler::default();
//! scheduler.start_zoom(&composer, 2.0, Point::new(50.0, 50.0), 200, Easing::Linear);
//!
//! let mut now = 0;
//! while scheduler.advance(now, &mut composer) == Progress::Continue {
//!     now += 16;
//! }
//! assert!((composer.scale() - 2.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod easing;
mod fling;
mod scheduler;
pub mod scroller;
mod target;
mod tween;

pub use easing::Easing;
pub use fling::{FlingRange, FlingTask};
pub use scheduler::AnimationScheduler;
pub use scroller::{Scroller, ScrollerConfig};
pub use target::AnimationTarget;
pub use tween::ZoomTween;

/// Whether a task wants another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    /// Call `advance` again on the next frame.
    Continue,
    /// Finished; no further frames are needed.
    Done,
}
