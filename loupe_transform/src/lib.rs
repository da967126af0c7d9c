// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Transform: fit, zoom and clamp transforms for a single piece of content.
//!
//! [`TransformComposer`] maps content of a known intrinsic size into a
//! viewport. It keeps two affine transforms:
//!
//! - the *base* transform, derived from the content size, viewport size,
//!   base rotation and [`FitPolicy`], and
//! - the *supplementary* transform, which accumulates pans, zooms and
//!   rotations applied by the user or by animations.
//!
//! Content is drawn with `supplementary * base`. After every mutation a clamp
//! pass keeps the content in a valid resting position and classifies each
//! axis into an [`EdgeState`].
//!
//! [`ScaleLevels`] holds the minimum, medium and maximum zoom used by
//! double-tap cycling and release correction. Rejected configuration is
//! reported as [`TransformError`].
//!
//! ## Coordinates
//!
//! Content coordinates span `(0, 0)` to the content's intrinsic size.
//! Viewport coordinates span `(0, 0)` to the viewport size, with y pointing
//! down. Rotations are in degrees, clockwise on screen.
//!
//! This crate is `no_std`.

#![no_std]

mod composer;
mod edge;
mod error;
mod fit;
mod levels;

pub use composer::{DisplayUpdate, TransformComposer};
pub use edge::{EdgeState, EdgeStates};
pub use error::TransformError;
pub use fit::FitPolicy;
pub use levels::ScaleLevels;
