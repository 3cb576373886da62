// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe View: headless zoom-view geometry.
//!
//! This crate provides the geometric core of an interactive image viewer: a
//! uniform scale + translate transform applied to a fixed-aspect-ratio content
//! surface shown inside a viewport. It focuses on:
//! - Transform state ([`ContentTransform`]): focal-point scaling, translation,
//!   and mapping the content's intrinsic rectangle to screen space.
//! - Initial view fitting ([`fit_to_width`]): content centered and scaled so
//!   its width matches the viewport width.
//! - Scale stops ([`ScaleThresholds`]): the min/init/mid/max scales derived
//!   from the fit, pinch-factor clamping, and cyclic double-tap targeting.
//! - Boundary correction ([`correct_after_scale`], [`correct_after_pan`]):
//!   nudging the transform so the content never leaves visible gaps unless it
//!   is smaller than the viewport, in which case it stays centered.
//!
//! It does **not** interpret input or render anything. Callers are expected
//! to:
//! - Recognize gestures (pinch, pan, double-tap) at a higher layer and drive
//!   the transform through these primitives.
//! - Read the resulting [`ContentTransform`] after each mutation and hand it
//!   to whatever draws the content.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use loupe_view::{correct_after_scale, fit_to_width};
//!
//! let viewport = Size::new(1080.0, 1920.0);
//! let content = Size::new(1080.0, 1920.0);
//!
//! // Seed the transform: content centered, width fitted to the viewport.
//! let (mut transform, thresholds) = fit_to_width(viewport, content).unwrap();
//! assert!((transform.scale() - 1.0).abs() < 1e-9);
//!
//! // Pinch out about the viewport center, clamped to the scale stops.
//! let focal = Point::new(540.0, 960.0);
//! let factor = thresholds.clamp_factor(transform.scale(), 2.0);
//! transform.post_scale(factor, focal);
//! correct_after_scale(&mut transform, viewport, content);
//! assert!((transform.scale() - 2.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale; rotation and
//!   shear are intentionally unrepresentable through the exported operations.
//! - Correction is split in two: the scale path always clamps both axes and
//!   centers smaller-than-viewport axes, while the pan path clamps only the
//!   axes the caller flags (callers zero the drag delta on a smaller axis
//!   instead of letting it drift).
//! - Gesture session state and animation live in higher-level crates built on
//!   top of this one.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod fit;
mod thresholds;
mod transform;

pub use bounds::{AxisClamp, correct_after_pan, correct_after_scale};
pub use fit::fit_to_width;
pub use thresholds::{MAX_SCALE_RATIO, MID_SCALE_RATIO, MIN_SCALE_RATIO, ScaleThresholds};
pub use transform::ContentTransform;
