// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gesture: pointer sample and pan session state.
//!
//! This crate provides the small, stateful pieces of multi-touch pan
//! handling that sit between a host's raw pointer stream and the zoom-view
//! geometry:
//!
//! - [`pointer`]: pointer phases, per-pointer samples, and centroid
//!   computation over the active pointers.
//! - [`pan`]: the per-touch-sequence pan session, which rebases its
//!   reference centroid when the pointer count changes and gates movement
//!   behind a touch-slop drag threshold.
//!
//! The crate does not recognize gestures: hosts deliver pointer samples and
//! (separately) pre-recognized pinch and double-tap primitives to a
//! higher-level engine. Nothing here touches a transform; the pan session
//! only turns centroid samples into confirmed movement deltas.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_gesture::pan::PanSession;
//! use loupe_gesture::pointer::{PointerSample, centroid};
//!
//! let mut pan = PanSession::default();
//!
//! // One finger down at (100, 100): establishes the baseline.
//! let fingers = [PointerSample::new(7, Point::new(100.0, 100.0))];
//! let c = centroid(&fingers).unwrap();
//! assert_eq!(pan.sample(c, fingers.len()), None);
//!
//! // A 2px wiggle stays below the drag threshold.
//! assert_eq!(pan.sample(Point::new(102.0, 100.0), 1), None);
//!
//! // A decisive move confirms the drag and yields its delta.
//! let delta = pan.sample(Point::new(120.0, 100.0), 1).unwrap();
//! assert_eq!(delta.x, 18.0);
//!
//! // Pointer up ends the session.
//! pan.end();
//! assert!(!pan.is_confirmed());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod pan;
pub mod pointer;
