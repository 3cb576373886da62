// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Engine: the gesture-to-transform engine of an interactive image
//! viewer.
//!
//! [`ZoomEngine`] maps multi-touch input onto a uniform scale + translate
//! transform over a fixed-aspect-ratio content surface, producing pan,
//! pinch-zoom, and double-tap-to-zoom behavior with boundary clamping: the
//! content never leaves visible gaps against the viewport unless it is
//! smaller than the viewport, in which case it stays centered.
//!
//! The engine is headless and host-driven. The host owns rendering, raw
//! gesture recognition, and timing, and talks to the engine over a narrow
//! boundary:
//! - **Init feed**: [`ZoomEngine::set_viewport`] and
//!   [`ZoomEngine::set_content_extent`]; the engine is inert until both have
//!   delivered positive sizes.
//! - **Pointer feed**: [`ZoomEngine::on_pointer_event`] with the active
//!   pointer list and phase; the host's pinch recognizer additionally calls
//!   [`ZoomEngine::apply_pinch`] with a focal point and incremental factor,
//!   and its double-tap recognizer calls [`ZoomEngine::on_double_tap`].
//! - **Output query**: [`ZoomEngine::transform`] after each call, and
//!   [`ZoomEngine::wants_horizontal_gesture_claim`] to arbitrate with an
//!   enclosing horizontal pager.
//! - **Timer**: while [`ZoomEngine::is_animating`], the host's
//!   "schedule soon" facility repeatedly calls [`ZoomEngine::tick`]; a test
//!   harness just loops.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use loupe_engine::ZoomEngine;
//!
//! let mut engine = ZoomEngine::new();
//! engine.set_viewport(Size::new(1080.0, 1920.0));
//! engine.set_content_extent(Size::new(1080.0, 1920.0));
//! assert!(engine.is_ready());
//! assert!((engine.scale() - 1.0).abs() < 1e-9);
//!
//! // Pinch out about the viewport center: scale doubles, content stays
//! // centered and gap-free.
//! let center = Point::new(540.0, 960.0);
//! engine.apply_pinch(center, 2.0).unwrap();
//! assert!((engine.scale() - 2.0).abs() < 1e-9);
//!
//! // Double-tap: animate to the next scale band (here 2.0 -> 4.0).
//! assert!(engine.on_double_tap(center));
//! while engine.is_animating() {
//!     engine.tick();
//! }
//! assert!((engine.scale() - 4.0).abs() < 1e-9);
//! ```
//!
//! ## Concurrency model
//!
//! Single-threaded and cooperative: all calls execute on the host's event
//! thread and the engine is exclusively owned by it, so there is no locking.
//! The double-tap animation is an externally ticked state machine with fixed
//! step ratios strictly above/below 1.0, so it terminates in a bounded number
//! of ticks and a new double-tap during animation is ignored rather than
//! queued.
//!
//! This crate is `no_std`.

#![no_std]

mod animator;
mod engine;
mod error;

pub use engine::{ZoomEngine, ZoomEngineDebugInfo};
pub use error::GestureError;
pub use loupe_gesture::pointer::{PointerPhase, PointerSample};
pub use loupe_view::{ContentTransform, ScaleThresholds};
