// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan session state: centroid tracking with a touch-slop drag gate.
//!
//! ## Usage
//!
//! 1) Feed every pointer sample's centroid and pointer count to
//!    [`PanSession::sample`]; it returns a movement delta only once the drag
//!    is confirmed.
//! 2) When the pointer count changes (a finger is added or removed), the
//!    session rebases its reference centroid and drops confirmation so the
//!    centroid jump is not read as a pan.
//! 3) Call [`PanSession::end`] on pointer-up or cancel to reset the session.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use loupe_gesture::pan::PanSession;
//!
//! let mut pan = PanSession::new(8.0);
//!
//! // Baseline at (0, 0), one finger.
//! assert_eq!(pan.sample(Point::new(0.0, 0.0), 1), None);
//!
//! // Below the 8px threshold: gated out.
//! assert_eq!(pan.sample(Point::new(3.0, 4.0), 1), None);
//!
//! // 12px from the last sample: confirmed, and the confirming delta is
//! // returned.
//! let delta = pan.sample(Point::new(15.0, 4.0), 1).unwrap();
//! assert_eq!(delta.x, 12.0);
//!
//! // Once confirmed, every subsequent delta passes through.
//! let delta = pan.sample(Point::new(16.0, 4.0), 1).unwrap();
//! assert_eq!(delta.x, 1.0);
//! ```

use kurbo::{Point, Vec2};

/// Default drag threshold in logical pixels.
///
/// Matches the common platform touch-slop convention (Android uses ~8dp):
/// large enough to ignore finger jitter, small enough that intentional drags
/// feel responsive. Hosts with platform-supplied slop values should pass them
/// to [`PanSession::new`] instead.
pub const DEFAULT_DRAG_THRESHOLD: f64 = 8.0;

/// Tracks one touch sequence's centroid for pan handling.
///
/// The session is ephemeral per touch sequence: it holds the last pointer
/// count, the last centroid, and whether the drag has been confirmed. A drag
/// is confirmed once a single centroid step exceeds the drag threshold
/// (Euclidean distance); before that, movement is treated as noise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanSession {
    drag_threshold: f64,
    last_count: usize,
    last_centroid: Option<Point>,
    confirmed: bool,
}

impl PanSession {
    /// Creates a session with the given drag threshold in device pixels.
    #[must_use]
    pub fn new(drag_threshold: f64) -> Self {
        Self {
            drag_threshold,
            last_count: 0,
            last_centroid: None,
            confirmed: false,
        }
    }

    /// Returns the configured drag threshold.
    #[must_use]
    pub fn drag_threshold(&self) -> f64 {
        self.drag_threshold
    }

    /// Returns `true` once the current sequence has confirmed a drag.
    #[must_use]
    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Feeds one centroid sample, returning the confirmed movement delta.
    ///
    /// A change in `pointer_count` rebases the session on `centroid` and
    /// clears confirmation, returning `None`; otherwise the delta from the
    /// previous centroid is computed and the centroid stored. The delta is
    /// returned only while the drag is confirmed; the step that crosses the
    /// threshold confirms the drag and is itself returned.
    pub fn sample(&mut self, centroid: Point, pointer_count: usize) -> Option<Vec2> {
        if pointer_count != self.last_count {
            self.last_count = pointer_count;
            self.last_centroid = Some(centroid);
            self.confirmed = false;
            return None;
        }

        let Some(last) = self.last_centroid else {
            self.last_centroid = Some(centroid);
            return None;
        };
        let delta = centroid - last;
        self.last_centroid = Some(centroid);

        if !self.confirmed {
            self.confirmed = delta.hypot() > self.drag_threshold;
        }
        self.confirmed.then_some(delta)
    }

    /// Ends the touch sequence: pointer count drops to zero and all drag
    /// state is cleared.
    pub fn end(&mut self) {
        self.last_count = 0;
        self.last_centroid = None;
        self.confirmed = false;
    }
}

impl Default for PanSession {
    fn default() -> Self {
        Self::new(DEFAULT_DRAG_THRESHOLD)
    }
}
