// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Per-tick scale ratio while animating toward a larger scale.
pub(crate) const ENLARGE_STEP: f64 = 1.1;
/// Per-tick scale ratio while animating toward a smaller scale.
pub(crate) const SHRINK_STEP: f64 = 0.9;

/// An in-flight double-tap auto-zoom.
///
/// The task exists only while the engine is animating and is dropped on
/// reaching its target. The step ratio is fixed at creation from the scale at
/// that moment; being strictly above or below 1.0, it bounds the number of
/// ticks until [`is_done`](Self::is_done) trips.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct AutoZoom {
    /// Scale the animation is heading for.
    pub(crate) target: f64,
    /// Focal point every step scales about.
    pub(crate) focal: Point,
    /// Fixed per-tick ratio, [`ENLARGE_STEP`] or [`SHRINK_STEP`].
    pub(crate) ratio: f64,
}

impl AutoZoom {
    /// Creates a task stepping from `current` toward `target` about `focal`.
    pub(crate) fn toward(target: f64, focal: Point, current: f64) -> Self {
        let ratio = if current < target {
            ENLARGE_STEP
        } else {
            SHRINK_STEP
        };
        Self {
            target,
            focal,
            ratio,
        }
    }

    /// Returns `true` once stepping should stop and the exact corrective
    /// step be applied: enlarging has reached (or passed) the target, or
    /// shrinking has fallen to (or below) it.
    pub(crate) fn is_done(&self, current: f64) -> bool {
        if self.ratio > 1.0 {
            current >= self.target
        } else {
            current <= self.target
        }
    }
}
