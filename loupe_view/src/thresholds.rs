// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Ratio of the minimum scale to the initial fit scale.
pub const MIN_SCALE_RATIO: f64 = 0.8;
/// Ratio of the middle double-tap scale to the initial fit scale.
pub const MID_SCALE_RATIO: f64 = 2.0;
/// Ratio of the maximum scale to the initial fit scale.
pub const MAX_SCALE_RATIO: f64 = 4.0;

/// Relative slack applied at band edges in
/// [`ScaleThresholds::double_tap_target`].
const BAND_TOLERANCE: f64 = 1e-9;

/// The four scale stops derived from a width fit.
///
/// All stops are multiples of the initial fit scale
/// (`viewport.width / content.width`): the minimum is
/// [`MIN_SCALE_RATIO`]× the fit, the middle and maximum double-tap stops are
/// [`MID_SCALE_RATIO`]× and [`MAX_SCALE_RATIO`]×. The ordering
/// `min <= init < mid < max` holds by construction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleThresholds {
    min: f64,
    init: f64,
    mid: f64,
    max: f64,
}

impl ScaleThresholds {
    /// Derives the scale stops for fitting `content` to the width of `viewport`.
    ///
    /// Returns `None` if either size has a non-positive or non-finite
    /// dimension; callers treat that as "not ready" rather than an error.
    #[must_use]
    pub fn from_fit_width(viewport: Size, content: Size) -> Option<Self> {
        if !size_is_usable(viewport) || !size_is_usable(content) {
            return None;
        }
        let init = viewport.width / content.width;
        Some(Self {
            min: init * MIN_SCALE_RATIO,
            init,
            mid: init * MID_SCALE_RATIO,
            max: init * MAX_SCALE_RATIO,
        })
    }

    /// Returns the minimum allowed scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min
    }

    /// Returns the initial fit scale.
    #[must_use]
    pub fn init_scale(&self) -> f64 {
        self.init
    }

    /// Returns the middle double-tap scale.
    #[must_use]
    pub fn mid_scale(&self) -> f64 {
        self.mid
    }

    /// Returns the maximum allowed scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max
    }

    /// Clamps a raw pinch factor so the resulting scale stays in range.
    ///
    /// If `current * factor` would leave `[min_scale, max_scale]`, the
    /// returned factor is reduced to land exactly on the violated bound;
    /// otherwise `factor` is returned unchanged. Applying the result as a
    /// focal-point scale preserves anchored-scaling semantics with no
    /// discontinuous jump at the bounds.
    #[must_use]
    pub fn clamp_factor(&self, current: f64, factor: f64) -> f64 {
        let new_scale = current * factor;
        if new_scale > self.max {
            self.max / current
        } else if new_scale < self.min {
            self.min / current
        } else {
            factor
        }
    }

    /// Picks the next double-tap target scale for the current scale band.
    ///
    /// `[min, mid)` targets the middle stop, `[mid, max)` targets the maximum
    /// stop, and anything else returns to the initial fit scale, so repeated
    /// double-taps cycle mid → max → init.
    ///
    /// Band edges are compared with a small relative tolerance: an animation
    /// landing a rounding error shy of a stop must not re-select the band
    /// below it.
    #[must_use]
    pub fn double_tap_target(&self, current: f64) -> f64 {
        let tol = self.init * BAND_TOLERANCE;
        if current >= self.min - tol && current < self.mid - tol {
            self.mid
        } else if current >= self.mid - tol && current < self.max - tol {
            self.max
        } else {
            self.init
        }
    }
}

fn size_is_usable(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.width.is_finite() && size.height.is_finite()
}
