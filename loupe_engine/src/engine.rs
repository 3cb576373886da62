// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use loupe_gesture::pan::PanSession;
use loupe_gesture::pointer::{PointerPhase, PointerSample, centroid};
use loupe_view::{
    AxisClamp, ContentTransform, ScaleThresholds, correct_after_pan, correct_after_scale,
    fit_to_width,
};

use crate::animator::AutoZoom;
use crate::error::GestureError;

/// Margin by which the rendered width must exceed the viewport width before
/// the engine claims the horizontal gesture from an enclosing pager.
const PAGER_WIDTH_EPSILON: f64 = 0.01;

/// Distance within which a content edge counts as flush with the viewport
/// edge, releasing the horizontal gesture claim.
const EDGE_FLUSH_TOLERANCE: f64 = 1.0;

/// Stateful gesture-to-transform engine for a zoomable content surface.
///
/// See the [crate docs](crate) for the host boundary and a usage example.
/// The engine is inert until [`set_viewport`](Self::set_viewport) and
/// [`set_content_extent`](Self::set_content_extent) have both delivered
/// positive sizes; gesture input before that point is ignored or reported as
/// [`GestureError::NotReady`].
#[derive(Clone, Debug)]
pub struct ZoomEngine {
    viewport: Option<Size>,
    content: Option<Size>,
    transform: ContentTransform,
    thresholds: Option<ScaleThresholds>,
    pan: PanSession,
    animation: Option<AutoZoom>,
    horizontal_claim: bool,
}

impl ZoomEngine {
    /// Creates an uninitialized engine with the default drag threshold.
    #[must_use]
    pub fn new() -> Self {
        Self::with_drag_threshold(loupe_gesture::pan::DEFAULT_DRAG_THRESHOLD)
    }

    /// Creates an uninitialized engine with a host-supplied drag threshold
    /// (the platform touch-slop, in device pixels).
    #[must_use]
    pub fn with_drag_threshold(drag_threshold: f64) -> Self {
        Self {
            viewport: None,
            content: None,
            transform: ContentTransform::IDENTITY,
            thresholds: None,
            pan: PanSession::new(drag_threshold),
            animation: None,
            horizontal_claim: false,
        }
    }

    /// Delivers the viewport size from the host's layout pass.
    ///
    /// Non-positive or non-finite sizes are ignored, as is re-delivery of the
    /// current size (layout callbacks repeat; the first usable layout wins).
    /// A genuinely changed size re-fits the content and recomputes the scale
    /// stops.
    pub fn set_viewport(&mut self, size: Size) {
        if !size_is_usable(size) || self.viewport == Some(size) {
            return;
        }
        self.viewport = Some(size);
        self.refit();
    }

    /// Delivers the intrinsic content size once the content is available.
    ///
    /// Same policy as [`set_viewport`](Self::set_viewport): degenerate or
    /// identical sizes are ignored, a changed size re-fits.
    pub fn set_content_extent(&mut self, size: Size) {
        if !size_is_usable(size) || self.content == Some(size) {
            return;
        }
        self.content = Some(size);
        self.refit();
    }

    /// Returns `true` once the engine has fitted content to a viewport and
    /// accepts gesture input.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.thresholds.is_some()
    }

    /// Returns the current content transform for rendering.
    #[must_use]
    pub fn transform(&self) -> ContentTransform {
        self.transform
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    /// Returns the scale stops, once initialized.
    #[must_use]
    pub fn thresholds(&self) -> Option<ScaleThresholds> {
        self.thresholds
    }

    /// Returns `true` while a double-tap auto-zoom is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Returns `true` while the engine wants an enclosing horizontal pager
    /// to defer its own swipe handling.
    ///
    /// Claimed while a drag is in progress with the rendered content wider
    /// than the viewport and neither vertical edge flush against it; released
    /// once an edge becomes flush, the width no longer exceeds the viewport,
    /// or the touch sequence ends.
    #[must_use]
    pub fn wants_horizontal_gesture_claim(&self) -> bool {
        self.horizontal_claim
    }

    /// Applies one incremental pinch update about `focal`.
    ///
    /// The raw factor is reduced where needed so the resulting scale stays in
    /// `[min_scale, max_scale]`, then applied about the focal point and
    /// boundary-corrected. Samples arriving while an auto-zoom is in flight
    /// are dropped (the animation owns the transform).
    ///
    /// # Errors
    ///
    /// [`GestureError::NotReady`] before initialization;
    /// [`GestureError::InvalidGestureSample`] for a non-finite or
    /// non-positive factor or a non-finite focal point. Both leave the
    /// transform untouched.
    pub fn apply_pinch(&mut self, focal: Point, factor: f64) -> Result<(), GestureError> {
        let (Some(viewport), Some(content), Some(thresholds)) =
            (self.viewport, self.content, self.thresholds)
        else {
            return Err(GestureError::NotReady);
        };
        if self.animation.is_some() {
            return Ok(());
        }
        if !(factor.is_finite() && factor > 0.0 && focal.x.is_finite() && focal.y.is_finite()) {
            return Err(GestureError::InvalidGestureSample);
        }

        let effective = thresholds.clamp_factor(self.transform.scale(), factor);
        self.transform.post_scale(effective, focal);
        correct_after_scale(&mut self.transform, viewport, content);
        Ok(())
    }

    /// Feeds one host pointer sample to the pan handling.
    ///
    /// `samples` lists all currently active pointers; their centroid is the
    /// pan reference. Movement is gated behind the drag threshold, zeroed per
    /// axis where the rendered content is smaller than the viewport, and
    /// boundary-clamped after translation. Down/Move samples are ignored
    /// while an auto-zoom is in flight; Up/Cancel always reset the session.
    pub fn on_pointer_event(&mut self, samples: &[PointerSample], phase: PointerPhase) {
        let (Some(viewport), Some(content)) = (self.viewport, self.content) else {
            return;
        };
        if !self.is_ready() {
            return;
        }

        match phase {
            PointerPhase::Up | PointerPhase::Cancel => {
                self.pan.end();
                self.horizontal_claim = false;
            }
            _ if self.animation.is_some() => {}
            PointerPhase::Down => {
                if let Some(c) = centroid(samples) {
                    // Seed the session (or rebase it on a pointer-count
                    // change); no movement yet.
                    let _ = self.pan.sample(c, samples.len());
                }
            }
            PointerPhase::Move => {
                let Some(c) = centroid(samples) else {
                    return;
                };
                let rect = self.transform.content_rect(content);
                self.update_horizontal_claim(rect, viewport);

                if let Some(mut delta) = self.pan.sample(c, samples.len()) {
                    let mut clamp = AxisClamp::BOTH;
                    if rect.width() < viewport.width {
                        clamp.horizontal = false;
                        delta.x = 0.0;
                    }
                    if rect.height() < viewport.height {
                        clamp.vertical = false;
                        delta.y = 0.0;
                    }
                    self.transform.post_translate(delta);
                    correct_after_pan(&mut self.transform, viewport, content, clamp);
                }
            }
        }
    }

    /// Handles a host-recognized double-tap at `at`.
    ///
    /// Picks the cyclic band target (mid → max → init) for the current scale
    /// and starts the auto-zoom; the host then calls [`tick`](Self::tick)
    /// via its timer until [`is_animating`](Self::is_animating) is `false`.
    /// Returns `true` when the tap was consumed, including the no-op case of
    /// a tap arriving mid-animation; `false` before initialization or for a
    /// non-finite tap location.
    pub fn on_double_tap(&mut self, at: Point) -> bool {
        if self.animation.is_some() {
            return true;
        }
        let Some(thresholds) = self.thresholds else {
            return false;
        };
        if !(at.x.is_finite() && at.y.is_finite()) {
            return false;
        }

        let current = self.transform.scale();
        let target = thresholds.double_tap_target(current);
        self.animation = Some(AutoZoom::toward(target, at, current));
        true
    }

    /// Advances an in-flight auto-zoom by one step; no-op when idle.
    ///
    /// Each step scales by the fixed ratio about the tap point and
    /// boundary-corrects. Once the scale reaches the target band edge, an
    /// exact `target / current` step eliminates the overshoot and the
    /// animation ends.
    pub fn tick(&mut self) {
        let Some(task) = self.animation else {
            return;
        };
        let (Some(viewport), Some(content)) = (self.viewport, self.content) else {
            return;
        };

        self.transform.post_scale(task.ratio, task.focal);
        correct_after_scale(&mut self.transform, viewport, content);

        let current = self.transform.scale();
        if task.is_done(current) {
            self.transform.post_scale(task.target / current, task.focal);
            correct_after_scale(&mut self.transform, viewport, content);
            self.animation = None;
        }
    }

    /// Snapshot of the current engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomEngineDebugInfo {
        ZoomEngineDebugInfo {
            viewport: self.viewport,
            content: self.content,
            scale: self.transform.scale(),
            thresholds: self.thresholds,
            is_animating: self.animation.is_some(),
            wants_horizontal_gesture_claim: self.horizontal_claim,
        }
    }

    fn refit(&mut self) {
        let (Some(viewport), Some(content)) = (self.viewport, self.content) else {
            return;
        };
        if let Some((transform, thresholds)) = fit_to_width(viewport, content) {
            self.transform = transform;
            self.thresholds = Some(thresholds);
            self.pan.end();
            self.animation = None;
            self.horizontal_claim = false;
        }
    }

    fn update_horizontal_claim(&mut self, rect: Rect, viewport: Size) {
        let overflows = rect.width() > viewport.width + PAGER_WIDTH_EPSILON;
        let flush_left = rect.x0.abs() < EDGE_FLUSH_TOLERANCE;
        let flush_right = (rect.x1 - viewport.width).abs() < EDGE_FLUSH_TOLERANCE;
        self.horizontal_claim = overflows && !flush_left && !flush_right;
    }
}

impl Default for ZoomEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn size_is_usable(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.width.is_finite() && size.height.is_finite()
}

/// Debug snapshot of a [`ZoomEngine`] state.
#[derive(Clone, Copy, Debug)]
pub struct ZoomEngineDebugInfo {
    /// Viewport size, once delivered.
    pub viewport: Option<Size>,
    /// Intrinsic content size, once delivered.
    pub content: Option<Size>,
    /// Current uniform scale factor.
    pub scale: f64,
    /// Scale stops, once initialized.
    pub thresholds: Option<ScaleThresholds>,
    /// Whether a double-tap auto-zoom is in flight.
    pub is_animating: bool,
    /// Whether the engine currently claims the horizontal gesture.
    pub wants_horizontal_gesture_claim: bool,
}
