// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Uniform scale + translate transform mapping content space to view space.
///
/// `ContentTransform` wraps a [`kurbo::Affine`] restricted to composing
/// translations and uniform scales about a point. Those operations close over
/// pure scale + translate maps, so the transform never carries rotation or
/// shear and the scale can be read directly off the matrix.
///
/// The transform is a plain value: mutations happen in place via
/// [`post_scale`](Self::post_scale) and [`post_translate`](Self::post_translate),
/// and renderers read [`affine`](Self::affine) after each mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentTransform(Affine);

impl ContentTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self(Affine::IDENTITY);

    /// Returns the underlying affine map.
    #[must_use]
    pub fn affine(&self) -> Affine {
        self.0
    }

    /// Returns the current uniform scale factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        // With rotation and shear unrepresentable, the X scale coefficient is
        // the uniform scale.
        self.0.as_coeffs()[0]
    }

    /// Returns the current translation component.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.0.translation()
    }

    /// Scales by `factor` about `focal`, composed after the current transform.
    ///
    /// The content position under the focal point is invariant: a point that
    /// rendered at `focal` before the call still renders there afterwards.
    pub fn post_scale(&mut self, factor: f64, focal: Point) {
        self.0 = Affine::scale_about(factor, focal) * self.0;
    }

    /// Translates by `delta` in view space, composed after the current transform.
    pub fn post_translate(&mut self, delta: Vec2) {
        self.0 = Affine::translate(delta) * self.0;
    }

    /// Maps the content's intrinsic rectangle into view space.
    ///
    /// `content` is the intrinsic (unscaled) content size; the returned
    /// rectangle is where the content currently renders on screen, including
    /// its rendered extent and position.
    #[must_use]
    pub fn content_rect(&self, content: Size) -> Rect {
        self.0.transform_rect_bbox(content.to_rect())
    }
}

impl Default for ContentTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
