// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::thresholds::ScaleThresholds;
use crate::transform::ContentTransform;

/// Computes the initial width-fitted transform and its scale stops.
///
/// The content is first translated so its center coincides with the viewport
/// center, then scaled about the viewport center so the content width equals
/// the viewport width. The content ends up centered on both axes; its height
/// may overflow or underflow the viewport depending on the aspect ratios.
///
/// Returns `None` if either size has a non-positive or non-finite dimension.
///
/// ```rust
/// use kurbo::Size;
/// use loupe_view::fit_to_width;
///
/// let (transform, thresholds) =
///     fit_to_width(Size::new(1080.0, 1920.0), Size::new(2160.0, 2160.0)).unwrap();
/// assert!((transform.scale() - 0.5).abs() < 1e-9);
/// assert_eq!(thresholds.init_scale(), transform.scale());
///
/// // Width fills the viewport, height is centered.
/// let rect = transform.content_rect(Size::new(2160.0, 2160.0));
/// assert!(rect.x0.abs() < 1e-9);
/// assert!((rect.width() - 1080.0).abs() < 1e-9);
/// assert!((rect.center().y - 960.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn fit_to_width(viewport: Size, content: Size) -> Option<(ContentTransform, ScaleThresholds)> {
    let thresholds = ScaleThresholds::from_fit_width(viewport, content)?;

    let mut transform = ContentTransform::IDENTITY;
    // Center the content in the viewport, then scale about the viewport
    // center so the focal point of the fit is the viewport midpoint.
    transform.post_translate(Vec2::new(
        (viewport.width - content.width) * 0.5,
        (viewport.height - content.height) * 0.5,
    ));
    transform.post_scale(
        thresholds.init_scale(),
        Point::new(viewport.width * 0.5, viewport.height * 0.5),
    );
    Some((transform, thresholds))
}
