// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary correction: nudge the transform after a mutation so the content
//! leaves no visible gap against the viewport, or stays centered on an axis
//! where it is smaller than the viewport.

use kurbo::{Size, Vec2};

use crate::transform::ContentTransform;

/// Per-axis clamp flags for the pan-path corrector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisClamp {
    /// Clamp the horizontal axis against the viewport edges.
    pub horizontal: bool,
    /// Clamp the vertical axis against the viewport edges.
    pub vertical: bool,
}

impl AxisClamp {
    /// Clamp both axes.
    pub const BOTH: Self = Self {
        horizontal: true,
        vertical: true,
    };
    /// Clamp neither axis.
    pub const NONE: Self = Self {
        horizontal: false,
        vertical: false,
    };
}

/// Corrects the transform after a scale-driven mutation.
///
/// Per axis: when the rendered extent is at least the viewport extent, any
/// leading or trailing gap is removed (at most one can exist); when it is
/// smaller, the content is centered on that axis. Calling this on a transform
/// that already satisfies both constraints is a no-op.
pub fn correct_after_scale(transform: &mut ContentTransform, viewport: Size, content: Size) {
    let rect = transform.content_rect(content);
    let mut dx = 0.0;
    let mut dy = 0.0;

    if rect.width() >= viewport.width {
        if rect.x0 > 0.0 {
            dx = -rect.x0;
        }
        if rect.x1 < viewport.width {
            dx = viewport.width - rect.x1;
        }
    } else {
        dx = viewport.width * 0.5 - rect.x1 + rect.width() * 0.5;
    }

    if rect.height() >= viewport.height {
        if rect.y0 > 0.0 {
            dy = -rect.y0;
        }
        if rect.y1 < viewport.height {
            dy = viewport.height - rect.y1;
        }
    } else {
        dy = viewport.height * 0.5 - rect.y1 + rect.height() * 0.5;
    }

    if dx != 0.0 || dy != 0.0 {
        transform.post_translate(Vec2::new(dx, dy));
    }
}

/// Corrects the transform after a pan-driven mutation.
///
/// Only the axes flagged in `clamp` are checked, and gaps are removed the
/// same way as in [`correct_after_scale`]. This path never centers: panning
/// zeroes its delta on an axis where the content is smaller than the
/// viewport instead of dragging it off-center.
pub fn correct_after_pan(
    transform: &mut ContentTransform,
    viewport: Size,
    content: Size,
    clamp: AxisClamp,
) {
    let rect = transform.content_rect(content);
    let mut dx = 0.0;
    let mut dy = 0.0;

    if clamp.vertical {
        if rect.y0 > 0.0 {
            dy = -rect.y0;
        }
        if rect.y1 < viewport.height {
            dy = viewport.height - rect.y1;
        }
    }
    if clamp.horizontal {
        if rect.x0 > 0.0 {
            dx = -rect.x0;
        }
        if rect.x1 < viewport.width {
            dx = viewport.width - rect.x1;
        }
    }

    if dx != 0.0 || dy != 0.0 {
        transform.post_translate(Vec2::new(dx, dy));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{AxisClamp, correct_after_pan, correct_after_scale};
    use crate::fit::fit_to_width;

    const VIEWPORT: Size = Size::new(1000.0, 1000.0);

    // Content fitted at scale 1.0 that exactly fills the viewport.
    fn filled() -> crate::ContentTransform {
        fit_to_width(VIEWPORT, VIEWPORT).unwrap().0
    }

    #[test]
    fn satisfied_transform_is_untouched() {
        let mut t = filled();
        let before = t;
        correct_after_scale(&mut t, VIEWPORT, VIEWPORT);
        assert_eq!(t, before);
        correct_after_pan(&mut t, VIEWPORT, VIEWPORT, AxisClamp::BOTH);
        assert_eq!(t, before);
    }

    #[test]
    fn scale_path_removes_leading_gap() {
        let mut t = filled();
        t.post_scale(2.0, Point::new(500.0, 500.0));
        // Push the content right and down, opening gaps at the top-left.
        t.post_translate(Vec2::new(700.0, 650.0));

        correct_after_scale(&mut t, VIEWPORT, VIEWPORT);
        let rect = t.content_rect(VIEWPORT);
        assert!(rect.x0 <= 1e-9);
        assert!(rect.y0 <= 1e-9);
        assert!(rect.x1 >= VIEWPORT.width - 1e-9);
        assert!(rect.y1 >= VIEWPORT.height - 1e-9);
    }

    #[test]
    fn scale_path_removes_trailing_gap() {
        let mut t = filled();
        t.post_scale(2.0, Point::new(500.0, 500.0));
        t.post_translate(Vec2::new(-1700.0, -1650.0));

        correct_after_scale(&mut t, VIEWPORT, VIEWPORT);
        let rect = t.content_rect(VIEWPORT);
        assert!(rect.x1 >= VIEWPORT.width - 1e-9);
        assert!(rect.y1 >= VIEWPORT.height - 1e-9);
        assert!(rect.x0 <= 1e-9);
        assert!(rect.y0 <= 1e-9);
    }

    #[test]
    fn scale_path_centers_smaller_content() {
        let mut t = filled();
        // Shrink below the viewport on both axes, anchored off-center so the
        // result is visibly askew before correction.
        t.post_scale(0.8, Point::new(100.0, 900.0));

        correct_after_scale(&mut t, VIEWPORT, VIEWPORT);
        let rect = t.content_rect(VIEWPORT);
        assert!((rect.center().x - 500.0).abs() < 1e-9);
        assert!((rect.center().y - 500.0).abs() < 1e-9);
    }

    #[test]
    fn pan_path_clamps_only_flagged_axes() {
        let mut t = filled();
        t.post_scale(2.0, Point::new(500.0, 500.0));
        // Open gaps on the leading edges of both axes.
        t.post_translate(Vec2::new(600.0, 600.0));

        let mut horizontal_only = t;
        correct_after_pan(
            &mut horizontal_only,
            VIEWPORT,
            VIEWPORT,
            AxisClamp {
                horizontal: true,
                vertical: false,
            },
        );
        let rect = horizontal_only.content_rect(VIEWPORT);
        assert!(rect.x0 <= 1e-9);
        // Vertical gap is deliberately left in place.
        assert!(rect.y0 > 0.0);

        correct_after_pan(&mut t, VIEWPORT, VIEWPORT, AxisClamp::NONE);
        let untouched = t.content_rect(VIEWPORT);
        assert!(untouched.x0 > 0.0);
        assert!(untouched.y0 > 0.0);
    }

    #[test]
    fn pan_path_never_centers() {
        let mut t = filled();
        // Content smaller than the viewport, pushed off-center.
        t.post_scale(0.8, Point::new(0.0, 0.0));
        t.post_translate(Vec2::new(-60.0, 0.0));
        let before = t.content_rect(VIEWPORT).center();

        correct_after_pan(&mut t, VIEWPORT, VIEWPORT, AxisClamp::NONE);
        let after = t.content_rect(VIEWPORT).center();
        assert_eq!(before, after);
    }
}
