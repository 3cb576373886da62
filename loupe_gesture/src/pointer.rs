// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer phases, samples, and centroid computation.

use kurbo::{Point, Vec2};

/// Phase of a pointer event as delivered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// A pointer made contact.
    Down,
    /// One or more pointers moved.
    Move,
    /// The last pointer lifted.
    Up,
    /// The host aborted the touch sequence.
    Cancel,
}

/// One active pointer within a touch sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Host-assigned pointer id, stable for the lifetime of the contact.
    pub id: u64,
    /// Position in view/device coordinates.
    pub pos: Point,
}

impl PointerSample {
    /// Creates a sample for pointer `id` at `pos`.
    #[must_use]
    pub fn new(id: u64, pos: Point) -> Self {
        Self { id, pos }
    }
}

/// Returns the arithmetic mean position of the given pointers.
///
/// The centroid is the pan reference point for multi-touch drags. Returns
/// `None` for an empty sample list.
#[must_use]
pub fn centroid(samples: &[PointerSample]) -> Option<Point> {
    if samples.is_empty() {
        return None;
    }
    let mut sum = Vec2::ZERO;
    for sample in samples {
        sum += sample.pos.to_vec2();
    }
    Some((sum / samples.len() as f64).to_point())
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{PointerSample, centroid};

    #[test]
    fn centroid_of_nothing_is_none() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn centroid_of_one_pointer_is_its_position() {
        let samples = [PointerSample::new(3, Point::new(12.5, -4.0))];
        assert_eq!(centroid(&samples), Some(Point::new(12.5, -4.0)));
    }

    #[test]
    fn centroid_averages_all_pointers() {
        let samples = [
            PointerSample::new(0, Point::new(0.0, 0.0)),
            PointerSample::new(1, Point::new(100.0, 50.0)),
            PointerSample::new(2, Point::new(200.0, 100.0)),
        ];
        let c = centroid(&samples).unwrap();
        assert!((c.x - 100.0).abs() < 1e-12);
        assert!((c.y - 50.0).abs() < 1e-12);
    }
}
