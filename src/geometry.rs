// SPDX-License-Identifier: MPL-2.0
//! Plain 2D coordinates used by the clock face.
//!
//! Coordinates are in widget space: `x` grows to the right and `y` grows
//! downwards, matching the iced canvas.

use std::fmt;
use std::ops::Sub;

/// A position (or a vector) in widget space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Componentwise difference `self - other`.
    #[must_use]
    pub fn subtract(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    /// Dot product, treating both points as vectors.
    #[must_use]
    pub fn dot(self, other: Point) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length, treating the point as a vector.
    #[must_use]
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Shortest distance from `self` to the segment `a..b`.
    #[must_use]
    pub fn distance_to_segment(self, a: Point, b: Point) -> f32 {
        let ab = b.subtract(a);
        let ap = self.subtract(a);
        let len_sq = ab.dot(ab);
        if len_sq <= f32::EPSILON {
            return ap.length();
        }
        let t = (ap.dot(ab) / len_sq).clamp(0.0, 1.0);
        let closest = Point::new(a.x + ab.x * t, a.y + ab.y * t);
        self.subtract(closest).length()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        self.subtract(rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {}, y: {}", self.x, self.y)
    }
}

impl From<iced::Point> for Point {
    fn from(point: iced::Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl From<Point> for iced::Point {
    fn from(point: Point) -> Self {
        iced::Point::new(point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn subtract_is_componentwise() {
        let a = Point::new(10.0, 4.0);
        let b = Point::new(3.0, 9.0);
        assert_eq!(a.subtract(b), Point::new(7.0, -5.0));
        assert_eq!(a - b, a.subtract(b));
    }

    #[test]
    fn subtract_does_not_mutate_operands() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(2.0, 2.0);
        let _ = a.subtract(b);
        assert_eq!(a, Point::new(1.0, 1.0));
        assert_eq!(b, Point::new(2.0, 2.0));
    }

    #[test]
    fn display_matches_debug_format() {
        assert_eq!(Point::new(1.0, 2.5).to_string(), "x: 1, y: 2.5");
    }

    #[test]
    fn length_of_3_4_is_5() {
        assert_abs_diff_eq!(Point::new(3.0, 4.0).length(), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn distance_to_segment_projects_inside() {
        let d = Point::new(5.0, 3.0).distance_to_segment(Point::ORIGIN, Point::new(10.0, 0.0));
        assert_abs_diff_eq!(d, 3.0, epsilon = 1e-6);
    }

    #[test]
    fn distance_to_segment_clamps_to_endpoints() {
        let d = Point::new(13.0, 4.0).distance_to_segment(Point::ORIGIN, Point::new(10.0, 0.0));
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn distance_to_degenerate_segment_is_point_distance() {
        let d = Point::new(3.0, 4.0).distance_to_segment(Point::ORIGIN, Point::ORIGIN);
        assert_abs_diff_eq!(d, 5.0, epsilon = 1e-6);
    }
}
