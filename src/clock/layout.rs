// SPDX-License-Identifier: MPL-2.0
//! Fixed clock face geometry.
//!
//! The layout is computed once from the clock options when the clock is
//! built and never recomputed afterwards; the face is drawn at a fixed size
//! so the stored points stay valid.

use super::{Handle, HandRotations};
use crate::geometry::Point;

/// Pointer distance (px) from a hand within which a press grabs it.
pub const HIT_TOLERANCE: f32 = 8.0;

/// Length of the seconds hand relative to the face radius.
const SECONDS_HAND_RATIO: f32 = 0.9;

/// Clock center and the resting (12 o'clock) tip of each hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockLayout {
    diameter: f32,
    center: Point,
    hours_base: Point,
    minutes_base: Point,
    seconds_base: Point,
}

impl ClockLayout {
    /// Builds the layout for a face of `diameter` pixels. Hand lengths are
    /// fractions of the radius.
    #[must_use]
    pub fn new(diameter: f32, hour_hand_ratio: f32, minute_hand_ratio: f32) -> Self {
        let radius = diameter / 2.0;
        let center = Point::new(radius, radius);
        let base = |ratio: f32| Point::new(center.x, center.y - radius * ratio);

        Self {
            diameter,
            center,
            hours_base: base(hour_hand_ratio),
            minutes_base: base(minute_hand_ratio),
            seconds_base: base(SECONDS_HAND_RATIO),
        }
    }

    #[must_use]
    pub fn diameter(&self) -> f32 {
        self.diameter
    }

    #[must_use]
    pub fn radius(&self) -> f32 {
        self.diameter / 2.0
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Resting tip of a hand, before any rotation is applied.
    #[must_use]
    pub fn base(&self, handle: Handle) -> Point {
        match handle {
            Handle::Hours => self.hours_base,
            Handle::Minutes => self.minutes_base,
            Handle::Seconds => self.seconds_base,
        }
    }

    /// Tip of a hand rotated clockwise by `degrees`.
    #[must_use]
    pub fn tip(&self, handle: Handle, degrees: f32) -> Point {
        let length = self.base(handle).subtract(self.center).length();
        let radians = degrees.to_radians();
        Point::new(
            self.center.x + length * radians.sin(),
            self.center.y - length * radians.cos(),
        )
    }

    /// Selectable hand under `point`, preferring the closest one when hands
    /// overlap.
    #[must_use]
    pub fn handle_at(&self, point: Point, rotations: &HandRotations) -> Option<Handle> {
        Handle::SELECTABLE
            .into_iter()
            .map(|handle| {
                let tip = self.tip(handle, rotations.get(handle));
                (handle, point.distance_to_segment(self.center, tip))
            })
            .filter(|(_, distance)| *distance <= HIT_TOLERANCE)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(handle, _)| handle)
    }
}
