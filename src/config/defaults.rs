// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Clock face**: diameter and hand lengths
//! - **Form**: selector and field names the picker binds to

// ==========================================================================
// Clock Face Defaults
// ==========================================================================

/// Default clock face diameter (in pixels).
pub const DEFAULT_DIAMETER: f32 = 240.0;

/// Smallest clock face diameter (in pixels).
pub const MIN_DIAMETER: f32 = 120.0;

/// Largest clock face diameter (in pixels).
pub const MAX_DIAMETER: f32 = 800.0;

/// Default hours hand length, as a fraction of the radius.
pub const DEFAULT_HOUR_HAND_RATIO: f32 = 0.5;

/// Default minutes hand length, as a fraction of the radius.
pub const DEFAULT_MINUTE_HAND_RATIO: f32 = 0.8;

/// Shortest allowed hand, as a fraction of the radius.
pub const MIN_HAND_RATIO: f32 = 0.1;

/// Longest allowed hand, as a fraction of the radius.
pub const MAX_HAND_RATIO: f32 = 1.0;

/// Whether the seconds hand animates on launch.
pub const DEFAULT_SECONDS_HAND: bool = true;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Selector of the form the picker binds to.
pub const DEFAULT_FORM_SELECTOR: &str = "#time";

pub const DEFAULT_HOURS_FIELD: &str = "hours";
pub const DEFAULT_MINUTES_FIELD: &str = "minutes";
pub const DEFAULT_MERIDIAN_FIELD: &str = "meridian";

// Compile-time validation of the defaults above.
const _: () = {
    assert!(MIN_DIAMETER > 0.0);
    assert!(MAX_DIAMETER >= MIN_DIAMETER);
    assert!(DEFAULT_DIAMETER >= MIN_DIAMETER);
    assert!(DEFAULT_DIAMETER <= MAX_DIAMETER);

    assert!(MIN_HAND_RATIO > 0.0);
    assert!(MAX_HAND_RATIO >= MIN_HAND_RATIO);
    assert!(DEFAULT_HOUR_HAND_RATIO >= MIN_HAND_RATIO);
    assert!(DEFAULT_HOUR_HAND_RATIO <= MAX_HAND_RATIO);
    assert!(DEFAULT_MINUTE_HAND_RATIO >= MIN_HAND_RATIO);
    assert!(DEFAULT_MINUTE_HAND_RATIO <= MAX_HAND_RATIO);
};
