// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`widgets`] - The clock face canvas
//! - [`time_fields`] - Hours/minutes inputs and the meridian checkbox
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod theming;
pub mod time_fields;
pub mod widgets;
