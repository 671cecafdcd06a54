// SPDX-License-Identifier: MPL-2.0
//! `clock_picker` is an analog clock time picker built with the Iced GUI
//! framework.
//!
//! The clock face and a pair of hours/minutes fields stay in sync: dragging a
//! hand rewrites the bound field, and typing into a field rotates the matching
//! hand. Fields live in named forms registered in a [`form::Forms`] registry
//! and are bound by selector.
//!
//! ```
//! use chrono::NaiveTime;
//! use clock_picker::form::{Form, Forms};
//! use clock_picker::picker::{ClockPicker, PickerOptions};
//!
//! let mut forms = Forms::new().with(
//!     Form::new("time")
//!         .with_text("hours", "")
//!         .with_text("minutes", "")
//!         .with_toggle("meridian", false),
//! );
//! let now = NaiveTime::from_hms_opt(14, 25, 0).unwrap();
//! let picker = ClockPicker::new("#time", &PickerOptions::default(), &mut forms, now);
//!
//! assert_eq!(picker.input().text(&forms, clock_picker::clock::Handle::Hours), Some("02"));
//! ```

pub mod app;
pub mod clock;
pub mod config;
pub mod error;
pub mod form;
pub mod format;
pub mod geometry;
pub mod i18n;
pub mod picker;
pub mod time_input;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
