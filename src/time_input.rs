// SPDX-License-Identifier: MPL-2.0
//! Hours/minutes form fields kept in sync with the analog clock.
//!
//! `TimeInput` binds to a host form by selector. Keystrokes are sanitized,
//! written back into the form and pushed into the clock; clock drags come
//! back as [`ClockChange`] notifications and are written into the matching
//! field. A selector that matches no form, or a form without fields, leaves
//! the input unbound and every operation becomes a no-op.

use crate::clock::{AnalogClock, ClockChange, Handle};
use crate::form::Forms;
use crate::format::format_digit;
use chrono::{NaiveTime, Timelike};

/// Largest value accepted in the hours field.
pub const MAX_HOURS: u64 = 12;

/// Largest value accepted in the minutes field.
pub const MAX_MINUTES: u64 = 59;

/// Names of the form fields the input binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    pub hours: String,
    pub minutes: String,
    pub meridian: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            hours: "hours".to_string(),
            minutes: "minutes".to_string(),
            meridian: "meridian".to_string(),
        }
    }
}

impl FieldNames {
    /// Field backing a selectable hand.
    #[must_use]
    pub fn for_handle(&self, handle: Handle) -> &str {
        match handle {
            Handle::Hours => &self.hours,
            Handle::Minutes | Handle::Seconds => &self.minutes,
        }
    }
}

/// Result of cleaning up a keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitized {
    /// Text written back into the field.
    pub text: String,
    /// Numeric value to push into the clock, if the text is a number.
    pub value: Option<u32>,
}

/// Cleans raw field text for `handle`.
///
/// Trailing non-digits are stripped. Hours above 12 clamp to `12`; minutes
/// above 59 reset to `00` instead of clamping.
#[must_use]
pub fn sanitize(handle: Handle, raw: &str) -> Sanitized {
    let trimmed = raw.trim_end_matches(|c: char| !c.is_ascii_digit());
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Sanitized {
            text: trimmed.to_string(),
            value: None,
        };
    }

    // All digits: only overflow can fail, and that is out of range anyway.
    let number = trimmed.parse::<u64>().unwrap_or(u64::MAX);
    match handle {
        Handle::Hours if number > MAX_HOURS => Sanitized {
            text: MAX_HOURS.to_string(),
            value: Some(12),
        },
        Handle::Minutes | Handle::Seconds if number > MAX_MINUTES => Sanitized {
            text: format_digit(0),
            value: Some(0),
        },
        #[allow(clippy::cast_possible_truncation)]
        _ => Sanitized {
            text: trimmed.to_string(),
            value: Some(number as u32),
        },
    }
}

/// Messages handled by [`TimeInput::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// A field gained focus.
    Focused(Handle),
    /// A field's text changed.
    Input(Handle, String),
    /// The meridian toggle changed.
    MeridianToggled(bool),
}

/// Form-side half of the picker.
#[derive(Debug, Clone)]
pub struct TimeInput {
    selector: String,
    fields: FieldNames,
    bound: bool,
    focused: Option<Handle>,
}

impl TimeInput {
    /// Binds to the form matching `selector` and seeds it from `now`.
    ///
    /// Hours are written in 12-hour form with the meridian toggle set for
    /// PM, and both values are pushed into `clock`. Nothing happens when no
    /// form with fields matches.
    pub fn new(
        selector: &str,
        fields: FieldNames,
        forms: &mut Forms,
        clock: &mut AnalogClock,
        now: NaiveTime,
    ) -> Self {
        let bound = forms.query(selector).is_some_and(|form| !form.is_empty());
        let input = Self {
            selector: selector.to_string(),
            fields,
            bound,
            focused: None,
        };

        if bound {
            input.seed(forms, clock, now);
        } else {
            log::debug!("no form with fields matches {selector:?}; time input left unbound");
        }
        input
    }

    fn seed(&self, forms: &mut Forms, clock: &mut AnalogClock, now: NaiveTime) {
        let (hours, pm) = if now.hour() < 12 {
            (now.hour(), false)
        } else {
            (now.hour() - 12, true)
        };
        self.set_meridian(forms, pm);

        clock.set_current_handle(Handle::Hours);
        self.write(forms, Handle::Hours, &format_digit(hours));
        clock.update_time(hours);

        clock.set_current_handle(Handle::Minutes);
        self.write(forms, Handle::Minutes, &format_digit(now.minute()));
        clock.update_time(now.minute());
    }

    #[must_use]
    pub fn selector(&self) -> &str {
        &self.selector
    }

    #[must_use]
    pub fn fields(&self) -> &FieldNames {
        &self.fields
    }

    /// Whether a form with fields was found at construction.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    #[must_use]
    pub fn focused(&self) -> Option<Handle> {
        self.focused
    }

    /// Current text of the field backing `handle`.
    #[must_use]
    pub fn text<'a>(&self, forms: &'a Forms, handle: Handle) -> Option<&'a str> {
        forms
            .query(&self.selector)
            .and_then(|form| form.text(self.fields.for_handle(handle)))
    }

    /// Current state of the meridian toggle (`true` for PM).
    #[must_use]
    pub fn meridian(&self, forms: &Forms) -> Option<bool> {
        forms
            .query(&self.selector)
            .and_then(|form| form.toggle(&self.fields.meridian))
    }

    /// Makes the field for `handle` focused and its hand current.
    ///
    /// Moving keyboard focus and selecting the field's text is left to the
    /// view, see [`crate::ui::time_fields::focus`].
    pub fn focus(&mut self, clock: &mut AnalogClock, handle: Handle) {
        if !self.bound {
            return;
        }
        self.focused = Some(handle);
        clock.set_current_handle(handle);
    }

    /// Handles new text typed into the field for `handle`.
    ///
    /// Typing into a field that is not focused focuses it first. The cleaned
    /// value is written back and, when numeric, pushed into the clock. No
    /// change notification results from this direction.
    pub fn input(&mut self, forms: &mut Forms, clock: &mut AnalogClock, handle: Handle, raw: &str) {
        if !self.bound {
            return;
        }
        if self.focused != Some(handle) {
            self.focus(clock, handle);
        }

        let sanitized = sanitize(handle, raw);
        self.write(forms, handle, &sanitized.text);
        if let Some(value) = sanitized.value {
            clock.update_time(value);
        }
    }

    /// Writes a clock notification into the field matching its hand.
    pub fn on_clock_change(&self, forms: &mut Forms, change: &ClockChange) {
        if !self.bound {
            return;
        }
        let handle = match change.handle {
            Handle::Hours => Handle::Hours,
            Handle::Minutes | Handle::Seconds => Handle::Minutes,
        };
        self.write(forms, handle, &change.value);
    }

    /// Sets the meridian toggle.
    pub fn set_meridian(&self, forms: &mut Forms, pm: bool) {
        if !self.bound {
            return;
        }
        if let Some(form) = forms.query_mut(&self.selector) {
            form.set_toggle(&self.fields.meridian, pm);
        }
    }

    /// Processes an input message.
    pub fn update(&mut self, message: Message, forms: &mut Forms, clock: &mut AnalogClock) {
        match message {
            Message::Focused(handle) => self.focus(clock, handle),
            Message::Input(handle, text) => self.input(forms, clock, handle, &text),
            Message::MeridianToggled(pm) => self.set_meridian(forms, pm),
        }
    }

    fn write(&self, forms: &mut Forms, handle: Handle, value: &str) {
        if let Some(form) = forms.query_mut(&self.selector) {
            form.set_text(self.fields.for_handle(handle), value);
        }
    }
}
