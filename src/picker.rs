// SPDX-License-Identifier: MPL-2.0
//! Clock picker composition root.
//!
//! [`ClockPicker`] owns one [`AnalogClock`] and one [`TimeInput`], hands the
//! caller's selector and options to both, and forwards clock change events
//! to the input. Typed values travel the other way through
//! [`AnalogClock::update_time`] and never come back as events.

use crate::clock::{self, AnalogClock, ClockChange, ClockOptions};
use crate::form::Forms;
use crate::time_input::{self, FieldNames, TimeInput};
use chrono::NaiveTime;
use iced::Subscription;

/// Options threaded through to both halves of the picker.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PickerOptions {
    pub clock: ClockOptions,
    pub fields: FieldNames,
}

/// Time currently shown by the picker's form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickedTime {
    /// Hours as typed or dragged, `0..=12`.
    pub hours: u32,
    pub minutes: u32,
    pub pm: bool,
}

impl PickedTime {
    /// 24-hour wall-clock time. `12` and `0` both mean the start of the
    /// half-day selected by the meridian.
    #[must_use]
    pub fn to_naive_time(self) -> Option<NaiveTime> {
        let hour = self.hours % 12 + if self.pm { 12 } else { 0 };
        NaiveTime::from_hms_opt(hour, self.minutes, 0)
    }
}

/// Messages routed by [`ClockPicker::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Clock(clock::Message),
    Input(time_input::Message),
}

/// Events propagated to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// A drag changed the time; the form already reflects it.
    ClockChanged(ClockChange),
}

/// Analog clock and time fields kept in sync.
#[derive(Debug, Clone)]
pub struct ClockPicker {
    clock: AnalogClock,
    input: TimeInput,
}

impl ClockPicker {
    /// Builds both components against the form matching `selector`.
    pub fn new(selector: &str, options: &PickerOptions, forms: &mut Forms, now: NaiveTime) -> Self {
        let mut clock = AnalogClock::new(&options.clock);
        let input = TimeInput::new(selector, options.fields.clone(), forms, &mut clock, now);
        log::debug!(
            "clock picker created for {selector:?} (bound: {})",
            input.is_bound()
        );
        Self { clock, input }
    }

    #[must_use]
    pub fn clock(&self) -> &AnalogClock {
        &self.clock
    }

    #[must_use]
    pub fn input(&self) -> &TimeInput {
        &self.input
    }

    pub fn update(&mut self, message: Message, forms: &mut Forms) -> Event {
        match message {
            Message::Clock(message) => match self.clock.update(message) {
                clock::Event::Changed(change) => {
                    self.input.on_clock_change(forms, &change);
                    Event::ClockChanged(change)
                }
                clock::Event::None => Event::None,
            },
            Message::Input(message) => {
                self.input.update(message, forms, &mut self.clock);
                Event::None
            }
        }
    }

    /// Time read back from the bound form, if every field holds a number.
    #[must_use]
    pub fn value(&self, forms: &Forms) -> Option<PickedTime> {
        if !self.input.is_bound() {
            return None;
        }
        let number = |handle| {
            self.input
                .text(forms, handle)
                .and_then(|text| text.parse::<u32>().ok())
        };

        Some(PickedTime {
            hours: number(clock::Handle::Hours)?,
            minutes: number(clock::Handle::Minutes)?,
            pm: self.input.meridian(forms).unwrap_or(false),
        })
    }

    pub fn subscription(&self) -> Subscription<Message> {
        self.clock.subscription().map(Message::Clock)
    }
}
