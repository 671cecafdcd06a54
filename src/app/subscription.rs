// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::picker::ClockPicker;
use iced::Subscription;

/// Timer driving the seconds hand, active only while it runs.
pub fn create_subscription(picker: &ClockPicker) -> Subscription<Message> {
    picker.subscription().map(Message::Picker)
}
