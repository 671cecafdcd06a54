// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message};
use crate::picker;
use crate::time_input;
use crate::ui::time_fields;
use iced::Task;

impl App {
    pub(super) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Picker(message) => {
                let focus = match &message {
                    picker::Message::Input(time_input::Message::Focused(handle))
                        if self.picker.input().is_bound() =>
                    {
                        time_fields::focus(*handle)
                    }
                    _ => Task::none(),
                };
                if let picker::Event::ClockChanged(change) =
                    self.picker.update(message, &mut self.forms)
                {
                    log::debug!("{} hand set to {}", change.handle, change.value);
                }
                focus
            }
        }
    }
}
