// SPDX-License-Identifier: MPL-2.0
//! Hours/minutes text fields and the meridian checkbox bound to the form.
//!
//! Pressing a field label focuses that field's hand and moves keyboard
//! focus into the field with its whole text selected, so the next keystroke
//! replaces it.

use crate::clock::Handle;
use crate::form::Forms;
use crate::i18n::I18n;
use crate::time_input::{Message, TimeInput};
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{checkbox, mouse_area, operation, text, text_input, Column, Id, Row};
use iced::{mouse, Alignment, Element, Length, Task};

/// Contextual data needed to render the fields.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub forms: &'a Forms,
    pub input: &'a TimeInput,
}

/// Widget id of the text input backing `handle`.
#[must_use]
pub fn field_id(handle: Handle) -> Id {
    match handle {
        Handle::Hours => Id::new("clock-picker-hours"),
        Handle::Minutes | Handle::Seconds => Id::new("clock-picker-minutes"),
    }
}

/// Moves keyboard focus into the field for `handle` and selects its text.
pub fn focus<T>(handle: Handle) -> Task<T>
where
    T: 'static,
{
    operation::focus(field_id(handle)).chain(operation::select_all(field_id(handle)))
}

fn label_key(handle: Handle) -> &'static str {
    match handle {
        Handle::Hours => "label-hours",
        _ => "label-minutes",
    }
}

fn field<'a>(ctx: &ViewContext<'a>, handle: Handle) -> Element<'a, Message> {
    let label = ctx.i18n.tr(label_key(handle));
    let value = ctx.input.text(ctx.forms, handle).unwrap_or_default();

    let label = mouse_area(text(label).size(typography::BODY))
        .on_press(Message::Focused(handle))
        .interaction(mouse::Interaction::Pointer);
    let input = text_input(&placeholder(handle), value)
        .id(field_id(handle))
        .on_input(move |raw| Message::Input(handle, raw))
        .padding(spacing::XS)
        .size(typography::BODY_LG)
        .width(Length::Fixed(sizing::INPUT_WIDTH));

    Column::new()
        .spacing(spacing::XXS)
        .push(label)
        .push(input)
        .into()
}

fn placeholder(handle: Handle) -> String {
    match handle {
        Handle::Hours => "12".to_string(),
        _ => "00".to_string(),
    }
}

/// Renders the bound fields. Nothing is rendered when the input is unbound.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if !ctx.input.is_bound() {
        return Row::new().into();
    }

    let mut row = Row::new().spacing(spacing::SM).align_y(Alignment::End);
    for handle in Handle::SELECTABLE {
        row = row.push(field(&ctx, handle));
    }

    let pm = ctx.input.meridian(ctx.forms).unwrap_or(false);
    let meridian = checkbox(pm)
        .label(ctx.i18n.tr("label-pm"))
        .on_toggle(Message::MeridianToggled)
        .text_size(typography::BODY);

    row.push(meridian).into()
}
