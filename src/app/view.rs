// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::clock;
use crate::form::Forms;
use crate::format::format_digit;
use crate::i18n::I18n;
use crate::picker::{self, ClockPicker};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::theming::ColorScheme;
use crate::ui::time_fields;
use crate::ui::widgets::ClockFace;
use iced::widget::{button, container, text, Column};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub forms: &'a Forms,
    pub picker: &'a ClockPicker,
    pub colors: ColorScheme,
    pub config_warning: Option<&'a str>,
}

/// Status line describing the picked time.
fn status_line(ctx: &ViewContext<'_>) -> String {
    if !ctx.picker.input().is_bound() {
        return ctx
            .i18n
            .tr_with_args("form-missing", &[("selector", ctx.picker.input().selector())]);
    }
    match ctx.picker.value(ctx.forms) {
        Some(time) => {
            let meridian = if time.pm { "PM" } else { "AM" };
            let time = format!(
                "{}:{} {meridian}",
                format_digit(time.hours),
                format_digit(time.minutes)
            );
            ctx.i18n.tr_with_args("picked-time", &[("time", time.as_str())])
        }
        None => ctx.i18n.tr("picked-time-invalid"),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let clock = ctx.picker.clock();

    let face = ClockFace::new(clock, ctx.colors)
        .into_element()
        .map(|message| Message::Picker(picker::Message::Clock(message)));

    let fields = time_fields::view(time_fields::ViewContext {
        i18n: ctx.i18n,
        forms: ctx.forms,
        input: ctx.picker.input(),
    })
    .map(|message| Message::Picker(picker::Message::Input(message)));

    let (seconds_label, seconds_message) = if clock.seconds_running() {
        ("seconds-stop", clock::Message::StopSeconds)
    } else {
        ("seconds-start", clock::Message::StartSeconds)
    };
    let seconds_button = button(text(ctx.i18n.tr(seconds_label)).size(typography::BODY))
        .style(button::secondary)
        .on_press(Message::Picker(picker::Message::Clock(seconds_message)));

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(Alignment::Center)
        .push(face)
        .push(fields)
        .push(text(status_line(&ctx)).size(typography::BODY))
        .push(seconds_button);

    if let Some(key) = ctx.config_warning {
        column = column.push(
            text(ctx.i18n.tr(key))
                .size(typography::BODY)
                .color(ctx.colors.warning),
        );
    }

    container(column)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
