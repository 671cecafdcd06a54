// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the form registry and the clock picker bound to it,
//! and hosts them in a single window.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::form::{Form, Forms};
use crate::i18n::I18n;
use crate::picker::ClockPicker;
use crate::ui::design_tokens::spacing;
use crate::ui::theming::Appearance;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    forms: Forms,
    picker: ClockPicker,
    /// Colors and theme resolved once at startup.
    appearance: Appearance,
    /// Translation key of the warning raised while loading settings.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("selector", &self.picker.input().selector())
            .field("bound", &self.picker.input().is_bound())
            .finish()
    }
}

/// Builds the form the picker binds to from the `[form]` section.
///
/// The form always carries the configured id, so a `--selector` naming
/// another form leaves the picker unbound.
#[must_use]
pub fn build_forms(config: &Config) -> Forms {
    let form = &config.form;
    let id = form.selector.trim_start_matches('#');
    Forms::new().with(
        Form::new(id)
            .with_text(form.hours_field.as_str(), "")
            .with_text(form.minutes_field.as_str(), "")
            .with_toggle(form.meridian_field.as_str(), false),
    )
}

/// Builds the window settings around a clock face of `diameter` pixels.
fn window_settings(diameter: f32) -> window::Settings {
    let width = diameter + spacing::LG * 4.0;
    let height = diameter + spacing::LG * 10.0;
    window::Settings {
        size: iced::Size::new(width, height),
        min_size: Some(iced::Size::new(width, height)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    match paths::get_app_config_dir() {
        Some(dir) => log::info!("config dir: {}", dir.display()),
        None => log::info!("no config dir available; using defaults"),
    }
    let (config, config_warning) = config::load();
    let window = window_settings(config.clock.to_options().diameter);

    // Wrap state in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming it once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, config_warning) = boot_state
            .borrow_mut()
            .take()
            .unwrap_or_else(|| (Flags::default(), config::load().0, None));
        App::new(flags, &config, config_warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Builds the forms and binds the picker to the selected one.
    pub fn new(
        flags: Flags,
        config: &Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang, config);
        let mut forms = build_forms(config);
        let selector = flags.selector.unwrap_or_else(|| config.form.selector.clone());
        let now = chrono::Local::now().time();
        let picker = ClockPicker::new(&selector, &config.picker_options(), &mut forms, now);
        let appearance = config.general.theme_mode.resolve();

        log::info!(
            "clock picker started for {selector} (locale {}, bound: {}, theme: {})",
            i18n.current_locale(),
            picker.input().is_bound(),
            appearance.theme
        );

        let app = Self {
            i18n,
            forms,
            picker,
            appearance,
            config_warning,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.appearance.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.picker)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            forms: &self.forms,
            picker: &self.picker,
            colors: self.appearance.colors,
            config_warning: self.config_warning.as_deref(),
        })
    }
}
