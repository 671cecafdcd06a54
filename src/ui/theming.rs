// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme handling and the clock colors derived from it.
//!
//! The mode is resolved once at startup with [`ThemeMode::resolve`]; views
//! read the stored [`Appearance`] instead of querying the desktop per frame.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the clock face and status line are drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub face: Color,
    pub rim: Color,
    pub hour_mark: Color,
    pub hand: Color,
    /// Hand currently driven by drags and typing.
    pub active_hand: Color,
    pub seconds_hand: Color,
    pub warning: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            face: Color::from_rgb(0.96, 0.96, 0.96),
            rim: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
            hour_mark: palette::GRAY_700,
            hand: palette::GRAY_900,
            active_hand: palette::PRIMARY_500,
            seconds_hand: palette::ERROR_500,
            warning: palette::WARNING_500,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            face: Color::from_rgb(0.15, 0.15, 0.15),
            rim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            hour_mark: palette::GRAY_200,
            hand: palette::WHITE,
            active_hand: palette::PRIMARY_400,
            seconds_hand: palette::ERROR_500,
            warning: palette::WARNING_500,
        }
    }
}

/// Clock colors paired with the iced theme they were chosen for.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    pub colors: ColorScheme,
    pub theme: Theme,
}

impl Appearance {
    #[must_use]
    pub fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            theme: Theme::Light,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            colors: ColorScheme::dark(),
            theme: Theme::Dark,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Dark unless the desktop reports light, including on error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Resolves the mode into colors and an iced theme.
    ///
    /// `System` queries the desktop exactly once, so both halves always
    /// agree.
    #[must_use]
    pub fn resolve(self) -> Appearance {
        if self.is_dark() {
            Appearance::dark()
        } else {
            Appearance::light()
        }
    }
}
