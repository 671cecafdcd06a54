// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[clock]` - Clock face size, hand lengths and the seconds hand
//! - `[form]` - Selector and field names the picker binds to
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `CLOCK_PICKER_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use clock_picker::config;
//!
//! let (mut config, _warning) = config::load();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::clock::ClockOptions;
use crate::error::{Error, Result};
use crate::picker::PickerOptions;
use crate::time_input::FieldNames;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Clock face settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockConfig {
    /// Face diameter in pixels.
    #[serde(default = "default_diameter", skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f32>,

    /// Hours hand length as a fraction of the radius.
    #[serde(
        default = "default_hour_hand_ratio",
        skip_serializing_if = "Option::is_none"
    )]
    pub hour_hand_ratio: Option<f32>,

    /// Minutes hand length as a fraction of the radius.
    #[serde(
        default = "default_minute_hand_ratio",
        skip_serializing_if = "Option::is_none"
    )]
    pub minute_hand_ratio: Option<f32>,

    /// Animate the seconds hand on launch.
    #[serde(
        default = "default_seconds_hand",
        skip_serializing_if = "Option::is_none"
    )]
    pub seconds_hand: Option<bool>,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            diameter: default_diameter(),
            hour_hand_ratio: default_hour_hand_ratio(),
            minute_hand_ratio: default_minute_hand_ratio(),
            seconds_hand: default_seconds_hand(),
        }
    }
}

impl ClockConfig {
    /// Clock options with every value clamped to its supported range.
    ///
    /// Non-finite values (`nan`, `inf`) fall back to their defaults.
    #[must_use]
    pub fn to_options(&self) -> ClockOptions {
        let finite_or = |value: Option<f32>, default: f32| {
            value.filter(|v| v.is_finite()).unwrap_or(default)
        };
        let ratio = |value: Option<f32>, default: f32| {
            finite_or(value, default).clamp(MIN_HAND_RATIO, MAX_HAND_RATIO)
        };

        ClockOptions {
            diameter: finite_or(self.diameter, DEFAULT_DIAMETER)
                .clamp(MIN_DIAMETER, MAX_DIAMETER),
            hour_hand_ratio: ratio(self.hour_hand_ratio, DEFAULT_HOUR_HAND_RATIO),
            minute_hand_ratio: ratio(self.minute_hand_ratio, DEFAULT_MINUTE_HAND_RATIO),
            seconds_hand: self.seconds_hand.unwrap_or(DEFAULT_SECONDS_HAND),
        }
    }
}

/// Form binding settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FormConfig {
    /// Selector of the form to bind (`#id` or `id`).
    pub selector: String,
    pub hours_field: String,
    pub minutes_field: String,
    pub meridian_field: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_FORM_SELECTOR.to_string(),
            hours_field: DEFAULT_HOURS_FIELD.to_string(),
            minutes_field: DEFAULT_MINUTES_FIELD.to_string(),
            meridian_field: DEFAULT_MERIDIAN_FIELD.to_string(),
        }
    }
}

impl FormConfig {
    #[must_use]
    pub fn field_names(&self) -> FieldNames {
        FieldNames {
            hours: self.hours_field.clone(),
            minutes: self.minutes_field.clone(),
            meridian: self.meridian_field.clone(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub clock: ClockConfig,

    #[serde(default)]
    pub form: FormConfig,
}

impl Config {
    /// Picker options built from the `[clock]` and `[form]` sections.
    #[must_use]
    pub fn picker_options(&self) -> PickerOptions {
        PickerOptions {
            clock: self.clock.to_options(),
            fields: self.form.field_names(),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_diameter() -> Option<f32> {
    Some(DEFAULT_DIAMETER)
}

fn default_hour_hand_ratio() -> Option<f32> {
    Some(DEFAULT_HOUR_HAND_RATIO)
}

fn default_minute_hand_ratio() -> Option<f32> {
    Some(DEFAULT_MINUTE_HAND_RATIO)
}

fn default_seconds_hand() -> Option<bool> {
    Some(DEFAULT_SECONDS_HAND)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("failed to load {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            clock: ClockConfig {
                diameter: Some(300.0),
                hour_hand_ratio: Some(0.4),
                minute_hand_ratio: Some(0.9),
                seconds_hand: Some(false),
            },
            form: FormConfig {
                selector: "#alarm".to_string(),
                ..FormConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        let mut file = fs::File::create(&config_path).expect("failed to create file");
        writeln!(file, "this is not = = toml").expect("failed to write");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_file_loads_defaults_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[clock]\ndiameter = \"big\"\n")
            .expect("failed to write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_loads_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let config: Config = toml::from_str("[form]\nselector = \"#alarm\"\n").unwrap();
        assert_eq!(config.form.selector, "#alarm");
        assert_eq!(config.form.hours_field, DEFAULT_HOURS_FIELD);
        assert_eq!(config.clock, ClockConfig::default());
    }

    #[test]
    fn clock_options_are_clamped() {
        let clock = ClockConfig {
            diameter: Some(5000.0),
            hour_hand_ratio: Some(0.0),
            minute_hand_ratio: Some(3.0),
            seconds_hand: None,
        };
        let options = clock.to_options();
        assert_abs_diff_eq!(options.diameter, MAX_DIAMETER);
        assert_abs_diff_eq!(options.hour_hand_ratio, MIN_HAND_RATIO);
        assert_abs_diff_eq!(options.minute_hand_ratio, MAX_HAND_RATIO);
        assert_eq!(options.seconds_hand, DEFAULT_SECONDS_HAND);
    }

    #[test]
    fn non_finite_clock_values_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            "[clock]\ndiameter = nan\nhour_hand_ratio = inf\nminute_hand_ratio = -inf\n",
        )
        .unwrap();
        let options = config.clock.to_options();
        assert_abs_diff_eq!(options.diameter, DEFAULT_DIAMETER);
        assert_abs_diff_eq!(options.hour_hand_ratio, DEFAULT_HOUR_HAND_RATIO);
        assert_abs_diff_eq!(options.minute_hand_ratio, DEFAULT_MINUTE_HAND_RATIO);
    }

    #[test]
    fn picker_options_carry_field_names() {
        let config: Config =
            toml::from_str("[form]\nhours_field = \"h\"\nminutes_field = \"m\"\n").unwrap();
        let options = config.picker_options();
        assert_eq!(options.fields.hours, "h");
        assert_eq!(options.fields.minutes, "m");
        assert_eq!(options.fields.meridian, DEFAULT_MERIDIAN_FIELD);
    }

    #[test]
    fn theme_mode_parses_lowercase() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"dark\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }
}
