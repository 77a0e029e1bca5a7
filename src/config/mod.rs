// SPDX-License-Identifier: MPL-2.0
//! This module handles the lightbox options, including loading and saving
//! them to a `lightbox.toml` file.
//!
//! # Configuration Sections
//!
//! The options are organized into logical sections:
//! - `[settings]` - Overlay color, autoplay speed, idle delay, disable flags
//! - `[buttons]` - Control button appearance
//! - `[progress_bar]` - Autoplay progress indicator appearance
//!
//! Field names are snake_case; the camelCase names used by web hosts
//! (`autoplaySpeed`, `hideControlsAfter`, ...) are accepted as aliases.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_LIGHTBOX_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config::{self, Options};
//!
//! // Load existing options (returns tuple with optional warning)
//! let (mut options, _warning) = config::load();
//!
//! // Modify a setting
//! options.settings.autoplay_speed = 5000;
//!
//! // Save the modified options
//! config::save(&options).expect("Failed to save options");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::gallery::{AutoplaySpeed, IdleThreshold};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the options file inside the config directory.
pub const CONFIG_FILE: &str = "lightbox.toml";

/// Warning key returned when the options file exists but cannot be parsed.
pub const CONFIG_LOAD_WARNING: &str = "notification-config-load-error";

// =============================================================================
// Idle Delay
// =============================================================================

/// Inactivity delay before hiding controls: milliseconds, or a boolean
/// switch (`true` uses the default delay, `false` disables idle detection).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum HideControlsAfter {
    Enabled(bool),
    Millis(u64),
}

impl HideControlsAfter {
    /// Effective idle threshold, `None` when idle detection is off.
    #[must_use]
    pub fn threshold(self) -> Option<IdleThreshold> {
        match self {
            HideControlsAfter::Enabled(false) => None,
            HideControlsAfter::Enabled(true) => {
                IdleThreshold::from_millis(DEFAULT_HIDE_CONTROLS_AFTER_MS)
            }
            HideControlsAfter::Millis(ms) => IdleThreshold::from_millis(ms),
        }
    }
}

impl Default for HideControlsAfter {
    fn default() -> Self {
        HideControlsAfter::Millis(DEFAULT_HIDE_CONTROLS_AFTER_MS)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Behavioural settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    /// Backdrop color behind the current item.
    #[serde(default = "default_overlay_color", alias = "overlayColor")]
    pub overlay_color: String,

    /// Autoplay period in milliseconds.
    #[serde(default = "default_autoplay_speed", alias = "autoplaySpeed")]
    pub autoplay_speed: u64,

    #[serde(default, alias = "disableKeyboardControls")]
    pub disable_keyboard_controls: bool,

    #[serde(default, alias = "disablePanzoom")]
    pub disable_panzoom: bool,

    #[serde(default, alias = "hideControlsAfter")]
    pub hide_controls_after: HideControlsAfter,
}

impl Settings {
    #[must_use]
    pub fn autoplay_speed(&self) -> AutoplaySpeed {
        AutoplaySpeed::from_millis(self.autoplay_speed)
    }

    #[must_use]
    pub fn idle_threshold(&self) -> Option<IdleThreshold> {
        self.hide_controls_after.threshold()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            overlay_color: default_overlay_color(),
            autoplay_speed: default_autoplay_speed(),
            disable_keyboard_controls: false,
            disable_panzoom: false,
            hide_controls_after: HideControlsAfter::default(),
        }
    }
}

/// Control button appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Buttons {
    #[serde(default = "default_buttons_background", alias = "backgroundColor")]
    pub background_color: String,

    #[serde(default = "default_buttons_icon_color", alias = "iconColor")]
    pub icon_color: String,

    #[serde(default = "default_buttons_size")]
    pub size: String,

    #[serde(default = "default_buttons_icon_padding", alias = "iconPadding")]
    pub icon_padding: String,
}

impl Default for Buttons {
    fn default() -> Self {
        Self {
            background_color: default_buttons_background(),
            icon_color: default_buttons_icon_color(),
            size: default_buttons_size(),
            icon_padding: default_buttons_icon_padding(),
        }
    }
}

/// Autoplay progress indicator appearance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressBar {
    #[serde(default = "default_true", alias = "showProgressBar")]
    pub show_progress_bar: bool,

    #[serde(default = "default_progress_background")]
    pub background: String,

    #[serde(default = "default_progress_fill")]
    pub fill: String,

    #[serde(default = "default_progress_height")]
    pub height: String,
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            show_progress_bar: true,
            background: default_progress_background(),
            fill: default_progress_fill(),
            height: default_progress_height(),
        }
    }
}

// =============================================================================
// Main Options Struct (Sectioned)
// =============================================================================

/// Lightbox options, supplied once per mount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Options {
    #[serde(default)]
    pub settings: Settings,

    #[serde(default)]
    pub buttons: Buttons,

    #[serde(default, alias = "progressBar")]
    pub progress_bar: ProgressBar,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_overlay_color() -> String {
    DEFAULT_OVERLAY_COLOR.to_string()
}

fn default_autoplay_speed() -> u64 {
    DEFAULT_AUTOPLAY_SPEED_MS
}

fn default_buttons_background() -> String {
    DEFAULT_BUTTONS_BACKGROUND_COLOR.to_string()
}

fn default_buttons_icon_color() -> String {
    DEFAULT_BUTTONS_ICON_COLOR.to_string()
}

fn default_buttons_size() -> String {
    DEFAULT_BUTTONS_SIZE.to_string()
}

fn default_buttons_icon_padding() -> String {
    DEFAULT_BUTTONS_ICON_PADDING.to_string()
}

fn default_progress_background() -> String {
    DEFAULT_PROGRESS_BAR_BACKGROUND.to_string()
}

fn default_progress_fill() -> String {
    DEFAULT_PROGRESS_BAR_FILL.to_string()
}

fn default_progress_height() -> String {
    DEFAULT_PROGRESS_BAR_HEIGHT.to_string()
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the options file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the options from the default path.
///
/// Returns a tuple of (options, optional_warning). If loading fails, returns
/// default options with a warning key explaining what went wrong.
pub fn load() -> (Options, Option<String>) {
    load_with_override(None)
}

/// Loads the options from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Options, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(options) => return (options, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "failed to load lightbox options");
                    return (Options::default(), Some(CONFIG_LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Options::default(), None)
}

/// Loads options from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Options> {
    let content = fs::read_to_string(path)?;
    let options: Options = toml::from_str(&content)?;
    Ok(options)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the options to the default path.
pub fn save(options: &Options) -> Result<()> {
    save_with_override(options, None)
}

/// Saves the options to a custom directory.
pub fn save_with_override(options: &Options, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(options, &path);
    }
    Ok(())
}

/// Saves options to a specific path.
pub fn save_to_path(options: &Options, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(options).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn default_options_match_documented_values() {
        let options = Options::default();
        assert_eq!(options.settings.overlay_color, DEFAULT_OVERLAY_COLOR);
        assert_eq!(options.settings.autoplay_speed, 3000);
        assert!(!options.settings.disable_keyboard_controls);
        assert!(!options.settings.disable_panzoom);
        assert_eq!(options.buttons.size, "40px");
        assert!(options.progress_bar.show_progress_bar);
        assert_eq!(options.progress_bar.height, "3px");
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let mut options = Options::default();
        options.settings.autoplay_speed = 1500;
        options.settings.disable_panzoom = true;
        options.settings.hide_controls_after = HideControlsAfter::Enabled(false);

        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&options, &path).expect("failed to save options");
        let loaded = load_from_path(&path).expect("failed to load options");

        assert_eq!(loaded, options);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let options: Options = toml::from_str("[settings]\nautoplay_speed = 900\n")
            .expect("partial options parse");
        assert_eq!(options.settings.autoplay_speed, 900);
        assert_eq!(options.settings.overlay_color, DEFAULT_OVERLAY_COLOR);
        assert_eq!(options.buttons, Buttons::default());
        assert_eq!(options.progress_bar, ProgressBar::default());
    }

    #[test]
    fn camel_case_aliases_are_accepted() {
        let options: Options = toml::from_str(
            "[settings]\nautoplaySpeed = 2000\ndisableKeyboardControls = true\nhideControlsAfter = false\n\n[progressBar]\nshowProgressBar = false\n",
        )
        .expect("camelCase options parse");
        assert_eq!(options.settings.autoplay_speed, 2000);
        assert!(options.settings.disable_keyboard_controls);
        assert_eq!(
            options.settings.hide_controls_after,
            HideControlsAfter::Enabled(false)
        );
        assert!(!options.progress_bar.show_progress_bar);
    }

    #[test]
    fn hide_controls_after_accepts_numbers_and_booleans() {
        assert_eq!(
            HideControlsAfter::Millis(5000).threshold().map(|t| t.as_duration()),
            Some(Duration::from_millis(5000))
        );
        assert!(HideControlsAfter::Millis(0).threshold().is_none());
        assert!(HideControlsAfter::Enabled(false).threshold().is_none());
        assert_eq!(
            HideControlsAfter::Enabled(true)
                .threshold()
                .map(|t| t.as_duration()),
            Some(Duration::from_millis(DEFAULT_HIDE_CONTROLS_AFTER_MS))
        );
    }

    #[test]
    fn load_with_override_warns_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (options, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(options, Options::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (options, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(options, Options::default());
        assert!(warning.is_none());
    }
}
