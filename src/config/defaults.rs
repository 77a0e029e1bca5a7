// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Settings**: Overlay, autoplay and idle timing
//! - **Buttons**: Control button appearance
//! - **Progress Bar**: Autoplay progress indicator appearance
//! - **Keyboard**: Debounce window for key navigation
//! - **Diagnostics**: Diagnostic log size

// ==========================================================================
// Settings Defaults
// ==========================================================================

/// Default lightbox backdrop color.
pub const DEFAULT_OVERLAY_COLOR: &str = "rgba(30, 30, 30, 0.9)";

/// Default autoplay period (in milliseconds).
pub const DEFAULT_AUTOPLAY_SPEED_MS: u64 = 3_000;

/// Default inactivity delay before controls are hidden (in milliseconds).
pub const DEFAULT_HIDE_CONTROLS_AFTER_MS: u64 = 3_000;

// ==========================================================================
// Buttons Defaults
// ==========================================================================

pub const DEFAULT_BUTTONS_BACKGROUND_COLOR: &str = "rgba(30, 30, 36, 0.8)";
pub const DEFAULT_BUTTONS_ICON_COLOR: &str = "rgba(255, 255, 255, 0.8)";
pub const DEFAULT_BUTTONS_SIZE: &str = "40px";
pub const DEFAULT_BUTTONS_ICON_PADDING: &str = "10px";

// ==========================================================================
// Progress Bar Defaults
// ==========================================================================

pub const DEFAULT_PROGRESS_BAR_BACKGROUND: &str = "#f2f2f2";
pub const DEFAULT_PROGRESS_BAR_FILL: &str = "#000000";
pub const DEFAULT_PROGRESS_BAR_HEIGHT: &str = "3px";

// ==========================================================================
// Keyboard Defaults
// ==========================================================================

/// Settle window for keyboard navigation (in milliseconds).
pub const KEY_DEBOUNCE_MS: u64 = 300;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostics kept in memory.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 256;

/// Minimum diagnostics capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 16;

/// Maximum diagnostics capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 4_096;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_AUTOPLAY_SPEED_MS > 0);
    assert!(DEFAULT_HIDE_CONTROLS_AFTER_MS >= 1_000);
    assert!(KEY_DEBOUNCE_MS > 0);

    assert!(MIN_DIAGNOSTICS_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);
};
