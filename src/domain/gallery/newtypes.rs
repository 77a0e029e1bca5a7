// SPDX-License-Identifier: MPL-2.0
//! Gallery newtypes.
//!
//! This module provides type-safe wrappers for timing and zoom values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Idle Bounds
// =============================================================================

/// Idle detection bounds (milliseconds).
pub mod idle_bounds {
    /// Configured values below this floor disable idle detection in practice.
    pub const FLOOR_MS: u64 = 1_000;
    /// Threshold substituted for values below the floor.
    pub const UNREACHABLE_MS: u64 = 9_999_999;
}

// =============================================================================
// Zoom Bounds
// =============================================================================

/// Zoom factor bounds for the pan/zoom controller.
pub mod zoom_bounds {
    /// Minimum zoom factor.
    pub const MIN_FACTOR: f32 = 0.9;
    /// Maximum zoom factor.
    pub const MAX_FACTOR: f32 = 3.0;
    /// Factor applied when zoom mode is entered.
    pub const INITIAL_FACTOR: f32 = 1.5;
}

// =============================================================================
// AutoplaySpeed
// =============================================================================

/// Period between two autoplay ticks.
///
/// A zero period is representable but never schedules a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplaySpeed(Duration);

impl AutoplaySpeed {
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Returns the timer period, or `None` if the period is zero.
    #[must_use]
    pub fn period(self) -> Option<Duration> {
        (!self.0.is_zero()).then_some(self.0)
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

// =============================================================================
// IdleThreshold
// =============================================================================

/// Inactivity duration after which the lightbox controls are hidden.
///
/// # Example
///
/// ```
/// use iced_lightbox::domain::gallery::IdleThreshold;
/// use std::time::Duration;
///
/// let threshold = IdleThreshold::from_millis(3000).unwrap();
/// assert_eq!(threshold.as_duration(), Duration::from_millis(3000));
///
/// // Values below one second are pushed out of reach
/// let tiny = IdleThreshold::from_millis(500).unwrap();
/// assert_eq!(tiny.as_duration(), Duration::from_millis(9_999_999));
///
/// // Zero disables idle detection
/// assert!(IdleThreshold::from_millis(0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleThreshold(Duration);

impl IdleThreshold {
    /// Builds a threshold from a configured value in milliseconds.
    ///
    /// Returns `None` when idle detection is disabled (`0`).
    #[must_use]
    pub fn from_millis(millis: u64) -> Option<Self> {
        if millis == 0 {
            return None;
        }
        let effective = if millis < idle_bounds::FLOOR_MS {
            idle_bounds::UNREACHABLE_MS
        } else {
            millis
        };
        Some(Self(Duration::from_millis(effective)))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

// =============================================================================
// ZoomFactor
// =============================================================================

/// Zoom multiplier, guaranteed to be within valid range (0.9×–3×).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    /// Factor applied when zoom mode is entered.
    #[must_use]
    pub fn initial() -> Self {
        Self(zoom_bounds::INITIAL_FACTOR)
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}
