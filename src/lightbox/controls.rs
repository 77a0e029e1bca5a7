// SPDX-License-Identifier: MPL-2.0
//! Read-only snapshot handed to the presentation layer.

use crate::config::{Buttons, Options, Settings};
use crate::domain::gallery::{Direction, Item};
use std::time::{Duration, Instant};

/// Button styling plus the offset that keeps buttons clear of the
/// autoplay progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonLayout {
    pub background_color: String,
    pub icon_color: String,
    pub size: String,
    pub icon_padding: String,
    pub offset_from_progress_bar: String,
    pub show_progress_bar: bool,
}

impl ButtonLayout {
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let Buttons {
            background_color,
            icon_color,
            size,
            icon_padding,
        } = options.buttons.clone();
        Self {
            background_color,
            icon_color,
            size,
            icon_padding,
            offset_from_progress_bar: options.progress_bar.height.clone(),
            show_progress_bar: options.progress_bar.show_progress_bar,
        }
    }
}

/// Elapsed fraction of the running autoplay cycle, in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoplayProgress(f32);

impl AutoplayProgress {
    pub const EMPTY: Self = Self(0.0);

    #[must_use]
    pub fn of_cycle(started: Instant, period: Duration, now: Instant) -> Self {
        if period.is_zero() {
            return Self(0.0);
        }
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        Self((elapsed / period.as_secs_f32()).clamp(0.0, 1.0))
    }

    #[must_use]
    pub fn fraction(self) -> f32 {
        self.0
    }
}

/// Everything the controls and the stage need to render one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Controls<'a> {
    pub current: Option<&'a Item>,
    pub direction: Direction,
    pub autoplay: bool,
    pub zoom: bool,
    pub idle: bool,
    pub settings: &'a Settings,
    pub buttons: ButtonLayout,
    /// Present only while autoplay runs and the bar is enabled.
    pub progress: Option<AutoplayProgress>,
}

impl Controls<'_> {
    #[must_use]
    pub fn progress_bar_visible(&self) -> bool {
        self.progress.is_some()
    }
}
