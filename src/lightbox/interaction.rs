// SPDX-License-Identifier: MPL-2.0
//! Interaction modes: zoom, autoplay, idle, and keyboard routing.
//!
//! The coordinator owns the mode flags and the resources tied to them
//! (the autoplay timer guard, the key debouncer, the idle observer). It
//! never navigates by itself: it reports what happened and the
//! [`Lightbox`](super::Lightbox) decides.

use crate::application::port::{DebouncedDispatcher, IdleObserver, IntervalTimer, Key, Release};
use crate::config::Settings;
use crate::domain::gallery::{AutoplaySpeed, InteractionState};
use std::fmt;
use std::time::{Duration, Instant};

/// What a settled key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Next,
    Previous,
    Close,
}

/// Maps a key to its navigation action. Unrelated keys map to nothing.
#[must_use]
pub fn route_key(key: &Key) -> Option<KeyAction> {
    match key {
        Key::ArrowRight | Key::ArrowUp => Some(KeyAction::Next),
        Key::ArrowLeft | Key::ArrowDown => Some(KeyAction::Previous),
        Key::Escape => Some(KeyAction::Close),
        Key::Other(_) => None,
    }
}

pub struct Interaction {
    state: InteractionState,
    zoom_disabled: bool,
    autoplay_speed: AutoplaySpeed,
    autoplay_timer: Option<Release>,
    cycle_started: Option<Instant>,
    keys: Box<dyn DebouncedDispatcher<Key>>,
    idle: Option<Box<dyn IdleObserver>>,
}

impl Interaction {
    /// Creates the coordinator with every mode off.
    ///
    /// `idle` is `None` when idle detection is disabled.
    #[must_use]
    pub fn new(
        settings: &Settings,
        keys: Box<dyn DebouncedDispatcher<Key>>,
        idle: Option<Box<dyn IdleObserver>>,
    ) -> Self {
        Self {
            state: InteractionState::default(),
            zoom_disabled: settings.disable_panzoom,
            autoplay_speed: settings.autoplay_speed(),
            autoplay_timer: None,
            cycle_started: None,
            keys,
            idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[must_use]
    pub fn idle_enabled(&self) -> bool {
        self.idle.is_some()
    }

    // ---------------------------------------------------------------------
    // Zoom
    // ---------------------------------------------------------------------

    /// Toggles zoom. Returns whether the flag changed.
    pub fn set_zoom(&mut self, enabled: bool) -> bool {
        if self.zoom_disabled && enabled {
            tracing::debug!("zoom requested while pan/zoom is disabled");
            return false;
        }
        let changed = self.state.zoom != enabled;
        self.state.zoom = enabled;
        changed
    }

    /// Forces zoom off ahead of a navigation.
    pub fn force_zoom_off(&mut self) {
        self.state.zoom = false;
    }

    // ---------------------------------------------------------------------
    // Autoplay
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn autoplay_period(&self) -> Option<Duration> {
        self.autoplay_speed.period()
    }

    #[must_use]
    pub fn autoplay_running(&self) -> bool {
        self.autoplay_timer.is_some()
    }

    /// Enables autoplay and starts its timer. Returns whether the flag
    /// changed.
    pub fn start_autoplay(&mut self, timer: &mut dyn IntervalTimer) -> bool {
        if self.state.autoplay {
            return false;
        }
        self.state.autoplay = true;
        self.cycle_started = None;
        match self.autoplay_speed.period() {
            Some(period) => {
                tracing::debug!(?period, "autoplay timer started");
                self.autoplay_timer = Some(timer.start(period));
            }
            None => tracing::warn!("autoplay enabled with a zero period, no timer started"),
        }
        true
    }

    /// Disables autoplay and releases its timer. Returns whether the flag
    /// changed.
    pub fn stop_autoplay(&mut self) -> bool {
        if let Some(mut guard) = self.autoplay_timer.take() {
            guard.release();
            tracing::debug!("autoplay timer released");
        }
        self.cycle_started = None;
        std::mem::replace(&mut self.state.autoplay, false)
    }

    /// Accepts a timer tick. Late ticks after a stop are refused.
    pub fn accept_tick(&mut self, at: Instant) -> bool {
        if !self.state.autoplay || self.autoplay_timer.is_none() {
            tracing::trace!("autoplay tick ignored");
            return false;
        }
        self.cycle_started = Some(at);
        true
    }

    /// Start of the running autoplay cycle, if any.
    #[must_use]
    pub fn cycle_started(&self) -> Option<Instant> {
        self.cycle_started
    }

    /// Anchors the first cycle on the first clock reading after a start.
    pub fn anchor_cycle(&mut self, now: Instant) {
        if self.autoplay_running() && self.cycle_started.is_none() {
            self.cycle_started = Some(now);
        }
    }

    // ---------------------------------------------------------------------
    // Keyboard
    // ---------------------------------------------------------------------

    pub fn push_key(&mut self, key: Key, at: Instant) {
        self.keys.push(key, at);
    }

    /// Returns the settled key press, if the settle window has elapsed.
    pub fn settled_key(&mut self, now: Instant) -> Option<Key> {
        self.keys.poll(now)
    }

    // ---------------------------------------------------------------------
    // Idle
    // ---------------------------------------------------------------------

    /// Records user input. Returns whether the idle flag changed.
    pub fn record_activity(&mut self, at: Instant) -> bool {
        let Some(observer) = self.idle.as_mut() else {
            return false;
        };
        observer.activity(at);
        std::mem::replace(&mut self.state.idle, false)
    }

    /// Polls the idle observer. Returns whether the idle flag changed.
    pub fn poll_idle(&mut self, now: Instant) -> bool {
        let Some(observer) = self.idle.as_ref() else {
            return false;
        };
        let idle = observer.is_idle(now);
        let changed = idle != self.state.idle;
        self.state.idle = idle;
        changed
    }

    /// Releases every resource held by the coordinator.
    pub fn shutdown(&mut self) {
        self.stop_autoplay();
        self.keys.cancel();
        self.state.zoom = false;
    }
}

impl fmt::Debug for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interaction")
            .field("state", &self.state)
            .field("zoom_disabled", &self.zoom_disabled)
            .field("autoplay_speed", &self.autoplay_speed)
            .field("autoplay_running", &self.autoplay_running())
            .field("idle_enabled", &self.idle_enabled())
            .finish()
    }
}
