// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debounce driven by explicit instants.

use crate::application::port::DebouncedDispatcher;
use crate::config::defaults::KEY_DEBOUNCE_MS;
use std::time::{Duration, Instant};

/// Default settle window for keyboard navigation.
pub const KEY_DEBOUNCE_WINDOW: Duration = Duration::from_millis(KEY_DEBOUNCE_MS);

/// Holds the last pushed value until `window` has passed without another
/// push.
#[derive(Debug, Clone)]
pub struct TrailingDebounce<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> TrailingDebounce<T> {
    #[must_use]
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    #[must_use]
    pub fn window(&self) -> Duration {
        self.window
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T> Default for TrailingDebounce<T> {
    fn default() -> Self {
        Self::new(KEY_DEBOUNCE_WINDOW)
    }
}

impl<T> DebouncedDispatcher<T> for TrailingDebounce<T> {
    fn push(&mut self, value: T, at: Instant) {
        self.pending = Some((value, at));
    }

    fn poll(&mut self, now: Instant) -> Option<T> {
        let settled = self
            .pending
            .as_ref()
            .is_some_and(|(_, at)| now.saturating_duration_since(*at) >= self.window);
        if settled {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    fn cancel(&mut self) {
        self.pending = None;
    }
}
