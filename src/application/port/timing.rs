// SPDX-License-Identifier: MPL-2.0
//! Debounce and idle-detection capabilities.
//!
//! Both are driven by explicit instants so the controller never reads the
//! clock itself. Default implementations live in
//! [`lightbox::debounce`](crate::lightbox::debounce) and
//! [`lightbox::idle`](crate::lightbox::idle).

use std::time::Instant;

/// Trailing-edge debounce: values pushed within the settle window coalesce
/// to the last one.
pub trait DebouncedDispatcher<T> {
    /// Records a value observed at `at`.
    fn push(&mut self, value: T, at: Instant);

    /// Returns the settled value once the window has elapsed since the last
    /// push. Each value is returned at most once.
    fn poll(&mut self, now: Instant) -> Option<T>;

    /// Drops any pending value.
    fn cancel(&mut self);
}

/// Inactivity detector.
pub trait IdleObserver {
    /// Records user input at `at`.
    fn activity(&mut self, at: Instant);

    /// Returns whether the user has been inactive for the threshold at `now`.
    fn is_idle(&self, now: Instant) -> bool;
}
