// SPDX-License-Identifier: MPL-2.0
//! Repeating timer port used by autoplay.

use super::Release;
use std::time::Duration;

/// Schedules repeating ticks.
///
/// Every tick must be delivered to
/// [`Lightbox::autoplay_tick`](crate::lightbox::Lightbox::autoplay_tick)
/// until the returned guard is released.
pub trait IntervalTimer {
    /// Starts a timer with a non-zero `period`.
    fn start(&mut self, period: Duration) -> Release;
}
