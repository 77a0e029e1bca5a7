// SPDX-License-Identifier: MPL-2.0
//! Inactivity detection driven by explicit instants.

use crate::application::port::IdleObserver;
use crate::domain::gallery::IdleThreshold;
use std::time::Instant;

/// Reports idle once `threshold` has elapsed since the last activity.
///
/// The observer counts from its creation until the first activity.
#[derive(Debug, Clone, Copy)]
pub struct InactivityObserver {
    threshold: IdleThreshold,
    last_activity: Instant,
}

impl InactivityObserver {
    #[must_use]
    pub fn new(threshold: IdleThreshold, started_at: Instant) -> Self {
        Self {
            threshold,
            last_activity: started_at,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> IdleThreshold {
        self.threshold
    }
}

impl IdleObserver for InactivityObserver {
    fn activity(&mut self, at: Instant) {
        if at > self.last_activity {
            self.last_activity = at;
        }
    }

    fn is_idle(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_activity) >= self.threshold.as_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn threshold(ms: u64) -> IdleThreshold {
        IdleThreshold::from_millis(ms).unwrap()
    }

    #[test]
    fn becomes_idle_after_threshold() {
        let start = Instant::now();
        let observer = InactivityObserver::new(threshold(3_000), start);

        assert!(!observer.is_idle(start + Duration::from_millis(2_999)));
        assert!(observer.is_idle(start + Duration::from_millis(3_000)));
    }

    #[test]
    fn activity_restarts_the_countdown() {
        let start = Instant::now();
        let mut observer = InactivityObserver::new(threshold(1_000), start);

        observer.activity(start + Duration::from_millis(900));
        assert!(!observer.is_idle(start + Duration::from_millis(1_500)));
        assert!(observer.is_idle(start + Duration::from_millis(1_900)));
    }

    #[test]
    fn stale_activity_is_ignored() {
        let start = Instant::now();
        let mut observer = InactivityObserver::new(threshold(1_000), start + Duration::from_millis(500));

        observer.activity(start);
        assert!(observer.is_idle(start + Duration::from_millis(1_500)));
    }

    #[test]
    fn sub_second_threshold_never_fires_in_practice() {
        let start = Instant::now();
        let observer = InactivityObserver::new(threshold(500), start);
        assert!(!observer.is_idle(start + Duration::from_secs(600)));
    }
}
