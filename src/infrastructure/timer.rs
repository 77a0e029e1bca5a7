// SPDX-License-Identifier: MPL-2.0
//! Autoplay interval timer backed by the Tokio runtime.

use crate::application::port::{IntervalTimer, Release};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError};

/// Spawns one Tokio task per started timer. Ticks arrive on the [`Ticks`]
/// receiver returned by [`TokioInterval::new`]; releasing the guard aborts
/// the task.
#[derive(Debug, Clone)]
pub struct TokioInterval {
    runtime: Handle,
    ticks: mpsc::UnboundedSender<Tick>,
}

#[derive(Debug)]
struct Tick {
    at: Instant,
    /// Cleared when the timer that sent this tick is released.
    live: Arc<AtomicBool>,
}

/// Receiving end of a [`TokioInterval`].
///
/// Ticks queued by a timer that has since been released are dropped, so a
/// stop followed by an immediate restart never delivers the old cycle.
#[derive(Debug)]
pub struct Ticks(mpsc::UnboundedReceiver<Tick>);

impl Ticks {
    /// Waits for the next tick of a live timer. `None` once every sender
    /// is gone.
    pub async fn recv(&mut self) -> Option<Instant> {
        while let Some(tick) = self.0.recv().await {
            if tick.live.load(Ordering::Acquire) {
                return Some(tick.at);
            }
        }
        None
    }

    /// Returns a queued tick of a live timer without waiting.
    ///
    /// # Errors
    ///
    /// Returns [`TryRecvError::Empty`] when no live tick is queued.
    pub fn try_recv(&mut self) -> Result<Instant, TryRecvError> {
        loop {
            let tick = self.0.try_recv()?;
            if tick.live.load(Ordering::Acquire) {
                return Ok(tick.at);
            }
        }
    }
}

impl TokioInterval {
    #[must_use]
    pub fn new(runtime: Handle) -> (Self, Ticks) {
        let (ticks, receiver) = mpsc::unbounded_channel();
        (Self { runtime, ticks }, Ticks(receiver))
    }
}

impl IntervalTimer for TokioInterval {
    fn start(&mut self, period: Duration) -> Release {
        let ticks = self.ticks.clone();
        let live = Arc::new(AtomicBool::new(true));
        let sender_live = Arc::clone(&live);
        let task = self.runtime.spawn(async move {
            let first = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(first, period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                let at = interval.tick().await;
                let tick = Tick {
                    at: at.into_std(),
                    live: Arc::clone(&sender_live),
                };
                if ticks.send(tick).is_err() {
                    break;
                }
            }
        });
        tracing::debug!(?period, "interval task spawned");
        Release::new(move || {
            live.store(false, Ordering::Release);
            task.abort();
        })
    }
}
