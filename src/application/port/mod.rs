// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the side-effecting capabilities the lightbox
//! controller drives. Hosts (the Iced demo, a browser shell, tests) provide
//! the implementations.
//!
//! # Available Ports
//!
//! - [`keyboard`]: Global key-event subscription
//! - [`zoom`]: Pan/zoom gesture controllers bound to the rendered image
//! - [`surface`]: Class toggling on the stage and page scroll lock
//! - [`fullscreen`]: Platform fullscreen mode
//! - [`timer`]: Repeating interval timer for autoplay
//! - [`store`]: The external store owning the open/closed flag
//! - [`timing`]: Debounce and idle detection primitives
//!
//! # Design Notes
//!
//! - All traits use domain types only (no Iced handles, no DOM types)
//! - Subscriptions are returned as a [`Release`] guard; dropping the guard
//!   releases the resource exactly once
//! - Ports are single-threaded (`!Send` is fine), matching the event loop

pub mod fullscreen;
pub mod keyboard;
pub mod store;
pub mod surface;
pub mod timer;
pub mod timing;
pub mod zoom;

pub use fullscreen::FullscreenPort;
pub use keyboard::{Key, KeyboardSource};
pub use store::{StoreAction, StoreDispatcher};
pub use surface::{Region, StageSurface, BODY_OPENED_CLASS, STAGE_IDLE_CLASS};
pub use timer::IntervalTimer;
pub use timing::{DebouncedDispatcher, IdleObserver};
pub use zoom::{ImageTarget, ImageVariant, ZoomController, ZoomGestures, ZoomOptions};

use std::fmt;

/// Owned release handle for an acquired resource.
///
/// The release closure runs at most once: on [`Release::release`] or on drop,
/// whichever comes first. Releasing twice is a no-op.
pub struct Release(Option<Box<dyn FnOnce()>>);

impl Release {
    /// Wraps the function that releases the resource.
    #[must_use]
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(release)))
    }

    /// A handle with nothing to release.
    #[must_use]
    pub fn noop() -> Self {
        Self(None)
    }

    /// Releases the resource now.
    pub fn release(&mut self) {
        if let Some(release) = self.0.take() {
            release();
        }
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.0.is_none()
    }
}

impl Drop for Release {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Release")
            .field("released", &self.is_released())
            .finish()
    }
}
