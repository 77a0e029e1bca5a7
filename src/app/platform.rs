// SPDX-License-Identifier: MPL-2.0
//! Iced adapters for the lightbox ports.
//!
//! Ports cannot issue Iced tasks or subscriptions themselves. Each adapter
//! records what the lightbox asked for in a shared [`HostState`], and the
//! application turns that state into subscriptions and tasks after every
//! update.

use crate::application::port::{
    FullscreenPort, ImageTarget, IntervalTimer, KeyboardSource, Region, Release, StageSurface,
    StoreAction, StoreDispatcher, ZoomController, ZoomGestures, ZoomOptions, STAGE_IDLE_CLASS,
};
use crate::domain::gallery::{ItemId, ZoomFactor};
use crate::lightbox::Platform;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Zoom controller state mirrored for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomView {
    pub item: ItemId,
    pub factor: f32,
    pub offset: (f32, f32),
    pub min_zoom: f32,
    pub max_zoom: f32,
}

/// What the lightbox currently holds from the host.
#[derive(Debug, Default)]
pub struct HostState {
    /// A key subscription is live.
    pub keyboard: bool,
    /// Period of the live autoplay timer.
    pub autoplay_period: Option<Duration>,
    pub zoom: Option<ZoomView>,
    pub stage_idle: bool,
    pub scroll_locked: bool,
    /// Fullscreen was requested and not yet applied.
    pub pending_fullscreen: Option<ImageTarget>,
    /// The store was asked to close the lightbox.
    pub close_requested: bool,
}

pub type SharedHost = Rc<RefCell<HostState>>;

/// Builds a [`Platform`] whose adapters all write into `host`.
#[must_use]
pub fn iced_platform(host: &SharedHost) -> Platform {
    Platform {
        keyboard: Box::new(IcedKeyboard(Rc::clone(host))),
        zoom: Box::new(IcedZoom(Rc::clone(host))),
        stage: Box::new(IcedStage(Rc::clone(host))),
        fullscreen: Box::new(IcedFullscreen(Rc::clone(host))),
        timer: Box::new(IcedTimer(Rc::clone(host))),
        store: Box::new(IcedStore(Rc::clone(host))),
    }
}

struct IcedKeyboard(SharedHost);

impl KeyboardSource for IcedKeyboard {
    fn subscribe(&mut self) -> Release {
        self.0.borrow_mut().keyboard = true;
        let host = Rc::clone(&self.0);
        Release::new(move || host.borrow_mut().keyboard = false)
    }
}

struct IcedTimer(SharedHost);

impl IntervalTimer for IcedTimer {
    fn start(&mut self, period: Duration) -> Release {
        self.0.borrow_mut().autoplay_period = Some(period);
        let host = Rc::clone(&self.0);
        Release::new(move || host.borrow_mut().autoplay_period = None)
    }
}

struct IcedZoom(SharedHost);

impl ZoomGestures for IcedZoom {
    fn attach(&mut self, target: &ImageTarget, options: ZoomOptions) -> Box<dyn ZoomController> {
        self.0.borrow_mut().zoom = Some(ZoomView {
            item: target.item.clone(),
            factor: 1.0,
            offset: (0.0, 0.0),
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
        });
        Box::new(IcedZoomController(Rc::clone(&self.0)))
    }
}

struct IcedZoomController(SharedHost);

impl ZoomController for IcedZoomController {
    fn zoom_abs(&mut self, _x: f32, _y: f32, factor: ZoomFactor) {
        if let Some(zoom) = self.0.borrow_mut().zoom.as_mut() {
            zoom.factor = factor.value();
        }
    }

    fn move_to(&mut self, x: f32, y: f32) {
        if let Some(zoom) = self.0.borrow_mut().zoom.as_mut() {
            zoom.offset = (x, y);
        }
    }

    fn dispose(&mut self) {
        self.0.borrow_mut().zoom = None;
    }
}

struct IcedStage(SharedHost);

impl StageSurface for IcedStage {
    fn set_class(&mut self, region: Region, class: &'static str, present: bool) {
        let mut host = self.0.borrow_mut();
        match (region, class) {
            (Region::Stage, STAGE_IDLE_CLASS) => host.stage_idle = present,
            (Region::Body, _) => host.scroll_locked = present,
            _ => {}
        }
    }

    // The window has no page behind it; the body class already tracks the lock.
    fn set_page_scroll(&mut self, _enabled: bool) {}
}

struct IcedFullscreen(SharedHost);

impl FullscreenPort for IcedFullscreen {
    fn is_supported(&self) -> bool {
        true
    }

    fn request(&mut self, target: &ImageTarget) {
        self.0.borrow_mut().pending_fullscreen = Some(target.clone());
    }
}

struct IcedStore(SharedHost);

impl StoreDispatcher for IcedStore {
    fn dispatch(&mut self, action: StoreAction) {
        match action {
            StoreAction::CloseLightbox => self.0.borrow_mut().close_requested = true,
        }
    }
}
