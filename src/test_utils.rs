// SPDX-License-Identifier: MPL-2.0
//! Recording port implementations for tests and headless hosts.
//!
//! Every recorder writes into a shared [`Journal`], so a test can assert on
//! the exact order in which the lightbox acquired and released resources
//! across ports.

use crate::application::port::{
    FullscreenPort, ImageTarget, IntervalTimer, KeyboardSource, Region, Release, StageSurface,
    StoreAction, StoreDispatcher, ZoomController, ZoomGestures, ZoomOptions,
};
use crate::domain::gallery::{ItemId, ZoomFactor};
use crate::lightbox::Platform;
use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;
use std::time::Duration;

/// One observable side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum PortEvent {
    KeySubscribed,
    KeyReleased,
    ZoomAttached(ItemId, ZoomOptions),
    ZoomAbs { x: f32, y: f32, factor: f32 },
    ZoomMoved { x: f32, y: f32 },
    ZoomDisposed(ItemId),
    ClassSet {
        region: Region,
        class: &'static str,
        present: bool,
    },
    PageScroll(bool),
    TimerStarted(Duration),
    TimerReleased,
    Fullscreen(ImageTarget),
    Dispatched(StoreAction),
}

/// Count of resources acquired through a recorder and not yet released.
///
/// Kept apart from the [`Journal`] so clearing the journal mid-test does not
/// change what is alive.
#[derive(Debug, Clone, Default)]
struct LiveCount(Rc<Cell<usize>>);

impl LiveCount {
    fn acquire(&self) {
        self.0.set(self.0.get() + 1);
    }

    fn release(&self) {
        self.0.set(self.0.get().saturating_sub(1));
    }

    fn get(&self) -> usize {
        self.0.get()
    }
}

/// Ordered log of port events, shared between recorders.
#[derive(Debug, Clone, Default)]
pub struct Journal(Rc<RefCell<Vec<PortEvent>>>);

impl Journal {
    pub fn record(&self, event: PortEvent) {
        self.0.borrow_mut().push(event);
    }

    #[must_use]
    pub fn events(&self) -> Vec<PortEvent> {
        self.0.borrow().clone()
    }

    #[must_use]
    pub fn count(&self, matches: impl Fn(&PortEvent) -> bool) -> usize {
        self.0.borrow().iter().filter(|event| matches(event)).count()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

// =============================================================================
// Keyboard
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct RecordingKeyboard {
    journal: Journal,
    live: LiveCount,
}

impl RecordingKeyboard {
    #[must_use]
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            live: LiveCount::default(),
        }
    }

    /// Subscriptions currently alive.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

impl KeyboardSource for RecordingKeyboard {
    fn subscribe(&mut self) -> Release {
        self.journal.record(PortEvent::KeySubscribed);
        self.live.acquire();
        let journal = self.journal.clone();
        let live = self.live.clone();
        Release::new(move || {
            live.release();
            journal.record(PortEvent::KeyReleased);
        })
    }
}

// =============================================================================
// Zoom
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct RecordingZoom {
    journal: Journal,
    live: LiveCount,
}

impl RecordingZoom {
    #[must_use]
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            live: LiveCount::default(),
        }
    }

    /// Controllers attached and not yet disposed.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

struct RecordingZoomController {
    item: ItemId,
    journal: Journal,
    live: LiveCount,
}

impl ZoomController for RecordingZoomController {
    fn zoom_abs(&mut self, x: f32, y: f32, factor: ZoomFactor) {
        self.journal.record(PortEvent::ZoomAbs {
            x,
            y,
            factor: factor.value(),
        });
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.journal.record(PortEvent::ZoomMoved { x, y });
    }

    fn dispose(&mut self) {
        self.live.release();
        self.journal.record(PortEvent::ZoomDisposed(self.item.clone()));
    }
}

impl ZoomGestures for RecordingZoom {
    fn attach(&mut self, target: &ImageTarget, options: ZoomOptions) -> Box<dyn ZoomController> {
        self.journal
            .record(PortEvent::ZoomAttached(target.item.clone(), options));
        self.live.acquire();
        Box::new(RecordingZoomController {
            item: target.item.clone(),
            journal: self.journal.clone(),
            live: self.live.clone(),
        })
    }
}

// =============================================================================
// Stage
// =============================================================================

#[derive(Debug, Default)]
struct StageSnapshot {
    classes: HashSet<(Region, &'static str)>,
    scroll_disabled: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingStage {
    journal: Journal,
    snapshot: Rc<RefCell<StageSnapshot>>,
}

impl RecordingStage {
    #[must_use]
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            snapshot: Rc::default(),
        }
    }

    #[must_use]
    pub fn has_class(&self, region: Region, class: &'static str) -> bool {
        self.snapshot.borrow().classes.contains(&(region, class))
    }

    #[must_use]
    pub fn page_scroll_enabled(&self) -> bool {
        !self.snapshot.borrow().scroll_disabled
    }
}

impl StageSurface for RecordingStage {
    fn set_class(&mut self, region: Region, class: &'static str, present: bool) {
        self.journal.record(PortEvent::ClassSet {
            region,
            class,
            present,
        });
        let mut snapshot = self.snapshot.borrow_mut();
        if present {
            snapshot.classes.insert((region, class));
        } else {
            snapshot.classes.remove(&(region, class));
        }
    }

    fn set_page_scroll(&mut self, enabled: bool) {
        self.journal.record(PortEvent::PageScroll(enabled));
        self.snapshot.borrow_mut().scroll_disabled = !enabled;
    }
}

// =============================================================================
// Fullscreen
// =============================================================================

#[derive(Debug, Clone)]
pub struct RecordingFullscreen {
    supported: bool,
    journal: Journal,
}

impl RecordingFullscreen {
    #[must_use]
    pub fn new(journal: Journal, supported: bool) -> Self {
        Self { supported, journal }
    }

    #[must_use]
    pub fn supported() -> Self {
        Self::new(Journal::default(), true)
    }

    #[must_use]
    pub fn unsupported() -> Self {
        Self::new(Journal::default(), false)
    }

    #[must_use]
    pub fn requests(&self) -> Vec<ImageTarget> {
        self.journal
            .events()
            .into_iter()
            .filter_map(|event| match event {
                PortEvent::Fullscreen(target) => Some(target),
                _ => None,
            })
            .collect()
    }
}

impl FullscreenPort for RecordingFullscreen {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn request(&mut self, target: &ImageTarget) {
        self.journal.record(PortEvent::Fullscreen(target.clone()));
    }
}

// =============================================================================
// Timer
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct RecordingTimer {
    journal: Journal,
    live: LiveCount,
}

impl RecordingTimer {
    #[must_use]
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            live: LiveCount::default(),
        }
    }

    /// Periods of every timer started so far.
    #[must_use]
    pub fn started(&self) -> Vec<Duration> {
        self.journal
            .events()
            .into_iter()
            .filter_map(|event| match event {
                PortEvent::TimerStarted(period) => Some(period),
                _ => None,
            })
            .collect()
    }

    /// Timers currently alive.
    #[must_use]
    pub fn live(&self) -> usize {
        self.live.get()
    }
}

impl IntervalTimer for RecordingTimer {
    fn start(&mut self, period: Duration) -> Release {
        self.journal.record(PortEvent::TimerStarted(period));
        self.live.acquire();
        let journal = self.journal.clone();
        let live = self.live.clone();
        Release::new(move || {
            live.release();
            journal.record(PortEvent::TimerReleased);
        })
    }
}

// =============================================================================
// Store
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    journal: Journal,
}

impl RecordingStore {
    #[must_use]
    pub fn new(journal: Journal) -> Self {
        Self { journal }
    }

    #[must_use]
    pub fn dispatched(&self) -> Vec<StoreAction> {
        self.journal
            .events()
            .into_iter()
            .filter_map(|event| match event {
                PortEvent::Dispatched(action) => Some(action),
                _ => None,
            })
            .collect()
    }
}

impl StoreDispatcher for RecordingStore {
    fn dispatch(&mut self, action: StoreAction) {
        self.journal.record(PortEvent::Dispatched(action));
    }
}

// =============================================================================
// Platform
// =============================================================================

/// A full set of recorders sharing one journal.
#[derive(Debug, Clone)]
pub struct FakePlatform {
    pub journal: Journal,
    pub keyboard: RecordingKeyboard,
    pub zoom: RecordingZoom,
    pub stage: RecordingStage,
    pub fullscreen: RecordingFullscreen,
    pub timer: RecordingTimer,
    pub store: RecordingStore,
}

impl FakePlatform {
    #[must_use]
    pub fn new() -> Self {
        Self::with_fullscreen(true)
    }

    #[must_use]
    pub fn with_fullscreen(supported: bool) -> Self {
        let journal = Journal::default();
        Self {
            keyboard: RecordingKeyboard::new(journal.clone()),
            zoom: RecordingZoom::new(journal.clone()),
            stage: RecordingStage::new(journal.clone()),
            fullscreen: RecordingFullscreen::new(journal.clone(), supported),
            timer: RecordingTimer::new(journal.clone()),
            store: RecordingStore::new(journal.clone()),
            journal,
        }
    }

    /// Boxes clones of the recorders for a [`Lightbox`](crate::lightbox::Lightbox).
    #[must_use]
    pub fn platform(&self) -> Platform {
        Platform {
            keyboard: Box::new(self.keyboard.clone()),
            zoom: Box::new(self.zoom.clone()),
            stage: Box::new(self.stage.clone()),
            fullscreen: Box::new(self.fullscreen.clone()),
            timer: Box::new(self.timer.clone()),
            store: Box::new(self.store.clone()),
        }
    }
}

impl Default for FakePlatform {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::ImageVariant;

    #[test]
    fn recorders_share_one_journal() {
        let fake = FakePlatform::new();
        let mut platform = fake.platform();

        let guard = platform.keyboard.subscribe();
        platform.stage.set_page_scroll(false);
        drop(guard);

        assert_eq!(
            fake.journal.events(),
            vec![
                PortEvent::KeySubscribed,
                PortEvent::PageScroll(false),
                PortEvent::KeyReleased,
            ]
        );
        assert_eq!(fake.keyboard.live(), 0);
        assert!(!fake.stage.page_scroll_enabled());
    }

    #[test]
    fn live_counts_survive_a_cleared_journal() {
        let fake = FakePlatform::new();
        let mut platform = fake.platform();
        let target = ImageTarget {
            item: ItemId::from("A"),
            source: "https://example.com/a.jpg".to_string(),
            variant: ImageVariant::Zoomed,
        };

        let key = platform.keyboard.subscribe();
        let mut zoom = platform.zoom.attach(&target, ZoomOptions::default());
        let timer = platform.timer.start(Duration::from_millis(500));
        fake.journal.clear();

        assert_eq!(fake.keyboard.live(), 1);
        assert_eq!(fake.zoom.live(), 1);
        assert_eq!(fake.timer.live(), 1);

        drop(key);
        zoom.dispose();
        drop(timer);

        assert_eq!(fake.keyboard.live(), 0);
        assert_eq!(fake.zoom.live(), 0);
        assert_eq!(fake.timer.live(), 0);
        assert_eq!(fake.journal.count(|_| true), 3);
    }
}
