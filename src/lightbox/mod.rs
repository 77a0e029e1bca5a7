// SPDX-License-Identifier: MPL-2.0
//! The lightbox controller.
//!
//! [`Lightbox`] shows one item of a [`Collection`] at a time and owns every
//! resource tied to being open: the key subscription, the zoom controller,
//! the autoplay timer and the scroll lock. Each event goes through the
//! navigation state first, then the interaction modes react, then the
//! lifecycle manager re-synchronises resources.
//!
//! # Example
//!
//! ```
//! use iced_lightbox::domain::gallery::{Collection, Item};
//! use iced_lightbox::lightbox::Lightbox;
//! use iced_lightbox::test_utils::FakePlatform;
//! use std::time::Instant;
//!
//! let collection = Collection::new(vec![Item::new("a", "a.jpg"), Item::new("b", "b.jpg")]);
//! let fake = FakePlatform::new();
//! let mut lightbox = Lightbox::builder(collection, fake.platform()).open(Instant::now());
//!
//! lightbox.next().unwrap();
//! assert_eq!(lightbox.current().map(|item| item.id.as_str()), Some("b"));
//! ```

pub mod callbacks;
pub mod controls;
pub mod debounce;
pub mod fullscreen;
pub mod idle;
pub mod interaction;
pub mod lifecycle;
pub mod navigation;

#[cfg(test)]
mod tests;

pub use callbacks::{
    CallbackSlot, LightboxEvent, RawCallback, RawCallbacks, SlideAction, SlideChange, SlideCount,
    Slides,
};
pub use controls::{AutoplayProgress, ButtonLayout, Controls};
pub use debounce::TrailingDebounce;
pub use idle::InactivityObserver;
pub use interaction::{route_key, KeyAction};
pub use navigation::{NavigationState, Transition};

use crate::application::port::{
    DebouncedDispatcher, FullscreenPort, IdleObserver, IntervalTimer, Key, KeyboardSource,
    StageSurface, StoreAction, StoreDispatcher, ZoomGestures,
};
use crate::config::Options;
use crate::diagnostics::Diagnostics;
use crate::domain::gallery::{Collection, Direction, InteractionState, Item, ItemId};
use crate::error::Result;
use callbacks::Callbacks;
use interaction::Interaction;
use lifecycle::{Lifecycle, SyncInputs};
use std::fmt;
use std::time::Instant;

/// Port implementations supplied by the host.
pub struct Platform {
    pub keyboard: Box<dyn KeyboardSource>,
    pub zoom: Box<dyn ZoomGestures>,
    pub stage: Box<dyn StageSurface>,
    pub fullscreen: Box<dyn FullscreenPort>,
    pub timer: Box<dyn IntervalTimer>,
    pub store: Box<dyn StoreDispatcher>,
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform").finish_non_exhaustive()
    }
}

/// A request to save the current item's source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub item: ItemId,
    pub source: String,
    /// File name suggested to the save dialog.
    pub file_name: String,
}

impl DownloadRequest {
    #[must_use]
    pub fn for_item(item: &Item) -> Self {
        let path = item
            .source
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let file_name = path
            .rsplit(['/', '\\'])
            .next()
            .filter(|name| !name.is_empty())
            .map_or_else(|| item.id.to_string(), str::to_string);
        Self {
            item: item.id.clone(),
            source: item.source.clone(),
            file_name,
        }
    }
}

/// Messages the host feeds into [`Lightbox::update`].
#[derive(Debug, Clone)]
pub enum Message {
    SelectItem(ItemId),
    Next,
    Previous,
    Close,
    RequestFullscreen,
    Download,
    SetZoom(bool),
    SetAutoplay(bool),
    AutoplayTick(Instant),
    KeyPressed { key: Key, at: Instant },
    Activity(Instant),
    Tick(Instant),
    SetCollection(Collection),
}

/// What the host has to do after a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The lightbox closed and released its resources.
    Closed,
    /// Save the given source.
    Download(DownloadRequest),
}

/// Collects everything needed to open a [`Lightbox`].
pub struct LightboxBuilder {
    collection: Collection,
    platform: Platform,
    selected: Option<ItemId>,
    options: Options,
    callbacks: RawCallbacks,
    diagnostics: Diagnostics,
    keys: Option<Box<dyn DebouncedDispatcher<Key>>>,
    idle: Option<Box<dyn IdleObserver>>,
}

impl LightboxBuilder {
    /// Item shown first. Unknown identifiers fall back to the first item.
    #[must_use]
    pub fn selected(mut self, id: impl Into<ItemId>) -> Self {
        self.selected = Some(id.into());
        self
    }

    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn callbacks(mut self, callbacks: RawCallbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    #[must_use]
    pub fn diagnostics(mut self, diagnostics: Diagnostics) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Replaces the default 300 ms key debouncer.
    #[must_use]
    pub fn key_debouncer(mut self, keys: Box<dyn DebouncedDispatcher<Key>>) -> Self {
        self.keys = Some(keys);
        self
    }

    /// Replaces the default inactivity observer. Ignored when idle
    /// detection is disabled in the options.
    #[must_use]
    pub fn idle_observer(mut self, idle: Box<dyn IdleObserver>) -> Self {
        self.idle = Some(idle);
        self
    }

    /// Mounts the lightbox at `now`.
    ///
    /// Reports the opening and the item count once, then acquires resources.
    #[must_use]
    pub fn open(self, now: Instant) -> Lightbox {
        let Self {
            collection,
            platform,
            selected,
            options,
            callbacks,
            diagnostics,
            keys,
            idle,
        } = self;

        let callbacks = Callbacks::validate(callbacks, &diagnostics);
        let keys = keys.unwrap_or_else(|| {
            Box::new(TrailingDebounce::<Key>::default()) as Box<dyn DebouncedDispatcher<Key>>
        });
        let idle = options.settings.idle_threshold().map(|threshold| {
            idle.unwrap_or_else(|| {
                Box::new(InactivityObserver::new(threshold, now)) as Box<dyn IdleObserver>
            })
        });
        let interaction = Interaction::new(&options.settings, keys, idle);

        let initial = selected.and_then(|id| {
            let item = collection.iter().find(|item| item.id == id).cloned();
            if item.is_none() {
                tracing::warn!(item = %id, "selected item not in collection");
            }
            item
        });

        let mut lightbox = Lightbox {
            collection,
            options,
            navigation: NavigationState::new(initial),
            interaction,
            lifecycle: Lifecycle::new(),
            callbacks,
            platform,
            diagnostics,
            closed: false,
        };

        let opened = LightboxEvent {
            opened: true,
            current_slide: lightbox.navigation.current().cloned(),
        };
        lightbox.callbacks.opened.invoke(&opened);
        lightbox.callbacks.count.invoke(&SlideCount {
            total_slide: lightbox.collection.len(),
        });
        tracing::debug!(items = lightbox.collection.len(), "lightbox opened");

        lightbox.resync();
        lightbox
    }
}

pub struct Lightbox {
    collection: Collection,
    options: Options,
    navigation: NavigationState,
    interaction: Interaction,
    lifecycle: Lifecycle,
    callbacks: Callbacks,
    platform: Platform,
    diagnostics: Diagnostics,
    closed: bool,
}

impl Lightbox {
    #[must_use]
    pub fn builder(collection: Collection, platform: Platform) -> LightboxBuilder {
        LightboxBuilder {
            collection,
            platform,
            selected: None,
            options: Options::default(),
            callbacks: RawCallbacks::default(),
            diagnostics: Diagnostics::default(),
            keys: None,
            idle: None,
        }
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------

    #[must_use]
    pub fn current(&self) -> Option<&Item> {
        self.navigation.current()
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.navigation.direction()
    }

    #[must_use]
    pub fn interaction(&self) -> InteractionState {
        self.interaction.state()
    }

    #[must_use]
    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !self.closed
    }

    /// Whether key presses are currently accepted.
    #[must_use]
    pub fn keyboard_active(&self) -> bool {
        self.lifecycle.keyboard_active()
    }

    /// Snapshot for rendering the controls and the stage at `now`.
    #[must_use]
    pub fn controls(&self, now: Instant) -> Controls<'_> {
        let state = self.interaction.state();
        let progress = if state.autoplay && self.options.progress_bar.show_progress_bar {
            let period = self.interaction.autoplay_period();
            Some(match (self.interaction.cycle_started(), period) {
                (Some(started), Some(period)) => AutoplayProgress::of_cycle(started, period, now),
                _ => AutoplayProgress::EMPTY,
            })
        } else {
            None
        };

        Controls {
            current: self.navigation.current(),
            direction: self.navigation.direction(),
            autoplay: state.autoplay,
            zoom: state.zoom,
            idle: state.idle,
            settings: &self.options.settings,
            buttons: ButtonLayout::from_options(&self.options),
            progress,
        }
    }

    // ---------------------------------------------------------------------
    // Navigation
    // ---------------------------------------------------------------------

    /// Shows `target` directly. Ignored once the lightbox is closed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ItemNotFound`](crate::error::Error::ItemNotFound)
    /// when `target` is not in the collection. Nothing changes in that case.
    pub fn select_item(&mut self, target: &ItemId) -> Result<()> {
        if self.ignored_after_close("selection") {
            return Ok(());
        }
        let transition = navigation::plan_select(&self.collection, target)
            .inspect_err(|err| tracing::warn!(%err, "selection rejected"))?;
        self.transition(transition);
        Ok(())
    }

    /// Moves forward from `from`, wrapping past the last item.
    ///
    /// # Errors
    ///
    /// Returns an error when `from` is not in the collection.
    pub fn select_next(&mut self, from: &ItemId) -> Result<()> {
        if self.ignored_after_close("next") {
            return Ok(());
        }
        let transition = navigation::plan_next(&self.collection, from)
            .inspect_err(|err| tracing::warn!(%err, "next rejected"))?;
        self.transition(transition);
        Ok(())
    }

    /// Moves backward from `from`, wrapping before the first item.
    ///
    /// # Errors
    ///
    /// Returns an error when `from` is not in the collection.
    pub fn select_previous(&mut self, from: &ItemId) -> Result<()> {
        if self.ignored_after_close("previous") {
            return Ok(());
        }
        let transition = navigation::plan_previous(&self.collection, from)
            .inspect_err(|err| tracing::warn!(%err, "previous rejected"))?;
        self.transition(transition);
        Ok(())
    }

    /// Moves forward from the current item. No-op without a current item.
    ///
    /// # Errors
    ///
    /// Returns an error when the current item left the collection.
    pub fn next(&mut self) -> Result<()> {
        match self.navigation.current_id().cloned() {
            Some(current) => self.select_next(&current),
            None => Ok(()),
        }
    }

    /// Moves backward from the current item. No-op without a current item.
    ///
    /// # Errors
    ///
    /// Returns an error when the current item left the collection.
    pub fn previous(&mut self) -> Result<()> {
        match self.navigation.current_id().cloned() {
            Some(current) => self.select_previous(&current),
            None => Ok(()),
        }
    }

    fn ignored_after_close(&self, request: &'static str) -> bool {
        if self.closed {
            tracing::warn!(request, "ignored on a closed lightbox");
        }
        self.closed
    }

    /// The single place the displayed item changes.
    fn transition(&mut self, transition: Transition) {
        self.interaction.force_zoom_off();

        let direction =
            self.navigation
                .direction_to(&self.collection, transition.index, transition.hint);
        let Transition { change, .. } = transition;
        tracing::debug!(
            item = %change.slides.current.id,
            index = change.index,
            action = change.action.as_str(),
            ?direction,
            "slide changed"
        );
        self.navigation.commit(change.slides.current.clone(), direction);

        self.callbacks.slide_change.invoke(&change);
        self.resync();
    }

    /// Replaces the collection. The displayed item is kept as is.
    pub fn set_collection(&mut self, collection: Collection) {
        if self.collection.same_as(&collection) {
            return;
        }
        tracing::debug!(items = collection.len(), "collection replaced");
        self.collection = collection;
        self.resync();
    }

    // ---------------------------------------------------------------------
    // Interaction modes
    // ---------------------------------------------------------------------

    /// Toggles zoom on the current item. Ignored when pan/zoom is disabled
    /// or the lightbox is closed.
    pub fn set_zoom(&mut self, enabled: bool) {
        if enabled && self.ignored_after_close("zoom") {
            return;
        }
        if self.interaction.set_zoom(enabled) {
            self.resync();
        }
    }

    /// Starts or stops autoplay.
    pub fn set_autoplay(&mut self, enabled: bool) {
        if enabled {
            if self.closed {
                tracing::warn!("autoplay requested on a closed lightbox");
                return;
            }
            self.interaction.start_autoplay(self.platform.timer.as_mut());
        } else {
            self.interaction.stop_autoplay();
        }
    }

    /// Handles one autoplay timer tick.
    pub fn autoplay_tick(&mut self, at: Instant) {
        if self.interaction.accept_tick(at) {
            self.advance("autoplay tick");
        }
    }

    /// Records a key press at `at`. Ignored unless the key subscription is
    /// live.
    pub fn key_pressed(&mut self, key: Key, at: Instant) {
        if !self.lifecycle.keyboard_active() {
            tracing::trace!(?key, "key ignored, no live subscription");
            return;
        }
        self.record_activity(at);
        self.interaction.push_key(key, at);
    }

    /// Records user input for idle detection.
    pub fn record_activity(&mut self, at: Instant) {
        if self.interaction.record_activity(at) {
            self.resync();
        }
    }

    /// Advances time: flushes a settled key press and polls idleness.
    ///
    /// Returns [`Effect::Closed`] when a settled Escape closed the lightbox.
    pub fn tick(&mut self, now: Instant) -> Effect {
        self.interaction.anchor_cycle(now);

        if let Some(key) = self.interaction.settled_key(now) {
            match route_key(&key) {
                Some(KeyAction::Next) => self.advance("key"),
                Some(KeyAction::Previous) => {
                    if let Err(err) = self.previous() {
                        tracing::warn!(%err, "key navigation failed");
                    }
                }
                Some(KeyAction::Close) => {
                    self.close();
                    return Effect::Closed;
                }
                None => {}
            }
        }

        if self.interaction.poll_idle(now) {
            tracing::debug!(idle = self.interaction.state().idle, "idle changed");
            self.resync();
        }
        Effect::None
    }

    fn advance(&mut self, origin: &'static str) {
        if let Err(err) = self.next() {
            tracing::warn!(%err, origin, "navigation failed");
        }
    }

    // ---------------------------------------------------------------------
    // Actions
    // ---------------------------------------------------------------------

    /// Requests fullscreen for the current image. Stops autoplay first.
    pub fn request_fullscreen(&mut self) {
        self.interaction.stop_autoplay();
        let target =
            fullscreen::fullscreen_target(self.navigation.current(), self.interaction.state().zoom);
        fullscreen::request_fullscreen(self.platform.fullscreen.as_mut(), target);
    }

    /// Builds a download request for the current item.
    #[must_use]
    pub fn download(&self) -> Option<DownloadRequest> {
        self.navigation.current().map(DownloadRequest::for_item)
    }

    /// Closes the lightbox: tells the store, reports the item on display,
    /// then releases every resource.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.platform.store.dispatch(StoreAction::CloseLightbox);
        let event = LightboxEvent {
            opened: false,
            current_slide: self.navigation.current().cloned(),
        };
        self.callbacks.closed.invoke(&event);
        self.unmount();
        tracing::debug!("lightbox closed");
    }

    /// Releases every resource without reporting anything. Idempotent.
    pub fn unmount(&mut self) {
        self.closed = true;
        self.interaction.shutdown();
        self.lifecycle.unmount(self.platform.stage.as_mut());
    }

    // ---------------------------------------------------------------------
    // Message handling
    // ---------------------------------------------------------------------

    pub fn update(&mut self, message: Message) -> Effect {
        let outcome = match message {
            Message::SelectItem(id) => self.select_item(&id),
            Message::Next => self.next(),
            Message::Previous => self.previous(),
            Message::Close => {
                self.close();
                return Effect::Closed;
            }
            Message::RequestFullscreen => {
                self.request_fullscreen();
                Ok(())
            }
            Message::Download => {
                return self.download().map_or(Effect::None, Effect::Download);
            }
            Message::SetZoom(enabled) => {
                self.set_zoom(enabled);
                Ok(())
            }
            Message::SetAutoplay(enabled) => {
                self.set_autoplay(enabled);
                Ok(())
            }
            Message::AutoplayTick(at) => {
                self.autoplay_tick(at);
                Ok(())
            }
            Message::KeyPressed { key, at } => {
                self.key_pressed(key, at);
                Ok(())
            }
            Message::Activity(at) => {
                self.record_activity(at);
                Ok(())
            }
            Message::Tick(now) => return self.tick(now),
            Message::SetCollection(collection) => {
                self.set_collection(collection);
                Ok(())
            }
        };
        if let Err(err) = outcome {
            tracing::debug!(%err, "message rejected");
        }
        Effect::None
    }

    fn resync(&mut self) {
        if self.closed {
            return;
        }
        let inputs = SyncInputs {
            current: self.navigation.current(),
            collection: &self.collection,
            settings: &self.options.settings,
            interaction: self.interaction.state(),
            idle_enabled: self.interaction.idle_enabled(),
        };
        if let Some(first) = self.lifecycle.sync(inputs, &mut self.platform) {
            self.navigation.assume(first);
        }
    }
}

impl Drop for Lightbox {
    fn drop(&mut self) {
        self.unmount();
    }
}

impl fmt::Debug for Lightbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lightbox")
            .field("items", &self.collection.len())
            .field("navigation", &self.navigation)
            .field("interaction", &self.interaction)
            .field("lifecycle", &self.lifecycle)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}
