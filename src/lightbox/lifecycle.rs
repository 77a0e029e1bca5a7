// SPDX-License-Identifier: MPL-2.0
//! Side-effecting resources tied to the lightbox being mounted.
//!
//! A sync pass always tears the previous resources down before acquiring
//! the new ones, so there is never more than one key subscription or zoom
//! controller alive.

use super::Platform;
use crate::application::port::{
    ImageTarget, ImageVariant, Region, Release, StageSurface, ZoomController, ZoomOptions,
    BODY_OPENED_CLASS, STAGE_IDLE_CLASS,
};
use crate::config::Settings;
use crate::domain::gallery::{Collection, InteractionState, Item, ItemId, ZoomFactor};
use std::fmt;

/// Everything a sync pass depends on.
#[derive(Debug, Clone, Copy)]
pub struct SyncInputs<'a> {
    pub current: Option<&'a Item>,
    pub collection: &'a Collection,
    pub settings: &'a Settings,
    pub interaction: InteractionState,
    pub idle_enabled: bool,
}

/// Values compared between passes to skip redundant work.
#[derive(Debug, Clone)]
struct SyncKey {
    current: Option<ItemId>,
    collection: Collection,
    keyboard_disabled: bool,
    panzoom_disabled: bool,
    zoom: bool,
    idle: bool,
    idle_enabled: bool,
}

impl SyncKey {
    fn of(inputs: &SyncInputs<'_>) -> Self {
        Self {
            current: inputs.current.map(|item| item.id.clone()),
            collection: inputs.collection.clone(),
            keyboard_disabled: inputs.settings.disable_keyboard_controls,
            panzoom_disabled: inputs.settings.disable_panzoom,
            zoom: inputs.interaction.zoom,
            idle: inputs.interaction.idle,
            idle_enabled: inputs.idle_enabled,
        }
    }
}

impl PartialEq for SyncKey {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
            && self.collection.same_as(&other.collection)
            && self.keyboard_disabled == other.keyboard_disabled
            && self.panzoom_disabled == other.panzoom_disabled
            && self.zoom == other.zoom
            && self.idle == other.idle
            && self.idle_enabled == other.idle_enabled
    }
}

/// A zoom controller that is disposed exactly once.
pub struct ZoomHandle(Option<Box<dyn ZoomController>>);

impl ZoomHandle {
    #[must_use]
    pub fn new(controller: Box<dyn ZoomController>) -> Self {
        Self(Some(controller))
    }

    pub fn dispose(&mut self) {
        if let Some(mut controller) = self.0.take() {
            controller.dispose();
        }
    }
}

impl Drop for ZoomHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for ZoomHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomHandle")
            .field("disposed", &self.0.is_none())
            .finish()
    }
}

#[derive(Debug, Default)]
pub struct Lifecycle {
    last: Option<SyncKey>,
    key_guard: Option<Release>,
    zoom: Option<ZoomHandle>,
    scroll_locked: bool,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn keyboard_active(&self) -> bool {
        self.key_guard.is_some()
    }

    #[must_use]
    pub fn zoom_active(&self) -> bool {
        self.zoom.is_some()
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.last.is_some()
    }

    /// Re-synchronises resources with `inputs`.
    ///
    /// Returns the first collection item when there was no current item;
    /// the caller adopts it without notifying anyone.
    pub fn sync(&mut self, inputs: SyncInputs<'_>, platform: &mut Platform) -> Option<Item> {
        let mut key = SyncKey::of(&inputs);
        if self.last.as_ref() == Some(&key) {
            return None;
        }

        self.teardown(platform.stage.as_mut());

        if inputs.idle_enabled {
            platform
                .stage
                .set_class(Region::Stage, STAGE_IDLE_CLASS, inputs.interaction.idle);
        }

        if inputs.interaction.zoom && !inputs.settings.disable_panzoom {
            if let Some(item) = inputs.current {
                let target = ImageTarget {
                    item: item.id.clone(),
                    source: item.source.clone(),
                    variant: ImageVariant::Zoomed,
                };
                let mut controller = platform.zoom.attach(&target, ZoomOptions::default());
                controller.zoom_abs(0.0, 0.0, ZoomFactor::initial());
                controller.move_to(0.0, 0.0);
                tracing::debug!(item = %item.id, "zoom controller attached");
                self.zoom = Some(ZoomHandle::new(controller));
            }
        }

        let defaulted = match inputs.current {
            Some(_) => None,
            None => inputs.collection.first().cloned(),
        };
        if let Some(item) = &defaulted {
            tracing::debug!(item = %item.id, "no current item, defaulting to first");
            key.current = Some(item.id.clone());
        }

        if !inputs.settings.disable_keyboard_controls {
            self.key_guard = Some(platform.keyboard.subscribe());
        }

        platform.stage.set_class(Region::Body, BODY_OPENED_CLASS, true);
        platform.stage.set_page_scroll(false);
        self.scroll_locked = true;

        self.last = Some(key);
        defaulted
    }

    /// Releases every resource. Safe to call repeatedly.
    pub fn unmount(&mut self, stage: &mut dyn StageSurface) {
        self.teardown(stage);
        self.last = None;
    }

    fn teardown(&mut self, stage: &mut dyn StageSurface) {
        if std::mem::take(&mut self.scroll_locked) {
            stage.set_class(Region::Body, BODY_OPENED_CLASS, false);
            stage.set_page_scroll(true);
        }
        if let Some(mut guard) = self.key_guard.take() {
            guard.release();
        }
        if let Some(mut zoom) = self.zoom.take() {
            zoom.dispose();
        }
    }
}
