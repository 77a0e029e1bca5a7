// SPDX-License-Identifier: MPL-2.0
//! Pan/zoom gesture port.

use crate::domain::gallery::{zoom_bounds, ItemId, ZoomFactor};

/// Which rendering of the current image is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageVariant {
    Plain,
    Zoomed,
}

/// Reference to the rendered image a gesture controller or fullscreen
/// request binds to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageTarget {
    pub item: ItemId,
    pub source: String,
    pub variant: ImageVariant,
}

/// Options passed to a new zoom controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomOptions {
    /// Keep the image within its container while panning.
    pub bounds: bool,
    pub max_zoom: f32,
    pub min_zoom: f32,
}

impl Default for ZoomOptions {
    fn default() -> Self {
        Self {
            bounds: true,
            max_zoom: zoom_bounds::MAX_FACTOR,
            min_zoom: zoom_bounds::MIN_FACTOR,
        }
    }
}

/// A live zoom controller bound to one image.
pub trait ZoomController {
    /// Zooms to an absolute factor around the given point.
    fn zoom_abs(&mut self, x: f32, y: f32, factor: ZoomFactor);

    /// Pans to the given offset.
    fn move_to(&mut self, x: f32, y: f32);

    /// Detaches all gesture handlers. Called exactly once per controller.
    fn dispose(&mut self);
}

/// Factory for zoom controllers.
pub trait ZoomGestures {
    fn attach(&mut self, target: &ImageTarget, options: ZoomOptions) -> Box<dyn ZoomController>;
}
