// SPDX-License-Identifier: MPL-2.0
//! Fullscreen trigger.

use crate::application::port::{FullscreenPort, ImageTarget, ImageVariant};
use crate::domain::gallery::Item;

/// The rendered image fullscreen should target.
#[must_use]
pub fn fullscreen_target(current: Option<&Item>, zoom_enabled: bool) -> Option<ImageTarget> {
    let item = current?;
    Some(ImageTarget {
        item: item.id.clone(),
        source: item.source.clone(),
        variant: if zoom_enabled {
            ImageVariant::Zoomed
        } else {
            ImageVariant::Plain
        },
    })
}

/// Requests fullscreen for `target` when the platform supports it.
///
/// Returns whether a request was issued.
pub fn request_fullscreen(port: &mut dyn FullscreenPort, target: Option<ImageTarget>) -> bool {
    let Some(target) = target else {
        tracing::debug!("fullscreen requested without a current item");
        return false;
    };
    if !port.is_supported() {
        tracing::debug!("fullscreen not supported, request dropped");
        return false;
    }
    port.request(&target);
    true
}
