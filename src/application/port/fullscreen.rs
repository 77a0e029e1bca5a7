// SPDX-License-Identifier: MPL-2.0
//! Platform fullscreen port.

use super::ImageTarget;

pub trait FullscreenPort {
    /// Whether the platform can enter fullscreen at all.
    fn is_supported(&self) -> bool;

    /// Requests fullscreen for the rendered image.
    fn request(&mut self, target: &ImageTarget);
}
