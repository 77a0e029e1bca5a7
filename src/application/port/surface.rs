// SPDX-License-Identifier: MPL-2.0
//! Visual surface port: class toggling and scroll lock.

/// Class applied to the stage while the user is idle.
pub const STAGE_IDLE_CLASS: &str = "lightbox-idle";

/// Class applied to the page body while the lightbox is mounted.
pub const BODY_OPENED_CLASS: &str = "lightbox-opened";

/// Regions of the host surface the lightbox decorates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The lightbox container.
    Stage,
    /// The page hosting the lightbox.
    Body,
}

pub trait StageSurface {
    /// Adds (`present = true`) or removes a class. Removing an absent class
    /// is a no-op.
    fn set_class(&mut self, region: Region, class: &'static str, present: bool);

    /// Enables or suppresses page scrolling.
    fn set_page_scroll(&mut self, enabled: bool);
}
