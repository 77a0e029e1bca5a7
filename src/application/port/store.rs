// SPDX-License-Identifier: MPL-2.0
//! External store port.

/// Actions the lightbox sends to the store that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    CloseLightbox,
}

/// The store owning the collection and the open/closed flag.
pub trait StoreDispatcher {
    fn dispatch(&mut self, action: StoreAction);
}
