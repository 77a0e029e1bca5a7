// SPDX-License-Identifier: MPL-2.0
//! Global key-event subscription port.

use super::Release;

/// Key values the lightbox reacts to. Everything else is carried as
/// [`Key::Other`] so debouncing still sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ArrowDown,
    Escape,
    Other(String),
}

impl Key {
    /// Parses a DOM-style key name (`"ArrowRight"`, `"Escape"`, ...).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowRight" => Key::ArrowRight,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowUp" => Key::ArrowUp,
            "ArrowDown" => Key::ArrowDown,
            "Escape" => Key::Escape,
            other => Key::Other(other.to_string()),
        }
    }
}

/// Source of global keydown events.
///
/// While the returned guard is alive, the host forwards key presses to
/// [`Lightbox::key_pressed`](crate::lightbox::Lightbox::key_pressed).
pub trait KeyboardSource {
    /// Starts listening and returns the unsubscribe handle.
    fn subscribe(&mut self) -> Release;
}
